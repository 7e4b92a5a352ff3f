use std::fmt;

use panel_core::{CorrectionResult, SubmissionId};

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    /// Delivered in arrival order, not submission order.
    SubmissionCompleted {
        submission_id: SubmissionId,
        result: Result<CorrectionResult, RequestFailure>,
    },
}

/// Any failure while building, sending, or decoding a correction request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct RequestFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl RequestFailure {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidEndpoint,
    InvalidFile,
    Network,
    Timeout,
    HttpStatus(u16),
    InvalidBody,
    EngineStopped,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidEndpoint => write!(f, "invalid endpoint"),
            FailureKind::InvalidFile => write!(f, "invalid file part"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::InvalidBody => write!(f, "invalid response body"),
            FailureKind::EngineStopped => write!(f, "engine stopped"),
        }
    }
}
