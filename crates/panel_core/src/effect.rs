use crate::{CorrectionRequest, SubmissionId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Send one request to the correction endpoint. Never cancelled.
    Submit {
        submission_id: SubmissionId,
        request: CorrectionRequest,
    },
}
