use std::fmt;
use std::sync::Arc;

/// The fixed local processing endpoint.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/process";

/// Multipart field carrying the uploaded image.
pub const FILE_FIELD: &str = "image";
/// JSON key carrying the source image URL.
pub const IMAGE_URL_FIELD: &str = "image_url";
/// JSON key and multipart field carrying the destination URL.
pub const OUTPUT_URL_FIELD: &str = "output_url";

pub const SUCCESS_PREFIX: &str = "Submitted. Params: ";
pub const ERROR_PREFIX: &str = "Error: ";

/// A file picked or dropped by the user. No type or size validation is done.
#[derive(Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub mime: String,
    pub bytes: Arc<[u8]>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            bytes: bytes.into(),
        }
    }
}

// Image payloads can be large; keep them out of debug output.
impl fmt::Debug for SelectedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectedFile")
            .field("name", &self.name)
            .field("mime", &self.mime)
            .field("len", &self.bytes.len())
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorrectionRequest {
    /// No file held: JSON body with both URLs.
    Json {
        image_url: String,
        output_url: String,
    },
    /// A file is held: multipart body, the URL field is not sent.
    Multipart {
        file: SelectedFile,
        output_url: String,
    },
}

impl CorrectionRequest {
    pub fn output_url(&self) -> &str {
        match self {
            CorrectionRequest::Json { output_url, .. }
            | CorrectionRequest::Multipart { output_url, .. } => output_url,
        }
    }

    pub fn mode_label(&self) -> &'static str {
        match self {
            CorrectionRequest::Json { .. } => "json",
            CorrectionRequest::Multipart { .. } => "multipart",
        }
    }
}

/// Decoded response of the correction endpoint.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CorrectionResult {
    /// Opaque; displayed, never interpreted. `None` when the key is absent.
    pub adjustments: Option<serde_json::Value>,
    pub status: Option<String>,
}

/// Error side carries the already stringified failure.
pub type SubmissionOutcome = Result<CorrectionResult, String>;
