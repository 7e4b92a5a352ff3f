//! Correction panel engine: request IO and effect execution.
mod engine;
mod file;
mod submit;
mod types;

pub use engine::EngineHandle;
pub use file::{load_selected_file, LoadError};
pub use submit::{ReqwestSubmitter, SubmitSettings, Submitter};
pub use types::{EngineEvent, FailureKind, RequestFailure};
