//! Correction panel core: pure state machine and view-model helpers.
mod effect;
mod msg;
mod preview;
mod request;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use preview::preview_data_url;
pub use request::{
    CorrectionRequest, CorrectionResult, SelectedFile, SubmissionOutcome, DEFAULT_ENDPOINT,
    ERROR_PREFIX, FILE_FIELD, IMAGE_URL_FIELD, OUTPUT_URL_FIELD, SUCCESS_PREFIX,
};
pub use state::{PanelPhase, PanelState, SubmissionId};
pub use update::update;
pub use view_model::PanelViewModel;
