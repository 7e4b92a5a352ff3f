use crate::PanelPhase;

/// Snapshot of everything the host surface displays.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PanelViewModel {
    pub phase: PanelPhase,
    pub image_url: String,
    pub output_url: String,
    pub selected_file_name: Option<String>,
    /// Source of the "before" image: a `data:` URL of the held file.
    pub before_preview: Option<String>,
    /// Source of the "after" image: the destination URL of the last success.
    pub after_preview: Option<String>,
    pub result_text: String,
    pub in_flight: usize,
    pub dirty: bool,
}
