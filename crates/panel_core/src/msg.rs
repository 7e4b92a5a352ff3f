#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// User edited the source image URL field.
    ImageUrlChanged(String),
    /// User edited the destination URL field.
    OutputUrlChanged(String),
    /// User picked a file through the file input.
    FileSelected(crate::SelectedFile),
    /// User dropped one or more files on the preview region.
    FilesDropped(Vec<crate::SelectedFile>),
    /// User submitted the form.
    SubmitClicked,
    /// The engine finished a submission, successfully or not.
    SubmissionFinished {
        submission_id: crate::SubmissionId,
        outcome: crate::SubmissionOutcome,
    },
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
