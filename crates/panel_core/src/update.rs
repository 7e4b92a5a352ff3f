use panel_logging::panel_info;

use crate::{Effect, Msg, PanelState};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: PanelState, msg: Msg) -> (PanelState, Vec<Effect>) {
    let effects = match msg {
        Msg::ImageUrlChanged(value) => {
            state.set_image_url(value);
            Vec::new()
        }
        Msg::OutputUrlChanged(value) => {
            state.set_output_url(value);
            Vec::new()
        }
        Msg::FileSelected(file) => {
            state.select_file(file);
            Vec::new()
        }
        Msg::FilesDropped(files) => {
            // Only the first dropped file is kept.
            if let Some(file) = files.into_iter().next() {
                state.select_file(file);
            }
            Vec::new()
        }
        Msg::SubmitClicked => {
            // No in-flight guard: overlapping submissions run independently.
            let request = state.build_request();
            let submission_id = state.begin_submission(request.output_url().to_string());
            panel_info!(
                "Submit id={} mode={} in_flight={}",
                submission_id,
                request.mode_label(),
                state.in_flight()
            );
            vec![Effect::Submit {
                submission_id,
                request,
            }]
        }
        Msg::SubmissionFinished {
            submission_id,
            outcome,
        } => {
            match outcome {
                Ok(result) => state.finish_success(submission_id, result),
                Err(error) => state.finish_failure(submission_id, error),
            }
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
