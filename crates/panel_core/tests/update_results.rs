use panel_core::{
    update, CorrectionResult, Effect, Msg, PanelPhase, PanelState, SubmissionId,
};
use pretty_assertions::assert_eq;
use serde_json::json;

fn submit(state: PanelState, image_url: &str, output_url: &str) -> (PanelState, SubmissionId) {
    let (state, _) = update(state, Msg::ImageUrlChanged(image_url.to_string()));
    let (state, _) = update(state, Msg::OutputUrlChanged(output_url.to_string()));
    let (state, effects) = update(state, Msg::SubmitClicked);
    let id = effects
        .iter()
        .map(|effect| match effect {
            Effect::Submit { submission_id, .. } => *submission_id,
        })
        .next()
        .expect("submit effect");
    (state, id)
}

fn success(adjustments: serde_json::Value) -> CorrectionResult {
    CorrectionResult {
        adjustments: Some(adjustments),
        status: Some("submitted".to_string()),
    }
}

#[test]
fn success_renders_params_and_after_preview() {
    let (state, id) = submit(PanelState::new(), "http://x/a.jpg", "http://x/out.jpg");

    let (state, effects) = update(
        state,
        Msg::SubmissionFinished {
            submission_id: id,
            outcome: Ok(success(json!({"hue": 5}))),
        },
    );

    let view = state.view();
    assert!(effects.is_empty());
    assert_eq!(view.result_text, r#"Submitted. Params: {"hue":5}"#);
    assert_eq!(view.after_preview.as_deref(), Some("http://x/out.jpg"));
    assert_eq!(view.phase, PanelPhase::Idle);
}

#[test]
fn params_keep_server_key_order() {
    let (state, id) = submit(PanelState::new(), "u", "o");

    let (state, _) = update(
        state,
        Msg::SubmissionFinished {
            submission_id: id,
            outcome: Ok(success(json!({"depth": {"average_depth": 1.5}, "analysis": null}))),
        },
    );

    assert_eq!(
        state.view().result_text,
        r#"Submitted. Params: {"depth":{"average_depth":1.5},"analysis":null}"#
    );
}

#[test]
fn integral_floats_print_like_the_browser() {
    let (state, id) = submit(PanelState::new(), "u", "o");
    let adjustments = json!({
        "depth": {"average_depth": 1.0},
        "analysis": {"brightness": 0.5, "contrast": 0.1, "avg_red": 50.0}
    });

    let (state, _) = update(
        state,
        Msg::SubmissionFinished {
            submission_id: id,
            outcome: Ok(success(adjustments)),
        },
    );

    assert_eq!(
        state.view().result_text,
        r#"Submitted. Params: {"depth":{"average_depth":1},"analysis":{"brightness":0.5,"contrast":0.1,"avg_red":50}}"#
    );
}

#[test]
fn missing_adjustments_render_as_null() {
    let (state, id) = submit(PanelState::new(), "u", "o");

    let (state, _) = update(
        state,
        Msg::SubmissionFinished {
            submission_id: id,
            outcome: Ok(CorrectionResult::default()),
        },
    );

    assert_eq!(state.view().result_text, "Submitted. Params: null");
}

#[test]
fn failure_renders_error_and_leaves_previews() {
    let (state, id) = submit(PanelState::new(), "http://x/a.jpg", "http://x/out.jpg");

    let (state, _) = update(
        state,
        Msg::SubmissionFinished {
            submission_id: id,
            outcome: Err("error sending request".to_string()),
        },
    );

    let view = state.view();
    assert_eq!(view.result_text, "Error: error sending request");
    assert_eq!(view.after_preview, None);
    assert_eq!(view.phase, PanelPhase::Idle);
}

#[test]
fn after_preview_uses_output_url_captured_at_submit() {
    let (state, id) = submit(PanelState::new(), "http://x/a.jpg", "http://x/first.jpg");
    let (state, _) = update(state, Msg::OutputUrlChanged("http://x/edited.jpg".to_string()));

    let (state, _) = update(
        state,
        Msg::SubmissionFinished {
            submission_id: id,
            outcome: Ok(success(json!({}))),
        },
    );

    assert_eq!(state.view().after_preview.as_deref(), Some("http://x/first.jpg"));
}

#[test]
fn last_arrival_wins_the_result_text() {
    let (state, first) = submit(PanelState::new(), "u", "http://x/1.jpg");
    let (state, second) = submit(state, "u", "http://x/2.jpg");
    assert_eq!(state.phase(), PanelPhase::Submitting);

    // Second request answers first, then the first one.
    let (state, _) = update(
        state,
        Msg::SubmissionFinished {
            submission_id: second,
            outcome: Ok(success(json!({"n": 2}))),
        },
    );
    assert_eq!(state.phase(), PanelPhase::Submitting);
    let (state, _) = update(
        state,
        Msg::SubmissionFinished {
            submission_id: first,
            outcome: Ok(success(json!({"n": 1}))),
        },
    );

    let view = state.view();
    assert_eq!(view.result_text, r#"Submitted. Params: {"n":1}"#);
    assert_eq!(view.after_preview.as_deref(), Some("http://x/1.jpg"));
    assert_eq!(view.phase, PanelPhase::Idle);
}

#[test]
fn unknown_submission_is_ignored() {
    let mut state = PanelState::new();
    state.consume_dirty();

    let (mut next, _) = update(
        state,
        Msg::SubmissionFinished {
            submission_id: 42,
            outcome: Err("late".to_string()),
        },
    );

    assert_eq!(next.view().result_text, "");
    assert!(!next.consume_dirty());
}
