use std::time::{Duration, Instant};

use panel_core::CorrectionRequest;
use panel_engine::{EngineEvent, EngineHandle, FailureKind, SubmitSettings};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn json_request(image_url: &str) -> CorrectionRequest {
    CorrectionRequest::Json {
        image_url: image_url.to_string(),
        output_url: "http://x/out.jpg".to_string(),
    }
}

fn collect_events(engine: &EngineHandle, count: usize) -> Vec<EngineEvent> {
    let deadline = Instant::now() + Duration::from_secs(10);
    let mut events = Vec::new();
    while events.len() < count && Instant::now() < deadline {
        if let Some(event) = engine.recv_timeout(Duration::from_millis(50)) {
            events.push(event);
        }
    }
    events
}

#[tokio::test(flavor = "multi_thread")]
async fn overlapping_submissions_complete_in_arrival_order() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/process"))
        .and(body_json(json!({"image_url": "slow", "output_url": "http://x/out.jpg"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(400))
                .set_body_json(json!({"adjustments": {"n": 1}})),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/process"))
        .and(body_json(json!({"image_url": "fast", "output_url": "http://x/out.jpg"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"adjustments": {"n": 2}})))
        .mount(&server)
        .await;

    let engine = EngineHandle::new(SubmitSettings {
        endpoint: format!("{}/process", server.uri()),
        ..SubmitSettings::default()
    })
    .expect("engine");
    engine.submit(1, json_request("slow")).expect("engine running");
    engine.submit(2, json_request("fast")).expect("engine running");

    let events = tokio::task::spawn_blocking(move || collect_events(&engine, 2))
        .await
        .expect("join");
    let ids: Vec<_> = events
        .iter()
        .map(|event| match event {
            EngineEvent::SubmissionCompleted { submission_id, .. } => *submission_id,
        })
        .collect();
    assert_eq!(ids, vec![2, 1]);
}

#[tokio::test(flavor = "multi_thread")]
async fn failures_are_delivered_as_events() {
    let engine = EngineHandle::new(SubmitSettings {
        endpoint: "not a url".to_string(),
        ..SubmitSettings::default()
    })
    .expect("engine");
    engine.submit(7, json_request("u")).expect("engine running");

    let events = tokio::task::spawn_blocking(move || collect_events(&engine, 1))
        .await
        .expect("join");
    match &events[..] {
        [EngineEvent::SubmissionCompleted {
            submission_id: 7,
            result: Err(_),
        }] => {}
        other => panic!("unexpected events: {other:?}"),
    }
}

#[test]
fn stopped_engine_rejects_submissions() {
    let engine = EngineHandle::new(SubmitSettings::default()).expect("engine");
    engine.stop();

    let err = engine.submit(3, json_request("u")).unwrap_err();

    assert_eq!(err.kind, FailureKind::EngineStopped);
    assert_eq!(err.to_string(), "submission engine stopped");
    assert!(engine.recv_timeout(Duration::from_millis(100)).is_none());
}
