use std::io;
use std::time::Duration;

use panel_core::{Effect, Msg};
use panel_engine::{EngineEvent, EngineHandle, SubmitSettings};
use panel_logging::{panel_info, panel_warn};

/// Executes core effects on the engine and maps engine events back to messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: SubmitSettings) -> io::Result<Self> {
        panel_info!("Correction endpoint {}", settings.endpoint);
        Ok(Self::with_engine(EngineHandle::new(settings)?))
    }

    pub fn with_engine(engine: EngineHandle) -> Self {
        Self { engine }
    }

    /// Returns completion messages for effects the engine refused outright.
    pub fn enqueue(&self, effects: Vec<Effect>) -> Vec<Msg> {
        let mut rejected = Vec::new();
        for effect in effects {
            match effect {
                Effect::Submit {
                    submission_id,
                    request,
                } => {
                    if let Err(failure) = self.engine.submit(submission_id, request) {
                        rejected.push(Msg::SubmissionFinished {
                            submission_id,
                            outcome: Err(failure.to_string()),
                        });
                    }
                }
            }
        }
        rejected
    }

    pub fn stop(&self) {
        self.engine.stop();
    }

    pub fn try_next(&self) -> Option<Msg> {
        self.engine.try_recv().map(map_event)
    }

    pub fn wait_next(&self, timeout: Duration) -> Option<Msg> {
        self.engine.recv_timeout(timeout).map(map_event)
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::SubmissionCompleted {
            submission_id,
            result,
        } => Msg::SubmissionFinished {
            submission_id,
            outcome: result.map_err(|failure| {
                panel_warn!(
                    "Submission {} failed ({}): {}",
                    submission_id,
                    failure.kind,
                    failure
                );
                failure.to_string()
            }),
        },
    }
}
