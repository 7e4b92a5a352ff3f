use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use panel_core::{CorrectionRequest, SubmissionId};
use panel_logging::{panel_info, panel_warn};

use crate::submit::{ReqwestSubmitter, SubmitSettings, Submitter};
use crate::{EngineEvent, FailureKind, RequestFailure};

enum EngineCommand {
    Submit {
        submission_id: SubmissionId,
        request: CorrectionRequest,
    },
    Stop,
}

/// Runs submissions on a background tokio runtime.
///
/// Every submission is spawned independently: nothing is queued behind an
/// in-flight request and nothing can be cancelled once sent, short of
/// stopping the whole engine.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
    stopped: AtomicBool,
}

impl EngineHandle {
    pub fn new(settings: SubmitSettings) -> io::Result<Self> {
        Self::with_submitter(Arc::new(ReqwestSubmitter::new(settings)))
    }

    pub fn with_submitter(submitter: Arc<dyn Submitter>) -> io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                match command {
                    EngineCommand::Submit {
                        submission_id,
                        request,
                    } => {
                        let submitter = submitter.clone();
                        let event_tx = event_tx.clone();
                        runtime.spawn(async move {
                            run_submission(submitter.as_ref(), submission_id, request, event_tx)
                                .await;
                        });
                    }
                    EngineCommand::Stop => break,
                }
            }
            panel_info!("Submission engine stopped");
        });

        Ok(Self {
            cmd_tx,
            event_rx,
            stopped: AtomicBool::new(false),
        })
    }

    /// Hands the request to the background runtime.
    ///
    /// Fails when the engine is stopped; no completion event follows then.
    pub fn submit(
        &self,
        submission_id: SubmissionId,
        request: CorrectionRequest,
    ) -> Result<(), RequestFailure> {
        let sent = !self.stopped.load(Ordering::Acquire)
            && self
                .cmd_tx
                .send(EngineCommand::Submit {
                    submission_id,
                    request,
                })
                .is_ok();
        if sent {
            return Ok(());
        }
        panel_warn!("Engine stopped; rejecting submission {}", submission_id);
        Err(RequestFailure::new(
            FailureKind::EngineStopped,
            "submission engine stopped",
        ))
    }

    /// Shuts the runtime down; in-flight submissions never complete.
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::Release);
        let _ = self.cmd_tx.send(EngineCommand::Stop);
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn run_submission(
    submitter: &dyn Submitter,
    submission_id: SubmissionId,
    request: CorrectionRequest,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    let result = submitter.submit(&request).await;
    let _ = event_tx.send(EngineEvent::SubmissionCompleted {
        submission_id,
        result,
    });
}
