//! Background conversion with a channel back to the UI thread.
//!
//! The controller lives on the UI thread and is the only thing that touches
//! [`UiState`]. Each conversion runs as one tokio task that reports through
//! a crossbeam channel; the UI drains it with [`ConversionController::poll_events`].

use std::path::Path;
use std::sync::Arc;

use crossbeam_channel::{unbounded, Receiver, Sender};
use tokio::runtime::Handle;
use tracing::{debug, info, warn};

use super::state::{UiEvent, UiState, PROGRESS_LAUNCHED};
use crate::report::{ConversionResult, Dialog};
use crate::request::ConversionRequest;
use crate::workflow::Workflow;

/// Wakes the UI after an event is queued.
pub type Notifier = Arc<dyn Fn() + Send + Sync>;

pub struct ConversionController {
    state: UiState,
    workflow: Workflow,
    runtime: Handle,
    event_tx: Sender<UiEvent>,
    event_rx: Receiver<UiEvent>,
    notify: Notifier,
}

impl ConversionController {
    pub fn new(workflow: Workflow, runtime: Handle) -> Self {
        let (event_tx, event_rx) = unbounded();

        Self {
            state: UiState::default(),
            workflow,
            runtime,
            event_tx,
            event_rx,
            notify: Arc::new(|| {}),
        }
    }

    /// Install the repaint hook.
    pub fn set_notifier(&mut self, notify: Notifier) {
        self.notify = notify;
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn dismiss_dialog(&mut self) {
        self.state.dismiss_dialog();
    }

    /// Ask the engine for its version in the background; a failure shows
    /// up as the banner in [`UiState::engine_warning`].
    pub fn check_engine(&self) {
        let workflow = self.workflow.clone();
        let tx = self.event_tx.clone();
        let notify = Arc::clone(&self.notify);

        self.runtime.spawn(async move {
            let outcome = match workflow.media().get_version_info().await {
                Ok(version) => {
                    info!("Using {}", version);
                    Ok(version)
                }
                Err(e) => {
                    warn!("Media processor unavailable: {}", e);
                    Err(e.to_string())
                }
            };
            let _ = tx.send(UiEvent::EngineChecked(outcome));
            notify();
        });
    }

    /// Validate `input` and launch a background conversion.
    ///
    /// The path is used exactly as given. Returns false when nothing was
    /// started: a run is already in flight, or validation failed (an error
    /// dialog is raised in that case).
    pub fn start(&mut self, input: &Path) -> bool {
        if self.state.is_running() {
            debug!("Ignoring convert request while a conversion is running");
            return false;
        }

        let request = match ConversionRequest::resolve(input) {
            Ok(request) => request,
            Err(reason) => {
                info!("Rejected {}: {}", input.display(), reason);
                self.state.reject(Dialog::error(reason.to_string()));
                return false;
            }
        };

        self.state.begin();

        let workflow = self.workflow.clone();
        let tx = self.event_tx.clone();
        let notify = Arc::clone(&self.notify);

        self.runtime.spawn(async move {
            let _ = tx.send(UiEvent::Progress(PROGRESS_LAUNCHED));
            notify();

            let result = ConversionResult::from(workflow.run_request(&request).await);

            // The receiver is gone if the window closed mid-run
            let _ = tx.send(UiEvent::Finished(result));
            notify();
        });

        true
    }

    /// Apply every queued event. Returns how many were applied.
    pub fn poll_events(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.event_rx.try_recv() {
            self.state.apply(event);
            applied += 1;
        }
        applied
    }
}
