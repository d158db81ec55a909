//! Action executor.
//!
//! Drives the event loop: an event goes through [`handle_event`], each
//! resulting action is executed, and its outcome is fed back as a new event
//! until the queue is empty. Registry messages run on tokio's blocking pool
//! because the storage backends do synchronous file I/O.

use super::handler::{handle_event, Event};
use super::state::{AppState, Notice};
use super::Action;
use crate::capture::PlateCapture;
use crate::domain::error::{RadarMotuError, Result};
use crate::storage::Storage;
use crate::worker::{RegistryWorker, WorkerMessage, WorkerResponse};
use std::collections::VecDeque;

/// Executes actions against the registry worker and the capture
/// collaborator.
pub struct Runtime<S, C> {
    worker: RegistryWorker<S>,
    capture: C,
}

impl<S, C> Runtime<S, C>
where
    S: Storage + 'static,
    C: PlateCapture,
{
    pub const fn new(worker: RegistryWorker<S>, capture: C) -> Self {
        Self { worker, capture }
    }

    #[must_use]
    pub const fn worker(&self) -> &RegistryWorker<S> {
        &self.worker
    }

    /// Processes `event` and everything it triggers.
    ///
    /// Returns the notices produced along the way, in order.
    ///
    /// # Errors
    ///
    /// Returns an error if a state transition fails or a worker task panics.
    /// Registry and capture failures are not errors here: they come back as
    /// events and end up as notices.
    pub async fn dispatch(&self, state: &mut AppState, event: Event) -> Result<Vec<Notice>> {
        let mut queue = VecDeque::from([event]);
        let mut notices = Vec::new();

        while let Some(event) = queue.pop_front() {
            let (_redraw, actions) = handle_event(state, &event)?;

            for action in actions {
                match action {
                    Action::PostToWorker(message) => {
                        let response = self.post_to_worker(message).await?;
                        queue.push_back(Event::WorkerResponse(response));
                    }
                    Action::Capture(source) => {
                        let event = match self.capture.capture(source).await {
                            Ok(Some(result)) => Event::PlateRecognized(result),
                            Ok(None) => Event::CaptureCancelled,
                            Err(e) => Event::CaptureFailed {
                                message: e.to_string(),
                            },
                        };
                        queue.push_back(event);
                    }
                    Action::Notify(notice) => {
                        tracing::debug!(level = ?notice.level, title = %notice.title, "notice");
                        notices.push(notice);
                    }
                }
            }
        }

        Ok(notices)
    }

    async fn post_to_worker(&self, message: WorkerMessage) -> Result<WorkerResponse> {
        let worker = self.worker.clone();
        tokio::task::spawn_blocking(move || worker.handle_message(message))
            .await
            .map_err(|e| RadarMotuError::Storage(format!("registry worker task failed: {e}")))
    }
}
