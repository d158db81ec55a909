//! Side effects requested by the event handler.
//!
//! [`handle_event`](crate::app::handle_event) never performs I/O. It returns a
//! list of [`Action`]s and the runtime executes them in order, feeding any
//! result back as a new event.

use crate::app::state::Notice;
use crate::capture::CaptureSource;
use crate::worker::WorkerMessage;

/// Commands executed by the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Sends a message to the registry worker.
    ///
    /// The response comes back as
    /// [`Event::WorkerResponse`](crate::app::Event::WorkerResponse).
    PostToWorker(WorkerMessage),

    /// Acquires a plate photo and sends it for recognition.
    ///
    /// The outcome comes back as `PlateRecognized`, `CaptureCancelled` or
    /// `CaptureFailed`.
    Capture(CaptureSource),

    /// Shows a message to the user.
    Notify(Notice),
}
