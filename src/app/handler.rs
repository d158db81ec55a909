//! Event handling and state transition logic.
//!
//! [`handle_event`] is the only place application state changes. It is pure
//! with respect to I/O: registry access and plate capture are requested as
//! [`Action`]s and their outcomes come back as events.
//!
//! # Event Types
//!
//! - **Navigation**: `Navigate`
//! - **Form**: `FieldChanged`, `Submit`
//! - **Capture**: `RequestCapture`, `PlateRecognized`, `CaptureCancelled`, `CaptureFailed`
//! - **Listing and map**: `Filter`, `Map`
//! - **Worker**: `WorkerResponse` with typed message variants
//!
//! # Example
//!
//! ```rust
//! use radar_motu::app::{handle_event, Action, AppState, Event, Screen};
//! use radar_motu::worker::WorkerMessage;
//!
//! let mut state = AppState::default();
//! let (redraw, actions) = handle_event(&mut state, &Event::Navigate(Screen::List))?;
//! assert!(redraw);
//! assert_eq!(actions, vec![Action::PostToWorker(WorkerMessage::LoadVehicles)]);
//! # Ok::<(), radar_motu::RadarMotuError>(())
//! ```

use super::modes::{MapControl, Screen};
use super::state::Notice;
use crate::app::{Action, AppState};
use crate::capture::{CaptureSource, RecognitionResult};
use crate::domain::error::Result;
use crate::domain::{accept_recognized_plate, Field};
use crate::worker::{WorkerMessage, WorkerResponse};

/// Events from the user, the capture collaborator or the registry worker.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The user opened a screen.
    ///
    /// Opening the list or the map reloads the registry every time, not only
    /// the first time.
    Navigate(Screen),

    /// The user edited a form field.
    FieldChanged {
        field: Field,
        value: String,
    },

    /// The user pressed the register button.
    Submit,

    /// The user asked to fill the plate from a photo.
    RequestCapture(CaptureSource),

    /// The recognition service answered.
    PlateRecognized(RecognitionResult),

    /// The user backed out of image selection.
    CaptureCancelled,

    /// Acquisition or the recognition request failed.
    CaptureFailed {
        message: String,
    },

    /// The listing filter changed.
    Filter(String),

    /// A pan/zoom gesture on the map.
    Map(MapControl),

    /// Wraps a response from the registry worker.
    WorkerResponse(WorkerResponse),
}

/// Processes an event, mutates application state, and returns actions to
/// execute.
///
/// The boolean is `true` when the visible state changed and the current
/// screen should be redrawn.
///
/// # Errors
///
/// Currently infallible; the `Result` keeps the runtime's error path in one
/// place should a transition ever need to fail.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Navigate(screen) => Ok(navigate(state, *screen)),
        Event::FieldChanged { field, value } => {
            state.form.set(*field, value);
            Ok((true, vec![]))
        }
        Event::Submit => Ok(submit(state)),
        Event::RequestCapture(source) => {
            if state.capturing {
                tracing::debug!(%source, "capture already in flight, ignoring request");
                return Ok((false, vec![]));
            }
            state.capturing = true;
            tracing::debug!(%source, "capture requested");
            Ok((true, vec![Action::Capture(*source)]))
        }
        Event::PlateRecognized(result) => {
            state.capturing = false;
            Ok(plate_recognized(state, result))
        }
        Event::CaptureCancelled => {
            state.capturing = false;
            tracing::debug!("capture cancelled");
            Ok((true, vec![]))
        }
        Event::CaptureFailed { message } => {
            state.capturing = false;
            tracing::warn!(error = %message, "plate capture failed");
            Ok((
                true,
                vec![Action::Notify(Notice::error(
                    "Recognition failed",
                    message.clone(),
                ))],
            ))
        }
        Event::Filter(query) => {
            state.listing.set_filter(query.clone());
            Ok((true, vec![]))
        }
        Event::Map(control) => {
            match *control {
                MapControl::ZoomIn => state.viewport.zoom_in(),
                MapControl::ZoomOut => state.viewport.zoom_out(),
                MapControl::Pan { dx, dy } => state.viewport.pan(dx, dy),
                MapControl::Reset => state.viewport.reset(),
            }
            Ok((true, vec![]))
        }
        Event::WorkerResponse(response) => Ok(worker_response(state, response)),
    }
}

fn navigate(state: &mut AppState, screen: Screen) -> (bool, Vec<Action>) {
    tracing::debug!(from = ?state.screen, to = ?screen, "navigating");
    state.screen = screen;

    if screen.reads_registry() {
        state.listing.begin_refresh();
        return (true, vec![Action::PostToWorker(WorkerMessage::LoadVehicles)]);
    }

    (true, vec![])
}

fn submit(state: &mut AppState) -> (bool, Vec<Action>) {
    if state.submitting {
        tracing::debug!("save already in flight, ignoring submit");
        return (false, vec![]);
    }

    match state.form.to_record() {
        Ok(record) => {
            state.submitting = true;
            tracing::debug!(plate = %record.plate, "submitting vehicle");
            (
                true,
                vec![Action::PostToWorker(WorkerMessage::AppendVehicle { record })],
            )
        }
        Err(e) => {
            tracing::debug!(error = %e, "registration rejected");
            (false, vec![Action::Notify(Notice::error("Error", e.to_string()))])
        }
    }
}

fn plate_recognized(state: &mut AppState, result: &RecognitionResult) -> (bool, Vec<Action>) {
    match result {
        RecognitionResult::Recognized(text) => match accept_recognized_plate(text) {
            Ok(plate) => {
                tracing::info!(%plate, "plate recognized");
                state.form.set(Field::Plate, &plate);
                (
                    true,
                    vec![Action::Notify(Notice::success("Plate recognized", plate))],
                )
            }
            Err(e) => {
                tracing::debug!(text = %text, "recognized text rejected");
                (
                    true,
                    vec![Action::Notify(Notice::error("Invalid plate", e.to_string()))],
                )
            }
        },
        RecognitionResult::Unrecognized(reason) => {
            tracing::debug!(%reason, "plate not recognized");
            (
                true,
                vec![Action::Notify(Notice::error("Plate not recognized", reason.clone()))],
            )
        }
    }
}

fn worker_response(state: &mut AppState, response: &WorkerResponse) -> (bool, Vec<Action>) {
    match response {
        WorkerResponse::VehiclesLoaded { vehicles } => {
            state.listing.loaded(vehicles.clone());
            (true, vec![])
        }
        WorkerResponse::LoadFailed { message } => {
            state.listing.load_failed(message.clone());
            (
                true,
                vec![Action::Notify(Notice::error(
                    "Could not load motorcycles",
                    message.clone(),
                ))],
            )
        }
        WorkerResponse::VehicleAppended { record, count } => {
            state.submitting = false;
            state.form.clear();
            (
                true,
                vec![Action::Notify(Notice::success(
                    "Motorcycle registered",
                    format!("{} saved ({count} in registry)", record.plate),
                ))],
            )
        }
        WorkerResponse::AppendFailed { message } => {
            state.submitting = false;
            (
                true,
                vec![Action::Notify(Notice::error(
                    "Could not save motorcycle",
                    message.clone(),
                ))],
            )
        }
    }
}
