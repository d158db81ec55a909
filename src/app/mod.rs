//! Application layer coordinating state, events, and actions.
//!
//! Sits between the CLI (main.rs) and the domain, registry and capture
//! layers.
//!
//! # Architecture
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └──── Worker / Capture Outcomes ───┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transitions
//! - [`modes`]: Navigation destinations and map controls
//! - [`runtime`]: Async executor for actions
//! - [`state`]: Central application state container and notices

pub mod actions;
pub mod handler;
pub mod modes;
pub mod runtime;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{MapControl, Screen};
pub use runtime::Runtime;
pub use state::{AppState, Notice, NoticeLevel};
