//! User interface rendering layer.
//!
//! Turns application state into ANSI-styled text. Screens with data are
//! first reduced to view models, then formatted by components.
//!
//! ```text
//! AppState → ListingView / MapView → components → String
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Plain display rows for the listing and map screens
//! - [`renderer`]: Per-screen layout
//! - [`components`]: Header, listing entries, map, form, notice and empty-state renderers
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation

pub mod components;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use components::render_notice;
pub use renderer::{render, DEFAULT_COLS};
pub use theme::Theme;
pub use viewmodel::{EmptyState, HeaderInfo, ListingView, MapView, VehicleRow};
