//! Composable UI component renderers.
//!
//! Each component returns the lines it renders instead of printing, so a
//! screen is assembled by concatenating components and written once.
//!
//! # Components
//!
//! - [`header`]: Title bar and separators
//! - [`entries`]: Vehicle listing entries
//! - [`map`]: Visible yard elements
//! - [`form`]: Registration form summary
//! - [`notice`]: User-facing messages
//! - [`empty`]: Empty state message for no items

pub mod empty;
pub mod entries;
pub mod form;
pub mod header;
pub mod map;
pub mod notice;

pub use empty::render_empty_state;
pub use entries::render_vehicle_entries;
pub use form::render_form;
pub use header::{render_border, render_header};
pub use map::render_map_rows;
pub use notice::render_notice;

/// Pads or truncates `text` to exactly `width` characters.
pub(crate) fn fit(text: &str, width: usize) -> String {
    let count = text.chars().count();
    if count > width {
        let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
        cut.push('…');
        cut
    } else {
        format!("{text}{}", " ".repeat(width - count))
    }
}
