//! Application state.
//!
//! [`AppState`] is the single source of truth for everything the user sees:
//! the current screen, the registration form, the listing and the map
//! viewport. It is only mutated by the event handler.

use super::modes::Screen;
use crate::domain::VehicleDraft;
use crate::registry::RegistryLister;
use crate::ui::theme::Theme;
use crate::yard::{Viewport, VisibleElement, YardMap};
use std::collections::HashSet;
use std::fmt;

/// Width of the map view in screen units.
pub const MAP_VIEW_WIDTH: f64 = 400.0;

/// Height of the map view in screen units.
pub const MAP_VIEW_HEIGHT: f64 = 300.0;

/// Severity of a [`Notice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A message for the user, the terminal equivalent of an alert dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, title, message)
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, title, message)
    }

    fn new(level: NoticeLevel, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            message: message.into(),
        }
    }

    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self.level, NoticeLevel::Error)
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.message)
    }
}

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current navigation destination.
    pub screen: Screen,

    /// Registration form contents. Kept across failed saves.
    pub form: VehicleDraft,

    /// A save is outstanding; further submits are ignored.
    pub submitting: bool,

    /// A plate capture is outstanding; further requests are ignored.
    pub capturing: bool,

    /// Listing view over the registry.
    pub listing: RegistryLister,

    /// Static yard layout.
    pub yard: YardMap,

    /// Pan/zoom state of the yard map.
    pub viewport: Viewport,

    /// Color scheme for rendering.
    pub theme: Theme,
}

impl AppState {
    /// Fresh state on the home screen with an empty form.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            screen: Screen::Home,
            form: VehicleDraft::default(),
            submitting: false,
            capturing: false,
            listing: RegistryLister::new(),
            yard: YardMap::standard(),
            viewport: Viewport::new(MAP_VIEW_WIDTH, MAP_VIEW_HEIGHT),
            theme,
        }
    }

    /// Upper-cased plates of the records currently loaded in the listing.
    #[must_use]
    pub fn registered_plates(&self) -> HashSet<String> {
        self.listing
            .vehicles()
            .iter()
            .map(|v| v.plate.to_uppercase())
            .collect()
    }

    /// Map elements inside the viewport, with registered motorcycles marked.
    #[must_use]
    pub fn visible_map_elements(&self) -> Vec<VisibleElement> {
        let plates = self.registered_plates();
        self.yard
            .visible_elements(&self.viewport, |plate| plates.contains(&plate.to_uppercase()))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::VehicleRecord;
    use crate::yard::ElementKind;

    #[test]
    fn registered_motorcycles_are_marked_on_the_map() {
        let mut state = AppState::default();
        state.listing.loaded(vec![VehicleRecord {
            plate: "xyz7f89".into(),
            brand: "Yamaha".into(),
            model: "Factor 150".into(),
            color: "Blue".into(),
            manufacture_year: "2021".into(),
            model_year: "2021".into(),
            chassis: "9C6RG3150M0000001".into(),
        }]);

        let marked: Vec<_> = state
            .visible_map_elements()
            .into_iter()
            .filter(|e| e.kind == ElementKind::Motorcycle)
            .map(|e| (e.id, e.registered))
            .collect();
        assert_eq!(marked, vec![("MOTO002", true)]);
    }

    #[test]
    fn notice_display() {
        let notice = Notice::error("Error", "all fields are required");
        assert!(notice.is_error());
        assert_eq!(notice.to_string(), "Error: all fields are required");
    }
}
