//! Navigation destinations and map controls.
//!
//! The application has five screens. Only the register and list screens touch
//! the registry; the map reads it to mark known plates.

use std::fmt;

/// A navigation destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    #[default]
    Home,
    Register,
    List,
    Map,
    About,
}

impl Screen {
    /// All destinations in drawer order.
    pub const ALL: [Self; 5] = [Self::Home, Self::Register, Self::List, Self::Map, Self::About];

    /// Title shown in headers and the drawer.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Register => "Register motorcycle",
            Self::List => "Registered motorcycles",
            Self::Map => "Yard map",
            Self::About => "About",
        }
    }

    /// Whether arriving at this screen reloads the registry.
    #[must_use]
    pub const fn reads_registry(self) -> bool {
        matches!(self, Self::List | Self::Map)
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// A pan/zoom gesture on the yard map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MapControl {
    ZoomIn,
    ZoomOut,
    /// Screen-space offset.
    Pan { dx: f64, dy: f64 },
    Reset,
}
