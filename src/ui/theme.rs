//! Theme management and ANSI escape sequence generation.
//!
//! Output is colored with 24-bit ANSI sequences built from hex colors. Themes
//! are TOML documents: two are built in and a custom one can be loaded from a
//! file. A plain theme disables every escape sequence for non-terminal output.
//!
//! # Built-in Themes
//!
//! - `radar-motu`: Dark green-on-charcoal palette (default)
//! - `radar-motu-light`: Light variant
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! accent = "#22DD44"
//! background = "#1A1D21"
//! text_normal = "#FFFFFF"
//! text_dim = "#A0A0A0"
//! item_bg = "#2C2F33"
//! border = "#4F545C"
//! error_fg = "#FF5555"
//! motorcycle_fg = "#FF6347"
//! zone_fg = "#4F9DDE"
//! box_fg = "#E0B44C"
//! ```

use crate::domain::error::{RadarMotuError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const RADAR_MOTU: &str = include_str!("../../themes/radar-motu.toml");
const RADAR_MOTU_LIGHT: &str = include_str!("../../themes/radar-motu-light.toml");

/// Color scheme for terminal output.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette.
    pub colors: ThemeColors,
    /// Emit no escape sequences at all.
    #[serde(default)]
    pub plain: bool,
}

/// Hex colors for each kind of output.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Titles, success notices, registered markers.
    pub accent: String,
    /// Header bar background.
    pub background: String,
    pub text_normal: String,
    /// Secondary text (labels, hints).
    pub text_dim: String,
    /// Background of listing entry titles.
    pub item_bg: String,
    pub border: String,
    pub error_fg: String,
    pub motorcycle_fg: String,
    pub zone_fg: String,
    pub box_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "radar-motu" => RADAR_MOTU,
            "radar-motu-light" => RADAR_MOTU_LIGHT,
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`RadarMotuError::Config`] if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            RadarMotuError::Config(format!("failed to read theme file {}: {e}", path.display()))
        })?;

        toml::from_str(&contents)
            .map_err(|e| RadarMotuError::Config(format!("failed to parse theme TOML: {e}")))
    }

    /// Same palette with escape sequences disabled.
    #[must_use]
    pub fn into_plain(mut self) -> Self {
        self.plain = true;
        self
    }

    /// Wraps `text` in a foreground color, or returns it untouched in plain
    /// mode.
    #[must_use]
    pub fn paint(&self, hex: &str, text: &str) -> String {
        if self.plain {
            text.to_owned()
        } else {
            format!("{}{text}{}", Self::fg(hex), Self::reset())
        }
    }

    /// Bold variant of [`Theme::paint`].
    #[must_use]
    pub fn paint_bold(&self, hex: &str, text: &str) -> String {
        if self.plain {
            text.to_owned()
        } else {
            format!("{}{}{text}{}", Self::bold(), Self::fg(hex), Self::reset())
        }
    }

    /// Bold `fg` text on a `bg` background, for bars and entry titles.
    #[must_use]
    pub fn paint_on(&self, bg: &str, fg: &str, text: &str) -> String {
        if self.plain {
            text.to_owned()
        } else {
            format!(
                "{}{}{}{text}{}",
                Self::bg(bg),
                Self::bold(),
                Self::fg(fg),
                Self::reset()
            )
        }
    }

    /// Converts a hex color to an RGB tuple; malformed input gives white.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// ANSI 24-bit foreground sequence for a hex color.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background sequence for a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_name("radar-motu").unwrap_or_else(|| Self {
            name: "radar-motu".into(),
            colors: ThemeColors {
                accent: "#22DD44".into(),
                background: "#1A1D21".into(),
                text_normal: "#FFFFFF".into(),
                text_dim: "#A0A0A0".into(),
                item_bg: "#2C2F33".into(),
                border: "#4F545C".into(),
                error_fg: "#FF5555".into(),
                motorcycle_fg: "#FF6347".into(),
                zone_fg: "#4F9DDE".into(),
                box_fg: "#E0B44C".into(),
            },
            plain: false,
        })
    }
}
