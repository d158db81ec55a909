//! Radar Motu: motorcycle yard companion.
//!
//! Radar Motu keeps a device-local registry of motorcycles and helps yard
//! staff fill it in:
//! - Registration form with field validation
//! - Append-only registry persisted as JSON under a single storage key
//! - Listing that reloads every time it is opened, with fuzzy filtering
//! - Plate capture through a remote OCR service
//! - Static yard map with pan and zoom

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  CLI (main.rs)                                      │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Action dispatching (runtime)                     │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Worker Layer  │   │ Capture       │
//! │ (ui/)         │   │ (worker/)     │   │ (capture/)    │
//! │ - Rendering   │   │ - Registry    │   │ - Image input │
//! │ - Theming     │   │   messages    │   │ - OCR client  │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                              │
//! ┌─────────────────────────────────────────────────────┐
//! │  Registry (registry/) over Storage (storage/)       │
//! │  - Store, codec, lister                             │
//! │  - JSON file and in-memory backends                 │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain, Yard, Infrastructure, Observability        │
//! │  - Records, validation, plate pattern, errors       │
//! │  - Yard layout and viewport                         │
//! │  - Data paths, rotating log file                    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`capture`]: Image acquisition and the OCR HTTP client
//! - [`domain`]: Vehicle records, validation, plate pattern, errors
//! - [`infrastructure`]: Data directory and file locations
//! - [`registry`]: Registry store, codec and listing state
//! - [`storage`]: Key/value storage backends
//! - [`ui`]: Terminal rendering with theme support
//! - [`worker`]: Registry worker messages
//! - [`yard`]: Yard map and viewport
//! - [`observability`]: Log file setup
//!
//! # Configuration
//!
//! Sources, lowest to highest precedence:
//!
//! 1. Built-in defaults
//! 2. `config.toml` in the data directory, or the file given with `--config`
//! 3. `RADAR_MOTU_*` environment variables
//! 4. Command-line flags
//!
//! ```toml
//! ocr_endpoint = "http://localhost:3000/upload"
//! ocr_timeout_secs = 20
//! theme = "radar-motu-light"
//! trace_level = "debug"
//! ```
//!
//! # Example
//!
//! ```rust
//! use radar_motu::app::{Event, Runtime, Screen};
//! use radar_motu::capture::{CaptureSource, PlateCapture, RecognitionResult};
//! use radar_motu::storage::MemoryStorage;
//! use radar_motu::worker::RegistryWorker;
//! use radar_motu::{initialize, Config};
//!
//! struct NoCamera;
//!
//! #[async_trait::async_trait]
//! impl PlateCapture for NoCamera {
//!     async fn capture(&self, _: CaptureSource) -> radar_motu::Result<Option<RecognitionResult>> {
//!         Ok(None)
//!     }
//! }
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let mut state = initialize(&Config::default());
//! let runtime = Runtime::new(RegistryWorker::new(MemoryStorage::new()), NoCamera);
//!
//! runtime.dispatch(&mut state, Event::Navigate(Screen::List)).await?;
//! assert!(state.listing.vehicles().is_empty());
//! # Ok::<(), radar_motu::RadarMotuError>(())
//! # }).unwrap();
//! ```

pub mod app;
pub mod capture;
pub mod domain;
pub mod infrastructure;
pub mod registry;
pub mod storage;
pub mod worker;
pub mod yard;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, Screen};
pub use domain::{RadarMotuError, Result};
pub use ui::Theme;

use crate::capture::OcrClient;
use crate::infrastructure::paths;
use crate::storage::JsonStorage;
use crate::worker::RegistryWorker;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Recognition endpoint used when none is configured.
pub const DEFAULT_OCR_ENDPOINT: &str = "http://191.234.177.200:3000/upload";

/// Per-request timeout for the recognition endpoint, in seconds.
pub const DEFAULT_OCR_TIMEOUT_SECS: u64 = 30;

/// Environment variables and the configuration keys they set.
const ENV_KEYS: [(&str, &str); 6] = [
    ("RADAR_MOTU_DATA_DIR", "data_dir"),
    ("RADAR_MOTU_OCR_ENDPOINT", "ocr_endpoint"),
    ("RADAR_MOTU_OCR_TIMEOUT", "ocr_timeout_secs"),
    ("RADAR_MOTU_TRACE_LEVEL", "trace_level"),
    ("RADAR_MOTU_THEME", "theme"),
    ("RADAR_MOTU_NO_COLOR", "no_color"),
];

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding the registry, the log and the default config file.
    pub data_dir: PathBuf,

    /// Plate recognition endpoint.
    pub ocr_endpoint: String,

    /// Per-request timeout for the recognition endpoint.
    pub ocr_timeout_secs: u64,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    pub theme_file: Option<String>,

    /// Log filter directive: `trace`, `debug`, `info`, `warn`, `error`.
    /// Default: `"info"`
    pub trace_level: Option<String>,

    /// Print without ANSI escapes.
    pub no_color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: paths::get_data_dir(),
            ocr_endpoint: DEFAULT_OCR_ENDPOINT.to_string(),
            ocr_timeout_secs: DEFAULT_OCR_TIMEOUT_SECS,
            theme_name: None,
            theme_file: None,
            trace_level: None,
            no_color: false,
        }
    }
}

impl Config {
    /// Builds a configuration from a string map on top of the defaults.
    ///
    /// # Parsing Rules
    ///
    /// - `data_dir`: `~` is expanded
    /// - `ocr_timeout_secs`: positive integer, else the current value is kept
    /// - `no_color`: `true`/`1`/`yes`
    /// - `theme`, `theme_file`, `trace_level`, `ocr_endpoint`: taken verbatim
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use radar_motu::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("ocr_timeout_secs".to_string(), "5".to_string());
    /// map.insert("trace_level".to_string(), "debug".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.ocr_timeout_secs, 5);
    /// assert_eq!(config.trace_level.as_deref(), Some("debug"));
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        Self::default().merge(map)
    }

    /// Overrides fields with the keys present in `map`.
    #[must_use]
    pub fn merge(mut self, map: &BTreeMap<String, String>) -> Self {
        if let Some(dir) = map.get("data_dir").filter(|d| !d.is_empty()) {
            self.data_dir = paths::expand_tilde(dir);
        }
        if let Some(endpoint) = map.get("ocr_endpoint").filter(|e| !e.is_empty()) {
            self.ocr_endpoint.clone_from(endpoint);
        }
        if let Some(secs) = map
            .get("ocr_timeout_secs")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|s| *s > 0)
        {
            self.ocr_timeout_secs = secs;
        }
        if let Some(theme) = map.get("theme") {
            self.theme_name = Some(theme.clone());
        }
        if let Some(theme_file) = map.get("theme_file") {
            self.theme_file = Some(theme_file.clone());
        }
        if let Some(level) = map.get("trace_level") {
            self.trace_level = Some(level.clone());
        }
        if let Some(flag) = map.get("no_color") {
            self.no_color = matches!(flag.trim().to_lowercase().as_str(), "true" | "1" | "yes");
        }
        self
    }

    /// Resolves the configuration from the config file and the process
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns [`RadarMotuError::Config`] if an explicitly given file is
    /// missing, or any config file cannot be parsed.
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        Self::resolve(config_file, &env_overrides(std::env::vars()))
    }

    /// [`Config::load`] with an explicit environment map.
    ///
    /// `env` holds configuration keys, as returned by [`env_overrides`]. The
    /// data directory from `env` is applied first so the default config file
    /// is looked up in the right place.
    ///
    /// # Errors
    ///
    /// Same as [`Config::load`].
    pub fn resolve(config_file: Option<&Path>, env: &BTreeMap<String, String>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(dir) = env.get("data_dir").filter(|d| !d.is_empty()) {
            config.data_dir = paths::expand_tilde(dir);
        }

        let path = config_file.map_or_else(|| paths::config_file(&config.data_dir), Path::to_path_buf);

        if config_file.is_some() || path.exists() {
            let contents = std::fs::read_to_string(&path).map_err(|e| {
                RadarMotuError::Config(format!("failed to read {}: {e}", path.display()))
            })?;
            config = config.merge(&parse_toml_map(&contents)?);
            tracing::debug!(path = ?path, "config file loaded");
        }

        Ok(config.merge(env))
    }

    /// Opens the JSON-backed registry worker in the data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage file cannot be created or is invalid.
    pub fn open_registry(&self) -> Result<RegistryWorker<JsonStorage>> {
        let storage = JsonStorage::new(paths::registry_file(&self.data_dir))?;
        tracing::debug!(path = %storage.path().display(), "registry storage opened");
        Ok(RegistryWorker::new(storage))
    }

    /// Builds the OCR client for the configured endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`RadarMotuError::Config`] if the HTTP client cannot be built.
    pub fn ocr_client(&self) -> Result<OcrClient> {
        OcrClient::new(
            self.ocr_endpoint.clone(),
            Duration::from_secs(self.ocr_timeout_secs),
        )
    }
}

/// Flattens a TOML document's top-level scalars into a string map.
///
/// # Errors
///
/// Returns [`RadarMotuError::Config`] on invalid TOML.
pub fn parse_toml_map(contents: &str) -> Result<BTreeMap<String, String>> {
    let table: toml::Table = toml::from_str(contents)
        .map_err(|e| RadarMotuError::Config(format!("failed to parse config TOML: {e}")))?;

    Ok(table
        .into_iter()
        .filter_map(|(key, value)| {
            let value = match value {
                toml::Value::String(s) => s,
                toml::Value::Integer(i) => i.to_string(),
                toml::Value::Float(f) => f.to_string(),
                toml::Value::Boolean(b) => b.to_string(),
                _ => return None,
            };
            Some((key, value))
        })
        .collect())
}

/// Picks the `RADAR_MOTU_*` variables out of an environment listing and maps
/// them to configuration keys.
pub fn env_overrides<I>(vars: I) -> BTreeMap<String, String>
where
    I: IntoIterator<Item = (String, String)>,
{
    vars.into_iter()
        .filter_map(|(name, value)| {
            ENV_KEYS
                .iter()
                .find(|(env_name, _)| *env_name == name)
                .map(|(_, key)| ((*key).to_string(), value))
        })
        .collect()
}

/// Creates the initial application state for a configuration.
///
/// The theme comes from `theme_file`, then `theme`, then the default; a theme
/// that fails to load falls back to the default. `no_color` strips escapes.
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing radar-motu");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(paths::expand_tilde(theme_file)).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    let theme = if config.no_color { theme.into_plain() } else { theme };
    AppState::new(theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn bad_numbers_keep_defaults() {
        let config = Config::from_map(&map(&[("ocr_timeout_secs", "soon")]));
        assert_eq!(config.ocr_timeout_secs, DEFAULT_OCR_TIMEOUT_SECS);

        let config = Config::from_map(&map(&[("ocr_timeout_secs", "0")]));
        assert_eq!(config.ocr_timeout_secs, DEFAULT_OCR_TIMEOUT_SECS);
    }

    #[test]
    fn env_names_map_to_keys() {
        let vars = vec![
            ("RADAR_MOTU_OCR_ENDPOINT".to_string(), "http://ocr/upload".to_string()),
            ("RADAR_MOTU_OCR_TIMEOUT".to_string(), "7".to_string()),
            ("PATH".to_string(), "/bin".to_string()),
        ];
        let env = env_overrides(vars);
        assert_eq!(env, map(&[("ocr_endpoint", "http://ocr/upload"), ("ocr_timeout_secs", "7")]));
    }

    #[test]
    fn file_then_env_precedence() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("config.toml"),
            "ocr_endpoint = \"http://file/upload\"\nocr_timeout_secs = 12\ntrace_level = \"debug\"\nno_color = true\n",
        )
        .unwrap();

        let env = map(&[
            ("data_dir", dir.path().to_str().unwrap()),
            ("trace_level", "warn"),
        ]);
        let config = Config::resolve(None, &env).unwrap();

        assert_eq!(config.data_dir, dir.path());
        assert_eq!(config.ocr_endpoint, "http://file/upload");
        assert_eq!(config.ocr_timeout_secs, 12);
        assert_eq!(config.trace_level.as_deref(), Some("warn"));
        assert!(config.no_color);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(matches!(
            Config::resolve(Some(&missing), &BTreeMap::new()),
            Err(RadarMotuError::Config(_))
        ));
    }

    #[test]
    fn absent_default_file_is_fine() {
        let dir = tempfile::tempdir().unwrap();
        let env = map(&[("data_dir", dir.path().to_str().unwrap())]);
        let config = Config::resolve(None, &env).unwrap();
        assert_eq!(config.ocr_endpoint, DEFAULT_OCR_ENDPOINT);
    }

    #[test]
    fn initialize_picks_theme() {
        let config = Config {
            theme_name: Some("radar-motu-light".into()),
            no_color: true,
            ..Config::default()
        };
        let state = initialize(&config);
        assert_eq!(state.theme.name, "radar-motu-light");
        assert!(state.theme.plain);

        let config = Config {
            theme_name: Some("unknown".into()),
            ..Config::default()
        };
        assert_eq!(initialize(&config).theme.name, "radar-motu");
    }

    #[test]
    fn collaborators_follow_the_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            data_dir: dir.path().to_path_buf(),
            ocr_endpoint: "http://ocr.local/upload".into(),
            ..Config::default()
        };

        let worker = config.open_registry().unwrap();
        assert!(worker.store().load_all().unwrap().is_empty());
        worker
            .store()
            .with_storage(|storage| {
                assert_eq!(storage.path(), paths::registry_file(dir.path()));
            })
            .unwrap();

        assert_eq!(config.ocr_client().unwrap().endpoint(), "http://ocr.local/upload");
    }
}
