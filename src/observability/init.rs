//! Tracing initialization and subscriber setup.

use super::file_writer::FileWriter;
use crate::infrastructure::paths;
use crate::Config;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directive when neither `RUST_LOG` nor the config sets one.
pub const DEFAULT_TRACE_LEVEL: &str = "info";

/// Installs the global subscriber writing to `<data_dir>/radar-motu.log`.
///
/// The filter comes from `RUST_LOG` if set, then `config.trace_level`, then
/// [`DEFAULT_TRACE_LEVEL`].
///
/// Logging is optional: if the data directory cannot be created nothing is
/// installed. Only the first call in a process takes effect.
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| DEFAULT_TRACE_LEVEL.to_string());

    if std::fs::create_dir_all(&config.data_dir).is_err() {
        return;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let writer = FileWriter::new(paths::log_file(&config.data_dir));

    let file_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init();
}
