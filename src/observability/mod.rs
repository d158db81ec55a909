//! File-based logging.
//!
//! `tracing` spans and events from every layer are formatted by
//! `tracing-subscriber` and written to a size-rotated log file in the data
//! directory. Nothing is written to the terminal, which belongs to the CLI
//! output.
//!
//! # Configuration
//!
//! The filter is resolved from:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` in the configuration
//! 3. Default: `"info"`
//!
//! # Usage
//!
//! ```no_run
//! use radar_motu::observability::init_tracing;
//! use radar_motu::Config;
//!
//! init_tracing(&Config::default());
//! tracing::debug!("logging initialized");
//! ```
//!
//! # Modules
//!
//! - `init`: Subscriber setup
//! - `file_writer`: Rotating file writer with size-based rotation

mod file_writer;
mod init;

pub use file_writer::FileWriter;
pub use init::{init_tracing, DEFAULT_TRACE_LEVEL};
