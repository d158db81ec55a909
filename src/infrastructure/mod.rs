//! Infrastructure layer for filesystem and environment interactions.
//!
//! Resolves where Radar Motu keeps its registry, log and configuration files.

pub mod paths;

pub use paths::{config_file, expand_tilde, get_data_dir, log_file, registry_file};
