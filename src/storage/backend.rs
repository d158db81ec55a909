//! Storage backend abstraction.
//!
//! This module defines the [`Storage`] trait, a minimal string key/value
//! interface modelled on device-local app storage. The registry only needs to
//! read one key and overwrite it, so the trait stays that small.

use crate::domain::error::Result;

/// Abstraction over persistent key/value backends.
///
/// # Implementations
///
/// - [`JsonStorage`](crate::storage::JsonStorage): JSON file with atomic writes (default)
/// - [`MemoryStorage`](crate::storage::MemoryStorage): in-process map with fault injection
///
/// # Examples
///
/// ```no_run
/// use radar_motu::storage::{JsonStorage, Storage};
/// use std::path::PathBuf;
///
/// let mut storage = JsonStorage::new(PathBuf::from("/tmp/radar-motu/storage.json"))?;
/// storage.set_item("greeting", "hello")?;
/// assert_eq!(storage.get_item("greeting")?.as_deref(), Some("hello"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait Storage: Send {
    /// Reads the value stored under `key`.
    ///
    /// Returns `Ok(None)` if the key has never been written.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written. The previous value
    /// is left in place.
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;
}
