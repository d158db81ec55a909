//! In-memory storage backend.
//!
//! Keeps values in a map for the lifetime of the process. Reads and writes
//! can be made to fail on demand, which is how storage faults are exercised
//! without touching the filesystem.

use crate::domain::error::{RadarMotuError, Result};
use crate::storage::backend::Storage;
use std::collections::HashMap;

/// Map-backed storage with fault injection.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
    fail_reads: bool,
    fail_writes: bool,
}

impl MemoryStorage {
    /// Create an empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a key with a raw value.
    #[must_use]
    pub fn with_item(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.items.insert(key.into(), value.into());
        self
    }

    /// Make every subsequent read fail.
    pub fn set_fail_reads(&mut self, fail: bool) {
        self.fail_reads = fail;
    }

    /// Make every subsequent write fail.
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        if self.fail_reads {
            return Err(RadarMotuError::Storage(format!("read of {key} refused")));
        }
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes {
            return Err(RadarMotuError::Storage(format!("write of {key} refused")));
        }
        self.items.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn injected_faults_leave_values_alone() {
        let mut storage = MemoryStorage::new().with_item("k", "old");

        storage.set_fail_writes(true);
        assert!(storage.set_item("k", "new").is_err());

        storage.set_fail_writes(false);
        storage.set_fail_reads(true);
        assert!(storage.get_item("k").is_err());

        storage.set_fail_reads(false);
        assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("old"));
    }
}
