//! JSON file-based storage backend.
//!
//! All keys live in a single human-readable JSON document. Writes go through
//! a temporary file followed by a rename so a crash never leaves a truncated
//! document behind.
//!
//! The file is read on every [`Storage::get_item`] call rather than cached, so
//! values written by another process (an earlier `register` invocation, for
//! example) are visible the next time a screen reloads.

use crate::domain::error::{RadarMotuError, Result};
use crate::storage::backend::Storage;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Current on-disk format version.
const FORMAT_VERSION: u32 = 1;

/// JSON storage container format.
///
/// ```json
/// {
///   "version": 1,
///   "items": {
///     "@lista_veiculos": "[{\"placa\":\"ABC1D23\", ...}]"
///   }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StorageData {
    version: u32,

    #[serde(default)]
    items: BTreeMap<String, String>,
}

impl Default for StorageData {
    fn default() -> Self {
        Self {
            version: FORMAT_VERSION,
            items: BTreeMap::new(),
        }
    }
}

/// JSON file storage backend.
///
/// # Thread Safety
///
/// This type is `Send` but performs no locking of its own. Shared access goes
/// through [`RegistryStore`](crate::registry::RegistryStore), which holds it
/// behind a mutex.
#[derive(Debug)]
pub struct JsonStorage {
    file_path: PathBuf,
}

impl JsonStorage {
    /// Creates or opens a JSON storage backend.
    ///
    /// Parent directories are created automatically. An existing file is
    /// parsed once up front so a corrupt document is reported early.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Parent directory creation fails
    /// - File exists but contains invalid JSON
    /// - File permissions prevent reading
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "initializing JSON storage");

        if let Some(parent) = file_path.parent() {
            tracing::debug!(parent = ?parent, "creating parent directory");
            std::fs::create_dir_all(parent)?;
        }

        if file_path.exists() {
            let data = Self::load_from_file(&file_path)?;
            tracing::debug!(key_count = data.items.len(), "storage initialized");
        } else {
            tracing::debug!("initializing new empty storage");
        }

        Ok(Self { file_path })
    }

    /// Path of the backing JSON file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Loads storage data from the JSON file, or an empty document if the
    /// file does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or contains invalid JSON.
    fn load_from_file(path: &Path) -> Result<StorageData> {
        if !path.exists() {
            return Ok(StorageData::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let data: StorageData = serde_json::from_str(&contents)
            .map_err(|e| RadarMotuError::Storage(format!("failed to parse JSON: {e}")))?;

        if data.version > FORMAT_VERSION {
            return Err(RadarMotuError::Storage(format!(
                "unsupported storage version {} (expected {FORMAT_VERSION})",
                data.version
            )));
        }

        tracing::trace!(
            version = data.version,
            keys = data.items.len(),
            "loaded storage data"
        );

        Ok(data)
    }

    /// Saves storage data to disk using an atomic write.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization, the temporary write or the rename
    /// fails.
    fn save_to_file(&self, data: &StorageData) -> Result<()> {
        tracing::debug!(path = ?self.file_path, "saving storage data");

        let json = serde_json::to_string_pretty(data)
            .map_err(|e| RadarMotuError::Storage(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");

        tracing::trace!(tmp_path = ?tmp_path, "writing to temporary file");
        std::fs::write(&tmp_path, json)?;

        tracing::trace!("renaming temporary file to final location");
        std::fs::rename(&tmp_path, &self.file_path)?;

        tracing::debug!("storage saved successfully");
        Ok(())
    }
}

impl Storage for JsonStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let _span = tracing::debug_span!("json_get_item", key = %key).entered();

        let data = Self::load_from_file(&self.file_path)?;
        let value = data.items.get(key).cloned();

        tracing::debug!(found = value.is_some(), "item lookup complete");
        Ok(value)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        let _span = tracing::debug_span!("json_set_item",
            key = %key,
            bytes = value.len()
        ).entered();

        let mut data = Self::load_from_file(&self.file_path)?;
        data.items.insert(key.to_owned(), value.to_owned());
        self.save_to_file(&data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonStorage::new(dir.path().join("storage.json")).unwrap();
        assert_eq!(storage.get_item("@lista_veiculos").unwrap(), None);
    }

    #[test]
    fn values_survive_reopening() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("storage.json");

        let mut storage = JsonStorage::new(path.clone()).unwrap();
        storage.set_item("a", "1").unwrap();
        storage.set_item("b", "2").unwrap();
        storage.set_item("a", "3").unwrap();
        drop(storage);

        let reopened = JsonStorage::new(path.clone()).unwrap();
        assert_eq!(reopened.get_item("a").unwrap().as_deref(), Some("3"));
        assert_eq!(reopened.get_item("b").unwrap().as_deref(), Some("2"));
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn writes_from_another_handle_are_visible() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");

        let reader = JsonStorage::new(path.clone()).unwrap();
        let mut writer = JsonStorage::new(path).unwrap();
        writer.set_item("k", "v").unwrap();

        assert_eq!(reader.get_item("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn corrupt_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = JsonStorage::new(path).unwrap_err();
        assert!(matches!(err, RadarMotuError::Storage(_)));
    }

    #[test]
    fn newer_format_version_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(&path, r#"{"version": 9, "items": {}}"#).unwrap();

        assert!(JsonStorage::new(path).is_err());
    }
}
