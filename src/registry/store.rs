//! The vehicle registry store.
//!
//! The registry is an append-only, insertion-ordered list persisted under a
//! single storage key. Every save is a full read-modify-write of that key.
//!
//! On its own the key is a shared mutable cell: two writers that read the same
//! base value will each write back their own one-element extension, and the
//! second write drops the first record. [`RegistryStore`] owns the storage
//! behind a mutex and holds it for the whole read-modify-write, so appends
//! through the same store serialize.

use crate::domain::error::{RadarMotuError, Result};
use crate::domain::VehicleRecord;
use crate::registry::codec;
use crate::storage::Storage;
use std::sync::{Mutex, MutexGuard};

/// Storage key holding the registry.
pub const REGISTRY_KEY: &str = "@lista_veiculos";

/// Single owner of the persisted vehicle registry.
///
/// The store is `Sync` whenever the backend is `Send`, so it can be shared
/// across tasks with an `Arc`.
///
/// # Examples
///
/// ```
/// use radar_motu::registry::RegistryStore;
/// use radar_motu::storage::MemoryStorage;
///
/// let store = RegistryStore::new(MemoryStorage::new());
/// assert!(store.load_all()?.is_empty());
/// # Ok::<(), radar_motu::RadarMotuError>(())
/// ```
#[derive(Debug)]
pub struct RegistryStore<S> {
    storage: Mutex<S>,
}

impl<S: Storage> RegistryStore<S> {
    /// Takes ownership of a storage backend.
    pub const fn new(storage: S) -> Self {
        Self {
            storage: Mutex::new(storage),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, S>> {
        self.storage
            .lock()
            .map_err(|e| RadarMotuError::Storage(format!("registry lock poisoned: {e}")))
    }

    fn read(storage: &S) -> Result<Vec<VehicleRecord>> {
        let raw = storage
            .get_item(REGISTRY_KEY)
            .map_err(|e| RadarMotuError::StorageRead(e.to_string()))?;

        raw.map_or_else(|| Ok(Vec::new()), |raw| codec::decode(&raw))
    }

    /// Reads the whole registry in insertion order.
    ///
    /// An absent key is an empty registry.
    ///
    /// # Errors
    ///
    /// Returns [`RadarMotuError::StorageRead`] if the backend fails or the
    /// stored value cannot be decoded. The registry must then be treated as
    /// unavailable, not as empty.
    pub fn load_all(&self) -> Result<Vec<VehicleRecord>> {
        let _span = tracing::debug_span!("registry_load_all").entered();

        let storage = self
            .lock()
            .map_err(|e| RadarMotuError::StorageRead(e.to_string()))?;
        let records = Self::read(&storage)?;

        tracing::debug!(count = records.len(), "registry loaded");
        Ok(records)
    }

    /// Appends a record to the end of the registry and persists the result.
    ///
    /// Duplicate plates are accepted. Returns the registry length after the
    /// append.
    ///
    /// # Errors
    ///
    /// - [`RadarMotuError::StorageRead`] if the current registry cannot be read
    /// - [`RadarMotuError::StorageWrite`] if encoding or writing fails
    ///
    /// In both cases nothing is persisted.
    pub fn append(&self, record: VehicleRecord) -> Result<usize> {
        let _span = tracing::debug_span!("registry_append", plate = %record.plate).entered();

        let mut storage = self
            .lock()
            .map_err(|e| RadarMotuError::StorageWrite(e.to_string()))?;

        let mut records = Self::read(&storage)?;
        records.push(record);

        let encoded = codec::encode(&records)?;
        storage
            .set_item(REGISTRY_KEY, &encoded)
            .map_err(|e| RadarMotuError::StorageWrite(e.to_string()))?;
        drop(storage);

        tracing::debug!(count = records.len(), "record appended");
        Ok(records.len())
    }

    /// Runs `f` with exclusive access to the backend.
    ///
    /// # Errors
    ///
    /// Returns an error if the lock is poisoned.
    pub fn with_storage<R>(&self, f: impl FnOnce(&mut S) -> R) -> Result<R> {
        let mut storage = self.lock()?;
        Ok(f(&mut storage))
    }
}
