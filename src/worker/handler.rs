//! Registry worker implementation.
//!
//! The worker owns a shared handle to the [`RegistryStore`] and turns each
//! message into exactly one store call. It never returns an error: failures
//! become `*Failed` responses for the application to surface.

use crate::domain::error::Result;
use crate::domain::VehicleRecord;
use crate::registry::RegistryStore;
use crate::storage::Storage;
use crate::worker::{WorkerMessage, WorkerResponse};
use std::sync::Arc;

/// Processes registry messages against a shared store.
///
/// Cloning the worker clones the `Arc`, so every clone talks to the same
/// store and therefore the same lock.
#[derive(Debug)]
pub struct RegistryWorker<S> {
    store: Arc<RegistryStore<S>>,
}

impl<S> Clone for RegistryWorker<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: Storage> RegistryWorker<S> {
    /// Creates a worker that owns `storage` through a fresh store.
    pub fn new(storage: S) -> Self {
        Self::with_store(Arc::new(RegistryStore::new(storage)))
    }

    /// Creates a worker sharing an existing store.
    pub const fn with_store(store: Arc<RegistryStore<S>>) -> Self {
        Self { store }
    }

    /// The store this worker operates on.
    #[must_use]
    pub fn store(&self) -> &Arc<RegistryStore<S>> {
        &self.store
    }

    /// Logs the outcome of a store call and maps it to a response.
    fn handle_store_result<T, F, E>(
        operation: &str,
        result: Result<T>,
        on_success: F,
        on_error: E,
    ) -> WorkerResponse
    where
        F: FnOnce(T) -> WorkerResponse,
        E: FnOnce(String) -> WorkerResponse,
    {
        match result {
            Ok(value) => {
                tracing::debug!(operation, "registry operation successful");
                on_success(value)
            }
            Err(e) => {
                tracing::warn!(operation, error = %e, "registry operation failed");
                on_error(e.to_string())
            }
        }
    }

    fn handle_load_vehicles(&self) -> WorkerResponse {
        Self::handle_store_result(
            "load vehicles",
            self.store.load_all(),
            |vehicles| WorkerResponse::VehiclesLoaded { vehicles },
            |message| WorkerResponse::LoadFailed { message },
        )
    }

    fn handle_append_vehicle(&self, record: VehicleRecord) -> WorkerResponse {
        let saved = record.clone();

        Self::handle_store_result(
            "append vehicle",
            self.store.append(record),
            |count| {
                tracing::info!(plate = %saved.plate, count, "vehicle registered");
                WorkerResponse::VehicleAppended { record: saved, count }
            },
            |message| WorkerResponse::AppendFailed { message },
        )
    }

    /// Processes one message and returns its response.
    pub fn handle_message(&self, message: WorkerMessage) -> WorkerResponse {
        let span = tracing::debug_span!("worker_handle_message", message_type = ?message);
        let _guard = span.entered();

        match message {
            WorkerMessage::LoadVehicles => self.handle_load_vehicles(),
            WorkerMessage::AppendVehicle { record } => self.handle_append_vehicle(record),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn record(plate: &str) -> VehicleRecord {
        VehicleRecord {
            plate: plate.into(),
            brand: "Honda".into(),
            model: "CG 160".into(),
            color: "Red".into(),
            manufacture_year: "2022".into(),
            model_year: "2023".into(),
            chassis: "9C2KC2200NR000001".into(),
        }
    }

    #[test]
    fn append_then_load() {
        let worker = RegistryWorker::new(MemoryStorage::new());

        let response = worker.handle_message(WorkerMessage::AppendVehicle {
            record: record("ABC1D23"),
        });
        assert_eq!(
            response,
            WorkerResponse::VehicleAppended {
                record: record("ABC1D23"),
                count: 1
            }
        );

        assert_eq!(
            worker.handle_message(WorkerMessage::LoadVehicles),
            WorkerResponse::VehiclesLoaded {
                vehicles: vec![record("ABC1D23")]
            }
        );
    }

    #[test]
    fn clones_share_the_store() {
        let worker = RegistryWorker::new(MemoryStorage::new());
        let other = worker.clone();

        other.handle_message(WorkerMessage::AppendVehicle { record: record("AAA1111") });
        assert!(Arc::ptr_eq(worker.store(), other.store()));
        assert_eq!(worker.store().load_all().unwrap().len(), 1);
    }

    #[test]
    fn storage_faults_become_failed_responses() {
        let mut storage = MemoryStorage::new();
        storage.set_fail_writes(true);
        let worker = RegistryWorker::new(storage);

        let response = worker.handle_message(WorkerMessage::AppendVehicle {
            record: record("ABC1D23"),
        });
        assert!(matches!(response, WorkerResponse::AppendFailed { .. }));

        worker
            .store()
            .with_storage(|s| s.set_fail_reads(true))
            .unwrap();
        assert!(matches!(
            worker.handle_message(WorkerMessage::LoadVehicles),
            WorkerResponse::LoadFailed { .. }
        ));
    }
}
