//! Worker message types.
//!
//! Requests and responses between the application state machine and the
//! registry worker. Both sides are plain data so they can cross a task
//! boundary or be logged as JSON.

use crate::domain::VehicleRecord;
use serde::{Deserialize, Serialize};

/// Requests sent to the registry worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerMessage {
    /// Read the whole registry.
    LoadVehicles,

    /// Append one validated record to the registry.
    AppendVehicle {
        /// The record to persist.
        record: VehicleRecord,
    },
}

/// Responses sent back from the registry worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerResponse {
    /// The registry was read.
    VehiclesLoaded {
        /// All records in insertion order.
        vehicles: Vec<VehicleRecord>,
    },

    /// The record was persisted.
    VehicleAppended {
        /// The record that was saved.
        record: VehicleRecord,

        /// Registry length after the append.
        count: usize,
    },

    /// Reading the registry failed.
    LoadFailed {
        /// Human-readable error message.
        message: String,
    },

    /// Saving the record failed; nothing was persisted.
    AppendFailed {
        /// Human-readable error message.
        message: String,
    },
}
