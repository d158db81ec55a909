//! Encoding of the registry value.
//!
//! The registry key holds a JSON array of [`VehicleRecord`] objects. These
//! functions are the only place that format is produced or parsed.

use crate::domain::error::{RadarMotuError, Result};
use crate::domain::VehicleRecord;

/// Decodes a stored registry value.
///
/// # Errors
///
/// Returns [`RadarMotuError::StorageRead`] if the value is not a JSON array
/// of vehicle records.
pub fn decode(raw: &str) -> Result<Vec<VehicleRecord>> {
    serde_json::from_str(raw)
        .map_err(|e| RadarMotuError::StorageRead(format!("invalid registry value: {e}")))
}

/// Encodes the full registry for storage.
///
/// # Errors
///
/// Returns [`RadarMotuError::StorageWrite`] if serialization fails.
pub fn encode(records: &[VehicleRecord]) -> Result<String> {
    serde_json::to_string(records)
        .map_err(|e| RadarMotuError::StorageWrite(format!("failed to encode registry: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_array_decodes_to_empty_registry() {
        assert!(decode("[]").unwrap().is_empty());
    }

    #[test]
    fn non_array_values_are_read_errors() {
        for raw in ["null", "{}", "[{\"placa\": 1}]", "garbage"] {
            assert!(
                matches!(decode(raw), Err(RadarMotuError::StorageRead(_))),
                "{raw}"
            );
        }
    }
}
