//! Error types for Radar Motu.
//!
//! This module defines the centralized error type [`RadarMotuError`], the
//! validation taxonomy [`ValidationError`] and a [`Result`] alias used across
//! the crate. All errors derive their `Error` implementation from `thiserror`.
//!
//! None of these errors is fatal: validation errors block a submission,
//! storage errors abort the current registry operation, and capture errors
//! surface as a failed recognition. The user can always retry.

use thiserror::Error;

/// Reasons a registration or a recognized plate is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// At least one of the seven record fields is empty.
    #[error("all fields are required")]
    MissingFields,

    /// Manufacture year or model year is not exactly four digits.
    #[error("manufacture year and model year must be exactly 4 digits")]
    InvalidYearFormat,

    /// Text returned by the OCR service does not look like a plate.
    #[error("recognized text is not a valid plate: {0}")]
    InvalidRecognizedPlate(String),
}

/// The main error type for Radar Motu operations.
///
/// # Examples
///
/// ```
/// use radar_motu::domain::{RadarMotuError, ValidationError};
///
/// let err: RadarMotuError = ValidationError::MissingFields.into();
/// assert!(err.is_validation());
/// ```
#[derive(Debug, Error)]
pub enum RadarMotuError {
    /// A draft or recognized plate failed validation.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The vehicle registry could not be read or decoded.
    ///
    /// Callers must treat the registry as unavailable, never as empty.
    #[error("Registry read error: {0}")]
    StorageRead(String),

    /// The vehicle registry could not be encoded or written back.
    ///
    /// The record being saved is not persisted.
    #[error("Registry write error: {0}")]
    StorageWrite(String),

    /// Storage backend failure below the registry (file format, fault).
    #[error("Storage error: {0}")]
    Storage(String),

    /// The remote plate recognition call failed.
    #[error("Plate recognition error: {0}")]
    RemoteCapture(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl RadarMotuError {
    /// Returns `true` for errors resolved locally by the form.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// A specialized `Result` type for Radar Motu operations.
pub type Result<T> = std::result::Result<T, RadarMotuError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_convert_into_crate_error() {
        let err: RadarMotuError = ValidationError::InvalidYearFormat.into();
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "Validation error: manufacture year and model year must be exactly 4 digits"
        );
    }

    #[test]
    fn storage_errors_are_not_validation() {
        assert!(!RadarMotuError::StorageWrite("disk full".into()).is_validation());
    }
}
