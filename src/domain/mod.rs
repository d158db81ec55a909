//! Domain layer for Radar Motu.
//!
//! Core types and rules for vehicle registration, independent of storage,
//! network and terminal concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`vehicle`]: Vehicle record and registration draft
//! - [`validation`]: Field completeness and year format checks
//! - [`plate`]: Plate pattern gate for OCR-derived text

pub mod error;
pub mod plate;
pub mod validation;
pub mod vehicle;

pub use error::{RadarMotuError, Result, ValidationError};
pub use plate::{accept_recognized_plate, is_plate};
pub use validation::{validate, Validity};
pub use vehicle::{Field, VehicleDraft, VehicleRecord};
