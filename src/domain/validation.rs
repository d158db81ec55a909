//! Vehicle record validation.
//!
//! Manually typed fields are only checked for presence and, for the two year
//! fields, for the four-digit format. Plate format is not enforced here; see
//! [`super::plate`] for the check applied to OCR-derived text.

use super::vehicle::{Field, VehicleDraft};

/// Outcome of validating a registration draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validity {
    Valid,
    MissingFields,
    InvalidYearFormat,
}

/// Returns `true` when `value` is exactly four ASCII digits.
#[must_use]
pub fn is_year(value: &str) -> bool {
    value.len() == 4 && value.bytes().all(|b| b.is_ascii_digit())
}

/// Validates a registration draft.
///
/// Missing fields take precedence over year format.
///
/// # Examples
///
/// ```
/// use radar_motu::domain::{validate, VehicleDraft, Validity};
///
/// assert_eq!(validate(&VehicleDraft::default()), Validity::MissingFields);
/// ```
#[must_use]
pub fn validate(draft: &VehicleDraft) -> Validity {
    if Field::ALL.iter().any(|field| draft.get(*field).is_empty()) {
        return Validity::MissingFields;
    }

    if !is_year(&draft.manufacture_year) || !is_year(&draft.model_year) {
        return Validity::InvalidYearFormat;
    }

    Validity::Valid
}
