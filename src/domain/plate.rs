//! Plate pattern check for OCR-derived text.
//!
//! Brazilian plates come in two 7-character formats: legacy (`ABC1234`) and
//! Mercosul (`ABC1D23`). Both match three letters, one digit, one
//! alphanumeric and two digits. The check is case-insensitive.
//!
//! Only text returned by the recognition service goes through this gate.
//! Plates typed by hand are accepted as long as they are non-empty.

use super::error::ValidationError;
use regex::Regex;
use std::sync::OnceLock;

const PLATE_PATTERN: &str = r"(?i)^[A-Z]{3}[0-9][A-Z0-9][0-9]{2}$";

fn plate_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(PLATE_PATTERN).expect("plate pattern is a valid regex"))
}

/// Returns `true` if `text` matches the plate pattern.
#[must_use]
pub fn is_plate(text: &str) -> bool {
    plate_regex().is_match(text)
}

/// Gates recognized text before it reaches the form's plate field.
///
/// Returns the plate upper-cased.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidRecognizedPlate`] carrying the original
/// text when it does not match the plate pattern.
///
/// # Examples
///
/// ```
/// use radar_motu::domain::accept_recognized_plate;
///
/// assert_eq!(accept_recognized_plate("abc1d23").unwrap(), "ABC1D23");
/// assert!(accept_recognized_plate("Plate not detected").is_err());
/// ```
pub fn accept_recognized_plate(text: &str) -> Result<String, ValidationError> {
    if is_plate(text) {
        Ok(text.to_uppercase())
    } else {
        Err(ValidationError::InvalidRecognizedPlate(text.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_legacy_and_mercosul_formats() {
        for plate in ["ABC1234", "ABC1D23", "abc1d23", "xYz7f89"] {
            assert!(is_plate(plate), "{plate}");
        }
    }

    #[test]
    fn rejects_other_text() {
        for text in [
            "",
            "Plate not detected",
            "ABC-1234",
            "AB1C234",
            "ABC1D2",
            "ABC1D234",
            " ABC1D23",
            "ABCDD23",
        ] {
            assert!(!is_plate(text), "{text}");
        }
    }

    #[test]
    fn recognized_plate_is_upper_cased() {
        assert_eq!(accept_recognized_plate("ABC1D23").unwrap(), "ABC1D23");
        assert_eq!(accept_recognized_plate("abc1234").unwrap(), "ABC1234");
    }

    #[test]
    fn rejection_keeps_the_text() {
        assert_eq!(
            accept_recognized_plate("Plate not detected"),
            Err(ValidationError::InvalidRecognizedPlate(
                "Plate not detected".into()
            ))
        );
    }
}
