//! Decoding of the OCR service's response.
//!
//! A successful response carries either the recognized plate or a free-form
//! explanation. It is decoded into [`RecognitionResult`] up front instead of
//! probing optional fields at each use site.

use crate::domain::error::{RadarMotuError, Result};
use serde::Deserialize;

/// Reason reported when the service returns neither a plate nor a message.
pub const UNRECOGNIZED_FALLBACK: &str = "plate not recognized by server";

/// What the recognition service made of an image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognitionResult {
    /// The service returned text it believes is a plate.
    Recognized(String),
    /// The service explained why no plate was read.
    Unrecognized(String),
}

#[derive(Debug, Deserialize)]
struct SuccessBody {
    #[serde(default, alias = "plate")]
    placa: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    mensagem: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Decodes an HTTP response from the recognition endpoint.
///
/// # Errors
///
/// Returns [`RadarMotuError::RemoteCapture`] when the status is not 2xx or a
/// successful body is not a JSON object. For error statuses the message is
/// taken from the body's `error` or `message` field, then the raw body, then
/// `server error: <status>`.
///
/// # Examples
///
/// ```
/// use radar_motu::capture::{decode_response, RecognitionResult};
///
/// let result = decode_response(200, r#"{"placa": "ABC1D23"}"#)?;
/// assert_eq!(result, RecognitionResult::Recognized("ABC1D23".into()));
/// # Ok::<(), radar_motu::RadarMotuError>(())
/// ```
pub fn decode_response(status: u16, body: &str) -> Result<RecognitionResult> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| non_empty(b.error).or_else(|| non_empty(b.message)))
            .or_else(|| Some(body.trim().to_owned()).filter(|t| !t.is_empty()))
            .unwrap_or_else(|| format!("server error: {status}"));

        tracing::debug!(status, error = %message, "recognition request rejected");
        return Err(RadarMotuError::RemoteCapture(message));
    }

    let body: SuccessBody = serde_json::from_str(body)
        .map_err(|e| RadarMotuError::RemoteCapture(format!("invalid response body: {e}")))?;

    let result = match non_empty(body.placa) {
        Some(plate) => RecognitionResult::Recognized(plate),
        None => RecognitionResult::Unrecognized(
            non_empty(body.message)
                .or_else(|| non_empty(body.mensagem))
                .unwrap_or_else(|| UNRECOGNIZED_FALLBACK.to_owned()),
        ),
    };

    tracing::debug!(?result, "recognition response decoded");
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plate_field_in_either_language() {
        assert_eq!(
            decode_response(200, r#"{"placa":"ABC1D23"}"#).unwrap(),
            RecognitionResult::Recognized("ABC1D23".into())
        );
        assert_eq!(
            decode_response(201, r#"{"plate":"xyz7f89","message":"ok"}"#).unwrap(),
            RecognitionResult::Recognized("xyz7f89".into())
        );
    }

    #[test]
    fn message_fallbacks() {
        assert_eq!(
            decode_response(200, r#"{"message":"Plate not detected"}"#).unwrap(),
            RecognitionResult::Unrecognized("Plate not detected".into())
        );
        assert_eq!(
            decode_response(200, r#"{"placa":"","mensagem":"Placa não encontrada"}"#).unwrap(),
            RecognitionResult::Unrecognized("Placa não encontrada".into())
        );
        assert_eq!(
            decode_response(200, "{}").unwrap(),
            RecognitionResult::Unrecognized(UNRECOGNIZED_FALLBACK.into())
        );
    }

    #[test]
    fn error_status_uses_error_then_message_then_body() {
        let err = decode_response(500, r#"{"error":"OCR crashed","message":"ignored"}"#);
        assert_eq!(err.unwrap_err().to_string(), "Plate recognition error: OCR crashed");

        let err = decode_response(400, r#"{"message":"no image field"}"#);
        assert_eq!(err.unwrap_err().to_string(), "Plate recognition error: no image field");

        let err = decode_response(502, "Bad Gateway");
        assert_eq!(err.unwrap_err().to_string(), "Plate recognition error: Bad Gateway");

        let err = decode_response(503, "");
        assert_eq!(err.unwrap_err().to_string(), "Plate recognition error: server error: 503");
    }

    #[test]
    fn success_with_garbage_body_is_an_error() {
        assert!(matches!(
            decode_response(200, "<html>"),
            Err(RadarMotuError::RemoteCapture(_))
        ));
    }
}
