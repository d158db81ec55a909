//! HTTP client for the remote plate recognition service.
//!
//! The service takes a `multipart/form-data` POST with a single `image` file
//! field and answers with JSON. There is no retry or queueing here: one image,
//! one request.

use super::recognition::{decode_response, RecognitionResult};
use super::source::{CaptureSource, CapturedImage, ImageSource};
use crate::domain::error::{RadarMotuError, Result};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use std::time::Duration;

/// Sends images to a recognition service.
#[async_trait]
pub trait PlateRecognizer: Send + Sync {
    /// Uploads `image` and decodes the service's answer.
    ///
    /// # Errors
    ///
    /// Returns [`RadarMotuError::RemoteCapture`] on transport failures and
    /// error responses.
    async fn recognize(&self, image: CapturedImage) -> Result<RecognitionResult>;
}

/// Captures a plate photo and returns what the service read from it.
#[async_trait]
pub trait PlateCapture: Send + Sync {
    /// Returns `Ok(None)` when image acquisition was cancelled.
    ///
    /// # Errors
    ///
    /// Returns an error if acquisition or recognition fails.
    async fn capture(&self, source: CaptureSource) -> Result<Option<RecognitionResult>>;
}

#[async_trait]
impl<T: PlateCapture + ?Sized> PlateCapture for Box<T> {
    async fn capture(&self, source: CaptureSource) -> Result<Option<RecognitionResult>> {
        (**self).capture(source).await
    }
}

/// `reqwest`-based client for the OCR endpoint.
#[derive(Debug, Clone)]
pub struct OcrClient {
    endpoint: String,
    client: reqwest::Client,
}

impl OcrClient {
    /// Creates a client for `endpoint` with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`RadarMotuError::Config`] if the HTTP client cannot be built.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("radar-motu/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| RadarMotuError::Config(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl PlateRecognizer for OcrClient {
    async fn recognize(&self, image: CapturedImage) -> Result<RecognitionResult> {
        let mime = image.mime_type();
        let size = image.bytes.len();
        tracing::info!(
            endpoint = %self.endpoint,
            file_name = %image.file_name,
            %mime,
            size,
            "uploading plate image"
        );

        let part = Part::bytes(image.bytes)
            .file_name(image.file_name)
            .mime_str(&mime)
            .map_err(|e| RadarMotuError::RemoteCapture(format!("invalid image type {mime}: {e}")))?;
        let form = Form::new().part("image", part);

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| RadarMotuError::RemoteCapture(format!("request failed: {e}")))?;

        let status = response.status();
        tracing::debug!(%status, "recognition response received");

        let body = response
            .text()
            .await
            .map_err(|e| RadarMotuError::RemoteCapture(format!("failed to read response: {e}")))?;

        decode_response(status.as_u16(), &body)
    }
}

/// Image source plus recognizer: the full capture flow.
#[derive(Debug, Clone)]
pub struct OcrCapture<I, R> {
    images: I,
    recognizer: R,
}

impl<I, R> OcrCapture<I, R> {
    pub const fn new(images: I, recognizer: R) -> Self {
        Self { images, recognizer }
    }
}

#[async_trait]
impl<I: ImageSource, R: PlateRecognizer> PlateCapture for OcrCapture<I, R> {
    async fn capture(&self, source: CaptureSource) -> Result<Option<RecognitionResult>> {
        let Some(image) = self.images.acquire(source)? else {
            tracing::debug!(%source, "image acquisition cancelled");
            return Ok(None);
        };

        self.recognizer.recognize(image).await.map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoImage;

    impl ImageSource for NoImage {
        fn acquire(&self, _source: CaptureSource) -> Result<Option<CapturedImage>> {
            Ok(None)
        }
    }

    struct Fixed(RecognitionResult);

    #[async_trait]
    impl PlateRecognizer for Fixed {
        async fn recognize(&self, _image: CapturedImage) -> Result<RecognitionResult> {
            Ok(self.0.clone())
        }
    }

    struct OneImage;

    impl ImageSource for OneImage {
        fn acquire(&self, _source: CaptureSource) -> Result<Option<CapturedImage>> {
            Ok(Some(CapturedImage::new(Some("p.jpg".into()), vec![0xFF, 0xD8])))
        }
    }

    #[tokio::test]
    async fn cancelled_acquisition_skips_recognition() {
        let capture = OcrCapture::new(NoImage, Fixed(RecognitionResult::Recognized("X".into())));
        assert_eq!(capture.capture(CaptureSource::Camera).await.unwrap(), None);
    }

    #[tokio::test]
    async fn acquired_image_is_recognized() {
        let expected = RecognitionResult::Recognized("ABC1D23".into());
        let capture = OcrCapture::new(OneImage, Fixed(expected.clone()));
        assert_eq!(
            capture.capture(CaptureSource::Gallery).await.unwrap(),
            Some(expected)
        );
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_capture_error() {
        let client = OcrClient::new("http://127.0.0.1:9/upload", Duration::from_secs(2)).unwrap();
        let image = CapturedImage::new(Some("p.jpg".into()), vec![0xFF, 0xD8]);

        let err = client.recognize(image).await.unwrap_err();
        assert!(matches!(err, RadarMotuError::RemoteCapture(_)));
    }
}
