//! Plate capture collaborator.
//!
//! Acquires a photo, posts it to the remote OCR service and decodes the
//! answer. Validating the recognized text against the plate pattern is left to
//! the application layer, which owns the form.
//!
//! # Modules
//!
//! - `source`: Capture sources and image acquisition
//! - `recognition`: Response decoding into [`RecognitionResult`]
//! - `client`: `reqwest` multipart client and the capture traits

pub mod client;
pub mod recognition;
pub mod source;

pub use client::{OcrCapture, OcrClient, PlateCapture, PlateRecognizer};
pub use recognition::{decode_response, RecognitionResult, UNRECOGNIZED_FALLBACK};
pub use source::{CaptureSource, CapturedImage, FileImageSource, ImageSource};
