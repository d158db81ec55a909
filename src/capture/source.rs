//! Image acquisition for plate capture.

use crate::domain::error::Result;
use std::fmt;
use std::path::{Path, PathBuf};

/// Where the plate photo comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CaptureSource {
    Camera,
    #[default]
    Gallery,
}

impl fmt::Display for CaptureSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Camera => f.write_str("camera"),
            Self::Gallery => f.write_str("gallery"),
        }
    }
}

/// An image ready to upload.
#[derive(Clone, PartialEq, Eq)]
pub struct CapturedImage {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl CapturedImage {
    /// Builds an image, falling back to a timestamped name when none is known.
    #[must_use]
    pub fn new(file_name: Option<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| {
                format!("image_{}.jpg", chrono::Utc::now().timestamp_millis())
            });
        Self { file_name, bytes }
    }

    /// MIME type derived from the file extension.
    ///
    /// `jpg` maps to `image/jpeg`; names without an extension are assumed to
    /// be JPEG.
    #[must_use]
    pub fn mime_type(&self) -> String {
        match self.file_name.rsplit_once('.') {
            Some((_, ext)) if ext.eq_ignore_ascii_case("jpg") => "image/jpeg".to_owned(),
            Some((_, ext)) if !ext.is_empty() => format!("image/{}", ext.to_lowercase()),
            _ => "image/jpeg".to_owned(),
        }
    }
}

impl fmt::Debug for CapturedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CapturedImage")
            .field("file_name", &self.file_name)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Something that can produce a photo on request.
pub trait ImageSource: Send + Sync {
    /// Acquires an image from `source`.
    ///
    /// Returns `Ok(None)` when the user backs out without picking an image.
    ///
    /// # Errors
    ///
    /// Returns an error if the image cannot be read.
    fn acquire(&self, source: CaptureSource) -> Result<Option<CapturedImage>>;
}

/// Image source backed by a file on disk.
///
/// A terminal has no camera preview, so both sources resolve to the same
/// file.
#[derive(Debug, Clone)]
pub struct FileImageSource {
    path: PathBuf,
}

impl FileImageSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ImageSource for FileImageSource {
    fn acquire(&self, source: CaptureSource) -> Result<Option<CapturedImage>> {
        tracing::debug!(%source, path = ?self.path, "reading plate image");

        let bytes = std::fs::read(&self.path)?;
        let file_name = self
            .path
            .file_name()
            .and_then(|name| name.to_str())
            .map(str::to_owned);

        Ok(Some(CapturedImage::new(file_name, bytes)))
    }
}
