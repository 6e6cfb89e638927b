//! Input types for the vision call.

use crate::error::ImageError;
use image::ImageFormat;
use std::path::Path;

/// Image formats the vision model accepts from us.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageMime {
    Jpeg,
    Png,
}

impl ImageMime {
    pub fn as_str(self) -> &'static str {
        match self {
            ImageMime::Jpeg => "image/jpeg",
            ImageMime::Png => "image/png",
        }
    }

    fn from_format(format: ImageFormat) -> Option<Self> {
        match format {
            ImageFormat::Jpeg => Some(ImageMime::Jpeg),
            ImageFormat::Png => Some(ImageMime::Png),
            _ => None,
        }
    }

    /// Declared type from a file extension: jpg, jpeg or png only.
    pub fn from_extension(ext: &str) -> Result<Self, ImageError> {
        match ext.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Ok(ImageMime::Jpeg),
            "png" => Ok(ImageMime::Png),
            _ => Err(ImageError::Unsupported(ext.to_string())),
        }
    }
}

/// Raw image bytes plus their declared mime type. Never decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageInput {
    pub mime_type: ImageMime,
    pub bytes: Vec<u8>,
}

impl ImageInput {
    pub fn new(mime_type: ImageMime, bytes: Vec<u8>) -> Self {
        Self { mime_type, bytes }
    }

    /// Read an uploaded image file. The extension decides the mime type.
    pub fn from_path(path: &Path) -> Result<Self, ImageError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        let mime_type = ImageMime::from_extension(ext)?;

        let bytes = std::fs::read(path).map_err(|source| ImageError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        if bytes.is_empty() {
            return Err(ImageError::Empty(path.to_path_buf()));
        }

        // Content sniffing only warns; the declared type is what gets sent.
        match image::guess_format(&bytes).ok().and_then(ImageMime::from_format) {
            Some(sniffed) if sniffed != mime_type => log::warn!(
                "[IMAGE] {} is named as {} but looks like {}",
                path.display(),
                mime_type.as_str(),
                sniffed.as_str()
            ),
            None => log::warn!(
                "[IMAGE] {} does not look like a JPEG or PNG",
                path.display()
            ),
            _ => {}
        }

        log::info!(
            "[IMAGE] Loaded {} ({}, {} bytes)",
            path.display(),
            mime_type.as_str(),
            bytes.len()
        );
        Ok(Self { mime_type, bytes })
    }

    /// Standard base64 of the raw bytes, as the API expects.
    pub fn base64_data(&self) -> String {
        base64::Engine::encode(&base64::engine::general_purpose::STANDARD, &self.bytes)
    }
}
