use std::path::Path;

use image::{ImageFormat, RgbaImage};

use crate::error::{ArtisanError, Result};
use crate::io::image_io;

/// A decoded base image.
///
/// Immutable once loaded; a new upload or edit result replaces it wholesale.
#[derive(Clone, Debug)]
pub struct ImageSource {
    pixels: RgbaImage,
    format: Option<ImageFormat>,
}

impl ImageSource {
    /// Wrap an already decoded buffer. Zero-area buffers are rejected.
    pub fn from_rgba(pixels: RgbaImage) -> Result<Self> {
        let (width, height) = pixels.dimensions();
        if width == 0 || height == 0 {
            return Err(ArtisanError::InvalidDimensions { width, height });
        }
        Ok(Self {
            pixels,
            format: None,
        })
    }

    /// Decode an encoded image (PNG, JPEG, ...).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let format = image::guess_format(bytes).ok();
        let pixels = image_io::decode_image(bytes)?;
        let mut source = Self::from_rgba(pixels)?;
        source.format = format;
        Ok(source)
    }

    /// Decode a bare base64 payload or a `data:` URI.
    pub fn from_base64(payload: &str) -> Result<Self> {
        let bytes = crate::io::payload::decode_base64(payload)?;
        Self::from_bytes(&bytes)
    }

    pub fn open(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes)
    }

    pub fn natural_width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn natural_height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Format the source was decoded from, if it came from encoded bytes.
    pub fn format(&self) -> Option<ImageFormat> {
        self.format
    }

    /// MIME type to label this image with in a request. Buffers without a
    /// known source format are sent as PNG.
    pub fn mime_type(&self) -> &'static str {
        self.format.unwrap_or(ImageFormat::Png).to_mime_type()
    }
}
