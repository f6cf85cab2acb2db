use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, GrayImage, ImageFormat, RgbaImage};

use crate::error::{ArtisanError, Result};

/// Decode encoded image bytes into an RGBA buffer.
///
/// Undecodable input is an error; a blank image is never substituted.
pub fn decode_image(bytes: &[u8]) -> Result<RgbaImage> {
    let img = image::load_from_memory(bytes).map_err(|e| ArtisanError::Decode(e.to_string()))?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    if width == 0 || height == 0 {
        return Err(ArtisanError::InvalidDimensions { width, height });
    }
    Ok(rgba)
}

/// Load an image file into an RGBA buffer.
pub fn load_image(path: &Path) -> Result<RgbaImage> {
    let bytes = std::fs::read(path)?;
    decode_image(&bytes)
}

/// Encode an RGBA buffer as PNG.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
    encode_dynamic(&DynamicImage::ImageRgba8(image.clone()))
}

/// Encode a grayscale buffer as PNG.
pub fn encode_gray_png(image: &GrayImage) -> Result<Vec<u8>> {
    encode_dynamic(&DynamicImage::ImageLuma8(image.clone()))
}

fn encode_dynamic(image: &DynamicImage) -> Result<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    image
        .write_to(&mut buf, ImageFormat::Png)
        .map_err(|e| ArtisanError::Encode(e.to_string()))?;
    Ok(buf.into_inner())
}

/// Save an RGBA buffer, choosing the format from the file extension.
/// Unknown extensions are written as PNG.
pub fn save_image(image: &RgbaImage, path: &Path) -> Result<()> {
    let format = ImageFormat::from_path(path).unwrap_or(ImageFormat::Png);
    match format {
        // JPEG has no alpha channel.
        ImageFormat::Jpeg => DynamicImage::ImageRgba8(image.clone())
            .to_rgb8()
            .save_with_format(path, format)?,
        _ => image.save_with_format(path, format)?,
    }
    Ok(())
}

/// Save a grayscale buffer as PNG.
pub fn save_gray_png(image: &GrayImage, path: &Path) -> Result<()> {
    image.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}
