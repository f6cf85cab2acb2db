//! Conversions between straight-alpha `image` buffers and premultiplied
//! `tiny-skia` pixmaps.

use image::RgbaImage;
use tiny_skia::{ColorU8, IntSize, Pixmap};

use crate::consts::MAX_CANVAS_DIMENSION;
use crate::error::{ArtisanError, Result};

/// Allocate a transparent pixmap, rejecting empty or oversized surfaces.
pub fn new_pixmap(width: u32, height: u32) -> Result<Pixmap> {
    if width > MAX_CANVAS_DIMENSION || height > MAX_CANVAS_DIMENSION {
        return Err(ArtisanError::InvalidDimensions { width, height });
    }
    Pixmap::new(width, height).ok_or(ArtisanError::InvalidDimensions { width, height })
}

/// Premultiply an RGBA image into a pixmap.
pub fn rgba_to_pixmap(image: &RgbaImage) -> Result<Pixmap> {
    let (width, height) = image.dimensions();
    let size =
        IntSize::from_wh(width, height).ok_or(ArtisanError::InvalidDimensions { width, height })?;

    let mut data = Vec::with_capacity(image.as_raw().len());
    for px in image.pixels() {
        let [r, g, b, a] = px.0;
        let c = ColorU8::from_rgba(r, g, b, a).premultiply();
        data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }

    Pixmap::from_vec(data, size).ok_or(ArtisanError::InvalidDimensions { width, height })
}

/// Demultiply a pixmap into a straight-alpha RGBA image.
pub fn pixmap_to_rgba(pixmap: &Pixmap) -> RgbaImage {
    let mut out = RgbaImage::new(pixmap.width(), pixmap.height());
    for (dst, src) in out.pixels_mut().zip(pixmap.pixels()) {
        let c = src.demultiply();
        dst.0 = [c.red(), c.green(), c.blue(), c.alpha()];
    }
    out
}
