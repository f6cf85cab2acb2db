use serde::Serialize;

use crate::aspect::AspectRatio;
use crate::error::{ArtisanError, Result};
use crate::geometry::Size;

/// Offsets below this are floating-point noise from fitting, not padding.
const PADDING_EPSILON: f64 = 1e-6;

/// Canvas size and image draw rectangle, in display pixels.
///
/// Derived from the container, image and aspect ratio on every change and
/// never persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct CanvasLayout {
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub image_offset_x: f64,
    pub image_offset_y: f64,
    pub image_draw_width: f64,
    pub image_draw_height: f64,
}

impl CanvasLayout {
    /// Integer backing-store size of the canvas (fractional pixels truncated).
    pub fn backing_size(&self) -> (u32, u32) {
        (
            self.canvas_width.max(0.0) as u32,
            self.canvas_height.max(0.0) as u32,
        )
    }

    /// True when the canvas has no drawable area. Callers must skip drawing.
    pub fn is_degenerate(&self) -> bool {
        let (w, h) = self.backing_size();
        w == 0 || h == 0
    }

    /// True when the canvas extends beyond the image on either axis.
    pub fn has_padding(&self) -> bool {
        self.image_offset_x > PADDING_EPSILON || self.image_offset_y > PADDING_EPSILON
    }
}

/// Ratio of an image's natural size, rejecting zero-area images.
pub fn native_ratio(natural_width: u32, natural_height: u32) -> Result<f64> {
    if natural_width == 0 || natural_height == 0 {
        return Err(ArtisanError::InvalidDimensions {
            width: natural_width,
            height: natural_height,
        });
    }
    Ok(natural_width as f64 / natural_height as f64)
}

/// Fit a box of ratio `ratio` inside `bounds`, touching it on one axis.
fn fit_ratio(bounds: Size, ratio: f64) -> Size {
    if bounds.ratio() > ratio {
        Size::new(bounds.height * ratio, bounds.height)
    } else {
        Size::new(bounds.width, bounds.width / ratio)
    }
}

/// Compute the canvas and image draw rectangle for a container.
///
/// The canvas takes the target ratio (the image's own when `aspect` is
/// `Original`) and is letterboxed inside the container. The image is then
/// fitted into the canvas at its native ratio and centered on the slack axis;
/// whatever canvas area is left over is padding.
///
/// A container with no area yields a zero-size layout.
pub fn compute_layout(
    container: Size,
    natural_width: u32,
    natural_height: u32,
    aspect: AspectRatio,
) -> Result<CanvasLayout> {
    let image_ratio = native_ratio(natural_width, natural_height)?;

    if container.is_empty() {
        return Ok(CanvasLayout::default());
    }

    let target = aspect.resolve(image_ratio);
    let canvas = fit_ratio(container, target);

    let (draw_w, draw_h, offset_x, offset_y) = if image_ratio > canvas.ratio() {
        let draw_h = canvas.width / image_ratio;
        (canvas.width, draw_h, 0.0, (canvas.height - draw_h) / 2.0)
    } else {
        let draw_w = canvas.height * image_ratio;
        (draw_w, canvas.height, (canvas.width - draw_w) / 2.0, 0.0)
    };

    Ok(CanvasLayout {
        canvas_width: canvas.width,
        canvas_height: canvas.height,
        image_offset_x: offset_x,
        image_offset_y: offset_y,
        image_draw_width: draw_w,
        image_draw_height: draw_h,
    })
}
