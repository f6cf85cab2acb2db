//! Freehand mask layer aligned 1:1 with the display canvas.
//!
//! Strokes accumulate into one persistent raster at display resolution. On
//! stroke release the raster is resampled into a binary bitmap at the output
//! resolution for transmission.

use image::{GrayImage, Luma};
use tiny_skia::{
    FillRule, FilterQuality, LineCap, LineJoin, Paint, PathBuilder, Pixmap, PixmapPaint, Stroke,
    Transform,
};
use tracing::debug;

use crate::consts::{MASK_PREVIEW_ALPHA, MAX_BRUSH_SIZE, MIN_BRUSH_SIZE};
use crate::error::{ArtisanError, Result};
use crate::geometry::Point;
use crate::io::{image_io, payload};
use crate::output_size::OutputSize;
use crate::raster::new_pixmap;

/// Resolved selection at output resolution. White = editable, black = untouched.
#[derive(Clone, Debug, PartialEq)]
pub struct MaskBitmap {
    image: GrayImage,
}

impl MaskBitmap {
    /// An all-black bitmap: nothing selected.
    pub fn blank(size: OutputSize) -> Self {
        Self {
            image: GrayImage::new(size.width, size.height),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn size(&self) -> OutputSize {
        OutputSize::new(self.width(), self.height())
    }

    pub fn image(&self) -> &GrayImage {
        &self.image
    }

    pub fn is_selected(&self, x: u32, y: u32) -> bool {
        self.image.get_pixel(x, y).0[0] > 0
    }

    /// Number of selected pixels.
    pub fn selected_count(&self) -> usize {
        self.image.pixels().filter(|p| p.0[0] > 0).count()
    }

    pub fn is_blank(&self) -> bool {
        self.image.pixels().all(|p| p.0[0] == 0)
    }

    pub fn encode_png(&self) -> Result<Vec<u8>> {
        image_io::encode_gray_png(&self.image)
    }

    /// PNG payload as bare base64 (no `data:` prefix).
    pub fn to_base64(&self) -> Result<String> {
        Ok(payload::to_base64(&self.encode_png()?))
    }
}

fn preview_alpha_u8() -> u8 {
    (MASK_PREVIEW_ALPHA * 255.0).round() as u8
}

fn stroke_paint() -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(255, 255, 255, preview_alpha_u8());
    paint.anti_alias = true;
    paint
}

/// Persistent display-resolution mask raster and its stroke state.
pub struct MaskSurface {
    /// `None` while the canvas has no drawable area.
    raster: Option<Pixmap>,
    brush_size: f64,
    last_point: Option<Point>,
    drawing: bool,
    stroke_count: usize,
    generation: u64,
    /// Output size the current raster contents were laid out for.
    drawn_for: OutputSize,
}

impl MaskSurface {
    /// Create an empty surface of the given backing size.
    pub fn new(width: u32, height: u32, output: OutputSize, brush_size: f64) -> Result<Self> {
        Ok(Self {
            raster: Self::allocate(width, height)?,
            brush_size: brush_size.clamp(MIN_BRUSH_SIZE, MAX_BRUSH_SIZE),
            last_point: None,
            drawing: false,
            stroke_count: 0,
            generation: 0,
            drawn_for: output,
        })
    }

    fn allocate(width: u32, height: u32) -> Result<Option<Pixmap>> {
        if width == 0 || height == 0 {
            return Ok(None);
        }
        new_pixmap(width, height).map(Some)
    }

    pub fn backing_size(&self) -> (u32, u32) {
        self.raster
            .as_ref()
            .map_or((0, 0), |r| (r.width(), r.height()))
    }

    pub fn brush_size(&self) -> f64 {
        self.brush_size
    }

    pub fn set_brush_size(&mut self, diameter: f64) {
        self.brush_size = diameter.clamp(MIN_BRUSH_SIZE, MAX_BRUSH_SIZE);
    }

    /// Changes on every clear or reset.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    /// Strokes painted since the last clear or reset.
    pub fn stroke_count(&self) -> usize {
        self.stroke_count
    }

    pub fn is_empty(&self) -> bool {
        self.stroke_count == 0
    }

    pub fn drawn_for(&self) -> OutputSize {
        self.drawn_for
    }

    /// The live overlay raster, for compositing a preview.
    pub fn overlay(&self) -> Option<&Pixmap> {
        self.raster.as_ref()
    }

    /// Start a stroke and paint a dot of the brush diameter at `p`.
    ///
    /// Returns `false` when there is no drawable raster.
    pub fn begin_stroke(&mut self, p: Point) -> bool {
        let radius = (self.brush_size / 2.0) as f32;
        let Some(raster) = self.raster.as_mut() else {
            return false;
        };
        if let Some(circle) = PathBuilder::from_circle(p.x as f32, p.y as f32, radius) {
            raster.fill_path(
                &circle,
                &stroke_paint(),
                FillRule::Winding,
                Transform::identity(),
                None,
            );
        }
        self.drawing = true;
        self.last_point = Some(p);
        self.stroke_count += 1;
        debug!(x = p.x, y = p.y, brush = self.brush_size, "Stroke started");
        true
    }

    /// Extend the active stroke with a round-capped segment to `p`.
    ///
    /// Samples are joined with straight segments; fast pointer motion can
    /// leave visible corners.
    pub fn extend_stroke(&mut self, p: Point) -> bool {
        if !self.drawing {
            return false;
        }
        let (Some(raster), Some(prev)) = (self.raster.as_mut(), self.last_point) else {
            return false;
        };

        let mut pb = PathBuilder::new();
        pb.move_to(prev.x as f32, prev.y as f32);
        pb.line_to(p.x as f32, p.y as f32);
        if let Some(path) = pb.finish() {
            let stroke = Stroke {
                width: self.brush_size as f32,
                line_cap: LineCap::Round,
                line_join: LineJoin::Round,
                ..Stroke::default()
            };
            raster.stroke_path(&path, &stroke_paint(), &stroke, Transform::identity(), None);
        }
        self.last_point = Some(p);
        true
    }

    /// Finish the active stroke. Returns whether a stroke was in progress.
    pub fn end_stroke(&mut self) -> bool {
        let was_drawing = self.drawing;
        self.drawing = false;
        self.last_point = None;
        was_drawing
    }

    /// Wipe the raster to transparent. The generation changes even when the
    /// raster was already empty.
    pub fn clear(&mut self) {
        if let Some(raster) = self.raster.as_mut() {
            raster.fill(tiny_skia::Color::TRANSPARENT);
        }
        self.stroke_count = 0;
        self.generation += 1;
        debug!(generation = self.generation, "Mask cleared");
    }

    /// Discard the raster and reallocate it for a new layout.
    pub fn reset(&mut self, width: u32, height: u32, output: OutputSize) -> Result<()> {
        self.raster = Self::allocate(width, height)?;
        self.drawing = false;
        self.last_point = None;
        self.stroke_count = 0;
        self.generation += 1;
        self.drawn_for = output;
        debug!(width, height, output = %output, "Mask reset for new layout");
        Ok(())
    }

    /// Resample every stroke since the last clear into a binary bitmap at
    /// `output` resolution.
    ///
    /// Fails with `StaleMask` when `output` is not the size the raster was
    /// laid out for; such a mask would not line up with the generated image.
    pub fn resolve(&self, output: OutputSize) -> Result<MaskBitmap> {
        if output != self.drawn_for {
            return Err(ArtisanError::StaleMask {
                drawn_for: self.drawn_for.to_string(),
                current: output.to_string(),
            });
        }

        let mut target = new_pixmap(output.width, output.height)?;
        target.fill(tiny_skia::Color::BLACK);

        if let Some(raster) = self.raster.as_ref() {
            let sx = output.width as f32 / raster.width() as f32;
            let sy = output.height as f32 / raster.height() as f32;
            let paint = PixmapPaint {
                quality: FilterQuality::Bilinear,
                ..PixmapPaint::default()
            };
            target.draw_pixmap(
                0,
                0,
                raster.as_ref(),
                &paint,
                Transform::from_scale(sx, sy),
                None,
            );
        }

        // White over opaque black leaves coverage in every color channel.
        let mut image = GrayImage::new(output.width, output.height);
        for (dst, src) in image.pixels_mut().zip(target.pixels()) {
            let v = if src.red() > 0 { 255 } else { 0 };
            *dst = Luma([v]);
        }

        Ok(MaskBitmap { image })
    }
}
