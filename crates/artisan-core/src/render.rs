use image::RgbaImage;
use tiny_skia::{
    FilterQuality, Paint, Pattern, Pixmap, PixmapPaint, Rect, SpreadMode, Transform,
};
use tracing::debug;

use crate::adjust::{Adjustments, FilterChain};
use crate::aspect::AspectRatio;
use crate::consts::{CHECKER_DARK, CHECKER_LIGHT, CHECKER_TILE_SIZE, MASK_OVERLAY_OPACITY};
use crate::error::{ArtisanError, Result};
use crate::layout::CanvasLayout;
use crate::raster::{new_pixmap, pixmap_to_rgba, rgba_to_pixmap};
use crate::source::ImageSource;

/// Build one repeating checkerboard tile: light base with dark top-left and
/// bottom-right squares.
fn checker_tile() -> Result<Pixmap> {
    let size = CHECKER_TILE_SIZE;
    let half = (size / 2) as f32;
    let mut tile = new_pixmap(size, size)?;

    let [r, g, b] = CHECKER_LIGHT;
    tile.fill(tiny_skia::Color::from_rgba8(r, g, b, 255));

    let mut dark = Paint::default();
    let [r, g, b] = CHECKER_DARK;
    dark.set_color_rgba8(r, g, b, 255);
    for (x, y) in [(0.0, 0.0), (half, half)] {
        if let Some(rect) = Rect::from_xywh(x, y, half, half) {
            tile.fill_rect(rect, &dark, Transform::identity(), None);
        }
    }
    Ok(tile)
}

/// Fill the whole pixmap with the checkerboard pattern.
fn fill_checkerboard(canvas: &mut Pixmap) -> Result<()> {
    let tile = checker_tile()?;
    let paint = Paint {
        shader: Pattern::new(
            tile.as_ref(),
            SpreadMode::Repeat,
            FilterQuality::Nearest,
            1.0,
            Transform::identity(),
        ),
        ..Paint::default()
    };
    let (w, h) = (canvas.width() as f32, canvas.height() as f32);
    if let Some(rect) = Rect::from_xywh(0.0, 0.0, w, h) {
        canvas.fill_rect(rect, &paint, Transform::identity(), None);
    }
    Ok(())
}

/// Owns the base image and the display canvas, and redraws the canvas on
/// every layout, aspect or adjustment change.
#[derive(Default)]
pub struct Renderer {
    source: Option<ImageSource>,
    /// Premultiplied copy of the source, converted once per load.
    source_pixmap: Option<Pixmap>,
    canvas: Option<Pixmap>,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the base image.
    pub fn load(&mut self, source: ImageSource) -> Result<()> {
        self.source_pixmap = Some(rgba_to_pixmap(source.pixels())?);
        self.source = Some(source);
        Ok(())
    }

    pub fn source(&self) -> Option<&ImageSource> {
        self.source.as_ref()
    }

    /// The last rendered canvas.
    pub fn canvas(&self) -> Option<&Pixmap> {
        self.canvas.as_ref()
    }

    /// Drop the last rendered canvas so it is not shown for a layout it no
    /// longer matches.
    pub fn invalidate(&mut self) {
        self.canvas = None;
    }

    /// Redraw the display canvas.
    ///
    /// Steps: clear; checkerboard behind everything when `aspect` can pad;
    /// base image scaled into its draw rectangle with the filter chain
    /// applied. A degenerate layout draws nothing.
    pub fn render(
        &mut self,
        layout: &CanvasLayout,
        aspect: AspectRatio,
        adjustments: &Adjustments,
    ) -> Result<&Pixmap> {
        let source = self.source_pixmap.as_ref().ok_or(ArtisanError::NoImage)?;
        let (width, height) = layout.backing_size();
        if layout.is_degenerate() {
            return Err(ArtisanError::DegenerateLayout { width, height });
        }

        let mut canvas = match self.canvas.take() {
            Some(mut c) if c.width() == width && c.height() == height => {
                c.fill(tiny_skia::Color::TRANSPARENT);
                c
            }
            _ => new_pixmap(width, height)?,
        };

        if aspect.expands() {
            fill_checkerboard(&mut canvas)?;
        }

        let mut layer = new_pixmap(width, height)?;
        let transform = Transform::from_translate(
            layout.image_offset_x as f32,
            layout.image_offset_y as f32,
        )
        .pre_scale(
            (layout.image_draw_width / source.width() as f64) as f32,
            (layout.image_draw_height / source.height() as f64) as f32,
        );
        let paint = PixmapPaint {
            quality: FilterQuality::Bilinear,
            ..PixmapPaint::default()
        };
        layer.draw_pixmap(0, 0, source.as_ref(), &paint, transform, None);

        let chain = FilterChain::from(adjustments);
        if !chain.is_identity() {
            let mut straight = pixmap_to_rgba(&layer);
            chain.apply_in_place(&mut straight);
            layer = rgba_to_pixmap(&straight)?;
        }

        canvas.draw_pixmap(
            0,
            0,
            layer.as_ref(),
            &PixmapPaint::default(),
            Transform::identity(),
            None,
        );

        debug!(
            width,
            height,
            aspect = %aspect,
            padded = aspect.expands(),
            "Canvas rendered"
        );
        Ok(&*self.canvas.insert(canvas))
    }

    /// Snapshot of the display canvas with an optional mask overlay on top.
    pub fn snapshot(&self, overlay: Option<&Pixmap>) -> Option<RgbaImage> {
        let canvas = self.canvas.as_ref()?;
        let Some(overlay) = overlay else {
            return Some(pixmap_to_rgba(canvas));
        };
        let mut composed = canvas.clone();
        let paint = PixmapPaint {
            opacity: MASK_OVERLAY_OPACITY,
            ..PixmapPaint::default()
        };
        composed.draw_pixmap(0, 0, overlay.as_ref(), &paint, Transform::identity(), None);
        Some(pixmap_to_rgba(&composed))
    }

    /// Full-resolution copy of the base image with the filter chain baked in.
    /// No checkerboard; the output keeps the image's natural size.
    pub fn export(&self, adjustments: &Adjustments) -> Result<RgbaImage> {
        let source = self.source.as_ref().ok_or(ArtisanError::NoImage)?;
        Ok(export_image(source, adjustments))
    }
}

/// Bake adjustments into a copy of `source` at its natural size.
pub fn export_image(source: &ImageSource, adjustments: &Adjustments) -> RgbaImage {
    let mut out = source.pixels().clone();
    FilterChain::from(adjustments).apply_in_place(&mut out);
    out
}
