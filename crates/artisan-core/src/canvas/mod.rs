//! The image canvas: one render pipeline and one mask surface, kept in step
//! with the container, aspect ratio and adjustments.

mod observer;

use std::sync::Arc;

use image::RgbaImage;
use tiny_skia::Pixmap;
use tracing::{debug, info, warn};

use crate::adjust::Adjustments;
use crate::aspect::AspectRatio;
use crate::config::EditorConfig;
use crate::error::{ArtisanError, Result};
use crate::geometry::{Point, Size};
use crate::layout::{compute_layout, CanvasLayout};
use crate::mask::{MaskBitmap, MaskSurface};
use crate::output_size::{resolve_output_size, OutputSize, OutputSizeTracker};
use crate::pointer::{map_pointer, PointerEvent};
use crate::render::Renderer;
use crate::source::ImageSource;

pub use observer::{CanvasObserver, NoOpObserver};

/// Canvas orchestrator.
///
/// Every mutating call recomputes layout and output size synchronously
/// before returning, so later pointer events always map against the current
/// layout.
pub struct ImageCanvas {
    container: Size,
    aspect: AspectRatio,
    adjustments: Adjustments,
    layout: CanvasLayout,
    output: Option<OutputSize>,
    tracker: OutputSizeTracker,
    /// Bumped whenever the layout or output size changes.
    layout_epoch: u64,
    /// Epoch at which the active stroke began.
    stroke_epoch: Option<u64>,
    mask: MaskSurface,
    renderer: Renderer,
    observer: Arc<dyn CanvasObserver>,
}

impl ImageCanvas {
    pub fn new(container: Size, config: &EditorConfig) -> Result<Self> {
        Self::with_observer(container, config, Arc::new(NoOpObserver))
    }

    pub fn with_observer(
        container: Size,
        config: &EditorConfig,
        observer: Arc<dyn CanvasObserver>,
    ) -> Result<Self> {
        Ok(Self {
            container,
            aspect: config.canvas.aspect_ratio,
            adjustments: config.adjustments,
            layout: CanvasLayout::default(),
            output: None,
            tracker: OutputSizeTracker::new(),
            layout_epoch: 0,
            stroke_epoch: None,
            mask: MaskSurface::new(0, 0, OutputSize::new(0, 0), config.brush.size)?,
            renderer: Renderer::new(),
            observer,
        })
    }

    pub fn layout(&self) -> &CanvasLayout {
        &self.layout
    }

    /// Current output resolution, once an image is loaded.
    pub fn output_size(&self) -> Option<OutputSize> {
        self.output
    }

    pub fn aspect_ratio(&self) -> AspectRatio {
        self.aspect
    }

    pub fn adjustments(&self) -> &Adjustments {
        &self.adjustments
    }

    pub fn container(&self) -> Size {
        self.container
    }

    pub fn mask(&self) -> &MaskSurface {
        &self.mask
    }

    pub fn source(&self) -> Option<&ImageSource> {
        self.renderer.source()
    }

    /// The last rendered display canvas.
    pub fn display(&self) -> Option<&Pixmap> {
        self.renderer.canvas()
    }

    /// Display canvas with the live mask overlay composited on top.
    pub fn preview(&self) -> Option<RgbaImage> {
        self.renderer.snapshot(self.mask.overlay())
    }

    /// Replace the base image. The mask is cleared.
    pub fn load_image(&mut self, source: ImageSource) -> Result<()> {
        info!(
            width = source.natural_width(),
            height = source.natural_height(),
            "Loading image"
        );
        self.renderer.load(source)?;
        self.stroke_epoch = None;
        self.relayout(true)?;
        self.clear_mask();
        self.redraw()
    }

    pub fn resize_container(&mut self, container: Size) -> Result<()> {
        self.container = container;
        self.relayout(false)?;
        self.redraw()
    }

    pub fn set_aspect_ratio(&mut self, aspect: AspectRatio) -> Result<()> {
        if aspect == self.aspect {
            return Ok(());
        }
        self.aspect = aspect;
        self.relayout(false)?;
        self.redraw()
    }

    /// Re-render with new adjustments. The mask is untouched.
    pub fn set_adjustments(&mut self, adjustments: Adjustments) -> Result<()> {
        self.adjustments = adjustments;
        self.redraw()
    }

    pub fn set_brush_size(&mut self, diameter: f64) {
        self.mask.set_brush_size(diameter);
    }

    /// Recompute layout and output size, report a changed output size, and
    /// discard the mask if its raster no longer matches.
    fn relayout(&mut self, force_mask_reset: bool) -> Result<()> {
        let Some(source) = self.renderer.source() else {
            return Ok(());
        };
        let (nw, nh) = (source.natural_width(), source.natural_height());

        let layout = compute_layout(self.container, nw, nh, self.aspect)?;
        let output = resolve_output_size(nw, nh, self.aspect)?;

        if let Some(size) = self.tracker.observe(output) {
            debug!(output = %size, "Output size changed");
            self.observer.output_size_changed(size);
        }

        let backing_changed = layout.backing_size() != self.mask.backing_size();
        let output_changed = self.output != Some(output);
        self.layout = layout;
        self.output = Some(output);

        if force_mask_reset || backing_changed || output_changed {
            self.layout_epoch += 1;
            if !self.mask.is_empty() || self.mask.is_drawing() {
                info!("Layout changed; discarding mask");
            }
            let (w, h) = layout.backing_size();
            self.mask.reset(w, h, output)?;
        }
        Ok(())
    }

    fn redraw(&mut self) -> Result<()> {
        if self.layout.is_degenerate() {
            debug!("Degenerate layout; skipping draw");
            self.renderer.invalidate();
            return Ok(());
        }
        match self
            .renderer
            .render(&self.layout, self.aspect, &self.adjustments)
        {
            Ok(_) | Err(ArtisanError::NoImage) => Ok(()),
            Err(e) => Err(e),
        }
    }

    fn map(&self, event: &PointerEvent) -> Option<Point> {
        let (w, h) = self.layout.backing_size();
        map_pointer(event.page, event.canvas_box, w, h)
    }

    /// Press: begin a stroke with a dot at the mapped position.
    pub fn pointer_down(&mut self, event: &PointerEvent) -> bool {
        let Some(p) = self.map(event) else {
            return false;
        };
        let started = self.mask.begin_stroke(p);
        if started {
            self.stroke_epoch = Some(self.layout_epoch);
        }
        started
    }

    /// Move: extend the active stroke, if any.
    pub fn pointer_move(&mut self, event: &PointerEvent) -> bool {
        if !self.mask.is_drawing() {
            return false;
        }
        match self.map(event) {
            Some(p) => self.mask.extend_stroke(p),
            None => false,
        }
    }

    /// Release: end the stroke and resolve the mask at output resolution.
    ///
    /// Returns `None` when no stroke was active, or when the layout changed
    /// while the stroke was in progress; a stroke resolved against a stale
    /// layout is discarded instead of reported.
    pub fn pointer_up(&mut self) -> Result<Option<MaskBitmap>> {
        let was_drawing = self.mask.end_stroke();
        let Some(stroke_epoch) = self.stroke_epoch.take() else {
            return Ok(None);
        };
        // A relayout has already wiped the raster and ended the stroke.
        if stroke_epoch != self.layout_epoch {
            warn!(
                started = stroke_epoch,
                current = self.layout_epoch,
                "Layout changed during stroke; discarding mask"
            );
            return Ok(None);
        }
        if !was_drawing {
            return Ok(None);
        }
        let Some(output) = self.output else {
            return Ok(None);
        };

        match self.mask.resolve(output) {
            Ok(bitmap) => {
                debug!(
                    output = %output,
                    strokes = self.mask.stroke_count(),
                    "Mask resolved"
                );
                self.observer.mask_resolved(&bitmap);
                Ok(Some(bitmap))
            }
            Err(ArtisanError::StaleMask { drawn_for, current }) => {
                warn!(%drawn_for, %current, "Mask resolved against stale output size; discarding");
                self.discard_mask()?;
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    fn discard_mask(&mut self) -> Result<()> {
        let (w, h) = self.layout.backing_size();
        let output = self.output.unwrap_or(OutputSize::new(0, 0));
        self.mask.reset(w, h, output)
    }

    /// Wipe the mask and notify the sink. Each call bumps the generation.
    pub fn clear_mask(&mut self) -> u64 {
        self.mask.clear();
        let generation = self.mask.generation();
        self.observer.mask_cleared(generation);
        generation
    }

    /// Full-resolution image with the current adjustments baked in.
    pub fn export(&self) -> Result<RgbaImage> {
        self.renderer.export(&self.adjustments)
    }
}
