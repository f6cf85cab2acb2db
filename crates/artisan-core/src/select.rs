//! Object selection by pointing: the image is sent with a marker dot at the
//! chosen spot and the backend answers with a segmentation mask.

use image::RgbaImage;
use tiny_skia::{FillRule, Paint, PathBuilder, Transform};

use crate::consts::{SELECT_MARKER_COLOR, SELECT_MARKER_MIN_RADIUS, SELECT_MARKER_RADIUS_FRACTION};
use crate::edit::{EditRequest, ImagePart};
use crate::error::{ArtisanError, Result};
use crate::geometry::Point;
use crate::raster::{pixmap_to_rgba, rgba_to_pixmap};
use crate::source::ImageSource;

pub const SELECT_OBJECT_INSTRUCTION: &str = "Generate a precise white-on-black segmentation mask for the object indicated by the bright dot. The masked object must be white and the background black.";

/// Marker radius for an image of the given natural width.
pub fn marker_radius(natural_width: u32) -> f32 {
    (natural_width as f32 * SELECT_MARKER_RADIUS_FRACTION).max(SELECT_MARKER_MIN_RADIUS)
}

/// Copy `source` at native resolution with a marker dot at `point`, given in
/// normalized [0, 1] image coordinates.
pub fn mark_selection_point(source: &ImageSource, point: Point) -> Result<RgbaImage> {
    if !(0.0..=1.0).contains(&point.x) || !(0.0..=1.0).contains(&point.y) {
        return Err(ArtisanError::InvalidPoint {
            x: point.x,
            y: point.y,
        });
    }

    let (w, h) = (source.natural_width(), source.natural_height());
    let mut pixmap = rgba_to_pixmap(source.pixels())?;

    let cx = (point.x * w as f64) as f32;
    let cy = (point.y * h as f64) as f32;
    if let Some(dot) = PathBuilder::from_circle(cx, cy, marker_radius(w)) {
        let mut paint = Paint::default();
        let [r, g, b] = SELECT_MARKER_COLOR;
        paint.set_color_rgba8(r, g, b, 255);
        paint.anti_alias = true;
        pixmap.fill_path(&dot, &paint, FillRule::Winding, Transform::identity(), None);
    }

    Ok(pixmap_to_rgba(&pixmap))
}

/// Build the object-selection request for a click at `point`.
pub fn selection_request(source: &ImageSource, point: Point) -> Result<EditRequest> {
    let marked = ImageSource::from_rgba(mark_selection_point(source, point)?)?;
    Ok(EditRequest::new(
        ImagePart::from_source(&marked)?,
        SELECT_OBJECT_INSTRUCTION,
    ))
}
