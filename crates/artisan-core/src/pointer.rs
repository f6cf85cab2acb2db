use crate::geometry::{BoxRect, Point};

/// A pointer sample together with the canvas box it was measured against.
///
/// The box is captured with each event; a resize between two events of the
/// same stroke is picked up on the next sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub page: Point,
    pub canvas_box: BoxRect,
}

impl PointerEvent {
    pub fn new(page: Point, canvas_box: BoxRect) -> Self {
        Self { page, canvas_box }
    }
}

/// Convert a page-space pointer position into canvas backing-store pixels.
///
/// Corrects for the on-screen box having a different size than the backing
/// store. Returns `None` when the box has no area.
pub fn map_pointer(
    page: Point,
    canvas_box: BoxRect,
    backing_width: u32,
    backing_height: u32,
) -> Option<Point> {
    if !(canvas_box.width > 0.0 && canvas_box.height > 0.0) {
        return None;
    }
    let scale_x = backing_width as f64 / canvas_box.width;
    let scale_y = backing_height as f64 / canvas_box.height;
    Some(Point::new(
        (page.x - canvas_box.left) * scale_x,
        (page.y - canvas_box.top) * scale_y,
    ))
}
