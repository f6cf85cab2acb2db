use artisan_core::error::ArtisanError;
use artisan_core::geometry::Point;
use artisan_core::mask::{MaskBitmap, MaskSurface};
use artisan_core::output_size::OutputSize;

const OUTPUT: OutputSize = OutputSize {
    width: 400,
    height: 200,
};

/// 200x100 display raster resolved at twice the size.
fn surface(brush: f64) -> MaskSurface {
    MaskSurface::new(200, 100, OUTPUT, brush).unwrap()
}

fn dot(mask: &mut MaskSurface, x: f64, y: f64) {
    assert!(mask.begin_stroke(Point::new(x, y)));
    assert!(mask.end_stroke());
}

#[test]
fn test_no_strokes_resolves_to_black_at_output_size() {
    let mask = surface(20.0);
    let bitmap = mask.resolve(OUTPUT).unwrap();
    assert_eq!(bitmap.size(), OUTPUT);
    assert!(bitmap.is_blank());
    assert_eq!(bitmap, MaskBitmap::blank(OUTPUT));
}

#[test]
fn test_press_without_move_paints_scaled_dot() {
    let mut mask = surface(20.0);
    dot(&mut mask, 50.0, 50.0);

    let bitmap = mask.resolve(OUTPUT).unwrap();
    assert_eq!((bitmap.width(), bitmap.height()), (400, 200));
    assert!(bitmap.is_selected(100, 100));
    assert!(bitmap.is_selected(115, 100));
    assert!(!bitmap.is_selected(130, 100));
    assert!(!bitmap.is_selected(300, 100));

    // Radius 10 at display resolution is radius 20 at output: ~1257 pixels
    // plus the resampled edge.
    let count = bitmap.selected_count();
    assert!((1100..1800).contains(&count), "selected {count}");
}

#[test]
fn test_resolved_values_are_binary() {
    let mut mask = surface(15.0);
    dot(&mut mask, 40.0, 40.0);
    let bitmap = mask.resolve(OUTPUT).unwrap();
    assert!(bitmap.image().pixels().all(|p| p.0[0] == 0 || p.0[0] == 255));
}

#[test]
fn test_drag_paints_connected_segment() {
    let mut mask = surface(10.0);
    assert!(mask.begin_stroke(Point::new(20.0, 50.0)));
    assert!(mask.extend_stroke(Point::new(100.0, 50.0)));
    assert!(mask.extend_stroke(Point::new(180.0, 50.0)));
    assert!(mask.end_stroke());

    let bitmap = mask.resolve(OUTPUT).unwrap();
    for x in [40, 120, 200, 280, 360] {
        assert!(bitmap.is_selected(x, 100), "gap at x={x}");
    }
    assert!(!bitmap.is_selected(200, 20));
    assert_eq!(mask.stroke_count(), 1);
}

#[test]
fn test_strokes_accumulate_until_cleared() {
    let mut mask = surface(20.0);
    dot(&mut mask, 30.0, 50.0);
    let first = mask.resolve(OUTPUT).unwrap();

    dot(&mut mask, 150.0, 50.0);
    let second = mask.resolve(OUTPUT).unwrap();

    assert!(second.is_selected(60, 100));
    assert!(second.is_selected(300, 100));
    assert!(second.selected_count() > first.selected_count());
    assert_eq!(mask.stroke_count(), 2);
}

#[test]
fn test_overlapping_strokes_stay_selected() {
    let mut mask = surface(20.0);
    dot(&mut mask, 100.0, 50.0);
    dot(&mut mask, 100.0, 50.0);
    let bitmap = mask.resolve(OUTPUT).unwrap();
    assert!(bitmap.is_selected(200, 100));
}

#[test]
fn test_clear_bumps_generation_every_time() {
    let mut mask = surface(20.0);
    dot(&mut mask, 100.0, 50.0);
    assert_eq!(mask.generation(), 0);

    mask.clear();
    assert_eq!(mask.generation(), 1);
    assert!(mask.is_empty());
    assert!(mask.resolve(OUTPUT).unwrap().is_blank());

    // A second clear with nothing drawn is still observable.
    mask.clear();
    assert_eq!(mask.generation(), 2);
}

#[test]
fn test_resolve_against_other_output_is_stale() {
    let mut mask = surface(20.0);
    dot(&mut mask, 100.0, 50.0);
    let err = mask.resolve(OutputSize::new(400, 400)).unwrap_err();
    assert!(matches!(err, ArtisanError::StaleMask { .. }));
}

#[test]
fn test_reset_reallocates_and_retargets() {
    let mut mask = surface(20.0);
    dot(&mut mask, 100.0, 50.0);

    let square = OutputSize::new(400, 400);
    mask.reset(100, 100, square).unwrap();
    assert_eq!(mask.backing_size(), (100, 100));
    assert_eq!(mask.drawn_for(), square);
    assert_eq!(mask.generation(), 1);
    assert!(mask.is_empty());
    assert!(mask.resolve(square).unwrap().is_blank());
    assert!(mask.resolve(OUTPUT).is_err());
}

#[test]
fn test_move_without_press_is_ignored() {
    let mut mask = surface(20.0);
    assert!(!mask.extend_stroke(Point::new(10.0, 10.0)));
    assert!(!mask.end_stroke());
    assert!(mask.resolve(OUTPUT).unwrap().is_blank());
}

#[test]
fn test_zero_size_surface_draws_nothing() {
    let mut mask = MaskSurface::new(0, 0, OUTPUT, 20.0).unwrap();
    assert!(!mask.begin_stroke(Point::new(1.0, 1.0)));
    assert!(!mask.is_drawing());
    assert!(mask.resolve(OUTPUT).unwrap().is_blank());
}

#[test]
fn test_brush_size_is_clamped() {
    let mut mask = surface(20.0);
    mask.set_brush_size(0.0);
    assert_eq!(mask.brush_size(), 1.0);
    mask.set_brush_size(10_000.0);
    assert_eq!(mask.brush_size(), 500.0);
}

#[test]
fn test_payload_is_png_at_output_size() {
    let mut mask = surface(20.0);
    dot(&mut mask, 100.0, 50.0);
    let bitmap = mask.resolve(OUTPUT).unwrap();

    let png = bitmap.encode_png().unwrap();
    let decoded = image::load_from_memory(&png).unwrap().to_luma8();
    assert_eq!(decoded.dimensions(), (400, 200));
    assert_eq!(decoded.get_pixel(200, 100).0[0], 255);
    assert_eq!(decoded.get_pixel(0, 0).0[0], 0);

    let b64 = bitmap.to_base64().unwrap();
    assert!(!b64.starts_with("data:"));
}
