mod common;

use tiny_skia::Pixmap;

use artisan_core::adjust::{Adjustments, FilterChain};
use artisan_core::aspect::AspectRatio;
use artisan_core::consts::{CHECKER_DARK, CHECKER_LIGHT};
use artisan_core::error::ArtisanError;
use artisan_core::geometry::Size;
use artisan_core::layout::{compute_layout, CanvasLayout};
use artisan_core::raster::pixmap_to_rgba;
use artisan_core::render::{export_image, Renderer};

use common::{close_rgba, gradient_image, solid_image};

const RED: [u8; 4] = [200, 30, 40, 255];

fn opaque(rgb: [u8; 3]) -> [u8; 4] {
    [rgb[0], rgb[1], rgb[2], 255]
}

fn loaded(width: u32, height: u32) -> Renderer {
    let mut renderer = Renderer::new();
    renderer.load(solid_image(width, height, RED)).unwrap();
    renderer
}

#[test]
fn test_render_without_image_fails() {
    let mut renderer = Renderer::new();
    let layout = compute_layout(Size::new(100.0, 100.0), 10, 10, AspectRatio::Original).unwrap();
    let err = renderer
        .render(&layout, AspectRatio::Original, &Adjustments::default())
        .unwrap_err();
    assert!(matches!(err, ArtisanError::NoImage));
}

#[test]
fn test_degenerate_layout_is_rejected() {
    let mut renderer = loaded(10, 10);
    let err = renderer
        .render(
            &CanvasLayout::default(),
            AspectRatio::Original,
            &Adjustments::default(),
        )
        .unwrap_err();
    assert!(matches!(err, ArtisanError::DegenerateLayout { .. }));
}

#[test]
fn test_original_fills_canvas_without_checkerboard() {
    let mut renderer = loaded(100, 50);
    let layout = compute_layout(Size::new(300.0, 100.0), 100, 50, AspectRatio::Original).unwrap();
    let canvas = renderer
        .render(&layout, AspectRatio::Original, &Adjustments::default())
        .unwrap();
    assert_eq!((canvas.width(), canvas.height()), (200, 100));

    let rgba = pixmap_to_rgba(canvas);
    for (x, y) in [(100, 50), (2, 2), (197, 97)] {
        assert!(close_rgba(rgba.get_pixel(x, y).0, RED, 2), "({x}, {y})");
    }
}

#[test]
fn test_square_pads_with_checkerboard() {
    let mut renderer = loaded(100, 50);
    let layout = compute_layout(Size::new(200.0, 200.0), 100, 50, AspectRatio::Square).unwrap();
    let canvas = renderer
        .render(&layout, AspectRatio::Square, &Adjustments::default())
        .unwrap();
    let rgba = pixmap_to_rgba(canvas);

    // Image occupies rows 50..150; rows above and below are padding.
    assert!(close_rgba(rgba.get_pixel(100, 100).0, RED, 2));
    assert!(close_rgba(rgba.get_pixel(5, 5).0, opaque(CHECKER_DARK), 2));
    assert!(close_rgba(rgba.get_pixel(15, 5).0, opaque(CHECKER_LIGHT), 2));
    assert!(close_rgba(rgba.get_pixel(15, 15).0, opaque(CHECKER_DARK), 2));
    assert!(close_rgba(rgba.get_pixel(25, 185).0, opaque(CHECKER_DARK), 2));
}

#[test]
fn test_adjustments_apply_only_to_image() {
    let mut renderer = loaded(100, 50);
    let adj = Adjustments::new(50.0, 120.0, 80.0);
    let layout = compute_layout(Size::new(200.0, 200.0), 100, 50, AspectRatio::Square).unwrap();
    let canvas = renderer.render(&layout, AspectRatio::Square, &adj).unwrap();
    let rgba = pixmap_to_rgba(canvas);

    let expected = FilterChain::from(&adj).apply_pixel(RED);
    assert!(close_rgba(rgba.get_pixel(100, 100).0, expected, 2));
    assert!(close_rgba(rgba.get_pixel(5, 5).0, opaque(CHECKER_DARK), 2));
}

#[test]
fn test_invalidate_drops_rendered_canvas() {
    let mut renderer = loaded(100, 50);
    let layout = compute_layout(Size::new(200.0, 200.0), 100, 50, AspectRatio::Original).unwrap();
    renderer
        .render(&layout, AspectRatio::Original, &Adjustments::default())
        .unwrap();
    assert!(renderer.canvas().is_some());

    renderer.invalidate();
    assert!(renderer.canvas().is_none());
    assert!(renderer.snapshot(None).is_none());
    assert!(renderer.source().is_some());
}

#[test]
fn test_rerender_reuses_canvas_and_clears_it() {
    let mut renderer = loaded(100, 50);
    let square = compute_layout(Size::new(200.0, 200.0), 100, 50, AspectRatio::Square).unwrap();
    renderer
        .render(&square, AspectRatio::Square, &Adjustments::default())
        .unwrap();

    // Same backing size under Original: the former padding must not survive.
    let original = CanvasLayout {
        canvas_width: 200.0,
        canvas_height: 200.0,
        image_offset_x: 0.0,
        image_offset_y: 0.0,
        image_draw_width: 200.0,
        image_draw_height: 200.0,
    };
    let canvas = renderer
        .render(&original, AspectRatio::Original, &Adjustments::default())
        .unwrap();
    let rgba = pixmap_to_rgba(canvas);
    assert!(close_rgba(rgba.get_pixel(5, 5).0, RED, 2));
}

#[test]
fn test_export_is_filtered_natural_image() {
    let source = gradient_image(64, 32);
    let adj = Adjustments::new(130.0, 70.0, 150.0);

    let mut renderer = Renderer::new();
    renderer.load(source.clone()).unwrap();
    let layout = compute_layout(Size::new(500.0, 500.0), 64, 32, AspectRatio::Widescreen).unwrap();
    renderer
        .render(&layout, AspectRatio::Widescreen, &adj)
        .unwrap();

    let exported = renderer.export(&adj).unwrap();
    assert_eq!(exported.dimensions(), (64, 32));
    assert_eq!(exported, export_image(&source, &adj));

    let chain = FilterChain::from(&adj);
    for (src, dst) in source.pixels().pixels().zip(exported.pixels()) {
        assert_eq!(chain.apply_pixel(src.0), dst.0);
    }
}

#[test]
fn test_export_without_image_fails() {
    let renderer = Renderer::new();
    assert!(matches!(
        renderer.export(&Adjustments::default()),
        Err(ArtisanError::NoImage)
    ));
}

#[test]
fn test_snapshot_composites_overlay() {
    let mut renderer = loaded(20, 20);
    let layout = compute_layout(Size::new(20.0, 20.0), 20, 20, AspectRatio::Original).unwrap();
    renderer
        .render(&layout, AspectRatio::Original, &Adjustments::default())
        .unwrap();

    let plain = renderer.snapshot(None).unwrap();
    assert!(close_rgba(plain.get_pixel(10, 10).0, RED, 2));

    let mut overlay = Pixmap::new(20, 20).unwrap();
    overlay.fill(tiny_skia::Color::WHITE);
    let shown = renderer.snapshot(Some(&overlay)).unwrap();
    let px = shown.get_pixel(10, 10).0;
    assert!(px[1] > 150, "overlay not visible: {px:?}");
    assert!(px[0] > px[1]);
}
