use image::{Rgba, RgbaImage};

use artisan_core::adjust::{Adjustments, FilterChain, FilterOp};

#[test]
fn test_default_adjustments_are_identity() {
    let adj = Adjustments::default();
    assert!(adj.is_identity());
    assert!(FilterChain::from(&adj).is_identity());
    assert_eq!(adj.sharpness, 0.0);
}

#[test]
fn test_sharpness_has_no_rendering_effect() {
    let adj = Adjustments {
        sharpness: 50.0,
        ..Adjustments::default()
    };
    assert!(adj.is_identity());
}

#[test]
fn test_chain_order_is_brightness_contrast_saturate() {
    let chain = FilterChain::from(&Adjustments::new(150.0, 80.0, 120.0));
    assert_eq!(
        chain.ops(),
        &[
            FilterOp::Brightness(1.5),
            FilterOp::Contrast(0.8),
            FilterOp::Saturate(1.2),
        ]
    );
}

#[test]
fn test_identity_chain_leaves_pixel_unchanged() {
    let chain = FilterChain::from(&Adjustments::default());
    for px in [[0, 0, 0, 255], [12, 200, 99, 128], [255, 255, 255, 0]] {
        assert_eq!(chain.apply_pixel(px), px);
    }
}

#[test]
fn test_brightness_scales_channels() {
    let chain = FilterChain::from(&Adjustments::new(150.0, 100.0, 100.0));
    assert_eq!(chain.apply_pixel([100, 100, 100, 255]), [150, 150, 150, 255]);
}

#[test]
fn test_clamp_after_brightness_makes_order_observable() {
    // Brightness 200% clips 200 to white before contrast pulls it back to 0.75.
    let chain = FilterChain::from(&Adjustments::new(200.0, 50.0, 100.0));
    assert_eq!(chain.apply_pixel([200, 200, 200, 255]), [191, 191, 191, 255]);

    let reversed = FilterChain::new(vec![FilterOp::Contrast(0.5), FilterOp::Brightness(2.0)]);
    assert_eq!(reversed.apply_pixel([200, 200, 200, 255]), [255, 255, 255, 255]);
}

#[test]
fn test_zero_contrast_is_mid_gray() {
    let chain = FilterChain::from(&Adjustments::new(100.0, 0.0, 100.0));
    let [r, g, b, _] = chain.apply_pixel([10, 240, 77, 255]);
    for v in [r, g, b] {
        assert!(v.abs_diff(128) <= 1, "got {v}");
    }
}

#[test]
fn test_zero_saturation_is_grayscale() {
    let chain = FilterChain::from(&Adjustments::new(100.0, 100.0, 0.0));
    let [r, g, b, a] = chain.apply_pixel([255, 0, 0, 200]);
    assert_eq!(r, g);
    assert_eq!(g, b);
    assert_eq!(r, 54);
    assert_eq!(a, 200);
}

#[test]
fn test_alpha_is_untouched() {
    let chain = FilterChain::from(&Adjustments::new(40.0, 160.0, 30.0));
    for alpha in [0, 1, 128, 255] {
        assert_eq!(chain.apply_pixel([90, 120, 200, alpha])[3], alpha);
    }
}

#[test]
fn test_in_place_matches_per_pixel_on_large_buffer() {
    // Large enough to take the parallel path.
    let image = RgbaImage::from_fn(300, 300, |x, y| {
        Rgba([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8, 255])
    });
    let chain = FilterChain::from(&Adjustments::new(120.0, 90.0, 140.0));

    let mut filtered = image.clone();
    chain.apply_in_place(&mut filtered);

    for (src, dst) in image.pixels().zip(filtered.pixels()) {
        assert_eq!(chain.apply_pixel(src.0), dst.0);
    }
}

#[test]
fn test_in_place_identity_is_noop() {
    let image = RgbaImage::from_pixel(8, 8, Rgba([1, 2, 3, 4]));
    let mut copy = image.clone();
    FilterChain::from(&Adjustments::default()).apply_in_place(&mut copy);
    assert_eq!(copy, image);
}
