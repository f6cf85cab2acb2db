#![allow(dead_code)]

use std::sync::Mutex;

use image::{Rgba, RgbaImage};

use artisan_core::canvas::CanvasObserver;
use artisan_core::geometry::{BoxRect, Point};
use artisan_core::io::image_io;
use artisan_core::mask::MaskBitmap;
use artisan_core::output_size::OutputSize;
use artisan_core::pointer::PointerEvent;
use artisan_core::source::ImageSource;

/// Build a single-color image source.
pub fn solid_image(width: u32, height: u32, rgba: [u8; 4]) -> ImageSource {
    let pixels = RgbaImage::from_pixel(width, height, Rgba(rgba));
    ImageSource::from_rgba(pixels).unwrap()
}

/// Build an opaque image with a horizontal red ramp and a vertical green ramp.
pub fn gradient_image(width: u32, height: u32) -> ImageSource {
    let pixels = RgbaImage::from_fn(width, height, |x, y| {
        let r = (x * 255 / width.max(1)) as u8;
        let g = (y * 255 / height.max(1)) as u8;
        Rgba([r, g, 128, 255])
    });
    ImageSource::from_rgba(pixels).unwrap()
}

/// Encode an image source as PNG bytes.
pub fn png_bytes(source: &ImageSource) -> Vec<u8> {
    image_io::encode_png(source.pixels()).unwrap()
}

/// Pointer event against a canvas box anchored at the page origin.
pub fn event_at(x: f64, y: f64, box_width: f64, box_height: f64) -> PointerEvent {
    PointerEvent::new(
        Point::new(x, y),
        BoxRect::new(0.0, 0.0, box_width, box_height),
    )
}

/// Per-channel comparison with a tolerance for resampling and rounding.
pub fn close_rgba(a: [u8; 4], b: [u8; 4], tol: u8) -> bool {
    a.iter().zip(b.iter()).all(|(x, y)| x.abs_diff(*y) <= tol)
}

/// Observer that records every notification it receives.
#[derive(Default)]
pub struct RecordingObserver {
    pub output_sizes: Mutex<Vec<OutputSize>>,
    pub masks: Mutex<Vec<OutputSize>>,
    pub clears: Mutex<Vec<u64>>,
}

impl RecordingObserver {
    pub fn output_sizes(&self) -> Vec<OutputSize> {
        self.output_sizes.lock().unwrap().clone()
    }

    pub fn masks(&self) -> Vec<OutputSize> {
        self.masks.lock().unwrap().clone()
    }

    pub fn clears(&self) -> Vec<u64> {
        self.clears.lock().unwrap().clone()
    }
}

impl CanvasObserver for RecordingObserver {
    fn output_size_changed(&self, size: OutputSize) {
        self.output_sizes.lock().unwrap().push(size);
    }

    fn mask_resolved(&self, mask: &MaskBitmap) {
        self.masks.lock().unwrap().push(mask.size());
    }

    fn mask_cleared(&self, generation: u64) {
        self.clears.lock().unwrap().push(generation);
    }
}
