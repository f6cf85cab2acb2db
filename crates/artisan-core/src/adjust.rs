//! Brightness / contrast / saturation as an explicit, ordered filter chain.
//!
//! Operators follow the CSS Filter Effects definitions and are applied in a
//! fixed order: brightness, then contrast, then saturate. Channels are
//! clamped to [0, 1] after every step, so the order changes the result at
//! the extremes.

use image::RgbaImage;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::consts::{
    NEUTRAL_ADJUSTMENT, PARALLEL_PIXEL_THRESHOLD, SATURATE_LUMA_B, SATURATE_LUMA_G,
    SATURATE_LUMA_R,
};

/// User-facing tone adjustments as percentages (100 = unchanged).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Adjustments {
    pub brightness: f32,
    pub contrast: f32,
    pub saturation: f32,
    /// Carried for the editor's slider; has no rendering effect.
    pub sharpness: f32,
}

impl Default for Adjustments {
    fn default() -> Self {
        Self {
            brightness: NEUTRAL_ADJUSTMENT,
            contrast: NEUTRAL_ADJUSTMENT,
            saturation: NEUTRAL_ADJUSTMENT,
            sharpness: 0.0,
        }
    }
}

impl Adjustments {
    pub fn new(brightness: f32, contrast: f32, saturation: f32) -> Self {
        Self {
            brightness,
            contrast,
            saturation,
            ..Self::default()
        }
    }

    /// True when every rendered adjustment is at its neutral value.
    pub fn is_identity(&self) -> bool {
        self.brightness == NEUTRAL_ADJUSTMENT
            && self.contrast == NEUTRAL_ADJUSTMENT
            && self.saturation == NEUTRAL_ADJUSTMENT
    }
}

/// One filter primitive. Amounts are multipliers (1.0 = identity).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FilterOp {
    Brightness(f32),
    Contrast(f32),
    Saturate(f32),
}

impl FilterOp {
    /// Apply to a straight-alpha RGB triple in [0, 1].
    pub fn apply(&self, rgb: [f32; 3]) -> [f32; 3] {
        let [r, g, b] = rgb;
        let out = match *self {
            Self::Brightness(k) => [r * k, g * k, b * k],
            Self::Contrast(k) => {
                let c = |v: f32| (v - 0.5) * k + 0.5;
                [c(r), c(g), c(b)]
            }
            Self::Saturate(s) => {
                let (lr, lg, lb) = (SATURATE_LUMA_R, SATURATE_LUMA_G, SATURATE_LUMA_B);
                [
                    (lr + (1.0 - lr) * s) * r + (lg - lg * s) * g + (lb - lb * s) * b,
                    (lr - lr * s) * r + (lg + (1.0 - lg) * s) * g + (lb - lb * s) * b,
                    (lr - lr * s) * r + (lg - lg * s) * g + (lb + (1.0 - lb) * s) * b,
                ]
            }
        };
        out.map(|v| v.clamp(0.0, 1.0))
    }

    fn is_identity(&self) -> bool {
        match *self {
            Self::Brightness(k) | Self::Contrast(k) | Self::Saturate(k) => k == 1.0,
        }
    }
}

/// Ordered sequence of filter primitives applied in a single pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterChain {
    ops: Vec<FilterOp>,
}

impl FilterChain {
    pub fn new(ops: Vec<FilterOp>) -> Self {
        Self { ops }
    }

    pub fn ops(&self) -> &[FilterOp] {
        &self.ops
    }

    pub fn is_identity(&self) -> bool {
        self.ops.iter().all(FilterOp::is_identity)
    }

    /// Run every step, in order, on one straight-alpha RGBA pixel.
    pub fn apply_pixel(&self, px: [u8; 4]) -> [u8; 4] {
        let [r, g, b, a] = px;
        let mut rgb = [r, g, b].map(|v| v as f32 / 255.0);
        for op in &self.ops {
            rgb = op.apply(rgb);
        }
        let [r, g, b] = rgb.map(|v| (v * 255.0).round() as u8);
        [r, g, b, a]
    }

    /// Apply the chain to an RGBA buffer in place. Alpha is left untouched.
    pub fn apply_in_place(&self, image: &mut RgbaImage) {
        if self.is_identity() {
            return;
        }
        let (w, h) = image.dimensions();
        let stride = w as usize * 4;
        if stride == 0 {
            return;
        }
        let raw: &mut [u8] = image;

        let process_row = |row: &mut [u8]| {
            for px in row.chunks_exact_mut(4) {
                let out = self.apply_pixel([px[0], px[1], px[2], px[3]]);
                px.copy_from_slice(&out);
            }
        };

        if (w as usize) * (h as usize) >= PARALLEL_PIXEL_THRESHOLD {
            raw.par_chunks_mut(stride).for_each(process_row);
        } else {
            raw.chunks_mut(stride).for_each(process_row);
        }
    }
}

impl From<&Adjustments> for FilterChain {
    /// Brightness, then contrast, then saturate.
    fn from(adj: &Adjustments) -> Self {
        Self::new(vec![
            FilterOp::Brightness(adj.brightness / 100.0),
            FilterOp::Contrast(adj.contrast / 100.0),
            FilterOp::Saturate(adj.saturation / 100.0),
        ])
    }
}
