use std::fmt;

use serde::{Deserialize, Serialize};

use crate::aspect::AspectRatio;
use crate::error::Result;
use crate::layout::native_ratio;

/// Resolution, in image pixels, that any expanded or generated output must have.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OutputSize {
    pub width: u32,
    pub height: u32,
}

impl OutputSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for OutputSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Resolve the output resolution for an image under a target aspect ratio.
///
/// `Original` keeps the natural size. Otherwise the axis that must grow to
/// reach the target ratio is inflated (rounded half away from zero) and the
/// other axis stays at its native value.
pub fn resolve_output_size(
    natural_width: u32,
    natural_height: u32,
    aspect: AspectRatio,
) -> Result<OutputSize> {
    let native = native_ratio(natural_width, natural_height)?;

    let Some(target) = aspect.ratio() else {
        return Ok(OutputSize::new(natural_width, natural_height));
    };

    if target > native {
        let width = (natural_height as f64 * target).round() as u32;
        Ok(OutputSize::new(width, natural_height))
    } else {
        let height = (natural_width as f64 / target).round() as u32;
        Ok(OutputSize::new(natural_width, height))
    }
}

/// Remembers the last output size handed to the sink so each change is
/// reported exactly once.
#[derive(Clone, Debug, Default)]
pub struct OutputSizeTracker {
    last_reported: Option<OutputSize>,
}

impl OutputSizeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `size`; returns it when it differs from the last reported value.
    pub fn observe(&mut self, size: OutputSize) -> Option<OutputSize> {
        if self.last_reported == Some(size) {
            return None;
        }
        self.last_reported = Some(size);
        Some(size)
    }

    pub fn last_reported(&self) -> Option<OutputSize> {
        self.last_reported
    }

    pub fn reset(&mut self) {
        self.last_reported = None;
    }
}
