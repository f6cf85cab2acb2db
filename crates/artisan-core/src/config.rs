use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::adjust::Adjustments;
use crate::aspect::AspectRatio;
use crate::consts::{DEFAULT_BRUSH_SIZE, DEFAULT_PREVIEW_COUNT};
use crate::error::{ArtisanError, Result};
use crate::geometry::Size;
use crate::session::Capabilities;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EditorConfig {
    #[serde(default)]
    pub canvas: CanvasConfig,
    #[serde(default)]
    pub brush: BrushConfig,
    #[serde(default)]
    pub adjustments: Adjustments,
    #[serde(default)]
    pub generation: GenerationConfig,
    #[serde(default)]
    pub capabilities: Capabilities,
}

impl EditorConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| ArtisanError::Config(e.to_string()))
    }
}

/// Container the canvas is laid out in, for headless use.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub container_width: f64,
    pub container_height: f64,
    pub aspect_ratio: AspectRatio,
}

impl CanvasConfig {
    pub fn container(&self) -> Size {
        Size::new(self.container_width, self.container_height)
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            container_width: 800.0,
            container_height: 600.0,
            aspect_ratio: AspectRatio::Original,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct BrushConfig {
    /// Brush diameter in display pixels.
    pub size: f64,
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_BRUSH_SIZE,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Number of preview variants requested per instruction.
    pub preview_count: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            preview_count: DEFAULT_PREVIEW_COUNT,
        }
    }
}
