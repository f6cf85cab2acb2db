pub mod config;
pub mod export;
pub mod info;
pub mod layout;
pub mod mask;
pub mod render;
pub mod request;

use std::path::Path;

use anyhow::{Context, Result};
use artisan_core::adjust::Adjustments;
use artisan_core::config::EditorConfig;
use artisan_core::geometry::Size;
use clap::Args;

/// Load the editor config from `path`, or the defaults when none is given.
pub fn load_config(path: Option<&Path>) -> Result<EditorConfig> {
    match path {
        Some(path) => EditorConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(EditorConfig::default()),
    }
}

/// Parse a `WIDTHxHEIGHT` container size.
pub fn parse_size(s: &str) -> std::result::Result<Size, String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
    let width: f64 = w.trim().parse().map_err(|e| format!("bad width: {e}"))?;
    let height: f64 = h.trim().parse().map_err(|e| format!("bad height: {e}"))?;
    Ok(Size::new(width, height))
}

/// Tone adjustment flags shared by the rendering commands.
#[derive(Args, Clone)]
pub struct AdjustArgs {
    /// Brightness percentage (100 = unchanged)
    #[arg(long)]
    pub brightness: Option<f32>,

    /// Contrast percentage (100 = unchanged)
    #[arg(long)]
    pub contrast: Option<f32>,

    /// Saturation percentage (100 = unchanged)
    #[arg(long)]
    pub saturation: Option<f32>,
}

impl AdjustArgs {
    /// Overlay any flags given on top of the configured adjustments.
    pub fn resolve(&self, base: &Adjustments) -> Adjustments {
        Adjustments {
            brightness: self.brightness.unwrap_or(base.brightness),
            contrast: self.contrast.unwrap_or(base.contrast),
            saturation: self.saturation.unwrap_or(base.saturation),
            ..*base
        }
    }
}
