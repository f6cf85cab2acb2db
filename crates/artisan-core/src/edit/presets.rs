use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ArtisanError;
use crate::output_size::OutputSize;

/// Named artistic styles offered as one-click edits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StyleFilter {
    Anime,
    Watercolor,
    Cyberpunk,
    Steampunk,
    Claymation,
    Vintage,
}

impl StyleFilter {
    pub const ALL: &[Self] = &[
        Self::Anime,
        Self::Watercolor,
        Self::Cyberpunk,
        Self::Steampunk,
        Self::Claymation,
        Self::Vintage,
    ];

    pub fn instruction(&self) -> &'static str {
        match self {
            Self::Anime => "Turn this image into a vibrant, high-quality anime art style that captures the essence of modern Japanese animation.",
            Self::Watercolor => "Transform this photo into a delicate, expressive watercolor painting with soft washes and visible brush strokes.",
            Self::Cyberpunk => "Redesign this image with a futuristic cyberpunk aesthetic: neon lights, high-tech elements and a gritty, dystopian atmosphere.",
            Self::Steampunk => "Redraw this scene in a steampunk style with Victorian aesthetics, industrial steam-powered machinery and intricate clockwork details.",
            Self::Claymation => "Recreate this image as a stop-motion claymation scene with a clear, handmade clay texture and slightly exaggerated features.",
            Self::Vintage => "Give this photo a vintage, old-fashioned look with faded colors, film grain and a nostalgic retro feel reminiscent of the 1960s.",
        }
    }
}

impl fmt::Display for StyleFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Anime => write!(f, "Anime"),
            Self::Watercolor => write!(f, "Watercolor"),
            Self::Cyberpunk => write!(f, "Cyberpunk"),
            Self::Steampunk => write!(f, "Steampunk"),
            Self::Claymation => write!(f, "Claymation"),
            Self::Vintage => write!(f, "Vintage"),
        }
    }
}

impl FromStr for StyleFilter {
    type Err = ArtisanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|f| f.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ArtisanError::Config(format!("unknown style filter '{s}'")))
    }
}

/// Instruction presets behind the editor's one-click actions.
#[derive(Clone, Debug, PartialEq)]
pub enum Preset {
    Enhance,
    Upscale,
    /// Relight according to a lighting description.
    Relight(String),
    /// Remove whatever the mask selects.
    MagicErase,
    RemoveBackground,
    ReplaceBackground(String),
    /// Fill an aspect-expanded canvas of the given output size.
    MagicExpand(OutputSize),
    Style(StyleFilter),
    Custom(String),
}

impl Preset {
    pub fn instruction(&self) -> String {
        match self {
            Self::Enhance => "Subtly improve the quality of this image: refine clarity, exposure and color balance without dramatic changes. Make it look like a professional photograph.".to_string(),
            Self::Upscale => "Significantly increase the resolution and sharpness of this image. Regenerate fine details and textures for a high-definition result while keeping the original composition and subjects.".to_string(),
            Self::Relight(light) => format!(
                "Adjust the lighting of the image according to this description: {light}. Keep the original content and composition; change only the lighting conditions, shadows and highlights."
            ),
            Self::MagicErase => "Seamlessly remove the selected object.".to_string(),
            Self::RemoveBackground => "Remove the background, leaving only the main subject on a transparent background.".to_string(),
            Self::ReplaceBackground(bg) => format!("Replace the background with: {bg}"),
            Self::MagicExpand(size) => format!(
                "Expand the image to fill a canvas of {}x{}. Intelligently generate new content at the edges that blends seamlessly with the original image.",
                size.width, size.height
            ),
            Self::Style(filter) => filter.instruction().to_string(),
            Self::Custom(text) => text.clone(),
        }
    }
}
