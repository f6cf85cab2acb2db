use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ArtisanError;

/// Target aspect ratio for the canvas.
///
/// Anything other than `Original` pads the canvas beyond the image bounds so
/// the backend can fill the padding with generated content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AspectRatio {
    #[default]
    #[serde(rename = "original")]
    Original,
    #[serde(rename = "1:1")]
    Square,
    #[serde(rename = "4:5")]
    Portrait,
    #[serde(rename = "16:9")]
    Widescreen,
}

impl AspectRatio {
    pub const ALL: &[Self] = &[
        Self::Original,
        Self::Square,
        Self::Portrait,
        Self::Widescreen,
    ];

    /// Return the width/height ratio, or `None` to use the image's own ratio.
    pub fn ratio(&self) -> Option<f64> {
        match self {
            Self::Original => None,
            Self::Square => Some(1.0),
            Self::Portrait => Some(4.0 / 5.0),
            Self::Widescreen => Some(16.0 / 9.0),
        }
    }

    /// Resolve against an image's native ratio.
    pub fn resolve(&self, native: f64) -> f64 {
        self.ratio().unwrap_or(native)
    }

    /// Whether this ratio can pad the canvas.
    pub fn expands(&self) -> bool {
        !matches!(self, Self::Original)
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Original => write!(f, "original"),
            Self::Square => write!(f, "1:1"),
            Self::Portrait => write!(f, "4:5"),
            Self::Widescreen => write!(f, "16:9"),
        }
    }
}

impl FromStr for AspectRatio {
    type Err = ArtisanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "original" => Ok(Self::Original),
            "1:1" => Ok(Self::Square),
            "4:5" => Ok(Self::Portrait),
            "16:9" => Ok(Self::Widescreen),
            other => Err(ArtisanError::Config(format!(
                "unknown aspect ratio '{other}' (expected original, 1:1, 4:5 or 16:9)"
            ))),
        }
    }
}
