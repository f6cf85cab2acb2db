use serde::{Deserialize, Serialize};

use crate::error::{ArtisanError, Result};
use crate::source::ImageSource;

/// What the backend returned for one request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EditResponse {
    /// Bare base64 image data.
    Image { data: String },
    /// The model answered with text instead of an image.
    Text { text: String },
    /// The request was blocked by safety settings.
    Blocked,
    /// Nothing usable came back.
    Empty,
}

impl EditResponse {
    /// Decode the returned image, or turn the response into an error.
    pub fn into_image(self) -> Result<ImageSource> {
        match self {
            Self::Image { data } => ImageSource::from_base64(&data),
            Self::Text { text } => Err(ArtisanError::Backend(format!(
                "the model returned text instead of an image: \"{text}\""
            ))),
            Self::Blocked => Err(ArtisanError::Backend(
                "the request was blocked by safety settings; adjust the prompt, image or mask"
                    .into(),
            )),
            Self::Empty => Err(ArtisanError::Backend(
                "the edit failed or returned no image".into(),
            )),
        }
    }
}
