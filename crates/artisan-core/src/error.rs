use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArtisanError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to decode image: {0}")]
    Decode(String),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Degenerate canvas layout: {width}x{height}")]
    DegenerateLayout { width: u32, height: u32 },

    #[error("No image loaded")]
    NoImage,

    #[error("Mask was drawn for {drawn_for} but the current output size is {current}")]
    StaleMask { drawn_for: String, current: String },

    #[error("Point ({x}, {y}) is outside the normalized range [0, 1]")]
    InvalidPoint { x: f64, y: f64 },

    #[error("Encoding error: {0}")]
    Encode(String),

    #[error("Backend error: {0}")]
    Backend(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl From<base64::DecodeError> for ArtisanError {
    fn from(err: base64::DecodeError) -> Self {
        ArtisanError::Decode(err.to_string())
    }
}

impl From<toml::de::Error> for ArtisanError {
    fn from(err: toml::de::Error) -> Self {
        ArtisanError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ArtisanError>;
