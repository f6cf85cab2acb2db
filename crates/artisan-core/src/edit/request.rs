use serde::{Deserialize, Serialize};

use crate::error::{ArtisanError, Result};
use crate::io::{image_io, payload};
use crate::mask::MaskBitmap;
use crate::source::ImageSource;

/// An inline image: MIME type plus bare base64 data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImagePart {
    pub mime_type: String,
    pub data: String,
}

impl ImagePart {
    /// Wrap encoded image bytes, detecting the MIME type from their content.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let format = image::guess_format(bytes)
            .map_err(|e| ArtisanError::Decode(format!("unrecognised image data: {e}")))?;
        Ok(Self {
            mime_type: format.to_mime_type().to_string(),
            data: payload::to_base64(bytes),
        })
    }

    /// Encode a decoded image as PNG.
    pub fn from_source(source: &ImageSource) -> Result<Self> {
        let png = image_io::encode_png(source.pixels())?;
        Ok(Self {
            mime_type: "image/png".to_string(),
            data: payload::to_base64(&png),
        })
    }

    pub fn from_mask(mask: &MaskBitmap) -> Result<Self> {
        Ok(Self {
            mime_type: "image/png".to_string(),
            data: mask.to_base64()?,
        })
    }

    pub fn decode(&self) -> Result<Vec<u8>> {
        payload::decode_base64(&self.data)
    }
}

/// One element of the ordered request body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestPart {
    Image(ImagePart),
    Text(String),
}

/// Everything the backend needs for one edit: the base image, the
/// instruction, and optionally a mask and a reference image.
///
/// No mask means the edit applies to the whole image.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EditRequest {
    pub base: ImagePart,
    pub instruction: String,
    pub mask: Option<ImagePart>,
    pub reference: Option<ImagePart>,
}

impl EditRequest {
    pub fn new(base: ImagePart, instruction: impl Into<String>) -> Self {
        Self {
            base,
            instruction: instruction.into(),
            mask: None,
            reference: None,
        }
    }

    pub fn with_mask(mut self, mask: &MaskBitmap) -> Result<Self> {
        self.mask = Some(ImagePart::from_mask(mask)?);
        Ok(self)
    }

    /// Attach an already encoded mask payload, as held by the editor session.
    pub fn with_mask_payload(mut self, data: impl Into<String>) -> Self {
        self.mask = Some(ImagePart {
            mime_type: "image/png".to_string(),
            data: data.into(),
        });
        self
    }

    pub fn with_reference(mut self, reference: ImagePart) -> Self {
        self.reference = Some(reference);
        self
    }

    /// Body parts in transmission order: base image, instruction, mask,
    /// reference image.
    pub fn parts(&self) -> Vec<RequestPart> {
        let mut parts = vec![
            RequestPart::Image(self.base.clone()),
            RequestPart::Text(self.instruction.clone()),
        ];
        if let Some(mask) = &self.mask {
            parts.push(RequestPart::Image(mask.clone()));
        }
        if let Some(reference) = &self.reference {
            parts.push(RequestPart::Image(reference.clone()));
        }
        parts
    }
}
