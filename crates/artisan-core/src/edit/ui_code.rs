use serde::{Deserialize, Serialize};

use crate::error::{ArtisanError, Result};
use crate::session::Capabilities;
use crate::source::ImageSource;

use super::request::{EditRequest, ImagePart};
use super::response::EditResponse;
use super::EditBackend;

/// HTML and CSS recreating the current image as a web interface.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiCode {
    pub html: String,
    pub css: String,
}

impl UiCode {
    /// Pull the fenced `html` and `css` blocks out of a text answer.
    ///
    /// The HTML block is required; a missing CSS block yields empty CSS.
    pub fn from_text(text: &str) -> Result<Self> {
        let html = fenced_block(text, "html").ok_or_else(|| {
            ArtisanError::Backend("the model returned no HTML code block".into())
        })?;
        let css = fenced_block(text, "css").unwrap_or_default();
        Ok(Self {
            html: html.to_string(),
            css: css.to_string(),
        })
    }
}

fn fenced_block<'a>(text: &'a str, lang: &str) -> Option<&'a str> {
    let open = format!("```{lang}");
    let start = text.find(&open)? + open.len();
    let rest = &text[start..];
    let end = rest.find("```")?;
    Some(rest[..end].trim())
}

/// Build the request asking for UI code that looks like `source`.
///
/// Fails when the capability is disabled.
pub fn ui_code_request(
    source: &ImageSource,
    prompt: &str,
    capabilities: &Capabilities,
) -> Result<EditRequest> {
    if !capabilities.ui_code {
        return Err(ArtisanError::Config(
            "UI-code generation is not enabled".into(),
        ));
    }
    let instruction = format!(
        "Write the HTML and CSS for a web user interface that looks like this image. {prompt}\n\
         Return the markup in a ```html fenced block and the styles in a ```css fenced block."
    );
    Ok(EditRequest::new(ImagePart::from_source(source)?, instruction))
}

/// Run one UI-code request against the backend and read the text answer.
pub fn generate_ui_code(
    backend: &dyn EditBackend,
    source: &ImageSource,
    prompt: &str,
    capabilities: &Capabilities,
) -> Result<UiCode> {
    let request = ui_code_request(source, prompt, capabilities)?;
    match backend.edit(&request)? {
        EditResponse::Text { text } => UiCode::from_text(&text),
        EditResponse::Image { .. } => Err(ArtisanError::Backend(
            "expected UI code but the model returned an image".into(),
        )),
        EditResponse::Blocked => Err(ArtisanError::Backend(
            "the request was blocked by safety settings".into(),
        )),
        EditResponse::Empty => Err(ArtisanError::Backend(
            "the model returned no UI code".into(),
        )),
    }
}
