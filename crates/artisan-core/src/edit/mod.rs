//! Edit requests handed to the generation backend, and interpretation of
//! what comes back.

pub mod presets;
pub mod request;
pub mod response;
pub mod ui_code;

use rayon::prelude::*;
use tracing::info;

use crate::error::{ArtisanError, Result};
use crate::source::ImageSource;

pub use presets::{Preset, StyleFilter};
pub use request::{EditRequest, ImagePart, RequestPart};
pub use response::EditResponse;
pub use ui_code::{generate_ui_code, ui_code_request, UiCode};

/// The external generation call. Implementations own transport and
/// authentication; the core only builds requests and reads responses.
pub trait EditBackend: Send + Sync {
    fn edit(&self, request: &EditRequest) -> Result<EditResponse>;
}

/// Request `count` independent variants of the same edit, concurrently.
///
/// Any failed variant fails the whole batch.
pub fn generate_previews(
    backend: &dyn EditBackend,
    request: &EditRequest,
    count: usize,
) -> Result<Vec<ImageSource>> {
    if count == 0 {
        return Err(ArtisanError::Backend("no previews requested".into()));
    }
    info!(count, has_mask = request.mask.is_some(), "Generating previews");

    let previews = (0..count)
        .into_par_iter()
        .map(|_| backend.edit(request).and_then(EditResponse::into_image))
        .collect::<Result<Vec<_>>>()?;

    info!(count = previews.len(), "Previews ready");
    Ok(previews)
}
