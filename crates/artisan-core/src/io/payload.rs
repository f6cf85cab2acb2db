//! Base64 payloads as exchanged with the generation backend.
//!
//! Payloads travel without the `data:<mime>;base64,` prefix; the prefix is
//! accepted on input and stripped.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::Result;

/// Encode raw bytes as a bare base64 payload.
pub fn to_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Wrap raw bytes in a `data:` URI.
pub fn to_data_uri(mime_type: &str, bytes: &[u8]) -> String {
    format!("data:{mime_type};base64,{}", to_base64(bytes))
}

/// Strip a `data:...;base64,` prefix if present.
pub fn strip_data_uri(payload: &str) -> &str {
    let trimmed = payload.trim();
    if trimmed.starts_with("data:") {
        if let Some((_, data)) = trimmed.split_once(',') {
            return data;
        }
    }
    trimmed
}

/// Decode a bare payload or a `data:` URI into bytes.
pub fn decode_base64(payload: &str) -> Result<Vec<u8>> {
    Ok(STANDARD.decode(strip_data_uri(payload))?)
}
