//! Self-describing `data:<mime>;base64,<payload>` encoding.
//!
//! Every image payload in the application travels as a data URI so the
//! declared MIME type always rides along with the bytes.

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use crate::utils::{StudioError, StudioResult};

/// Encodes raw bytes and their declared MIME type as a data URI.
pub fn encode(mime_type: &str, bytes: &[u8]) -> String {
    encode_base64(mime_type, &BASE64.encode(bytes))
}

/// Builds a data URI from an already base64-encoded payload.
pub fn encode_base64(mime_type: &str, payload: &str) -> String {
    format!("data:{};base64,{}", mime_type, payload)
}

/// Splits a data URI into its MIME type and base64 payload segments.
pub fn split(data_uri: &str) -> StudioResult<(&str, &str)> {
    let rest = data_uri
        .strip_prefix("data:")
        .ok_or_else(|| StudioError::ingestion(format!("Not a data URI: {}", truncate(data_uri))))?;
    let (meta, payload) = rest
        .split_once(',')
        .ok_or_else(|| StudioError::ingestion("Data URI has no payload segment"))?;
    let mime_type = meta.strip_suffix(";base64").ok_or_else(|| {
        StudioError::ingestion(format!("Data URI is not base64 encoded: {}", truncate(data_uri)))
    })?;
    Ok((mime_type, payload))
}

/// Decodes the base64 payload segment of a data URI back to raw bytes.
pub fn decode_payload(data_uri: &str) -> StudioResult<Vec<u8>> {
    let (_, payload) = split(data_uri)?;
    BASE64
        .decode(payload)
        .map_err(|e| StudioError::ingestion(format!("Invalid base64 payload: {}", e)))
}

fn truncate(uri: &str) -> &str {
    uri.get(..32).unwrap_or(uri)
}
