//! Image ingestion: filtering candidate files and reading them into
//! self-describing data URIs.
//!
//! Candidates whose declared content type is not an image are silently
//! skipped; the import command never surfaces them as errors.

use std::path::Path;

use crate::core::{ImageRecord, StyleKey};
use crate::utils::{StudioError, StudioResult, data_uri};

/// A candidate file read into memory, ready to become an [`ImageRecord`].
#[derive(Debug, Clone)]
pub struct LoadedSource {
    pub file_name: String,
    pub byte_size: u64,
    pub mime_type: String,
    /// Original bytes as a `data:<mime>;base64,...` URI
    pub payload: String,
}

impl LoadedSource {
    /// Builds a `processing` record from this source with the style selected
    /// at submission time.
    pub fn into_record(self, style: StyleKey) -> ImageRecord {
        ImageRecord::new(self.file_name, self.byte_size, self.mime_type, self.payload, style)
    }
}

/// True iff the path's declared content type is an image type.
pub fn is_supported_image(path: impl AsRef<Path>) -> bool {
    mime_guess::from_path(path.as_ref())
        .first()
        .map(|mime| mime.type_() == mime_guess::mime::IMAGE)
        .unwrap_or(false)
}

/// Reads a candidate file fully and encodes it as a data URI.
///
/// The declared MIME type comes from the filename, mirroring what a browser
/// would report for the same file.
pub async fn load_source(path: impl AsRef<Path>) -> StudioResult<LoadedSource> {
    let path = path.as_ref();
    let mime_type = mime_guess::from_path(path)
        .first()
        .ok_or_else(|| {
            StudioError::ingestion(format!("No content type for {}", path.display()))
        })?
        .essence_str()
        .to_string();

    let bytes = tokio::fs::read(path).await?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "image".to_string());

    Ok(LoadedSource {
        file_name,
        byte_size: bytes.len() as u64,
        mime_type: mime_type.clone(),
        payload: data_uri::encode(&mime_type, &bytes),
    })
}
