//! Core types for image records and style selection.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::utils::data_uri;

/// The visual style applied to an enhancement request.
///
/// Each key maps to one fixed natural-language prompt; the key is captured
/// at the moment an image is submitted and never re-read afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleKey {
    Default,
    Minimalist,
    Vibrant,
    Premium,
}

impl StyleKey {
    /// All selectable styles, in presentation order.
    pub const ALL: [StyleKey; 4] = [
        StyleKey::Default,
        StyleKey::Minimalist,
        StyleKey::Vibrant,
        StyleKey::Premium,
    ];

    /// Human-readable label for the style picker.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Default => "Studio",
            Self::Minimalist => "Minimalist",
            Self::Vibrant => "Vibrant",
            Self::Premium => "Premium",
        }
    }
}

/// Lifecycle state of an image record.
///
/// `Processing` is the only initial state; `Done` and `Error` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageStatus {
    Processing,
    Done,
    Error,
}

/// Original file metadata retained for display and export naming.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceFileMeta {
    /// Original filename as selected by the user
    pub file_name: String,
    /// Original size in bytes
    pub byte_size: u64,
}

/// One imported image and its enhancement lifecycle.
///
/// Records are immutable except for the single transition applied when
/// their API call resolves; see [`completed`](Self::completed) and
/// [`failed`](Self::failed).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRecord {
    /// Stable unique identifier; all updates are keyed by this, never by
    /// list position
    pub id: Uuid,
    /// Declared MIME type of the source file, mirrored onto the enhanced
    /// payload
    pub mime_type: String,
    /// Original image as a data URI
    pub original_payload: String,
    /// Enhanced image as a data URI, present only once processing succeeds
    pub enhanced_payload: Option<String>,
    /// Current lifecycle state
    pub status: ImageStatus,
    /// Failure description, present only when `status` is `error`
    pub error_detail: Option<String>,
    /// Original filename and byte size
    pub source: SourceFileMeta,
    /// Style captured when this record was submitted
    pub style: StyleKey,
}

impl ImageRecord {
    /// Creates a new record in the `processing` state with a random id.
    pub fn new(
        file_name: String,
        byte_size: u64,
        mime_type: String,
        original_payload: String,
        style: StyleKey,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            mime_type,
            original_payload,
            enhanced_payload: None,
            status: ImageStatus::Processing,
            error_detail: None,
            source: SourceFileMeta { file_name, byte_size },
            style,
        }
    }

    /// Consumes the record and returns its `done` successor, attaching the
    /// enhanced payload under the original MIME type.
    pub fn completed(mut self, enhanced_base64: &str) -> Self {
        self.enhanced_payload = Some(data_uri::encode_base64(&self.mime_type, enhanced_base64));
        self.status = ImageStatus::Done;
        self.error_detail = None;
        self
    }

    /// Consumes the record and returns its `error` successor.
    pub fn failed(mut self, detail: String) -> Self {
        self.enhanced_payload = None;
        self.status = ImageStatus::Error;
        self.error_detail = Some(if detail.trim().is_empty() {
            "Image enhancement failed.".to_string()
        } else {
            detail
        });
        self
    }
}

/// One entry of the style picker exposed to the frontend.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleOption {
    pub key: StyleKey,
    pub label: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ImageRecord {
        ImageRecord::new(
            "lamp.jpg".to_string(),
            1024,
            "image/jpeg".to_string(),
            "data:image/jpeg;base64,AAAA".to_string(),
            StyleKey::Vibrant,
        )
    }

    #[test]
    fn new_record_starts_processing() {
        let rec = record();
        assert_eq!(rec.status, ImageStatus::Processing);
        assert!(rec.enhanced_payload.is_none());
        assert!(rec.error_detail.is_none());
        assert_eq!(rec.style, StyleKey::Vibrant);
    }

    #[test]
    fn records_get_distinct_ids() {
        assert_ne!(record().id, record().id);
    }

    #[test]
    fn completed_attaches_payload_with_original_mime() {
        let rec = record().completed("QkJCQg==");
        assert_eq!(rec.status, ImageStatus::Done);
        assert_eq!(
            rec.enhanced_payload.as_deref(),
            Some("data:image/jpeg;base64,QkJCQg==")
        );
        assert!(rec.error_detail.is_none());
    }

    #[test]
    fn failed_attaches_detail_and_clears_payload() {
        let rec = record().failed("the API said no".to_string());
        assert_eq!(rec.status, ImageStatus::Error);
        assert!(rec.enhanced_payload.is_none());
        assert_eq!(rec.error_detail.as_deref(), Some("the API said no"));
    }

    #[test]
    fn failed_with_blank_detail_uses_generic_fallback() {
        let rec = record().failed("  ".to_string());
        assert_eq!(rec.error_detail.as_deref(), Some("Image enhancement failed."));
    }

    #[test]
    fn style_keys_serialize_lowercase() {
        assert_eq!(
            serde_json::to_string(&StyleKey::Minimalist).unwrap(),
            "\"minimalist\""
        );
        assert_eq!(
            serde_json::to_string(&ImageStatus::Processing).unwrap(),
            "\"processing\""
        );
    }
}
