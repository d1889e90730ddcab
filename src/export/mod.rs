//! Batch export of enhanced images into a single zip archive.

use std::io::{Cursor, Write};
use std::path::Path;

use serde::Serialize;
use tracing::{debug, warn};
use zip::ZipWriter;
use zip::write::FileOptions;

use crate::core::{ImageRecord, ImageStatus};
use crate::utils::{StudioError, StudioResult, data_uri};

/// Default download name for the bundled archive.
pub const ARCHIVE_FILE_NAME: &str = "product_images.zip";

/// Single top-level folder holding every entry inside the archive.
pub const ARCHIVE_FOLDER: &str = "enhanced_images";

const DEFAULT_EXTENSION: &str = "png";

/// Result of a completed archive export, returned to the frontend.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportSummary {
    pub archive_path: String,
    pub entry_count: usize,
}

/// Derives the download name for an enhanced image:
/// `<original-stem>_enhanced.<original-ext>`, defaulting the extension when
/// the source name has none.
pub fn enhanced_file_name(original_name: &str) -> String {
    let path = Path::new(original_name);
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| original_name.to_string());
    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_string())
        .unwrap_or_else(|| DEFAULT_EXTENSION.to_string());
    format!("{}_enhanced.{}", stem, extension)
}

/// Bundles every `done` record into in-memory zip bytes.
///
/// Returns `None` when no record is eligible: exporting nothing is a no-op,
/// not an error. Entry name collisions are not de-duplicated; extraction
/// order makes the last entry win.
pub fn build_archive(records: &[ImageRecord]) -> StudioResult<Option<Vec<u8>>> {
    let eligible: Vec<&ImageRecord> = records
        .iter()
        .filter(|r| r.status == ImageStatus::Done && r.enhanced_payload.is_some())
        .collect();

    if eligible.is_empty() {
        return Ok(None);
    }

    let mut archive = ZipWriter::new(Cursor::new(Vec::new()));
    let options = FileOptions::default();

    for record in &eligible {
        // Eligibility filter above guarantees the payload is present.
        let payload = record.enhanced_payload.as_deref().unwrap_or_default();
        let bytes = data_uri::decode_payload(payload)?;
        let entry = format!(
            "{}/{}",
            ARCHIVE_FOLDER,
            enhanced_file_name(&record.source.file_name)
        );
        archive.start_file(entry, options)?;
        archive.write_all(&bytes).map_err(StudioError::from)?;
    }

    let cursor = archive.finish()?;
    debug!("Built archive with {} entries", eligible.len());
    Ok(Some(cursor.into_inner()))
}

/// Builds the archive on the blocking thread pool and writes it to `dest`.
///
/// `Ok(None)` means no eligible record existed and nothing was written.
pub async fn write_archive(
    records: Vec<ImageRecord>,
    dest: impl AsRef<Path>,
) -> StudioResult<Option<ExportSummary>> {
    let entry_count = records
        .iter()
        .filter(|r| r.status == ImageStatus::Done)
        .count();

    let built = tokio::task::spawn_blocking(move || build_archive(&records))
        .await
        .map_err(|e| StudioError::export(format!("Archive task panicked: {}", e)))??;

    let Some(bytes) = built else {
        debug!("No enhanced images to export");
        return Ok(None);
    };

    let dest = dest.as_ref();
    if let Err(err) = tokio::fs::write(dest, &bytes).await {
        warn!("Failed to write archive to {}: {}", dest.display(), err);
        return Err(StudioError::export(format!(
            "Failed to write archive: {}",
            err
        )));
    }

    Ok(Some(ExportSummary {
        archive_path: dest.to_string_lossy().to_string(),
        entry_count,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StyleKey;
    use zip::ZipArchive;

    fn record(name: &str, status: ImageStatus, enhanced: Option<&[u8]>) -> ImageRecord {
        let mut rec = ImageRecord::new(
            name.to_string(),
            512,
            "image/png".to_string(),
            "data:image/png;base64,AAAA".to_string(),
            StyleKey::Default,
        );
        rec.status = status;
        rec.enhanced_payload = enhanced.map(|bytes| data_uri::encode("image/png", bytes));
        rec
    }

    #[test]
    fn naming_strips_last_extension_and_appends_suffix() {
        assert_eq!(enhanced_file_name("photo.jpg"), "photo_enhanced.jpg");
        assert_eq!(enhanced_file_name("archive.tar.gz"), "archive.tar_enhanced.gz");
        assert_eq!(enhanced_file_name("noext"), "noext_enhanced.png");
    }

    #[test]
    fn zero_done_records_produce_no_archive() {
        let records = vec![
            record("a.png", ImageStatus::Processing, None),
            record("b.png", ImageStatus::Error, None),
        ];
        assert!(build_archive(&records).unwrap().is_none());
        assert!(build_archive(&[]).unwrap().is_none());
    }

    #[test]
    fn archive_contains_exactly_the_done_records() {
        let records = vec![
            record("done.png", ImageStatus::Done, Some(b"enhanced-bytes")),
            record("pending.png", ImageStatus::Processing, None),
            record("broken.png", ImageStatus::Error, None),
        ];

        let bytes = build_archive(&records).unwrap().unwrap();
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), 1);

        let mut entry = archive.by_index(0).unwrap();
        assert_eq!(entry.name(), "enhanced_images/done_enhanced.png");
        let mut content = Vec::new();
        std::io::Read::read_to_end(&mut entry, &mut content).unwrap();
        assert_eq!(content, b"enhanced-bytes");
    }

    #[test]
    fn colliding_entry_names_are_not_deduplicated() {
        let records = vec![
            record("same.png", ImageStatus::Done, Some(b"first")),
            record("same.png", ImageStatus::Done, Some(b"second")),
        ];

        let bytes = build_archive(&records).unwrap().unwrap();
        let archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), 2);
    }

    #[tokio::test]
    async fn write_archive_creates_the_destination_file() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join(ARCHIVE_FILE_NAME);
        let records = vec![record("cup.png", ImageStatus::Done, Some(b"cup"))];

        let summary = write_archive(records, &dest).await.unwrap().unwrap();
        assert_eq!(summary.entry_count, 1);
        assert_eq!(summary.archive_path, dest.to_string_lossy());
        assert!(dest.exists());
    }

    #[tokio::test]
    async fn write_archive_with_nothing_eligible_is_a_noop() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join(ARCHIVE_FILE_NAME);
        let records = vec![record("a.png", ImageStatus::Processing, None)];

        assert!(write_archive(records, &dest).await.unwrap().is_none());
        assert!(!dest.exists());
    }
}
