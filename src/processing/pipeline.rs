//! Per-record enhancement pipeline.
//!
//! One fire-and-forget task runs per record: await the API, fold the outcome
//! into the record list, notify the frontend. Failures are converted into
//! record state here and never propagate; an error in one task cannot abort
//! sibling in-flight requests.

use tauri::{AppHandle, Emitter};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::core::{AppState, ImageRecord, RecordStore};
use crate::utils::{EnhancementError, data_uri};

/// Emitted once when a record enters the list.
pub const RECORD_ADDED_EVENT: &str = "record-added";
/// Emitted once when a record reaches its terminal state.
pub const RECORD_UPDATED_EVENT: &str = "record-updated";

/// Applies an enhancement outcome to the record it belongs to.
///
/// Returns the updated record, or `None` when the record is unknown or
/// already terminal (a late duplicate completion is dropped).
pub fn apply_outcome(
    store: &RecordStore,
    id: Uuid,
    outcome: Result<String, EnhancementError>,
) -> Option<ImageRecord> {
    match outcome {
        Ok(enhanced_base64) => store.complete(id, &enhanced_base64),
        Err(err) => {
            warn!("Enhancement failed for record {}: {}", id, err);
            store.fail(id, err.to_string())
        }
    }
}

/// Drives one record from `processing` to its terminal state.
///
/// Spawned per record by the import command; completion order across records
/// is whatever order the API responds in.
pub async fn run_enhancement(app: AppHandle, state: AppState, record: ImageRecord) {
    let outcome = match data_uri::split(&record.original_payload) {
        Ok((mime_type, payload)) => state.client().enhance(payload, mime_type, record.style).await,
        Err(err) => Err(EnhancementError::Rejected(err.to_string())),
    };

    if let Some(updated) = apply_outcome(state.records(), record.id, outcome) {
        debug!(
            "Record {} ({}) finished as {:?}",
            updated.id, updated.source.file_name, updated.status
        );
        let _ = app.emit(RECORD_UPDATED_EVENT, &updated);
    }
}
