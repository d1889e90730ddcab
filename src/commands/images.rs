//! Tauri command handlers for the image pipeline.

use tauri::{AppHandle, Emitter, State};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::core::{AppState, ImageRecord, ImageStatus, StyleKey, StyleOption};
use crate::export::{self, ExportSummary};
use crate::ingestion;
use crate::processing::{self, RECORD_ADDED_EVENT};
use crate::utils::{StudioError, StudioResult, data_uri};

/// Imports a batch of candidate files and starts one enhancement per
/// accepted image.
///
/// Non-image and unreadable candidates are skipped without surfacing an
/// error. Accepted files become `processing` records immediately (newest
/// first) and are returned; enhancement continues in background tasks that
/// emit `record-updated` events as they finish, in whatever order the API
/// responds.
///
/// `style` is the selection at the moment of this call; changing it later
/// never affects the records created here.
#[tauri::command]
pub async fn import_images(
    app: AppHandle,
    state: State<'_, AppState>,
    paths: Vec<String>,
    style: StyleKey,
) -> StudioResult<Vec<ImageRecord>> {
    debug!("Received import_images command for {} candidates", paths.len());
    let state = state.inner().clone();
    let mut accepted = Vec::new();

    for path in paths {
        if !ingestion::is_supported_image(&path) {
            debug!("Skipping non-image candidate: {}", path);
            continue;
        }

        let source = match ingestion::load_source(&path).await {
            Ok(source) => source,
            Err(err) => {
                warn!("Skipping unreadable candidate {}: {}", path, err);
                continue;
            }
        };

        let record = source.into_record(style);
        state.records().insert_front(record.clone());
        let _ = app.emit(RECORD_ADDED_EVENT, &record);

        let task_app = app.clone();
        let task_state = state.clone();
        let task_record = record.clone();
        tauri::async_runtime::spawn(async move {
            processing::run_enhancement(task_app, task_state, task_record).await;
        });

        accepted.push(record);
    }

    debug!("Accepted {} of the submitted candidates", accepted.len());
    Ok(accepted)
}

/// Returns the current record list, newest first.
#[tauri::command]
pub async fn get_records(state: State<'_, AppState>) -> StudioResult<Vec<ImageRecord>> {
    Ok(state.records().snapshot().as_slice().to_vec())
}

/// Returns the fixed style set for the style picker.
#[tauri::command]
pub fn list_styles() -> Vec<StyleOption> {
    StyleKey::ALL
        .iter()
        .map(|key| StyleOption {
            key: *key,
            label: key.label().to_string(),
        })
        .collect()
}

/// Bundles every enhanced image into a zip archive at `dest_path`.
///
/// `Ok(None)` means nothing was eligible and no archive was produced.
/// Generation failures are logged here; the frontend shows no blocking
/// dialog for them.
#[tauri::command]
pub async fn export_enhanced_archive(
    state: State<'_, AppState>,
    dest_path: String,
) -> StudioResult<Option<ExportSummary>> {
    let records = state.records().snapshot().as_slice().to_vec();
    export::write_archive(records, &dest_path)
        .await
        .inspect_err(|err| warn!("Archive export failed: {}", err))
}

/// Writes one record's enhanced bytes to `dest_path`.
#[tauri::command]
pub async fn save_enhanced_image(
    state: State<'_, AppState>,
    id: Uuid,
    dest_path: String,
) -> StudioResult<String> {
    let record = state
        .records()
        .find(id)
        .ok_or_else(|| StudioError::export(format!("Unknown record: {}", id)))?;

    if record.status != ImageStatus::Done {
        return Err(StudioError::export(format!(
            "Record {} has no enhanced image to save",
            record.source.file_name
        )));
    }
    let payload = record
        .enhanced_payload
        .as_deref()
        .ok_or_else(|| StudioError::export("Enhanced payload missing"))?;

    let bytes = data_uri::decode_payload(payload)?;
    tokio::fs::write(&dest_path, &bytes).await?;
    debug!(
        "Saved {} as {}",
        record.source.file_name,
        export::enhanced_file_name(&record.source.file_name)
    );
    Ok(dest_path)
}
