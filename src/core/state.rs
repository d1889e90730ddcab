//! Application state management for Tauri.

use std::sync::{Arc, Mutex};

use tracing::debug;
use uuid::Uuid;

use crate::core::{ImageRecord, ImageStatus};
use crate::processing::gemini::GeminiClient;
use crate::utils::StudioResult;

/// In-memory list of image records, newest first.
///
/// Every mutation replaces the whole list with a new list derived from the
/// previous snapshot plus one change, so concurrent completions landing from
/// different tasks each operate on a consistent snapshot and never interfere:
/// each transition targets a disjoint record, keyed by id.
#[derive(Default)]
pub struct RecordStore {
    records: Mutex<Arc<Vec<ImageRecord>>>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current immutable snapshot of the list.
    pub fn snapshot(&self) -> Arc<Vec<ImageRecord>> {
        self.records.lock().expect("record store poisoned").clone()
    }

    /// Looks up a record by id in the current snapshot.
    pub fn find(&self, id: Uuid) -> Option<ImageRecord> {
        self.snapshot().iter().find(|r| r.id == id).cloned()
    }

    /// Prepends a freshly created record (newest first).
    pub fn insert_front(&self, record: ImageRecord) {
        self.replace_with(|records| {
            let mut next = Vec::with_capacity(records.len() + 1);
            next.push(record);
            next.extend(records.iter().cloned());
            next
        });
    }

    /// Transitions a record to `done`, attaching the enhanced payload under
    /// the record's original MIME type.
    ///
    /// Returns the updated record, or `None` if the id is unknown or the
    /// record already left the `processing` state (transitions are terminal).
    pub fn complete(&self, id: Uuid, enhanced_base64: &str) -> Option<ImageRecord> {
        self.transition(id, |record| record.completed(enhanced_base64))
    }

    /// Transitions a record to `error` with a human-readable detail.
    ///
    /// Same return contract as [`complete`](Self::complete).
    pub fn fail(&self, id: Uuid, detail: String) -> Option<ImageRecord> {
        self.transition(id, |record| record.failed(detail))
    }

    fn transition(
        &self,
        id: Uuid,
        apply: impl FnOnce(ImageRecord) -> ImageRecord,
    ) -> Option<ImageRecord> {
        let mut guard = self.records.lock().expect("record store poisoned");
        let position = guard
            .iter()
            .position(|r| r.id == id && r.status == ImageStatus::Processing)?;
        let mut next: Vec<ImageRecord> = guard.iter().cloned().collect();
        let updated = apply(next[position].clone());
        next[position] = updated.clone();
        *guard = Arc::new(next);
        Some(updated)
    }

    fn replace_with(&self, build: impl FnOnce(&[ImageRecord]) -> Vec<ImageRecord>) {
        let mut guard = self.records.lock().expect("record store poisoned");
        let next = build(guard.as_slice());
        *guard = Arc::new(next);
    }
}

/// Application state managed by Tauri.
///
/// Holds the generative API client (initialized once at startup) and the
/// record store for the lifetime of the process.
#[derive(Clone)]
pub struct AppState {
    client: Arc<GeminiClient>,
    records: Arc<RecordStore>,
}

impl AppState {
    /// Creates the application state from process environment.
    ///
    /// Fails when no API credential is configured; the caller treats this as
    /// a fatal startup condition.
    pub fn from_env() -> StudioResult<Self> {
        let client = GeminiClient::from_env()?;
        debug!("Gemini client initialized");
        Ok(Self {
            client: Arc::new(client),
            records: Arc::new(RecordStore::new()),
        })
    }

    pub fn client(&self) -> &GeminiClient {
        &self.client
    }

    pub fn records(&self) -> &RecordStore {
        &self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StyleKey;

    fn record(name: &str) -> ImageRecord {
        ImageRecord::new(
            name.to_string(),
            64,
            "image/png".to_string(),
            "data:image/png;base64,AAAA".to_string(),
            StyleKey::Default,
        )
    }

    #[test]
    fn insert_front_keeps_newest_first() {
        let store = RecordStore::new();
        let first = record("first.png");
        let second = record("second.png");
        store.insert_front(first.clone());
        store.insert_front(second.clone());

        let snapshot = store.snapshot();
        assert_eq!(snapshot[0].id, second.id);
        assert_eq!(snapshot[1].id, first.id);
    }

    #[test]
    fn complete_updates_only_the_target_record() {
        let store = RecordStore::new();
        let a = record("a.png");
        let b = record("b.png");
        store.insert_front(a.clone());
        store.insert_front(b.clone());

        let updated = store.complete(a.id, "ZW5oYW5jZWQ=").unwrap();
        assert_eq!(updated.status, ImageStatus::Done);

        let snapshot = store.snapshot();
        let a_now = snapshot.iter().find(|r| r.id == a.id).unwrap();
        let b_now = snapshot.iter().find(|r| r.id == b.id).unwrap();
        assert_eq!(a_now.status, ImageStatus::Done);
        assert_eq!(b_now.status, ImageStatus::Processing);
    }

    #[test]
    fn transitions_are_terminal() {
        let store = RecordStore::new();
        let rec = record("a.png");
        store.insert_front(rec.clone());

        assert!(store.complete(rec.id, "QQ==").is_some());
        // A late failure for the same record must not overwrite the result.
        assert!(store.fail(rec.id, "too late".to_string()).is_none());
        assert_eq!(store.find(rec.id).unwrap().status, ImageStatus::Done);
    }

    #[test]
    fn transition_on_unknown_id_is_none() {
        let store = RecordStore::new();
        assert!(store.complete(Uuid::new_v4(), "QQ==").is_none());
        assert!(store.fail(Uuid::new_v4(), "nope".to_string()).is_none());
    }

    #[test]
    fn out_of_order_completion_is_keyed_by_id() {
        let store = RecordStore::new();
        let first = record("first.png");
        let second = record("second.png");
        store.insert_front(first.clone());
        store.insert_front(second.clone());

        // The record submitted first finishes last; both land correctly.
        store.fail(second.id, "safety rejection".to_string()).unwrap();
        store.complete(first.id, "QQ==").unwrap();

        let snapshot = store.snapshot();
        for rec in snapshot.iter() {
            let enhanced_present = rec.enhanced_payload.is_some();
            assert_eq!(enhanced_present, rec.status == ImageStatus::Done);
        }
        assert_eq!(store.find(first.id).unwrap().status, ImageStatus::Done);
        assert_eq!(store.find(second.id).unwrap().status, ImageStatus::Error);
    }
}
