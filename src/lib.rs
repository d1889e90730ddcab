// Module declarations in dependency order
pub mod utils;
pub mod core;
pub mod ingestion;
pub mod processing;
pub mod export;
pub mod commands;

// Public exports for external consumers
pub use crate::core::{AppState, ImageRecord, ImageStatus, RecordStore, StyleKey};
pub use crate::export::{ARCHIVE_FILE_NAME, ExportSummary};
pub use crate::processing::GeminiClient;
pub use crate::utils::{EnhancementError, StudioError, StudioResult};
pub use crate::commands::*;

// This library file is used as a public API for consuming this crate as a library.
// The actual application entry point is in main.rs.
