//! Core application types and state management.
//!
//! This module contains the fundamental types used throughout the application:
//! - [`AppState`]: Application state managed by Tauri
//! - [`RecordStore`]: Copy-on-write list of image records
//! - [`ImageRecord`]: One imported image and its lifecycle state

pub mod state;
pub mod types;

pub use state::{AppState, RecordStore};
pub use types::{ImageRecord, ImageStatus, SourceFileMeta, StyleKey, StyleOption};
