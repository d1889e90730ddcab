//! Tauri command handlers for the frontend.
//!
//! This module exposes commands that can be invoked from the webview:
//! - [`import_images`]: Ingest files and start per-image enhancement
//! - [`get_records`]: Snapshot of the record list
//! - [`list_styles`]: Fixed style set for the picker
//! - [`export_enhanced_archive`]: Bundle enhanced images into a zip
//! - [`save_enhanced_image`]: Save a single enhanced image

mod images;

pub use images::*;
