//! Enhancement client and per-record pipeline.

pub mod gemini;
pub mod pipeline;

pub use gemini::GeminiClient;
pub use pipeline::{RECORD_ADDED_EVENT, RECORD_UPDATED_EVENT, run_enhancement};
