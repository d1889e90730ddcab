//! Error types for the product studio.
//!
//! Provides a hierarchy of error types using `thiserror` for ergonomic error handling.

use std::io;
use thiserror::Error;
use serde::Serialize;

/// Errors raised while talking to the generative image API.
///
/// A single failed attempt permanently fails the record it belongs to;
/// there is no retry path.
#[derive(Error, Debug, Clone, Serialize)]
pub enum EnhancementError {
    /// The request never produced a usable HTTP response
    #[error("Image API request failed: {0}")]
    Transport(String),

    /// The API answered with a non-success status
    #[error("Image API returned status {status}: {message}")]
    Api { status: u16, message: String },

    /// The API answered successfully but without an inline image part
    /// (safety rejection, text-only answer, or an empty response)
    #[error("{0}")]
    Rejected(String),
}

/// Main error type for the studio application.
///
/// All errors in the application are converted to this type before being
/// returned to the frontend.
#[derive(Error, Debug, Serialize)]
pub enum StudioError {
    /// Startup configuration is missing or invalid (fatal)
    #[error("Configuration error: {0}")]
    Config(String),

    /// An imported file could not be read or decoded
    #[error("Ingestion error: {0}")]
    Ingestion(String),

    /// Enhancement of a single image failed
    #[error("Enhancement error: {0}")]
    Enhancement(#[from] EnhancementError),

    /// Batch export or single-image save failed
    #[error("Export error: {0}")]
    Export(String),

    /// File IO error
    #[error("IO error: {0}")]
    IO(String),
}

/// Convenience result type for studio operations.
pub type StudioResult<T> = Result<T, StudioError>;

// Helper methods for error creation
impl StudioError {
    pub fn config<T: Into<String>>(msg: T) -> Self {
        Self::Config(msg.into())
    }

    pub fn ingestion<T: Into<String>>(msg: T) -> Self {
        Self::Ingestion(msg.into())
    }

    pub fn export<T: Into<String>>(msg: T) -> Self {
        Self::Export(msg.into())
    }
}

// Convert std::io::Error to StudioError
impl From<io::Error> for StudioError {
    fn from(err: io::Error) -> Self {
        Self::IO(err.to_string())
    }
}

// Convert zip errors to StudioError (export is the only zip producer)
impl From<zip::result::ZipError> for StudioError {
    fn from(err: zip::result::ZipError) -> Self {
        Self::Export(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enhancement_error_converts_to_studio_error() {
        let err: StudioError = EnhancementError::Transport("connection refused".to_string()).into();
        assert!(matches!(err, StudioError::Enhancement(_)));
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn api_error_message_includes_status() {
        let err = EnhancementError::Api {
            status: 429,
            message: "quota exceeded".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("429"));
        assert!(text.contains("quota exceeded"));
    }
}
