//! HTTP client for the Google generative-image API.

use serde_json::{Value, json};
use tracing::debug;

use crate::core::StyleKey;
use crate::utils::{EnhancementError, StudioError, StudioResult};

use super::prompts::prompt_for;
use super::response::extract_enhanced_payload;

/// Model used for all enhancement requests.
const MODEL: &str = "gemini-2.5-flash-image-preview";

const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Client for `generateContent` image enhancement calls.
///
/// The credential is resolved exactly once at startup and the client handle
/// is shared for the process lifetime; calls never re-read configuration.
pub struct GeminiClient {
    http: reqwest::Client,
    api_base: String,
    api_key: String,
}

impl GeminiClient {
    /// Builds a client from process environment.
    ///
    /// Reads `GEMINI_API_KEY` (or `GOOGLE_API_KEY`); a missing or empty key
    /// is a fatal configuration error. `GEMINI_API_BASE` overrides the
    /// default endpoint.
    pub fn from_env() -> StudioResult<Self> {
        let api_key = non_empty_env("GEMINI_API_KEY")
            .or_else(|| non_empty_env("GOOGLE_API_KEY"))
            .ok_or_else(|| {
                StudioError::config("GEMINI_API_KEY (or GOOGLE_API_KEY) is not set")
            })?;
        let api_base = non_empty_env("GEMINI_API_BASE")
            .map(|base| base.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        Ok(Self::new(api_base, api_key))
    }

    pub fn new(api_base: String, api_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base,
            api_key,
        }
    }

    /// Sends one image plus the style's fixed instruction text and returns
    /// the enhanced image as base64.
    ///
    /// Every failure mode is collapsed into a single [`EnhancementError`];
    /// no retry is attempted.
    pub async fn enhance(
        &self,
        image_base64: &str,
        mime_type: &str,
        style: StyleKey,
    ) -> Result<String, EnhancementError> {
        let endpoint = format!("{}/models/{}:generateContent", self.api_base, MODEL);
        let body = json!({
            "contents": [{
                "role": "user",
                "parts": [
                    {
                        "inlineData": {
                            "mimeType": mime_type,
                            "data": image_base64,
                        },
                    },
                    { "text": prompt_for(style) },
                ],
            }],
            "generationConfig": {
                "responseModalities": ["IMAGE", "TEXT"],
            },
        });

        debug!("Requesting enhancement ({mime_type}, style {:?})", style);

        let response = self
            .http
            .post(&endpoint)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| EnhancementError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(EnhancementError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|e| EnhancementError::Transport(format!("Invalid response body: {}", e)))?;

        extract_enhanced_payload(&payload)
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
