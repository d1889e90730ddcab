//! Extraction of the enhanced image from a `generateContent` response.
//!
//! A successful response carries one or more typed parts; the first part
//! with inline image data wins. A response without one is a failure, and the
//! error message is assembled in priority order: safety feedback, then any
//! plain-text explanation, then a generic fallback.

use serde_json::Value;

use crate::utils::EnhancementError;

const NO_IMAGE_MESSAGE: &str = "The API did not return an enhanced image.";

/// Returns the base64 data of the first inline-image part, or a descriptive
/// [`EnhancementError::Rejected`] when the response carries none.
pub fn extract_enhanced_payload(body: &Value) -> Result<String, EnhancementError> {
    let candidate = body
        .get("candidates")
        .and_then(Value::as_array)
        .and_then(|c| c.first());

    if let Some(data) = candidate.and_then(first_inline_image) {
        return Ok(data);
    }

    Err(EnhancementError::Rejected(rejection_message(candidate)))
}

fn parts_of(candidate: &Value) -> Option<&Vec<Value>> {
    candidate
        .get("content")
        .and_then(|content| content.get("parts"))
        .and_then(Value::as_array)
}

fn first_inline_image(candidate: &Value) -> Option<String> {
    for part in parts_of(candidate)? {
        // The API emits camelCase; tolerate snake_case as some transports do.
        let data = part
            .get("inlineData")
            .or_else(|| part.get("inline_data"))
            .and_then(|inline| inline.get("data"))
            .and_then(Value::as_str);
        if let Some(data) = data {
            if !data.is_empty() {
                return Some(data.to_string());
            }
        }
    }
    None
}

fn rejection_message(candidate: Option<&Value>) -> String {
    if let Some(reason) = candidate.and_then(safety_summary) {
        return format!("{} Reason: {}.", NO_IMAGE_MESSAGE, reason);
    }
    if let Some(text) = candidate.and_then(first_text_part) {
        return format!("{} Response: {}", NO_IMAGE_MESSAGE, text);
    }
    NO_IMAGE_MESSAGE.to_string()
}

/// Joins each flagged category with its probability, e.g.
/// `HARM_CATEGORY_VIOLENCE was HIGH`.
fn safety_summary(candidate: &Value) -> Option<String> {
    let ratings = candidate.get("safetyRatings").and_then(Value::as_array)?;
    let summary: Vec<String> = ratings
        .iter()
        .filter_map(|rating| {
            let category = rating.get("category").and_then(Value::as_str)?;
            let probability = rating.get("probability").and_then(Value::as_str)?;
            Some(format!("{} was {}", category, probability))
        })
        .collect();
    if summary.is_empty() {
        None
    } else {
        Some(summary.join(", "))
    }
}

fn first_text_part(candidate: &Value) -> Option<String> {
    parts_of(candidate)?
        .iter()
        .find_map(|part| part.get("text").and_then(Value::as_str))
        .map(str::to_string)
}
