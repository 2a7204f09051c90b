//! Structured error payloads returned by the CRM API.

use serde_json::{Map, Value};

/// Message shown when the server response carries nothing usable.
pub const GENERIC_ERROR_MESSAGE: &str = "An unexpected error occurred.";

/// Keys whose messages are not tied to a particular input field.
const NON_FIELD_KEYS: &[&str] = &["error", "errors", "non_field_errors"];

/// Extracts a user-facing message from an error response body.
///
/// Resolution order: top-level `message`, then `detail`, then every
/// field-level validation error joined into one string, and finally
/// [`GENERIC_ERROR_MESSAGE`].
pub fn extract_error_message(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(value) => message_from_value(&value),
        Err(_) => GENERIC_ERROR_MESSAGE.to_string(),
    }
}

/// Same as [`extract_error_message`] for an already parsed payload.
pub fn message_from_value(value: &Value) -> String {
    let resolved = match value {
        Value::Object(map) => top_level_text(map, "message")
            .or_else(|| top_level_text(map, "detail"))
            .or_else(|| field_errors(map)),
        Value::Array(_) => {
            let messages = collect_messages(value);
            (!messages.is_empty()).then(|| messages.join(" "))
        }
        Value::String(text) => non_blank(text),
        _ => None,
    };

    resolved.unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string())
}

fn non_blank(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn top_level_text(map: &Map<String, Value>, key: &str) -> Option<String> {
    map.get(key).and_then(Value::as_str).and_then(non_blank)
}

fn collect_messages(value: &Value) -> Vec<String> {
    match value {
        Value::String(text) => non_blank(text).into_iter().collect(),
        Value::Array(items) => items.iter().flat_map(collect_messages).collect(),
        _ => Vec::new(),
    }
}

fn field_errors(map: &Map<String, Value>) -> Option<String> {
    let parts: Vec<String> = map
        .iter()
        .filter(|(key, _)| key.as_str() != "message" && key.as_str() != "detail")
        .filter_map(|(key, value)| {
            let messages = collect_messages(value);
            if messages.is_empty() {
                None
            } else if NON_FIELD_KEYS.contains(&key.as_str()) {
                Some(messages.join(" "))
            } else {
                Some(format!("{key}: {}", messages.join(" ")))
            }
        })
        .collect();

    (!parts.is_empty()).then(|| parts.join("; "))
}
