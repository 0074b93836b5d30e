//! Error normalization for check details
//!
//! Anything caught inside a check is reduced to a `{message, raw}` shape
//! before it is attached to a result.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Normalized error payload attached under `details.error`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetails {
    /// Human-readable error message
    pub message: String,

    /// Raw error representation (tagged error, response body, panic payload)
    pub raw: Value,
}

impl ErrorDetails {
    /// Build from a plain message with an explicit raw payload
    #[must_use]
    pub fn new(message: impl Into<String>, raw: Value) -> Self {
        Self {
            message: message.into(),
            raw,
        }
    }

    /// Normalize a panic payload captured from a check task
    #[must_use]
    pub fn from_panic(payload: &(dyn std::any::Any + Send)) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .map(ToString::to_string)
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "check panicked with a non-string payload".to_string());
        Self {
            raw: Value::String(message.clone()),
            message,
        }
    }

    /// Wrap as a `details` object: `{"error": {message, raw}}`
    #[must_use]
    pub fn into_details(self) -> Value {
        serde_json::json!({ "error": self })
    }
}
