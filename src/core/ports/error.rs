//! Errors reported by collaborator ports
//!
//! Checks never propagate these; they are folded into check results.

use serde::Serialize;
use thiserror::Error;

use crate::core::models::ErrorDetails;

/// Failure talking to the hosted backend
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum BackendError {
    /// No backend URL or key configured
    #[error("backend is not configured: {0}")]
    NotConfigured(String),

    /// Transport failure (connect, DNS, TLS, timeout)
    #[error("backend unreachable: {0}")]
    Unreachable(String),

    /// Temporary server-side condition (rate limited, 5xx)
    #[error("backend returned transient status {status}: {message}")]
    Transient {
        /// HTTP status code
        status: u16,
        /// Response body or reason
        message: String,
    },

    /// The backend answered but refused the request
    #[error("backend rejected request with status {status}: {message}")]
    Rejected {
        /// HTTP status code
        status: u16,
        /// Response body or reason
        message: String,
    },

    /// The response could not be decoded
    #[error("backend response could not be decoded: {0}")]
    Decode(String),
}

impl BackendError {
    /// Whether retrying later could plausibly succeed
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::Transient { .. })
    }

    /// Normalize into `{message, raw}` for result details
    #[must_use]
    pub fn to_details(&self) -> ErrorDetails {
        ErrorDetails::new(
            self.to_string(),
            serde_json::to_value(self).unwrap_or(serde_json::Value::Null),
        )
    }
}

/// Failure of a DNS or HTTP probe
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum ProbeError {
    /// Nothing to probe (e.g. empty hostname)
    #[error("invalid probe input: {0}")]
    InvalidInput(String),

    /// Transport failure (connect, DNS, TLS, timeout)
    #[error("request failed: {0}")]
    Transport(String),

    /// Non-success HTTP status
    #[error("unexpected status {status}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, possibly truncated
        body: String,
    },

    /// The response could not be decoded
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ProbeError {
    /// Normalize into `{message, raw}` for result details
    #[must_use]
    pub fn to_details(&self) -> ErrorDetails {
        ErrorDetails::new(
            self.to_string(),
            serde_json::to_value(self).unwrap_or(serde_json::Value::Null),
        )
    }
}
