//! Check status taxonomy
//!
//! Defines how a single check outcome affects production readiness.

use serde::{Deserialize, Serialize};

/// Outcome of a single check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    /// The check holds
    Pass,
    /// Hardening gap - shown prominently, doesn't block readiness
    Warning,
    /// Misconfiguration or unreachable dependency - blocks readiness
    Fail,
}

impl CheckStatus {
    /// Whether this status prevents the deployment from being ready
    #[must_use]
    pub const fn is_blocking(self) -> bool {
        matches!(self, Self::Fail)
    }

    /// Upper-case badge label used in human output
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::Warning => "WARN",
            Self::Fail => "FAIL",
        }
    }
}

impl std::fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pass => write!(f, "pass"),
            Self::Warning => write!(f, "warning"),
            Self::Fail => write!(f, "fail"),
        }
    }
}
