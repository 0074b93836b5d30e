//! Check model
//!
//! A check is one independent verification of the deployment. The set of
//! checks is fixed and declared in order by [`CheckKind::ALL`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{CheckStatus, ErrorDetails};

/// The fixed list of checks, in declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckKind {
    /// Environment validates and hostname carries the expected domain
    DomainConfiguration,
    /// Origin is served over https
    SslTls,
    /// Hostname is one of the known production hostnames
    CustomDomain,
    /// A lightweight row read against the backend succeeds
    BackendConnectivity,
    /// The backend auth endpoint answers
    AuthReachability,
    /// The `validate_domain_access` procedure accepts the origin
    DomainAccessFunction,
    /// The origin's root document sends the hardening headers
    SecurityHeaders,
    /// Public DNS resolves an A record for the hostname
    DnsResolution,
}

impl CheckKind {
    /// Every check, in the order results are reported
    pub const ALL: [Self; 8] = [
        Self::DomainConfiguration,
        Self::SslTls,
        Self::CustomDomain,
        Self::BackendConnectivity,
        Self::AuthReachability,
        Self::DomainAccessFunction,
        Self::SecurityHeaders,
        Self::DnsResolution,
    ];

    /// Display name reported in results
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::DomainConfiguration => "Domain Configuration",
            Self::SslTls => "SSL / TLS",
            Self::CustomDomain => "Custom Domain Detection",
            Self::BackendConnectivity => "Backend Connectivity",
            Self::AuthReachability => "Auth Subsystem Reachability",
            Self::DomainAccessFunction => "Domain-Access Server Function",
            Self::SecurityHeaders => "Security Headers",
            Self::DnsResolution => "DNS Resolution",
        }
    }
}

impl std::fmt::Display for CheckKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of one check in one run
///
/// Created fresh per run and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckResult {
    /// Display name of the check (e.g. "SSL / TLS")
    pub name: String,

    /// Pass, warning or fail
    pub status: CheckStatus,

    /// Human-readable explanation
    pub message: String,

    /// Diagnostic payload, attached on non-pass results
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl CheckResult {
    fn build(kind: CheckKind, status: CheckStatus, message: impl Into<String>) -> Self {
        Self {
            name: kind.name().to_string(),
            status,
            message: message.into(),
            details: None,
        }
    }

    /// A passing result
    #[must_use]
    pub fn pass(kind: CheckKind, message: impl Into<String>) -> Self {
        Self::build(kind, CheckStatus::Pass, message)
    }

    /// A warning result
    #[must_use]
    pub fn warning(kind: CheckKind, message: impl Into<String>) -> Self {
        Self::build(kind, CheckStatus::Warning, message)
    }

    /// A failing result
    #[must_use]
    pub fn fail(kind: CheckKind, message: impl Into<String>) -> Self {
        Self::build(kind, CheckStatus::Fail, message)
    }

    /// Attach a details payload
    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Attach a normalized error as `details.error`
    #[must_use]
    pub fn with_error(self, error: ErrorDetails) -> Self {
        self.with_details(error.into_details())
    }
}
