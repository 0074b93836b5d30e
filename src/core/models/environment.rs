//! Environment snapshot
//!
//! A one-shot read of where the deployment is served from and which build
//! mode it runs in. Every field is recomputed on each read.

use serde::{Deserialize, Serialize};

/// Normalized view of the ambient host, origin and build mode
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentSnapshot {
    /// Current network host (lower-cased, no port)
    pub hostname: String,

    /// Scheme, host and port of the current location (e.g. `https://example.com`)
    pub origin: String,

    /// Build mode flag
    pub is_production: bool,

    /// Hostname is one of the known production hostnames
    pub is_custom_domain: bool,

    /// Origin uses `https`, or hostname is the loopback development host
    pub is_secure: bool,

    /// `https://<hostname>`
    pub expected_site_url: String,

    /// `<expected_site_url>/api`
    pub api_url: String,

    /// `<expected_site_url>/auth/callback`
    pub auth_redirect_url: String,
}

impl EnvironmentSnapshot {
    /// Snapshot used when the ambient location cannot be read
    ///
    /// Empty hostname and origin, insecure, not a custom domain.
    #[must_use]
    pub fn unreadable(is_production: bool) -> Self {
        Self {
            is_production,
            ..Self::default()
        }
    }

    /// Whether the origin uses the encrypted transport scheme
    #[must_use]
    pub fn has_secure_scheme(&self) -> bool {
        self.origin.starts_with("https://")
    }
}
