//! Environment reader
//!
//! Derives an [`EnvironmentSnapshot`] from the ambient location and build
//! mode. Pure apart from reading the [`Ambient`] port.

use log::debug;
use url::Url;

use crate::core::models::{DomainPolicy, EnvironmentSnapshot};
use crate::core::ports::Ambient;

/// Read the ambient state into a fresh snapshot
///
/// Never fails: a missing, unparseable or opaque location yields
/// [`EnvironmentSnapshot::unreadable`] so downstream checks still run.
#[must_use]
pub fn read_environment(ambient: &dyn Ambient, policy: &DomainPolicy) -> EnvironmentSnapshot {
    let is_production = ambient.is_production();

    let Some(location) = ambient.location() else {
        debug!("No ambient location available");
        return EnvironmentSnapshot::unreadable(is_production);
    };

    let url = match Url::parse(location.trim()) {
        Ok(url) => url,
        Err(e) => {
            debug!("Unparseable location {location:?}: {e}");
            return EnvironmentSnapshot::unreadable(is_production);
        },
    };

    let origin = url.origin();
    let Some(host) = url.host_str().filter(|_| origin.is_tuple()) else {
        debug!("Location {location:?} has no network origin");
        return EnvironmentSnapshot::unreadable(is_production);
    };

    // Fully-qualified names compare equal to their relative form
    let hostname = host.strip_suffix('.').unwrap_or(host).to_ascii_lowercase();
    let origin = origin.ascii_serialization();
    let is_secure = origin.starts_with("https://") || policy.is_loopback(&hostname);
    let expected_site_url = format!("https://{hostname}");

    EnvironmentSnapshot {
        is_production,
        is_custom_domain: policy.is_production_host(&hostname),
        is_secure,
        api_url: format!("{expected_site_url}/api"),
        auth_redirect_url: format!("{expected_site_url}/auth/callback"),
        expected_site_url,
        hostname,
        origin,
    }
}

/// Validate a snapshot
///
/// 1. In production, the hostname must not be the loopback host.
/// 2. The origin must be non-empty.
#[must_use]
pub fn validate_environment(snapshot: &EnvironmentSnapshot, policy: &DomainPolicy) -> bool {
    let production_off_loopback =
        !snapshot.is_production || !policy.is_loopback(&snapshot.hostname);
    production_off_loopback && !snapshot.origin.is_empty()
}
