//! Hostname rules
//!
//! The hostnames a deployment is expected to be served from, kept in one
//! place so the configuration and custom-domain checks cannot drift apart.

use serde::{Deserialize, Serialize};

/// Production hostname rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainPolicy {
    /// Hostnames that count as the custom production domain
    #[serde(default = "default_production_hosts")]
    pub production_hosts: Vec<String>,

    /// Domain the hostname must contain in production
    #[serde(default = "default_expected_domain")]
    pub expected_domain: String,

    /// Loopback development hostname
    #[serde(default = "default_loopback_host")]
    pub loopback_host: String,
}

fn default_production_hosts() -> Vec<String> {
    vec![
        "hanu-consulting.com".to_string(),
        "www.hanu-consulting.com".to_string(),
    ]
}

fn default_expected_domain() -> String {
    "hanu-consulting.com".to_string()
}

fn default_loopback_host() -> String {
    "localhost".to_string()
}

impl Default for DomainPolicy {
    fn default() -> Self {
        Self {
            production_hosts: default_production_hosts(),
            expected_domain: default_expected_domain(),
            loopback_host: default_loopback_host(),
        }
    }
}

impl DomainPolicy {
    /// Hostname equals one of the production hostnames
    #[must_use]
    pub fn is_production_host(&self, hostname: &str) -> bool {
        !hostname.is_empty()
            && self.production_hosts.iter().any(|h| h.eq_ignore_ascii_case(hostname))
    }

    /// Hostname contains the expected production domain
    #[must_use]
    pub fn carries_expected_domain(&self, hostname: &str) -> bool {
        !self.expected_domain.is_empty()
            && hostname
                .to_ascii_lowercase()
                .contains(&self.expected_domain.to_ascii_lowercase())
    }

    /// Hostname is the loopback development host
    #[must_use]
    pub fn is_loopback(&self, hostname: &str) -> bool {
        hostname.eq_ignore_ascii_case(&self.loopback_host)
    }
}
