//! Configuration management
//!
//! Settings are read from a TOML file (explicit path, project
//! `.domain-doctor.toml`, or `~/.config/domain-doctor/config.toml`), then
//! overridden by `DOMAIN_DOCTOR_*` environment variables. Every field has a
//! default, so an empty file is a valid config.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::adapters::doh::DEFAULT_RESOLVER_URL;
use crate::core::models::DomainPolicy;
use crate::core::services::DEFAULT_PROBE_TABLE;
use crate::paths;

/// Location the deployment is served from
pub const ENV_URL: &str = "DOMAIN_DOCTOR_URL";
/// Build mode: `production` or `development`
pub const ENV_MODE: &str = "DOMAIN_DOCTOR_MODE";
/// Backend project URL
pub const ENV_BACKEND_URL: &str = "DOMAIN_DOCTOR_BACKEND_URL";
/// Backend public key
pub const ENV_BACKEND_KEY: &str = "DOMAIN_DOCTOR_BACKEND_KEY";
/// Signed-in user's access token
pub const ENV_ACCESS_TOKEN: &str = "DOMAIN_DOCTOR_ACCESS_TOKEN";

/// Errors loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read or written
    #[error("config io error at {path}: {source}")]
    Io {
        /// File involved
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// The config file is not valid TOML for this schema
    #[error("invalid config {path}: {source}")]
    Parse {
        /// File involved
        path: PathBuf,
        /// Underlying error
        source: toml::de::Error,
    },

    /// The config could not be serialized
    #[error("could not serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A value is out of range
    #[error("invalid config value: {0}")]
    Invalid(String),
}

/// Full configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoctorConfig {
    /// The deployment being diagnosed
    #[serde(default)]
    pub site: SiteConfig,
    /// Production hostname rules
    #[serde(default)]
    pub domain: DomainPolicy,
    /// Hosted backend connection
    #[serde(default)]
    pub backend: BackendConfig,
    /// DNS-over-HTTPS resolver
    #[serde(default)]
    pub dns: DnsConfig,
    /// HTTP client settings
    #[serde(default)]
    pub http: HttpConfig,
}

/// The deployment being diagnosed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// URL the deployment is served from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Whether this is a production build
    #[serde(default)]
    pub production: bool,
}

/// Hosted backend connection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Project base URL
    #[serde(default)]
    pub url: String,
    /// Public (anon) key
    #[serde(default)]
    pub anon_key: String,
    /// Signed-in user's access token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    /// Table read by the connectivity check
    #[serde(default = "default_probe_table")]
    pub probe_table: String,
}

fn default_probe_table() -> String {
    DEFAULT_PROBE_TABLE.to_string()
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            anon_key: String::new(),
            access_token: None,
            probe_table: default_probe_table(),
        }
    }
}

/// DNS-over-HTTPS resolver
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsConfig {
    /// JSON API endpoint
    #[serde(default = "default_resolver_url")]
    pub resolver_url: String,
}

fn default_resolver_url() -> String {
    DEFAULT_RESOLVER_URL.to_string()
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            resolver_url: default_resolver_url(),
        }
    }
}

/// HTTP client settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

const fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    format!("domain-doctor/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

/// Parse a build mode name; `None` if unrecognized
#[must_use]
pub fn parse_mode(mode: &str) -> Option<bool> {
    match mode.trim().to_lowercase().as_str() {
        "production" | "prod" => Some(true),
        "development" | "dev" | "test" => Some(false),
        _ => None,
    }
}

impl DoctorConfig {
    /// Load config and apply environment overrides
    ///
    /// Lookup order: `explicit`, then the project file in the working
    /// directory, then the global file, else defaults. An explicit path
    /// that does not exist is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match explicit {
            Some(path) => Self::from_file(path)?,
            None => {
                let project = paths::project_config();
                let global = paths::global_config();
                if project.exists() {
                    Self::from_file(&project)?
                } else if global.exists() {
                    Self::from_file(&global)?
                } else {
                    Self::default()
                }
            },
        };
        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Read a config file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply `DOMAIN_DOCTOR_*` overrides; blank values are ignored
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = get(ENV_URL) {
            self.site.url = Some(url);
        }
        if let Some(mode) = get(ENV_MODE) {
            self.site.production = parse_mode(&mode).ok_or_else(|| {
                ConfigError::Invalid(format!("{ENV_MODE}={mode}: use production or development"))
            })?;
        }
        if let Some(url) = get(ENV_BACKEND_URL) {
            self.backend.url = url;
        }
        if let Some(key) = get(ENV_BACKEND_KEY) {
            self.backend.anon_key = key;
        }
        if let Some(token) = get(ENV_ACCESS_TOKEN) {
            self.backend.access_token = Some(token);
        }
        Ok(())
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.http.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "http.timeout_secs must be greater than 0".to_string(),
            ));
        }
        if self.domain.production_hosts.is_empty() {
            return Err(ConfigError::Invalid(
                "domain.production_hosts must not be empty".to_string(),
            ));
        }
        if self.backend.probe_table.trim().is_empty() {
            return Err(ConfigError::Invalid("backend.probe_table must not be empty".to_string()));
        }
        Ok(())
    }

    /// Per-request HTTP timeout
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.http.timeout_secs)
    }

    /// Render as TOML with a header comment
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        let body = toml::to_string_pretty(self)?;
        Ok(format!(
            "# domain-doctor configuration\n\
             # Environment variables {ENV_URL}, {ENV_MODE}, {ENV_BACKEND_URL},\n\
             # {ENV_BACKEND_KEY} and {ENV_ACCESS_TOKEN} override these values.\n\n{body}"
        ))
    }

    /// Write to disk, creating parent directories
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(io_err)?;
        }
        fs::write(path, self.to_toml()?).map_err(io_err)
    }
}
