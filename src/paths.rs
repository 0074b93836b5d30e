//! Centralized path definitions for domain-doctor
//!
//! ## Layout
//!
//! ```text
//! project/
//! └── .domain-doctor.toml          # Project config (committed)
//!
//! ~/.config/domain-doctor/
//! └── config.toml                  # User-level fallback
//! ```

use std::path::{Path, PathBuf};

/// Project configuration filename
pub const PROJECT_CONFIG_FILE: &str = ".domain-doctor.toml";

/// Global config directory, relative to the home directory
const GLOBAL_DIR: &str = ".config/domain-doctor";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get path to the project config file inside `dir`
#[must_use]
pub fn project_config_in(dir: &Path) -> PathBuf {
    dir.join(PROJECT_CONFIG_FILE)
}

/// Get path to the project config file in the working directory
#[must_use]
pub fn project_config() -> PathBuf {
    PathBuf::from(PROJECT_CONFIG_FILE)
}

/// Get the global config directory.
///
/// Returns `~/.config/domain-doctor`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the global config file path.
///
/// Returns `~/.config/domain-doctor/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}
