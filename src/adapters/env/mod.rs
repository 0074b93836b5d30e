//! Ambient location and build mode
//!
//! Implements `Ambient` from values resolved by the caller (config file,
//! environment variables, command-line flags).

use crate::core::ports::Ambient;

/// A fixed location and build mode
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixedAmbient {
    location: Option<String>,
    production: bool,
}

impl FixedAmbient {
    /// Create from an optional location; bare hostnames get an `https://` scheme
    #[must_use]
    pub fn new(location: Option<&str>, production: bool) -> Self {
        Self {
            location: location.and_then(normalize_location),
            production,
        }
    }

    /// Shorthand for a known location
    #[must_use]
    pub fn at(location: &str, production: bool) -> Self {
        Self::new(Some(location), production)
    }
}

impl Ambient for FixedAmbient {
    fn location(&self) -> Option<String> {
        self.location.clone()
    }

    fn is_production(&self) -> bool {
        self.production
    }
}

/// Trim a location and add `https://` when no scheme is given
///
/// Returns `None` for blank input.
#[must_use]
pub fn normalize_location(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.contains("://") {
        Some(trimmed.to_string())
    } else {
        Some(format!("https://{trimmed}"))
    }
}
