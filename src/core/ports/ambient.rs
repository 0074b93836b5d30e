//! Ambient environment port
//!
//! Where the deployment is being served from and which build mode it runs
//! in. Implementations are read on every call; nothing is cached.

/// Source of ambient location and build-mode state
pub trait Ambient: Send + Sync {
    /// Full URL of the current location, if one can be read
    fn location(&self) -> Option<String>;

    /// Build-time production flag
    fn is_production(&self) -> bool;
}
