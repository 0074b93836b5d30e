//! Hosted backend port
//!
//! The data, auth and remote-procedure surface the diagnostics read from.
//! Every operation is read-only.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::BackendError;

/// Current auth session held by the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Bearer token for the signed-in user
    pub access_token: String,
}

/// The signed-in user as reported by the auth endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// User ID
    pub id: String,

    /// Primary email, if any
    #[serde(default)]
    pub email: Option<String>,
}

/// Hosted backend connection
#[async_trait]
pub trait Backend: Send + Sync {
    /// Read at most one row from `table`
    async fn read_one(&self, table: &str) -> Result<(), BackendError>;

    /// The current session; `None` when nobody is signed in
    async fn current_session(&self) -> Result<Option<Session>, BackendError>;

    /// The current user; `None` when nobody is signed in
    async fn current_user(&self) -> Result<Option<User>, BackendError>;

    /// Call `validate_domain_access(domain_url)` and return its raw result
    async fn validate_domain_access(&self, domain_url: &str) -> Result<Value, BackendError>;
}
