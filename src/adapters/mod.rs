//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `env/` - Ambient location and build mode
//! - `supabase/` - Hosted backend over its REST, auth and RPC endpoints
//! - `doh/` - JSON DNS-over-HTTPS resolver
//! - `http/` - Response-header probe for the deployment's origin
//!
//! The network adapters share one `reqwest::Client` built by [`http_client`].

pub mod doh;
pub mod env;
pub mod http;
pub mod supabase;

use std::error::Error;
use std::time::Duration;

use reqwest::Client;

/// Longest response body kept in error details
const MAX_BODY_CHARS: usize = 512;

/// Build the HTTP client shared by the network adapters
pub fn http_client(timeout: Duration, user_agent: &str) -> reqwest::Result<Client> {
    Client::builder().timeout(timeout).user_agent(user_agent).build()
}

/// Render an error with its source chain (`outer: inner: root`)
pub(crate) fn error_chain(err: &dyn Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

/// Truncate a response body for inclusion in error details
pub(crate) fn truncate_body(body: &str) -> String {
    if body.chars().count() <= MAX_BODY_CHARS {
        body.to_string()
    } else {
        let mut short: String = body.chars().take(MAX_BODY_CHARS).collect();
        short.push('…');
        short
    }
}
