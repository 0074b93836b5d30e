//! Adapter tests
//!
//! Tests for I/O adapter implementations against a local HTTP server:
//! - Hosted backend (REST, auth, RPC)
//! - DNS-over-HTTPS resolver
//! - Response-header probe

#[path = "../common/mod.rs"]
#[allow(dead_code)]
mod common;

mod doh_test;
mod http_test;
mod supabase_test;

use std::time::Duration;

use domain_doctor::adapters::http_client;
use reqwest::Client;

/// Client with a short timeout for local servers
fn client() -> Client {
    http_client(Duration::from_secs(5), "domain-doctor-tests").unwrap()
}
