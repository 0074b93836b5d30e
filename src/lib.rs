//! domain-doctor - Diagnose whether a deployment is correctly configured for
//! its custom domain
//!
//! This library reads where a site is being served from, runs a fixed set of
//! independent checks against it (hostname rules, TLS, backend reachability,
//! security headers, DNS) and reduces the results to a pass/warning/fail
//! report with a single "ready for production" verdict.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod output;
pub mod paths;
