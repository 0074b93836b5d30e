//! Diagnostics services
//!
//! - [`environment`] - Read and validate the environment snapshot
//! - [`checks`] - One handler per check
//! - [`runner`] - Run all checks concurrently, gather in order
//! - [`summary`] - Reduce results to counts

pub mod checks;
pub mod environment;
pub mod runner;
pub mod summary;

pub use checks::{CheckContext, SECURITY_HEADERS, is_truthy, run_check};
pub use environment::{read_environment, validate_environment};
pub use runner::{DEFAULT_PROBE_TABLE, Diagnostics};
pub use summary::summarize;
