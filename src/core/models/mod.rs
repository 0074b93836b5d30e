//! Domain models for domain-doctor
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`EnvironmentSnapshot`] - Where the deployment is served from
//! - [`CheckKind`] / [`CheckResult`] - One verification and its outcome
//! - [`DomainPolicy`] - Which hostnames count as production
//! - [`CheckStatus`] - Pass, warning or fail
//! - [`Report`] / [`Summary`] - One run and its counts
//! - [`ErrorDetails`] - Normalized error payload for result details

mod check;
mod details;
mod environment;
mod policy;
mod report;
mod status;

pub use check::{CheckKind, CheckResult};
pub use details::ErrorDetails;
pub use environment::EnvironmentSnapshot;
pub use policy::DomainPolicy;
pub use report::{Report, Summary};
pub use status::CheckStatus;
