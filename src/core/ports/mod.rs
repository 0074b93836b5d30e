//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the diagnostics core and the
//! collaborators it probes (ambient location, hosted backend, DNS resolver,
//! the deployment's own origin).
//!
//! Implementations live in the `adapters` module.

mod ambient;
mod backend;
mod dns;
mod error;
mod http_probe;

pub use ambient::Ambient;
pub use backend::{Backend, Session, User};
pub use dns::{DnsAnswer, DnsRecord, DnsResolver, RECORD_TYPE_A};
pub use error::{BackendError, ProbeError};
pub use http_probe::{HttpProbe, ResponseHeaders};
