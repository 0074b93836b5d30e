//! Core diagnostics logic
//!
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (snapshot, check result, report)
//! - `ports/` - Trait definitions for collaborators
//! - `services/` - Environment reader, checks, runner, aggregator

pub mod models;
pub mod ports;
pub mod services;
