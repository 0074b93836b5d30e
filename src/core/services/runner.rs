//! Check runner
//!
//! Fans every declared check out onto its own task and gathers the results
//! back in declaration order. A run never fails: a check that panics is
//! reported as a failing result and the rest of the run carries on.
//!
//! `Diagnostics` holds no mutable state, so overlapping runs are
//! independent and each produces its own report.

use std::sync::Arc;

use log::{info, warn};
use tokio::task::JoinError;

use super::checks::{CheckContext, run_check};
use super::environment::read_environment;
use crate::core::models::{
    CheckKind, CheckResult, DomainPolicy, EnvironmentSnapshot, ErrorDetails, Report,
};
use crate::core::ports::{Ambient, Backend, DnsResolver, HttpProbe};

/// Table read by the backend connectivity check unless configured otherwise
pub const DEFAULT_PROBE_TABLE: &str = "profiles";

/// The diagnostics pipeline, wired to its collaborators
#[derive(Clone)]
pub struct Diagnostics {
    ambient: Arc<dyn Ambient>,
    backend: Arc<dyn Backend>,
    dns: Arc<dyn DnsResolver>,
    http: Arc<dyn HttpProbe>,
    policy: DomainPolicy,
    probe_table: String,
}

impl std::fmt::Debug for Diagnostics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Diagnostics")
            .field("policy", &self.policy)
            .field("probe_table", &self.probe_table)
            .finish_non_exhaustive()
    }
}

impl Diagnostics {
    /// Wire the pipeline with the default hostname policy and probe table
    #[must_use]
    pub fn new(
        ambient: Arc<dyn Ambient>,
        backend: Arc<dyn Backend>,
        dns: Arc<dyn DnsResolver>,
        http: Arc<dyn HttpProbe>,
    ) -> Self {
        Self {
            ambient,
            backend,
            dns,
            http,
            policy: DomainPolicy::default(),
            probe_table: DEFAULT_PROBE_TABLE.to_string(),
        }
    }

    /// Replace the hostname policy
    #[must_use]
    pub fn with_policy(mut self, policy: DomainPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replace the table used for the connectivity read
    #[must_use]
    pub fn with_probe_table(mut self, table: impl Into<String>) -> Self {
        self.probe_table = table.into();
        self
    }

    /// Read a fresh environment snapshot
    #[must_use]
    pub fn environment(&self) -> EnvironmentSnapshot {
        read_environment(self.ambient.as_ref(), &self.policy)
    }

    /// Run every check and return the results in declaration order
    ///
    /// Always returns exactly [`CheckKind::ALL`]`.len()` results.
    pub async fn run_checks(&self) -> Vec<CheckResult> {
        self.run_against(self.environment()).await
    }

    /// Run every check and reduce the results to a report
    pub async fn verify_domain(&self) -> Report {
        let snapshot = self.environment();
        let results = self.run_against(snapshot.clone()).await;
        let report = Report::new(results, snapshot);
        info!(
            "Diagnostics finished: {} passed, {} warnings, {} failed",
            report.summary.passed, report.summary.warnings, report.summary.failed
        );
        report
    }

    async fn run_against(&self, snapshot: EnvironmentSnapshot) -> Vec<CheckResult> {
        let ctx = Arc::new(CheckContext {
            snapshot,
            policy: self.policy.clone(),
            probe_table: self.probe_table.clone(),
            backend: Arc::clone(&self.backend),
            dns: Arc::clone(&self.dns),
            http: Arc::clone(&self.http),
        });

        let handles: Vec<_> = CheckKind::ALL
            .iter()
            .map(|&kind| {
                let ctx = Arc::clone(&ctx);
                (kind, tokio::spawn(async move { run_check(kind, &ctx).await }))
            })
            .collect();

        // Await in declaration order; completion order doesn't matter
        let mut results = Vec::with_capacity(handles.len());
        for (kind, handle) in handles {
            let result = match handle.await {
                Ok(result) => result,
                Err(err) => aborted(kind, err),
            };
            results.push(result);
        }
        results
    }
}

fn aborted(kind: CheckKind, err: JoinError) -> CheckResult {
    warn!("Check {kind} did not complete: {err}");
    let details = if err.is_panic() {
        ErrorDetails::from_panic(err.into_panic().as_ref())
    } else {
        ErrorDetails::new(err.to_string(), serde_json::Value::Null)
    };
    CheckResult::fail(kind, format!("Check aborted: {}", details.message)).with_error(details)
}
