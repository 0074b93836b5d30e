//! Report and summary
//!
//! A report is the ordered result list of one run plus its derived summary.

use serde::{Deserialize, Serialize};

use super::{CheckResult, CheckStatus, EnvironmentSnapshot};

/// Counts per status over one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Number of results
    pub total: usize,
    /// Results with status pass
    pub passed: usize,
    /// Results with status warning
    pub warnings: usize,
    /// Results with status fail
    pub failed: usize,
    /// True iff nothing failed
    pub is_ready: bool,
}

impl Summary {
    /// Reduce a result list to its summary
    ///
    /// Total over any list, including the empty one (which is ready).
    #[must_use]
    pub fn of(results: &[CheckResult]) -> Self {
        let mut summary = Self::default();
        for result in results {
            summary.total += 1;
            match result.status {
                CheckStatus::Pass => summary.passed += 1,
                CheckStatus::Warning => summary.warnings += 1,
                CheckStatus::Fail => summary.failed += 1,
            }
        }
        summary.is_ready = !results.iter().any(|r| r.status.is_blocking());
        summary
    }
}

/// Results of one diagnostics run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Results in check declaration order
    pub results: Vec<CheckResult>,

    /// Derived counts
    pub summary: Summary,

    /// The snapshot the run was evaluated against
    pub environment: EnvironmentSnapshot,

    /// When the run finished (RFC3339)
    pub generated_at: String,
}

impl Report {
    /// Build a report, deriving the summary from the results
    #[must_use]
    pub fn new(results: Vec<CheckResult>, environment: EnvironmentSnapshot) -> Self {
        let summary = Summary::of(&results);
        Self {
            results,
            summary,
            environment,
            generated_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Whether the deployment is ready for production
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        self.summary.is_ready
    }

    /// Find a result by its check name
    #[must_use]
    pub fn result(&self, name: &str) -> Option<&CheckResult> {
        self.results.iter().find(|r| r.name == name)
    }
}
