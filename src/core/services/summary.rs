//! Report aggregator

use crate::core::models::{CheckResult, Summary};

/// Count results per status; ready iff nothing failed
#[must_use]
pub fn summarize(results: &[CheckResult]) -> Summary {
    Summary::of(results)
}
