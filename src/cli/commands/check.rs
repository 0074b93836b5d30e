//! Run diagnostics against a deployment

use std::time::Duration;

use domain_doctor::config::DoctorConfig;
use domain_doctor::output::{OutputMode, Render};

/// Run every check and render the report
///
/// Exits with status 1 when the deployment is not ready (or returns an
/// error in CI mode). `timeout` bounds the whole run; a late report is
/// discarded.
pub fn check(
    config: &DoctorConfig,
    timeout: Option<u64>,
    ci: bool,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let diagnostics = super::diagnostics(config)?;
    let runtime = tokio::runtime::Builder::new_multi_thread().enable_all().build()?;

    let report = runtime.block_on(async {
        match timeout {
            Some(secs) => {
                tokio::time::timeout(Duration::from_secs(secs), diagnostics.verify_domain())
                    .await
                    .map_err(|_| anyhow::anyhow!("Diagnostics did not finish within {secs}s"))
            },
            None => Ok(diagnostics.verify_domain().await),
        }
    })?;

    report.render(mode);

    if !report.is_ready() {
        if !ci {
            std::process::exit(1);
        }
        anyhow::bail!("Deployment is not ready: {} check(s) failed", report.summary.failed);
    }

    Ok(())
}
