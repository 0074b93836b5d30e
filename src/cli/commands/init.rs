//! Write a default config file

use domain_doctor::config::DoctorConfig;
use domain_doctor::output::{OperationResult, OutputMode, Render};
use domain_doctor::paths;

/// Write `.domain-doctor.toml` in the current directory
pub fn init(force: bool, mode: OutputMode) -> anyhow::Result<()> {
    let path = paths::project_config_in(&std::env::current_dir()?);

    if path.exists() && !force {
        OperationResult {
            success: false,
            message: format!(
                "Already initialized ({} exists). Use --force to overwrite.",
                path.display()
            ),
        }
        .render(mode);
        return Ok(());
    }

    DoctorConfig::default().save(&path)?;

    OperationResult {
        success: true,
        message: format!("Created {}", path.display()),
    }
    .render(mode);
    Ok(())
}
