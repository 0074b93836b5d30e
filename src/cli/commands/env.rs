//! Show the environment snapshot

use domain_doctor::config::DoctorConfig;
use domain_doctor::core::services::{read_environment, validate_environment};
use domain_doctor::output::{EnvironmentView, OutputMode, Render};

/// Read and validate the environment without touching the network
pub fn env(config: &DoctorConfig, mode: OutputMode) -> anyhow::Result<()> {
    let environment = read_environment(&super::ambient(config), &config.domain);
    let valid = validate_environment(&environment, &config.domain);

    EnvironmentView { environment, valid }.render(mode);
    Ok(())
}
