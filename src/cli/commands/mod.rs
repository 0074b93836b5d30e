//! Command implementations

mod check;
mod env;
mod init;

use std::path::Path;
use std::sync::Arc;

use domain_doctor::adapters::doh::DohResolver;
use domain_doctor::adapters::env::FixedAmbient;
use domain_doctor::adapters::http::ReqwestProbe;
use domain_doctor::adapters::http_client;
use domain_doctor::adapters::supabase::SupabaseBackend;
use domain_doctor::config::DoctorConfig;
use domain_doctor::core::services::Diagnostics;

use super::app::SiteArgs;

pub use check::check;
pub use env::env;
pub use init::init;

/// Load config, then apply command-line overrides
pub fn load_config(path: Option<&Path>, site: &SiteArgs) -> anyhow::Result<DoctorConfig> {
    let mut config = DoctorConfig::load(path)?;
    if let Some(url) = &site.url {
        config.site.url = Some(url.clone());
    }
    if site.production {
        config.site.production = true;
    }
    if site.development {
        config.site.production = false;
    }
    log::debug!(
        "Diagnosing {:?} (production: {})",
        config.site.url, config.site.production
    );
    Ok(config)
}

/// The ambient source described by the config
fn ambient(config: &DoctorConfig) -> FixedAmbient {
    FixedAmbient::new(config.site.url.as_deref(), config.site.production)
}

/// Wire the diagnostics pipeline to the network adapters
fn diagnostics(config: &DoctorConfig) -> anyhow::Result<Diagnostics> {
    let client = http_client(config.timeout(), &config.http.user_agent)?;

    let backend =
        SupabaseBackend::new(client.clone(), &config.backend.url, &config.backend.anon_key)
            .with_access_token(config.backend.access_token.clone());
    let dns = DohResolver::new(client.clone(), &config.dns.resolver_url);
    let http = ReqwestProbe::new(client);

    Ok(Diagnostics::new(
        Arc::new(ambient(config)),
        Arc::new(backend),
        Arc::new(dns),
        Arc::new(http),
    )
    .with_policy(config.domain.clone())
    .with_probe_table(config.backend.probe_table.clone()))
}
