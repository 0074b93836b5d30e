//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::commands;
use domain_doctor::output::OutputMode;

/// domain-doctor - Custom-domain readiness diagnostics
#[derive(Parser, Debug)]
#[command(
    name = "domain-doctor",
    version,
    about = "Custom-domain readiness diagnostics",
    long_about = "Check whether a deployment is correctly configured for its custom domain.\n\n\
                  Runs hostname, TLS, backend, security-header and DNS checks.\n\
                  Failures block production readiness; warnings do not."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (defaults to .domain-doctor.toml, then ~/.config/domain-doctor/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Where the deployment is served from and in which build mode
#[derive(Args, Debug, Default)]
pub struct SiteArgs {
    /// URL the deployment is served from (bare hostnames get https://)
    #[arg(short, long)]
    pub url: Option<String>,

    /// Treat the deployment as a production build
    #[arg(long, conflicts_with = "development")]
    pub production: bool,

    /// Treat the deployment as a development build
    #[arg(long)]
    pub development: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run all diagnostics and report production readiness
    Check {
        #[command(flatten)]
        site: SiteArgs,

        /// Give up on the whole run after this many seconds
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        timeout: Option<u64>,

        /// Run in CI mode (return an error instead of exiting)
        #[arg(long)]
        ci: bool,
    },

    /// Show the environment snapshot without running network checks
    Env {
        #[command(flatten)]
        site: SiteArgs,
    },

    /// Write a default .domain-doctor.toml in the current directory
    Init {
        /// Overwrite an existing config
        #[arg(short, long)]
        force: bool,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };
    let config_path = cli.config.as_deref();

    match cli.command {
        Some(Command::Check { site, timeout, ci }) => {
            let config = commands::load_config(config_path, &site)?;
            commands::check(&config, timeout, ci, output_mode)
        },
        Some(Command::Env { site }) => {
            let config = commands::load_config(config_path, &site)?;
            commands::env(&config, output_mode)
        },
        Some(Command::Init { force }) => commands::init(force, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("domain-doctor v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("domain-doctor v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'domain-doctor --help' for usage");
                println!("Run 'domain-doctor check --url <site>' to diagnose a deployment");
            }
            Ok(())
        },
    }
}
