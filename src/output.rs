//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use std::fmt::Write as _;

use colored::{ColoredString, Colorize};
use serde::Serialize;

use crate::core::models::{CheckResult, CheckStatus, EnvironmentSnapshot, Report};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Something the CLI can print in either mode
pub trait Render: Serialize {
    /// Human-readable text, without a trailing newline
    fn to_human(&self) -> String;

    /// Render the value based on output mode
    fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.to_human()),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

/// An environment snapshot and its validation verdict
#[derive(Debug, Clone, Serialize)]
pub struct EnvironmentView {
    /// The snapshot
    pub environment: EnvironmentSnapshot,
    /// Result of environment validation
    pub valid: bool,
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

fn badge(status: CheckStatus) -> ColoredString {
    let text = format!("[{}]", status.label());
    match status {
        CheckStatus::Pass => text.green(),
        CheckStatus::Warning => text.yellow(),
        CheckStatus::Fail => text.red().bold(),
    }
}

fn mode_name(production: bool) -> &'static str {
    if production { "production" } else { "development" }
}

fn write_result(out: &mut String, result: &CheckResult) {
    let _ = writeln!(out, "  {} {}", badge(result.status), result.name);
    let _ = writeln!(out, "         {}", result.message);
    if let Some(details) = &result.details {
        let _ = writeln!(out, "         {}", format!("details: {details}").dimmed());
    }
}

impl Render for Report {
    fn to_human(&self) -> String {
        let mut out = String::new();
        let target = if self.environment.origin.is_empty() {
            "(unknown origin)"
        } else {
            self.environment.origin.as_str()
        };
        let _ = writeln!(
            out,
            "Domain diagnostics for {target} ({})\n",
            mode_name(self.environment.is_production)
        );

        for result in &self.results {
            write_result(&mut out, result);
        }

        let s = &self.summary;
        let _ = writeln!(
            out,
            "\n{} checks: {} passed, {} warnings, {} failed",
            s.total, s.passed, s.warnings, s.failed
        );
        if s.is_ready {
            let _ = write!(out, "{}", "READY for production".green().bold());
        } else {
            let _ = write!(
                out,
                "{}",
                format!("NOT READY: {} check(s) failed", s.failed).red().bold()
            );
        }
        out
    }
}

impl Render for EnvironmentView {
    fn to_human(&self) -> String {
        let env = &self.environment;
        let yes_no = |b: bool| if b { "yes" } else { "no" };
        let mut out = String::new();
        let _ = writeln!(out, "Hostname:          {}", env.hostname);
        let _ = writeln!(out, "Origin:            {}", env.origin);
        let _ = writeln!(out, "Mode:              {}", mode_name(env.is_production));
        let _ = writeln!(out, "Custom domain:     {}", yes_no(env.is_custom_domain));
        let _ = writeln!(out, "Secure:            {}", yes_no(env.is_secure));
        let _ = writeln!(out, "Expected site URL: {}", env.expected_site_url);
        let _ = writeln!(out, "API URL:           {}", env.api_url);
        let _ = writeln!(out, "Auth redirect URL: {}", env.auth_redirect_url);
        let verdict = if self.valid { "valid".green() } else { "invalid".red() };
        let _ = write!(out, "Environment:       {verdict}");
        out
    }
}

impl Render for OperationResult {
    fn to_human(&self) -> String {
        self.message.clone()
    }
}
