//! Tests for the Output module
//!
//! Reports and views render either as human-readable text or as JSON.

use domain_doctor::adapters::env::FixedAmbient;
use domain_doctor::core::models::{
    CheckKind, CheckResult, CheckStatus, DomainPolicy, ErrorDetails, Report,
};
use domain_doctor::core::services::read_environment;
use domain_doctor::output::{EnvironmentView, OperationResult, OutputMode, Render};
use serde_json::json;

fn report(results: Vec<CheckResult>) -> Report {
    let snapshot = read_environment(
        &FixedAmbient::at("https://hanu-consulting.com", true),
        &DomainPolicy::default(),
    );
    Report::new(results, snapshot)
}

// =============================================================================
// OutputMode Tests
// =============================================================================

#[test]
fn output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

// =============================================================================
// Report Tests
// =============================================================================

#[test]
fn report_serialization() {
    let report = report(vec![
        CheckResult::pass(CheckKind::SslTls, "secure"),
        CheckResult::fail(CheckKind::DnsResolution, "no records")
            .with_details(json!({"dns": {"Status": 3}})),
    ]);

    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["results"][0]["name"], "SSL / TLS");
    assert_eq!(value["results"][0]["status"], "pass");
    assert!(value["results"][0].get("details").is_none());
    assert_eq!(value["results"][1]["status"], "fail");
    assert_eq!(value["results"][1]["details"]["dns"]["Status"], 3);
    assert_eq!(value["summary"]["failed"], 1);
    assert_eq!(value["summary"]["is_ready"], false);
    assert_eq!(value["environment"]["hostname"], "hanu-consulting.com");
}

#[test]
fn report_human_lists_every_result() {
    let report = report(vec![
        CheckResult::pass(CheckKind::DomainConfiguration, "fine"),
        CheckResult::warning(
            CheckKind::SecurityHeaders,
            "Missing security headers: x-xss-protection",
        ),
    ]);

    let text = report.to_human();
    assert!(text.contains("https://hanu-consulting.com"));
    assert!(text.contains("[PASS]"));
    assert!(text.contains("[WARN]"));
    assert!(text.contains("Security Headers"));
    assert!(text.contains("x-xss-protection"));
    assert!(text.contains("2 checks: 1 passed, 1 warnings, 0 failed"));
    assert!(text.contains("READY for production"));
}

#[test]
fn report_human_not_ready() {
    let report = report(vec![
        CheckResult::fail(CheckKind::CustomDomain, "localhost is not one of: hanu-consulting.com"),
    ]);

    let text = report.to_human();
    assert!(text.contains("[FAIL]"));
    assert!(text.contains("NOT READY: 1 check(s) failed"));
}

#[test]
fn report_human_shows_error_details() {
    let details = ErrorDetails::new("backend unreachable: refused", json!("refused"));
    let report = report(vec![
        CheckResult::fail(CheckKind::BackendConnectivity, "Backend read failed")
            .with_error(details),
    ]);

    assert!(report.to_human().contains("details:"));
    assert_eq!(report.result("Backend Connectivity").unwrap().status, CheckStatus::Fail);
}

// =============================================================================
// Other Views
// =============================================================================

#[test]
fn environment_view_rendering() {
    let view = EnvironmentView {
        environment: read_environment(
            &FixedAmbient::at("http://localhost:5173", false),
            &DomainPolicy::default(),
        ),
        valid: true,
    };

    let text = view.to_human();
    assert!(text.contains("localhost"));
    assert!(text.contains("development"));
    assert!(text.contains("https://localhost/auth/callback"));

    let value = serde_json::to_value(&view).unwrap();
    assert_eq!(value["valid"], true);
    assert_eq!(value["environment"]["is_custom_domain"], false);
}

#[test]
fn operation_result_rendering() {
    let result = OperationResult {
        success: true,
        message: "Created .domain-doctor.toml".to_string(),
    };
    assert_eq!(result.to_human(), "Created .domain-doctor.toml");

    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["success"], true);
}
