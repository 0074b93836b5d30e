//! Tests for the environment reader

use domain_doctor::adapters::env::FixedAmbient;
use domain_doctor::core::models::DomainPolicy;
use domain_doctor::core::services::{read_environment, validate_environment};
use test_case::test_case;

fn read(location: &str, production: bool) -> domain_doctor::core::models::EnvironmentSnapshot {
    read_environment(&FixedAmbient::at(location, production), &DomainPolicy::default())
}

#[test]
fn consecutive_reads_are_equal() {
    let ambient = FixedAmbient::at("https://www.hanu-consulting.com/academy", true);
    let policy = DomainPolicy::default();

    let first = read_environment(&ambient, &policy);
    let second = read_environment(&ambient, &policy);
    assert_eq!(first, second);
}

#[test_case("https://hanu-consulting.com", true ; "apex")]
#[test_case("https://www.hanu-consulting.com", true ; "www variant")]
#[test_case("https://HANU-CONSULTING.COM/hub", true ; "upper case")]
#[test_case("https://hanu-consulting.com./", true ; "fully qualified")]
#[test_case("https://hanu-consulting.netlify.app", false ; "platform subdomain")]
#[test_case("http://localhost:5173", false ; "dev server")]
fn custom_domain_detection(location: &str, expected: bool) {
    assert_eq!(read(location, true).is_custom_domain, expected);
}

#[test_case("https://example.org", true ; "https")]
#[test_case("http://example.org", false ; "plain http")]
#[test_case("http://localhost:3000", true ; "loopback")]
fn secure_flag(location: &str, expected: bool) {
    assert_eq!(read(location, false).is_secure, expected);
}

#[test]
fn bare_hostname_is_treated_as_https() {
    let snap = read("hanu-consulting.com", true);
    assert_eq!(snap.origin, "https://hanu-consulting.com");
    assert!(snap.is_secure);
}

#[test]
fn non_default_port_is_part_of_origin() {
    let snap = read("https://hanu-consulting.com:8443/x", true);
    assert_eq!(snap.hostname, "hanu-consulting.com");
    assert_eq!(snap.origin, "https://hanu-consulting.com:8443");
    assert_eq!(snap.expected_site_url, "https://hanu-consulting.com");
}

#[test]
fn missing_location_yields_safe_defaults() {
    let snap = read_environment(&FixedAmbient::new(None, true), &DomainPolicy::default());
    assert!(snap.hostname.is_empty());
    assert!(snap.origin.is_empty());
    assert!(!snap.is_secure);
    assert!(snap.api_url.is_empty());
    assert!(snap.is_production);
}

#[test]
fn custom_policy_changes_detection() {
    let policy = DomainPolicy {
        production_hosts: vec!["edu.example.org".to_string()],
        expected_domain: "example.org".to_string(),
        loopback_host: "devbox".to_string(),
    };
    let snap = read_environment(&FixedAmbient::at("http://devbox:8080", true), &policy);
    assert!(snap.is_secure);
    assert!(!validate_environment(&snap, &policy));

    let snap = read_environment(&FixedAmbient::at("https://edu.example.org", true), &policy);
    assert!(snap.is_custom_domain);
    assert!(validate_environment(&snap, &policy));
}

#[test]
fn fully_qualified_host_drops_trailing_dot() {
    let snap = read("https://www.hanu-consulting.com./", true);
    assert_eq!(snap.hostname, "www.hanu-consulting.com");
    assert_eq!(snap.expected_site_url, "https://www.hanu-consulting.com");
}
