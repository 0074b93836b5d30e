//! Tests for the DNS-over-HTTPS resolver

use domain_doctor::adapters::doh::DohResolver;
use domain_doctor::core::ports::{DnsResolver, ProbeError};

use crate::client;
use crate::common::{Reply, TestServer};

fn resolver(server: &TestServer) -> DohResolver {
    DohResolver::new(client(), &format!("{}/resolve", server.url()))
}

#[tokio::test]
async fn resolves_a_records() {
    let server = TestServer::always(Reply::json(
        200,
        r#"{"Status":0,"Answer":[
            {"name":"hanu-consulting.com.","type":1,"TTL":300,"data":"198.51.100.4"}
        ]}"#,
    ));

    let answer = resolver(&server).resolve_a("hanu-consulting.com").await.unwrap();
    assert!(answer.is_success());
    assert_eq!(answer.a_records(), vec!["198.51.100.4"]);

    let request = &server.requests()[0];
    assert_eq!(request.url, "/resolve?name=hanu-consulting.com&type=A");
    assert_eq!(request.header("accept"), Some("application/dns-json"));
}

#[tokio::test]
async fn nxdomain_keeps_raw_response() {
    let server = TestServer::always(Reply::json(200, r#"{"Status":3,"Comment":"NXDOMAIN"}"#));

    let answer = resolver(&server).resolve_a("missing.example").await.unwrap();
    assert!(!answer.is_success());
    assert!(answer.a_records().is_empty());
    assert_eq!(answer.raw["Comment"], "NXDOMAIN");
}

#[tokio::test]
async fn http_error_is_status() {
    let server = TestServer::always(Reply::text(502, "bad gateway"));

    let err = resolver(&server).resolve_a("hanu-consulting.com").await.unwrap_err();
    assert!(matches!(err, ProbeError::Status { status: 502, .. }));
}

#[tokio::test]
async fn garbage_body_is_decode_error() {
    let server = TestServer::always(Reply::text(200, "<html>nope</html>"));

    let err = resolver(&server).resolve_a("hanu-consulting.com").await.unwrap_err();
    assert!(matches!(err, ProbeError::Decode(_)));
}
