//! Tests for the response-header probe

use domain_doctor::adapters::http::ReqwestProbe;
use domain_doctor::core::ports::{HttpProbe, ProbeError};

use crate::client;
use crate::common::{Reply, TestServer};

#[tokio::test]
async fn collects_headers_case_insensitively() {
    let server = TestServer::always(
        Reply::text(200, "<html></html>")
            .header("X-Frame-Options", "DENY")
            .header("Strict-Transport-Security", "max-age=63072000"),
    );

    let response = ReqwestProbe::new(client())
        .fetch_headers(&format!("{}/", server.url()))
        .await
        .unwrap();

    assert_eq!(response.status, 200);
    assert!(response.contains("x-frame-options"));
    assert!(response.contains("STRICT-TRANSPORT-SECURITY"));
    assert!(!response.contains("content-security-policy"));
}

#[tokio::test]
async fn error_status_still_returns_headers() {
    let server = TestServer::always(
        Reply::text(404, "not found").header("X-Content-Type-Options", "nosniff"),
    );

    let response = ReqwestProbe::new(client())
        .fetch_headers(&server.url())
        .await
        .unwrap();

    assert_eq!(response.status, 404);
    assert!(response.contains("x-content-type-options"));
}

#[tokio::test]
async fn refused_connection_is_transport_error() {
    let url = TestServer::always(Reply::text(200, "")).url();

    let err = ReqwestProbe::new(client()).fetch_headers(&url).await.unwrap_err();
    assert!(matches!(err, ProbeError::Transport(_)));
}
