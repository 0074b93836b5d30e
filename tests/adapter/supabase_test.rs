//! Tests for the hosted backend adapter

use domain_doctor::adapters::supabase::SupabaseBackend;
use domain_doctor::core::ports::{Backend, BackendError};
use serde_json::{Value, json};

use crate::client;
use crate::common::{Reply, TestServer};

fn backend(server: &TestServer) -> SupabaseBackend {
    SupabaseBackend::new(client(), &server.url(), "anon-key")
}

// =============================================================================
// REST read
// =============================================================================

#[tokio::test]
async fn read_one_sends_key_and_limit() {
    let server = TestServer::always(Reply::json(200, "[]"));

    backend(&server).read_one("profiles").await.unwrap();

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].url, "/rest/v1/profiles?select=id&limit=1");
    assert_eq!(requests[0].header("apikey"), Some("anon-key"));
    assert_eq!(requests[0].header("authorization"), Some("Bearer anon-key"));
}

#[tokio::test]
async fn read_one_uses_access_token_as_bearer() {
    let server = TestServer::always(Reply::json(200, r#"[{"id": 1}]"#));

    backend(&server)
        .with_access_token(Some("user-jwt".to_string()))
        .read_one("profiles")
        .await
        .unwrap();

    assert_eq!(server.requests()[0].header("authorization"), Some("Bearer user-jwt"));
}

#[tokio::test]
async fn read_one_rejected_on_client_error() {
    let server = TestServer::always(Reply::json(401, r#"{"message":"Invalid API key"}"#));

    let err = backend(&server).read_one("profiles").await.unwrap_err();
    match err {
        BackendError::Rejected { status, message } => {
            assert_eq!(status, 401);
            assert!(message.contains("Invalid API key"));
        },
        other => panic!("expected Rejected, got {other:?}"),
    }
}

#[tokio::test]
async fn read_one_transient_on_server_error() {
    let server = TestServer::always(Reply::text(503, "maintenance"));

    let err = backend(&server).read_one("profiles").await.unwrap_err();
    assert!(err.is_transient());
}

#[tokio::test]
async fn read_one_rejects_non_array_body() {
    let server = TestServer::always(Reply::json(200, r#"{"id": 1}"#));

    let err = backend(&server).read_one("profiles").await.unwrap_err();
    assert!(matches!(err, BackendError::Decode(_)));
}

#[tokio::test]
async fn unreachable_host_is_unreachable() {
    let url = {
        let server = TestServer::always(Reply::json(200, "[]"));
        server.url()
    };

    let err = SupabaseBackend::new(client(), &url, "anon-key")
        .read_one("profiles")
        .await
        .unwrap_err();
    assert!(matches!(err, BackendError::Unreachable(_)));
}

// =============================================================================
// Auth
// =============================================================================

#[tokio::test]
async fn current_user_none_when_unauthorized() {
    let server = TestServer::always(Reply::json(401, r#"{"msg":"no jwt"}"#));

    assert_eq!(backend(&server).current_user().await.unwrap(), None);
    assert_eq!(server.requests()[0].url, "/auth/v1/user");
}

#[tokio::test]
async fn current_user_decodes_user() {
    let server = TestServer::always(Reply::json(
        200,
        r#"{"id":"8f1c","email":"ops@hanu-consulting.com","role":"authenticated"}"#,
    ));

    let user = backend(&server).current_user().await.unwrap().unwrap();
    assert_eq!(user.id, "8f1c");
    assert_eq!(user.email.as_deref(), Some("ops@hanu-consulting.com"));
}

#[tokio::test]
async fn current_user_rate_limit_is_transient() {
    let server = TestServer::always(Reply::json(429, r#"{"msg":"slow down"}"#));

    let err = backend(&server).current_user().await.unwrap_err();
    assert!(err.is_transient());
}

// =============================================================================
// RPC
// =============================================================================

#[tokio::test]
async fn validate_domain_access_posts_domain_url() {
    let server = TestServer::always(Reply::json(200, "true"));

    let value = backend(&server)
        .validate_domain_access("https://hanu-consulting.com")
        .await
        .unwrap();
    assert_eq!(value, json!(true));

    let request = &server.requests()[0];
    assert_eq!(request.method, "POST");
    assert_eq!(request.url, "/rest/v1/rpc/validate_domain_access");
    let body: Value = serde_json::from_str(&request.body).unwrap();
    assert_eq!(body, json!({"domain_url": "https://hanu-consulting.com"}));
}

#[tokio::test]
async fn validate_domain_access_missing_function() {
    let server = TestServer::always(Reply::json(404, r#"{"code":"PGRST202"}"#));

    let err = backend(&server)
        .validate_domain_access("https://hanu-consulting.com")
        .await
        .unwrap_err();
    assert!(matches!(err, BackendError::Rejected { status: 404, .. }));
}
