//! Hosted backend adapter
//!
//! Implements `Backend` against a Supabase-style project: PostgREST under
//! `/rest/v1`, GoTrue under `/auth/v1`. Every request carries the project
//! key as `apikey` and a bearer token (the user's, if one is configured).

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde_json::{Value, json};

use super::{error_chain, truncate_body};
use crate::core::ports::{Backend, BackendError, Session, User};

/// Name of the domain validation procedure
pub const DOMAIN_ACCESS_RPC: &str = "validate_domain_access";

/// Backend reached over HTTP
#[derive(Debug, Clone)]
pub struct SupabaseBackend {
    client: Client,
    base_url: String,
    anon_key: String,
    access_token: Option<String>,
}

impl SupabaseBackend {
    /// Connect to the project at `base_url` with its public key
    #[must_use]
    pub fn new(client: Client, base_url: &str, anon_key: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            anon_key: anon_key.trim().to_string(),
            access_token: None,
        }
    }

    /// Use a signed-in user's access token for requests
    #[must_use]
    pub fn with_access_token(mut self, token: Option<String>) -> Self {
        self.access_token = token.filter(|t| !t.trim().is_empty());
        self
    }

    fn endpoint(&self, path: &str) -> Result<String, BackendError> {
        if self.base_url.is_empty() {
            return Err(BackendError::NotConfigured("backend.url is empty".to_string()));
        }
        if self.anon_key.is_empty() {
            return Err(BackendError::NotConfigured("backend.anon_key is empty".to_string()));
        }
        Ok(format!("{}{path}", self.base_url))
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        let bearer = self.access_token.as_deref().unwrap_or(&self.anon_key);
        request
            .header("apikey", &self.anon_key)
            .header(AUTHORIZATION, format!("Bearer {bearer}"))
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, BackendError> {
        self.authorized(request).send().await.map_err(|e| {
            let chain = error_chain(&e);
            warn!("Backend request failed: {chain}");
            BackendError::Unreachable(chain)
        })
    }
}

/// Classify a non-success response
async fn status_error(response: Response) -> BackendError {
    let status = response.status();
    debug!("Backend answered {status} for {}", response.url().path());
    let message = response.text().await.map(|b| truncate_body(&b)).unwrap_or_default();
    if status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error() {
        BackendError::Transient {
            status: status.as_u16(),
            message,
        }
    } else {
        BackendError::Rejected {
            status: status.as_u16(),
            message,
        }
    }
}

async fn decode_json(response: Response) -> Result<Value, BackendError> {
    response.json::<Value>().await.map_err(|e| BackendError::Decode(error_chain(&e)))
}

#[async_trait]
impl Backend for SupabaseBackend {
    async fn read_one(&self, table: &str) -> Result<(), BackendError> {
        let url = self.endpoint(&format!("/rest/v1/{table}?select=id&limit=1"))?;
        let response = self.send(self.client.get(url)).await?;
        if !response.status().is_success() {
            return Err(status_error(response).await);
        }

        let rows = decode_json(response).await?;
        if rows.is_array() {
            Ok(())
        } else {
            Err(BackendError::Decode(format!("expected a row array, got {rows}")))
        }
    }

    async fn current_session(&self) -> Result<Option<Session>, BackendError> {
        Ok(self.access_token.clone().map(|access_token| Session { access_token }))
    }

    async fn current_user(&self) -> Result<Option<User>, BackendError> {
        let url = self.endpoint("/auth/v1/user")?;
        let response = self.send(self.client.get(url)).await?;

        match response.status() {
            status if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN => {
                Ok(None)
            },
            status if status.is_success() => {
                let body = decode_json(response).await?;
                serde_json::from_value(body)
                    .map(Some)
                    .map_err(|e| BackendError::Decode(e.to_string()))
            },
            _ => Err(status_error(response).await),
        }
    }

    async fn validate_domain_access(&self, domain_url: &str) -> Result<Value, BackendError> {
        let url = self.endpoint(&format!("/rest/v1/rpc/{DOMAIN_ACCESS_RPC}"))?;
        let request = self.client.post(url).json(&json!({ "domain_url": domain_url }));
        let response = self.send(request).await?;
        if !response.status().is_success() {
            return Err(status_error(response).await);
        }
        decode_json(response).await
    }
}
