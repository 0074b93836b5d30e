//! DNS-over-HTTPS resolver
//!
//! Implements `DnsResolver` with the JSON API offered by public resolvers
//! (`GET <endpoint>?name=<host>&type=A`, `accept: application/dns-json`).

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;
use reqwest::header::ACCEPT;
use serde_json::Value;
use url::Url;

use super::{error_chain, truncate_body};
use crate::core::ports::{DnsAnswer, DnsResolver, ProbeError};

/// Public resolver used unless configured otherwise
pub const DEFAULT_RESOLVER_URL: &str = "https://dns.google/resolve";

/// JSON DNS-over-HTTPS client
#[derive(Debug, Clone)]
pub struct DohResolver {
    client: Client,
    endpoint: String,
}

impl DohResolver {
    /// Resolve through `endpoint`
    #[must_use]
    pub fn new(client: Client, endpoint: &str) -> Self {
        Self {
            client,
            endpoint: endpoint.trim().to_string(),
        }
    }

    /// Full query URL for an A lookup of `name`
    pub fn query_url(&self, name: &str) -> Result<Url, ProbeError> {
        let mut url = Url::parse(&self.endpoint).map_err(|e| {
            ProbeError::InvalidInput(format!("resolver url {:?}: {e}", self.endpoint))
        })?;
        url.query_pairs_mut().append_pair("name", name).append_pair("type", "A");
        Ok(url)
    }
}

#[async_trait]
impl DnsResolver for DohResolver {
    async fn resolve_a(&self, name: &str) -> Result<DnsAnswer, ProbeError> {
        if name.trim().is_empty() {
            return Err(ProbeError::InvalidInput("empty hostname".to_string()));
        }

        let url = self.query_url(name)?;
        debug!("Resolving {name} via {}", url.host_str().unwrap_or_default());
        let response = self
            .client
            .get(url.as_str())
            .header(ACCEPT, "application/dns-json")
            .send()
            .await
            .map_err(|e| {
                let chain = error_chain(&e);
                warn!("DNS query for {name} failed: {chain}");
                ProbeError::Transport(chain)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProbeError::Status {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        let raw = response
            .json::<Value>()
            .await
            .map_err(|e| ProbeError::Decode(error_chain(&e)))?;
        DnsAnswer::from_json(raw)
    }
}
