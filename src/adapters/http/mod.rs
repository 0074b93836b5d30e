//! Response-header probe
//!
//! Implements `HttpProbe` with a plain `GET`; redirects are followed and
//! the body is never read.

use async_trait::async_trait;
use log::warn;
use reqwest::Client;

use super::error_chain;
use crate::core::ports::{HttpProbe, ProbeError, ResponseHeaders};

/// `HttpProbe` backed by reqwest
#[derive(Debug, Clone)]
pub struct ReqwestProbe {
    client: Client,
}

impl ReqwestProbe {
    /// Probe with the given client
    #[must_use]
    pub const fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpProbe for ReqwestProbe {
    async fn fetch_headers(&self, url: &str) -> Result<ResponseHeaders, ProbeError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| {
                let chain = error_chain(&e);
                warn!("Fetching {url} failed: {chain}");
                ProbeError::Transport(chain)
            })?;

        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value.to_str().ok().map(|v| (name.as_str(), v.to_string()))
            });
        Ok(ResponseHeaders::from_pairs(response.status().as_u16(), headers))
    }
}
