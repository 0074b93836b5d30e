//! HTTP probe port
//!
//! Fetches a URL and hands back only the response status and headers.

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::ProbeError;

/// Status and headers of a probed response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseHeaders {
    /// HTTP status code
    pub status: u16,

    /// Header names (lower-cased) to values
    pub headers: BTreeMap<String, String>,
}

impl ResponseHeaders {
    /// Build from `(name, value)` pairs, lower-casing the names
    #[must_use]
    pub fn from_pairs<I, K, V>(status: u16, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let headers = pairs
            .into_iter()
            .map(|(k, v)| (k.as_ref().to_ascii_lowercase(), v.into()))
            .collect();
        Self { status, headers }
    }

    /// Case-insensitive header presence
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.headers.contains_key(&name.to_ascii_lowercase())
    }
}

/// Fetches response headers of a URL
#[async_trait]
pub trait HttpProbe: Send + Sync {
    /// `GET` the URL; the body is ignored
    async fn fetch_headers(&self, url: &str) -> Result<ResponseHeaders, ProbeError>;
}
