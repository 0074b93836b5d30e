//! DNS resolver port
//!
//! Modeled on the JSON DNS-over-HTTPS API: a numeric `Status` (0 is
//! NOERROR) and an `Answer` array of typed records.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ProbeError;

/// Record type number of an IPv4 address record
pub const RECORD_TYPE_A: u16 = 1;

/// One answer record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsRecord {
    /// Owner name
    #[serde(default)]
    pub name: String,

    /// Record type number (1 = A, 5 = CNAME, ...)
    #[serde(rename = "type")]
    pub record_type: u16,

    /// Record data (address for A records)
    #[serde(default)]
    pub data: String,
}

/// A resolver response
#[derive(Debug, Clone, PartialEq)]
pub struct DnsAnswer {
    /// Response code (0 = success)
    pub status: u32,

    /// Answer section
    pub answers: Vec<DnsRecord>,

    /// The raw response as returned by the resolver
    pub raw: Value,
}

impl DnsAnswer {
    /// Decode a JSON DNS-over-HTTPS response body
    pub fn from_json(raw: Value) -> Result<Self, ProbeError> {
        let status = raw
            .get("Status")
            .and_then(Value::as_u64)
            .ok_or_else(|| ProbeError::Decode("missing numeric Status field".to_string()))?;
        let status = u32::try_from(status)
            .map_err(|_| ProbeError::Decode(format!("Status out of range: {status}")))?;

        let answers = match raw.get("Answer") {
            Some(Value::Null) | None => Vec::new(),
            Some(answer) => serde_json::from_value(answer.clone())
                .map_err(|e| ProbeError::Decode(format!("invalid Answer section: {e}")))?,
        };

        Ok(Self {
            status,
            answers,
            raw,
        })
    }

    /// Whether the resolver reported success
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status == 0
    }

    /// Addresses of the A records in the answer section
    #[must_use]
    pub fn a_records(&self) -> Vec<&str> {
        self.answers
            .iter()
            .filter(|r| r.record_type == RECORD_TYPE_A)
            .map(|r| r.data.as_str())
            .collect()
    }
}

/// Resolver for address records
#[async_trait]
pub trait DnsResolver: Send + Sync {
    /// Look up the A records of `name`
    async fn resolve_a(&self, name: &str) -> Result<DnsAnswer, ProbeError>;
}
