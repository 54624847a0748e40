//! Client for the upstream paddy telemetry API.
//!
//! Only transport lives here: issue the GET, insist on a 2xx status and a
//! top-level JSON array, and hand the untyped records to the normalization
//! core. Bounding the wait is done with the client-wide timeout.

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use thiserror::Error;

use crate::normalize::{format_upstream, CivilZone};
use crate::TimeRange;

// ---

const DEVICES_PATH: &str = "/app/paddy/get_devices";
const DEVICE_DATA_PATH: &str = "/app/paddy/get_device_data";

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("upstream request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("upstream HTTP {0}")]
    Status(u16),

    #[error("upstream decode failed: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid payload (expected array)")]
    NotArray,
}

/// Thin wrapper around a shared [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: Client,
    base_url: String,
}

impl UpstreamClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, UpstreamError> {
        // ---
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(UpstreamError::Request)?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// Fetch the device listing.
    pub async fn fetch_devices(&self) -> Result<Vec<Value>, UpstreamError> {
        self.get_array(DEVICES_PATH, &[]).await
    }

    /// Fetch the readings of one device inside `range`.
    pub async fn fetch_device_data(
        &self,
        padid: &str,
        range: TimeRange,
        zone: CivilZone,
    ) -> Result<Vec<Value>, UpstreamError> {
        // ---
        let query = device_data_query(padid, range, zone);
        self.get_array(DEVICE_DATA_PATH, &query).await
    }

    async fn get_array(&self, path: &str, query: &[(&str, String)]) -> Result<Vec<Value>, UpstreamError> {
        // ---
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("Fetching {} with {} query parameters", url, query.len());

        let mut request = self.http.get(&url);
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request.send().await.map_err(UpstreamError::Request)?;
        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status.as_u16()));
        }

        let body = response.bytes().await.map_err(UpstreamError::Request)?;
        let records = into_records(serde_json::from_slice(&body)?)?;

        tracing::debug!("Upstream {} returned {} records", path, records.len());
        Ok(records)
    }
}

/// Query for the data endpoint, keys in sorted order.
fn device_data_query(padid: &str, range: TimeRange, zone: CivilZone) -> [(&'static str, String); 3] {
    [
        ("fromd", format_upstream(range.from(), zone)),
        ("padid", padid.to_string()),
        ("tod", format_upstream(range.to(), zone)),
    ]
}

fn into_records(payload: Value) -> Result<Vec<Value>, UpstreamError> {
    match payload {
        Value::Array(records) => Ok(records),
        _ => Err(UpstreamError::NotArray),
    }
}
