//! Stationboard HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use super::error::UpstreamError;
use super::types::{Departure, StationBoard};
use super::DepartureFetcher;

/// Default base URL of the transport API.
const DEFAULT_BASE_URL: &str = "https://transport.opendata.ch/v1";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for the stationboard client.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    /// Base URL of the API, without trailing slash
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl UpstreamConfig {
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Departure fetcher backed by the live stationboard endpoint.
#[derive(Debug, Clone)]
pub struct HttpDepartureFetcher {
    http: reqwest::Client,
    base_url: String,
}

impl HttpDepartureFetcher {
    /// Create a new client with the given configuration.
    pub fn new(config: UpstreamConfig) -> Result<Self, UpstreamError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl DepartureFetcher for HttpDepartureFetcher {
    async fn fetch(
        &self,
        station_id: &str,
        limit: usize,
    ) -> Result<Vec<Departure>, UpstreamError> {
        let url = format!("{}/stationboard", self.base_url);
        debug!("Fetching stationboard for {} (limit {})", station_id, limit);

        let response = self
            .http
            .get(&url)
            .query(&[("id", station_id.to_string()), ("limit", limit.to_string())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                message: body.chars().take(200).collect(),
            });
        }

        let body = response.text().await?;
        let board: StationBoard =
            serde_json::from_str(&body).map_err(|e| UpstreamError::Json {
                message: e.to_string(),
            })?;

        Ok(board
            .stationboard
            .into_iter()
            .take(limit)
            .map(Departure::from)
            .collect())
    }
}
