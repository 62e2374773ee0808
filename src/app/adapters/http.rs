//! Page retrieval adapter
//!
//! Single-shot fetch with a fixed browser User-Agent, the only header the
//! results site cares about. Retries, if wanted, belong to the
//! orchestration layer, not here.

use std::time::Duration;
use tracing::{debug, info};

use crate::constants::USER_AGENT;
use crate::{Error, Result};

/// Request timeout for a single page fetch
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the results site
#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: reqwest::Client,
}

impl PageFetcher {
    /// Create a fetcher with the site User-Agent and a request timeout
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::http("<client>", "failed to build HTTP client", Some(e)))?;
        Ok(Self { client })
    }

    /// Fetch one page and return its body text
    pub async fn fetch(&self, url: &str) -> Result<String> {
        info!("Fetching {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::http(url, "request failed", Some(e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::http(url, format!("unexpected status {status}"), None));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::http(url, "failed to read response body", Some(e)))?;

        debug!("Fetched {} bytes from {}", body.len(), url);
        Ok(body)
    }
}
