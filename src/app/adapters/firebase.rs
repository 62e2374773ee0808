//! Realtime Database adapter
//!
//! Writes JSON documents at well-known top-level keys through the database
//! REST surface, presenting an opaque credential when one is configured.
//! The export write and the sync-metadata write are two independent
//! single-shot calls with no transactional guarantee between them.

use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info};

use crate::{Error, Result};

/// Request timeout for a single store write
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for one Realtime Database instance
#[derive(Debug, Clone)]
pub struct FirebaseClient {
    database_url: String,
    auth_token: Option<String>,
    client: reqwest::Client,
}

impl FirebaseClient {
    /// Create a client for the database at `database_url`.
    ///
    /// `auth_token` is passed through verbatim as the `auth` query
    /// parameter; this adapter knows nothing about how it was minted.
    pub fn new(database_url: impl Into<String>, auth_token: Option<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::persistence("<client>", "failed to build HTTP client", Some(e)))?;

        Ok(Self {
            database_url: database_url.into().trim_end_matches('/').to_string(),
            auth_token,
            client,
        })
    }

    /// Replace the document stored at `key` with `value`
    pub async fn put(&self, key: &str, value: &Value) -> Result<()> {
        let url = self.node_url(key);
        info!("Writing document at key '{}'", key);

        let response = self
            .client
            .put(&url)
            .json(value)
            .send()
            .await
            .map_err(|e| Error::persistence(key, "write request failed", Some(e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::persistence(
                key,
                format!("unexpected status {status}"),
                None,
            ));
        }

        debug!("Write at '{}' acknowledged", key);
        Ok(())
    }

    fn node_url(&self, key: &str) -> String {
        match &self.auth_token {
            Some(token) => format!("{}/{}.json?auth={}", self.database_url, key, token),
            None => format!("{}/{}.json", self.database_url, key),
        }
    }
}
