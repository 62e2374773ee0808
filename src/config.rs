//! Runtime configuration for the sync pipeline.
//!
//! Carries team and competition identity, endpoint roots, and persistence
//! targets. Values layer: CLI arguments override environment variables,
//! which override built-in defaults.

use crate::app::models::TeamIdentity;
use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_GROUP_ID, DEFAULT_OUTPUT_FILE, DEFAULT_TEAM_ALIAS, DEFAULT_TEAM_ID,
    DEFAULT_TEAM_NAME, PAST_FIXTURES_SEGMENT, STANDINGS_SEGMENT, UPCOMING_FIXTURES_SEGMENT,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Numeric team identifier in site URLs
    pub team_id: String,

    /// Canonical display name of the tracked team
    pub team_name: String,

    /// Short recognizable token of the tracked team's name
    pub team_alias: String,

    /// Competition group identifier for the standings view
    pub group_id: String,

    /// Root of the results site
    pub base_url: String,

    /// Realtime Database root URL; when unset the document is not uploaded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_url: Option<String>,

    /// Opaque credential presented on store writes
    #[serde(skip_serializing, default)]
    pub auth_token: Option<String>,

    /// Local file the export document is written to
    pub output_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            team_id: DEFAULT_TEAM_ID.to_string(),
            team_name: DEFAULT_TEAM_NAME.to_string(),
            team_alias: DEFAULT_TEAM_ALIAS.to_string(),
            group_id: DEFAULT_GROUP_ID.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            database_url: None,
            auth_token: None,
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }
}

impl Config {
    /// Validate configuration values for consistency
    pub fn validate(&self) -> Result<()> {
        if self.team_id.trim().is_empty() {
            return Err(Error::configuration("team id cannot be empty"));
        }

        if !self.team_id.chars().all(|c| c.is_ascii_digit()) {
            return Err(Error::configuration(format!(
                "team id '{}' must be numeric",
                self.team_id
            )));
        }

        if self.team_name.trim().is_empty() {
            return Err(Error::configuration("team name cannot be empty"));
        }

        if self.group_id.trim().is_empty() {
            return Err(Error::configuration("group id cannot be empty"));
        }

        if !self.base_url.starts_with("http") {
            return Err(Error::configuration(format!(
                "base URL '{}' must be an http(s) URL",
                self.base_url
            )));
        }

        if let Some(url) = &self.database_url {
            if !url.starts_with("http") {
                return Err(Error::configuration(format!(
                    "database URL '{}' must be an http(s) URL",
                    url
                )));
            }
        }

        Ok(())
    }

    /// Identity of the tracked team for home-side detection
    pub fn team_identity(&self) -> TeamIdentity {
        TeamIdentity::new(&self.team_name, &self.team_alias)
    }

    /// Page with the team's most recent results
    pub fn past_fixtures_url(&self) -> String {
        format!(
            "{}/equipo/{}/{}/",
            self.base_url.trim_end_matches('/'),
            self.team_id,
            PAST_FIXTURES_SEGMENT
        )
    }

    /// Page with the team's upcoming fixtures
    pub fn upcoming_fixtures_url(&self) -> String {
        format!(
            "{}/equipo/{}/{}/",
            self.base_url.trim_end_matches('/'),
            self.team_id,
            UPCOMING_FIXTURES_SEGMENT
        )
    }

    /// Standings page for the configured competition group
    pub fn standings_url(&self) -> String {
        format!(
            "{}/grupo/{}/{}/",
            self.base_url.trim_end_matches('/'),
            self.group_id,
            STANDINGS_SEGMENT
        )
    }
}
