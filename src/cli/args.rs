//! Command-line argument definitions for RFEN sync
//!
//! This module defines the complete CLI interface using the clap derive
//! API. Argument values layer over environment variables, which layer over
//! the built-in defaults.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::{Config, Error, Result};

/// Accepted logging verbosity names
const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// CLI arguments for the RFEN fixtures and standings sync tool
#[derive(Debug, Clone, Parser)]
#[command(
    name = "rfen-sync",
    version,
    about = "Extract RFEN water polo fixtures and standings and sync them to Firebase",
    long_about = "Downloads a team's recent and upcoming fixtures plus the group standings \
                  from the RFEN results site, normalizes them into a single export document, \
                  and writes it to a local JSON file and/or a Firebase Realtime Database."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Run the extraction pipeline and write the export document
    Sync(SyncArgs),
    /// Report the static venue table
    Venues(VenuesArgs),
}

/// Arguments for the sync command
#[derive(Debug, Clone, Parser)]
pub struct SyncArgs {
    /// Numeric team identifier used in site URLs
    #[arg(long = "team-id", value_name = "ID")]
    pub team_id: Option<String>,

    /// Canonical display name of the tracked team
    #[arg(long = "team-name", value_name = "NAME")]
    pub team_name: Option<String>,

    /// Short token recognizing the team inside decorated names
    #[arg(long = "team-alias", value_name = "TOKEN")]
    pub team_alias: Option<String>,

    /// Competition group identifier for the standings page
    #[arg(long = "group-id", value_name = "ID")]
    pub group_id: Option<String>,

    /// Root of the results site
    #[arg(long = "base-url", value_name = "URL")]
    pub base_url: Option<String>,

    /// Realtime Database root URL (falls back to FIREBASE_DATABASE_URL)
    ///
    /// The opaque write credential is read from FIREBASE_AUTH_TOKEN; it is
    /// never accepted on the command line.
    #[arg(long = "database-url", value_name = "URL")]
    pub database_url: Option<String>,

    /// Local file for the export document
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Logging verbosity (trace, debug, info, warn, error)
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    pub log_level: String,

    /// Reduce output to warnings and the final summary
    #[arg(short = 'q', long = "quiet", default_value_t = false)]
    pub quiet: bool,
}

impl SyncArgs {
    /// Validate argument values before the pipeline starts
    pub fn validate(&self) -> Result<()> {
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(Error::configuration(format!(
                "unknown log level '{}', expected one of {}",
                self.log_level,
                LOG_LEVELS.join(", ")
            )));
        }
        Ok(())
    }

    /// Effective logging verbosity
    pub fn get_log_level(&self) -> String {
        if self.quiet {
            "warn".to_string()
        } else {
            self.log_level.clone()
        }
    }

    /// Materialize the layered configuration: args over environment over
    /// built-in defaults
    pub fn to_config(&self) -> Config {
        let defaults = Config::default();
        Config {
            team_id: self.team_id.clone().unwrap_or(defaults.team_id),
            team_name: self.team_name.clone().unwrap_or(defaults.team_name),
            team_alias: self.team_alias.clone().unwrap_or(defaults.team_alias),
            group_id: self.group_id.clone().unwrap_or(defaults.group_id),
            base_url: self.base_url.clone().unwrap_or(defaults.base_url),
            database_url: self
                .database_url
                .clone()
                .or_else(|| std::env::var("FIREBASE_DATABASE_URL").ok()),
            auth_token: std::env::var("FIREBASE_AUTH_TOKEN").ok(),
            output_path: self.output.clone().unwrap_or(defaults.output_path),
        }
    }
}

/// Output format for the venues report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Arguments for the venues command
#[derive(Debug, Clone, Parser)]
pub struct VenuesArgs {
    /// Report format
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Logging verbosity (trace, debug, info, warn, error)
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "warn")]
    pub log_level: String,
}
