//! RFEN Sync Library
//!
//! A Rust library for extracting water polo fixture and standings data from
//! the RFEN results website and syncing it to Firebase Realtime Database.
//!
//! This library provides tools for:
//! - Parsing fixture blocks from RFEN team pages with per-block fault isolation
//! - Parsing competition standings in both markup variants the site has used
//! - Resolving pool locations from a static venue table via fuzzy name matching
//! - Sanitizing mapping keys for the restricted Firebase key alphabet
//! - Assembling a single normalized export document with provenance metadata

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod export_builder;
        pub mod fixture_parser;
        pub mod key_normalizer;
        pub mod markup;
        pub mod standings_parser;
        pub mod venue_registry;
    }
    pub mod adapters {
        pub mod firebase;
        pub mod http;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Fixture, Standing, TeamIdentity, TeamSide, Venue};
pub use config::Config;

/// Result type alias for RFEN sync operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for RFEN sync operations
///
/// Parsing never surfaces here: structural absence and malformed rows are
/// absorbed inside the parsers and reported through warnings and skip
/// counters. These variants cover the transport, configuration, and
/// persistence edges of the pipeline.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Page retrieval failed
    #[error("HTTP error for {url}: {message}")]
    Http {
        url: String,
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Remote store write failed
    #[error("Persistence error at key '{key}': {message}")]
    Persistence {
        key: String,
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create an HTTP error with context
    pub fn http(
        url: impl Into<String>,
        message: impl Into<String>,
        source: Option<reqwest::Error>,
    ) -> Self {
        Self::Http {
            url: url.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a persistence error with context
    pub fn persistence(
        key: impl Into<String>,
        message: impl Into<String>,
        source: Option<reqwest::Error>,
    ) -> Self {
        Self::Persistence {
            key: key.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}
