//! Shared helpers for CLI commands

use std::time::Duration;
use tracing::debug;

use crate::Result;

/// Counters reported after a command run
#[derive(Debug, Clone, Default)]
pub struct SyncStats {
    /// Fixtures parsed from the recent-results page
    pub past_fixtures: usize,

    /// Fixtures parsed from the upcoming page
    pub upcoming_fixtures: usize,

    /// Standings rows parsed from the group page
    pub standings_rows: usize,

    /// Fixture blocks dropped for missing structure, both pages combined
    pub blocks_skipped: usize,

    /// Whether the document reached the remote store
    pub uploaded: bool,

    /// Wall-clock duration of the run
    pub elapsed: Duration,
}

/// Set up structured logging for a command
pub fn setup_logging(log_level: &str) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("rfen_sync={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}
