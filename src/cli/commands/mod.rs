//! Command implementations for the RFEN sync CLI
//!
//! Each command lives in its own module; this module only dispatches and
//! re-exports the shared run counters.

pub mod shared;
pub mod sync;
pub mod venues;

pub use shared::SyncStats;

use crate::Result;
use crate::cli::args::Commands;

/// Dispatch to the selected subcommand
pub async fn run(command: Commands) -> Result<SyncStats> {
    match command {
        Commands::Sync(sync_args) => sync::run_sync(sync_args).await,
        Commands::Venues(venues_args) => venues::run_venues(venues_args).await,
    }
}
