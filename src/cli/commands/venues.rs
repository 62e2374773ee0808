//! Venues command implementation
//!
//! Reports the static venue table, the reference for adding newly promoted
//! teams to the deployment.

use colored::*;

use super::shared::{SyncStats, setup_logging};
use crate::Result;
use crate::app::services::venue_registry::VenueRegistry;
use crate::cli::args::{OutputFormat, VenuesArgs};

/// Venues command runner
pub async fn run_venues(args: VenuesArgs) -> Result<SyncStats> {
    setup_logging(&args.log_level)?;

    let registry = VenueRegistry::builtin();

    match args.format {
        OutputFormat::Json => {
            let mut map = serde_json::Map::new();
            for (canonical, venue) in registry.iter() {
                map.insert(canonical.clone(), serde_json::to_value(venue)?);
            }
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::Value::Object(map))?
            );
        }
        OutputFormat::Text => {
            println!(
                "{} ({} entries)",
                "Known venues".bright_green().bold(),
                registry.len()
            );
            for (canonical, venue) in registry.iter() {
                println!(
                    "  {} -> {} ({}) [{:.4}, {:.4}]",
                    canonical.bright_white().bold(),
                    venue.display_name,
                    venue.city,
                    venue.latitude,
                    venue.longitude
                );
            }
        }
    }

    Ok(SyncStats::default())
}
