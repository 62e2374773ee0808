//! Sync command implementation
//!
//! The full pipeline: fetch the three pages one at a time, parse each
//! synchronously, assemble the normalized export document, write it to the
//! local file and, when a database URL is configured, to the remote store
//! together with the sync-metadata document.

use colored::*;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use super::shared::{SyncStats, setup_logging};
use crate::app::adapters::firebase::FirebaseClient;
use crate::app::adapters::http::PageFetcher;
use crate::app::services::export_builder::{build_export_document, build_sync_metadata};
use crate::app::services::fixture_parser::FixtureParser;
use crate::app::services::standings_parser::extract_standings;
use crate::app::services::venue_registry::VenueRegistry;
use crate::cli::args::SyncArgs;
use crate::constants::{EXPORT_KEY, SYNC_KEY};
use crate::{Error, Result};

/// Sync command runner
pub async fn run_sync(args: SyncArgs) -> Result<SyncStats> {
    let start_time = Instant::now();

    setup_logging(&args.get_log_level())?;

    info!("Starting RFEN sync");
    debug!("Sync arguments: {:?}", args);

    args.validate()?;
    let config = args.to_config();
    config.validate()?;

    let venues = Arc::new(VenueRegistry::builtin());
    let parser = FixtureParser::new(Arc::clone(&venues), config.team_identity());
    let fetcher = PageFetcher::new()?;

    // Pages are fetched and parsed one at a time; each category parses
    // independently of its siblings.
    let past_page = fetcher.fetch(&config.past_fixtures_url()).await?;
    let past = parser.extract(&past_page);
    info!(
        "Past fixtures: {} parsed, {} blocks skipped",
        past.stats.fixtures_parsed, past.stats.blocks_skipped
    );

    let upcoming_page = fetcher.fetch(&config.upcoming_fixtures_url()).await?;
    let upcoming = parser.extract(&upcoming_page);
    info!(
        "Upcoming fixtures: {} parsed, {} blocks skipped",
        upcoming.stats.fixtures_parsed, upcoming.stats.blocks_skipped
    );

    let standings_page = fetcher.fetch(&config.standings_url()).await?;
    let standings = extract_standings(&standings_page);
    info!("Standings rows: {}", standings.len());

    let generated_at = chrono::Utc::now();
    let document = build_export_document(
        &config,
        generated_at,
        &past.fixtures,
        &upcoming.fixtures,
        &standings,
        &venues,
    )?;

    // Local file write, the original export path of the tool
    let pretty = serde_json::to_string_pretty(&document)?;
    std::fs::write(&config.output_path, pretty).map_err(|e| {
        Error::io(
            format!("failed to write {}", config.output_path.display()),
            e,
        )
    })?;
    info!("Export document written to {}", config.output_path.display());

    let mut uploaded = false;
    if let Some(database_url) = &config.database_url {
        let store = FirebaseClient::new(database_url, config.auth_token.clone())?;
        store.put(EXPORT_KEY, &document).await?;

        let metadata = build_sync_metadata(
            chrono::Utc::now(),
            past.fixtures.len(),
            upcoming.fixtures.len(),
            standings.len(),
        );
        store.put(SYNC_KEY, &metadata).await?;
        uploaded = true;
    } else {
        debug!("No database URL configured, skipping upload");
    }

    let stats = SyncStats {
        past_fixtures: past.fixtures.len(),
        upcoming_fixtures: upcoming.fixtures.len(),
        standings_rows: standings.len(),
        blocks_skipped: past.stats.blocks_skipped + upcoming.stats.blocks_skipped,
        uploaded,
        elapsed: start_time.elapsed(),
    };

    if !args.quiet {
        print_summary(&stats);
    }

    Ok(stats)
}

/// Human summary printed after a run
fn print_summary(stats: &SyncStats) {
    println!("\n{}", "Sync Summary".bright_green().bold());
    println!("{}", "=".repeat(40));
    println!(
        "Past fixtures:     {}",
        stats.past_fixtures.to_string().bright_white().bold()
    );
    println!(
        "Upcoming fixtures: {}",
        stats.upcoming_fixtures.to_string().bright_white().bold()
    );
    println!(
        "Standings rows:    {}",
        stats.standings_rows.to_string().bright_white().bold()
    );
    if stats.blocks_skipped > 0 {
        println!(
            "Blocks skipped:    {}",
            stats.blocks_skipped.to_string().bright_red().bold()
        );
    }
    println!(
        "Uploaded:          {}",
        if stats.uploaded {
            "yes".bright_green().bold()
        } else {
            "no".yellow().bold()
        }
    );
    println!("Elapsed:           {:.2}s", stats.elapsed.as_secs_f64());
}
