//! Export document assembly
//!
//! Pure composition, no parsing. The export document carries team identity,
//! a generation timestamp, both fixture sequences, the standings sequence,
//! and the static venue table; it passes through key normalization before
//! any write. A small sync-metadata document is assembled separately for
//! the sibling store key.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value, json};

use crate::app::models::{Fixture, Standing};
use crate::app::services::key_normalizer::normalize_keys;
use crate::app::services::venue_registry::VenueRegistry;
use crate::{Config, Result};

/// Assemble the normalized export document
pub fn build_export_document(
    config: &Config,
    generated_at: DateTime<Utc>,
    past_fixtures: &[Fixture],
    upcoming_fixtures: &[Fixture],
    standings: &[Standing],
    venues: &VenueRegistry,
) -> Result<Value> {
    let mut venue_map = Map::new();
    for (canonical, venue) in venues.iter() {
        venue_map.insert(canonical.clone(), serde_json::to_value(venue)?);
    }

    let document = json!({
        "team": config.team_name,
        "teamId": config.team_id,
        "groupId": config.group_id,
        "generatedAt": generated_at.to_rfc3339(),
        "pastFixtures": serde_json::to_value(past_fixtures)?,
        "upcomingFixtures": serde_json::to_value(upcoming_fixtures)?,
        "standings": serde_json::to_value(standings)?,
        "venues": Value::Object(venue_map),
    });

    Ok(normalize_keys(document))
}

/// Assemble the sync-metadata document written next to the export
pub fn build_sync_metadata(
    synced_at: DateTime<Utc>,
    past_count: usize,
    upcoming_count: usize,
    standings_count: usize,
) -> Value {
    json!({
        "lastSync": synced_at.to_rfc3339(),
        "pastCount": past_count,
        "upcomingCount": upcoming_count,
        "standingsCount": standings_count,
    })
}
