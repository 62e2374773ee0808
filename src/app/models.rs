//! Data models for RFEN fixture and standings extraction
//!
//! Core record structures produced by the parsers, following the shapes the
//! site exposes for played and unplayed fixtures. Records are created fresh
//! per pipeline run and never mutated after construction; serialized field
//! names follow the export document schema.

use serde::{Deserialize, Serialize};

// =============================================================================
// Team Identity
// =============================================================================

/// Identity of the tracked team, used for home-side detection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamIdentity {
    /// Canonical display name, as the reference table spells it
    pub name: String,

    /// Short lowercase token that appears in every decorated spelling
    pub alias: String,
}

impl TeamIdentity {
    pub fn new(name: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: alias.into().to_lowercase(),
        }
    }

    /// True when `display_name` names this team.
    ///
    /// Case-folded containment: either the canonical name appears inside the
    /// display name, or the short alias token does. Tolerates the decorated
    /// and abbreviated spellings the site uses interchangeably.
    pub fn matches(&self, display_name: &str) -> bool {
        let display = display_name.to_lowercase();
        display.contains(&self.name.to_lowercase())
            || (!self.alias.is_empty() && display.contains(&self.alias))
    }
}

// =============================================================================
// Fixtures
// =============================================================================

/// One side of a fixture
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSide {
    /// Team display name as rendered on the page, empty when missing
    pub name: String,

    /// Crest image URL, empty when the site omits it
    pub logo_url: String,

    /// Final score. `None` for unplayed or unparsed fixtures; zero is a
    /// valid final score and is never used as a stand-in for absence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<i32>,

    /// Period scores in period order; missing or malformed cells read as 0
    pub quarter_scores: [i32; 4],
}

/// A scheduled or completed match between two sides
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fixture {
    /// Competition round, when the schedule label carries one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub round: Option<u32>,

    /// Human-readable kickoff text, may be empty
    pub display_date_time: String,

    /// Machine-readable kickoff from the structured time annotation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iso_date: Option<String>,

    /// Textual match state as published
    pub status: String,

    /// True when the tracked team appears as the home side
    pub is_home: bool,

    pub home: TeamSide,
    pub away: TeamSide,

    /// Pool information for the home side, when the venue table knows it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Venue>,
}

// =============================================================================
// Venues
// =============================================================================

/// Static pool reference data, keyed by canonical team name in the registry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    /// Pool name as shown to readers
    pub display_name: String,

    pub city: String,

    /// WGS84 decimal degrees
    pub latitude: f64,

    /// WGS84 decimal degrees
    pub longitude: f64,
}

impl Venue {
    pub fn new(
        display_name: impl Into<String>,
        city: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            city: city.into(),
            latitude,
            longitude,
        }
    }
}

// =============================================================================
// Standings
// =============================================================================

/// One competition-table row
///
/// `position` stays text because the site decorates it with ordinal markers
/// and qualification annotations. Statistic cells read leniently: missing or
/// non-numeric content becomes 0. The shootout columns come from the grid
/// variant of the table; `drawn` only from the plain variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Standing {
    pub position: String,
    pub team_name: String,

    /// Crest image URL, empty when missing
    pub logo_url: String,

    /// Team page link, when the name is wrapped in an anchor
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_url: Option<String>,

    pub points: i32,
    pub played: i32,
    pub won: i32,
    pub drawn: i32,
    pub lost: i32,
    pub won_shootout: i32,
    pub lost_shootout: i32,
    pub goals_for: i32,
    pub goals_against: i32,
    pub goal_difference: i32,
}
