//! Application constants for RFEN sync
//!
//! This module contains the fixed identifiers, URL segments, markup class
//! names, and storage key rules used throughout the extraction pipeline.

// =============================================================================
// Team and Competition Defaults
// =============================================================================

/// Root of the RFEN water polo results site
pub const DEFAULT_BASE_URL: &str = "https://rfen.es/especialidades/waterpolo";

/// Numeric team identifier used in team page URLs
pub const DEFAULT_TEAM_ID: &str = "14488";

/// Canonical display name of the tracked team
pub const DEFAULT_TEAM_NAME: &str = "C.n. Caballa - Ciudad De Ceuta";

/// Short token that reliably appears in every spelling of the team name
pub const DEFAULT_TEAM_ALIAS: &str = "caballa";

/// Competition group identifier used in the standings URL
pub const DEFAULT_GROUP_ID: &str = "181";

/// URL path segment for a team's recent results page
pub const PAST_FIXTURES_SEGMENT: &str = "ultimos-partidos";

/// URL path segment for a team's upcoming fixtures page
pub const UPCOMING_FIXTURES_SEGMENT: &str = "proximos-partidos";

/// URL path segment for a group's standings page
pub const STANDINGS_SEGMENT: &str = "clasificacion";

/// User-Agent presented to the results site
pub const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

// =============================================================================
// Remote Store
// =============================================================================

/// Top-level key the export document is written to
pub const EXPORT_KEY: &str = "rfen_data";

/// Sibling key for the sync-metadata document
pub const SYNC_KEY: &str = "rfen_sync";

/// Characters the store rejects inside mapping keys
pub const FORBIDDEN_KEY_CHARS: &[char] = &['.', '#', '$', '/', '[', ']'];

/// Default local file the export document is written to
pub const DEFAULT_OUTPUT_FILE: &str = "rfen_caballa_data.json";

// =============================================================================
// Parsing Rules
// =============================================================================

/// Status shown for fixtures the site has not annotated yet
pub const STATUS_PENDING: &str = "Pendiente";

/// Pattern extracting the round number from the schedule label
pub const ROUND_PATTERN: &str = r"Jornada\s+(\d+)";

/// Minimum parseable data cells for a standings row to be emitted
pub const MIN_STANDING_CELLS: usize = 9;

/// CSS selectors for the markup components the site publishes
///
/// The fixture classes are stable across site revisions; the standings view
/// has alternated between a componentized grid and a plain table, so both
/// selector families are kept.
pub mod selectors {
    /// One fixture block
    pub const MATCH_BLOCK: &str = "div.RFEN_MatchRowContainer";

    /// Structured kickoff annotation carrying the machine-readable date
    pub const MATCH_START_DATE: &str = r#"time[itemprop="startDate"]"#;

    /// Schedule label carrying the round text
    pub const MATCH_ROUND_LABEL: &str = "div.RFEN_MatchRowTimeContainer_date span";

    /// Visible kickoff date/time label
    pub const MATCH_HOUR_LABEL: &str = "div.RFEN_MatchRowTimeContainer_hour span";

    /// Textual match state
    pub const MATCH_STATUS: &str = "div.RFEN_MatchRowStatusContainer";

    /// Team-side containers, home side first in document order
    pub const MATCH_TEAM: &str = "div.RFEN_MatchRowTeamContainer";

    /// Team display name within a side container
    pub const MATCH_TEAM_NAME: &str = "div.RFEN_MatchRowName";

    /// Team crest within a side container
    pub const MATCH_TEAM_LOGO: &str = "img.RFEN_MatchRowImage";

    /// Final score within a side container, present only for played fixtures
    pub const MATCH_RESULT_FINAL: &str = "div.RFEN_MatchRowResultFinal";

    /// Period score cells, in period order
    pub const MATCH_RESULT_PERIODS: [&str; 4] = [
        "div.RFEN_MatchRowResultP1",
        "div.RFEN_MatchRowResultP2",
        "div.RFEN_MatchRowResultP3",
        "div.RFEN_MatchRowResultP4",
    ];

    /// Componentized standings grid: table body container
    pub const GRID_BODY: &str = "div.RFEN_ClassificationTableBody";

    /// Componentized standings grid: one row
    pub const GRID_ROW: &str = "div.RFEN_ClassificationTableRow";

    /// Componentized standings grid: position cell
    pub const GRID_POSITION: &str = "div.RFEN_ClassificationTablePosition";

    /// Componentized standings grid: team name element
    pub const GRID_NAME: &str = "div.RFEN_ClassificationTableName";

    /// Componentized standings grid: anchor wrapping the team name
    pub const GRID_NAME_LINK: &str = "div.RFEN_ClassificationTableName a";

    /// Componentized standings grid: team crest
    pub const GRID_LOGO: &str = "img.RFEN_ClassificationTableImage";

    /// Componentized standings grid: one statistics cell
    pub const GRID_META_CELL: &str = "div.RFEN_ClassificationTableMeta";

    /// Plain standings table
    pub const TABLE: &str = "table";
    pub const TABLE_ROW: &str = "tr";
    pub const TABLE_CELL: &str = "td";
    pub const LINK: &str = "a";
    pub const IMAGE: &str = "img";
}
