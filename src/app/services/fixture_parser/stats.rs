//! Parse statistics for fixture extraction

use crate::app::models::Fixture;

/// Counters describing one page extraction
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseStats {
    /// Fixture blocks located in the document
    pub blocks_found: usize,

    /// Blocks that produced a record
    pub fixtures_parsed: usize,

    /// Blocks dropped for missing structure
    pub blocks_skipped: usize,
}

impl ParseStats {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Fixtures of one page together with extraction counters
#[derive(Debug, Clone)]
pub struct FixtureParseResult {
    pub fixtures: Vec<Fixture>,
    pub stats: ParseStats,
}
