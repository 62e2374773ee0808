//! Fixture parser for RFEN team pages
//!
//! Converts the fixture blocks of a team page into normalized records. Each
//! block parses independently: a malformed block is skipped with a warning
//! and the rest of the page continues, so one broken fixture never empties
//! a whole category.

use scraper::{Html, Selector};
use std::sync::{Arc, LazyLock};
use tracing::debug;

use crate::app::models::TeamIdentity;
use crate::app::services::markup;
use crate::app::services::venue_registry::VenueRegistry;
use crate::constants::selectors;

pub mod block;
pub mod stats;

#[cfg(test)]
pub mod tests;

pub use stats::{FixtureParseResult, ParseStats};

static MATCH_BLOCK: LazyLock<Selector> =
    LazyLock::new(|| markup::selector(selectors::MATCH_BLOCK));

/// Parser for the fixture blocks of a team page
#[derive(Debug)]
pub struct FixtureParser {
    venues: Arc<VenueRegistry>,
    team: TeamIdentity,
}

impl FixtureParser {
    /// Create a parser with the venue table and tracked-team identity
    pub fn new(venues: Arc<VenueRegistry>, team: TeamIdentity) -> Self {
        Self { venues, team }
    }

    /// Extract every fixture on a page, preserving document order.
    ///
    /// Downstream consumers display the sequence exactly as the source page
    /// renders it, so no reordering happens here.
    pub fn extract(&self, html: &str) -> FixtureParseResult {
        let document = Html::parse_document(html);
        let mut stats = ParseStats::new();
        let mut fixtures = Vec::new();

        for block_element in document.select(&MATCH_BLOCK) {
            stats.blocks_found += 1;
            match block::parse_match_block(block_element, &self.venues, &self.team) {
                Some(fixture) => {
                    fixtures.push(fixture);
                    stats.fixtures_parsed += 1;
                }
                None => stats.blocks_skipped += 1,
            }
        }

        debug!(
            "Parsed {} fixtures from {} blocks",
            stats.fixtures_parsed, stats.blocks_found
        );

        FixtureParseResult { fixtures, stats }
    }
}
