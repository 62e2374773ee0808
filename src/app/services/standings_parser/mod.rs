//! Standings parser for RFEN group pages
//!
//! The site has alternated between two renderings of the same logical
//! table: a componentized grid of classification elements and a plain HTML
//! table. The variant is chosen once per document by a cheap structural
//! probe, then the matching strategy runs. Rows parse independently; a row
//! below the minimum cell threshold is skipped, never padded with defaults.

use scraper::{Html, Selector};
use std::sync::LazyLock;
use tracing::warn;

use crate::app::models::Standing;
use crate::app::services::markup;
use crate::constants::selectors;

pub mod grid;
pub mod table;

#[cfg(test)]
pub mod tests;

static GRID_BODY: LazyLock<Selector> =
    LazyLock::new(|| markup::selector(selectors::GRID_BODY));
static TABLE: LazyLock<Selector> = LazyLock::new(|| markup::selector(selectors::TABLE));

/// The two renderings the site has used for the standings view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableVariant {
    /// Componentized grid of classification elements
    ComponentGrid,
    /// Plain HTML table with a header row
    PlainTable,
}

/// Probe the document for a standings structure.
///
/// The grid body container is the distinguishing anchor; when it is absent
/// the first plain table wins. Only one variant is ever attempted per
/// document.
pub fn detect_variant(document: &Html) -> Option<TableVariant> {
    if document.select(&GRID_BODY).next().is_some() {
        Some(TableVariant::ComponentGrid)
    } else if document.select(&TABLE).next().is_some() {
        Some(TableVariant::PlainTable)
    } else {
        None
    }
}

/// Extract the standings of a group page, in table order.
///
/// A document without a recognizable standings structure yields an empty
/// sequence with a warning; sibling categories are unaffected.
pub fn extract_standings(html: &str) -> Vec<Standing> {
    let document = Html::parse_document(html);
    match detect_variant(&document) {
        Some(TableVariant::ComponentGrid) => grid::extract(&document),
        Some(TableVariant::PlainTable) => table::extract(&document),
        None => {
            warn!("No standings table found in document");
            Vec::new()
        }
    }
}
