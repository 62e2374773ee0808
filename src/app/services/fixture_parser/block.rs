//! Single fixture block parsing
//!
//! Extracts one normalized record from one markup block. Every sub-element
//! is independently optional and degrades to its field default; the only
//! hard failure is a block with fewer than two team-side containers.

use regex::Regex;
use scraper::{ElementRef, Selector};
use std::sync::LazyLock;
use tracing::warn;

use crate::app::models::{Fixture, TeamIdentity, TeamSide};
use crate::app::services::markup::{
    first_attr, first_text, parse_int_opt, parse_int_or_default, selector,
};
use crate::app::services::venue_registry::VenueRegistry;
use crate::constants::{ROUND_PATTERN, STATUS_PENDING, selectors};

static START_DATE: LazyLock<Selector> =
    LazyLock::new(|| selector(selectors::MATCH_START_DATE));
static ROUND_LABEL: LazyLock<Selector> =
    LazyLock::new(|| selector(selectors::MATCH_ROUND_LABEL));
static HOUR_LABEL: LazyLock<Selector> =
    LazyLock::new(|| selector(selectors::MATCH_HOUR_LABEL));
static STATUS: LazyLock<Selector> = LazyLock::new(|| selector(selectors::MATCH_STATUS));
static TEAM: LazyLock<Selector> = LazyLock::new(|| selector(selectors::MATCH_TEAM));
static TEAM_NAME: LazyLock<Selector> =
    LazyLock::new(|| selector(selectors::MATCH_TEAM_NAME));
static TEAM_LOGO: LazyLock<Selector> =
    LazyLock::new(|| selector(selectors::MATCH_TEAM_LOGO));
static RESULT_FINAL: LazyLock<Selector> =
    LazyLock::new(|| selector(selectors::MATCH_RESULT_FINAL));
static PERIODS: LazyLock<Vec<Selector>> = LazyLock::new(|| {
    selectors::MATCH_RESULT_PERIODS
        .iter()
        .map(|css| selector(css))
        .collect()
});
static ROUND_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(ROUND_PATTERN).expect("static round pattern"));

/// Parse one fixture block into a record.
///
/// Returns `None` when the block does not expose two team sides; every
/// other missing piece degrades to its field default instead of failing
/// the block.
pub fn parse_match_block(
    block: ElementRef,
    venues: &VenueRegistry,
    team: &TeamIdentity,
) -> Option<Fixture> {
    let iso_date = first_attr(block, &START_DATE, "content");
    let round = first_text(block, &ROUND_LABEL).and_then(|label| round_number(&label));
    let display_date_time = first_text(block, &HOUR_LABEL).unwrap_or_default();
    let status = first_text(block, &STATUS).unwrap_or_else(|| STATUS_PENDING.to_string());

    let sides: Vec<ElementRef> = block.select(&TEAM).collect();
    if sides.len() < 2 {
        warn!(
            "Skipping fixture block with {} team container(s)",
            sides.len()
        );
        return None;
    }

    let home = parse_team_side(sides[0]);
    let away = parse_team_side(sides[1]);

    let is_home = team.matches(&home.name);
    let location = venues.resolve(&home.name).cloned();

    Some(Fixture {
        round,
        display_date_time,
        iso_date,
        status,
        is_home,
        home,
        away,
        location,
    })
}

/// Round number from the schedule label ("Jornada 12" -> 12)
fn round_number(label: &str) -> Option<u32> {
    ROUND_RE.captures(label)?.get(1)?.as_str().parse().ok()
}

/// One team side: name, crest, final score, period scores.
///
/// The final score is kept only when the cell text is purely numeric;
/// anything else means "no result yet". Period cells default to 0 instead,
/// since an absent period before a match starts reads the same as 0-0.
fn parse_team_side(container: ElementRef) -> TeamSide {
    let name = first_text(container, &TEAM_NAME).unwrap_or_default();
    let logo_url = first_attr(container, &TEAM_LOGO, "src").unwrap_or_default();
    let score = first_text(container, &RESULT_FINAL).and_then(|text| parse_int_opt(&text));

    let mut quarter_scores = [0; 4];
    for (slot, period_selector) in quarter_scores.iter_mut().zip(PERIODS.iter()) {
        *slot = first_text(container, period_selector)
            .map(|text| parse_int_or_default(&text, 0))
            .unwrap_or(0);
    }

    TeamSide {
        name,
        logo_url,
        score,
        quarter_scores,
    }
}
