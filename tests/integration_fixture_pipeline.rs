//! Integration tests for fixture extraction over whole team pages
//!
//! Exercises the public parsing surface end-to-end with markup shaped like
//! the live team pages, including the degraded shapes the site serves for
//! unplayed fixtures.

use rfen_sync::TeamIdentity;
use rfen_sync::app::services::fixture_parser::FixtureParser;
use rfen_sync::app::services::venue_registry::VenueRegistry;
use std::sync::Arc;

/// A recent-results page: one finished match and one block the site
/// truncated down to a single team container
const PAST_PAGE: &str = r#"
<html><body><main>
  <div class="RFEN_MatchRowContainer">
    <time itemprop="startDate" content="2025-01-18T12:30:00+01:00"></time>
    <div class="RFEN_MatchRowTimeContainer_date"><span>Jornada 14</span></div>
    <div class="RFEN_MatchRowTimeContainer_hour"><span>18/01/2025 - 12:30</span></div>
    <div class="RFEN_MatchRowStatusContainer">Finalizado</div>
    <div class="RFEN_MatchRowTeamContainer">
      <img class="RFEN_MatchRowImage" src="https://rfen.es/img/caballa.png">
      <div class="RFEN_MatchRowName">C.n. Caballa - Ciudad De Ceuta</div>
      <div class="RFEN_MatchRowResultFinal">11</div>
      <div class="RFEN_MatchRowResultP1">3</div>
      <div class="RFEN_MatchRowResultP2">2</div>
      <div class="RFEN_MatchRowResultP3">4</div>
      <div class="RFEN_MatchRowResultP4">2</div>
    </div>
    <div class="RFEN_MatchRowTeamContainer">
      <img class="RFEN_MatchRowImage" src="https://rfen.es/img/sabadell.png">
      <div class="RFEN_MatchRowName">C.n. Sabadell</div>
      <div class="RFEN_MatchRowResultFinal">9</div>
      <div class="RFEN_MatchRowResultP1">2</div>
      <div class="RFEN_MatchRowResultP2">3</div>
      <div class="RFEN_MatchRowResultP3">2</div>
      <div class="RFEN_MatchRowResultP4">2</div>
    </div>
  </div>
  <div class="RFEN_MatchRowContainer">
    <div class="RFEN_MatchRowTimeContainer_date"><span>Jornada 13</span></div>
    <div class="RFEN_MatchRowTeamContainer">
      <div class="RFEN_MatchRowName">C.n. Terrassa</div>
    </div>
  </div>
</main></body></html>
"#;

/// An upcoming page: away fixture with no status, scores, or period cells
const UPCOMING_PAGE: &str = r#"
<html><body><main>
  <div class="RFEN_MatchRowContainer">
    <time itemprop="startDate" content="2025-02-01T13:00:00+01:00"></time>
    <div class="RFEN_MatchRowTimeContainer_date"><span>Jornada 15</span></div>
    <div class="RFEN_MatchRowTimeContainer_hour"><span>01/02/2025 - 13:00</span></div>
    <div class="RFEN_MatchRowTeamContainer">
      <div class="RFEN_MatchRowName">C.n. Terrassa</div>
    </div>
    <div class="RFEN_MatchRowTeamContainer">
      <div class="RFEN_MatchRowName">C.n. Caballa - Ciudad De Ceuta</div>
    </div>
  </div>
</main></body></html>
"#;

fn create_parser() -> FixtureParser {
    FixtureParser::new(
        Arc::new(VenueRegistry::builtin()),
        TeamIdentity::new("C.n. Caballa - Ciudad De Ceuta", "caballa"),
    )
}

#[test]
fn test_past_page_parses_played_fixture_and_skips_truncated_block() {
    let result = create_parser().extract(PAST_PAGE);

    assert_eq!(result.stats.blocks_found, 2);
    assert_eq!(result.stats.fixtures_parsed, 1);
    assert_eq!(result.stats.blocks_skipped, 1);

    let fixture = &result.fixtures[0];
    assert_eq!(fixture.round, Some(14));
    assert_eq!(fixture.display_date_time, "18/01/2025 - 12:30");
    assert_eq!(
        fixture.iso_date.as_deref(),
        Some("2025-01-18T12:30:00+01:00")
    );
    assert_eq!(fixture.status, "Finalizado");
    assert!(fixture.is_home);

    assert_eq!(fixture.home.name, "C.n. Caballa - Ciudad De Ceuta");
    assert_eq!(fixture.home.score, Some(11));
    assert_eq!(fixture.home.quarter_scores, [3, 2, 4, 2]);
    assert_eq!(fixture.away.score, Some(9));

    let location = fixture.location.as_ref().expect("home pool resolved");
    assert_eq!(location.display_name, "Piscina Lorena Miranda");
    assert_eq!(location.city, "Ceuta");
}

#[test]
fn test_upcoming_page_keeps_scores_absent_and_detects_away_side() {
    let result = create_parser().extract(UPCOMING_PAGE);
    assert_eq!(result.fixtures.len(), 1);

    let fixture = &result.fixtures[0];
    assert_eq!(fixture.round, Some(15));
    assert_eq!(fixture.status, "Pendiente");
    assert!(!fixture.is_home);
    assert_eq!(fixture.home.score, None);
    assert_eq!(fixture.away.score, None);
    assert_eq!(fixture.home.quarter_scores, [0, 0, 0, 0]);

    // Location tracks the home side, Terrassa's pool
    let location = fixture.location.as_ref().expect("home pool resolved");
    assert_eq!(location.city, "Terrassa");
}

#[test]
fn test_serialized_fixture_matches_the_export_shape() {
    let result = create_parser().extract(UPCOMING_PAGE);
    let value = serde_json::to_value(&result.fixtures[0]).unwrap();

    assert_eq!(value["displayDateTime"], "01/02/2025 - 13:00");
    assert_eq!(value["isoDate"], "2025-02-01T13:00:00+01:00");
    assert_eq!(value["isHome"], false);
    assert_eq!(value["home"]["quarterScores"], serde_json::json!([0, 0, 0, 0]));
    // Absent scores are omitted, never written as 0
    assert!(value["home"].get("score").is_none());
    assert_eq!(value["location"]["displayName"], "Piscina Municipal Can Xarau");
}
