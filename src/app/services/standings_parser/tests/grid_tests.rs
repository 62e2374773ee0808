//! Tests for the componentized grid variant

use super::{grid_document, grid_row};
use crate::app::services::standings_parser::{
    TableVariant, detect_variant, extract_standings,
};
use scraper::Html;

#[test]
fn test_grid_document_is_detected() {
    let html = grid_document(&[]);
    let document = Html::parse_document(&html);
    assert_eq!(detect_variant(&document), Some(TableVariant::ComponentGrid));
}

#[test]
fn test_grid_is_preferred_over_a_plain_table() {
    // Pages sometimes carry unrelated tables next to the grid
    let html = "<html><body><table><tr><td>x</td></tr></table>\
                <div class=\"RFEN_ClassificationTableBody\"></div></body></html>";
    let document = Html::parse_document(html);
    assert_eq!(detect_variant(&document), Some(TableVariant::ComponentGrid));
}

#[test]
fn test_full_grid_row_parses_all_stats() {
    let html = grid_document(&[grid_row(
        "1",
        "C.n. Atlètic-Barceloneta",
        Some("/equipo/14001/"),
        Some("https://rfen.es/img/barceloneta.png"),
        &["30", "12", "10", "1", "1", "0", "140", "90", "50"],
    )]);

    let standings = extract_standings(&html);
    assert_eq!(standings.len(), 1);

    let row = &standings[0];
    assert_eq!(row.position, "1");
    assert_eq!(row.team_name, "C.n. Atlètic-Barceloneta");
    assert_eq!(row.team_url.as_deref(), Some("/equipo/14001/"));
    assert_eq!(row.logo_url, "https://rfen.es/img/barceloneta.png");
    assert_eq!(row.points, 30);
    assert_eq!(row.played, 12);
    assert_eq!(row.won, 10);
    assert_eq!(row.lost, 1);
    assert_eq!(row.won_shootout, 1);
    assert_eq!(row.lost_shootout, 0);
    assert_eq!(row.goals_for, 140);
    assert_eq!(row.goals_against, 90);
    assert_eq!(row.goal_difference, 50);
    assert_eq!(row.drawn, 0);
}

#[test]
fn test_row_with_too_few_cells_is_skipped() {
    let html = grid_document(&[
        grid_row("1", "C.n. Sabadell", None, None, &["30", "12", "10", "1", "1", "0", "140", "90", "50"]),
        grid_row("2", "C.n. Terrassa", None, None, &["27", "12", "9"]),
    ]);

    let standings = extract_standings(&html);
    assert_eq!(standings.len(), 1);
    assert_eq!(standings[0].team_name, "C.n. Sabadell");
}

#[test]
fn test_non_numeric_stat_cells_default_to_zero() {
    let html = grid_document(&[grid_row(
        "3",
        "C.e. Mediterrani",
        None,
        None,
        &["24", "12", "–", "4", "0", "0", "118", "101", "17"],
    )]);

    let standings = extract_standings(&html);
    assert_eq!(standings.len(), 1);
    assert_eq!(standings[0].won, 0);
    assert_eq!(standings[0].points, 24);
}

#[test]
fn test_negative_goal_difference_is_kept() {
    let html = grid_document(&[grid_row(
        "10",
        "C. Encinas De Boadilla",
        None,
        None,
        &["6", "12", "2", "9", "0", "1", "85", "130", "-45"],
    )]);

    let standings = extract_standings(&html);
    assert_eq!(standings[0].goal_difference, -45);
}

#[test]
fn test_row_without_position_is_skipped() {
    let broken = "<div class=\"RFEN_ClassificationTableRow\">\
                  <div class=\"RFEN_ClassificationTableName\">C.n. Barcelona</div>\
                  </div>"
        .to_string();
    let html = grid_document(&[broken]);
    assert!(extract_standings(&html).is_empty());
}

#[test]
fn test_rows_keep_table_order() {
    let stats: [&str; 9] = ["0", "0", "0", "0", "0", "0", "0", "0", "0"];
    let html = grid_document(&[
        grid_row("1", "C.n. Sabadell", None, None, &stats),
        grid_row("2", "C.n. Terrassa", None, None, &stats),
        grid_row("3", "Real Canoe N.c.", None, None, &stats),
    ]);

    let names: Vec<String> = extract_standings(&html)
        .into_iter()
        .map(|s| s.team_name)
        .collect();
    assert_eq!(
        names,
        vec!["C.n. Sabadell", "C.n. Terrassa", "Real Canoe N.c."]
    );
}
