//! Plain standings table extraction
//!
//! The first table on the page, header row skipped. Cell order: position,
//! team (optionally wrapping a link and crest), played, won, drawn, lost,
//! goals for, goals against, points. The plain rendering carries no
//! shootout columns; goal difference is derived from the goal columns.

use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;
use tracing::debug;

use crate::app::models::Standing;
use crate::app::services::markup::{first_attr, parse_int_or_default, selector, text_of};
use crate::constants::{MIN_STANDING_CELLS, selectors};

static TABLE: LazyLock<Selector> = LazyLock::new(|| selector(selectors::TABLE));
static ROW: LazyLock<Selector> = LazyLock::new(|| selector(selectors::TABLE_ROW));
static CELL: LazyLock<Selector> = LazyLock::new(|| selector(selectors::TABLE_CELL));
static LINK: LazyLock<Selector> = LazyLock::new(|| selector(selectors::LINK));
static IMAGE: LazyLock<Selector> = LazyLock::new(|| selector(selectors::IMAGE));

pub(super) fn extract(document: &Html) -> Vec<Standing> {
    let Some(table_element) = document.select(&TABLE).next() else {
        return Vec::new();
    };

    let mut standings = Vec::new();
    for row in table_element.select(&ROW).skip(1) {
        let cells: Vec<ElementRef> = row.select(&CELL).collect();
        if cells.len() < MIN_STANDING_CELLS {
            if !cells.is_empty() {
                debug!("Skipping standings row with {} cells", cells.len());
            }
            continue;
        }
        standings.push(parse_row(&cells));
    }
    standings
}

fn parse_row(cells: &[ElementRef]) -> Standing {
    let position = text_of(cells[0]);
    let team_cell = cells[1];
    let team_name = text_of(team_cell);
    let team_url = first_attr(team_cell, &LINK, "href");
    let logo_url = first_attr(team_cell, &IMAGE, "src").unwrap_or_default();

    let stat = |index: usize| parse_int_or_default(&text_of(cells[index]), 0);
    let goals_for = stat(6);
    let goals_against = stat(7);

    Standing {
        position,
        team_name,
        logo_url,
        team_url,
        points: stat(8),
        played: stat(2),
        won: stat(3),
        drawn: stat(4),
        lost: stat(5),
        won_shootout: 0,
        lost_shootout: 0,
        goals_for,
        goals_against,
        goal_difference: goals_for - goals_against,
    }
}
