//! Componentized standings grid extraction
//!
//! Rows are classification row containers inside the grid body. Statistics
//! sit in meta cells whose fixed order is: points, played, won, lost, won
//! by shootout, lost by shootout, goals for, goals against, goal
//! difference.

use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;
use tracing::warn;

use crate::app::models::Standing;
use crate::app::services::markup::{
    first_attr, first_text, parse_int_or_default, selector, text_of,
};
use crate::constants::{MIN_STANDING_CELLS, selectors};

static BODY: LazyLock<Selector> = LazyLock::new(|| selector(selectors::GRID_BODY));
static ROW: LazyLock<Selector> = LazyLock::new(|| selector(selectors::GRID_ROW));
static POSITION: LazyLock<Selector> = LazyLock::new(|| selector(selectors::GRID_POSITION));
static NAME: LazyLock<Selector> = LazyLock::new(|| selector(selectors::GRID_NAME));
static NAME_LINK: LazyLock<Selector> =
    LazyLock::new(|| selector(selectors::GRID_NAME_LINK));
static LOGO: LazyLock<Selector> = LazyLock::new(|| selector(selectors::GRID_LOGO));
static META_CELL: LazyLock<Selector> =
    LazyLock::new(|| selector(selectors::GRID_META_CELL));

pub(super) fn extract(document: &Html) -> Vec<Standing> {
    let Some(body) = document.select(&BODY).next() else {
        return Vec::new();
    };

    let mut standings = Vec::new();
    for row in body.select(&ROW) {
        match parse_row(row) {
            Some(standing) => standings.push(standing),
            None => warn!("Skipping standings row with incomplete structure"),
        }
    }
    standings
}

/// One grid row; `None` when the row lacks position, name, or enough cells
fn parse_row(row: ElementRef) -> Option<Standing> {
    let position = first_text(row, &POSITION)?;
    let name_element = row.select(&NAME).next()?;
    let team_name = text_of(name_element);
    let team_url = first_attr(row, &NAME_LINK, "href");
    let logo_url = first_attr(row, &LOGO, "src").unwrap_or_default();

    let cells: Vec<String> = row.select(&META_CELL).map(text_of).collect();
    if cells.len() < MIN_STANDING_CELLS {
        return None;
    }

    let stat = |index: usize| parse_int_or_default(&cells[index], 0);

    Some(Standing {
        position,
        team_name,
        logo_url,
        team_url,
        points: stat(0),
        played: stat(1),
        won: stat(2),
        drawn: 0,
        lost: stat(3),
        won_shootout: stat(4),
        lost_shootout: stat(5),
        goals_for: stat(6),
        goals_against: stat(7),
        goal_difference: stat(8),
    })
}
