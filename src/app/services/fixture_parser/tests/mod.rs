//! Shared markup builders for fixture parser tests

use std::sync::Arc;

use crate::app::models::TeamIdentity;
use crate::app::services::fixture_parser::FixtureParser;
use crate::app::services::venue_registry::VenueRegistry;


/// Parser wired with the built-in venue table and the default identity
pub fn create_parser() -> FixtureParser {
    FixtureParser::new(
        Arc::new(VenueRegistry::builtin()),
        TeamIdentity::new("C.n. Caballa - Ciudad De Ceuta", "caballa"),
    )
}

/// One team-side container in the site's markup shape
pub fn team_container(
    name: &str,
    logo: &str,
    score: Option<&str>,
    quarters: &[&str],
) -> String {
    let mut html = String::from("<div class=\"RFEN_MatchRowTeamContainer\">");
    html.push_str(&format!("<div class=\"RFEN_MatchRowName\">{name}</div>"));
    if !logo.is_empty() {
        html.push_str(&format!(
            "<img class=\"RFEN_MatchRowImage\" src=\"{logo}\">"
        ));
    }
    if let Some(score) = score {
        html.push_str(&format!(
            "<div class=\"RFEN_MatchRowResultFinal\">{score}</div>"
        ));
    }
    for (index, quarter) in quarters.iter().enumerate() {
        html.push_str(&format!(
            "<div class=\"RFEN_MatchRowResultP{}\">{quarter}</div>",
            index + 1
        ));
    }
    html.push_str("</div>");
    html
}

/// One fixture block wrapping the given side containers
pub fn fixture_block(
    round_label: &str,
    hour_label: &str,
    status: Option<&str>,
    iso_date: Option<&str>,
    sides: &[String],
) -> String {
    let mut html = String::from("<div class=\"RFEN_MatchRowContainer\">");
    if let Some(iso) = iso_date {
        html.push_str(&format!(
            "<time itemprop=\"startDate\" content=\"{iso}\"></time>"
        ));
    }
    html.push_str(&format!(
        "<div class=\"RFEN_MatchRowTimeContainer_date\"><span>{round_label}</span></div>"
    ));
    html.push_str(&format!(
        "<div class=\"RFEN_MatchRowTimeContainer_hour\"><span>{hour_label}</span></div>"
    ));
    if let Some(status) = status {
        html.push_str(&format!(
            "<div class=\"RFEN_MatchRowStatusContainer\">{status}</div>"
        ));
    }
    for side in sides {
        html.push_str(side);
    }
    html.push_str("</div>");
    html
}

/// Wrap blocks in a page skeleton
pub fn page(blocks: &[String]) -> String {
    format!(
        "<html><body><main>{}</main></body></html>",
        blocks.concat()
    )
}
