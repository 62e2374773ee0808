//! Shared markup builders for standings parser tests

pub mod grid_tests;

/// One componentized grid row
pub fn grid_row(
    position: &str,
    name: &str,
    href: Option<&str>,
    logo: Option<&str>,
    stats: &[&str],
) -> String {
    let mut html = String::from("<div class=\"RFEN_ClassificationTableRow\">");
    html.push_str(&format!(
        "<div class=\"RFEN_ClassificationTablePosition\">{position}</div>"
    ));
    match href {
        Some(href) => html.push_str(&format!(
            "<div class=\"RFEN_ClassificationTableName\"><a href=\"{href}\">{name}</a></div>"
        )),
        None => html.push_str(&format!(
            "<div class=\"RFEN_ClassificationTableName\">{name}</div>"
        )),
    }
    if let Some(logo) = logo {
        html.push_str(&format!(
            "<img class=\"RFEN_ClassificationTableImage\" src=\"{logo}\">"
        ));
    }
    for stat in stats {
        html.push_str(&format!(
            "<div class=\"RFEN_ClassificationTableMeta\">{stat}</div>"
        ));
    }
    html.push_str("</div>");
    html
}

/// A grid document wrapping the given rows in the body container
pub fn grid_document(rows: &[String]) -> String {
    format!(
        "<html><body><div class=\"RFEN_ClassificationTableBody\">{}</div></body></html>",
        rows.concat()
    )
}

/// One plain table row from plain string cells
pub fn table_row(cells: &[&str]) -> String {
    let tds: String = cells.iter().map(|c| format!("<td>{c}</td>")).collect();
    format!("<tr>{tds}</tr>")
}

/// A plain-table document with a header row plus the given rows
pub fn table_document(rows: &[String]) -> String {
    format!(
        "<html><body><table>\
         <tr><th>Pos</th><th>Equipo</th><th>PJ</th><th>PG</th><th>PE</th>\
         <th>PP</th><th>GF</th><th>GC</th><th>Puntos</th></tr>{}</table></body></html>",
        rows.concat()
    )
}
