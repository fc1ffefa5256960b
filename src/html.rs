//! HTML fragment emission for the widget surface.
//!
//! Every upstream-controlled string is routed through `escape` before it is
//! embedded, so markup injection is impossible by construction rather than
//! by discipline.

use std::fmt::Write;

use crate::render::{MatchCard, MatchesContent, StandingsContent, TableContent};
use crate::render::{NO_MATCHES_MESSAGE, NO_STANDINGS_MESSAGE};

/// Escape a string for embedding in HTML text or attribute position.
pub fn escape(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

fn message_fragment(message: &str) -> String {
    format!("<div class=\"no-data\">{}</div>", escape(message))
}

fn table_fragment(table: &TableContent) -> String {
    let mut html = String::from("<table class=\"standings-table\"><thead><tr>");
    for header in table.headers {
        let _ = write!(html, "<th>{}</th>", escape(header));
    }
    html.push_str("</tr></thead><tbody>");

    for row in &table.rows {
        html.push_str("<tr>");
        for (column, cell) in row.iter().enumerate() {
            let cell = escape(cell);
            match column {
                1 => {
                    let _ = write!(html, "<td class=\"team-name\">{}</td>", cell);
                }
                6 => {
                    let _ = write!(html, "<td><strong>{}</strong></td>", cell);
                }
                _ => {
                    let _ = write!(html, "<td>{}</td>", cell);
                }
            }
        }
        html.push_str("</tr>");
    }

    html.push_str("</tbody></table>");
    html
}

fn card_fragment(card: &MatchCard) -> String {
    let mut html = String::from("<div class=\"match-container\">");
    let _ = write!(
        html,
        "<div class=\"match-header\"><span>{}</span><span class=\"match-status {}\">{}</span></div>",
        escape(&card.kickoff_label),
        card.style.css_class(),
        escape(&card.status_label),
    );
    let _ = write!(
        html,
        "<div class=\"match-teams\"><div class=\"team\">{}</div><div class=\"score\">{}</div><div class=\"team\">{}</div></div>",
        escape(&card.home_team),
        escape(&card.score_line),
        escape(&card.away_team),
    );
    html.push_str("</div>");
    html
}

/// Render standings content as an HTML fragment.
pub fn standings_fragment(content: &StandingsContent) -> String {
    match content {
        StandingsContent::Table(table) => table_fragment(table),
        StandingsContent::NoData => message_fragment(NO_STANDINGS_MESSAGE),
    }
}

/// Render match content as an HTML fragment.
pub fn matches_fragment(content: &MatchesContent) -> String {
    match content {
        MatchesContent::Cards(cards) => cards.iter().map(card_fragment).collect(),
        MatchesContent::NoData => message_fragment(NO_MATCHES_MESSAGE),
    }
}
