//! Pure presentation layer: normalized records in, structured view content
//! out. No I/O; the CLI, TUI and HTML surfaces all consume these values.

use chrono::{DateTime, Local, TimeZone, Utc};

use crate::normalize::{MatchRecord, StandingsRow, StatusStyle};

pub const NO_STANDINGS_MESSAGE: &str = "No standings data available for this league.";
pub const NO_MATCHES_MESSAGE: &str = "No matches available for this league.";

pub const STANDINGS_HEADERS: [&str; 7] = ["Pos", "Team", "P", "W", "D", "L", "Pts"];

/// Kickoff display format: local date plus 12-hour clock
const KICKOFF_FORMAT: &str = "%m/%d/%Y %I:%M %p";

/// A standings table ready for any surface to draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableContent {
    pub headers: [&'static str; 7],
    pub rows: Vec<[String; 7]>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StandingsContent {
    Table(TableContent),
    NoData,
}

/// One match card with all derived display fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchCard {
    pub kickoff_label: String,
    pub status_label: String,
    pub style: StatusStyle,
    pub home_team: String,
    pub away_team: String,
    /// "2 - 1" once the match has a score, "vs" before kickoff
    pub score_line: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchesContent {
    Cards(Vec<MatchCard>),
    NoData,
}

fn format_kickoff_in<Tz: TimeZone>(kickoff: DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    kickoff.format(KICKOFF_FORMAT).to_string()
}

/// Format a kickoff timestamp in the machine's local timezone
pub fn format_kickoff(kickoff: DateTime<Utc>) -> String {
    format_kickoff_in(kickoff.with_timezone(&Local))
}

/// Render standings rows into table content. An empty row list renders the
/// no-data message, not an empty table.
pub fn render_standings(rows: &[StandingsRow]) -> StandingsContent {
    if rows.is_empty() {
        return StandingsContent::NoData;
    }

    let table_rows = rows
        .iter()
        .map(|row| {
            [
                row.position.to_string(),
                row.team_name.clone(),
                row.played.to_string(),
                row.won.to_string(),
                row.draw.to_string(),
                row.lost.to_string(),
                row.points.to_string(),
            ]
        })
        .collect();

    StandingsContent::Table(TableContent {
        headers: STANDINGS_HEADERS,
        rows: table_rows,
    })
}

fn render_card(record: &MatchRecord) -> MatchCard {
    let score_line = match record.score {
        Some((home, away)) => format!("{} - {}", home, away),
        None => "vs".to_string(),
    };

    MatchCard {
        kickoff_label: format_kickoff(record.kickoff),
        status_label: record.display_status.clone(),
        style: record.style,
        home_team: record.home_team.clone(),
        away_team: record.away_team.clone(),
        score_line,
    }
}

/// Render an ordered match list into cards, preserving its order.
pub fn render_matches(matches: &[MatchRecord]) -> MatchesContent {
    if matches.is_empty() {
        return MatchesContent::NoData;
    }
    MatchesContent::Cards(matches.iter().map(render_card).collect())
}
