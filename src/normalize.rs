//! Turns raw API payloads into the display records the renderer consumes.
//!
//! Records are re-created from scratch on every fetch and never merged with
//! the results of a previous one.

use chrono::{DateTime, Utc};
use phf::phf_map;

use crate::api::types::{MatchesResponse, RawMatch, RawTeam, StandingsResponse};

/// Raw status code → display label. Codes not in the table pass through
/// unchanged, so new upstream codes degrade to themselves instead of
/// breaking the view.
static STATUS_LABELS: phf::Map<&'static str, &'static str> = phf_map! {
    "SCHEDULED" => "SCHEDULED",
    "TIMED" => "SCHEDULED",
    "IN_PLAY" => "LIVE",
    "PAUSED" => "HALFTIME",
    "FINISHED" => "FINISHED",
    "POSTPONED" => "POSTPONED",
    "SUSPENDED" => "SUSPENDED",
    "CANCELLED" => "CANCELLED",
};

/// Status codes for which no score exists yet
const PRE_KICKOFF_STATUSES: &[&str] = &["SCHEDULED", "TIMED"];

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NormalizeError {
    #[error("team entry has neither a name nor a short name")]
    MissingTeamName,
}

/// One row of a standings table, fully defaulted and display-ready.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandingsRow {
    pub position: u32,
    pub team_name: String,
    pub played: u32,
    pub won: u32,
    pub draw: u32,
    pub lost: u32,
    pub points: u32,
}

/// Display style bucket for a match status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusStyle {
    Scheduled,
    Live,
    Halftime,
    Finished,
}

impl StatusStyle {
    /// Style for a raw status code; anything unrecognized renders as
    /// scheduled.
    pub fn from_raw(raw_status: &str) -> Self {
        match raw_status {
            "IN_PLAY" => Self::Live,
            "PAUSED" => Self::Halftime,
            "FINISHED" => Self::Finished,
            _ => Self::Scheduled,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Scheduled => "status-scheduled",
            Self::Live => "status-live",
            Self::Halftime => "status-halftime",
            Self::Finished => "status-finished",
        }
    }
}

/// One match, display-ready. `score` is present only once the match has
/// started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    pub kickoff: DateTime<Utc>,
    pub home_team: String,
    pub away_team: String,
    pub raw_status: String,
    pub display_status: String,
    pub style: StatusStyle,
    pub score: Option<(u32, u32)>,
}

/// Display label for a raw status code
pub fn display_status(raw_status: &str) -> String {
    STATUS_LABELS
        .get(raw_status)
        .map(|label| (*label).to_string())
        .unwrap_or_else(|| raw_status.to_string())
}

/// Extract the display name of a team: the full name, falling back to the
/// short name. A name that is present but empty counts as absent.
fn team_display_name(team: &RawTeam) -> Result<String, NormalizeError> {
    team.name
        .as_deref()
        .filter(|name| !name.is_empty())
        .or_else(|| team.short_name.as_deref().filter(|name| !name.is_empty()))
        .map(|name| name.to_string())
        .ok_or(NormalizeError::MissingTeamName)
}

/// Normalize a standings payload into display rows.
///
/// Only the first standings group is used; competitions that serve several
/// groups (home/away splits, cup stages) are not merged. A payload without
/// any group yields an empty list, not an error.
pub fn normalize_standings(
    raw: &StandingsResponse,
) -> Result<Vec<StandingsRow>, NormalizeError> {
    let Some(group) = raw.standings.first() else {
        return Ok(Vec::new());
    };

    group
        .table
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            Ok(StandingsRow {
                position: entry.position.unwrap_or(index as u32 + 1),
                team_name: team_display_name(&entry.team)?,
                played: entry.played_games.unwrap_or(0),
                won: entry.won.unwrap_or(0),
                draw: entry.draw.unwrap_or(0),
                lost: entry.lost.unwrap_or(0),
                points: entry.points.unwrap_or(0),
            })
        })
        .collect()
}

/// Normalize a single raw match.
pub fn normalize_match(raw: &RawMatch) -> Result<MatchRecord, NormalizeError> {
    let score = if PRE_KICKOFF_STATUSES.contains(&raw.status.as_str()) {
        None
    } else {
        let full_time = raw
            .score
            .as_ref()
            .map(|score| score.full_time.clone())
            .unwrap_or_default();
        Some((full_time.home.unwrap_or(0), full_time.away.unwrap_or(0)))
    };

    Ok(MatchRecord {
        kickoff: raw.utc_date,
        home_team: team_display_name(&raw.home_team)?,
        away_team: team_display_name(&raw.away_team)?,
        display_status: display_status(&raw.status),
        style: StatusStyle::from_raw(&raw.status),
        raw_status: raw.status.clone(),
        score,
    })
}

/// Normalize a matches payload, preserving input order.
pub fn normalize_matches(raw: &MatchesResponse) -> Result<Vec<MatchRecord>, NormalizeError> {
    raw.matches.iter().map(normalize_match).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{RawScore, RawScorePair, RawTableEntry, StandingsGroup};
    use chrono::TimeZone;

    fn team(name: &str) -> RawTeam {
        RawTeam {
            name: Some(name.to_string()),
            short_name: None,
        }
    }

    fn raw_match(status: &str, home: u32, away: u32) -> RawMatch {
        RawMatch {
            utc_date: Utc.with_ymd_and_hms(2026, 8, 1, 18, 30, 0).unwrap(),
            status: status.to_string(),
            home_team: team("Feyenoord"),
            away_team: team("AZ"),
            score: Some(RawScore {
                full_time: RawScorePair {
                    home: Some(home),
                    away: Some(away),
                },
            }),
        }
    }

    fn standings_with_table(table: Vec<RawTableEntry>) -> StandingsResponse {
        StandingsResponse {
            standings: vec![StandingsGroup {
                table,
                ..Default::default()
            }],
        }
    }

    #[test]
    fn test_positions_default_to_dense_sequence() {
        let entries = (0..4)
            .map(|i| RawTableEntry {
                team: team(&format!("Team {}", i)),
                ..Default::default()
            })
            .collect();

        let rows = normalize_standings(&standings_with_table(entries)).unwrap();
        assert_eq!(rows.len(), 4);
        let positions: Vec<u32> = rows.iter().map(|row| row.position).collect();
        assert_eq!(positions, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_explicit_position_wins_over_index() {
        let entries = vec![RawTableEntry {
            position: Some(7),
            team: team("PSV"),
            ..Default::default()
        }];
        let rows = normalize_standings(&standings_with_table(entries)).unwrap();
        assert_eq!(rows[0].position, 7);
    }

    #[test]
    fn test_missing_counters_default_to_zero_but_zero_survives() {
        let entries = vec![RawTableEntry {
            team: team("PSV"),
            played_games: None,
            won: Some(0),
            points: Some(25),
            ..Default::default()
        }];
        let rows = normalize_standings(&standings_with_table(entries)).unwrap();
        assert_eq!(rows[0].played, 0);
        assert_eq!(rows[0].won, 0);
        assert_eq!(rows[0].points, 25);
    }

    #[test]
    fn test_team_name_falls_back_to_short_name() {
        let entries = vec![RawTableEntry {
            team: RawTeam {
                name: Some(String::new()),
                short_name: Some("AZ".to_string()),
            },
            ..Default::default()
        }];
        let rows = normalize_standings(&standings_with_table(entries)).unwrap();
        assert_eq!(rows[0].team_name, "AZ");
    }

    #[test]
    fn test_missing_team_name_is_an_error() {
        let entries = vec![RawTableEntry::default()];
        let result = normalize_standings(&standings_with_table(entries));
        assert_eq!(result, Err(NormalizeError::MissingTeamName));
    }

    #[test]
    fn test_no_standings_group_yields_empty() {
        let raw = StandingsResponse { standings: vec![] };
        assert_eq!(normalize_standings(&raw).unwrap(), vec![]);
    }

    #[test]
    fn test_only_first_group_is_used() {
        let raw = StandingsResponse {
            standings: vec![
                StandingsGroup {
                    table: vec![RawTableEntry {
                        team: team("Home Split"),
                        ..Default::default()
                    }],
                    ..Default::default()
                },
                StandingsGroup {
                    table: vec![RawTableEntry {
                        team: team("Away Split"),
                        ..Default::default()
                    }],
                    ..Default::default()
                },
            ],
        };
        let rows = normalize_standings(&raw).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].team_name, "Home Split");
    }

    #[test]
    fn test_in_play_match_is_live_with_score() {
        let record = normalize_match(&raw_match("IN_PLAY", 2, 1)).unwrap();
        assert_eq!(record.display_status, "LIVE");
        assert_eq!(record.style, StatusStyle::Live);
        assert_eq!(record.style.css_class(), "status-live");
        assert_eq!(record.score, Some((2, 1)));
    }

    #[test]
    fn test_no_score_before_kickoff() {
        for status in ["SCHEDULED", "TIMED"] {
            let record = normalize_match(&raw_match(status, 0, 0)).unwrap();
            assert_eq!(record.score, None, "status {}", status);
            assert_eq!(record.display_status, "SCHEDULED");
        }
    }

    #[test]
    fn test_score_defaults_to_zero_when_absent() {
        let mut raw = raw_match("FINISHED", 0, 0);
        raw.score = None;
        let record = normalize_match(&raw).unwrap();
        assert_eq!(record.score, Some((0, 0)));
    }

    #[test]
    fn test_status_mapping_table() {
        assert_eq!(display_status("PAUSED"), "HALFTIME");
        assert_eq!(display_status("FINISHED"), "FINISHED");
        assert_eq!(display_status("POSTPONED"), "POSTPONED");
        assert_eq!(display_status("SUSPENDED"), "SUSPENDED");
        assert_eq!(display_status("CANCELLED"), "CANCELLED");
    }

    #[test]
    fn test_unknown_status_passes_through_as_scheduled_style() {
        let record = normalize_match(&raw_match("FOO", 0, 0)).unwrap();
        assert_eq!(record.display_status, "FOO");
        assert_eq!(record.style, StatusStyle::Scheduled);
        assert_eq!(record.style.css_class(), "status-scheduled");
    }

    #[test]
    fn test_paused_style_is_halftime() {
        let record = normalize_match(&raw_match("PAUSED", 1, 1)).unwrap();
        assert_eq!(record.style, StatusStyle::Halftime);
        assert_eq!(record.style.css_class(), "status-halftime");
    }
}
