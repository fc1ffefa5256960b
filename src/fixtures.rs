//! Canned API payloads for development mode and tests.

use chrono::{Duration, TimeZone, Utc};

use crate::api::types::{
    MatchesResponse, RawMatch, RawScore, RawScorePair, RawTableEntry, RawTeam, StandingsGroup,
    StandingsResponse,
};

fn team(name: &str, short_name: &str) -> RawTeam {
    RawTeam {
        name: Some(name.to_string()),
        short_name: Some(short_name.to_string()),
    }
}

fn table_entry(
    position: u32,
    name: &str,
    short_name: &str,
    played: u32,
    won: u32,
    draw: u32,
    lost: u32,
) -> RawTableEntry {
    RawTableEntry {
        position: Some(position),
        team: team(name, short_name),
        played_games: Some(played),
        won: Some(won),
        draw: Some(draw),
        lost: Some(lost),
        points: Some(won * 3 + draw),
    }
}

pub fn create_standings_response() -> StandingsResponse {
    StandingsResponse {
        standings: vec![StandingsGroup {
            stage: Some("REGULAR_SEASON".to_string()),
            group_type: Some("TOTAL".to_string()),
            group: None,
            table: vec![
                table_entry(1, "PSV", "PSV", 10, 8, 1, 1),
                table_entry(2, "Feyenoord", "Feyenoord", 10, 7, 2, 1),
                table_entry(3, "AFC Ajax", "Ajax", 10, 6, 2, 2),
                table_entry(4, "AZ", "AZ", 10, 6, 1, 3),
                table_entry(5, "FC Twente", "Twente", 10, 5, 2, 3),
                table_entry(6, "FC Utrecht", "Utrecht", 10, 4, 3, 3),
            ],
        }],
    }
}

fn fixture_match(
    status: &str,
    hours_from_base: i64,
    home: RawTeam,
    away: RawTeam,
    score: Option<(u32, u32)>,
) -> RawMatch {
    let base = Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap();
    RawMatch {
        utc_date: base + Duration::hours(hours_from_base),
        status: status.to_string(),
        home_team: home,
        away_team: away,
        score: score.map(|(home_goals, away_goals)| RawScore {
            full_time: RawScorePair {
                home: Some(home_goals),
                away: Some(away_goals),
            },
        }),
    }
}

pub fn create_matches_response() -> MatchesResponse {
    MatchesResponse {
        matches: vec![
            fixture_match(
                "FINISHED",
                -26,
                team("FC Twente", "Twente"),
                team("FC Utrecht", "Utrecht"),
                Some((3, 0)),
            ),
            fixture_match(
                "IN_PLAY",
                0,
                team("PSV", "PSV"),
                team("AFC Ajax", "Ajax"),
                Some((2, 1)),
            ),
            fixture_match(
                "PAUSED",
                0,
                team("Feyenoord", "Feyenoord"),
                team("AZ", "AZ"),
                Some((1, 1)),
            ),
            fixture_match(
                "TIMED",
                24,
                team("Sparta Rotterdam", "Sparta"),
                team("NEC Nijmegen", "NEC"),
                None,
            ),
            fixture_match(
                "SCHEDULED",
                48,
                team("SC Heerenveen", "Heerenveen"),
                team("Go Ahead Eagles", "Go Ahead"),
                None,
            ),
        ],
    }
}
