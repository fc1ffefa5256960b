//! Raw response shapes as served by the API.
//!
//! Every field the normalizer applies a defaulting rule to is decoded as an
//! `Option`, so "absent" stays distinguishable from "present and zero".

use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StandingsResponse {
    #[serde(default)]
    pub standings: Vec<StandingsGroup>,
}

/// One standings group. League competitions serve a single `TOTAL` group;
/// cup competitions may serve one group per stage or per home/away split.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingsGroup {
    #[serde(default)]
    pub stage: Option<String>,
    #[serde(rename = "type", default)]
    pub group_type: Option<String>,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub table: Vec<RawTableEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTableEntry {
    #[serde(default)]
    pub position: Option<u32>,
    #[serde(default)]
    pub team: RawTeam,
    #[serde(default)]
    pub played_games: Option<u32>,
    #[serde(default)]
    pub won: Option<u32>,
    #[serde(default)]
    pub draw: Option<u32>,
    #[serde(default)]
    pub lost: Option<u32>,
    #[serde(default)]
    pub points: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTeam {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub short_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchesResponse {
    #[serde(default)]
    pub matches: Vec<RawMatch>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMatch {
    pub utc_date: DateTime<Utc>,
    pub status: String,
    #[serde(default)]
    pub home_team: RawTeam,
    #[serde(default)]
    pub away_team: RawTeam,
    #[serde(default)]
    pub score: Option<RawScore>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawScore {
    #[serde(default)]
    pub full_time: RawScorePair,
}

/// Full-time goals; both sides are null until the match starts.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawScorePair {
    #[serde(default)]
    pub home: Option<u32>,
    #[serde(default)]
    pub away: Option<u32>,
}
