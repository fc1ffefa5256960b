//! Presentation order for the live view: matches currently being played
//! first, then everything else by kickoff time, newest first.

use std::cmp::Ordering;

use crate::normalize::MatchRecord;

/// Maximum number of matches handed to the renderer
pub const DISPLAY_CAP: usize = 10;

/// Raw status codes counted as "being played" for ordering purposes.
/// The upstream filter string uses a literal `LIVE` code, so it is honored
/// here as well even though the v4 API normally reports `IN_PLAY`/`PAUSED`.
pub fn is_live_state(raw_status: &str) -> bool {
    matches!(raw_status, "IN_PLAY" | "PAUSED" | "LIVE")
}

fn compare(a: &MatchRecord, b: &MatchRecord) -> Ordering {
    let a_live = is_live_state(&a.raw_status);
    let b_live = is_live_state(&b.raw_status);
    b_live
        .cmp(&a_live)
        .then_with(|| b.kickoff.cmp(&a.kickoff))
}

/// Sort matches live-first then kickoff-descending and truncate to `cap`.
///
/// The sort must stay stable: two matches with equal live state and kickoff
/// keep their input order. `Vec::sort_by` guarantees this.
pub fn order_and_cap(mut matches: Vec<MatchRecord>, cap: usize) -> Vec<MatchRecord> {
    matches.sort_by(compare);
    matches.truncate(cap);
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::StatusStyle;
    use chrono::{TimeZone, Utc};

    fn record(home: &str, status: &str, hour: u32) -> MatchRecord {
        MatchRecord {
            kickoff: Utc.with_ymd_and_hms(2026, 8, 1, hour, 0, 0).unwrap(),
            home_team: home.to_string(),
            away_team: "Opponent".to_string(),
            raw_status: status.to_string(),
            display_status: status.to_string(),
            style: StatusStyle::from_raw(status),
            score: None,
        }
    }

    fn home_teams(matches: &[MatchRecord]) -> Vec<&str> {
        matches.iter().map(|m| m.home_team.as_str()).collect()
    }

    #[test]
    fn test_live_matches_sort_before_all_others() {
        let ordered = order_and_cap(
            vec![
                record("finished", "FINISHED", 20),
                record("in-play", "IN_PLAY", 10),
                record("scheduled", "TIMED", 22),
                record("paused", "PAUSED", 9),
            ],
            DISPLAY_CAP,
        );

        assert_eq!(
            home_teams(&ordered),
            vec!["in-play", "paused", "scheduled", "finished"]
        );
    }

    #[test]
    fn test_literal_live_code_counts_as_live() {
        let ordered = order_and_cap(
            vec![record("finished", "FINISHED", 23), record("live", "LIVE", 1)],
            DISPLAY_CAP,
        );
        assert_eq!(home_teams(&ordered), vec!["live", "finished"]);
    }

    #[test]
    fn test_non_live_sorted_by_kickoff_descending() {
        let ordered = order_and_cap(
            vec![
                record("early", "FINISHED", 12),
                record("late", "FINISHED", 21),
                record("mid", "FINISHED", 15),
            ],
            DISPLAY_CAP,
        );
        assert_eq!(home_teams(&ordered), vec!["late", "mid", "early"]);
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let ordered = order_and_cap(
            vec![
                record("first", "FINISHED", 12),
                record("second", "FINISHED", 12),
                record("third", "FINISHED", 12),
            ],
            DISPLAY_CAP,
        );
        assert_eq!(home_teams(&ordered), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_result_is_capped() {
        let matches: Vec<_> = (0..25)
            .map(|i| record(&format!("team-{}", i), "FINISHED", i % 24))
            .collect();
        let ordered = order_and_cap(matches, DISPLAY_CAP);
        assert_eq!(ordered.len(), DISPLAY_CAP);
    }

    #[test]
    fn test_every_live_match_precedes_every_non_live_match() {
        let matches: Vec<_> = (0..12)
            .map(|i| {
                let status = if i % 3 == 0 { "IN_PLAY" } else { "SCHEDULED" };
                record(&format!("team-{}", i), status, i % 24)
            })
            .collect();

        let ordered = order_and_cap(matches, DISPLAY_CAP);
        let first_non_live = ordered
            .iter()
            .position(|m| !is_live_state(&m.raw_status))
            .unwrap_or(ordered.len());
        assert!(ordered[first_non_live..]
            .iter()
            .all(|m| !is_live_state(&m.raw_status)));
    }
}
