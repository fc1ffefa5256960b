use chrono::{Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use footy::api::types::{
    MatchesResponse, RawMatch, RawScore, RawScorePair, RawTableEntry, RawTeam, StandingsGroup,
    StandingsResponse,
};
use footy::normalize::{normalize_matches, normalize_standings};
use footy::ordering::{order_and_cap, DISPLAY_CAP};
use footy::render::{render_matches, render_standings};

/// Create a standings payload with a realistic league size
fn create_sample_standings(teams: u32) -> StandingsResponse {
    let table = (1..=teams)
        .map(|position| RawTableEntry {
            position: Some(position),
            team: RawTeam {
                name: Some(format!("Team {}", position)),
                short_name: Some(format!("T{}", position)),
            },
            played_games: Some(34),
            won: Some(34_u32.saturating_sub(position)),
            draw: Some(position.min(6)),
            lost: Some(position / 2),
            points: Some(3 * 34_u32.saturating_sub(position) + position.min(6)),
        })
        .collect();

    StandingsResponse {
        standings: vec![StandingsGroup {
            table,
            ..Default::default()
        }],
    }
}

/// Create a matches payload mixing live, finished and scheduled games
fn create_sample_matches(count: i64) -> MatchesResponse {
    let base = Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap();
    let statuses = ["FINISHED", "IN_PLAY", "SCHEDULED", "PAUSED", "TIMED"];

    let matches = (0..count)
        .map(|i| RawMatch {
            utc_date: base + Duration::hours(i % 72),
            status: statuses[(i % statuses.len() as i64) as usize].to_string(),
            home_team: RawTeam {
                name: Some(format!("Home {}", i)),
                short_name: None,
            },
            away_team: RawTeam {
                name: Some(format!("Away {}", i)),
                short_name: None,
            },
            score: Some(RawScore {
                full_time: RawScorePair {
                    home: Some((i % 5) as u32),
                    away: Some((i % 3) as u32),
                },
            }),
        })
        .collect();

    MatchesResponse { matches }
}

fn bench_standings_pipeline(c: &mut Criterion) {
    let raw = create_sample_standings(18);

    let mut group = c.benchmark_group("standings_pipeline");
    group.bench_function("normalize", |b| {
        b.iter(|| normalize_standings(black_box(&raw)).unwrap())
    });
    group.bench_function("normalize_and_render", |b| {
        b.iter(|| {
            let rows = normalize_standings(black_box(&raw)).unwrap();
            render_standings(&rows)
        })
    });
    group.finish();
}

fn bench_matches_pipeline(c: &mut Criterion) {
    let raw = create_sample_matches(380);

    let mut group = c.benchmark_group("matches_pipeline");
    group.bench_function("normalize", |b| {
        b.iter(|| normalize_matches(black_box(&raw)).unwrap())
    });
    group.bench_function("order_and_cap", |b| {
        let records = normalize_matches(&raw).unwrap();
        b.iter(|| order_and_cap(black_box(records.clone()), DISPLAY_CAP))
    });
    group.bench_function("full_pipeline", |b| {
        b.iter(|| {
            let records = normalize_matches(black_box(&raw)).unwrap();
            render_matches(&order_and_cap(records, DISPLAY_CAP))
        })
    });
    group.finish();
}

criterion_group!(benches, bench_standings_pipeline, bench_matches_pipeline);
criterion_main!(benches);
