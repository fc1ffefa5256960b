//! Background fetch loop: receives refresh requests (manual, tab-entry, or
//! scheduler ticks), runs the fetch → normalize pipeline, and commits the
//! outcome into shared state.
//!
//! Requests carry no payload; the competition to fetch is read from the
//! view state at execution time. A per-view epoch guards commits: a fetch
//! issued before a newer one may finish later, and must not overwrite it.

use std::time::SystemTime;

use tokio::sync::mpsc;
use tracing::debug;

use crate::api::DEFAULT_MATCH_STATUSES;
use crate::competition::Competition;
use crate::credentials::Credential;
use crate::data_provider::FootballDataProvider;
use crate::normalize::{normalize_matches, normalize_standings, MatchRecord, StandingsRow};
use crate::ordering::{order_and_cap, DISPLAY_CAP};
use crate::state::SharedDataHandle;

/// A request handled by the fetch loop: one refresh cycle of a view, or a
/// token update that should apply to all later requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshRequest {
    Standings,
    Live,
    UpdateToken(Credential),
}

async fn load_standings(
    client: &dyn FootballDataProvider,
    competition: Competition,
) -> anyhow::Result<Vec<StandingsRow>> {
    let raw = client.standings(competition).await?;
    Ok(normalize_standings(&raw)?)
}

async fn load_live_matches(
    client: &dyn FootballDataProvider,
    competition: Competition,
) -> anyhow::Result<Vec<MatchRecord>> {
    let raw = client.matches(competition, DEFAULT_MATCH_STATUSES).await?;
    let matches = normalize_matches(&raw)?;
    Ok(order_and_cap(matches, DISPLAY_CAP))
}

/// Fetch standings for the currently selected competition and update
/// shared state, unless a newer standings fetch was issued meanwhile.
pub async fn refresh_standings(client: &dyn FootballDataProvider, shared: &SharedDataHandle) {
    let (competition, epoch) = {
        let mut data = shared.write().await;
        data.standings_epoch += 1;
        (data.view.standings_competition, data.standings_epoch)
    };

    let outcome = load_standings(client, competition).await;

    let mut data = shared.write().await;
    if data.standings_epoch != epoch {
        debug!(epoch, "discarding stale standings response");
        return;
    }
    match outcome {
        Ok(rows) => {
            data.standings = rows;
            data.standings_error = None;
            data.last_refresh = Some(SystemTime::now());
        }
        Err(e) => {
            data.standings_error = Some(format!("Failed to fetch standings: {:#}", e));
        }
    }
}

/// Fetch, order and cap live matches for the currently selected
/// competition, with the same stale-response guard.
pub async fn refresh_live(client: &dyn FootballDataProvider, shared: &SharedDataHandle) {
    let (competition, epoch) = {
        let mut data = shared.write().await;
        data.matches_epoch += 1;
        (data.view.live_competition, data.matches_epoch)
    };

    let outcome = load_live_matches(client, competition).await;

    let mut data = shared.write().await;
    if data.matches_epoch != epoch {
        debug!(epoch, "discarding stale live scores response");
        return;
    }
    match outcome {
        Ok(matches) => {
            data.matches = matches;
            data.matches_error = None;
            data.last_refresh = Some(SystemTime::now());
        }
        Err(e) => {
            data.matches_error = Some(format!("Failed to fetch live scores: {:#}", e));
        }
    }
}

/// Loop draining refresh requests until all senders are dropped.
///
/// A failed cycle records its error in shared state and keeps the loop
/// alive; the next request fires regardless.
pub async fn fetch_data_loop(
    mut client: impl FootballDataProvider,
    shared: SharedDataHandle,
    mut refresh_rx: mpsc::Receiver<RefreshRequest>,
) {
    while let Some(request) = refresh_rx.recv().await {
        match request {
            RefreshRequest::Standings => refresh_standings(&client, &shared).await,
            RefreshRequest::Live => refresh_live(&client, &shared).await,
            RefreshRequest::UpdateToken(token) => client.update_token(token),
        }
    }
}
