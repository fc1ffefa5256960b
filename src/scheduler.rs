//! Periodic refresh for the live view.
//!
//! A two-state machine: `Idle` outside the live tab, `Polling` with a
//! single timer task while it is active. Starting is idempotent (any prior
//! timer is cancelled first), so at most one timer exists at any time.

use std::mem;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::background::RefreshRequest;
use crate::state::{SharedDataHandle, Tab};

enum State {
    Idle,
    Polling(JoinHandle<()>),
}

pub struct RefreshScheduler {
    state: State,
}

impl RefreshScheduler {
    pub fn new() -> Self {
        RefreshScheduler { state: State::Idle }
    }

    pub fn is_polling(&self) -> bool {
        matches!(self.state, State::Polling(_))
    }

    /// Enter `Polling`: cancel any previous timer, then spawn one that
    /// requests a live-view refresh every `period`. Each tick re-checks the
    /// active tab so a tick that races a tab switch is a no-op; cancelling
    /// on tab exit remains the primary mechanism.
    pub fn start(
        &mut self,
        period: Duration,
        shared: SharedDataHandle,
        refresh_tx: mpsc::Sender<RefreshRequest>,
    ) {
        self.stop();
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            // The first tick completes immediately; the refresh on entering
            // the tab is requested by the caller, not the timer.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                let still_live = shared.read().await.view.active_tab == Tab::Live;
                if !still_live {
                    debug!("skipping live refresh tick, live tab no longer active");
                    continue;
                }
                if refresh_tx.send(RefreshRequest::Live).await.is_err() {
                    // Fetch loop is gone, nothing left to poll for
                    return;
                }
            }
        });
        self.state = State::Polling(handle);
    }

    /// Return to `Idle`, cancelling the timer and releasing its handle.
    pub fn stop(&mut self) {
        if let State::Polling(handle) = mem::replace(&mut self.state, State::Idle) {
            handle.abort();
        }
    }
}

impl Default for RefreshScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for RefreshScheduler {
    fn drop(&mut self) {
        self.stop();
    }
}
