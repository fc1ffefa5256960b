//! Shared application state: the view state mutated by user actions and the
//! per-view data written by the background fetch loop.

use std::sync::Arc;
use std::time::SystemTime;

use tokio::sync::RwLock;

use crate::competition::Competition;
use crate::config::Config;
use crate::normalize::{MatchRecord, StandingsRow};

/// Main tabs in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Standings,
    Live,
    Settings,
}

impl Tab {
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Standings => "Standings",
            Tab::Live => "Live",
            Tab::Settings => "Settings",
        }
    }

    pub fn number(&self) -> usize {
        match self {
            Tab::Standings => 1,
            Tab::Live => 2,
            Tab::Settings => 3,
        }
    }

    pub fn from_number(n: usize) -> Option<Self> {
        match n {
            1 => Some(Tab::Standings),
            2 => Some(Tab::Live),
            3 => Some(Tab::Settings),
            _ => None,
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Tab::Standings => Tab::Live,
            Tab::Live => Tab::Settings,
            Tab::Settings => Tab::Standings,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Tab::Standings => Tab::Settings,
            Tab::Live => Tab::Standings,
            Tab::Settings => Tab::Live,
        }
    }
}

/// The view state: which tab is active and which competition each tab
/// shows. Owned here and passed explicitly, never read from globals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    pub active_tab: Tab,
    pub standings_competition: Competition,
    pub live_competition: Competition,
}

impl ViewState {
    pub fn new(default_competition: Competition) -> Self {
        ViewState {
            active_tab: Tab::Standings,
            standings_competition: default_competition,
            live_competition: default_competition,
        }
    }

    /// Competition selected on the currently active tab (settings shares
    /// the standings selection)
    pub fn selected_competition(&self) -> Competition {
        match self.active_tab {
            Tab::Live => self.live_competition,
            Tab::Standings | Tab::Settings => self.standings_competition,
        }
    }

    /// Cycle the competition selector of the active tab
    pub fn cycle_competition(&mut self) {
        match self.active_tab {
            Tab::Live => self.live_competition = self.live_competition.next(),
            Tab::Standings | Tab::Settings => {
                self.standings_competition = self.standings_competition.next()
            }
        }
    }
}

/// Data shared between the UI and the background fetch loop.
///
/// The `*_epoch` counters implement the per-view stale-response guard:
/// every issued fetch bumps its view's counter and remembers the value; a
/// finished fetch only commits while its remembered value is still current.
#[derive(Debug, Clone)]
pub struct SharedData {
    pub standings: Vec<StandingsRow>,
    pub standings_error: Option<String>,
    pub standings_epoch: u64,
    pub matches: Vec<MatchRecord>,
    pub matches_error: Option<String>,
    pub matches_epoch: u64,
    pub view: ViewState,
    pub config: Config,
    pub last_refresh: Option<SystemTime>,
}

impl SharedData {
    pub fn with_config(config: Config) -> Self {
        let view = ViewState::new(config.default_competition);
        SharedData {
            standings: Vec::new(),
            standings_error: None,
            standings_epoch: 0,
            matches: Vec::new(),
            matches_error: None,
            matches_epoch: 0,
            view,
            config,
            last_refresh: None,
        }
    }
}

impl Default for SharedData {
    fn default() -> Self {
        SharedData::with_config(Config::default())
    }
}

pub type SharedDataHandle = Arc<RwLock<SharedData>>;

pub fn shared_handle(data: SharedData) -> SharedDataHandle {
    Arc::new(RwLock::new(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_number_round_trip() {
        for tab in [Tab::Standings, Tab::Live, Tab::Settings] {
            assert_eq!(Tab::from_number(tab.number()), Some(tab));
        }
        assert_eq!(Tab::from_number(4), None);
    }

    #[test]
    fn test_tab_next_prev_cycle() {
        assert_eq!(Tab::Standings.next(), Tab::Live);
        assert_eq!(Tab::Live.next(), Tab::Settings);
        assert_eq!(Tab::Settings.next(), Tab::Standings);
        for tab in [Tab::Standings, Tab::Live, Tab::Settings] {
            assert_eq!(tab.next().prev(), tab);
        }
    }

    #[test]
    fn test_competition_selection_is_per_tab() {
        let mut view = ViewState::new(Competition::Eredivisie);
        view.active_tab = Tab::Live;
        view.cycle_competition();
        assert_eq!(view.live_competition, Competition::ChampionsLeague);
        // The standings tab keeps its own selection
        assert_eq!(view.standings_competition, Competition::Eredivisie);

        view.active_tab = Tab::Standings;
        assert_eq!(view.selected_competition(), Competition::Eredivisie);
    }
}
