mod app;
mod views;

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use tokio::sync::mpsc;

use crate::background::RefreshRequest;
use crate::credentials::CredentialStore;
use crate::scheduler::RefreshScheduler;
use crate::state::{SharedDataHandle, Tab};
use app::AppState;
use views::{draw_live, draw_settings, draw_standings, draw_status_bar, draw_tab_bar};

const EVENT_POLL_INTERVAL_MS: u64 = 100;

struct Session {
    shared: SharedDataHandle,
    refresh_tx: mpsc::Sender<RefreshRequest>,
    scheduler: RefreshScheduler,
    store: Option<CredentialStore>,
    token_configured: bool,
    refresh_period: Duration,
}

pub async fn run(
    shared: SharedDataHandle,
    refresh_tx: mpsc::Sender<RefreshRequest>,
    store: Option<CredentialStore>,
) -> Result<(), io::Error> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let token_configured = store.as_ref().and_then(|s| s.load()).is_some();
    let refresh_period = {
        let data = shared.read().await;
        Duration::from_secs(data.config.refresh_interval as u64)
    };
    let mut session = Session {
        shared,
        refresh_tx,
        scheduler: RefreshScheduler::new(),
        store,
        token_configured,
        refresh_period,
    };
    let mut app = AppState::new();

    // Main event loop
    loop {
        let snapshot = session.shared.read().await.clone();

        terminal.draw(|f| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(2), // Tab bar
                    Constraint::Min(0),    // Content
                    Constraint::Length(1), // Status bar
                ])
                .split(f.area());

            draw_tab_bar(f, chunks[0], snapshot.view.active_tab);
            match snapshot.view.active_tab {
                Tab::Standings => draw_standings(f, chunks[1], &snapshot),
                Tab::Live => draw_live(f, chunks[1], &snapshot),
                Tab::Settings => {
                    draw_settings(f, chunks[1], &app, session.token_configured)
                }
            }
            draw_status_bar(f, chunks[2], &snapshot);
        })?;

        if event::poll(Duration::from_millis(EVENT_POLL_INTERVAL_MS))? {
            if let Event::Key(key) = event::read()? {
                if handle_key_event(key, &mut app, &mut session).await {
                    break;
                }
            }
        }
    }

    session.scheduler.stop();

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}

/// Switch the active tab, keeping the timer invariant: the scheduler polls
/// if and only if the live tab is active.
async fn switch_tab(session: &mut Session, tab: Tab) {
    {
        let mut data = session.shared.write().await;
        if data.view.active_tab == tab {
            return;
        }
        data.view.active_tab = tab;
    }

    match tab {
        Tab::Live => {
            session.scheduler.start(
                session.refresh_period,
                session.shared.clone(),
                session.refresh_tx.clone(),
            );
            let _ = session.refresh_tx.send(RefreshRequest::Live).await;
        }
        Tab::Standings => {
            session.scheduler.stop();
            let _ = session.refresh_tx.send(RefreshRequest::Standings).await;
        }
        Tab::Settings => {
            session.scheduler.stop();
        }
    }
}

/// Request a refresh of whichever view is active
async fn refresh_active_view(session: &Session) {
    let tab = session.shared.read().await.view.active_tab;
    let request = match tab {
        Tab::Standings | Tab::Settings => RefreshRequest::Standings,
        Tab::Live => RefreshRequest::Live,
    };
    let _ = session.refresh_tx.send(request).await;
}

async fn save_token(app: &mut AppState, session: &mut Session) {
    let input = app.take_input();
    let Some(store) = session.store.as_ref() else {
        app.notify("No config directory available, token not saved");
        return;
    };
    match store.save(&input) {
        Ok(credential) => {
            session.token_configured = true;
            let _ = session
                .refresh_tx
                .send(RefreshRequest::UpdateToken(credential))
                .await;
            app.notify("API token saved");
            refresh_active_view(session).await;
        }
        Err(e) => app.notify(e.to_string()),
    }
}

async fn handle_key_event(key: KeyEvent, app: &mut AppState, session: &mut Session) -> bool {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    let active_tab = session.shared.read().await.view.active_tab;

    // The settings tab captures printable keys for the token field
    if active_tab == Tab::Settings {
        match key.code {
            KeyCode::Char(c) => app.push_input(c),
            KeyCode::Backspace => app.pop_input(),
            KeyCode::Enter => save_token(app, session).await,
            KeyCode::Esc => switch_tab(session, Tab::Standings).await,
            KeyCode::Left => switch_tab(session, active_tab.prev()).await,
            KeyCode::Right => switch_tab(session, active_tab.next()).await,
            _ => {}
        }
        return false;
    }

    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('1') => switch_tab(session, Tab::Standings).await,
        KeyCode::Char('2') => switch_tab(session, Tab::Live).await,
        KeyCode::Char('3') => switch_tab(session, Tab::Settings).await,
        KeyCode::Left => switch_tab(session, active_tab.prev()).await,
        KeyCode::Right => switch_tab(session, active_tab.next()).await,
        KeyCode::Char('c') => {
            session.shared.write().await.view.cycle_competition();
            refresh_active_view(session).await;
        }
        KeyCode::Char('r') => refresh_active_view(session).await,
        _ => {}
    }
    false
}
