//! Draw functions for the three tabs, the tab bar and the status bar.
//! Each consumes the structured content the pure renderer produced.

use chrono::{DateTime, Local};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use super::app::AppState;
use crate::render::{render_matches, render_standings, MatchesContent, StandingsContent};
use crate::state::{SharedData, Tab};

const LOADING_STANDINGS: &str = "Loading standings...";
const LOADING_MATCHES: &str = "Loading live scores...";

pub fn draw_tab_bar(f: &mut Frame, area: Rect, active: Tab) {
    let mut spans = Vec::new();
    for tab in [Tab::Standings, Tab::Live, Tab::Settings] {
        let label = format!(" {}:{} ", tab.number(), tab.label());
        let style = if tab == active {
            Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default()
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }
    let bar = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(bar, area);
}

pub fn draw_status_bar(f: &mut Frame, area: Rect, data: &SharedData) {
    let refreshed = match data.last_refresh {
        Some(at) => {
            let local: DateTime<Local> = at.into();
            format!(
                "Last updated: {}",
                local.format(&data.config.time_format)
            )
        }
        None => "Not refreshed yet".to_string(),
    };
    let hints = "q quit · ←/→ tabs · c competition · r refresh";
    let line = Line::from(vec![
        Span::raw(refreshed),
        Span::raw("  │  "),
        Span::styled(hints, Style::default().fg(Color::DarkGray)),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn draw_message(f: &mut Frame, area: Rect, message: &str, style: Style) {
    let paragraph = Paragraph::new(message.to_string())
        .style(style)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn draw_error(f: &mut Frame, area: Rect, message: &str) {
    draw_message(f, area, message, Style::default().fg(Color::Red));
}

pub fn draw_standings(f: &mut Frame, area: Rect, data: &SharedData) {
    let title = format!(" {} ", data.view.selected_competition().name());

    if let Some(error) = &data.standings_error {
        draw_error(f, area, error);
        return;
    }
    if data.standings.is_empty() && data.last_refresh.is_none() {
        draw_message(f, area, LOADING_STANDINGS, Style::default());
        return;
    }

    let table = match render_standings(&data.standings) {
        StandingsContent::Table(table) => table,
        StandingsContent::NoData => {
            draw_message(
                f,
                area,
                crate::render::NO_STANDINGS_MESSAGE,
                Style::default(),
            );
            return;
        }
    };

    let header = Row::new(table.headers.iter().map(|h| Cell::from(*h)))
        .style(Style::default().add_modifier(Modifier::BOLD));
    let rows = table
        .rows
        .iter()
        .map(|row| Row::new(row.iter().map(|cell| Cell::from(cell.as_str()))));

    let widths = [
        Constraint::Length(4),
        Constraint::Min(20),
        Constraint::Length(4),
        Constraint::Length(4),
        Constraint::Length(4),
        Constraint::Length(4),
        Constraint::Length(5),
    ];
    let widget = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(widget, area);
}

pub fn draw_live(f: &mut Frame, area: Rect, data: &SharedData) {
    let title = format!(" {} ", data.view.selected_competition().name());

    if let Some(error) = &data.matches_error {
        draw_error(f, area, error);
        return;
    }
    if data.matches.is_empty() && data.last_refresh.is_none() {
        draw_message(f, area, LOADING_MATCHES, Style::default());
        return;
    }

    let cards = match render_matches(&data.matches) {
        MatchesContent::Cards(cards) => cards,
        MatchesContent::NoData => {
            draw_message(f, area, crate::render::NO_MATCHES_MESSAGE, Style::default());
            return;
        }
    };

    let mut lines = Vec::new();
    for card in &cards {
        let status_style = Style::default()
            .fg(data.config.theme.status_fg(card.style))
            .add_modifier(Modifier::BOLD);
        lines.push(Line::from(vec![
            Span::raw(card.kickoff_label.clone()),
            Span::raw("  "),
            Span::styled(card.status_label.clone(), status_style),
        ]));
        lines.push(Line::from(format!(
            "  {}  {}  {}",
            card.home_team, card.score_line, card.away_team
        )));
        lines.push(Line::raw(""));
    }

    let widget =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(widget, area);
}

pub fn draw_settings(
    f: &mut Frame,
    area: Rect,
    app: &AppState,
    token_configured: bool,
) {
    let token_state = if token_configured {
        "configured"
    } else {
        "not configured"
    };

    let mut lines = vec![
        Line::raw(format!("API token: {}", token_state)),
        Line::raw(""),
        Line::raw(format!("New token: {}_", app.token_input)),
        Line::raw(""),
        Line::from(Span::styled(
            "type to edit · Enter save · Esc back",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    if let Some(notice) = &app.settings_notice {
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            notice.clone(),
            Style::default().fg(Color::Yellow),
        )));
    }

    let widget =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Settings "));
    f.render_widget(widget, area);
}
