//! Mode selection menu.

use super::game_common::render_status_bar;
use crate::app::{App, Totals};
use crate::quiz::GameMode;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

/// Badge text shown once at least one game has been played.
pub fn totals_badge(totals: Totals) -> Option<String> {
    if totals.games_played == 0 {
        return None;
    }
    Some(format!(
        "⭐ {} stars | 🎮 {} games",
        totals.cumulative_score, totals.games_played
    ))
}

pub fn render_menu(frame: &mut Frame, area: Rect, app: &App) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Fun Learning ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(5),    // Mode list
            Constraint::Length(2), // Status bar
        ])
        .split(inner);

    render_header(frame, chunks[0], app.totals());

    let items: Vec<ListItem> = GameMode::ALL
        .iter()
        .enumerate()
        .map(|(i, mode)| {
            let selected = i == app.menu_index();
            let prefix = if selected { "> " } else { "  " };
            let title_style = if selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(format!("{}{}. ", prefix, i + 1), title_style),
                    Span::styled(format!("{} {}", mode.icon(), mode.title()), title_style),
                ]),
                Line::from(Span::styled(
                    format!("      {}", mode.subtitle()),
                    Style::default().fg(Color::DarkGray),
                )),
            ])
        })
        .collect();
    frame.render_widget(List::new(items), chunks[1]);

    render_status_bar(
        frame,
        chunks[2],
        "Pick a game!",
        Color::Cyan,
        &[("[↑/↓]", "Move"), ("[Enter/1-5]", "Play"), ("[Q]", "Quit")],
    );
}

fn render_header(frame: &mut Frame, area: Rect, totals: Totals) {
    let mut lines = vec![Line::from(Span::styled(
        "🌟 Let's play and learn! 🌟",
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
    ))];
    if let Some(badge) = totals_badge(totals) {
        lines.push(Line::from(Span::styled(
            badge,
            Style::default().fg(Color::Yellow),
        )));
    }
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
