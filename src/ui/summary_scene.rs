//! End-of-session screen.

use super::game_common::centered_rect;
use crate::app::{SessionSummary, Totals};
use crate::constants::SUMMARY_STAR_CAP;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// One star per point, capped so long sessions still fit.
pub fn star_row(score: u32) -> String {
    "⭐".repeat(score.min(SUMMARY_STAR_CAP) as usize)
}

pub fn score_line(summary: &SessionSummary) -> String {
    format!(
        "You got {} out of {} right!",
        summary.score, summary.total_rounds
    )
}

pub fn render_summary(
    frame: &mut Frame,
    area: Rect,
    summary: Option<&SessionSummary>,
    totals: Totals,
) {
    frame.render_widget(Clear, area);

    let modal = centered_rect(area, 50, 13);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .title(" 🏆 ");
    let inner = block.inner(modal);
    frame.render_widget(block, modal);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Awesome Job!",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    if let Some(summary) = summary {
        lines.push(Line::from(Span::styled(
            format!("{} {}", summary.mode.icon(), summary.mode.title()),
            Style::default().fg(Color::Cyan),
        )));
        lines.push(Line::from(Span::styled(
            score_line(summary),
            Style::default().fg(Color::White),
        )));
        lines.push(Line::from(star_row(summary.score)));
    }

    lines.push(Line::from(Span::styled(
        format!("Total stars: {}", totals.cumulative_score),
        Style::default().fg(Color::Yellow),
    )));

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[Press any key to play more]",
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}
