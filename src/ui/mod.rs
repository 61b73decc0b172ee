pub mod celebration;
pub mod game_common;
pub mod menu_scene;
pub mod quiz_scene;
pub mod summary_scene;

use crate::app::{App, Screen};
use celebration::Celebrations;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

/// Smallest terminal the screens lay out in.
const MIN_WIDTH: u16 = 50;
const MIN_HEIGHT: u16 = 16;

/// Draw the current screen plus any running celebration effects.
pub fn draw(frame: &mut Frame, app: &App, celebrations: &Celebrations) {
    let area = frame.size();

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        draw_too_small(frame, area);
        return;
    }

    match app.screen() {
        Screen::Menu => menu_scene::render_menu(frame, area, app),
        Screen::InGame(_) => match app.session() {
            Some(session) => quiz_scene::render_quiz(frame, area, session, app.option_cursor()),
            None => menu_scene::render_menu(frame, area, app),
        },
        Screen::Summary => summary_scene::render_summary(
            frame,
            area,
            app.last_summary().as_ref(),
            app.totals(),
        ),
    }

    celebrations.render(frame, area);
}

fn draw_too_small(frame: &mut Frame, area: Rect) {
    let text = Paragraph::new(format!(
        "Make the window a bit bigger ({}x{})",
        MIN_WIDTH, MIN_HEIGHT
    ))
    .style(Style::default().fg(Color::Yellow))
    .alignment(Alignment::Center);
    frame.render_widget(text, area);
}
