//! In-game screen: prompt, options, feedback.

use super::game_common::{
    create_game_layout, progress_dots, render_info_panel_frame, render_status_bar,
};
use crate::quiz::{Answer, Feedback, Question, QuizSession};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// How an option button should look right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionState {
    Normal,
    Highlighted,
    /// The right answer, revealed after a submit.
    Correct,
    /// The player's wrong pick.
    Wrong,
    /// Any other option while feedback is showing.
    Dimmed,
}

impl OptionState {
    fn style(self) -> Style {
        match self {
            OptionState::Normal => Style::default().fg(Color::White),
            OptionState::Highlighted => Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            OptionState::Correct => Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            OptionState::Wrong => Style::default().fg(Color::Red),
            OptionState::Dimmed => Style::default().fg(Color::DarkGray),
        }
    }
}

pub fn option_state(
    answer: Answer,
    index: usize,
    cursor: usize,
    feedback: Option<&Feedback>,
) -> OptionState {
    match feedback {
        None if index == cursor => OptionState::Highlighted,
        None => OptionState::Normal,
        Some(f) if answer == f.correct_answer => OptionState::Correct,
        Some(f) if answer == f.selected => OptionState::Wrong,
        Some(_) => OptionState::Dimmed,
    }
}

/// Praise on a correct pick, the reveal otherwise.
pub fn feedback_text(question: &Question, feedback: &Feedback) -> String {
    if feedback.correct {
        question.praise().to_string()
    } else {
        question.reveal()
    }
}

fn repeat_emoji(emoji: &str, n: u32) -> String {
    vec![emoji; n as usize].join(" ")
}

/// The picture part of the prompt for each question kind.
pub fn prompt_visual(question: &Question) -> Vec<Line<'static>> {
    match question {
        Question::FindIt(q) => vec![Line::from(Span::styled(
            q.word.to_uppercase(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))],
        Question::Counting(q) => {
            // Rows of five keep larger counts readable.
            let emojis: Vec<&str> = vec![q.emoji; q.count as usize];
            emojis
                .chunks(5)
                .map(|row| Line::from(row.join(" ")))
                .collect()
        }
        Question::Color(q) => {
            let (r, g, b) = q.rgb();
            let style = Style::default().fg(Color::Rgb(r, g, b));
            vec![
                Line::from(Span::styled(q.glyph.repeat(5), style)),
                Line::from(Span::styled(q.glyph.repeat(5), style)),
            ]
        }
        Question::Shape(q) => vec![Line::from(Span::styled(
            q.glyph,
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
        ))],
        Question::Math(q) => vec![Line::from(vec![
            Span::raw(repeat_emoji(q.emoji, q.num1)),
            Span::styled(
                format!("  {}  ", q.operator.symbol()),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(repeat_emoji(q.emoji, q.num2)),
        ])],
    }
}

pub fn render_quiz(frame: &mut Frame, area: Rect, session: &QuizSession, cursor: usize) {
    let mode = session.mode();
    let title = format!(" {} {} ", mode.icon(), mode.title());
    let layout = create_game_layout(frame, area, &title, Color::Cyan, 10, 24);

    let question = session.current_question();
    let feedback = session.feedback();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Prompt text
            Constraint::Min(3),    // Visual
            Constraint::Length(3), // Options
            Constraint::Length(1), // Feedback
        ])
        .split(layout.content);

    let prompt = Paragraph::new(question.prompt())
        .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(prompt, chunks[0]);

    let visual = Paragraph::new(prompt_visual(question))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    frame.render_widget(visual, chunks[1]);

    render_options(frame, chunks[2], question, cursor, feedback.as_ref());

    if let Some(f) = feedback.as_ref() {
        let color = if f.correct { Color::Green } else { Color::LightRed };
        let text = Paragraph::new(feedback_text(question, f))
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        frame.render_widget(text, chunks[3]);
    }

    let (status, color) = match feedback {
        Some(_) => ("Get ready for the next one...", Color::DarkGray),
        None => ("Pick an answer!", Color::Cyan),
    };
    render_status_bar(
        frame,
        layout.status_bar,
        status,
        color,
        &[("[←/→]", "Move"), ("[Enter/1-3]", "Pick"), ("[Esc]", "Menu")],
    );

    render_info(frame, layout.info_panel, session);
}

fn render_options(
    frame: &mut Frame,
    area: Rect,
    question: &Question,
    cursor: usize,
    feedback: Option<&Feedback>,
) {
    let options = question.options();
    if options.is_empty() {
        return;
    }
    let constraints = vec![Constraint::Ratio(1, options.len() as u32); options.len()];
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (i, (answer, cell)) in options.iter().zip(cells.iter()).enumerate() {
        let state = option_state(*answer, i, cursor, feedback);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(state.style());
        let button = Paragraph::new(format!("{}  {}", i + 1, answer))
            .style(state.style())
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(button, *cell);
    }
}

fn render_info(frame: &mut Frame, area: Rect, session: &QuizSession) {
    let inner = render_info_panel_frame(frame, area, " Progress ");
    let round = (session.round_index() + 1).min(session.total_rounds());
    let lines = vec![
        Line::from(Span::styled(
            format!("Round {}/{}", round, session.total_rounds()),
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            progress_dots(round, session.total_rounds()),
            Style::default().fg(Color::Cyan),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("⭐ {}", session.score()),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::{CountingQuestion, MathQuestion, Operator};

    fn counting() -> Question {
        Question::Counting(CountingQuestion {
            emoji: "🐟",
            count: 7,
            options: vec![5, 7, 8],
        })
    }

    fn feedback(selected: u32, correct: bool) -> Feedback {
        Feedback {
            selected: Answer::Number(selected),
            correct,
            correct_answer: Answer::Number(7),
            score_before: 0,
        }
    }

    #[test]
    fn test_option_state_before_feedback() {
        assert_eq!(
            option_state(Answer::Number(5), 0, 0, None),
            OptionState::Highlighted
        );
        assert_eq!(
            option_state(Answer::Number(7), 1, 0, None),
            OptionState::Normal
        );
    }

    #[test]
    fn test_option_state_after_wrong_pick() {
        let f = feedback(5, false);
        assert_eq!(
            option_state(Answer::Number(5), 0, 0, Some(&f)),
            OptionState::Wrong
        );
        assert_eq!(
            option_state(Answer::Number(7), 1, 0, Some(&f)),
            OptionState::Correct
        );
        assert_eq!(
            option_state(Answer::Number(8), 2, 0, Some(&f)),
            OptionState::Dimmed
        );
    }

    #[test]
    fn test_feedback_text() {
        let q = counting();
        assert_eq!(feedback_text(&q, &feedback(7, true)), "🎉 Correct!");
        assert_eq!(feedback_text(&q, &feedback(5, false)), "There are 7!");
    }

    #[test]
    fn test_counting_visual_rows_of_five() {
        let lines = prompt_visual(&counting());
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_math_visual_has_operator() {
        let q = Question::Math(MathQuestion {
            num1: 4,
            num2: 1,
            operator: Operator::Subtract,
            answer: 3,
            emoji: "🍓",
            options: vec![2, 3, 5],
        });
        let lines = prompt_visual(&q);
        let text: String = lines[0].spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.contains('−'));
        assert_eq!(text.matches("🍓").count(), 5);
    }
}
