//! Top-level application state: screen flow, totals, and the feedback timer.
//!
//! The presentation layer reads from `App` and feeds it inputs and elapsed time.
//! Nothing here touches the terminal.

use crate::config::QuizConfig;
use crate::error::QuizError;
use crate::quiz::{
    generate_questions, AdvanceOutcome, Answer, GameMode, Question, QuizSession, SessionId,
    SubmitOutcome,
};
use rand::Rng;
use std::time::Duration;

/// Which top-level screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    InGame(GameMode),
    Summary,
}

/// Process-lifetime totals across completed sessions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub cumulative_score: u32,
    pub games_played: u32,
}

impl Totals {
    /// Fold one completed session into the totals.
    pub fn record_session(&mut self, final_score: u32) {
        self.cumulative_score += final_score;
        self.games_played += 1;
    }
}

/// Signals for the celebration effects. No payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Celebration {
    /// A correct answer.
    Minor,
    /// A finished session.
    Major,
}

/// Outcome of the most recently completed session, for the summary screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub mode: GameMode,
    pub score: u32,
    pub total_rounds: usize,
}

/// A delayed `advance()` for one specific session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledAdvance {
    pub session_id: SessionId,
    pub remaining: Duration,
}

#[derive(Debug, Clone)]
pub struct App {
    config: QuizConfig,
    screen: Screen,
    totals: Totals,
    menu_index: usize,
    option_cursor: usize,
    session: Option<QuizSession>,
    scheduled: Option<ScheduledAdvance>,
    next_session_id: u64,
    celebrations: Vec<Celebration>,
    last_summary: Option<SessionSummary>,
}

impl Default for App {
    fn default() -> Self {
        Self::new(QuizConfig::default())
    }
}

impl App {
    pub fn new(config: QuizConfig) -> Self {
        Self {
            config,
            screen: Screen::Menu,
            totals: Totals::default(),
            menu_index: 0,
            option_cursor: 0,
            session: None,
            scheduled: None,
            next_session_id: 1,
            celebrations: Vec::new(),
            last_summary: None,
        }
    }

    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn totals(&self) -> Totals {
        self.totals
    }

    pub fn session(&self) -> Option<&QuizSession> {
        self.session.as_ref()
    }

    pub fn scheduled(&self) -> Option<ScheduledAdvance> {
        self.scheduled
    }

    pub fn last_summary(&self) -> Option<SessionSummary> {
        self.last_summary
    }

    pub fn menu_index(&self) -> usize {
        self.menu_index
    }

    pub fn selected_mode(&self) -> GameMode {
        GameMode::from_index(self.menu_index).unwrap_or(GameMode::FindIt)
    }

    pub fn option_cursor(&self) -> usize {
        self.option_cursor
    }

    // ── Menu ────────────────────────────────────────────────────────────

    pub fn menu_up(&mut self) {
        if self.menu_index > 0 {
            self.menu_index -= 1;
        }
    }

    pub fn menu_down(&mut self) {
        if self.menu_index + 1 < GameMode::ALL.len() {
            self.menu_index += 1;
        }
    }

    /// Start a new session for `mode`. Only honoured from the menu or summary.
    /// Returns `Ok(false)` when a game is already running.
    pub fn select_mode<R: Rng + ?Sized>(
        &mut self,
        mode: GameMode,
        rng: &mut R,
    ) -> Result<bool, QuizError> {
        if matches!(self.screen, Screen::InGame(_)) {
            return Ok(false);
        }
        let questions = generate_questions(mode, &self.config, rng)?;
        self.start_session(mode, questions)?;
        Ok(true)
    }

    /// Start a session on an already built question list.
    pub fn start_session(
        &mut self,
        mode: GameMode,
        questions: Vec<Question>,
    ) -> Result<(), QuizError> {
        let id = SessionId(self.next_session_id);
        self.next_session_id += 1;
        let session = QuizSession::new(id, mode, questions)?;

        log::info!(
            "session {} started: {} ({} rounds)",
            id.0,
            mode.id(),
            session.total_rounds()
        );

        self.session = Some(session);
        self.scheduled = None;
        self.option_cursor = 0;
        self.menu_index = mode.index();
        self.screen = Screen::InGame(mode);
        Ok(())
    }

    /// Discard any running session and show the menu. A pending advance is cancelled.
    pub fn back_to_menu(&mut self) {
        if let Some(session) = self.session.take() {
            log::info!(
                "session {} abandoned at round {}",
                session.id().0,
                session.round_index() + 1
            );
        }
        self.scheduled = None;
        self.option_cursor = 0;
        self.screen = Screen::Menu;
    }

    // ── In game ─────────────────────────────────────────────────────────

    pub fn cursor_left(&mut self) {
        if self.accepts_answer() && self.option_cursor > 0 {
            self.option_cursor -= 1;
        }
    }

    pub fn cursor_right(&mut self) {
        let count = self
            .session
            .as_ref()
            .map_or(0, |s| s.current_question().option_count());
        if self.accepts_answer() && self.option_cursor + 1 < count {
            self.option_cursor += 1;
        }
    }

    fn accepts_answer(&self) -> bool {
        matches!(self.screen, Screen::InGame(_))
            && self.session.as_ref().is_some_and(|s| s.is_awaiting_answer())
    }

    /// Submit an answer for the active session and schedule the advance.
    pub fn submit_answer(&mut self, answer: Answer) -> SubmitOutcome {
        if !matches!(self.screen, Screen::InGame(_)) {
            return SubmitOutcome::Ignored;
        }
        let Some(session) = self.session.as_mut() else {
            return SubmitOutcome::Ignored;
        };

        let outcome = session.submit_answer(answer);
        if let SubmitOutcome::Answered { correct } = outcome {
            log::debug!(
                "session {} round {}: {} ({})",
                session.id().0,
                session.round_index() + 1,
                answer,
                if correct { "correct" } else { "wrong" }
            );
            if correct {
                self.celebrations.push(Celebration::Minor);
            }
            self.scheduled = Some(ScheduledAdvance {
                session_id: session.id(),
                remaining: self.config.feedback_delay(),
            });
        }
        outcome
    }

    /// Submit the option at `index` of the current question.
    pub fn submit_option(&mut self, index: usize) -> SubmitOutcome {
        let answer = self
            .session
            .as_ref()
            .and_then(|s| s.current_question().option_at(index));
        match answer {
            Some(answer) => {
                self.option_cursor = index;
                self.submit_answer(answer)
            }
            None => SubmitOutcome::Ignored,
        }
    }

    /// Submit the option under the cursor.
    pub fn submit_cursor(&mut self) -> SubmitOutcome {
        self.submit_option(self.option_cursor)
    }

    /// Let time pass. Fires the scheduled advance once its delay has elapsed.
    pub fn tick(&mut self, elapsed: Duration) {
        let Some(mut scheduled) = self.scheduled else {
            return;
        };
        scheduled.remaining = scheduled.remaining.saturating_sub(elapsed);
        if scheduled.remaining.is_zero() {
            self.scheduled = None;
            self.run_scheduled_advance(scheduled.session_id);
        } else {
            self.scheduled = Some(scheduled);
        }
    }

    /// Apply a delayed advance. A no-op unless `session_id` is still the active session.
    pub fn run_scheduled_advance(&mut self, session_id: SessionId) -> AdvanceOutcome {
        let Some(session) = self.session.as_mut() else {
            return AdvanceOutcome::Ignored;
        };
        if session.id() != session_id {
            log::debug!("dropping stale advance for session {}", session_id.0);
            return AdvanceOutcome::Ignored;
        }

        let outcome = session.advance();
        match outcome {
            AdvanceOutcome::NextRound(_) => self.option_cursor = 0,
            AdvanceOutcome::Completed { final_score } => self.complete_session(final_score),
            AdvanceOutcome::Ignored => {}
        }
        outcome
    }

    /// Completion callback: fold the score into totals and show the summary.
    fn complete_session(&mut self, final_score: u32) {
        let Some(session) = self.session.take() else {
            return;
        };

        self.totals.record_session(final_score);
        self.last_summary = Some(SessionSummary {
            mode: session.mode(),
            score: final_score,
            total_rounds: session.total_rounds(),
        });
        self.celebrations.push(Celebration::Major);
        self.scheduled = None;
        self.option_cursor = 0;
        self.screen = Screen::Summary;

        log::info!(
            "session {} complete: {}/{} (totals: {} stars, {} games)",
            session.id().0,
            final_score,
            session.total_rounds(),
            self.totals.cumulative_score,
            self.totals.games_played
        );
    }

    // ── Summary ─────────────────────────────────────────────────────────

    pub fn dismiss_summary(&mut self) {
        if self.screen == Screen::Summary {
            self.screen = Screen::Menu;
        }
    }

    /// Drain pending celebration signals.
    pub fn take_celebrations(&mut self) -> Vec<Celebration> {
        std::mem::take(&mut self.celebrations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn seeded_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    fn delay() -> Duration {
        QuizConfig::default().feedback_delay()
    }

    fn correct_answer(app: &App) -> Answer {
        app.session().unwrap().current_question().correct_answer()
    }

    #[test]
    fn test_starts_on_menu() {
        let app = App::default();
        assert_eq!(app.screen(), Screen::Menu);
        assert_eq!(app.totals(), Totals::default());
        assert!(app.session().is_none());
    }

    #[test]
    fn test_menu_navigation_clamped() {
        let mut app = App::default();
        app.menu_up();
        assert_eq!(app.menu_index(), 0);
        for _ in 0..10 {
            app.menu_down();
        }
        assert_eq!(app.menu_index(), 4);
        assert_eq!(app.selected_mode(), GameMode::Math);
    }

    #[test]
    fn test_select_mode_starts_session() {
        let mut app = App::default();
        let mut rng = seeded_rng();
        assert!(app.select_mode(GameMode::Shapes, &mut rng).unwrap());
        assert_eq!(app.screen(), Screen::InGame(GameMode::Shapes));
        let session = app.session().unwrap();
        assert_eq!(session.total_rounds(), 8);
        assert_eq!(session.mode(), GameMode::Shapes);
    }

    #[test]
    fn test_select_mode_ignored_in_game() {
        let mut app = App::default();
        let mut rng = seeded_rng();
        app.select_mode(GameMode::Shapes, &mut rng).unwrap();
        let id = app.session().unwrap().id();
        assert!(!app.select_mode(GameMode::Math, &mut rng).unwrap());
        assert_eq!(app.session().unwrap().id(), id);
    }

    #[test]
    fn test_correct_answer_queues_minor_celebration_and_schedules() {
        let mut app = App::default();
        let mut rng = seeded_rng();
        app.select_mode(GameMode::Colors, &mut rng).unwrap();
        let answer = correct_answer(&app);
        assert_eq!(
            app.submit_answer(answer),
            SubmitOutcome::Answered { correct: true }
        );
        assert_eq!(app.take_celebrations(), vec![Celebration::Minor]);
        assert!(app.take_celebrations().is_empty());
        let scheduled = app.scheduled().unwrap();
        assert_eq!(scheduled.remaining, delay());
    }

    #[test]
    fn test_tick_before_delay_keeps_feedback() {
        let mut app = App::default();
        let mut rng = seeded_rng();
        app.select_mode(GameMode::Colors, &mut rng).unwrap();
        app.submit_answer(correct_answer(&app));
        app.tick(Duration::from_millis(1000));
        let session = app.session().unwrap();
        assert!(session.feedback().is_some());
        assert_eq!(session.round_index(), 0);
        app.tick(Duration::from_millis(500));
        let session = app.session().unwrap();
        assert!(session.feedback().is_none());
        assert_eq!(session.round_index(), 1);
    }

    #[test]
    fn test_back_to_menu_cancels_pending_advance() {
        let mut app = App::default();
        let mut rng = seeded_rng();
        app.select_mode(GameMode::FindIt, &mut rng).unwrap();
        app.submit_answer(correct_answer(&app));
        app.back_to_menu();
        assert!(app.scheduled().is_none());
        assert!(app.session().is_none());
        app.tick(delay());
        assert_eq!(app.screen(), Screen::Menu);
        assert_eq!(app.totals(), Totals::default());
    }

    #[test]
    fn test_stale_advance_is_noop() {
        let mut app = App::default();
        let mut rng = seeded_rng();
        app.select_mode(GameMode::FindIt, &mut rng).unwrap();
        let old_id = app.session().unwrap().id();
        app.back_to_menu();
        app.select_mode(GameMode::FindIt, &mut rng).unwrap();
        app.submit_answer(correct_answer(&app));

        assert_eq!(app.run_scheduled_advance(old_id), AdvanceOutcome::Ignored);
        assert!(app.session().unwrap().feedback().is_some());
    }

    #[test]
    fn test_cursor_moves_within_options() {
        let mut app = App::default();
        let mut rng = seeded_rng();
        app.select_mode(GameMode::Math, &mut rng).unwrap();
        app.cursor_left();
        assert_eq!(app.option_cursor(), 0);
        for _ in 0..5 {
            app.cursor_right();
        }
        assert_eq!(app.option_cursor(), 2);
    }

    #[test]
    fn test_submit_outside_game_ignored() {
        let mut app = App::default();
        assert_eq!(app.submit_answer(Answer::Number(1)), SubmitOutcome::Ignored);
        assert!(app.scheduled().is_none());
    }

    #[test]
    fn test_totals_record_session() {
        let mut totals = Totals::default();
        totals.record_session(6);
        totals.record_session(8);
        assert_eq!(totals.cumulative_score, 14);
        assert_eq!(totals.games_played, 2);
    }

    #[test]
    fn test_dismiss_summary_only_from_summary() {
        let mut app = App::default();
        let mut rng = seeded_rng();
        app.select_mode(GameMode::Counting, &mut rng).unwrap();
        app.dismiss_summary();
        assert_eq!(app.screen(), Screen::InGame(GameMode::Counting));
    }
}
