//! Round-by-round state for one play-through of a game mode.
//!
//! A session moves `AwaitingAnswer -> ShowingFeedback -> AwaitingAnswer ...`
//! and ends in `Completed`. Timing lives with the caller: after a submit it
//! schedules `advance()` once the feedback delay has passed.

use super::types::{Answer, Question};
use super::GameMode;
use crate::error::QuizError;

/// Identifies a session so a delayed advance can tell whether it is stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(pub u64);

/// What the player picked for the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback {
    pub selected: Answer,
    pub correct: bool,
    pub correct_answer: Answer,
    /// Score before this round was answered.
    pub score_before: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    AwaitingAnswer,
    ShowingFeedback(Feedback),
    Completed { final_score: u32 },
}

/// One question and, once answered, the player's pick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub question: Question,
    pub submitted: Option<Answer>,
}

impl Round {
    pub fn new(question: Question) -> Self {
        Self {
            question,
            submitted: None,
        }
    }

    pub fn is_answered(&self) -> bool {
        self.submitted.is_some()
    }

    /// `None` until answered.
    pub fn is_correct(&self) -> Option<bool> {
        self.submitted.map(|a| self.question.check_answer(&a))
    }
}

/// Result of `submit_answer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Not waiting for an answer (feedback showing, or finished).
    Ignored,
    Answered { correct: bool },
}

/// Result of `advance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// Nothing to advance from.
    Ignored,
    NextRound(usize),
    Completed { final_score: u32 },
}

#[derive(Debug, Clone)]
pub struct QuizSession {
    id: SessionId,
    mode: GameMode,
    rounds: Vec<Round>,
    round_index: usize,
    score: u32,
    phase: SessionPhase,
}

impl QuizSession {
    /// Start a session on a freshly generated question list.
    pub fn new(id: SessionId, mode: GameMode, questions: Vec<Question>) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::EmptySession);
        }
        Ok(Self {
            id,
            mode,
            rounds: questions.into_iter().map(Round::new).collect(),
            round_index: 0,
            score: 0,
            phase: SessionPhase::AwaitingAnswer,
        })
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn round_index(&self) -> usize {
        self.round_index
    }

    pub fn total_rounds(&self) -> usize {
        self.rounds.len()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    pub fn is_completed(&self) -> bool {
        matches!(self.phase, SessionPhase::Completed { .. })
    }

    pub fn is_awaiting_answer(&self) -> bool {
        matches!(self.phase, SessionPhase::AwaitingAnswer)
    }

    /// Feedback for the current round while it is on screen.
    pub fn feedback(&self) -> Option<Feedback> {
        match self.phase {
            SessionPhase::ShowingFeedback(feedback) => Some(feedback),
            _ => None,
        }
    }

    /// The question for the current round. Stays on the last question once completed.
    pub fn current_question(&self) -> &Question {
        let index = self.round_index.min(self.rounds.len() - 1);
        &self.rounds[index].question
    }

    /// Submit an answer for the current round. Only the first submit per round counts.
    pub fn submit_answer(&mut self, answer: Answer) -> SubmitOutcome {
        if !self.is_awaiting_answer() {
            return SubmitOutcome::Ignored;
        }
        let round = &mut self.rounds[self.round_index];
        if round.is_answered() {
            return SubmitOutcome::Ignored;
        }

        let correct = round.question.check_answer(&answer);
        round.submitted = Some(answer);

        let score_before = self.score;
        if correct {
            self.score += 1;
        }

        self.phase = SessionPhase::ShowingFeedback(Feedback {
            selected: answer,
            correct,
            correct_answer: round.question.correct_answer(),
            score_before,
        });

        SubmitOutcome::Answered { correct }
    }

    /// Submit the option at `index` of the current question.
    pub fn submit_option(&mut self, index: usize) -> SubmitOutcome {
        match self.current_question().option_at(index) {
            Some(answer) => self.submit_answer(answer),
            None => SubmitOutcome::Ignored,
        }
    }

    /// Leave the feedback state: next round, or completion after the last one.
    pub fn advance(&mut self) -> AdvanceOutcome {
        let SessionPhase::ShowingFeedback(feedback) = self.phase else {
            return AdvanceOutcome::Ignored;
        };

        if self.round_index + 1 >= self.rounds.len() {
            // Computed from the feedback snapshot, not from the running counter.
            let final_score = feedback.score_before + u32::from(feedback.correct);
            self.phase = SessionPhase::Completed { final_score };
            AdvanceOutcome::Completed { final_score }
        } else {
            self.round_index += 1;
            self.phase = SessionPhase::AwaitingAnswer;
            AdvanceOutcome::NextRound(self.round_index)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::types::{CountingQuestion, FindItQuestion};

    fn counting(count: u32, options: Vec<u32>) -> Question {
        Question::Counting(CountingQuestion {
            emoji: "🍎",
            count,
            options,
        })
    }

    fn session(rounds: usize) -> QuizSession {
        let questions = (0..rounds).map(|_| counting(5, vec![3, 5, 7])).collect();
        QuizSession::new(SessionId(1), GameMode::Counting, questions).unwrap()
    }

    #[test]
    fn test_new_session_starts_awaiting() {
        let s = session(8);
        assert_eq!(s.round_index(), 0);
        assert_eq!(s.total_rounds(), 8);
        assert_eq!(s.score(), 0);
        assert!(s.is_awaiting_answer());
        assert!(s.feedback().is_none());
    }

    #[test]
    fn test_empty_session_rejected() {
        let result = QuizSession::new(SessionId(1), GameMode::Counting, Vec::new());
        assert_eq!(result.unwrap_err(), QuizError::EmptySession);
    }

    #[test]
    fn test_correct_answer_scores_and_shows_feedback() {
        let mut s = session(8);
        let outcome = s.submit_answer(Answer::Number(5));
        assert_eq!(outcome, SubmitOutcome::Answered { correct: true });
        assert_eq!(s.score(), 1);
        let feedback = s.feedback().unwrap();
        assert!(feedback.correct);
        assert_eq!(feedback.selected, Answer::Number(5));
        assert_eq!(feedback.correct_answer, Answer::Number(5));
    }

    #[test]
    fn test_wrong_answer_reveals_correct() {
        let mut s = session(8);
        s.submit_answer(Answer::Number(3));
        assert_eq!(s.score(), 0);
        let feedback = s.feedback().unwrap();
        assert!(!feedback.correct);
        assert_eq!(feedback.correct_answer, Answer::Number(5));
    }

    #[test]
    fn test_double_submit_ignored() {
        let mut s = session(8);
        s.submit_answer(Answer::Number(5));
        let second = s.submit_answer(Answer::Number(5));
        assert_eq!(second, SubmitOutcome::Ignored);
        assert_eq!(s.score(), 1);
        assert_eq!(s.round_index(), 0);
    }

    #[test]
    fn test_advance_moves_to_next_round() {
        let mut s = session(8);
        s.submit_answer(Answer::Number(5));
        assert_eq!(s.advance(), AdvanceOutcome::NextRound(1));
        assert!(s.is_awaiting_answer());
        assert!(s.feedback().is_none());
        assert_eq!(s.score(), 1);
    }

    #[test]
    fn test_advance_without_answer_ignored() {
        let mut s = session(3);
        assert_eq!(s.advance(), AdvanceOutcome::Ignored);
        assert_eq!(s.round_index(), 0);
    }

    #[test]
    fn test_advance_twice_only_moves_once() {
        let mut s = session(3);
        s.submit_answer(Answer::Number(5));
        s.advance();
        assert_eq!(s.advance(), AdvanceOutcome::Ignored);
        assert_eq!(s.round_index(), 1);
    }

    #[test]
    fn test_last_round_completes_with_final_score() {
        let mut s = session(3);
        s.submit_answer(Answer::Number(5));
        s.advance();
        s.submit_answer(Answer::Number(3));
        s.advance();
        s.submit_answer(Answer::Number(5));
        assert_eq!(s.advance(), AdvanceOutcome::Completed { final_score: 2 });
        assert!(s.is_completed());
        assert_eq!(s.submit_answer(Answer::Number(5)), SubmitOutcome::Ignored);
        assert_eq!(s.advance(), AdvanceOutcome::Ignored);
    }

    #[test]
    fn test_score_never_exceeds_rounds_seen() {
        let mut s = session(8);
        for i in 0..8 {
            let pick = if i % 3 == 0 { 3 } else { 5 };
            s.submit_answer(Answer::Number(pick));
            assert!(s.score() as usize <= s.round_index() + 1);
            let correct_so_far = s.rounds().iter().filter(|r| r.is_correct() == Some(true)).count();
            assert_eq!(s.score() as usize, correct_so_far);
            s.advance();
        }
        assert!(s.is_completed());
    }

    #[test]
    fn test_submit_option_by_index() {
        let mut s = session(2);
        assert_eq!(s.submit_option(1), SubmitOutcome::Answered { correct: true });
        s.advance();
        assert_eq!(s.submit_option(9), SubmitOutcome::Ignored);
        assert!(s.is_awaiting_answer());
    }

    #[test]
    fn test_text_answers() {
        let q = Question::FindIt(FindItQuestion {
            word: "Dog",
            correct_emoji: "🐶",
            options: vec!["🐱", "🐶", "🐸"],
        });
        let mut s = QuizSession::new(SessionId(9), GameMode::FindIt, vec![q]).unwrap();
        assert_eq!(
            s.submit_answer(Answer::Text("🐸")),
            SubmitOutcome::Answered { correct: false }
        );
        assert_eq!(s.advance(), AdvanceOutcome::Completed { final_score: 0 });
    }
}
