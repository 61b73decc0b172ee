//! Quiz core: game modes, question generation and the per-session state machine.

pub mod data;
pub mod generation;
pub mod mode;
pub mod session;
pub mod shuffle;
pub mod types;

pub use generation::{generate_options, generate_questions};
pub use mode::GameMode;
pub use session::{
    AdvanceOutcome, Feedback, QuizSession, Round, SessionId, SessionPhase, SubmitOutcome,
};
pub use shuffle::shuffle;
pub use types::{
    check_answer, Answer, ColorQuestion, CountingQuestion, FindItQuestion, MathQuestion, Operator,
    Question, ShapeQuestion,
};
