//! Question generation for every game mode.
//!
//! Curated modes (Find It!, Color Quiz, Shape Match) sample their static pools
//! and shuffle each question's options. Counting Fun and Math Fun synthesize
//! questions and add two numeric distractors.

use super::data::{COLOR_POOL, COUNTING_EMOJIS, FIND_IT_POOL, MATH_EMOJIS, SHAPE_POOL};
use super::shuffle::{sample, shuffle};
use super::types::{
    ColorQuestion, CountingQuestion, FindItQuestion, MathQuestion, Operator, Question,
    ShapeQuestion,
};
use super::GameMode;
use crate::config::QuizConfig;
use crate::constants::{
    ADDEND_MAX, COUNT_MAX, COUNT_OPTION_MAX, MATH_OPTION_MAX, MAX_DISTRACTOR_ATTEMPTS,
    OPTIONS_PER_QUESTION, SUBTRACTION_ANSWER_MAX, SUBTRAHEND_MAX,
};
use crate::error::QuizError;
use rand::Rng;

/// Build a fresh question list for `mode` using the configured round count.
pub fn generate_questions<R: Rng + ?Sized>(
    mode: GameMode,
    config: &QuizConfig,
    rng: &mut R,
) -> Result<Vec<Question>, QuizError> {
    let count = config.rounds_per_session;
    if count == 0 {
        return Err(QuizError::EmptySession);
    }

    let questions = match mode {
        GameMode::FindIt => generate_find_it_questions(count, rng),
        GameMode::Counting => generate_counting_questions(count, rng)?,
        GameMode::Colors => generate_color_questions(count, rng),
        GameMode::Shapes => generate_shape_questions(count, rng),
        GameMode::Math => generate_math_questions(count, config.addition_probability, rng)?,
    };
    Ok(questions)
}

/// Draw `count` entries. Within one pass over the pool nothing repeats; a
/// request larger than the pool starts another shuffled pass.
fn draw_from_pool<T: Copy, R: Rng + ?Sized>(pool: &[T], count: usize, rng: &mut R) -> Vec<T> {
    let mut drawn = Vec::with_capacity(count);
    while drawn.len() < count && !pool.is_empty() {
        let remaining = count - drawn.len();
        drawn.extend(sample(pool, remaining, rng));
    }
    drawn
}

pub fn generate_find_it_questions<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Question> {
    draw_from_pool(FIND_IT_POOL, count, rng)
        .into_iter()
        .map(|entry| {
            Question::FindIt(FindItQuestion {
                word: entry.word,
                correct_emoji: entry.correct_emoji,
                options: shuffle(&entry.options, rng),
            })
        })
        .collect()
}

pub fn generate_color_questions<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Question> {
    draw_from_pool(COLOR_POOL, count, rng)
        .into_iter()
        .map(|entry| {
            Question::Color(ColorQuestion {
                color_name: entry.color_name,
                color_hex: entry.color_hex,
                glyph: entry.glyph,
                options: shuffle(&entry.options, rng),
            })
        })
        .collect()
}

pub fn generate_shape_questions<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Question> {
    draw_from_pool(SHAPE_POOL, count, rng)
        .into_iter()
        .map(|entry| {
            Question::Shape(ShapeQuestion {
                shape_name: entry.shape_name,
                glyph: entry.glyph,
                options: shuffle(&entry.options, rng),
            })
        })
        .collect()
}

pub fn generate_counting_questions<R: Rng + ?Sized>(
    count: usize,
    rng: &mut R,
) -> Result<Vec<Question>, QuizError> {
    (0..count)
        .map(|i| {
            let emoji = COUNTING_EMOJIS[i % COUNTING_EMOJIS.len()];
            let quantity = rng.gen_range(1..=COUNT_MAX);
            let options = generate_options(quantity, COUNT_OPTION_MAX, rng)?;
            Ok(Question::Counting(CountingQuestion {
                emoji,
                count: quantity,
                options,
            }))
        })
        .collect()
}

pub fn generate_math_questions<R: Rng + ?Sized>(
    count: usize,
    addition_probability: f64,
    rng: &mut R,
) -> Result<Vec<Question>, QuizError> {
    (0..count)
        .map(|i| {
            let emoji = MATH_EMOJIS[i % MATH_EMOJIS.len()];
            let question = generate_math_question(emoji, addition_probability, rng)?;
            Ok(Question::Math(question))
        })
        .collect()
}

/// One arithmetic question. Subtraction picks the answer first and derives the
/// minuend, so the result can never go negative.
pub fn generate_math_question<R: Rng + ?Sized>(
    emoji: &'static str,
    addition_probability: f64,
    rng: &mut R,
) -> Result<MathQuestion, QuizError> {
    let (num1, num2, operator, answer) = if rng.gen_bool(addition_probability) {
        let num1 = rng.gen_range(1..=ADDEND_MAX);
        let num2 = rng.gen_range(1..=ADDEND_MAX);
        (num1, num2, Operator::Add, num1 + num2)
    } else {
        let answer = rng.gen_range(1..=SUBTRACTION_ANSWER_MAX);
        let num2 = rng.gen_range(1..=SUBTRAHEND_MAX);
        (answer + num2, num2, Operator::Subtract, answer)
    };

    let options = generate_options(answer, MATH_OPTION_MAX, rng)?;
    Ok(MathQuestion {
        num1,
        num2,
        operator,
        answer,
        emoji,
        options,
    })
}

/// Draw one distractor candidate for `correct`.
///
/// Small answers (<= 2) only get larger neighbours (+1..=+3); otherwise the
/// candidate is +/- 1 or 2 away.
fn distractor_candidate<R: Rng + ?Sized>(correct: u32, rng: &mut R) -> i64 {
    let correct = i64::from(correct);
    if correct <= 2 {
        correct + rng.gen_range(1..=3)
    } else {
        let offset = rng.gen_range(1..=2);
        if rng.gen_bool(0.5) {
            correct + offset
        } else {
            correct - offset
        }
    }
}

/// Build the shuffled option list: `correct` plus distinct distractors in `1..=max`.
///
/// Rejection sampling is capped at `MAX_DISTRACTOR_ATTEMPTS`; running out means
/// the numeric domain is too narrow for `correct`.
pub fn generate_options<R: Rng + ?Sized>(
    correct: u32,
    max: u32,
    rng: &mut R,
) -> Result<Vec<u32>, QuizError> {
    let mut options = Vec::with_capacity(OPTIONS_PER_QUESTION);
    options.push(correct);

    let mut attempts = 0;
    while options.len() < OPTIONS_PER_QUESTION {
        if attempts >= MAX_DISTRACTOR_ATTEMPTS {
            log::error!(
                "distractor search exhausted for {} in 1..={} after {} attempts",
                correct,
                max,
                attempts
            );
            return Err(QuizError::DistractorsExhausted {
                correct,
                max,
                needed: OPTIONS_PER_QUESTION - 1,
            });
        }
        attempts += 1;

        let candidate = distractor_candidate(correct, rng);
        if candidate < 1 || candidate > i64::from(max) {
            continue;
        }
        let candidate = candidate as u32;
        if !options.contains(&candidate) {
            options.push(candidate);
        }
    }

    Ok(shuffle(&options, rng))
}
