//! Question records for each game mode.
//!
//! Every question carries its own prompt data and an option list that holds
//! the correct answer exactly once.

use super::GameMode;
use std::fmt;

/// A value the player can pick. Curated modes use text (emoji or names),
/// generated modes use numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Answer {
    Text(&'static str),
    Number(u32),
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Text(s) => write!(f, "{}", s),
            Answer::Number(n) => write!(f, "{}", n),
        }
    }
}

/// "Find the Apple" -> pick 🍎.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindItQuestion {
    pub word: &'static str,
    pub correct_emoji: &'static str,
    pub options: Vec<&'static str>,
}

/// "How many 🍎 do you see?"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountingQuestion {
    pub emoji: &'static str,
    pub count: u32,
    pub options: Vec<u32>,
}

/// A colored glyph; the player names the color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorQuestion {
    pub color_name: &'static str,
    /// 0xRRGGBB
    pub color_hex: u32,
    pub glyph: &'static str,
    pub options: Vec<&'static str>,
}

impl ColorQuestion {
    pub fn rgb(&self) -> (u8, u8, u8) {
        (
            (self.color_hex >> 16) as u8,
            (self.color_hex >> 8) as u8,
            self.color_hex as u8,
        )
    }
}

/// A glyph; the player names the shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeQuestion {
    pub shape_name: &'static str,
    pub glyph: &'static str,
    pub options: Vec<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
}

impl Operator {
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "−",
        }
    }

    pub fn apply(&self, a: u32, b: u32) -> Option<u32> {
        match self {
            Operator::Add => a.checked_add(b),
            Operator::Subtract => a.checked_sub(b),
        }
    }
}

/// `num1 op num2 = ?`, drawn with a helper emoji.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MathQuestion {
    pub num1: u32,
    pub num2: u32,
    pub operator: Operator,
    pub answer: u32,
    pub emoji: &'static str,
    pub options: Vec<u32>,
}

impl MathQuestion {
    pub fn equation(&self) -> String {
        format!("{} {} {}", self.num1, self.operator.symbol(), self.num2)
    }
}

/// One question of any mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Question {
    FindIt(FindItQuestion),
    Counting(CountingQuestion),
    Color(ColorQuestion),
    Shape(ShapeQuestion),
    Math(MathQuestion),
}

impl Question {
    pub fn mode(&self) -> GameMode {
        match self {
            Question::FindIt(_) => GameMode::FindIt,
            Question::Counting(_) => GameMode::Counting,
            Question::Color(_) => GameMode::Colors,
            Question::Shape(_) => GameMode::Shapes,
            Question::Math(_) => GameMode::Math,
        }
    }

    /// Options in display order.
    pub fn options(&self) -> Vec<Answer> {
        match self {
            Question::FindIt(q) => q.options.iter().map(|&s| Answer::Text(s)).collect(),
            Question::Counting(q) => q.options.iter().map(|&n| Answer::Number(n)).collect(),
            Question::Color(q) => q.options.iter().map(|&s| Answer::Text(s)).collect(),
            Question::Shape(q) => q.options.iter().map(|&s| Answer::Text(s)).collect(),
            Question::Math(q) => q.options.iter().map(|&n| Answer::Number(n)).collect(),
        }
    }

    pub fn option_count(&self) -> usize {
        match self {
            Question::FindIt(q) => q.options.len(),
            Question::Counting(q) => q.options.len(),
            Question::Color(q) => q.options.len(),
            Question::Shape(q) => q.options.len(),
            Question::Math(q) => q.options.len(),
        }
    }

    pub fn option_at(&self, index: usize) -> Option<Answer> {
        self.options().get(index).copied()
    }

    pub fn correct_answer(&self) -> Answer {
        match self {
            Question::FindIt(q) => Answer::Text(q.correct_emoji),
            Question::Counting(q) => Answer::Number(q.count),
            Question::Color(q) => Answer::Text(q.color_name),
            Question::Shape(q) => Answer::Text(q.shape_name),
            Question::Math(q) => Answer::Number(q.answer),
        }
    }

    pub fn check_answer(&self, submitted: &Answer) -> bool {
        check_answer(self, submitted)
    }

    /// Main prompt line shown above the options.
    pub fn prompt(&self) -> String {
        match self {
            Question::FindIt(q) => format!("Find the... {}", q.word),
            Question::Counting(q) => format!("How many {} do you see?", q.emoji),
            Question::Color(_) => "What color is this?".to_string(),
            Question::Shape(_) => "What shape is this?".to_string(),
            Question::Math(q) => format!("{} = ?", q.equation()),
        }
    }

    /// Praise shown after a correct answer.
    pub fn praise(&self) -> &'static str {
        match self {
            Question::FindIt(_) => "🎉 Great job!",
            _ => "🎉 Correct!",
        }
    }

    /// Reveal shown after a wrong answer.
    pub fn reveal(&self) -> String {
        match self {
            Question::FindIt(q) => format!("It's this one: {}", q.correct_emoji),
            Question::Counting(q) => format!("There are {}!", q.count),
            Question::Color(q) => format!("It's {}!", q.color_name),
            Question::Shape(q) => format!("It's a {}!", q.shape_name),
            Question::Math(q) => format!("{} = {}", q.equation(), q.answer),
        }
    }
}

/// Equality between the submitted option and the question's answer key.
pub fn check_answer(question: &Question, submitted: &Answer) -> bool {
    match (question, submitted) {
        (Question::FindIt(q), Answer::Text(s)) => *s == q.correct_emoji,
        (Question::Counting(q), Answer::Number(n)) => *n == q.count,
        (Question::Color(q), Answer::Text(s)) => *s == q.color_name,
        (Question::Shape(q), Answer::Text(s)) => *s == q.shape_name,
        (Question::Math(q), Answer::Number(n)) => *n == q.answer,
        _ => false,
    }
}
