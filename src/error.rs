//! Error types for question generation and configuration loading.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures while building a question list. These indicate a bad parameter
/// range, never a user mistake.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuizError {
    #[error("could not find {needed} distinct distractors for {correct} within 1..={max}")]
    DistractorsExhausted { correct: u32, max: u32, needed: usize },
    #[error("a session needs at least one round")]
    EmptySession,
}

/// Failures while loading `config.json`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid config value: {0}")]
    Invalid(String),
}
