//! Session tunables, optionally loaded from `~/.funlearn/config.json`.

use crate::constants::{
    ADDITION_PROBABILITY, CONFIG_FILE_NAME, DATA_DIR_NAME, FEEDBACK_DELAY_MS, ROUNDS_PER_SESSION,
};
use crate::error::ConfigError;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QuizConfig {
    /// Questions per session.
    pub rounds_per_session: usize,
    /// How long feedback stays on screen before the next round.
    pub feedback_delay_ms: u64,
    /// Chance that a Math Fun question is an addition.
    pub addition_probability: f64,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            rounds_per_session: ROUNDS_PER_SESSION,
            feedback_delay_ms: FEEDBACK_DELAY_MS,
            addition_probability: ADDITION_PROBABILITY,
        }
    }
}

impl QuizConfig {
    pub fn feedback_delay(&self) -> Duration {
        Duration::from_millis(self.feedback_delay_ms)
    }

    /// Reject values the generators and session cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rounds_per_session == 0 {
            return Err(ConfigError::Invalid(
                "rounds_per_session must be at least 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.addition_probability) {
            return Err(ConfigError::Invalid(format!(
                "addition_probability must be within 0..=1, got {}",
                self.addition_probability
            )));
        }
        Ok(())
    }

    /// Parse and validate a config from JSON text.
    pub fn from_json(path: &Path, text: &str) -> Result<Self, ConfigError> {
        let config: QuizConfig =
            serde_json::from_str(text).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path`. A missing file means defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(text) => Self::from_json(path, &text),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("no config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

/// `~/.funlearn`, if a home directory can be determined.
pub fn data_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(DATA_DIR_NAME))
}

/// Default config file location.
pub fn default_config_path() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join(CONFIG_FILE_NAME))
}
