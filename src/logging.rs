//! File-backed logging.
//!
//! The terminal is in raw/alternate-screen mode while the app runs, so log
//! output goes to `~/.funlearn/funlearn.log` and only when `FUNLEARN_LOG` is set
//! (e.g. `FUNLEARN_LOG=debug`).

use crate::constants::{LOG_ENV_VAR, LOG_FILE_NAME};
use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;

/// Initialize logging into `dir`. Returns `Ok(false)` when logging is disabled.
pub fn init_logging(dir: &Path) -> io::Result<bool> {
    if std::env::var_os(LOG_ENV_VAR).is_none() {
        return Ok(false);
    }

    fs::create_dir_all(dir)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(LOG_FILE_NAME))?;

    env_logger::Builder::new()
        .parse_env(LOG_ENV_VAR)
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::AlreadyExists, e))?;

    Ok(true)
}
