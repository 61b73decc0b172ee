//! Fun Learning - a terminal quiz game for young children.
//!
//! Five mini-games (matching, counting, colors, shapes, simple math) played in
//! eight-round sessions. The quiz logic lives in `quiz` and `app` and has no
//! terminal dependency; `ui` and `input` adapt it to ratatui/crossterm.

pub mod app;
pub mod build_info;
pub mod config;
pub mod constants;
pub mod error;
pub mod input;
pub mod logging;
pub mod quiz;
pub mod ui;
