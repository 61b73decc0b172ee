//! Input handling.
//!
//! Key events are mapped to a UI-agnostic `AppInput` first, then dispatched
//! by screen.

use crate::app::{App, Screen};
use crate::error::QuizError;
use crate::quiz::GameMode;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rand::Rng;

/// UI-agnostic input actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppInput {
    Up,
    Down,
    Left,
    Right,
    Select,
    /// Digit key, zero-based (`1` maps to `Option(0)`).
    Option(usize),
    Back,
    Quit,
    Other,
}

/// Result of handling an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    Quit,
}

/// Map a raw key event to an `AppInput`. Key releases map to `Other`.
pub fn map_key(key: KeyEvent) -> AppInput {
    if key.kind == KeyEventKind::Release {
        return AppInput::Other;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return AppInput::Quit;
    }
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppInput::Up,
        KeyCode::Down | KeyCode::Char('j') => AppInput::Down,
        KeyCode::Left | KeyCode::Char('h') => AppInput::Left,
        KeyCode::Right | KeyCode::Char('l') => AppInput::Right,
        KeyCode::Enter | KeyCode::Char(' ') => AppInput::Select,
        KeyCode::Char(c @ '1'..='9') => AppInput::Option((c as usize) - ('1' as usize)),
        KeyCode::Esc | KeyCode::Backspace => AppInput::Back,
        KeyCode::Char('q') | KeyCode::Char('Q') => AppInput::Quit,
        _ => AppInput::Other,
    }
}

/// Dispatch one input to the current screen.
pub fn handle_input<R: Rng + ?Sized>(
    app: &mut App,
    input: AppInput,
    rng: &mut R,
) -> Result<InputResult, QuizError> {
    if input == AppInput::Quit {
        return Ok(InputResult::Quit);
    }

    match app.screen() {
        Screen::Menu => handle_menu(app, input, rng),
        Screen::InGame(_) => {
            handle_game(app, input);
            Ok(InputResult::Continue)
        }
        Screen::Summary => handle_summary(app, input, rng),
    }
}

fn handle_menu<R: Rng + ?Sized>(
    app: &mut App,
    input: AppInput,
    rng: &mut R,
) -> Result<InputResult, QuizError> {
    match input {
        AppInput::Up | AppInput::Left => app.menu_up(),
        AppInput::Down | AppInput::Right => app.menu_down(),
        AppInput::Select => {
            app.select_mode(app.selected_mode(), rng)?;
        }
        AppInput::Option(n) => {
            if let Some(mode) = GameMode::from_index(n) {
                app.select_mode(mode, rng)?;
            }
        }
        AppInput::Back => return Ok(InputResult::Quit),
        AppInput::Quit | AppInput::Other => {}
    }
    Ok(InputResult::Continue)
}

fn handle_game(app: &mut App, input: AppInput) {
    match input {
        AppInput::Left | AppInput::Up => app.cursor_left(),
        AppInput::Right | AppInput::Down => app.cursor_right(),
        AppInput::Select => {
            app.submit_cursor();
        }
        AppInput::Option(n) => {
            app.submit_option(n);
        }
        AppInput::Back => app.back_to_menu(),
        AppInput::Quit | AppInput::Other => {}
    }
}

fn handle_summary<R: Rng + ?Sized>(
    app: &mut App,
    input: AppInput,
    rng: &mut R,
) -> Result<InputResult, QuizError> {
    // Digits jump straight into another mode, anything else returns to the menu.
    if let AppInput::Option(n) = input {
        if let Some(mode) = GameMode::from_index(n) {
            app.select_mode(mode, rng)?;
            return Ok(InputResult::Continue);
        }
    }
    app.dismiss_summary();
    Ok(InputResult::Continue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_map_key_arrows_and_digits() {
        assert_eq!(map_key(key(KeyCode::Up)), AppInput::Up);
        assert_eq!(map_key(key(KeyCode::Enter)), AppInput::Select);
        assert_eq!(map_key(key(KeyCode::Char('1'))), AppInput::Option(0));
        assert_eq!(map_key(key(KeyCode::Char('3'))), AppInput::Option(2));
        assert_eq!(map_key(key(KeyCode::Esc)), AppInput::Back);
        assert_eq!(map_key(key(KeyCode::Char('q'))), AppInput::Quit);
        assert_eq!(map_key(key(KeyCode::Char('x'))), AppInput::Other);
    }

    #[test]
    fn test_map_key_ctrl_c_quits() {
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(event), AppInput::Quit);
    }

    #[test]
    fn test_menu_digit_starts_mode() {
        let mut app = App::default();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let result = handle_input(&mut app, AppInput::Option(4), &mut rng).unwrap();
        assert_eq!(result, InputResult::Continue);
        assert_eq!(app.screen(), Screen::InGame(GameMode::Math));
    }

    #[test]
    fn test_menu_select_uses_highlighted_mode() {
        let mut app = App::default();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        handle_input(&mut app, AppInput::Down, &mut rng).unwrap();
        handle_input(&mut app, AppInput::Select, &mut rng).unwrap();
        assert_eq!(app.screen(), Screen::InGame(GameMode::Counting));
    }

    #[test]
    fn test_back_in_game_returns_to_menu() {
        let mut app = App::default();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        handle_input(&mut app, AppInput::Option(0), &mut rng).unwrap();
        handle_input(&mut app, AppInput::Option(1), &mut rng).unwrap();
        assert!(app.scheduled().is_some());
        handle_input(&mut app, AppInput::Back, &mut rng).unwrap();
        assert_eq!(app.screen(), Screen::Menu);
        assert!(app.scheduled().is_none());
    }

    #[test]
    fn test_quit_from_any_screen() {
        let mut app = App::default();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(
            handle_input(&mut app, AppInput::Quit, &mut rng).unwrap(),
            InputResult::Quit
        );
        handle_input(&mut app, AppInput::Option(2), &mut rng).unwrap();
        assert_eq!(
            handle_input(&mut app, AppInput::Quit, &mut rng).unwrap(),
            InputResult::Quit
        );
    }

    #[test]
    fn test_out_of_range_digit_ignored() {
        let mut app = App::default();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        handle_input(&mut app, AppInput::Option(8), &mut rng).unwrap();
        assert_eq!(app.screen(), Screen::Menu);
    }
}
