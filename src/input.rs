//! Keyboard dispatch for the menu, game and puzzle screens.

use crate::arcade::{Arcade, Screen};
use crate::core::input::Command;
use crate::games::puzzle::{process_input as process_puzzle_input, PuzzleInput};
use crate::games::GameKind;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Result of handling a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    Quit,
}

/// What a key means inside a game view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameKey {
    Command(Command),
    /// Host Start/Restart button.
    Start,
    /// Leave the view.
    Leave,
    Other,
}

pub fn map_game_key(code: KeyCode) -> GameKey {
    match code {
        KeyCode::Char(' ') | KeyCode::Char('w') | KeyCode::Char('W') => {
            GameKey::Command(Command::Jump)
        }
        KeyCode::Up => GameKey::Command(Command::Up),
        KeyCode::Down => GameKey::Command(Command::Down),
        KeyCode::Left => GameKey::Command(Command::Left),
        KeyCode::Right => GameKey::Command(Command::Right),
        KeyCode::Enter => GameKey::Start,
        KeyCode::Esc => GameKey::Leave,
        _ => GameKey::Other,
    }
}

pub fn map_puzzle_key(code: KeyCode) -> PuzzleInput {
    match code {
        KeyCode::Char(c) if c.is_ascii_digit() => {
            PuzzleInput::Digit(c.to_digit(10).unwrap_or_default())
        }
        KeyCode::Char('n') | KeyCode::Char('N') => PuzzleInput::NewPuzzle,
        KeyCode::Backspace => PuzzleInput::Backspace,
        KeyCode::Enter => PuzzleInput::Submit,
        _ => PuzzleInput::Other,
    }
}

/// Main dispatcher. Ctrl+C quits from anywhere.
pub fn handle_key(key: KeyEvent, arcade: &mut Arcade) -> InputResult {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return InputResult::Quit;
    }

    match &mut arcade.screen {
        Screen::Menu => return handle_menu(key, arcade),
        Screen::Game(game) => match map_game_key(key.code) {
            GameKey::Command(command) => {
                let outcome = game.handle_input(command);
                log::trace!("{:?} -> {:?}", command, outcome);
            }
            GameKey::Start => game.start(),
            GameKey::Leave => arcade.leave(),
            GameKey::Other => {}
        },
        Screen::Puzzle(screen) => {
            if key.code == KeyCode::Esc {
                arcade.leave();
            } else {
                process_puzzle_input(screen, map_puzzle_key(key.code), &mut arcade.rng);
            }
        }
    }
    InputResult::Continue
}

fn handle_menu(key: KeyEvent, arcade: &mut Arcade) -> InputResult {
    match key.code {
        KeyCode::Up => arcade.menu_up(),
        KeyCode::Down => arcade.menu_down(),
        KeyCode::Enter => arcade.open(GameKind::from_index(arcade.menu_selected)),
        KeyCode::Char('q') | KeyCode::Char('Q') => return InputResult::Quit,
        _ => {}
    }
    InputResult::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ArcadeConfig;
    use crate::core::session::SessionState;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn arcade() -> Arcade {
        Arcade::new(ArcadeConfig::default(), StdRng::seed_from_u64(5))
    }

    fn session_state(arcade: &Arcade) -> Option<SessionState> {
        match &arcade.screen {
            Screen::Game(game) => Some(game.session().state),
            _ => None,
        }
    }

    #[test]
    fn test_game_key_mapping() {
        assert_eq!(map_game_key(KeyCode::Char(' ')), GameKey::Command(Command::Jump));
        assert_eq!(map_game_key(KeyCode::Char('w')), GameKey::Command(Command::Jump));
        assert_eq!(map_game_key(KeyCode::Left), GameKey::Command(Command::Left));
        assert_eq!(map_game_key(KeyCode::Enter), GameKey::Start);
        assert_eq!(map_game_key(KeyCode::Esc), GameKey::Leave);
        assert_eq!(map_game_key(KeyCode::Char('x')), GameKey::Other);
    }

    #[test]
    fn test_puzzle_key_mapping() {
        assert_eq!(map_puzzle_key(KeyCode::Char('7')), PuzzleInput::Digit(7));
        assert_eq!(map_puzzle_key(KeyCode::Char('n')), PuzzleInput::NewPuzzle);
        assert_eq!(map_puzzle_key(KeyCode::Enter), PuzzleInput::Submit);
        assert_eq!(map_puzzle_key(KeyCode::Tab), PuzzleInput::Other);
    }

    #[test]
    fn test_menu_quit() {
        let mut a = arcade();
        assert_eq!(handle_key(press(KeyCode::Char('q')), &mut a), InputResult::Quit);
    }

    #[test]
    fn test_ctrl_c_quits_in_game() {
        let mut a = arcade();
        a.open(GameKind::Racer);
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key(key, &mut a), InputResult::Quit);
    }

    #[test]
    fn test_menu_enter_opens_selected() {
        let mut a = arcade();
        handle_key(press(KeyCode::Down), &mut a);
        handle_key(press(KeyCode::Enter), &mut a);
        assert_eq!(a.current_kind(), Some(GameKind::Flappy));
        assert_eq!(session_state(&a), Some(SessionState::Start));
    }

    #[test]
    fn test_enter_starts_and_esc_leaves() {
        let mut a = arcade();
        a.open(GameKind::Snake);
        // Explicit restart policy: Space does nothing before Start.
        handle_key(press(KeyCode::Char(' ')), &mut a);
        assert_eq!(session_state(&a), Some(SessionState::Start));
        handle_key(press(KeyCode::Enter), &mut a);
        assert_eq!(session_state(&a), Some(SessionState::Playing));
        handle_key(press(KeyCode::Esc), &mut a);
        assert!(matches!(a.screen, Screen::Menu));
    }

    #[test]
    fn test_space_starts_flappy() {
        let mut a = arcade();
        a.open(GameKind::Flappy);
        handle_key(press(KeyCode::Char(' ')), &mut a);
        assert_eq!(session_state(&a), Some(SessionState::Playing));
    }

    #[test]
    fn test_puzzle_keys() {
        let mut a = arcade();
        a.open(GameKind::Puzzle);
        handle_key(press(KeyCode::Char('3')), &mut a);
        match &a.screen {
            Screen::Puzzle(screen) => assert_eq!(screen.entry, vec![3]),
            _ => panic!("expected puzzle screen"),
        }
        handle_key(press(KeyCode::Esc), &mut a);
        assert!(matches!(a.screen, Screen::Menu));
    }
}
