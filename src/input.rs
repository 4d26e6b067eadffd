//! Keyboard mapping from crossterm key events to logical inputs.
//!
//! The simulation only sees [`GameInput`]; quitting and pausing belong to
//! the driver loop.

use crate::game::GameInput;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Commands handled by the driver rather than the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverCommand {
    Quit,
    TogglePause,
}

/// One logical action produced by a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Game(GameInput),
    Driver(DriverCommand),
}

/// Map a key event to zero or more actions.
///
/// Enter yields both Begin and Reset: the state machine accepts whichever
/// one the current state allows and ignores the other.
pub fn map_key(key: KeyEvent) -> Vec<InputAction> {
    if key.kind == KeyEventKind::Release {
        return Vec::new();
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![InputAction::Driver(DriverCommand::Quit)];
    }

    match key.code {
        KeyCode::Char(' ') | KeyCode::Up => vec![InputAction::Game(GameInput::Flap)],
        KeyCode::Enter => vec![
            InputAction::Game(GameInput::Begin),
            InputAction::Game(GameInput::Reset),
        ],
        KeyCode::Char('r') | KeyCode::Char('R') => vec![InputAction::Game(GameInput::Reset)],
        KeyCode::Char('p') | KeyCode::Char('P') => {
            vec![InputAction::Driver(DriverCommand::TogglePause)]
        }
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => {
            vec![InputAction::Driver(DriverCommand::Quit)]
        }
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_space_and_up_flap() {
        assert_eq!(
            map_key(press(KeyCode::Char(' '))),
            vec![InputAction::Game(GameInput::Flap)]
        );
        assert_eq!(
            map_key(press(KeyCode::Up)),
            vec![InputAction::Game(GameInput::Flap)]
        );
    }

    #[test]
    fn test_enter_begins_and_resets() {
        assert_eq!(
            map_key(press(KeyCode::Enter)),
            vec![
                InputAction::Game(GameInput::Begin),
                InputAction::Game(GameInput::Reset)
            ]
        );
    }

    #[test]
    fn test_driver_commands() {
        assert_eq!(
            map_key(press(KeyCode::Esc)),
            vec![InputAction::Driver(DriverCommand::Quit)]
        );
        assert_eq!(
            map_key(press(KeyCode::Char('p'))),
            vec![InputAction::Driver(DriverCommand::TogglePause)]
        );
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(
            map_key(ctrl_c),
            vec![InputAction::Driver(DriverCommand::Quit)]
        );
    }

    #[test]
    fn test_release_and_unmapped_keys_ignored() {
        let release = KeyEvent {
            code: KeyCode::Char(' '),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert!(map_key(release).is_empty());
        assert!(map_key(press(KeyCode::Char('x'))).is_empty());
        assert!(map_key(press(KeyCode::Tab)).is_empty());
    }
}
