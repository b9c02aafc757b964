use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Steer(Direction),
    Quit,
    None,
}

/// Maps terminal key events to game actions
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            // Movement - Arrow keys
            KeyCode::Up => KeyAction::Steer(Direction::Up),
            KeyCode::Down => KeyAction::Steer(Direction::Down),
            KeyCode::Left => KeyAction::Steer(Direction::Left),
            KeyCode::Right => KeyAction::Steer(Direction::Right),

            // Movement - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => KeyAction::Steer(Direction::Up),
            KeyCode::Char('s') | KeyCode::Char('S') => KeyAction::Steer(Direction::Down),
            KeyCode::Char('a') | KeyCode::Char('A') => KeyAction::Steer(Direction::Left),
            KeyCode::Char('d') | KeyCode::Char('D') => KeyAction::Steer(Direction::Right),

            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,

            _ => KeyAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(handler: &InputHandler, code: KeyCode, modifiers: KeyModifiers) -> KeyAction {
        handler.handle_key_event(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_arrow_keys() {
        let handler = InputHandler::new();

        assert_eq!(
            press(&handler, KeyCode::Up, KeyModifiers::NONE),
            KeyAction::Steer(Direction::Up)
        );
        assert_eq!(
            press(&handler, KeyCode::Down, KeyModifiers::NONE),
            KeyAction::Steer(Direction::Down)
        );
        assert_eq!(
            press(&handler, KeyCode::Left, KeyModifiers::NONE),
            KeyAction::Steer(Direction::Left)
        );
        assert_eq!(
            press(&handler, KeyCode::Right, KeyModifiers::NONE),
            KeyAction::Steer(Direction::Right)
        );
    }

    #[test]
    fn test_wasd_keys() {
        let handler = InputHandler::new();

        assert_eq!(
            press(&handler, KeyCode::Char('w'), KeyModifiers::NONE),
            KeyAction::Steer(Direction::Up)
        );
        assert_eq!(
            press(&handler, KeyCode::Char('a'), KeyModifiers::NONE),
            KeyAction::Steer(Direction::Left)
        );
        assert_eq!(
            press(&handler, KeyCode::Char('S'), KeyModifiers::SHIFT),
            KeyAction::Steer(Direction::Down)
        );
        assert_eq!(
            press(&handler, KeyCode::Char('d'), KeyModifiers::NONE),
            KeyAction::Steer(Direction::Right)
        );
    }

    #[test]
    fn test_quit_keys() {
        let handler = InputHandler::new();

        assert_eq!(
            press(&handler, KeyCode::Char('q'), KeyModifiers::NONE),
            KeyAction::Quit
        );
        assert_eq!(
            press(&handler, KeyCode::Esc, KeyModifiers::NONE),
            KeyAction::Quit
        );
        assert_eq!(
            press(&handler, KeyCode::Char('c'), KeyModifiers::CONTROL),
            KeyAction::Quit
        );
    }

    #[test]
    fn test_unknown_key() {
        let handler = InputHandler::new();

        assert_eq!(
            press(&handler, KeyCode::Char('x'), KeyModifiers::NONE),
            KeyAction::None
        );
        // Rounds restart on a direction key, there is no restart key
        assert_eq!(
            press(&handler, KeyCode::Char('r'), KeyModifiers::NONE),
            KeyAction::None
        );
    }
}
