use macroquad::input::{KeyCode, is_key_pressed};

use super::KeyAction;
use crate::game::Direction;

/// Keys checked each frame, in the order their presses are applied
pub const KEY_BINDINGS: [(KeyCode, KeyAction); 10] = [
    (KeyCode::Up, KeyAction::Steer(Direction::Up)),
    (KeyCode::Down, KeyAction::Steer(Direction::Down)),
    (KeyCode::Left, KeyAction::Steer(Direction::Left)),
    (KeyCode::Right, KeyAction::Steer(Direction::Right)),
    (KeyCode::W, KeyAction::Steer(Direction::Up)),
    (KeyCode::S, KeyAction::Steer(Direction::Down)),
    (KeyCode::A, KeyAction::Steer(Direction::Left)),
    (KeyCode::D, KeyAction::Steer(Direction::Right)),
    (KeyCode::Escape, KeyAction::Quit),
    (KeyCode::Q, KeyAction::Quit),
];

/// Actions for the keys pressed since the last frame
pub fn pressed_actions() -> Vec<KeyAction> {
    KEY_BINDINGS
        .iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .map(|(_, action)| *action)
        .collect()
}
