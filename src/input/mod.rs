//! Keyboard input for both frontends

pub mod handler;
pub mod window;

pub use handler::{InputHandler, KeyAction};
