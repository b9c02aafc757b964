//! Snake's Greedy Hunt - a grid-based arcade Snake
//!
//! This library provides:
//! - Core game logic (game module)
//! - Keyboard input mapping (input module)
//! - Window and terminal rendering (render module)
//! - Textures and sounds of the window (assets module)
//! - The playable frontends (modes module)

pub mod assets;
pub mod game;
pub mod input;
pub mod modes;
pub mod render;
