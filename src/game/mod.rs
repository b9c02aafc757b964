//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! Both frontends drive it through [`Controller`].

pub mod action;
pub mod config;
pub mod control;
pub mod engine;
pub mod state;

// Re-export commonly used types
pub use action::Direction;
pub use config::GameConfig;
pub use control::{Controller, MoveGate, TickScheduler};
pub use engine::{Game, SoundCue, TickReport};
pub use state::{Cell, Food, Snake, is_occupied};
