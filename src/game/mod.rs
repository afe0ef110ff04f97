//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.

pub mod config;
pub mod direction;
pub mod engine;
pub mod state;
pub mod vector;

// Re-export commonly used types
pub use config::GameConfig;
pub use direction::Direction;
pub use engine::{TickOutcome, MAX_FOOD_ATTEMPTS};
pub use state::{GameState, Position, Snake};
pub use vector::Vector;
