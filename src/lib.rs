//! Grid Snake - a real-time snake game on a fixed grid
//!
//! This library provides:
//! - Core game logic (game module)
//! - Drawing onto a fill-rectangle surface and a ratatui board (render module)
//! - Key mapping (input module)
//! - The fixed-interval terminal loop (runtime module)

pub mod game;
pub mod input;
pub mod render;
pub mod runtime;
