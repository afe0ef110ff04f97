use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::vector::Vector;

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Width of the playing field in units
    pub field_width: i32,
    /// Height of the playing field in units
    pub field_height: i32,
    /// Size of one grid cell in units; every position is a multiple of it
    pub cell_size: i32,
    /// Wall-clock time between two simulation steps
    pub tick_interval_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: 800,
            field_height: 600,
            cell_size: 40,
            tick_interval_ms: 60,
        }
    }
}

impl GameConfig {
    /// Create a configuration with a custom field and cell size
    pub fn new(field_width: i32, field_height: i32, cell_size: i32) -> Self {
        Self {
            field_width,
            field_height,
            cell_size,
            ..Default::default()
        }
    }

    /// Number of grid columns
    pub fn columns(&self) -> i32 {
        self.field_width / self.cell_size
    }

    /// Number of grid rows
    pub fn rows(&self) -> i32 {
        self.field_height / self.cell_size
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Whether a grid-aligned position lies on the visible field
    pub fn contains(&self, pos: Vector) -> bool {
        pos.x >= 0 && pos.x < self.field_width && pos.y >= 0 && pos.y < self.field_height
    }
}
