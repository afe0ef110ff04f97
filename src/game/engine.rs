use log::{debug, warn};
use rand::seq::IteratorRandom;
use rand::Rng;

use super::{
    direction::Direction,
    state::{GameState, Position},
};

/// Rejected random samples before food placement scans for free cells
pub const MAX_FOOD_ATTEMPTS: usize = 1024;

/// What a single tick did to the snake
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Shifted forward by one cell, length unchanged
    Moved,
    /// Ate the food and grew by one segment
    Grew,
}

impl GameState {
    /// Advance the simulation by one step.
    ///
    /// Food is eaten when the head *before* moving sits on it, so growth
    /// shows up one tick after the head visually reaches the food.
    pub fn tick(&mut self) -> TickOutcome {
        let motion = self.snake.direction.unit().scaled(self.config.cell_size);

        if self.snake.head() == self.food {
            self.snake.advance(motion, true);
            self.place_food();
            debug!(
                "snake grew to {} segments, food moved to ({}, {})",
                self.snake.len(),
                self.food.x,
                self.food.y
            );
            TickOutcome::Grew
        } else {
            self.snake.advance(motion, false);
            TickOutcome::Moved
        }
    }

    /// Request a new heading. At most one request is accepted per tick and a
    /// reversal onto the previous segment is never accepted.
    pub fn request_direction_change(&mut self, direction: Direction) -> bool {
        if self.direction_changed || self.snake.direction.is_opposite(direction) {
            return false;
        }

        if self.snake.direction != direction {
            debug!("turning {:?} -> {:?}", self.snake.direction, direction);
        }
        self.snake.direction = direction;
        self.direction_changed = true;
        true
    }

    /// Re-open the direction change window; called once before every tick
    pub fn clear_direction_change(&mut self) {
        self.direction_changed = false;
    }

    /// Move the food to a random grid cell not covered by the snake
    pub(super) fn place_food(&mut self) {
        let columns = self.config.columns();
        let rows = self.config.rows();
        let cell = self.config.cell_size;

        if columns > 0 && rows > 0 {
            for _ in 0..MAX_FOOD_ATTEMPTS {
                let pos = Position::new(
                    self.rng.gen_range(0..columns) * cell,
                    self.rng.gen_range(0..rows) * cell,
                );
                if !self.snake.occupies(pos) {
                    self.food = pos;
                    return;
                }
            }
        }

        warn!("food sampling exhausted after {MAX_FOOD_ATTEMPTS} attempts, scanning free cells");
        let snake = &self.snake;
        let free = (0..rows)
            .flat_map(|row| (0..columns).map(move |col| Position::new(col * cell, row * cell)))
            .filter(|pos| !snake.occupies(*pos))
            .choose(&mut self.rng);

        match free {
            Some(pos) => self.food = pos,
            None => warn!(
                "no free cell for food, keeping it at ({}, {})",
                self.food.x, self.food.y
            ),
        }
    }
}
