use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::{config::GameConfig, direction::Direction, vector::Vector};

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, tail at the front and head at the back. Never empty.
    body: VecDeque<Vector>,
    /// Current direction of movement
    pub direction: Direction,
}

impl Snake {
    /// Create a one-segment snake
    pub fn new(head: Position, direction: Direction) -> Self {
        Self {
            body: VecDeque::from([head]),
            direction,
        }
    }

    /// Create a snake from segments ordered tail to head, `None` if empty
    pub fn from_body(
        segments: impl IntoIterator<Item = Vector>,
        direction: Direction,
    ) -> Option<Self> {
        let body: VecDeque<Vector> = segments.into_iter().collect();
        if body.is_empty() {
            return None;
        }
        Some(Self { body, direction })
    }

    /// Get the head position (newest segment)
    pub fn head(&self) -> Vector {
        self.body[self.body.len() - 1]
    }

    /// Get the tail position (oldest segment)
    pub fn tail(&self) -> Vector {
        self.body[0]
    }

    /// Segments from tail to head
    pub fn segments(&self) -> impl Iterator<Item = Vector> + '_ {
        self.body.iter().copied()
    }

    pub fn occupies(&self, pos: Vector) -> bool {
        self.body.contains(&pos)
    }

    /// Append `head + motion` as the new head; drop the tail unless growing
    pub fn advance(&mut self, motion: Vector, grow: bool) {
        let new_head = self.head().translated(motion);
        self.body.push_back(new_head);

        if !grow {
            self.body.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Never true: a snake has at least one segment
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Positions and offsets share one representation
pub type Position = Vector;

/// Complete game state for one session
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Position,
    /// Set once a direction change has been accepted since the last clear
    pub(super) direction_changed: bool,
    pub(super) config: GameConfig,
    pub(super) rng: StdRng,
}

impl GameState {
    /// Start a session: one segment at the origin heading right, food placed at random
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Same as `new` with a reproducible random source
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, rng: StdRng) -> Self {
        let mut state = Self {
            snake: Snake::new(Position::new(0, 0), Direction::Right),
            food: Position::new(0, 0),
            direction_changed: false,
            config,
            rng,
        };
        state.place_food();
        state
    }

    /// Build a state with an explicit snake and food position
    pub fn from_parts(config: GameConfig, snake: Snake, food: Position, seed: u64) -> Self {
        Self {
            snake,
            food,
            direction_changed: false,
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn direction(&self) -> Direction {
        self.snake.direction
    }

    /// Whether a direction change was already accepted this tick
    pub fn direction_changed(&self) -> bool {
        self.direction_changed
    }
}
