use serde::{Deserialize, Serialize};

use super::vector::Vector;

/// Direction the snake can move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(&self, other: Direction) -> bool {
        *self == other.opposite()
    }

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Unit vector for this direction (y grows downwards)
    pub fn unit(&self) -> Vector {
        match self {
            Direction::Up => Vector::UP,
            Direction::Down => Vector::DOWN,
            Direction::Left => Vector::LEFT,
            Direction::Right => Vector::RIGHT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_directions() {
        assert!(Direction::Up.is_opposite(Direction::Down));
        assert!(Direction::Down.is_opposite(Direction::Up));
        assert!(Direction::Left.is_opposite(Direction::Right));
        assert!(Direction::Right.is_opposite(Direction::Left));

        assert!(!Direction::Up.is_opposite(Direction::Left));
        assert!(!Direction::Up.is_opposite(Direction::Right));
        assert!(!Direction::Up.is_opposite(Direction::Up));
    }

    #[test]
    fn test_direction_unit() {
        assert_eq!(Direction::Up.unit(), Vector::new(0, -1));
        assert_eq!(Direction::Down.unit(), Vector::new(0, 1));
        assert_eq!(Direction::Left.unit(), Vector::new(-1, 0));
        assert_eq!(Direction::Right.unit(), Vector::new(1, 0));
    }
}
