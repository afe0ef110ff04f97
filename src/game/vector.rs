use serde::{Deserialize, Serialize};

/// An integer offset or position on the field, in field units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Vector {
    pub x: i32,
    pub y: i32,
}

impl Vector {
    pub const LEFT: Vector = Vector::new(-1, 0);
    pub const RIGHT: Vector = Vector::new(1, 0);
    pub const UP: Vector = Vector::new(0, -1);
    pub const DOWN: Vector = Vector::new(0, 1);

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Add `other` into this vector in place, wrapping on overflow
    pub fn translate(&mut self, other: Vector) {
        self.x = self.x.wrapping_add(other.x);
        self.y = self.y.wrapping_add(other.y);
    }

    /// Multiply both components by `factor` in place, wrapping on overflow
    pub fn scale(&mut self, factor: i32) {
        self.x = self.x.wrapping_mul(factor);
        self.y = self.y.wrapping_mul(factor);
    }

    pub fn translated(mut self, other: Vector) -> Self {
        self.translate(other);
        self
    }

    pub fn scaled(mut self, factor: i32) -> Self {
        self.scale(factor);
        self
    }
}
