//! Integer board coordinates and direction vectors.
//!
//! `x` is the column, `y` is the row (row 0 is the top of the board).
//! The same type doubles as a step vector when walking a line.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

/// A 2D integer vector: board position or direction step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const ZERO: Coord = Coord { x: 0, y: 0 };

    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Position of `(row, col)` on the board.
    #[must_use]
    pub const fn at(row: usize, col: usize) -> Self {
        Self {
            x: col as i32,
            y: row as i32,
        }
    }

    #[must_use]
    pub const fn row(self) -> usize {
        self.y as usize
    }

    #[must_use]
    pub const fn col(self) -> usize {
        self.x as usize
    }
}

impl Add for Coord {
    type Output = Coord;

    fn add(self, rhs: Coord) -> Coord {
        Coord::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Coord {
    type Output = Coord;

    fn sub(self, rhs: Coord) -> Coord {
        self + (-rhs)
    }
}

impl Neg for Coord {
    type Output = Coord;

    fn neg(self) -> Coord {
        Coord::new(-self.x, -self.y)
    }
}

impl Mul<Coord> for i32 {
    type Output = Coord;

    fn mul(self, rhs: Coord) -> Coord {
        Coord::new(self * rhs.x, self * rhs.y)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
