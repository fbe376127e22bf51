use std::fmt;
use std::ops::{Add, Sub};

use crate::direction::Direction;

/// Sentinel axis value for "no coordinate". Map cells are never negative.
const INVALID_POS: i32 = -1;

/// A tile coordinate on the map grid. X grows right, Y grows down
/// (screen coordinates).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    /// The "unset" coordinate. A coordinate is invalid as soon as either
    /// axis carries the sentinel, see [`Coord::is_valid`].
    pub const INVALID: Self = Self {
        x: INVALID_POS,
        y: INVALID_POS,
    };

    /// Create a new coordinate.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Whether both axes hold a real position.
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.x != INVALID_POS && self.y != INVALID_POS
    }

    /// Return a coordinate shifted by (dx, dy).
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The adjacent cell in one of the 8 compass directions.
    #[inline]
    pub const fn neighbor(self, dir: Direction) -> Self {
        let d = dir.delta();
        Self {
            x: self.x + d.x,
            y: self.y + d.y,
        }
    }
}

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coord {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Coord {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Coord {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn coord_round_trip() {
        let c = Coord::new(3, 7);
        let json = serde_json::to_string(&c).unwrap();
        let back: Coord = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }

    #[test]
    fn direction_round_trip() {
        let json = serde_json::to_string(&Direction::UpLeft).unwrap();
        let back: Direction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Direction::UpLeft);
    }
}
