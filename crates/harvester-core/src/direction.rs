use crate::coord::Coord;

/// One of the 8 compass directions a unit can face or move in.
///
/// Indices follow the engine's angle convention: 0 is right, increasing
/// counter-clockwise on screen coordinates (Y grows down), so `Up` is
/// index 2 and `Down` is index 6.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Direction {
    Right = 0,
    UpRight = 1,
    Up = 2,
    UpLeft = 3,
    Left = 4,
    DownLeft = 5,
    Down = 6,
    DownRight = 7,
}

impl Direction {
    /// All 8 directions in index order.
    pub const ALL: [Direction; 8] = [
        Direction::Right,
        Direction::UpRight,
        Direction::Up,
        Direction::UpLeft,
        Direction::Left,
        Direction::DownLeft,
        Direction::Down,
        Direction::DownRight,
    ];

    /// The direction's index, 0–7.
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Direction for an index, wrapping modulo 8.
    #[inline]
    pub const fn from_index(i: u8) -> Self {
        Self::ALL[(i % 8) as usize]
    }

    /// The unit step taken when moving one cell in this direction.
    #[inline]
    pub const fn delta(self) -> Coord {
        match self {
            Direction::Right => Coord::new(1, 0),
            Direction::UpRight => Coord::new(1, -1),
            Direction::Up => Coord::new(0, -1),
            Direction::UpLeft => Coord::new(-1, -1),
            Direction::Left => Coord::new(-1, 0),
            Direction::DownLeft => Coord::new(-1, 1),
            Direction::Down => Coord::new(0, 1),
            Direction::DownRight => Coord::new(1, 1),
        }
    }

    /// Whether a step in this direction crosses a cell corner.
    #[inline]
    pub const fn is_diagonal(self) -> bool {
        self.index() % 2 == 1
    }

    /// The octant direction from `from` toward `to`, computed per-axis by
    /// signum. Exact for adjacent cells. `None` when the coordinates are
    /// equal.
    pub fn between(from: Coord, to: Coord) -> Option<Self> {
        match ((to.x - from.x).signum(), (to.y - from.y).signum()) {
            (0, 0) => None,
            (1, 0) => Some(Direction::Right),
            (1, -1) => Some(Direction::UpRight),
            (0, -1) => Some(Direction::Up),
            (-1, -1) => Some(Direction::UpLeft),
            (-1, 0) => Some(Direction::Left),
            (-1, 1) => Some(Direction::DownLeft),
            (0, 1) => Some(Direction::Down),
            _ => Some(Direction::DownRight),
        }
    }
}

/// Minimal angular distance between two directions, in 45° steps (0–4),
/// wrapping modulo 8.
#[inline]
pub fn angle_steps(a: Direction, b: Direction) -> u8 {
    let d = (a.index() + 8 - b.index()) % 8;
    d.min(8 - d)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deltas_cover_all_neighbors() {
        let c = Coord::new(0, 0);
        let mut seen: Vec<Coord> = Direction::ALL.iter().map(|d| c.neighbor(*d)).collect();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), 8);
        for n in seen {
            assert!(n.x.abs() <= 1 && n.y.abs() <= 1);
            assert_ne!(n, c);
        }
    }

    #[test]
    fn between_inverts_neighbor() {
        let c = Coord::new(5, 5);
        for dir in Direction::ALL {
            assert_eq!(Direction::between(c, c.neighbor(dir)), Some(dir));
        }
        assert_eq!(Direction::between(c, c), None);
    }

    #[test]
    fn between_works_at_distance() {
        let c = Coord::new(2, 2);
        assert_eq!(
            Direction::between(c, Coord::new(9, 2)),
            Some(Direction::Right)
        );
        assert_eq!(
            Direction::between(c, Coord::new(7, 7)),
            Some(Direction::DownRight)
        );
        assert_eq!(Direction::between(c, Coord::new(2, 0)), Some(Direction::Up));
    }

    #[test]
    fn angle_steps_wraps() {
        assert_eq!(angle_steps(Direction::Right, Direction::DownRight), 1);
        assert_eq!(angle_steps(Direction::DownRight, Direction::Right), 1);
        assert_eq!(angle_steps(Direction::Right, Direction::Left), 4);
        assert_eq!(angle_steps(Direction::Up, Direction::Up), 0);
        assert_eq!(angle_steps(Direction::UpRight, Direction::Down), 3);
    }

    #[test]
    fn from_index_wraps() {
        assert_eq!(Direction::from_index(0), Direction::Right);
        assert_eq!(Direction::from_index(7), Direction::DownRight);
        assert_eq!(Direction::from_index(10), Direction::Up);
    }

    #[test]
    fn diagonals_are_odd_indices() {
        for dir in Direction::ALL {
            let d = dir.delta();
            assert_eq!(dir.is_diagonal(), d.x != 0 && d.y != 0);
        }
    }
}
