use harvester_core::Coord;

/// Cost of one diagonal step relative to an orthogonal one.
pub const DIAGONAL_COST: f32 = std::f32::consts::SQRT_2;

/// Block-distance threshold under which a blocked destination is not worth
/// searching for (the unit already stands next to it).
pub const SHORT_HOP: f32 = 1.5;

/// Chebyshev (L∞) distance between two cells.
#[inline]
pub fn chebyshev(a: Coord, b: Coord) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

/// Distance in movement-cost terms: Chebyshev adjusted for the extra cost
/// of the diagonal leg. Matches the step cost model on uniform terrain, so
/// it doubles as the search heuristic.
#[inline]
pub fn block_distance(a: Coord, b: Coord) -> f32 {
    let dx = (a.x - b.x).abs();
    let dy = (a.y - b.y).abs();
    let (long, short) = if dx > dy { (dx, dy) } else { (dy, dx) };
    long as f32 + short as f32 * (DIAGONAL_COST - 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chebyshev_basics() {
        let a = Coord::new(2, 3);
        assert_eq!(chebyshev(a, a), 0);
        assert_eq!(chebyshev(a, Coord::new(5, 3)), 3);
        assert_eq!(chebyshev(a, Coord::new(4, 9)), 6);
        assert_eq!(chebyshev(a, Coord::new(-1, 0)), 3);
    }

    #[test]
    fn block_distance_on_axis_equals_chebyshev() {
        let a = Coord::new(0, 0);
        assert_eq!(block_distance(a, Coord::new(7, 0)), 7.0);
        assert_eq!(block_distance(a, Coord::new(0, 4)), 4.0);
    }

    #[test]
    fn block_distance_charges_diagonal_leg() {
        let d = block_distance(Coord::new(0, 0), Coord::new(3, 3));
        assert!((d - 3.0 * DIAGONAL_COST).abs() < 1e-6);

        // 5 long, 2 short: 5 + 2 * (sqrt2 - 1)
        let d = block_distance(Coord::new(0, 0), Coord::new(5, 2));
        assert!((d - (5.0 + 2.0 * (DIAGONAL_COST - 1.0))).abs() < 1e-6);
    }

    #[test]
    fn block_distance_is_symmetric() {
        let a = Coord::new(1, 8);
        let b = Coord::new(6, 2);
        assert_eq!(block_distance(a, b), block_distance(b, a));
    }
}
