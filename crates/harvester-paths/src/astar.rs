use harvester_core::{Coord, Direction, angle_steps};
use log::trace;

use crate::distance::{DIAGONAL_COST, SHORT_HOP, block_distance, chebyshev};
use crate::traits::{Mover, TerrainMap};
use crate::worktable::WorkTable;

/// World units per map cell; normalizes the turning cost so it is
/// comparable to per-cell step costs.
pub const BLOCK_SIZE: f32 = 64.0;

/// Fixed node budget: once this many cells have been finalized, further
/// cells are still closed but no longer expanded. Matches the cell count
/// of a full-size 128x128 map.
pub const MAX_NODES_CHECKED: usize = 128 * 128;

/// Best-first search from a unit's cell toward a destination cell.
///
/// Construction runs the entire search synchronously; afterwards
/// [`path`](AStarSearch::path) yields the cells to walk, from the cell
/// just after the start up to the best cell reached. When the destination
/// is unreachable within budget, that best cell is the closest approach
/// rather than the destination, and the caller decides what to do with the
/// partial path.
///
/// Closed cells are never reopened. Turning cost makes edge costs depend
/// on how a cell was reached, so a cheaper route through an already
/// finalized cell can be missed; this is a deliberate trade-off keeping
/// the search bounded for real-time use.
pub struct AStarSearch {
    table: WorkTable,
    start: Coord,
    destination: Coord,
    best: Coord,
    nodes_checked: usize,
}

impl AStarSearch {
    /// Run a search over `map` for `unit`, from `start` toward
    /// `destination`. Both coordinates must lie within the map extent.
    pub fn new<M: TerrainMap, U: Mover>(
        map: &M,
        unit: &U,
        start: Coord,
        destination: Coord,
    ) -> Self {
        let size = map.size();
        let mut search = Self {
            table: WorkTable::new(size.x.max(0) as usize, size.y.max(0) as usize),
            start,
            destination,
            best: Coord::INVALID,
            nodes_checked: 0,
        };
        search.run(map, unit);
        search
    }

    /// The best cell reached: the destination on success, the closest
    /// approach otherwise. Invalid when the search never ran (short-hop
    /// exit against a blocked destination).
    #[inline]
    pub fn best(&self) -> Coord {
        self.best
    }

    /// Whether the search reached the requested destination.
    #[inline]
    pub fn destination_reached(&self) -> bool {
        self.best.is_valid() && self.best == self.destination
    }

    /// Number of cells finalized by the search. Diagnostic.
    #[inline]
    pub fn nodes_searched(&self) -> usize {
        self.nodes_checked
    }

    /// The resulting path, ordered from the cell just after the start up
    /// to [`best`](AStarSearch::best). Empty when no cell improved on the
    /// start (blocked short hop, walled-in start, or start == destination).
    pub fn path(&self) -> Vec<Coord> {
        let mut path = Vec::new();
        let Some(mut i) = self.table.idx(self.best) else {
            return path;
        };
        // The start cell has an invalid parent and is excluded.
        while self.table.nodes[i].parent.is_valid() {
            path.push(self.table.point(i));
            match self.table.idx(self.table.nodes[i].parent) {
                Some(p) => i = p,
                None => break,
            }
        }
        path.reverse();
        path
    }

    fn run<M: TerrainMap, U: Mover>(&mut self, map: &M, unit: &U) {
        let start = self.start;
        let destination = self.destination;

        // A unit standing next to a destination it already knows it cannot
        // enter has nothing to search for.
        if block_distance(start, destination) <= SHORT_HOP && !unit.can_pass(destination) {
            trace!("short hop to blocked {destination}, skipping search");
            return;
        }

        self.table
            .relax(start, 0.0, block_distance(start, destination), Coord::INVALID);

        let size = map.size();
        let max_ring = chebyshev(start, destination);
        let mut ring_seen = vec![0u32; max_ring.max(0) as usize];
        let mut best_h = f32::INFINITY;

        while let Some(ci) = self.table.pop_best() {
            let current = self.table.point(ci);
            let (cur_g, cur_h) = {
                let n = &self.table.nodes[ci];
                (n.g, n.h)
            };

            if cur_h < best_h {
                best_h = cur_h;
                self.best = current;
            }
            if current == destination {
                trace!(
                    "reached {destination} after {} nodes, g={cur_g}",
                    self.nodes_checked
                );
                break;
            }

            if self.nodes_checked <= MAX_NODES_CHECKED {
                let parent = self.table.nodes[ci].parent;
                let arrival = if parent.is_valid() {
                    Direction::between(parent, current)
                } else {
                    None
                };

                for dir in Direction::ALL {
                    let next = current.neighbor(dir);
                    if self.table.idx(next).is_none() || !unit.can_pass(next) {
                        continue;
                    }

                    let difficulty = if unit.is_flying() {
                        1.0
                    } else {
                        map.difficulty(next)
                    };
                    let mut g = cur_g
                        + if dir.is_diagonal() {
                            DIAGONAL_COST * difficulty
                        } else {
                            difficulty
                        };

                    if unit.is_flying() {
                        // Discourage sharp turns while still close to the
                        // start of the flight path; the penalty fades out
                        // within two diagonal steps of the start.
                        let turns = angle_steps(unit.facing(), dir);
                        let from_start = block_distance(start, next);
                        if turns > 1 && from_start < 2.0 * DIAGONAL_COST {
                            g += (2.0 * DIAGONAL_COST - from_start) * f32::from(turns);
                        }
                    }

                    if let Some(arrival) = arrival {
                        // Changing heading costs time proportional to the
                        // angle, inversely to the chassis turn rate.
                        g += f32::from(angle_steps(arrival, dir)) / (unit.turn_speed() * BLOCK_SIZE);
                    }

                    self.table
                        .relax(next, g, block_distance(next, destination), current);
                }
            }

            self.table.nodes[ci].closed = true;
            self.nodes_checked += 1;

            // Ring exhaustion: when every cell of a square ring between us
            // and the destination has been finalized without reaching it,
            // the destination is enclosed at that radius.
            let d = chebyshev(current, destination);
            if d > 0 && d < max_ring {
                let slot = d as usize;
                ring_seen[slot] += 1;
                if ring_seen[slot] as usize >= ring_len(size, destination, d) {
                    trace!("{destination} enclosed at radius {d}, stopping");
                    break;
                }
            }
        }
    }
}

/// Number of cells at exactly Chebyshev radius `d` around `center`,
/// clipped to a `size.x` by `size.y` map.
fn ring_len(size: Coord, center: Coord, d: i32) -> usize {
    fn box_area(size: Coord, center: Coord, r: i32) -> usize {
        if r < 0 {
            return 0;
        }
        let x0 = (center.x - r).max(0);
        let y0 = (center.y - r).max(0);
        let x1 = (center.x + r).min(size.x - 1);
        let y1 = (center.y + r).min(size.y - 1);
        if x1 < x0 || y1 < y0 {
            return 0;
        }
        ((x1 - x0 + 1) as usize) * ((y1 - y0 + 1) as usize)
    }
    box_area(size, center, d) - box_area(size, center, d - 1)
}
