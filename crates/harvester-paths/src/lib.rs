//! Tile pathfinding for mobile units.
//!
//! This crate implements the grid search every mobile unit uses to reach a
//! destination cell: a bounded best-first search (A*-family) over the map
//! grid, with a cost model tuned for vehicle kinematics:
//!
//! - terrain difficulty scales each step, diagonals cost [`DIAGONAL_COST`]
//!   times more;
//! - changing heading is charged a turning cost scaled by the unit's turn
//!   speed;
//! - flying units ignore terrain but are discouraged from sharp turns right
//!   after take-off.
//!
//! The search is not guaranteed globally optimal: it runs under a fixed
//! node budget and stops early once a whole ring of cells around the
//! destination has been examined without reaching it. When the destination
//! is unreachable, the resulting path ends at the closest approach instead.
//!
//! Entry point is [`AStarSearch`]: construction runs the whole search
//! synchronously against borrowed [`TerrainMap`] and [`Mover`]
//! collaborators, and [`AStarSearch::path`] returns the resulting cells.

mod astar;
mod distance;
mod traits;
mod worktable;

pub use astar::{AStarSearch, BLOCK_SIZE, MAX_NODES_CHECKED};
pub use distance::{DIAGONAL_COST, SHORT_HOP, block_distance, chebyshev};
pub use traits::{Mover, TerrainMap};
