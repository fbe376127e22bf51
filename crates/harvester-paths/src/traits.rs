use harvester_core::{Coord, Direction};

/// Read-only terrain queries the search needs from the map.
///
/// The map must stay unchanged for the duration of one search call; the
/// engine only borrows it inside [`crate::AStarSearch::new`].
pub trait TerrainMap {
    /// Map extent in cells: `x` is the width, `y` the height.
    fn size(&self) -> Coord;

    /// Terrain cost multiplier for `c`. Must be positive; 1.0 is plain
    /// ground.
    fn difficulty(&self, c: Coord) -> f32;
}

/// Movement capabilities of the unit a path is computed for.
///
/// Like [`TerrainMap`], borrowed read-only for the duration of one call.
pub trait Mover {
    /// Whether this unit can occupy or pass through `c` right now.
    /// Expected to account for terrain, occupancy by other units, and
    /// unit-specific movement rules.
    fn can_pass(&self, c: Coord) -> bool;

    /// Flying units use a terrain difficulty of 1.0 everywhere and get an
    /// early-turn penalty near the start of the path.
    fn is_flying(&self) -> bool {
        false
    }

    /// The direction the unit currently faces.
    fn facing(&self) -> Direction;

    /// Turn rate of the unit's type. Must be positive; higher turns
    /// faster, lowering the cost of heading changes.
    fn turn_speed(&self) -> f32;
}
