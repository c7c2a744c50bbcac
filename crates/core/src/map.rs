//! Fixed 16x16 occupancy grid.

use crate::types::{MAP_HEIGHT, MAP_WIDTH};

/// Readable occupancy over integer cell coordinates.
///
/// The ray marcher is generic over this trait so tests and benches can
/// substitute synthetic grids.
pub trait Occupancy {
    /// Whether the cell at `(x, y)` blocks rays. Must be total: any
    /// out-of-range coordinate is a defined answer, not a panic.
    fn occupied(&self, x: i32, y: i32) -> bool;
}

/// The compile-time world map: 1 = wall, 0 = open, indexed `[x][y]`.
///
/// The outer border is entirely walls so a marching ray always terminates
/// inside the grid.
const WORLD_MAP: [[u8; MAP_HEIGHT]; MAP_WIDTH] = [
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 1, 1, 1, 0, 1, 1, 1, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 1, 0, 0, 0, 0, 1, 0, 1, 1, 0, 1, 1, 0, 1],
    [1, 0, 1, 1, 0, 1, 0, 1, 1, 0, 1, 0, 1, 0, 0, 1],
    [1, 0, 0, 1, 0, 1, 1, 0, 0, 1, 1, 1, 1, 0, 0, 1],
    [1, 0, 1, 0, 1, 0, 1, 1, 0, 1, 0, 1, 1, 1, 1, 1],
    [1, 0, 0, 1, 0, 1, 1, 0, 1, 0, 1, 1, 0, 0, 0, 1],
    [1, 1, 0, 0, 1, 0, 0, 0, 0, 1, 1, 1, 0, 1, 0, 1],
    [1, 1, 1, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1],
    [1, 1, 0, 1, 1, 1, 1, 1, 0, 0, 1, 1, 1, 1, 0, 1],
    [1, 0, 0, 1, 0, 1, 0, 1, 0, 1, 1, 1, 1, 1, 1, 1],
    [1, 0, 1, 0, 1, 1, 0, 1, 1, 1, 1, 0, 1, 1, 0, 1],
    [1, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 1],
    [1, 1, 1, 0, 1, 1, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1],
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
];

/// Immutable world grid, constructed once at startup.
#[derive(Debug, Clone)]
pub struct WorldGrid {
    cells: [[u8; MAP_HEIGHT]; MAP_WIDTH],
}

impl WorldGrid {
    /// The built-in world map.
    pub fn new() -> Self {
        Self { cells: WORLD_MAP }
    }

    /// A grid with explicit cell contents, for tests.
    pub fn from_cells(cells: [[u8; MAP_HEIGHT]; MAP_WIDTH]) -> Self {
        Self { cells }
    }

    pub fn width(&self) -> usize {
        MAP_WIDTH
    }

    pub fn height(&self) -> usize {
        MAP_HEIGHT
    }
}

impl Default for WorldGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl Occupancy for WorldGrid {
    /// Anything outside `[0, MAP_WIDTH) x [0, MAP_HEIGHT)` reads as a wall,
    /// so callers never need a separate bounds branch.
    fn occupied(&self, x: i32, y: i32) -> bool {
        if x < 0 || x >= MAP_WIDTH as i32 || y < 0 || y >= MAP_HEIGHT as i32 {
            return true;
        }
        self.cells[x as usize][y as usize] == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_border_is_solid() {
        let grid = WorldGrid::new();
        for i in 0..MAP_WIDTH as i32 {
            assert!(grid.occupied(i, 0));
            assert!(grid.occupied(i, MAP_HEIGHT as i32 - 1));
            assert!(grid.occupied(0, i));
            assert!(grid.occupied(MAP_WIDTH as i32 - 1, i));
        }
    }

    #[test]
    fn test_out_of_range_reads_as_wall() {
        let grid = WorldGrid::new();
        assert!(grid.occupied(-1, 8));
        assert!(grid.occupied(8, -1));
        assert!(grid.occupied(MAP_WIDTH as i32, 8));
        assert!(grid.occupied(8, MAP_HEIGHT as i32));
        assert!(grid.occupied(i32::MIN, i32::MAX));
    }

    #[test]
    fn test_start_cell_is_open() {
        let grid = WorldGrid::new();
        assert!(!grid.occupied(8, 8));
    }
}
