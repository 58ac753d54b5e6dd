//! Grid module - fixed 3D occupancy of locked cubes
//!
//! The grid is a 6 x 6 x 12 volume where each cell is empty or holds the color of a
//! locked cube. Storage is indexed `[x][z][y]`, so each vertical column is contiguous
//! and clearing a layer is one `copy_within` per column.
//!
//! The grid is a plain value type: snapshots copy it, and nothing outside the engine
//! ever holds a mutable alias.

use arrayvec::ArrayVec;

use crate::types::{Cell, Color, GridPos, GRID_DEPTH, GRID_HEIGHT, GRID_WIDTH, TOP_LAYER};

const W: usize = GRID_WIDTH as usize;
const D: usize = GRID_DEPTH as usize;
const H: usize = GRID_HEIGHT as usize;

/// One vertical column, floor first
pub type Column = [Cell; H];

/// Nested cell storage, indexed `[x][z][y]`
pub type Cells = [[Column; D]; W];

/// The play volume
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    cells: Cells,
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [[[None; H]; D]; W],
        }
    }

    /// Bounds check, yielding array indices
    #[inline(always)]
    fn index(x: i8, y: i8, z: i8) -> Option<(usize, usize, usize)> {
        if x < 0 || x >= GRID_WIDTH as i8 || y < 0 || y >= GRID_HEIGHT as i8 {
            return None;
        }
        if z < 0 || z >= GRID_DEPTH as i8 {
            return None;
        }
        Some((x as usize, z as usize, y as usize))
    }

    pub fn in_bounds(x: i8, y: i8, z: i8) -> bool {
        Self::index(x, y, z).is_some()
    }

    /// Get cell at (x, y, z)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8, z: i8) -> Option<Cell> {
        Self::index(x, y, z).map(|(xi, zi, yi)| self.cells[xi][zi][yi])
    }

    /// Set cell at (x, y, z)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, z: i8, cell: Cell) -> bool {
        match Self::index(x, y, z) {
            Some((xi, zi, yi)) => {
                self.cells[xi][zi][yi] = cell;
                true
            }
            None => false,
        }
    }

    /// Occupancy test; cells outside the grid count as occupied
    pub fn is_occupied(&self, x: i8, y: i8, z: i8) -> bool {
        !matches!(self.get(x, y, z), Some(None))
    }

    /// Check if position is inside the grid and empty
    pub fn is_free(&self, pos: GridPos) -> bool {
        !self.is_occupied(pos.x, pos.y, pos.z)
    }

    /// Write `color` into every listed cell, returning how many were empty before
    ///
    /// Callers validate positions first. An out-of-range cell here means an invariant
    /// was broken upstream: it panics in debug builds and is skipped in release.
    /// Occupied cells are overwritten.
    pub fn place(&mut self, cells: &[GridPos], color: Color) -> usize {
        let mut filled = 0;
        for p in cells {
            if self.is_free(*p) {
                filled += 1;
            }
            let written = self.set(p.x, p.y, p.z, Some(color));
            debug_assert!(written, "placing cube outside the grid at {:?}", p);
        }
        filled
    }

    /// Check if every (x, z) cell at height `y` is filled
    pub fn is_row_full(&self, y: u8) -> bool {
        if y >= GRID_HEIGHT {
            return false;
        }
        let y = y as usize;
        self.cells
            .iter()
            .flat_map(|plane| plane.iter())
            .all(|column| column[y].is_some())
    }

    /// Check if no cell at height `y` is filled
    pub fn is_layer_empty(&self, y: u8) -> bool {
        if y >= GRID_HEIGHT {
            return true;
        }
        let y = y as usize;
        self.cells
            .iter()
            .flat_map(|plane| plane.iter())
            .all(|column| column[y].is_none())
    }

    /// Remove layer `y`, shifting every layer above it down by one
    ///
    /// Heights `y..=10` take the contents of the layer above and the top layer becomes
    /// empty. Returns false (and does nothing) if `y` is out of range.
    pub fn clear_row(&mut self, y: u8) -> bool {
        if y >= GRID_HEIGHT {
            return false;
        }
        let y = y as usize;

        for column in self.cells.iter_mut().flat_map(|plane| plane.iter_mut()) {
            column.copy_within(y + 1..H, y);
            column[H - 1] = None;
        }

        true
    }

    /// Clear all full layers and return the heights at which clears happened
    ///
    /// Scans upward from the floor. After a clear the same height is checked again,
    /// since the layer that just slid down into it may be full as well.
    pub fn clear_full_rows(&mut self) -> ArrayVec<u8, H> {
        let mut cleared = ArrayVec::new();
        let mut y = 0u8;

        while y < GRID_HEIGHT {
            if self.is_row_full(y) {
                self.clear_row(y);
                cleared.push(y);
            } else {
                y += 1;
            }
        }

        cleared
    }

    /// Check if anything sits in the top layer (game over condition)
    pub fn is_top_occupied(&self) -> bool {
        !self.is_layer_empty(TOP_LAYER)
    }

    /// Number of filled cells
    pub fn occupied_count(&self) -> usize {
        self.cells
            .iter()
            .flat_map(|plane| plane.iter())
            .map(|column| column.iter().filter(|c| c.is_some()).count())
            .sum()
    }

    /// Height of the highest filled cell in column (x, z), if any
    pub fn column_height(&self, x: u8, z: u8) -> Option<u8> {
        let column = self.cells.get(x as usize)?.get(z as usize)?;
        column.iter().rposition(|c| c.is_some()).map(|y| y as u8)
    }

    /// Get a reference to the nested cell array
    pub fn cells(&self) -> &Cells {
        &self.cells
    }

    /// Set every cell to empty
    pub fn reset(&mut self) {
        self.cells = [[[None; H]; D]; W];
    }

    /// Fill an entire layer (for tests and benches)
    pub fn fill_layer(&mut self, y: u8, color: Color) {
        for x in 0..GRID_WIDTH as i8 {
            for z in 0..GRID_DEPTH as i8 {
                self.set(x, y as i8, z, Some(color));
            }
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
