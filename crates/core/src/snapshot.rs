//! Read-only snapshots handed to renderers.
//!
//! Snapshots are owned copies; a renderer can keep one across frames without aliasing
//! engine state. Everything is serde-serializable so an external (e.g. browser) renderer
//! can receive it as JSON.

use serde::{Deserialize, Serialize};

use crate::game_state::Piece;
use crate::grid::Cells;
use crate::types::{
    Color, GamePhase, GridPos, HalfVec3, PieceKind, CUBES_PER_PIECE, GRID_DEPTH, GRID_HEIGHT,
    GRID_WIDTH,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceSnapshot {
    pub kind: PieceKind,
    pub color: Color,
    /// Origin in half cells
    pub position: HalfVec3,
    /// Rotated offsets in half cells
    pub offsets: [HalfVec3; CUBES_PER_PIECE],
    /// Occupied grid cells
    pub cells: [GridPos; CUBES_PER_PIECE],
}

impl From<Piece> for PieceSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            color: value.color(),
            position: value.position,
            offsets: value.offsets,
            cells: value.cells(),
        }
    }
}

impl PieceSnapshot {
    pub fn covers(&self, x: i8, y: i8, z: i8) -> bool {
        self.cells.contains(&GridPos::new(x, y, z))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Locked cubes, indexed `[x][z][y]`
    pub grid: Cells,
    pub active: Option<PieceSnapshot>,
    pub next: Option<PieceSnapshot>,
    /// Landing position of the active piece
    pub ghost: Option<PieceSnapshot>,
    pub score: u32,
    pub lines: u32,
    pub phase: GamePhase,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.grid = [[[None; GRID_HEIGHT as usize]; GRID_DEPTH as usize]; GRID_WIDTH as usize];
        self.active = None;
        self.next = None;
        self.ghost = None;
        self.score = 0;
        self.lines = 0;
        self.phase = GamePhase::NotStarted;
    }

    /// Locked cell at (x, y, z); None when out of bounds
    pub fn cell(&self, x: i8, y: i8, z: i8) -> Option<Option<Color>> {
        if x < 0 || y < 0 || z < 0 {
            return None;
        }
        self.grid
            .get(x as usize)?
            .get(z as usize)?
            .get(y as usize)
            .copied()
    }

    pub fn playable(&self) -> bool {
        self.phase == GamePhase::Running
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            grid: [[[None; GRID_HEIGHT as usize]; GRID_DEPTH as usize]; GRID_WIDTH as usize],
            active: None,
            next: None,
            ghost: None,
            score: 0,
            lines: 0,
            phase: GamePhase::NotStarted,
        };
        s.clear();
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::GameState;

    #[test]
    fn default_snapshot_is_empty() {
        let s = GameSnapshot::default();
        assert_eq!(s.cell(0, 0, 0), Some(None));
        assert_eq!(s.cell(6, 0, 0), None);
        assert_eq!(s.cell(0, 12, 0), None);
        assert!(!s.playable());
    }

    #[test]
    fn snapshot_is_a_copy() {
        let mut state = GameState::new(4);
        state.start();
        let before = state.snapshot();

        state.hard_drop();
        let after = state.snapshot();

        assert_ne!(before.grid, after.grid);
        // the earlier snapshot still shows an empty grid
        assert!(before
            .grid
            .iter()
            .flat_map(|plane| plane.iter())
            .all(|column| column.iter().all(|c| c.is_none())));
    }

    #[test]
    fn active_snapshot_cells_match_piece() {
        let mut state = GameState::new(4);
        state.start();
        let snap = state.snapshot();
        let active = snap.active.unwrap();
        assert_eq!(active.cells, state.active().unwrap().cells());
        for c in active.cells {
            assert!(active.covers(c.x, c.y, c.z));
        }
    }
}
