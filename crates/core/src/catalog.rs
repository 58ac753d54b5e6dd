//! Catalog module - piece shapes and colors
//!
//! Every piece is four unit cubes. Shapes are written as whole-cell coordinates and
//! re-centered on their bounding box, so an axis with an even extent gets half-integer
//! offsets and rotation happens about the middle of the piece.

use crate::types::{Color, HalfVec3, PieceKind, CUBES_PER_PIECE};

/// Offsets of a piece's cubes from its local origin, in half cells
pub type PieceShape = [HalfVec3; CUBES_PER_PIECE];

/// Whole-cell layout of each kind before centering
fn cell_layout(kind: PieceKind) -> [(i8, i8, i8); CUBES_PER_PIECE] {
    match kind {
        PieceKind::I => [(0, 0, 0), (1, 0, 0), (2, 0, 0), (3, 0, 0)],
        PieceKind::O => [(0, 0, 0), (1, 0, 0), (0, 1, 0), (1, 1, 0)],
        PieceKind::T => [(0, 0, 0), (1, 0, 0), (2, 0, 0), (1, 1, 0)],
        PieceKind::S => [(0, 0, 0), (1, 0, 0), (1, 1, 0), (2, 1, 0)],
        PieceKind::Z => [(1, 0, 0), (2, 0, 0), (0, 1, 0), (1, 1, 0)],
        PieceKind::J => [(0, 1, 0), (0, 0, 0), (1, 0, 0), (2, 0, 0)],
        PieceKind::L => [(2, 1, 0), (0, 0, 0), (1, 0, 0), (2, 0, 0)],
        PieceKind::Branch => [(0, 0, 0), (1, 0, 0), (0, 1, 0), (0, 0, 1)],
        PieceKind::ScrewLeft => [(0, 0, 0), (1, 0, 0), (1, 1, 0), (1, 1, 1)],
        PieceKind::ScrewRight => [(0, 0, 1), (1, 0, 1), (1, 1, 1), (1, 1, 0)],
    }
}

/// Get the centered cube offsets for a piece kind
pub fn shape(kind: PieceKind) -> PieceShape {
    let cells = cell_layout(kind);

    let mut min = (i8::MAX, i8::MAX, i8::MAX);
    let mut max = (i8::MIN, i8::MIN, i8::MIN);
    for &(x, y, z) in &cells {
        min = (min.0.min(x), min.1.min(y), min.2.min(z));
        max = (max.0.max(x), max.1.max(y), max.2.max(z));
    }

    // 2 * (cell - center), where center = (min + max) / 2
    cells.map(|(x, y, z)| {
        HalfVec3::new(
            2 * x - (min.0 + max.0),
            2 * y - (min.1 + max.1),
            2 * z - (min.2 + max.2),
        )
    })
}

/// Display color of a piece kind
pub fn color(kind: PieceKind) -> Color {
    match kind {
        PieceKind::I => Color::new(0, 240, 240),
        PieceKind::O => Color::new(240, 240, 0),
        PieceKind::T => Color::new(160, 0, 240),
        PieceKind::S => Color::new(0, 240, 0),
        PieceKind::Z => Color::new(240, 0, 0),
        PieceKind::J => Color::new(0, 0, 240),
        PieceKind::L => Color::new(240, 160, 0),
        PieceKind::Branch => Color::new(240, 100, 180),
        PieceKind::ScrewLeft => Color::new(0, 150, 136),
        PieceKind::ScrewRight => Color::new(150, 150, 40),
    }
}

/// Number of kinds in the catalog
pub fn catalog_size() -> usize {
    PieceKind::ALL.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn i_piece_is_centered_on_half_cells() {
        let s = shape(PieceKind::I);
        let xs: Vec<i8> = s.iter().map(|o| o.x).collect();
        assert_eq!(xs, vec![-3, -1, 1, 3]);
        assert!(s.iter().all(|o| o.y == 0 && o.z == 0));
    }

    #[test]
    fn offsets_within_a_piece_differ_by_whole_cells() {
        for kind in PieceKind::ALL {
            let s = shape(kind);
            for o in &s {
                assert_eq!((o.x - s[0].x).rem_euclid(2), 0, "{:?}", kind);
                assert_eq!((o.y - s[0].y).rem_euclid(2), 0, "{:?}", kind);
                assert_eq!((o.z - s[0].z).rem_euclid(2), 0, "{:?}", kind);
            }
        }
    }

    #[test]
    fn every_shape_has_four_distinct_cubes() {
        for kind in PieceKind::ALL {
            let unique: HashSet<_> = shape(kind).iter().copied().collect();
            assert_eq!(unique.len(), CUBES_PER_PIECE, "{:?}", kind);
        }
    }

    #[test]
    fn colors_are_distinct() {
        let unique: HashSet<_> = PieceKind::ALL.iter().map(|&k| color(k)).collect();
        assert_eq!(unique.len(), catalog_size());
    }
}
