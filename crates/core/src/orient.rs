//! Orientation module - exact cube rotations and spawn placement
//!
//! Rotations are quarter turns about the principal axes, done with coordinate swaps and
//! negation on half-cell integers, so they are exact: four turns about one axis always
//! give back the original offsets.

use rand::Rng;

use crate::catalog::PieceShape;
use crate::types::{Axis, HalfVec3, GRID_DEPTH, GRID_WIDTH, RANDOM_ORIENT_STEPS, TOP_LAYER};

/// Rotate one offset 90° about `axis`
pub fn rotate_offset(o: HalfVec3, axis: Axis) -> HalfVec3 {
    match axis {
        Axis::X => HalfVec3::new(o.x, -o.z, o.y),
        Axis::Y => HalfVec3::new(-o.z, o.y, o.x),
        Axis::Z => HalfVec3::new(-o.y, o.x, o.z),
    }
}

/// Rotate every offset of a piece 90° about `axis`
pub fn rotate(offsets: &PieceShape, axis: Axis) -> PieceShape {
    offsets.map(|o| rotate_offset(o, axis))
}

/// Apply [`RANDOM_ORIENT_STEPS`] random elemental rotations
///
/// Each step is independently one of: a turn about X, a turn about Y, or nothing.
/// This varies the starting orientation but is not a uniform draw over the 24
/// orientations of the cube group.
pub fn random_orient<R: Rng + ?Sized>(offsets: &PieceShape, rng: &mut R) -> PieceShape {
    let mut out = *offsets;
    for _ in 0..RANDOM_ORIENT_STEPS {
        match rng.gen_range(0..3u8) {
            0 => out = rotate(&out, Axis::X),
            1 => out = rotate(&out, Axis::Y),
            _ => {}
        }
    }
    out
}

/// Axis-aligned bounds of a set of offsets, in half cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min: HalfVec3,
    pub max: HalfVec3,
}

impl Bounds {
    /// Extent in whole cells along x, y, z
    pub fn cell_extent(&self) -> (u8, u8, u8) {
        (
            ((self.max.x - self.min.x) / 2 + 1) as u8,
            ((self.max.y - self.min.y) / 2 + 1) as u8,
            ((self.max.z - self.min.z) / 2 + 1) as u8,
        )
    }
}

pub fn bounds(offsets: &PieceShape) -> Bounds {
    let mut min = HalfVec3::new(i8::MAX, i8::MAX, i8::MAX);
    let mut max = HalfVec3::new(i8::MIN, i8::MIN, i8::MIN);
    for o in offsets {
        min = HalfVec3::new(min.x.min(o.x), min.y.min(o.y), min.z.min(o.z));
        max = HalfVec3::new(max.x.max(o.x), max.y.max(o.y), max.z.max(o.z));
    }
    Bounds { min, max }
}

/// Choose a random spawn position for a piece with these offsets
///
/// The footprint is placed uniformly at random among all (x, z) columns where it fits
/// inside the grid, with the lowest cube centered in its cell. Height is set so the
/// highest cube is centered in the top layer (`y = 11.5 - maxY`).
pub fn spawn_position<R: Rng + ?Sized>(offsets: &PieceShape, rng: &mut R) -> HalfVec3 {
    let b = bounds(offsets);
    let (w, _, d) = b.cell_extent();
    debug_assert!(w <= GRID_WIDTH && d <= GRID_DEPTH, "piece wider than the grid");

    let cx = rng.gen_range(0..=GRID_WIDTH - w) as i8;
    let cz = rng.gen_range(0..=GRID_DEPTH - d) as i8;

    // Cell c has its center at half-unit 2c + 1.
    HalfVec3::new(
        2 * cx + 1 - b.min.x,
        2 * TOP_LAYER as i8 + 1 - b.max.y,
        2 * cz + 1 - b.min.z,
    )
}
