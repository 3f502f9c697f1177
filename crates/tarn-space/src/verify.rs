//! Invariant checks over extruded and resolved cube spaces.
//!
//! These are the structural guarantees the flood engine relies on and
//! promises. The simulation driver runs them after flooding when
//! verification is enabled; tests run them everywhere.

use std::error::Error;
use std::fmt;

use crate::cube::CubeSpace;
use tarn_core::{CellMaterial, CellPos, HeightMap};

/// A broken cube space invariant, with the first offending cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvariantViolation {
    /// Space dimensions disagree with the heightmap it came from.
    DimensionMismatch {
        /// `(length, width, height)` of the space.
        space: (u32, u32, u32),
        /// `(length, width, max_elevation)` of the heightmap.
        heightmap: (u32, u32, u32),
    },
    /// A cell is `Board` iff it lies below its column's elevation;
    /// this cell disagrees.
    BoardMismatch {
        /// The offending cell.
        pos: CellPos,
    },
    /// Water sits on a cell that is neither board nor water.
    FloatingWater {
        /// The water cell.
        pos: CellPos,
    },
    /// Water in a border column, which always drains.
    BorderWater {
        /// The water cell.
        pos: CellPos,
    },
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionMismatch { space, heightmap } => write!(
                f,
                "space is {}x{}x{} but heightmap is {}x{} with max elevation {}",
                space.0, space.1, space.2, heightmap.0, heightmap.1, heightmap.2
            ),
            Self::BoardMismatch { pos } => {
                write!(f, "board at {pos} disagrees with heightmap")
            }
            Self::FloatingWater { pos } => write!(f, "water at {pos} rests on open air"),
            Self::BorderWater { pos } => write!(f, "water at {pos} in a border column"),
        }
    }
}

impl Error for InvariantViolation {}

/// Check that `space` is exactly the extrusion of `map` as far as terrain
/// goes: same dimensions, and `Board` iff `map[y][x] > z`.
///
/// Non-board cells may hold either `Air` or `Water`, so this holds both
/// before and after flooding.
pub fn verify_extrusion(space: &CubeSpace, map: &HeightMap) -> Result<(), InvariantViolation> {
    let dims = (space.length(), space.width(), space.height());
    let expected = (map.length(), map.width(), map.max_elevation());
    if dims != expected {
        return Err(InvariantViolation::DimensionMismatch {
            space: dims,
            heightmap: expected,
        });
    }
    for (pos, material) in space.cells() {
        if material.is_board() != (map.height(pos.x, pos.y) > pos.z) {
            return Err(InvariantViolation::BoardMismatch { pos });
        }
    }
    Ok(())
}

/// Check the invariants of a flooded space: water only rests on board
/// or water, and no border column holds water.
pub fn verify_resolved(space: &CubeSpace) -> Result<(), InvariantViolation> {
    for (pos, material) in space.cells() {
        if !material.is_water() {
            continue;
        }
        if space.is_border(pos.x, pos.y) {
            return Err(InvariantViolation::BorderWater { pos });
        }
        if pos.z > 0 && space.material(pos.x, pos.y, pos.z - 1) == CellMaterial::Air {
            return Err(InvariantViolation::FloatingWater { pos });
        }
    }
    Ok(())
}
