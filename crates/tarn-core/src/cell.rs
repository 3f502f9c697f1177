//! Per-cell classifications and the [`CellPos`] coordinate triple.

use std::fmt;

/// Material occupying one unit cube of the extruded terrain.
///
/// `Board` is fixed by extrusion and never changes. `Air` and `Water`
/// are the two outcomes the flood engine assigns to every other cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellMaterial {
    /// Open air: either unresolved or resolved as draining.
    #[default]
    Air,
    /// Terrain.
    Board,
    /// Enclosed air that holds water.
    Water,
}

impl CellMaterial {
    /// Stable numeric tag: 0 air, 1 board, 2 water.
    ///
    /// Used for hashing and text rendering.
    pub fn tag(self) -> u8 {
        match self {
            Self::Air => 0,
            Self::Board => 1,
            Self::Water => 2,
        }
    }

    /// Returns `true` for `Board`.
    pub fn is_board(self) -> bool {
        matches!(self, Self::Board)
    }

    /// Returns `true` for `Water`.
    pub fn is_water(self) -> bool {
        matches!(self, Self::Water)
    }
}

impl fmt::Display for CellMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Drainage classification of one column at the level being flooded.
///
/// Recomputed for every level and discarded once the level is final.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DrainState {
    /// Connected to the outside, directly or through the level below.
    Open,
    /// Terrain; carries no drainage state.
    Blocked,
    /// Not (yet) reached from any open cell.
    #[default]
    Unresolved,
}

/// A cell coordinate `(x, y, z)` within a cube space.
///
/// `x` runs along a row, `y` selects the row, `z` is the level above
/// ground.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellPos {
    /// Column index within a row.
    pub x: u32,
    /// Row index.
    pub y: u32,
    /// Level above ground.
    pub z: u32,
}

impl CellPos {
    /// Construct a position.
    pub fn new(x: u32, y: u32, z: u32) -> Self {
        Self { x, y, z }
    }
}

impl fmt::Display for CellPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl From<(u32, u32, u32)> for CellPos {
    fn from((x, y, z): (u32, u32, u32)) -> Self {
        Self { x, y, z }
    }
}
