//! Error types for cube space operations.

use std::error::Error;
use std::fmt;

use tarn_core::{CellPos, GridError};

/// Errors arising from cube space construction or checked cell access.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpaceError {
    /// The input rows do not form a valid heightmap.
    Grid(GridError),
    /// A coordinate is outside the bounds of the space.
    CoordOutOfBounds {
        /// The offending coordinate.
        pos: CellPos,
        /// Human-readable description of the valid range.
        bounds: String,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "invalid grid: {e}"),
            Self::CoordOutOfBounds { pos, bounds } => {
                write!(f, "coordinate {pos} out of bounds: {bounds}")
            }
        }
    }
}

impl Error for SpaceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::CoordOutOfBounds { .. } => None,
        }
    }
}

impl From<GridError> for SpaceError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
