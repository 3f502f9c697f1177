//! Error types for heightmap validation.
//!
//! [`GridError`] is the only error the flooding core raises on its own:
//! it rejects malformed input before any simulation state is created.
//! Once a valid grid exists the remaining pipeline is total.

use std::error::Error;
use std::fmt;

/// Errors arising from heightmap construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// The grid has no rows (`width == 0`).
    Empty,
    /// The first row has no cells (`length == 0`).
    EmptyRow,
    /// A row's length differs from the first row's.
    Ragged {
        /// Index of the offending row.
        row: usize,
        /// Length fixed by row 0.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
    /// The extruded grid would exceed the configured cell budget.
    TooLarge {
        /// Number of cells the extrusion would allocate.
        cells: u64,
        /// Maximum number of cells permitted.
        max: u64,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid has no rows"),
            Self::EmptyRow => write!(f, "grid rows have no cells"),
            Self::Ragged {
                row,
                expected,
                found,
            } => {
                write!(f, "row {row} has {found} cells, expected {expected}")
            }
            Self::TooLarge { cells, max } => {
                write!(f, "grid extrudes to {cells} cells, limit is {max}")
            }
        }
    }
}

impl Error for GridError {}
