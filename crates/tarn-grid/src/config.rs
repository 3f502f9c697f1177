//! Random grid configuration.

use std::error::Error;
use std::fmt;

use tarn_core::GridError;

/// Default number of columns per row.
pub const DEFAULT_LENGTH: u32 = 8;
/// Default number of rows.
pub const DEFAULT_WIDTH: u32 = 8;
/// Default tallest elevation a random column may have.
pub const DEFAULT_MAX_HEIGHT: u32 = 10;
/// Upper bound on `length * width` for a generated grid: 2^24 columns.
pub const MAX_COLUMNS: u64 = 1 << 24;

// ── GridConfigError ────────────────────────────────────────────────

/// Errors from [`RandomGridConfig::validate()`] and
/// [`random_grid`](crate::random_grid).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridConfigError {
    /// `length` is zero.
    ZeroLength,
    /// `width` is zero.
    ZeroWidth,
    /// `length * width` exceeds [`MAX_COLUMNS`].
    TooLarge {
        /// Requested number of columns.
        columns: u64,
        /// Maximum number of columns permitted.
        max: u64,
    },
    /// The generated rows were rejected as a heightmap.
    Grid(GridError),
}

impl fmt::Display for GridConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroLength => write!(f, "length must be at least 1"),
            Self::ZeroWidth => write!(f, "width must be at least 1"),
            Self::TooLarge { columns, max } => {
                write!(f, "grid has {columns} columns, limit is {max}")
            }
            Self::Grid(e) => write!(f, "{e}"),
        }
    }
}

impl Error for GridConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for GridConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

// ── RandomGridConfig ───────────────────────────────────────────────

/// Parameters for [`random_grid`](crate::random_grid).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RandomGridConfig {
    /// Columns per row. Default: [`DEFAULT_LENGTH`].
    pub length: u32,
    /// Number of rows. Default: [`DEFAULT_WIDTH`].
    pub width: u32,
    /// Elevations are drawn uniformly from `0..=max_height`.
    /// Default: [`DEFAULT_MAX_HEIGHT`].
    pub max_height: u32,
    /// Seed for the generator. Equal seeds give equal grids.
    pub seed: u64,
}

impl Default for RandomGridConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            width: DEFAULT_WIDTH,
            max_height: DEFAULT_MAX_HEIGHT,
            seed: 0,
        }
    }
}

impl RandomGridConfig {
    /// Validate all invariants.
    pub fn validate(&self) -> Result<(), GridConfigError> {
        if self.length == 0 {
            return Err(GridConfigError::ZeroLength);
        }
        if self.width == 0 {
            return Err(GridConfigError::ZeroWidth);
        }
        let columns = self.length as u64 * self.width as u64;
        if columns > MAX_COLUMNS {
            return Err(GridConfigError::TooLarge {
                columns,
                max: MAX_COLUMNS,
            });
        }
        Ok(())
    }
}
