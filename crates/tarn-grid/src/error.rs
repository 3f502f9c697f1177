//! Error type for textual grid input.

use std::error::Error;
use std::fmt;

use tarn_core::GridError;

/// Errors from [`parse_grid`](crate::parse_grid).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// A cell is not a non-negative integer that fits in `u32`.
    InvalidNumber {
        /// 1-based line number in the input.
        line: usize,
        /// The offending token.
        token: String,
    },
    /// A `]` has no matching `[`, or a `[` is never closed.
    UnbalancedBracket {
        /// 1-based line where the mismatch was detected.
        line: usize,
    },
    /// The parsed rows do not form a valid heightmap.
    Grid(GridError),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidNumber { line, token } => {
                write!(f, "line {line}: '{token}' is not a valid height")
            }
            Self::UnbalancedBracket { line } => write!(f, "line {line}: unbalanced brackets"),
            Self::Grid(e) => write!(f, "{e}"),
        }
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::InvalidNumber { .. } | Self::UnbalancedBracket { .. } => None,
        }
    }
}

impl From<GridError> for ParseError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let e = ParseError::InvalidNumber {
            line: 3,
            token: "-1".into(),
        };
        assert_eq!(e.to_string(), "line 3: '-1' is not a valid height");
        assert!(e.source().is_none());
        let e = ParseError::UnbalancedBracket { line: 4 };
        assert_eq!(e.to_string(), "line 4: unbalanced brackets");
        let e = ParseError::from(GridError::Empty);
        assert_eq!(e.to_string(), "grid has no rows");
        assert!(e.source().is_some());
    }
}
