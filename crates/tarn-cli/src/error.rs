use std::error::Error;
use std::fmt;
use std::io;

use tarn_engine::SimulationError;
use tarn_grid::{GridConfigError, ParseError};

/// Everything that can stop a run before results are printed.
#[derive(Debug)]
pub enum CliError {
    /// The heightmap file (or stdin) could not be read.
    Read { path: String, source: io::Error },
    /// The heightmap text is malformed.
    Parse(ParseError),
    /// Random grid parameters are invalid.
    Random(GridConfigError),
    /// The simulation rejected the grid or failed verification.
    Simulation(SimulationError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { path, source } => write!(f, "cannot read {path}: {source}"),
            Self::Parse(e) => write!(f, "invalid heightmap: {e}"),
            Self::Random(e) => write!(f, "invalid random grid: {e}"),
            Self::Simulation(e) => write!(f, "simulation failed: {e}"),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Parse(e) => Some(e),
            Self::Random(e) => Some(e),
            Self::Simulation(e) => Some(e),
        }
    }
}

impl From<ParseError> for CliError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<GridConfigError> for CliError {
    fn from(e: GridConfigError) -> Self {
        Self::Random(e)
    }
}

impl From<SimulationError> for CliError {
    fn from(e: SimulationError) -> Self {
        Self::Simulation(e)
    }
}
