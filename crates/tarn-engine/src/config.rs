//! Simulation configuration, validation, and error types.
//!
//! [`SimConfig`] is the input for constructing a
//! [`Simulation`](crate::Simulation). [`validate()`](SimConfig::validate)
//! checks its invariants once at startup.

use std::error::Error;
use std::fmt;

/// Default upper bound on extruded cells: 2^28 (256 MiB of cells).
pub const DEFAULT_MAX_CELLS: u64 = 1 << 28;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`SimConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `max_cells` is zero, so no heightmap with terrain could run.
    ZeroCellBudget,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroCellBudget => write!(f, "max_cells must be at least 1"),
        }
    }
}

impl Error for ConfigError {}

// ── SimConfig ──────────────────────────────────────────────────────

/// Configuration for one or more simulation runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimConfig {
    /// Reject heightmaps whose extrusion would exceed this many cells.
    /// Default: [`DEFAULT_MAX_CELLS`].
    pub max_cells: u64,
    /// Check extrusion and resolution invariants after flooding.
    /// Default: on in debug builds, off in release builds.
    pub verify: bool,
    /// Record per-level flood metrics. Default: `true`.
    pub collect_level_metrics: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            max_cells: DEFAULT_MAX_CELLS,
            verify: cfg!(debug_assertions),
            collect_level_metrics: true,
        }
    }
}

impl SimConfig {
    /// Validate all invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_cells == 0 {
            return Err(ConfigError::ZeroCellBudget);
        }
        Ok(())
    }
}
