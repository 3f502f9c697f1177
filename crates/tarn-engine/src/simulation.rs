//! End-to-end simulation driver.
//!
//! [`Simulation::run`] takes one heightmap through the full pipeline:
//! extrude → flood → verify (optional) → collect statistics.
//!
//! # Ownership model
//!
//! A `Simulation` owns a [`FloodEngine`] and reuses its scratch buffers
//! across runs; `run` therefore takes `&mut self`. Each run allocates a
//! fresh [`CubeSpace`] that is handed back to the caller inside
//! [`SimulationOutcome`]. Nothing is shared between runs.

use std::error::Error;
use std::fmt;

use crate::config::{ConfigError, SimConfig};
use crate::flood::FloodEngine;
use crate::hash::resolution_hash;
use crate::metrics::FloodMetrics;
use crate::stats::WaterStats;
use tarn_core::{GridError, HeightMap};
use tarn_space::{verify_extrusion, verify_resolved, CubeSpace, InvariantViolation};

// ── SimulationError ─────────────────────────────────────────────

/// Errors from [`Simulation::new`], [`Simulation::run`] and
/// [`full_simulation`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SimulationError {
    /// The configuration failed validation.
    Config(ConfigError),
    /// The input grid is malformed or too large.
    Grid(GridError),
    /// Post-flood verification found a broken invariant.
    Invariant(InvariantViolation),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::Invariant(e) => write!(f, "invariant violated: {e}"),
        }
    }
}

impl Error for SimulationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Grid(e) => Some(e),
            Self::Invariant(e) => Some(e),
        }
    }
}

impl From<ConfigError> for SimulationError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<GridError> for SimulationError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<InvariantViolation> for SimulationError {
    fn from(e: InvariantViolation) -> Self {
        Self::Invariant(e)
    }
}

// ── SimulationOutcome ───────────────────────────────────────────

/// Everything one run produces.
#[derive(Clone, Debug)]
pub struct SimulationOutcome {
    /// The flooded cube space, for callers needing per-cell detail.
    pub space: CubeSpace,
    /// Water volume, highest level, and per-level counts.
    pub stats: WaterStats,
    /// Timing and fill counters.
    pub metrics: FloodMetrics,
    /// [`resolution_hash`] of `space`.
    pub hash: u64,
}

// ── Simulation ──────────────────────────────────────────────────

/// Runs heightmaps through extrusion, flooding and aggregation.
///
/// # Example
///
/// ```
/// use tarn_core::HeightMap;
/// use tarn_engine::{SimConfig, Simulation};
///
/// let mut sim = Simulation::new(SimConfig::default()).unwrap();
/// let map = HeightMap::new(vec![vec![1, 1, 1], vec![1, 0, 1], vec![1, 1, 1]]).unwrap();
/// let outcome = sim.run(&map).unwrap();
/// assert_eq!(outcome.stats.summary(), (1, 1));
/// ```
#[derive(Debug)]
pub struct Simulation {
    config: SimConfig,
    engine: FloodEngine,
}

impl Simulation {
    /// Validate `config` and build a ready-to-run simulation.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let engine = FloodEngine::new().with_level_metrics(config.collect_level_metrics);
        Ok(Self { config, engine })
    }

    /// The configuration this simulation was built with.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Run the full pipeline on `map`.
    ///
    /// # Errors
    ///
    /// [`SimulationError::Grid`] if the extrusion would exceed
    /// `max_cells`; [`SimulationError::Invariant`] only when verification
    /// is enabled and fails.
    pub fn run(&mut self, map: &HeightMap) -> Result<SimulationOutcome, SimulationError> {
        let cells = map.extruded_cell_count();
        if cells > self.config.max_cells {
            return Err(GridError::TooLarge {
                cells,
                max: self.config.max_cells,
            }
            .into());
        }

        let mut space = CubeSpace::extrude(map);
        let metrics = self.engine.flood(&mut space);

        if self.config.verify {
            verify_extrusion(&space, map)?;
            verify_resolved(&space)?;
        }

        let stats = WaterStats::collect(&space);
        let hash = resolution_hash(&space);
        log::info!(
            "flooded {}x{}x{} grid: volume {}, max level {} ({} us)",
            space.length(),
            space.width(),
            space.height(),
            stats.total_water_volume,
            stats.max_water_level,
            metrics.total_us
        );

        Ok(SimulationOutcome {
            space,
            stats,
            metrics,
            hash,
        })
    }
}

/// Validate `rows`, flood them with the default configuration, and return
/// `(total_water_volume, max_water_level)`.
///
/// ```
/// let (volume, level) = tarn_engine::full_simulation(&[
///     vec![1, 1, 1],
///     vec![1, 0, 1],
///     vec![1, 1, 1],
/// ])
/// .unwrap();
/// assert_eq!((volume, level), (1, 1));
/// ```
pub fn full_simulation(rows: &[Vec<u32>]) -> Result<(u64, u32), SimulationError> {
    let map = HeightMap::new(rows.to_vec())?;
    let mut sim = Simulation::new(SimConfig::default())?;
    Ok(sim.run(&map)?.stats.summary())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tarn_test_utils::scenarios;

    #[test]
    fn full_simulation_matches_scenarios() {
        for s in scenarios::all() {
            let summary = full_simulation(&s.rows).unwrap();
            assert_eq!(
                summary,
                (s.volume, s.max_level),
                "scenario '{}' mismatch",
                s.name
            );
        }
    }

    #[test]
    fn full_simulation_rejects_malformed_grids() {
        assert_eq!(
            full_simulation(&[]),
            Err(SimulationError::Grid(GridError::Empty))
        );
        assert!(matches!(
            full_simulation(&[vec![1, 2, 3], vec![4]]),
            Err(SimulationError::Grid(GridError::Ragged { row: 1, .. }))
        ));
    }

    #[test]
    fn new_rejects_invalid_config() {
        let cfg = SimConfig {
            max_cells: 0,
            ..SimConfig::default()
        };
        assert_eq!(
            Simulation::new(cfg).unwrap_err(),
            ConfigError::ZeroCellBudget
        );
    }

    #[test]
    fn cell_budget_enforced() {
        let cfg = SimConfig {
            max_cells: 8,
            ..SimConfig::default()
        };
        let mut sim = Simulation::new(cfg).unwrap();
        let map = HeightMap::new(vec![vec![3, 3], vec![3, 3]]).unwrap();
        match sim.run(&map) {
            Err(SimulationError::Grid(GridError::TooLarge { cells: 12, max: 8 })) => {}
            other => panic!("expected TooLarge, got {other:?}"),
        }
        let small = HeightMap::new(vec![vec![2, 2], vec![2, 2]]).unwrap();
        assert!(sim.run(&small).is_ok());
    }

    #[test]
    fn verified_run_returns_consistent_outcome() {
        let cfg = SimConfig {
            verify: true,
            ..SimConfig::default()
        };
        let mut sim = Simulation::new(cfg).unwrap();
        let map = HeightMap::new(scenarios::full_containment().rows).unwrap();
        let outcome = sim.run(&map).unwrap();
        assert_eq!(outcome.stats.total_water_volume, 108);
        assert_eq!(outcome.metrics.water_cells(), 108);
        assert_eq!(outcome.hash, resolution_hash(&outcome.space));
    }

    #[test]
    fn repeated_runs_are_deterministic() {
        let mut sim = Simulation::new(SimConfig::default()).unwrap();
        let map = HeightMap::new(scenarios::tiered_waterfall().rows).unwrap();
        let a = sim.run(&map).unwrap();
        let b = sim.run(&map).unwrap();
        assert_eq!(a.hash, b.hash);
        assert_eq!(a.stats, b.stats);
    }

    #[test]
    fn error_source_chain() {
        let err = SimulationError::from(GridError::Empty);
        assert!(err.source().is_some());
        assert_eq!(err.to_string(), "grid: grid has no rows");
    }
}
