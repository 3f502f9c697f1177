//! Tarn: a heightmap flooding engine.
//!
//! Given a rectangular grid of column heights, Tarn extrudes it into a
//! 3D space of unit cubes, floods every cell that cannot drain off the
//! edge, and reports the total water volume and the highest water level.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Tarn sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use tarn::prelude::*;
//!
//! let map = parse_grid(
//!     "3 3 3 3\n\
//!      3 0 1 3\n\
//!      3 3 3 3",
//! )
//! .unwrap();
//! let mut sim = Simulation::new(SimConfig::default()).unwrap();
//! let outcome = sim.run(&map).unwrap();
//! assert_eq!(outcome.stats.summary(), (5, 3));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `tarn-core` | `HeightMap`, cell materials, `GridError` |
//! | [`space`] | `tarn-space` | `CubeSpace`, 2D neighbourhoods, invariant checks |
//! | [`engine`] | `tarn-engine` | Flood engine, statistics, simulation driver |
//! | [`grid`] | `tarn-grid` | Grid preparation, parsing, random generation, rendering |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types (`tarn-core`).
///
/// [`types::HeightMap`] is the validated input; [`types::CellMaterial`]
/// classifies every cube.
pub use tarn_core as types;

/// The cube space and its invariants (`tarn-space`).
pub use tarn_space as space;

/// Flooding, statistics and the simulation driver (`tarn-engine`).
///
/// [`engine::full_simulation`] is the one-call entry point.
pub use tarn_engine as engine;

/// Heightmap preparation and text rendering (`tarn-grid`).
pub use tarn_grid as grid;

/// Common imports for typical Tarn usage.
///
/// ```rust
/// use tarn::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use tarn_core::{CellMaterial, CellPos, GridError, HeightMap};

    // Space
    pub use tarn_space::{CubeSpace, InvariantViolation};

    // Engine
    pub use tarn_engine::{
        full_simulation, FloodEngine, FloodMetrics, SimConfig, Simulation, SimulationError,
        SimulationOutcome, WaterStats,
    };

    // Grid
    pub use tarn_grid::{parse_grid, prepare_grid, random_grid, ParseError, RandomGridConfig};
}
