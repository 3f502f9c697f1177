//! Flood engine for Tarn.
//!
//! Resolves every open cell of a [`CubeSpace`](tarn_space::CubeSpace) to
//! draining air or trapped water, then aggregates the result. The
//! [`Simulation`] driver runs the whole pipeline for one heightmap:
//! extrude, flood, optionally verify, collect statistics.
//!
//! Flooding proceeds strictly bottom-up. Each level is seeded from the
//! border and from the drained cells of the level below, then filled
//! breadth-first over 4-connected open cells. Whatever the fill cannot
//! reach holds water.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod flood;
pub mod hash;
pub mod metrics;
pub mod simulation;
pub mod stats;

pub use config::{ConfigError, SimConfig};
pub use flood::FloodEngine;
pub use hash::resolution_hash;
pub use metrics::{FloodMetrics, LevelMetrics};
pub use simulation::{full_simulation, Simulation, SimulationError, SimulationOutcome};
pub use stats::WaterStats;
