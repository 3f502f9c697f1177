//! Per-run flood metrics.
//!
//! [`FloodMetrics`] captures timing and fill counters for one flood,
//! enabling profiling and sanity checks on how much work each level did.

/// Counters for a single level of a flood.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LevelMetrics {
    /// Level index (`z`).
    pub z: u32,
    /// Cells seeded `Open` before the fill (border or drained below).
    pub seeded: u32,
    /// Additional cells the fill reached from the seeds.
    pub reached: u32,
    /// Cells finalized as water.
    pub water: u32,
    /// Terrain cells on this level.
    pub board: u32,
    /// Time spent on this level, in microseconds.
    pub elapsed_us: u64,
}

impl LevelMetrics {
    /// Cells that ended up draining (`seeded + reached`).
    pub fn drained(&self) -> u32 {
        self.seeded + self.reached
    }
}

/// Timing and counters collected during one flood.
///
/// `levels` is empty when level metrics were disabled; `total_us` is
/// always populated.
#[derive(Clone, Debug, Default)]
pub struct FloodMetrics {
    /// Wall-clock time for the whole flood, in microseconds.
    pub total_us: u64,
    /// Number of levels processed.
    pub level_count: u32,
    /// Per-level counters, in ascending `z`.
    pub levels: Vec<LevelMetrics>,
}

impl FloodMetrics {
    /// Sum of water cells over recorded levels.
    pub fn water_cells(&self) -> u64 {
        self.levels.iter().map(|l| l.water as u64).sum()
    }

    /// Sum of fill visits (seeded plus reached) over recorded levels.
    pub fn fill_visits(&self) -> u64 {
        self.levels.iter().map(|l| l.drained() as u64).sum()
    }
}
