//! The level-by-level flood engine.
//!
//! For each level `z = 0 .. height`, in ascending order:
//!
//! 1. **Seed.** Every non-board cell in a border column is `Open`, and so
//!    is every non-board cell whose cell directly below finished as `Air`:
//!    water cannot rest on an open column. Board cells are `Blocked`;
//!    everything else starts `Unresolved`.
//! 2. **Fill.** One multi-source breadth-first traversal from all seeds
//!    at once, 4-connected, turning each reached `Unresolved` cell `Open`.
//! 3. **Finalize.** `Open` cells become `Air`, cells still `Unresolved`
//!    become `Water`. Board cells are left alone.
//!
//! Level `z` is only seeded once level `z - 1` is final. Within a level
//! the fill is order-independent and visits each cell at most once.
//!
//! Previously flooded cells are treated as candidates again, so flooding
//! an already resolved space reproduces the same classification.

use std::collections::VecDeque;
use std::time::Instant;

use crate::metrics::{FloodMetrics, LevelMetrics};
use tarn_core::{CellMaterial, DrainState};
use tarn_space::grid2d;
use tarn_space::CubeSpace;

/// Resolves the open cells of a [`CubeSpace`] into air and water.
///
/// Owns the per-level drain buffer and traversal queue, so one engine
/// can flood many spaces without reallocating for every level.
///
/// # Examples
///
/// ```
/// use tarn_core::{CellMaterial, HeightMap};
/// use tarn_engine::FloodEngine;
/// use tarn_space::CubeSpace;
///
/// let map = HeightMap::new(vec![vec![1, 1, 1], vec![1, 0, 1], vec![1, 1, 1]]).unwrap();
/// let mut space = CubeSpace::extrude(&map);
/// FloodEngine::new().flood(&mut space);
/// assert_eq!(space.material(1, 1, 0), CellMaterial::Water);
/// ```
#[derive(Debug)]
pub struct FloodEngine {
    drain: Vec<DrainState>,
    queue: VecDeque<usize>,
    level_metrics: bool,
}

impl Default for FloodEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl FloodEngine {
    /// Create an engine that records per-level metrics.
    pub fn new() -> Self {
        Self {
            drain: Vec::new(),
            queue: VecDeque::new(),
            level_metrics: true,
        }
    }

    /// Enable or disable per-level metrics. Total time is always recorded.
    pub fn with_level_metrics(mut self, enabled: bool) -> Self {
        self.level_metrics = enabled;
        self
    }

    /// Flood `space` in place, bottom level first.
    ///
    /// Never fails: every level terminates because each cell enters the
    /// queue at most once.
    pub fn flood(&mut self, space: &mut CubeSpace) -> FloodMetrics {
        let start = Instant::now();
        let length = space.length();
        let width = space.width();
        let area = space.level_area();

        self.drain.clear();
        self.drain.resize(area, DrainState::Unresolved);
        self.queue.clear();
        self.queue.reserve(area);

        let mut metrics = FloodMetrics {
            level_count: space.height(),
            ..FloodMetrics::default()
        };

        for z in 0..space.height() {
            let level_start = Instant::now();
            let (below, current) = space.level_with_below(z);
            let (seeded, board) = self.seed(below, current, length, width);
            let reached = self.fill(length, width);
            let water = self.finalize(current);

            log::debug!(
                "level {z}: {seeded} seeded, {reached} reached, {water} water, {board} board"
            );
            if self.level_metrics {
                metrics.levels.push(LevelMetrics {
                    z,
                    seeded,
                    reached,
                    water,
                    board,
                    elapsed_us: level_start.elapsed().as_micros() as u64,
                });
            }
        }

        metrics.total_us = start.elapsed().as_micros() as u64;
        metrics
    }

    /// Classify every cell of the level and queue the open ones.
    ///
    /// Returns `(seeded, board)` counts.
    fn seed(
        &mut self,
        below: Option<&[CellMaterial]>,
        current: &[CellMaterial],
        length: u32,
        width: u32,
    ) -> (u32, u32) {
        let mut seeded = 0u32;
        let mut board = 0u32;
        for (i, &material) in current.iter().enumerate() {
            let state = if material == CellMaterial::Board {
                board += 1;
                DrainState::Blocked
            } else {
                let (x, y) = grid2d::coords(i, length);
                let drained_below = below.is_some_and(|b| b[i] == CellMaterial::Air);
                if drained_below || grid2d::is_border(x, y, length, width) {
                    DrainState::Open
                } else {
                    DrainState::Unresolved
                }
            };
            if state == DrainState::Open {
                self.queue.push_back(i);
                seeded += 1;
            }
            self.drain[i] = state;
        }
        log::trace!("seeded {seeded} open cells");
        (seeded, board)
    }

    /// Breadth-first fill from the queued seeds. Returns the number of
    /// cells reached beyond the seeds.
    fn fill(&mut self, length: u32, width: u32) -> u32 {
        let mut reached = 0u32;
        while let Some(i) = self.queue.pop_front() {
            let (x, y) = grid2d::coords(i, length);
            for (nx, ny) in grid2d::neighbours4(x, y, length, width) {
                let j = grid2d::index(nx, ny, length);
                if self.drain[j] == DrainState::Unresolved {
                    self.drain[j] = DrainState::Open;
                    self.queue.push_back(j);
                    reached += 1;
                }
            }
        }
        reached
    }

    /// Write the level's final materials. Returns the water count.
    fn finalize(&self, current: &mut [CellMaterial]) -> u32 {
        let mut water = 0u32;
        for (cell, state) in current.iter_mut().zip(&self.drain) {
            match state {
                DrainState::Open => *cell = CellMaterial::Air,
                DrainState::Unresolved => {
                    *cell = CellMaterial::Water;
                    water += 1;
                }
                DrainState::Blocked => {}
            }
        }
        water
    }
}
