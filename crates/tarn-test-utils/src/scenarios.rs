//! Reference heightmaps with known results.
//!
//! - [`enclosed_pit`]: one sunken cell inside a rim.
//! - [`small_draining_grid`]: every hollow reaches the border.
//! - [`full_containment`]: a large basin sealed on all sides.
//! - [`draining_maze`]: corridors that mostly leak to the edge.
//! - [`tiered_waterfall`]: a stepped basin sealed by a tall wall.
//! - [`twin_basins`], [`diagonal_corners`], [`notched_rim`], [`rim_gap`]:
//!   smaller edge cases for connectivity and spill height.

use tarn_core::HeightMap;

/// A heightmap and the flood result it must produce.
#[derive(Clone, Debug)]
pub struct Scenario {
    pub name: &'static str,
    pub rows: Vec<Vec<u32>>,
    pub volume: u64,
    pub max_level: u32,
}

impl Scenario {
    fn new(name: &'static str, rows: Vec<Vec<u32>>, volume: u64, max_level: u32) -> Self {
        Self {
            name,
            rows,
            volume,
            max_level,
        }
    }

    /// The rows as a validated heightmap.
    ///
    /// # Panics
    ///
    /// If the scenario rows are malformed, which would be a fixture bug.
    pub fn heightmap(&self) -> HeightMap {
        HeightMap::new(self.rows.clone())
            .unwrap_or_else(|e| panic!("scenario '{}' is malformed: {e}", self.name))
    }
}

pub fn enclosed_pit() -> Scenario {
    Scenario::new(
        "enclosed_pit",
        vec![vec![1, 1, 1], vec![1, 0, 1], vec![1, 1, 1]],
        1,
        1,
    )
}

pub fn small_draining_grid() -> Scenario {
    Scenario::new(
        "small_draining_grid",
        vec![
            vec![0, 1, 1, 7],
            vec![3, 0, 1, 2],
            vec![2, 0, 0, 2],
            vec![4, 0, 3, 1],
        ],
        0,
        0,
    )
}

pub fn full_containment() -> Scenario {
    Scenario::new(
        "full_containment",
        vec![
            vec![0, 8, 8, 7, 7, 4, 4, 4],
            vec![8, 0, 0, 0, 0, 0, 0, 3],
            vec![8, 0, 0, 0, 0, 0, 0, 3],
            vec![4, 0, 0, 0, 0, 0, 0, 4],
            vec![4, 0, 0, 0, 0, 0, 0, 3],
            vec![4, 0, 0, 0, 0, 0, 0, 4],
            vec![4, 0, 0, 0, 0, 0, 0, 3],
            vec![4, 6, 6, 6, 4, 4, 4, 4],
        ],
        108,
        3,
    )
}

pub fn draining_maze() -> Scenario {
    Scenario::new(
        "draining_maze",
        vec![
            vec![0, 8, 8, 7, 7, 4, 4, 4],
            vec![8, 0, 0, 0, 3, 0, 0, 3],
            vec![8, 1, 3, 0, 3, 3, 3, 3],
            vec![4, 1, 3, 0, 0, 0, 0, 4],
            vec![4, 1, 3, 2, 2, 2, 0, 3],
            vec![4, 2, 3, 0, 0, 1, 0, 4],
            vec![4, 2, 3, 0, 0, 0, 0, 3],
            vec![4, 6, 6, 0, 4, 4, 2, 4],
        ],
        6,
        3,
    )
}

pub fn tiered_waterfall() -> Scenario {
    Scenario::new(
        "tiered_waterfall",
        vec![
            vec![0, 9, 9, 9, 9, 9, 9, 0],
            vec![9, 5, 8, 7, 7, 6, 5, 9],
            vec![0, 9, 9, 9, 9, 9, 6, 9],
            vec![0, 3, 3, 3, 9, 9, 4, 9],
            vec![0, 3, 3, 9, 9, 9, 4, 9],
            vec![2, 1, 1, 1, 3, 2, 4, 9],
            vec![2, 1, 2, 2, 2, 2, 4, 9],
            vec![2, 2, 2, 0, 4, 4, 4, 4],
        ],
        8,
        8,
    )
}

pub fn twin_basins() -> Scenario {
    Scenario::new(
        "twin_basins",
        vec![
            vec![3, 3, 3, 3, 3],
            vec![3, 0, 3, 0, 3],
            vec![3, 3, 3, 0, 3],
            vec![3, 3, 3, 3, 3],
        ],
        9,
        3,
    )
}

pub fn diagonal_corners() -> Scenario {
    Scenario::new(
        "diagonal_corners",
        vec![vec![0, 2, 0], vec![2, 0, 2], vec![0, 2, 0]],
        2,
        2,
    )
}

pub fn notched_rim() -> Scenario {
    Scenario::new(
        "notched_rim",
        vec![
            vec![5, 5, 5, 5, 5],
            vec![5, 0, 0, 0, 5],
            vec![5, 0, 0, 0, 2],
            vec![5, 0, 0, 0, 5],
            vec![5, 5, 5, 5, 5],
        ],
        18,
        2,
    )
}

pub fn rim_gap() -> Scenario {
    Scenario::new(
        "rim_gap",
        vec![
            vec![2, 2, 2, 2, 2],
            vec![2, 0, 0, 0, 2],
            vec![2, 0, 1, 0, 2],
            vec![2, 0, 0, 0, 0],
            vec![2, 2, 2, 2, 2],
        ],
        0,
        0,
    )
}

/// Every reference scenario, in a fixed order.
pub fn all() -> Vec<Scenario> {
    vec![
        enclosed_pit(),
        small_draining_grid(),
        full_containment(),
        draining_maze(),
        tiered_waterfall(),
        twin_basins(),
        diagonal_corners(),
        notched_rim(),
        rim_gap(),
    ]
}
