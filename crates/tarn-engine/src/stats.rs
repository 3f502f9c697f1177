//! Water statistics over a flooded cube space.

use tarn_core::CellMaterial;
use tarn_space::CubeSpace;

/// Aggregate counts from a single read-only pass over a flooded space.
///
/// # Examples
///
/// ```
/// use tarn_core::HeightMap;
/// use tarn_engine::{FloodEngine, WaterStats};
/// use tarn_space::CubeSpace;
///
/// let map = HeightMap::new(vec![vec![1, 1, 1], vec![1, 0, 1], vec![1, 1, 1]]).unwrap();
/// let mut space = CubeSpace::extrude(&map);
/// FloodEngine::new().flood(&mut space);
/// let stats = WaterStats::collect(&space);
/// assert_eq!(stats.total_water_volume, 1);
/// assert_eq!(stats.max_water_level, 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WaterStats {
    /// Number of `Water` cells.
    pub total_water_volume: u64,
    /// Highest `z + 1` over water cells, `0` when dry.
    pub max_water_level: u32,
    /// Number of `Air` cells.
    pub air_cells: u64,
    /// Number of `Board` cells.
    pub board_cells: u64,
    /// Water cells per level, indexed by `z`.
    pub per_level: Vec<u64>,
}

impl WaterStats {
    /// Scan `space` once and tally every cell.
    pub fn collect(space: &CubeSpace) -> Self {
        let mut stats = Self {
            per_level: vec![0; space.height() as usize],
            ..Self::default()
        };
        for z in 0..space.height() {
            for &material in space.level(z) {
                match material {
                    CellMaterial::Air => stats.air_cells += 1,
                    CellMaterial::Board => stats.board_cells += 1,
                    CellMaterial::Water => {
                        stats.total_water_volume += 1;
                        stats.per_level[z as usize] += 1;
                        stats.max_water_level = z + 1;
                    }
                }
            }
        }
        stats
    }

    /// `(total_water_volume, max_water_level)`.
    pub fn summary(&self) -> (u64, u32) {
        (self.total_water_volume, self.max_water_level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tarn_core::HeightMap;

    #[test]
    fn unflooded_space_has_no_water() {
        let map = HeightMap::new(vec![vec![2, 0], vec![1, 3]]).unwrap();
        let stats = WaterStats::collect(&CubeSpace::extrude(&map));
        assert_eq!(stats.summary(), (0, 0));
        assert_eq!(stats.board_cells, 6);
        assert_eq!(stats.air_cells, 6);
        assert_eq!(stats.per_level, vec![0, 0, 0]);
    }

    #[test]
    fn empty_space() {
        let map = HeightMap::new(vec![vec![0]]).unwrap();
        let stats = WaterStats::collect(&CubeSpace::extrude(&map));
        assert_eq!(stats, WaterStats::default());
    }

    #[test]
    fn counts_water_by_level() {
        let map = HeightMap::new(vec![vec![3, 3, 3], vec![3, 0, 3], vec![3, 3, 3]]).unwrap();
        let mut space = CubeSpace::extrude(&map);
        space.set(1, 1, 0, CellMaterial::Water).unwrap();
        space.set(1, 1, 1, CellMaterial::Water).unwrap();
        let stats = WaterStats::collect(&space);
        assert_eq!(stats.summary(), (2, 2));
        assert_eq!(stats.per_level, vec![1, 1, 0]);
        assert_eq!(stats.air_cells, 1);
        assert_eq!(stats.board_cells, 24);
    }
}
