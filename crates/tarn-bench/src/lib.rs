//! Benchmark profiles for the Tarn flooding engine.
//!
//! Provides pre-built [`HeightMap`] profiles for benchmarking:
//!
//! - [`reference_profile`]: 100x100 random terrain, heights 0-20
//! - [`stress_profile`]: 316x316 random terrain (~100K columns)
//! - [`basin_profile`]: one square bowl, every interior cell floods
//! - [`terraced_profile`]: concentric rings of rising walls

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use tarn_core::HeightMap;
use tarn_grid::{random_grid, RandomGridConfig};
use tarn_test_utils::bowl;

fn random_profile(side: u32, max_height: u32, seed: u64) -> HeightMap {
    random_grid(&RandomGridConfig {
        length: side,
        width: side,
        max_height,
        seed,
    })
    .expect("profile dimensions are non-zero")
}

/// 100x100 random terrain with heights `0..=20`.
pub fn reference_profile(seed: u64) -> HeightMap {
    random_profile(100, 20, seed)
}

/// 316x316 random terrain with heights `0..=20`.
///
/// Same distribution as [`reference_profile`] at 10x the column count.
pub fn stress_profile(seed: u64) -> HeightMap {
    random_profile(316, 20, seed)
}

/// A `side` x `side` bowl with a `rim`-tall border and a flat floor.
///
/// Worst case for the fill: nothing drains, so every level finalizes
/// `(side - 2)^2` water cells.
pub fn basin_profile(side: usize, rim: u32) -> HeightMap {
    HeightMap::new(bowl(side, side, rim, 0)).expect("bowl rows are square")
}

/// Concentric square rings, each one unit taller than the ring inside it,
/// around a zero-height centre.
///
/// Each level drains from the border inward until it meets the ring of
/// its own height, so traversal depth grows with the level.
pub fn terraced_profile(side: usize) -> HeightMap {
    let rows = (0..side)
        .map(|y| {
            (0..side)
                .map(|x| {
                    let ring = x.min(y).min(side - 1 - x).min(side - 1 - y);
                    (side / 2 - ring.min(side / 2)) as u32
                })
                .collect()
        })
        .collect();
    HeightMap::new(rows).expect("terrace rows are square")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_dimensions() {
        let r = reference_profile(42);
        assert_eq!((r.length(), r.width()), (100, 100));
        assert!(r.max_elevation() <= 20);
        let s = stress_profile(42);
        assert_eq!((s.length(), s.width()), (316, 316));
    }

    #[test]
    fn profiles_are_deterministic() {
        assert_eq!(reference_profile(7), reference_profile(7));
    }

    #[test]
    fn basin_profile_shape() {
        let b = basin_profile(10, 4);
        assert_eq!(b.height(0, 5), 4);
        assert_eq!(b.height(5, 5), 0);
    }

    #[test]
    fn terraces_rise_outward() {
        let t = terraced_profile(9);
        assert_eq!(t.height(4, 4), 0);
        assert_eq!(t.height(3, 4), 1);
        assert_eq!(t.height(0, 0), 4);
        assert_eq!(t.max_elevation(), 4);
    }
}
