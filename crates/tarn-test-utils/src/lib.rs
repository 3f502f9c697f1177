//! Test utilities for Tarn development.
//!
//! Provides the reference heightmaps in [`scenarios`], each paired with
//! its known water volume and highest water level, plus a [`bowl`]
//! builder for generating enclosed basins of arbitrary size.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod scenarios;

pub use scenarios::Scenario;

/// A `length` x `width` grid whose border cells are `rim` tall and whose
/// interior cells are `floor` tall.
///
/// With `rim > floor` and both dimensions at least 3, the interior holds
/// `(length - 2) * (width - 2) * (rim - floor)` cells of water.
pub fn bowl(length: usize, width: usize, rim: u32, floor: u32) -> Vec<Vec<u32>> {
    (0..width)
        .map(|y| {
            (0..length)
                .map(|x| {
                    if x == 0 || y == 0 || x + 1 == length || y + 1 == width {
                        rim
                    } else {
                        floor
                    }
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bowl_shape() {
        let b = bowl(4, 3, 5, 1);
        assert_eq!(b, vec![vec![5, 5, 5, 5], vec![5, 1, 1, 5], vec![5, 5, 5, 5]]);
    }

    #[test]
    fn degenerate_bowl_is_all_rim() {
        assert_eq!(bowl(2, 2, 3, 0), vec![vec![3, 3], vec![3, 3]]);
    }
}
