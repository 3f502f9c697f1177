//! Helpers for a single level: a `length x width` grid with a
//! 4-connected (N/E/S/W) neighbourhood and an absorbing outer edge.
//!
//! Diagonal cells are never neighbours: two board cells meeting at a
//! corner are watertight.

use smallvec::SmallVec;

/// Cardinal offsets in north, east, south, west order.
pub const OFFSETS4: [(i64, i64); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

/// Resolve a single axis value. Returns `None` when it falls off the grid.
#[inline]
pub fn resolve_axis(val: i64, len: u32) -> Option<u32> {
    if val >= 0 && val < len as i64 {
        Some(val as u32)
    } else {
        None
    }
}

/// Flat row-major index of `(x, y)` within one level.
#[inline]
pub fn index(x: u32, y: u32, length: u32) -> usize {
    y as usize * length as usize + x as usize
}

/// Inverse of [`index`].
#[inline]
pub fn coords(i: usize, length: u32) -> (u32, u32) {
    let l = length as usize;
    ((i % l) as u32, (i / l) as u32)
}

/// Returns `true` when `(x, y)` lies on the outer ring of the grid.
#[inline]
pub fn is_border(x: u32, y: u32, length: u32, width: u32) -> bool {
    x == 0 || y == 0 || x + 1 == length || y + 1 == width
}

/// The in-bounds 4-connected neighbours of `(x, y)`.
///
/// Interior cells have 4, edge cells 3, corners 2. A 1-wide grid
/// degenerates to a line.
pub fn neighbours4(x: u32, y: u32, length: u32, width: u32) -> SmallVec<[(u32, u32); 4]> {
    let mut out = SmallVec::new();
    for (dx, dy) in OFFSETS4 {
        let nx = resolve_axis(x as i64 + dx, length);
        let ny = resolve_axis(y as i64 + dy, width);
        if let (Some(nx), Some(ny)) = (nx, ny) {
            out.push((nx, ny));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn interior_has_four_neighbours() {
        let n = neighbours4(2, 2, 5, 5);
        assert_eq!(n.len(), 4);
        assert!(n.contains(&(2, 1))); // north
        assert!(n.contains(&(3, 2))); // east
        assert!(n.contains(&(2, 3))); // south
        assert!(n.contains(&(1, 2))); // west
    }

    #[test]
    fn corner_has_two_neighbours() {
        let n = neighbours4(0, 0, 5, 5);
        assert_eq!(n.len(), 2);
        assert!(n.contains(&(1, 0)));
        assert!(n.contains(&(0, 1)));
    }

    #[test]
    fn edge_has_three_neighbours() {
        let n = neighbours4(2, 0, 5, 5);
        assert_eq!(n.len(), 3);
    }

    #[test]
    fn single_cell_has_no_neighbours() {
        assert!(neighbours4(0, 0, 1, 1).is_empty());
    }

    #[test]
    fn diagonals_are_not_neighbours() {
        let n = neighbours4(1, 1, 3, 3);
        for diag in [(0, 0), (2, 0), (0, 2), (2, 2)] {
            assert!(!n.contains(&diag));
        }
    }

    #[test]
    fn border_ring() {
        assert!(is_border(0, 2, 5, 5));
        assert!(is_border(4, 2, 5, 5));
        assert!(is_border(2, 0, 5, 5));
        assert!(is_border(2, 4, 5, 5));
        assert!(!is_border(2, 2, 5, 5));
    }

    #[test]
    fn index_round_trip() {
        for i in 0..35 {
            let (x, y) = coords(i, 7);
            assert_eq!(index(x, y, 7), i);
        }
    }

    proptest! {
        #[test]
        fn neighbours_symmetric(
            length in 1u32..10,
            width in 1u32..10,
            x in 0u32..10,
            y in 0u32..10,
        ) {
            let x = x % length;
            let y = y % width;
            for (nx, ny) in neighbours4(x, y, length, width) {
                prop_assert!(
                    neighbours4(nx, ny, length, width).contains(&(x, y)),
                    "neighbour symmetry violated: ({nx}, {ny}) in N(({x}, {y})) but not vice versa",
                );
            }
        }
    }
}
