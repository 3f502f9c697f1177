//! The validated [`HeightMap`] input grid.

use crate::error::GridError;

/// A rectangular grid of non-negative integer elevations.
///
/// Row `y` holds the elevations of columns `x = 0..length`. The grid has
/// `width` rows. Construction rejects empty and ragged input, so every
/// `HeightMap` in existence is rectangular with at least one cell.
/// Elevations are stored row-major in a single buffer.
///
/// # Examples
///
/// ```
/// use tarn_core::HeightMap;
///
/// let map = HeightMap::new(vec![vec![1, 1, 1], vec![1, 0, 1], vec![1, 1, 1]]).unwrap();
/// assert_eq!(map.length(), 3);
/// assert_eq!(map.width(), 3);
/// assert_eq!(map.height(1, 1), 0);
/// assert_eq!(map.max_elevation(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeightMap {
    length: u32,
    width: u32,
    max: u32,
    cells: Vec<u32>,
}

impl HeightMap {
    /// Build a heightmap from rows of elevations.
    ///
    /// Row 0 fixes `length`; every other row must match it exactly.
    /// Normalizing ragged input is the caller's job.
    pub fn new(rows: Vec<Vec<u32>>) -> Result<Self, GridError> {
        let Some(first) = rows.first() else {
            return Err(GridError::Empty);
        };
        let length = first.len();
        if length == 0 {
            return Err(GridError::EmptyRow);
        }
        let mut cells = Vec::with_capacity(length * rows.len());
        for (row, values) in rows.iter().enumerate() {
            if values.len() != length {
                return Err(GridError::Ragged {
                    row,
                    expected: length,
                    found: values.len(),
                });
            }
            cells.extend_from_slice(values);
        }
        Self::from_flat(length, rows.len(), cells)
    }

    /// Build a heightmap from a row-major buffer of `length * width` values.
    pub fn from_flat(length: usize, width: usize, cells: Vec<u32>) -> Result<Self, GridError> {
        if width == 0 {
            return Err(GridError::Empty);
        }
        if length == 0 {
            return Err(GridError::EmptyRow);
        }
        if cells.len() != length * width {
            // The row holding the first missing or extra value is the culprit.
            let row = cells.len() / length;
            return Err(GridError::Ragged {
                row: row.min(width - 1),
                expected: length,
                found: cells.len() - row.min(width - 1) * length,
            });
        }
        let too_large = |value: usize| GridError::TooLarge {
            cells: value as u64,
            max: u32::MAX as u64,
        };
        let length = u32::try_from(length).map_err(|_| too_large(length))?;
        let width = u32::try_from(width).map_err(|_| too_large(width))?;
        let max = cells.iter().copied().max().unwrap_or(0);
        Ok(Self {
            length,
            width,
            max,
            cells,
        })
    }

    /// Number of columns per row.
    pub fn length(&self) -> u32 {
        self.length
    }

    /// Number of rows.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Highest elevation in the grid. This is the height of the
    /// extruded cube space.
    pub fn max_elevation(&self) -> u32 {
        self.max
    }

    /// Elevation of column `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `x >= length` or `y >= width`.
    pub fn height(&self, x: u32, y: u32) -> u32 {
        assert!(
            x < self.length && y < self.width,
            "({x}, {y}) outside {}x{} heightmap",
            self.length,
            self.width
        );
        self.cells[y as usize * self.length as usize + x as usize]
    }

    /// Elevation of column `(x, y)`, or `None` when out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<u32> {
        if x < self.length && y < self.width {
            Some(self.cells[y as usize * self.length as usize + x as usize])
        } else {
            None
        }
    }

    /// Iterate rows in `y` order.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> + '_ {
        self.cells.chunks_exact(self.length as usize)
    }

    /// Row-major view of all elevations.
    pub fn as_slice(&self) -> &[u32] {
        &self.cells
    }

    /// Number of unit cubes the extruded cube space will hold:
    /// `length * width * max_elevation`.
    pub fn extruded_cell_count(&self) -> u64 {
        self.length as u64 * self.width as u64 * self.max as u64
    }

    /// Copy the grid back out as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        self.rows().map(<[u32]>::to_vec).collect()
    }
}

impl TryFrom<Vec<Vec<u32>>> for HeightMap {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<u32>>) -> Result<Self, Self::Error> {
        Self::new(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn rejects_no_rows() {
        assert_eq!(HeightMap::new(vec![]), Err(GridError::Empty));
    }

    #[test]
    fn rejects_empty_first_row() {
        assert_eq!(HeightMap::new(vec![vec![]]), Err(GridError::EmptyRow));
    }

    #[test]
    fn rejects_ragged_rows() {
        let err = HeightMap::new(vec![vec![1, 2, 3], vec![1, 2]]).unwrap_err();
        assert_eq!(
            err,
            GridError::Ragged {
                row: 1,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn rejects_long_row() {
        let err = HeightMap::new(vec![vec![1, 2], vec![1, 2], vec![0, 0, 0]]).unwrap_err();
        assert!(matches!(err, GridError::Ragged { row: 2, .. }));
    }

    #[test]
    fn from_flat_rejects_short_buffer() {
        let err = HeightMap::from_flat(3, 2, vec![1, 2, 3, 4]).unwrap_err();
        assert_eq!(
            err,
            GridError::Ragged {
                row: 1,
                expected: 3,
                found: 1
            }
        );
    }

    #[test]
    fn dimensions_and_lookup() {
        let map = HeightMap::new(vec![vec![0, 1, 1, 7], vec![3, 0, 1, 2]]).unwrap();
        assert_eq!(map.length(), 4);
        assert_eq!(map.width(), 2);
        assert_eq!(map.max_elevation(), 7);
        assert_eq!(map.height(3, 0), 7);
        assert_eq!(map.height(0, 1), 3);
        assert_eq!(map.get(4, 0), None);
        assert_eq!(map.get(0, 2), None);
        assert_eq!(map.extruded_cell_count(), 4 * 2 * 7);
    }

    #[test]
    fn flat_zero_grid_has_zero_height() {
        let map = HeightMap::new(vec![vec![0; 3]; 3]).unwrap();
        assert_eq!(map.max_elevation(), 0);
        assert_eq!(map.extruded_cell_count(), 0);
    }

    #[test]
    #[should_panic(expected = "outside 2x1 heightmap")]
    fn height_out_of_bounds_panics() {
        let map = HeightMap::new(vec![vec![1, 2]]).unwrap();
        map.height(2, 0);
    }

    proptest! {
        #[test]
        fn rows_round_trip(
            rows in (1usize..8, 1usize..8).prop_flat_map(|(l, w)| {
                prop::collection::vec(prop::collection::vec(0u32..20, l), w)
            })
        ) {
            let map = HeightMap::new(rows.clone()).unwrap();
            prop_assert_eq!(map.to_rows(), rows.clone());
            let max = rows.iter().flatten().copied().max().unwrap();
            prop_assert_eq!(map.max_elevation(), max);
        }
    }
}
