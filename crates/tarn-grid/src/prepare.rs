//! Normalization of ragged row input.

use tarn_core::{GridError, HeightMap};

/// Square off `rows` against the first row and validate the result.
///
/// Row 0 fixes the length. Shorter rows are padded with zero-height
/// cells and longer rows are truncated. The maximum elevation only
/// counts the cells that are kept.
///
/// # Errors
///
/// [`GridError::Empty`] if there are no rows, [`GridError::EmptyRow`] if
/// the first row has no cells.
///
/// # Examples
///
/// ```
/// use tarn_grid::prepare_grid;
///
/// let map = prepare_grid(vec![vec![3, 1, 2], vec![4], vec![5, 6, 7, 8]]).unwrap();
/// assert_eq!(map.to_rows(), vec![vec![3, 1, 2], vec![4, 0, 0], vec![5, 6, 7]]);
/// ```
pub fn prepare_grid(mut rows: Vec<Vec<u32>>) -> Result<HeightMap, GridError> {
    let length = rows.first().ok_or(GridError::Empty)?.len();
    if length == 0 {
        return Err(GridError::EmptyRow);
    }
    for (y, row) in rows.iter_mut().enumerate() {
        if row.len() != length {
            log::debug!("row {y}: resizing {} cells to {length}", row.len());
            row.resize(length, 0);
        }
    }
    HeightMap::new(rows)
}
