//! The [`CubeSpace`] cell model and its extrusion from a heightmap.

use crate::error::SpaceError;
use crate::grid2d;
use tarn_core::{CellMaterial, CellPos, HeightMap};

/// A `length x width x height` grid of unit cubes.
///
/// Cell `(x, y, z)` sits in column `(x, y)` at level `z`. Storage is a
/// single flat buffer ordered level-major (`z`, then `y`, then `x`), so
/// each level is one contiguous slice of `length * width` cells.
///
/// A freshly extruded space holds only `Board` and `Air`. The flood
/// engine later rewrites every `Air` cell to its final `Air` or `Water`
/// classification in place.
///
/// # Examples
///
/// ```
/// use tarn_core::{CellMaterial, HeightMap};
/// use tarn_space::CubeSpace;
///
/// let map = HeightMap::new(vec![vec![2, 0], vec![1, 1]]).unwrap();
/// let space = CubeSpace::extrude(&map);
/// assert_eq!(space.height(), 2);
/// assert_eq!(space.material(0, 0, 1), CellMaterial::Board);
/// assert_eq!(space.material(1, 0, 0), CellMaterial::Air);
/// assert_eq!(space.material(0, 1, 1), CellMaterial::Air);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CubeSpace {
    length: u32,
    width: u32,
    height: u32,
    cells: Vec<CellMaterial>,
}

impl CubeSpace {
    /// Extrude a heightmap into a cube space.
    ///
    /// The space is `max_elevation` levels tall. For each column, cells
    /// below the column's elevation are `Board` and the rest are `Air`.
    pub fn extrude(map: &HeightMap) -> Self {
        let length = map.length();
        let width = map.width();
        let height = map.max_elevation();
        let area = length as usize * width as usize;
        let mut cells = vec![CellMaterial::Air; area * height as usize];
        for (i, &elevation) in map.as_slice().iter().enumerate() {
            for z in 0..elevation as usize {
                cells[z * area + i] = CellMaterial::Board;
            }
        }
        Self {
            length,
            width,
            height,
            cells,
        }
    }

    /// Validate raw rows and extrude them.
    ///
    /// Entry point for input nobody has checked yet: empty or ragged
    /// rows are rejected with [`SpaceError::Grid`] before any cell is
    /// created.
    pub fn from_rows(rows: &[Vec<u32>]) -> Result<Self, SpaceError> {
        let map = HeightMap::new(rows.to_vec())?;
        Ok(Self::extrude(&map))
    }

    /// Number of columns per row (`x` extent).
    pub fn length(&self) -> u32 {
        self.length
    }

    /// Number of rows (`y` extent).
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of levels (`z` extent).
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Cells per level.
    pub fn level_area(&self) -> usize {
        self.length as usize * self.width as usize
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` when the space has no levels.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    fn offset(&self, x: u32, y: u32, z: u32) -> usize {
        z as usize * self.level_area() + grid2d::index(x, y, self.length)
    }

    /// Bounds-check a coordinate and return its flat offset.
    pub fn checked_pos(&self, x: u32, y: u32, z: u32) -> Result<usize, SpaceError> {
        if x < self.length && y < self.width && z < self.height {
            Ok(self.offset(x, y, z))
        } else {
            Err(SpaceError::CoordOutOfBounds {
                pos: CellPos::new(x, y, z),
                bounds: format!(
                    "[0, {}) x [0, {}) x [0, {})",
                    self.length, self.width, self.height
                ),
            })
        }
    }

    /// Material at `(x, y, z)`, or `None` when out of bounds.
    pub fn get(&self, x: u32, y: u32, z: u32) -> Option<CellMaterial> {
        self.checked_pos(x, y, z).ok().map(|i| self.cells[i])
    }

    /// Material at `(x, y, z)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is out of bounds.
    pub fn material(&self, x: u32, y: u32, z: u32) -> CellMaterial {
        match self.checked_pos(x, y, z) {
            Ok(i) => self.cells[i],
            Err(e) => panic!("{e}"),
        }
    }

    /// Overwrite the material at `(x, y, z)`.
    pub fn set(
        &mut self,
        x: u32,
        y: u32,
        z: u32,
        material: CellMaterial,
    ) -> Result<(), SpaceError> {
        let i = self.checked_pos(x, y, z)?;
        self.cells[i] = material;
        Ok(())
    }

    /// Row-major slice of level `z`.
    ///
    /// # Panics
    ///
    /// Panics if `z >= height`.
    pub fn level(&self, z: u32) -> &[CellMaterial] {
        let area = self.level_area();
        let start = z as usize * area;
        &self.cells[start..start + area]
    }

    /// Level `z` mutably together with the finished level below it.
    ///
    /// Returns `None` for the level below when `z == 0`.
    ///
    /// # Panics
    ///
    /// Panics if `z >= height`.
    pub fn level_with_below(
        &mut self,
        z: u32,
    ) -> (Option<&[CellMaterial]>, &mut [CellMaterial]) {
        let area = self.level_area();
        let start = z as usize * area;
        let (lower, upper) = self.cells.split_at_mut(start);
        let lower: &[CellMaterial] = lower;
        let below = if z > 0 {
            Some(&lower[start - area..])
        } else {
            None
        };
        (below, &mut upper[..area])
    }

    /// Materials of column `(x, y)` from the ground up.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is out of bounds.
    pub fn column(&self, x: u32, y: u32) -> impl Iterator<Item = CellMaterial> + '_ {
        assert!(
            x < self.length && y < self.width,
            "column ({x}, {y}) outside {}x{} space",
            self.length,
            self.width
        );
        let base = grid2d::index(x, y, self.length);
        let area = self.level_area();
        (0..self.height as usize).map(move |z| self.cells[z * area + base])
    }

    /// Returns `true` when column `(x, y)` lies on the outer border.
    pub fn is_border(&self, x: u32, y: u32) -> bool {
        grid2d::is_border(x, y, self.length, self.width)
    }

    /// Every cell with its position, in storage order.
    pub fn cells(&self) -> impl Iterator<Item = (CellPos, CellMaterial)> + '_ {
        let area = self.level_area();
        self.cells.iter().enumerate().map(move |(i, &m)| {
            let (x, y) = grid2d::coords(i % area, self.length);
            (CellPos::new(x, y, (i / area) as u32), m)
        })
    }

    /// Flat view of every cell in storage order.
    pub fn as_slice(&self) -> &[CellMaterial] {
        &self.cells
    }

    /// Number of cells holding `material`.
    pub fn count(&self, material: CellMaterial) -> usize {
        self.cells.iter().filter(|&&m| m == material).count()
    }

    /// Turn every `Water` cell back into `Air`, leaving terrain untouched.
    pub fn drain_all(&mut self) {
        for cell in &mut self.cells {
            if cell.is_water() {
                *cell = CellMaterial::Air;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tarn_core::GridError;

    fn map(rows: Vec<Vec<u32>>) -> HeightMap {
        HeightMap::new(rows).unwrap()
    }

    #[test]
    fn extrude_dimensions() {
        let space = CubeSpace::extrude(&map(vec![vec![0, 1, 1, 7], vec![3, 0, 1, 2]]));
        assert_eq!(space.length(), 4);
        assert_eq!(space.width(), 2);
        assert_eq!(space.height(), 7);
        assert_eq!(space.cell_count(), 4 * 2 * 7);
        assert_eq!(space.level_area(), 8);
    }

    #[test]
    fn extrude_marks_board_below_elevation() {
        let space = CubeSpace::extrude(&map(vec![vec![3, 0], vec![1, 2]]));
        let col: Vec<_> = space.column(0, 0).collect();
        assert_eq!(col, vec![CellMaterial::Board; 3]);
        assert!(space.column(1, 0).all(|m| m == CellMaterial::Air));
        let col: Vec<_> = space.column(1, 1).collect();
        assert_eq!(
            col,
            vec![CellMaterial::Board, CellMaterial::Board, CellMaterial::Air]
        );
        assert_eq!(space.count(CellMaterial::Board), 6);
        assert_eq!(space.count(CellMaterial::Water), 0);
    }

    #[test]
    fn flat_ground_extrudes_to_empty_space() {
        let space = CubeSpace::extrude(&map(vec![vec![0, 0], vec![0, 0]]));
        assert_eq!(space.height(), 0);
        assert!(space.is_empty());
        assert_eq!(space.cells().count(), 0);
    }

    #[test]
    fn from_rows_rejects_malformed_input() {
        assert_eq!(
            CubeSpace::from_rows(&[]),
            Err(SpaceError::Grid(GridError::Empty))
        );
        assert_eq!(
            CubeSpace::from_rows(&[vec![]]),
            Err(SpaceError::Grid(GridError::EmptyRow))
        );
        assert!(matches!(
            CubeSpace::from_rows(&[vec![1, 2], vec![1]]),
            Err(SpaceError::Grid(GridError::Ragged { row: 1, .. }))
        ));
    }

    #[test]
    fn checked_access() {
        let mut space = CubeSpace::extrude(&map(vec![vec![1, 2]]));
        assert_eq!(space.get(1, 0, 1), Some(CellMaterial::Board));
        assert_eq!(space.get(2, 0, 0), None);
        assert_eq!(space.get(0, 0, 2), None);
        space.set(0, 0, 1, CellMaterial::Water).unwrap();
        assert_eq!(space.material(0, 0, 1), CellMaterial::Water);
        let err = space.set(0, 1, 0, CellMaterial::Water).unwrap_err();
        assert!(matches!(err, SpaceError::CoordOutOfBounds { .. }));
        assert!(err.to_string().contains("(0, 1, 0)"));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn material_out_of_bounds_panics() {
        let space = CubeSpace::extrude(&map(vec![vec![1]]));
        space.material(0, 0, 1);
    }

    #[test]
    fn level_slices_are_row_major() {
        let space = CubeSpace::extrude(&map(vec![vec![1, 0, 2], vec![0, 2, 0]]));
        use CellMaterial::{Air, Board};
        assert_eq!(space.level(0), &[Board, Air, Board, Air, Board, Air]);
        assert_eq!(space.level(1), &[Air, Air, Board, Air, Board, Air]);
    }

    #[test]
    fn level_with_below_splits_adjacent_levels() {
        let mut space = CubeSpace::extrude(&map(vec![vec![2, 1]]));
        {
            let (below, current) = space.level_with_below(0);
            assert!(below.is_none());
            assert_eq!(current.len(), 2);
        }
        let (below, current) = space.level_with_below(1);
        assert_eq!(below, Some(&[CellMaterial::Board, CellMaterial::Board][..]));
        current[1] = CellMaterial::Water;
        assert_eq!(space.material(1, 0, 1), CellMaterial::Water);
    }

    #[test]
    fn cells_iterator_reports_positions() {
        let space = CubeSpace::extrude(&map(vec![vec![1, 2], vec![0, 2]]));
        let boards: Vec<CellPos> = space
            .cells()
            .filter(|(_, m)| m.is_board())
            .map(|(p, _)| p)
            .collect();
        assert_eq!(
            boards,
            vec![
                CellPos::new(0, 0, 0),
                CellPos::new(1, 0, 0),
                CellPos::new(1, 1, 0),
                CellPos::new(1, 0, 1),
                CellPos::new(1, 1, 1),
            ]
        );
    }

    #[test]
    fn drain_all_only_touches_water() {
        let mut space = CubeSpace::extrude(&map(vec![vec![1, 0, 1]]));
        space.set(1, 0, 0, CellMaterial::Water).unwrap();
        space.drain_all();
        assert_eq!(space.count(CellMaterial::Water), 0);
        assert_eq!(space.count(CellMaterial::Board), 2);
    }

    proptest! {
        #[test]
        fn board_iff_below_elevation(
            rows in (1usize..6, 1usize..6).prop_flat_map(|(l, w)| {
                prop::collection::vec(prop::collection::vec(0u32..6, l), w)
            })
        ) {
            let hm = HeightMap::new(rows).unwrap();
            let space = CubeSpace::extrude(&hm);
            prop_assert_eq!(space.height(), hm.max_elevation());
            for (pos, m) in space.cells() {
                let board = hm.height(pos.x, pos.y) > pos.z;
                prop_assert_eq!(m == CellMaterial::Board, board, "at {}", pos);
                prop_assert!(m != CellMaterial::Water);
            }
        }
    }
}
