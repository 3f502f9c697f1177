//! Plain-text rendering of heightmaps and flooded spaces.
//!
//! Each view is a [`Display`](fmt::Display) wrapper, so it can be written
//! straight to any formatter; the `render_*` functions collect it into a
//! `String`.

use std::fmt;

use tarn_core::HeightMap;
use tarn_space::CubeSpace;

fn digits(n: u32) -> usize {
    n.checked_ilog10().map_or(1, |d| d as usize + 1)
}

fn write_table<'r>(
    f: &mut fmt::Formatter<'_>,
    rows: impl Iterator<Item = &'r [u32]>,
    cell_width: usize,
) -> fmt::Result {
    for row in rows {
        f.write_str("|")?;
        for value in row {
            write!(f, "{value:>cell_width$}|")?;
        }
        writeln!(f)?;
    }
    Ok(())
}

// ── Heightmap ──────────────────────────────────────────────────────

/// Right-aligned `|` table of elevations, one line per row.
#[derive(Clone, Copy, Debug)]
pub struct HeightTable<'a>(pub &'a HeightMap);

impl fmt::Display for HeightTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_table(f, self.0.rows(), digits(self.0.max_elevation()))
    }
}

/// Render `map` as a right-aligned table sized to its tallest column.
///
/// ```
/// use tarn_core::HeightMap;
/// use tarn_grid::render::render_heightmap;
///
/// let map = HeightMap::new(vec![vec![1, 10], vec![0, 2]]).unwrap();
/// assert_eq!(render_heightmap(&map), "| 1|10|\n| 0| 2|\n");
/// ```
pub fn render_heightmap(map: &HeightMap) -> String {
    HeightTable(map).to_string()
}

// ── Cube space ─────────────────────────────────────────────────────

/// Every column of a cube space, bottom-up, as material digits.
///
/// One line per row `y`. Each column `x` prints as `|m|m|...|` with
/// `0` air, `1` board and `2` water. With `coords` set, each cell is
/// prefixed by its `x-y-z:` position.
#[derive(Clone, Copy, Debug)]
pub struct CubeTable<'a> {
    /// The space to print.
    pub space: &'a CubeSpace,
    /// Prefix each cell with its coordinates.
    pub coords: bool,
}

impl fmt::Display for CubeTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let space = self.space;
        let (length, width, height) = (space.length(), space.width(), space.height());
        let xw = digits(length.saturating_sub(1));
        let yw = digits(width.saturating_sub(1));
        let zw = digits(height.saturating_sub(1));
        writeln!(f, "Length {length}, Width {width}, Height {height}")?;
        for y in 0..width {
            for x in 0..length {
                f.write_str("|")?;
                for (z, material) in space.column(x, y).enumerate() {
                    if self.coords {
                        write!(f, "{x:>xw$}-{y:>yw$}-{z:>zw$}:")?;
                    }
                    write!(f, "{material}|")?;
                }
                f.write_str(" ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Render the materials of every cell in `space`.
///
/// ```
/// use tarn_core::HeightMap;
/// use tarn_grid::render::render_cubes;
/// use tarn_space::CubeSpace;
///
/// let space = CubeSpace::extrude(&HeightMap::new(vec![vec![2, 1]]).unwrap());
/// assert_eq!(render_cubes(&space, false), "Length 2, Width 1, Height 2\n|1|1| |1|0| \n");
/// ```
pub fn render_cubes(space: &CubeSpace, coords: bool) -> String {
    CubeTable { space, coords }.to_string()
}

// ── Water depths ───────────────────────────────────────────────────

/// Number of water cells in each column, row-major.
pub fn water_depths(space: &CubeSpace) -> Vec<u32> {
    let mut depths = vec![0u32; space.level_area()];
    for z in 0..space.height() {
        for (depth, &m) in depths.iter_mut().zip(space.level(z)) {
            if m.is_water() {
                *depth += 1;
            }
        }
    }
    depths
}

/// Render per-column water depth as a right-aligned table.
pub fn render_water_depths(space: &CubeSpace) -> String {
    struct Depths {
        length: usize,
        depths: Vec<u32>,
    }

    impl fmt::Display for Depths {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let deepest = self.depths.iter().copied().max().unwrap_or(0);
            write_table(f, self.depths.chunks(self.length), digits(deepest))
        }
    }

    Depths {
        length: space.length().max(1) as usize,
        depths: water_depths(space),
    }
    .to_string()
}
