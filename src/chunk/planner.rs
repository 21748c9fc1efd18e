//! Tile planner: partitions a raster into fixed-size tiles for the warp passes.

use crate::error::WarpError;

/// One tile of a raster.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tile {
    /// Tile bounds (row_start, row_end, col_start, col_end), end-exclusive.
    pub slice: (usize, usize, usize, usize),
}

impl Tile {
    /// The four corner pixels of the tile's bounding box as (col, row).
    ///
    /// Partial edge tiles use their actual last row and column.
    pub fn corners(&self) -> [(usize, usize); 4] {
        let (r0, r1, c0, c1) = self.slice;
        let (r_last, c_last) = (r1 - 1, c1 - 1);
        [(c0, r0), (c_last, r0), (c0, r_last), (c_last, r_last)]
    }

    /// Every pixel of the tile as (col, row), row-major.
    pub fn pixels(&self) -> impl Iterator<Item = (usize, usize)> {
        let (r0, r1, c0, c1) = self.slice;
        (r0..r1).flat_map(move |row| (c0..c1).map(move |col| (col, row)))
    }
}

/// Divide a `(rows, cols)` raster into tiles of `tile_size` (rows, cols).
///
/// Tiles are returned row by row; the last tile in each direction is clipped
/// to the raster. An empty raster yields no tiles.
pub fn plan_tiles(
    shape: (usize, usize),
    tile_size: (usize, usize),
) -> Result<Vec<Tile>, WarpError> {
    let (rows, cols) = shape;
    let (tile_h, tile_w) = tile_size;

    if tile_h == 0 || tile_w == 0 {
        return Err(WarpError::computation("Tile size must be > 0"));
    }

    let mut tiles = Vec::with_capacity(rows.div_ceil(tile_h) * cols.div_ceil(tile_w));

    let mut row0 = 0;
    while row0 < rows {
        let row1 = (row0 + tile_h).min(rows);

        let mut col0 = 0;
        while col0 < cols {
            let col1 = (col0 + tile_w).min(cols);
            tiles.push(Tile {
                slice: (row0, row1, col0, col1),
            });
            col0 = col1;
        }
        row0 = row1;
    }

    Ok(tiles)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_4_tiles_cover_full_extent() {
        let plans = plan_tiles((64, 64), (32, 32)).unwrap();
        assert_eq!(plans.len(), 4);

        let mut covered = vec![vec![false; 64]; 64];
        for tile in &plans {
            for (col, row) in tile.pixels() {
                assert!(!covered[row][col], "Overlapping tiles");
                covered[row][col] = true;
            }
        }
        for row in &covered {
            for &cell in row {
                assert!(cell, "Gap in coverage");
            }
        }
    }

    #[test]
    fn test_edge_tile_clipping() {
        // 100x100 with 64x64 tiles → last tile is partial
        let plans = plan_tiles((100, 100), (64, 64)).unwrap();
        assert_eq!(plans.len(), 4);

        let last = &plans[3];
        assert_eq!(last.slice, (64, 100, 64, 100));
        assert_eq!(last.pixels().count(), 36 * 36);
        assert_eq!(last.corners(), [(64, 64), (99, 64), (64, 99), (99, 99)]);
    }

    #[test]
    fn test_non_square_raster() {
        let plans = plan_tiles((10, 130), (64, 64)).unwrap();
        assert_eq!(plans.len(), 3);
        assert_eq!(plans[2].slice, (0, 10, 128, 130));
        let total: usize = plans.iter().map(|t| t.pixels().count()).sum();
        assert_eq!(total, 1300);
    }

    #[test]
    fn test_single_tile() {
        let plans = plan_tiles((64, 64), (64, 64)).unwrap();
        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0].slice, (0, 64, 0, 64));
        assert_eq!(plans[0].corners(), [(0, 0), (63, 0), (0, 63), (63, 63)]);
    }

    #[test]
    fn test_single_pixel_tile_corners_coincide() {
        let plans = plan_tiles((3, 3), (1, 1)).unwrap();
        assert_eq!(plans.len(), 9);
        assert_eq!(plans[4].corners(), [(1, 1); 4]);
    }

    #[test]
    fn test_empty_raster() {
        assert!(plan_tiles((0, 16), (8, 8)).unwrap().is_empty());
    }

    #[test]
    fn test_zero_tile_size_error() {
        assert!(plan_tiles((64, 64), (0, 32)).is_err());
        assert!(plan_tiles((64, 64), (32, 0)).is_err());
    }
}
