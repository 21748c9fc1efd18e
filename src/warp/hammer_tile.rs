//! Tiling fill for Hammer-Aitoff textures.
//!
//! A Hammer-Aitoff texture only carries content inside the ellipse inscribed
//! in its canvas. This pass rewrites everything outside the ellipse with the
//! content the projection wraps there from the other side of the sphere, so
//! the square canvas tiles seamlessly.

use ndarray::Array2;

use crate::affine::{Affine, PlaneExtent};
use crate::chunk::planner::{self, Tile};
use crate::error::WarpError;
use crate::proj::border::snap_inward;
use crate::proj::hammer::{self, Reprojected};
use crate::raster::PixelSource;
use crate::resample::nearest::pixel_index;

/// Fill the area outside the Hammer ellipse of `src` by antipodal wrap.
///
/// Tiles whose four corners all lie inside the ellipse are copied verbatim.
/// Every other tile is rescanned pixel by pixel: inside pixels are copied,
/// outside pixels take the source pixel under their reprojected location.
/// Sampled pixels are snapped inward onto the ellipse, so the result is a
/// fixed point of this function.
pub fn fill<S>(
    src: &S,
    tile_size: usize,
    progress: &mut dyn FnMut(f64),
) -> Result<Array2<S::Pixel>, WarpError>
where
    S: PixelSource,
    S::Pixel: Default,
{
    let (width, height) = (src.width(), src.height());
    let tiles = planner::plan_tiles((height, width), (tile_size, tile_size))?;

    let to_plane = Affine::pixel_to_plane(PlaneExtent::SignedUnit, width, height);
    let to_pixel = Affine::plane_to_pixel(PlaneExtent::SignedUnit, width, height);
    let inside = |col: usize, row: usize| {
        let (u, v) = to_plane.forward(col as f64, row as f64);
        hammer::reproject(u, v) == Reprojected::Unchanged
    };

    let mut dst = Array2::default((height, width));
    let mut skipped = 0usize;

    progress(0.0);
    let n = tiles.len();
    for (i, tile) in tiles.iter().enumerate() {
        if tile_is_inside(tile, &inside) {
            skipped += 1;
            for (col, row) in tile.pixels() {
                dst[(row, col)] = src.get_pixel(col, row)?;
            }
        } else {
            for (col, row) in tile.pixels() {
                let (u, v) = to_plane.forward(col as f64, row as f64);
                let (src_col, src_row) = match hammer::reproject(u, v) {
                    Reprojected::Unchanged => (col, row),
                    Reprojected::Moved(u2, v2) => {
                        let (sx, sy) = to_pixel.forward(u2, v2);
                        snap_inward(
                            pixel_index(sx, width),
                            pixel_index(sy, height),
                            width,
                            height,
                            &inside,
                        )
                    }
                };
                dst[(row, col)] = src.get_pixel(src_col, src_row)?;
            }
        }
        progress((i + 1) as f64 / n as f64);
    }
    if n == 0 {
        progress(1.0);
    }

    tracing::debug!(width, height, tiles = n, skipped, "filled hammer tiling");

    Ok(dst)
}

/// Conservative skip test: all four bounding-box corners are inside.
///
/// The ellipse is convex, so a tile whose corners are inside holds no
/// exterior pixel; straddling tiles are rescanned in full.
fn tile_is_inside<F>(tile: &Tile, inside: &F) -> bool
where
    F: Fn(usize, usize) -> bool,
{
    tile.corners().iter().all(|&(col, row)| inside(col, row))
}
