//! Inverse-mapping warp engine.
//!
//! For each destination pixel, unprojects through the destination projection,
//! projects into the source projection and nearest-samples the source raster.
//! The scan runs tile by tile so progress can be reported per tile.

use ndarray::Array2;

use crate::affine::Affine;
use crate::chunk::planner;
use crate::error::WarpError;
use crate::proj::{Projection, Unprojected};
use crate::raster::PixelSource;
use crate::resample::nearest;

/// Remap `src` from `src_proj` into `dst_proj`.
///
/// The destination has the source's dimensions and each of its pixels is
/// mapped through its center. Where the destination
/// projection has no inverse ([`Unprojected::Identity`]) the source pixel at
/// the same location is copied.
///
/// # Arguments
/// * `src`: source raster accessor
/// * `src_proj`: projection the source texture is in (forward side)
/// * `dst_proj`: projection of the output texture (inverse side)
/// * `tile_size`: edge length of the square scan tiles
/// * `progress`: receives fractions from 0.0 to 1.0 as tiles complete
pub fn warp<S>(
    src: &S,
    src_proj: &dyn Projection,
    dst_proj: &dyn Projection,
    tile_size: usize,
    progress: &mut dyn FnMut(f64),
) -> Result<Array2<S::Pixel>, WarpError>
where
    S: PixelSource,
    S::Pixel: Default,
{
    let (width, height) = (src.width(), src.height());
    let tiles = planner::plan_tiles((height, width), (tile_size, tile_size))?;

    tracing::debug!(width, height, tiles = tiles.len(), "warping raster");

    let mut dst = Array2::default((height, width));
    let dst_to_plane = Affine::pixel_to_plane(dst_proj.extent(), width, height);
    let src_to_pixel = Affine::plane_to_pixel(src_proj.extent(), width, height);

    progress(0.0);
    let n = tiles.len();
    for (i, tile) in tiles.iter().enumerate() {
        for (col, row) in tile.pixels() {
            let (x, y) = dst_to_plane.forward(col as f64 + 0.5, row as f64 + 0.5);

            let (src_col, src_row) = match dst_proj.inverse(x, y) {
                Unprojected::Identity => (col as f64, row as f64),
                Unprojected::Geographic(p) => {
                    let (sx, sy) = src_proj.forward(p);
                    src_to_pixel.forward(sx, sy)
                }
            };

            dst[(row, col)] = nearest::sample(src, src_col, src_row)?;
        }
        progress((i + 1) as f64 / n as f64);
    }
    if n == 0 {
        progress(1.0);
    }

    Ok(dst)
}
