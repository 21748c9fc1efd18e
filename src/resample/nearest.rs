//! Nearest-neighbor resampling kernel.

use crate::error::WarpError;
use crate::raster::PixelSource;

/// Truncate a fractional pixel coordinate to an index in `[0, len)`.
///
/// Pixel `i` covers `[i, i + 1)`, so truncation picks the containing pixel.
/// Coordinates past either edge clamp to the edge pixel; a NaN coordinate
/// maps to pixel 0. `len` must be non-zero.
pub fn pixel_index(v: f64, len: usize) -> usize {
    let i = v.floor() as isize;
    i.clamp(0, len as isize - 1) as usize
}

/// Sample `src` at the fractional pixel position `(x, y)`.
pub fn sample<S: PixelSource>(src: &S, x: f64, y: f64) -> Result<S::Pixel, WarpError> {
    let col = pixel_index(x, src.width());
    let row = pixel_index(y, src.height());
    src.get_pixel(col, row)
}
