//! Raster accessors and the named layer an operation replaces.

use ndarray::{Array2, ArrayView2};

use crate::error::WarpError;

/// Read access to a source raster.
///
/// Pixels are opaque: they are only ever copied. `x` is the column and `y`
/// the row; callers stay inside `[0, width) × [0, height)`.
pub trait PixelSource {
    type Pixel: Copy;

    fn width(&self) -> usize;

    fn height(&self) -> usize;

    fn get_pixel(&self, x: usize, y: usize) -> Result<Self::Pixel, WarpError>;
}

impl<P: Copy> PixelSource for ArrayView2<'_, P> {
    type Pixel = P;

    fn width(&self) -> usize {
        self.ncols()
    }

    fn height(&self) -> usize {
        self.nrows()
    }

    fn get_pixel(&self, x: usize, y: usize) -> Result<P, WarpError> {
        self.get((y, x))
            .copied()
            .ok_or_else(|| WarpError::computation(format!("pixel ({x}, {y}) out of bounds")))
    }
}

impl<P: Copy> PixelSource for Array2<P> {
    type Pixel = P;

    fn width(&self) -> usize {
        self.ncols()
    }

    fn height(&self) -> usize {
        self.nrows()
    }

    fn get_pixel(&self, x: usize, y: usize) -> Result<P, WarpError> {
        self.get((y, x))
            .copied()
            .ok_or_else(|| WarpError::computation(format!("pixel ({x}, {y}) out of bounds")))
    }
}

/// A named raster whose pixels an operation replaces wholesale on commit.
#[derive(Clone, Debug, PartialEq)]
pub struct Layer<P> {
    name: String,
    pixels: Array2<P>,
}

impl<P> Layer<P> {
    pub fn new(name: impl Into<String>, pixels: Array2<P>) -> Self {
        Self {
            name: name.into(),
            pixels,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pixels(&self) -> &Array2<P> {
        &self.pixels
    }

    /// Swap in a fully built replacement, returning the previous pixels.
    ///
    /// The replacement must have the same shape; the name is kept.
    pub fn replace(&mut self, pixels: Array2<P>) -> Result<Array2<P>, WarpError> {
        if pixels.dim() != self.pixels.dim() {
            return Err(WarpError::computation(format!(
                "replacement raster {:?} does not match layer {:?}",
                pixels.dim(),
                self.pixels.dim()
            )));
        }
        Ok(std::mem::replace(&mut self.pixels, pixels))
    }
}
