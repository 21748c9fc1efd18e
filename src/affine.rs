/// The square a projection's plane coordinates live in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaneExtent {
    /// `[-1, 1] × [-1, 1]`, the normalized space of the Hammer-Aitoff ellipse.
    SignedUnit,
    /// `[0, 1] × [0, 1]`, used by the equirectangular and Mercator textures.
    Unit,
}

/// A 2D affine transform between pixel space and a projection plane.
///
///   x = a * col + b * row + c
///   y = d * col + e * row + f
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Affine {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Affine {
    pub fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self { a, b, c, d, e, f }
    }

    /// Pixel `(col, row)` of a `width × height` raster → plane coordinates.
    ///
    /// Pixel indices are mapped by their upper-left corner, so pixel 0 lands
    /// on the low edge of the extent.
    pub fn pixel_to_plane(extent: PlaneExtent, width: usize, height: usize) -> Self {
        let (w, h) = (width as f64, height as f64);
        match extent {
            PlaneExtent::SignedUnit => Self::new(2.0 / w, 0.0, -1.0, 0.0, 2.0 / h, -1.0),
            PlaneExtent::Unit => Self::new(1.0 / w, 0.0, 0.0, 0.0, 1.0 / h, 0.0),
        }
    }

    /// Plane coordinates → fractional pixel position in a `width × height` raster.
    ///
    /// For the signed extent this is `px = (x + 1) / 2 * width`.
    pub fn plane_to_pixel(extent: PlaneExtent, width: usize, height: usize) -> Self {
        let (w, h) = (width as f64, height as f64);
        match extent {
            PlaneExtent::SignedUnit => Self::new(w / 2.0, 0.0, w / 2.0, 0.0, h / 2.0, h / 2.0),
            PlaneExtent::Unit => Self::new(w, 0.0, 0.0, 0.0, h, 0.0),
        }
    }

    /// Apply the forward transform: (col, row) -> (x, y).
    pub fn forward(&self, col: f64, row: f64) -> (f64, f64) {
        let x = self.a * col + self.b * row + self.c;
        let y = self.d * col + self.e * row + self.f;
        (x, y)
    }
}
