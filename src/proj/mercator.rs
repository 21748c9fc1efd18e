//! Spherical Mercator on the unit square.
//!
//!   forward: x = λ/2π + 0.5, y = ln(tan((φ + π/2)/2))/2π + 0.5
//!   inverse: λ = 2π·(x - 0.5), φ = 2·atan(exp((y - 0.5)·2π)) - π/2
//!
//! The square covers the full longitude range and the latitudes where the
//! projected height equals the width (about ±85.05°). Latitudes beyond that
//! fall outside `[0, 1]` and are handled by the caller's sampling policy.

use std::f64::consts::{FRAC_PI_2, PI};

use crate::affine::PlaneExtent;
use crate::proj::{LatLon, Projection, Unprojected};

pub fn project(lat: f64, lon: f64) -> (f64, f64) {
    let x = lon / (2.0 * PI) + 0.5;
    let y = ((lat + FRAC_PI_2) / 2.0).tan().ln() / (2.0 * PI) + 0.5;
    (x, y)
}

pub fn unproject(x: f64, y: f64) -> LatLon {
    let lon = 2.0 * PI * (x - 0.5);
    let lat = 2.0 * ((y - 0.5) * 2.0 * PI).exp().atan() - FRAC_PI_2;
    LatLon::new(lat, lon)
}

/// Mercator texture projection.
#[derive(Clone, Copy, Debug, Default)]
pub struct Mercator;

impl Projection for Mercator {
    fn forward(&self, p: LatLon) -> (f64, f64) {
        project(p.lat, p.lon)
    }

    fn inverse(&self, x: f64, y: f64) -> Unprojected {
        Unprojected::Geographic(unproject(x, y))
    }

    fn extent(&self) -> PlaneExtent {
        PlaneExtent::Unit
    }
}
