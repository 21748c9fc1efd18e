//! Equirectangular ("polar") texture mapping on the unit square.
//!
//! forward: x = λ/2π + 0.5, y = φ/π + 0.5
//! inverse: λ = 2π·(x - 0.5), φ = π·(y - 0.5)

use std::f64::consts::PI;

use crate::affine::PlaneExtent;
use crate::proj::{LatLon, Projection, Unprojected};

pub fn project(lat: f64, lon: f64) -> (f64, f64) {
    (lon / (2.0 * PI) + 0.5, lat / PI + 0.5)
}

pub fn unproject(x: f64, y: f64) -> LatLon {
    LatLon::new(PI * (y - 0.5), 2.0 * PI * (x - 0.5))
}

/// Latitude and longitude mapped linearly onto the texture.
#[derive(Clone, Copy, Debug, Default)]
pub struct Equirectangular;

impl Projection for Equirectangular {
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
