pub mod border;
pub mod equirectangular;
pub mod hammer;
pub mod mercator;

use crate::affine::PlaneExtent;

/// A point on the sphere, in radians.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl LatLon {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Outcome of an inverse projection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Unprojected {
    Geographic(LatLon),
    /// No reprojection is defined here: sample the same location instead.
    Identity,
}

/// Trait for the texture projections supporting forward and inverse transforms.
///
/// Plane coordinates are expressed in the projection's [`PlaneExtent`].
pub trait Projection: Send + Sync {
    /// Forward: (lat, lon) -> plane (x, y)
    fn forward(&self, p: LatLon) -> (f64, f64);

    /// Inverse: plane (x, y) -> (lat, lon), or [`Unprojected::Identity`].
    fn inverse(&self, x: f64, y: f64) -> Unprojected;

    fn extent(&self) -> PlaneExtent;
}

/// Look up one of the texture projections by name.
///
/// Accepts `"hammer"` (or `"hammer-aitoff"`), `"mercator"` and
/// `"equirectangular"` (or `"polar"`).
pub fn by_name(name: &str) -> Option<Box<dyn Projection>> {
    match name.to_lowercase().as_str() {
        "hammer" | "hammer-aitoff" => Some(Box::new(hammer::HammerAitoff)),
        "mercator" => Some(Box::new(mercator::Mercator)),
        "equirectangular" | "polar" => Some(Box::new(equirectangular::Equirectangular)),
        _ => None,
    }
}
