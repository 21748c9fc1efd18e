//! Hammer-Aitoff equal-area projection on the normalized `[-1, 1]²` square.
//!
//! The projected sphere fills the unit disc `x² + y² ≤ 1` inscribed in the
//! square; the four corner regions outside it carry no projected content.
//!
//!   forward: z² = 1 + cos φ·cos(λ/2), x = cos φ·sin(λ/2)/z, y = sin φ/z
//!   inverse: z² = 1 - x²/2 - y²/2, λ = 2·atan(√2·x·z/(2z² - 1)), φ = asin(√2·y·z)

use std::f64::consts::SQRT_2;

use crate::affine::PlaneExtent;
use crate::proj::border::{clamped_asin, is_unchanged, nudge_denominator};
use crate::proj::{LatLon, Projection, Unprojected};

/// Project a point on the sphere into the normalized square.
pub fn project(lat: f64, lon: f64) -> (f64, f64) {
    let z2 = nudge_denominator(1.0 + lat.cos() * (lon / 2.0).cos());
    let z = z2.sqrt();
    (lat.cos() * (lon / 2.0).sin() / z, lat.sin() / z)
}

/// Unproject a normalized coordinate back onto the sphere.
///
/// The canvas corners map to `(0, 0)`; points exactly on the ellipse boundary
/// yield [`Unprojected::Identity`]. Points outside the ellipse still produce a
/// coordinate: the mirrored location [`reproject`] relies on.
pub fn unproject(x: f64, y: f64) -> Unprojected {
    if x.abs() == 1.0 && y.abs() == 1.0 {
        return Unprojected::Geographic(LatLon::new(0.0, 0.0));
    }
    let z2 = 1.0 - x * x / 2.0 - y * y / 2.0;
    let denom = 2.0 * z2 - 1.0;
    if denom == 0.0 {
        return Unprojected::Identity;
    }
    let z = z2.sqrt();
    let lon = 2.0 * (SQRT_2 * x * z / denom).atan();
    let lat = clamped_asin(SQRT_2 * y * z);
    Unprojected::Geographic(LatLon::new(lat, lon))
}

/// Result of sending a normalized point through the sphere and back.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Reprojected {
    /// The point already holds valid projected content.
    Unchanged,
    /// The point lies outside the ellipse; its content lives at `(x, y)`.
    Moved(f64, f64),
}

/// Unproject then re-project `(x, y)`, folding jitter below the identity
/// threshold into [`Reprojected::Unchanged`].
pub fn reproject(x: f64, y: f64) -> Reprojected {
    match unproject(x, y) {
        Unprojected::Identity => Reprojected::Unchanged,
        Unprojected::Geographic(p) => {
            let (x2, y2) = project(p.lat, p.lon);
            if is_unchanged(x, y, x2, y2) {
                Reprojected::Unchanged
            } else {
                Reprojected::Moved(x2, y2)
            }
        }
    }
}

/// Hammer-Aitoff over the signed unit square.
#[derive(Clone, Copy, Debug, Default)]
pub struct HammerAitoff;

impl Projection for HammerAitoff {
    fn forward(&self, p: LatLon) -> (f64, f64) {
        project(p.lat, p.lon)
    }

    fn inverse(&self, x: f64, y: f64) -> Unprojected {
        unproject(x, y)
    }

    fn extent(&self) -> PlaneExtent {
        PlaneExtent::SignedUnit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn geographic(u: Unprojected) -> LatLon {
        match u {
            Unprojected::Geographic(p) => p,
            Unprojected::Identity => panic!("expected a geographic coordinate"),
        }
    }

    #[test]
    fn test_origin() {
        assert_eq!(project(0.0, 0.0), (0.0, 0.0));
        assert_eq!(geographic(unproject(0.0, 0.0)), LatLon::new(0.0, 0.0));
    }

    #[test]
    fn test_roundtrip_interior() {
        for i in -14..=14 {
            for j in -30..=30 {
                let lat = i as f64 * 0.1;
                let lon = j as f64 * 0.1;
                let (x, y) = project(lat, lon);
                let p = geographic(unproject(x, y));
                assert_relative_eq!(p.lat, lat, epsilon = 1e-6);
                assert_relative_eq!(p.lon, lon, epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn test_poles_and_limb() {
        let (x, y) = project(FRAC_PI_2, 0.0);
        assert_relative_eq!(x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(y, 1.0, epsilon = 1e-12);

        let (x, y) = project(0.0, PI);
        assert_relative_eq!(x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_projected_points_lie_in_unit_disc() {
        for i in -9..=9 {
            for j in -18..=18 {
                let lat = i as f64 * 10.0_f64.to_radians();
                let lon = j as f64 * 10.0_f64.to_radians();
                let (x, y) = project(lat, lon);
                assert!(x * x + y * y <= 1.0 + 1e-12, "({x}, {y}) outside ellipse");
            }
        }
    }

    #[test]
    fn test_corners_are_fixed_fallback() {
        for &(x, y) in &[(-1.0, -1.0), (1.0, 1.0), (1.0, -1.0), (-1.0, 1.0)] {
            assert_eq!(unproject(x, y), Unprojected::Geographic(LatLon::new(0.0, 0.0)));
        }
    }

    #[test]
    fn test_boundary_returns_identity_sentinel() {
        for &(x, y) in &[(1.0, 0.0), (0.0, 1.0), (-1.0, 0.0), (0.0, -1.0), (0.6, 0.8)] {
            let z2 = 1.0 - x * x / 2.0 - y * y / 2.0;
            assert_eq!(2.0 * z2 - 1.0, 0.0);
            assert_eq!(unproject(x, y), Unprojected::Identity);
        }
    }

    #[test]
    fn test_pole_nudge_keeps_projection_finite() {
        // cos(0)·cos(π) = -1 makes the denominator exactly zero.
        let (x, y) = project(0.0, 2.0 * PI);
        assert!(x.is_finite() && y.is_finite());
    }

    #[test]
    fn test_reproject_inside_is_unchanged() {
        assert_eq!(reproject(0.0, 0.0), Reprojected::Unchanged);
        assert_eq!(reproject(0.3, -0.4), Reprojected::Unchanged);
        assert_eq!(reproject(-0.7, 0.5), Reprojected::Unchanged);
        assert_eq!(reproject(1.0, 0.0), Reprojected::Unchanged);
    }

    #[test]
    fn test_reproject_outside_lands_in_ellipse() {
        for &(x, y) in &[(0.9, 0.9), (-0.95, 0.5), (0.2, -0.99), (-1.0, -0.8)] {
            match reproject(x, y) {
                Reprojected::Moved(x2, y2) => {
                    assert!(x2 * x2 + y2 * y2 <= 1.0 + 1e-12);
                }
                Reprojected::Unchanged => panic!("({x}, {y}) is outside the ellipse"),
            }
        }
    }

    #[test]
    fn test_reproject_wraps_to_opposite_side() {
        // Just past the right limb, content comes from the left limb.
        match reproject(0.99, 0.3) {
            Reprojected::Moved(x2, _) => assert!(x2 < 0.0),
            Reprojected::Unchanged => panic!("expected a move"),
        }
    }

    #[test]
    fn test_projection_trait() {
        let proj = HammerAitoff;
        assert_eq!(proj.extent(), PlaneExtent::SignedUnit);
        let (x, y) = proj.forward(LatLon::new(0.4, -1.2));
        let p = geographic(proj.inverse(x, y));
        assert_relative_eq!(p.lat, 0.4, epsilon = 1e-9);
        assert_relative_eq!(p.lon, -1.2, epsilon = 1e-9);
    }
}
