//! Singularity policy shared by every projection near the poles, the
//! antimeridian and the Hammer ellipse boundary.
//!
//! None of these cases is an error: each is resolved deterministically so the
//! resampling pass never faults on valid input.

/// Squared plane distance below which a reprojected point counts as unchanged.
pub const IDENTITY_EPSILON: f64 = 1e-6;

/// Replacement for a `1 + cos(lat)·cos(lon/2)` denominator that is exactly 0.
pub const POLE_NUDGE: f64 = 1e-4;

/// `asin` with its argument clamped to `[-1, 1]`.
///
/// Rounding can push `√2·y·z` marginally past 1 for points that are
/// mathematically on the ellipse.
pub fn clamped_asin(t: f64) -> f64 {
    t.clamp(-1.0, 1.0).asin()
}

/// Nudge an exactly-zero denominator to [`POLE_NUDGE`].
///
/// Accepts a bounded positional error in an infinitesimal region instead of
/// dividing by zero.
pub fn nudge_denominator(z2: f64) -> f64 {
    if z2 == 0.0 {
        POLE_NUDGE
    } else {
        z2
    }
}

/// Whether `(x2, y2)` is close enough to `(x, y)` to sample `(x, y)` itself.
pub fn is_unchanged(x: f64, y: f64, x2: f64, y2: f64) -> bool {
    let dx = x2 - x;
    let dy = y2 - y;
    dx * dx + dy * dy < IDENTITY_EPSILON
}

/// Step a pixel index toward the canvas center until `inside` accepts it.
///
/// Used when nearest-neighbor truncation lands a point that lies inside the
/// Hammer ellipse on a pixel whose own coordinate is outside it. Stops at the
/// center pixel if nothing closer qualifies.
pub fn snap_inward<F>(
    col: usize,
    row: usize,
    width: usize,
    height: usize,
    inside: F,
) -> (usize, usize)
where
    F: Fn(usize, usize) -> bool,
{
    let (cx, cy) = (width / 2, height / 2);
    let (mut col, mut row) = (col, row);
    while !inside(col, row) && (col, row) != (cx, cy) {
        col = step_toward(col, cx);
        row = step_toward(row, cy);
    }
    (col, row)
}

fn step_toward(v: usize, target: usize) -> usize {
    use std::cmp::Ordering;
    match v.cmp(&target) {
        Ordering::Less => v + 1,
        Ordering::Greater => v - 1,
        Ordering::Equal => v,
    }
}
