//! Resampling kernels for the warp engine.
//!
//! Only nearest-neighbor sampling exists: pixels are opaque and are never
//! blended.

pub mod nearest;
