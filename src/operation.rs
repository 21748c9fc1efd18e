//! The three texture operations and their transactional runner.

use ndarray::Array2;

use crate::error::WarpError;
use crate::host::{Host, Transaction};
use crate::proj::equirectangular::Equirectangular;
use crate::proj::hammer::HammerAitoff;
use crate::proj::mercator::Mercator;
use crate::raster::{Layer, PixelSource};
use crate::warp::{engine, hammer_tile};

/// Default edge length of the square scan tiles.
pub const DEFAULT_TILE_SIZE: usize = 64;

/// A texture operation on the active image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    /// Fill outside the Hammer ellipse so the square canvas tiles.
    HammerTile,
    /// Equirectangular → Hammer-Aitoff.
    PolarToHammer,
    /// Equirectangular → Mercator.
    PolarToMercator,
}

impl Operation {
    pub const ALL: [Operation; 3] = [
        Operation::HammerTile,
        Operation::PolarToHammer,
        Operation::PolarToMercator,
    ];

    /// Parse from a kebab-case name such as `"polar-to-hammer"`.
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "hammer-tile" => Some(Self::HammerTile),
            "polar-to-hammer" => Some(Self::PolarToHammer),
            "polar-to-mercator" => Some(Self::PolarToMercator),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::HammerTile => "hammer-tile",
            Self::PolarToHammer => "polar-to-hammer",
            Self::PolarToMercator => "polar-to-mercator",
        }
    }
}

/// Tunables shared by all operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WarpOptions {
    pub tile_size: usize,
}

impl Default for WarpOptions {
    fn default() -> Self {
        Self {
            tile_size: DEFAULT_TILE_SIZE,
        }
    }
}

/// Compute the result of `op` on `src` without any host involvement.
pub fn remap<S>(
    op: Operation,
    src: &S,
    options: WarpOptions,
    progress: &mut dyn FnMut(f64),
) -> Result<Array2<S::Pixel>, WarpError>
where
    S: PixelSource,
    S::Pixel: Default,
{
    let tile_size = options.tile_size;
    match op {
        Operation::HammerTile => hammer_tile::fill(src, tile_size, progress),
        Operation::PolarToHammer => {
            engine::warp(src, &Equirectangular, &HammerAitoff, tile_size, progress)
        }
        Operation::PolarToMercator => {
            engine::warp(src, &Equirectangular, &Mercator, tile_size, progress)
        }
    }
}

/// Run `op` on `src` inside a host transaction.
///
/// On success the transaction commits and the new raster is returned. On
/// failure the error goes to [`Host::report_error`], the transaction rolls
/// back and the partial destination is dropped.
pub fn run<S, H>(
    op: Operation,
    src: &S,
    options: WarpOptions,
    host: &mut H,
) -> Result<Array2<S::Pixel>, WarpError>
where
    S: PixelSource,
    S::Pixel: Default,
    H: Host,
{
    tracing::info!(operation = op.name(), width = src.width(), height = src.height(), "running");

    let mut tx = Transaction::begin(host);
    let result = remap(op, src, options, &mut |f| tx.host().progress(f));
    finish(tx, op, result)
}

/// Run `op` on `layer` and swap the result in under the same name.
///
/// The layer is left byte-identical when the operation fails.
pub fn apply<P, H>(
    op: Operation,
    layer: &mut Layer<P>,
    options: WarpOptions,
    host: &mut H,
) -> Result<(), WarpError>
where
    P: Copy + Default,
    H: Host,
{
    tracing::info!(operation = op.name(), layer = layer.name(), "applying");

    let mut tx = Transaction::begin(host);
    let remapped = remap(op, &layer.pixels().view(), options, &mut |f| tx.host().progress(f));
    let result = remapped.and_then(|dst| layer.replace(dst)).map(|_| ());
    finish(tx, op, result)
}

fn finish<T, H: Host>(
    mut tx: Transaction<'_, H>,
    op: Operation,
    result: Result<T, WarpError>,
) -> Result<T, WarpError> {
    match result {
        Ok(value) => {
            tx.commit();
            Ok(value)
        }
        Err(err) => {
            tracing::warn!(operation = op.name(), error = %err, "operation abandoned");
            tx.host().report_error(&err.to_string());
            Err(err)
        }
    }
}
