//! PyO3 bindings for the texture operations.

use ndarray::{Array2, Array3};
use numpy::{PyArray2, PyArray3, PyReadonlyArray2, PyReadonlyArray3};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::host::TracingHost;
use crate::operation::{self, Operation, WarpOptions, DEFAULT_TILE_SIZE};

fn parse_operation(name: &str) -> PyResult<Operation> {
    Operation::from_name(name)
        .ok_or_else(|| PyValueError::new_err(format!("Unknown operation: '{name}'")))
}

/// Apply a texture operation to a single-band 2D array.
///
/// Args:
///     src: Input 2D array (f64), rows × cols.
///     operation: "hammer-tile", "polar-to-hammer" or "polar-to-mercator".
///     tile_size: Edge length of the scan tiles. Defaults to 64.
///
/// Returns:
///     New 2D array (f64) with the same shape.
#[pyfunction]
#[pyo3(signature = (src, operation, tile_size=DEFAULT_TILE_SIZE))]
pub fn warp_texture<'py>(
    py: Python<'py>,
    src: PyReadonlyArray2<'py, f64>,
    operation: &str,
    tile_size: usize,
) -> PyResult<Bound<'py, PyArray2<f64>>> {
    let op = parse_operation(operation)?;
    let src_array: Array2<f64> = src.as_array().to_owned();

    let result: Array2<f64> = py.allow_threads(move || {
        let mut host = TracingHost::new(op.name());
        operation::run(op, &src_array, WarpOptions { tile_size }, &mut host)
            .map_err(|e| PyValueError::new_err(e.to_string()))
    })?;

    Ok(PyArray2::from_owned_array(py, result))
}

/// Apply a texture operation to an interleaved 8-bit image.
///
/// Args:
///     src: Input 3D array (u8), rows × cols × channels with 1 to 4 channels.
///     operation: "hammer-tile", "polar-to-hammer" or "polar-to-mercator".
///     tile_size: Edge length of the scan tiles. Defaults to 64.
///
/// Returns:
///     New 3D array (u8) with the same shape. Pixels are moved whole, never
///     mixed across channels.
#[pyfunction]
#[pyo3(signature = (src, operation, tile_size=DEFAULT_TILE_SIZE))]
pub fn warp_texture_rgba<'py>(
    py: Python<'py>,
    src: PyReadonlyArray3<'py, u8>,
    operation: &str,
    tile_size: usize,
) -> PyResult<Bound<'py, PyArray3<u8>>> {
    let op = parse_operation(operation)?;
    let view = src.as_array();
    let (rows, cols, channels) = view.dim();
    if !(1..=4).contains(&channels) {
        return Err(PyValueError::new_err(format!(
            "Expected 1 to 4 channels, got {channels}"
        )));
    }

    // One opaque [u8; 4] per pixel; unused channels stay zero.
    let packed: Array2<[u8; 4]> = Array2::from_shape_fn((rows, cols), |(r, c)| {
        let mut px = [0u8; 4];
        for (k, v) in px.iter_mut().take(channels).enumerate() {
            *v = view[(r, c, k)];
        }
        px
    });

    let result: Array2<[u8; 4]> = py.allow_threads(move || {
        let mut host = TracingHost::new(op.name());
        operation::run(op, &packed, WarpOptions { tile_size }, &mut host)
            .map_err(|e| PyValueError::new_err(e.to_string()))
    })?;

    let out = Array3::from_shape_fn((rows, cols, channels), |(r, c, k)| result[(r, c)][k]);
    Ok(PyArray3::from_owned_array(py, out))
}
