//! PyO3 bindings for batch coordinate projection.

use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::proj::{self, LatLon, Projection, Unprojected};

fn lookup(name: &str) -> PyResult<Box<dyn Projection>> {
    proj::by_name(name)
        .ok_or_else(|| PyValueError::new_err(format!("Unknown projection: '{name}'")))
}

/// Project arrays of (lat, lon) in radians onto a projection's plane.
///
/// Args:
///     lat: 1D array of latitudes (radians).
///     lon: 1D array of longitudes (radians).
///     projection: "hammer", "mercator" or "equirectangular".
///
/// Returns:
///     Tuple of (x, y) plane coordinate arrays.
#[pyfunction]
#[pyo3(signature = (lat, lon, projection))]
#[allow(clippy::type_complexity)]
pub fn project_points<'py>(
    py: Python<'py>,
    lat: PyReadonlyArray1<'py, f64>,
    lon: PyReadonlyArray1<'py, f64>,
    projection: &str,
) -> PyResult<(Bound<'py, PyArray1<f64>>, Bound<'py, PyArray1<f64>>)> {
    let p = lookup(projection)?;
    let (lat, lon) = (lat.as_array(), lon.as_array());
    if lat.len() != lon.len() {
        return Err(PyValueError::new_err("lat and lon must have the same length"));
    }

    let (xs, ys): (Vec<f64>, Vec<f64>) = lat
        .iter()
        .zip(lon.iter())
        .map(|(&lat, &lon)| p.forward(LatLon::new(lat, lon)))
        .unzip();

    Ok((PyArray1::from_vec(py, xs), PyArray1::from_vec(py, ys)))
}

/// Unproject plane coordinates to (lat, lon) in radians.
///
/// Points with no inverse (exactly on the Hammer ellipse boundary) come back
/// as NaN.
///
/// Returns:
///     Tuple of (lat, lon) arrays.
#[pyfunction]
#[pyo3(signature = (x, y, projection))]
#[allow(clippy::type_complexity)]
pub fn unproject_points<'py>(
    py: Python<'py>,
    x: PyReadonlyArray1<'py, f64>,
    y: PyReadonlyArray1<'py, f64>,
    projection: &str,
) -> PyResult<(Bound<'py, PyArray1<f64>>, Bound<'py, PyArray1<f64>>)> {
    let p = lookup(projection)?;
    let (x, y) = (x.as_array(), y.as_array());
    if x.len() != y.len() {
        return Err(PyValueError::new_err("x and y must have the same length"));
    }

    let (lats, lons): (Vec<f64>, Vec<f64>) = x
        .iter()
        .zip(y.iter())
        .map(|(&x, &y)| match p.inverse(x, y) {
            Unprojected::Geographic(g) => (g.lat, g.lon),
            Unprojected::Identity => (f64::NAN, f64::NAN),
        })
        .unzip();

    Ok((PyArray1::from_vec(py, lats), PyArray1::from_vec(py, lons)))
}
