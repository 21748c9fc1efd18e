pub mod affine;
pub mod chunk;
pub mod error;
pub mod host;
pub mod operation;
pub mod proj;
pub mod raster;
pub mod resample;
pub mod warp;
#[cfg(feature = "python")]
mod py;

pub use error::WarpError;
pub use operation::{Operation, WarpOptions};

/// A Python module implemented in Rust.
#[cfg(feature = "python")]
#[pyo3::pymodule]
#[pyo3(name = "_rust")]
fn python_module(m: &pyo3::Bound<'_, pyo3::types::PyModule>) -> pyo3::PyResult<()> {
    py::register(m)
}
