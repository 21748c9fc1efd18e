use pyo3::prelude::*;

mod points;
mod texture;

/// Register all Python-visible functions.
pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(texture::warp_texture, m)?)?;
    m.add_function(wrap_pyfunction!(texture::warp_texture_rgba, m)?)?;
    m.add_function(wrap_pyfunction!(points::project_points, m)?)?;
    m.add_function(wrap_pyfunction!(points::unproject_points, m)?)?;
    Ok(())
}
