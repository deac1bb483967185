use pyo3::prelude::*;

pub mod error;
pub mod linalg;
pub mod matrix {
    pub mod dense;
    pub mod matrix;
    pub mod pivoting;
    pub mod reduce;
    pub mod solve;
    pub mod validate;
}
pub mod quadrature;

pub use error::{Error, Result};

/// A Python module implemented in Rust.
#[pymodule]
fn rust_linalg(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(linalg::py_row_echelon, m)?)?;
    m.add_function(wrap_pyfunction!(linalg::py_reduced_row_echelon, m)?)?;
    m.add_function(wrap_pyfunction!(linalg::py_rank, m)?)?;
    m.add_function(wrap_pyfunction!(linalg::py_solve, m)?)?;
    m.add_function(wrap_pyfunction!(linalg::py_gaussian_elimination, m)?)?;
    m.add_function(wrap_pyfunction!(quadrature::py_rectangle_integration, m)?)?;
    m.add_function(wrap_pyfunction!(quadrature::py_trapezoid_integration, m)?)?;
    m.add_function(wrap_pyfunction!(quadrature::py_simpson_integration, m)?)?;
    Ok(())
}
