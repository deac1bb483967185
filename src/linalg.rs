//! Row-list entry points. Every function copies its input into a fresh
//! [`DenseMatrix`] before touching it, so the caller's rows are never
//! modified, and returns newly allocated rows.

use pyo3::prelude::*;

use crate::error::Result;
use crate::matrix::dense::DenseMatrix;
use crate::matrix::matrix::{Element, Matrix};
use crate::matrix::pivoting::Pivoting;

pub fn row_echelon<T: Element>(matrix: &[Vec<T>]) -> Result<Vec<Vec<T>>> {
    row_echelon_with(matrix, Pivoting::default())
}

pub fn row_echelon_with<T: Element>(
    matrix: &[Vec<T>],
    pivoting: Pivoting<T>,
) -> Result<Vec<Vec<T>>> {
    Ok(DenseMatrix::from_list(matrix)?.row_echelon(pivoting).to_list())
}

pub fn reduced_row_echelon<T: Element>(matrix: &[Vec<T>]) -> Result<Vec<Vec<T>>> {
    reduced_row_echelon_with(matrix, Pivoting::default())
}

pub fn reduced_row_echelon_with<T: Element>(
    matrix: &[Vec<T>],
    pivoting: Pivoting<T>,
) -> Result<Vec<Vec<T>>> {
    Ok(DenseMatrix::from_list(matrix)?
        .reduced_row_echelon(pivoting)
        .to_list())
}

pub fn rank<T: Element>(matrix: &[Vec<T>]) -> Result<usize> {
    rank_with(matrix, Pivoting::default())
}

pub fn rank_with<T: Element>(matrix: &[Vec<T>], pivoting: Pivoting<T>) -> Result<usize> {
    Ok(DenseMatrix::from_list(matrix)?.rank(pivoting))
}

pub fn solve<T: Element>(coefficients: &[Vec<T>], rhs: &[T]) -> Result<Vec<T>> {
    solve_with(coefficients, rhs, Pivoting::default())
}

pub fn solve_with<T: Element>(
    coefficients: &[Vec<T>],
    rhs: &[T],
    pivoting: Pivoting<T>,
) -> Result<Vec<T>> {
    DenseMatrix::from_list(coefficients)?.solve_right(rhs, pivoting)
}

// --------------------------------------------------
//                      PYTHON
// --------------------------------------------------

// Python passes its lists by value, so the caller's objects are never touched.
// A `tolerance` switches to partial pivoting; it must be finite.

#[pyfunction]
#[pyo3(name = "row_echelon", signature = (matrix, tolerance = None))]
pub fn py_row_echelon(matrix: Vec<Vec<f64>>, tolerance: Option<f64>) -> PyResult<Vec<Vec<f64>>> {
    Ok(row_echelon_with(&matrix, Pivoting::from_tolerance(tolerance)?)?)
}

#[pyfunction]
#[pyo3(name = "reduced_row_echelon", signature = (matrix, tolerance = None))]
pub fn py_reduced_row_echelon(
    matrix: Vec<Vec<f64>>,
    tolerance: Option<f64>,
) -> PyResult<Vec<Vec<f64>>> {
    Ok(reduced_row_echelon_with(
        &matrix,
        Pivoting::from_tolerance(tolerance)?,
    )?)
}

#[pyfunction]
#[pyo3(name = "rank", signature = (matrix, tolerance = None))]
pub fn py_rank(matrix: Vec<Vec<f64>>, tolerance: Option<f64>) -> PyResult<usize> {
    Ok(rank_with(&matrix, Pivoting::from_tolerance(tolerance)?)?)
}

#[pyfunction]
#[pyo3(name = "solve", signature = (a, b, tolerance = None))]
pub fn py_solve(a: Vec<Vec<f64>>, b: Vec<f64>, tolerance: Option<f64>) -> PyResult<Vec<f64>> {
    Ok(solve_with(&a, &b, Pivoting::from_tolerance(tolerance)?)?)
}

#[pyfunction]
#[pyo3(name = "gaussian_elimination", signature = (a, b, tolerance = None))]
pub fn py_gaussian_elimination(
    a: Vec<Vec<f64>>,
    b: Vec<f64>,
    tolerance: Option<f64>,
) -> PyResult<Vec<f64>> {
    py_solve(a, b, tolerance)
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
