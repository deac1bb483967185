use pyo3::exceptions::{PyTypeError, PyValueError};
use pyo3::PyErr;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Empty matrix")]
    EmptyMatrix,

    /// A row whose length differs from the first row
    #[error("All rows of a matrix must have the same length: row {row} has {found} columns, expected {expected}")]
    RaggedMatrix {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("The matrix is not a square matrix ({rows}x{cols})")]
    NotSquare { rows: usize, cols: usize },

    /// Augmentation vector or product operand of the wrong length
    #[error("Dimensions not compatible: expected {expected}, got {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("Matrix is singular: no pivot in column {column}")]
    SingularMatrix { column: usize },

    #[error("Pivoting tolerance must be a finite number")]
    InvalidTolerance,

    #[error("Number of intervals must be greater than 0")]
    InvalidIntervals,

    #[error("Simpson's rule needs an even number of intervals, got {intervals}")]
    OddIntervals { intervals: usize },
}

impl From<Error> for PyErr {
    fn from(error: Error) -> PyErr {
        match error {
            Error::RaggedMatrix { .. } | Error::NotSquare { .. } | Error::DimensionMismatch { .. } => {
                PyTypeError::new_err(error.to_string())
            }
            Error::EmptyMatrix
            | Error::SingularMatrix { .. }
            | Error::InvalidTolerance
            | Error::InvalidIntervals
            | Error::OddIntervals { .. } => PyValueError::new_err(error.to_string()),
        }
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(Error::EmptyMatrix.to_string(), "Empty matrix");
        assert_eq!(
            Error::NotSquare { rows: 3, cols: 2 }.to_string(),
            "The matrix is not a square matrix (3x2)"
        );
        assert_eq!(
            Error::SingularMatrix { column: 1 }.to_string(),
            "Matrix is singular: no pivot in column 1"
        );
    }
}
