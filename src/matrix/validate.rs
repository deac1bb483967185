use itertools::Itertools;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

/// Shape constraint an operation places on its input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Rectangular,
    /// Square coefficient matrix augmented with a right-hand side of `rhs_len` entries
    SquareSystem { rhs_len: usize },
}

impl Shape {
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn check(self, requirement: Requirement) -> Result<Shape> {
        match requirement {
            Requirement::Rectangular => {}
            Requirement::SquareSystem { rhs_len } => {
                self.require_square()?;
                if rhs_len != self.rows {
                    return Err(Error::DimensionMismatch {
                        expected: self.rows,
                        found: rhs_len,
                    });
                }
            }
        }
        Ok(self)
    }

    fn require_square(&self) -> Result<()> {
        if !self.is_square() {
            return Err(Error::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }
}

/// Checks the shape of a row list before any numeric work is done on it.
///
/// Rows are compared against the length of the first row, so the reported
/// `RaggedMatrix` row is the first one that disagrees with it.
pub fn validate<T>(lines: &[Vec<T>], requirement: Requirement) -> Result<Shape> {
    let cols = match lines.first() {
        Some(first) if !first.is_empty() => first.len(),
        _ => return Err(Error::EmptyMatrix),
    };

    if let Some((offset, line)) = lines
        .iter()
        .skip(1)
        .find_position(|line| line.len() != cols)
    {
        return Err(Error::RaggedMatrix {
            row: offset + 1,
            expected: cols,
            found: line.len(),
        });
    }

    Shape {
        rows: lines.len(),
        cols,
    }
    .check(requirement)
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_empty() {
        let empty: Vec<Vec<f64>> = vec![];
        assert_eq!(
            validate(&empty, Requirement::Rectangular),
            Err(Error::EmptyMatrix)
        );
        assert_eq!(
            validate(&[Vec::<f64>::new(), vec![]], Requirement::Rectangular),
            Err(Error::EmptyMatrix)
        );
    }

    #[test]
    fn test_validate_ragged() {
        assert_eq!(
            validate(&[vec![1.0, 2.0], vec![3.0]], Requirement::Rectangular),
            Err(Error::RaggedMatrix {
                row: 1,
                expected: 2,
                found: 1
            })
        );
        assert_eq!(
            validate(
                &[vec![1.0], vec![2.0], vec![3.0, 4.0]],
                Requirement::SquareSystem { rhs_len: 3 }
            ),
            Err(Error::RaggedMatrix {
                row: 2,
                expected: 1,
                found: 2
            })
        );
    }

    #[test]
    fn test_validate_square() {
        let tall = vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]];
        assert_eq!(
            validate(&tall, Requirement::Rectangular),
            Ok(Shape { rows: 3, cols: 2 })
        );
        assert_eq!(
            validate(&tall, Requirement::SquareSystem { rhs_len: 3 }),
            Err(Error::NotSquare { rows: 3, cols: 2 })
        );
    }

    #[test]
    fn test_validate_system() {
        let square = vec![vec![2.0, 1.0], vec![1.0, 3.0]];
        assert_eq!(
            validate(&square, Requirement::SquareSystem { rhs_len: 2 }),
            Ok(Shape { rows: 2, cols: 2 })
        );
        assert_eq!(
            validate(&square, Requirement::SquareSystem { rhs_len: 3 }),
            Err(Error::DimensionMismatch {
                expected: 2,
                found: 3
            })
        );
    }
}
