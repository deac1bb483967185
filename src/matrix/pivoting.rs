use crate::error::{Error, Result};
use crate::matrix::dense::DenseMatrix;
use crate::matrix::matrix::{Element, Matrix};

/// How the pivot of a column is chosen during elimination.
///
/// `FirstNonZero` swaps in the first row at or below the cursor holding an
/// exactly nonzero entry. `Partial` picks the largest magnitude candidate
/// instead, and treats a column whose best candidate does not exceed
/// `tolerance` as having no pivot at all. The two can classify the same
/// matrix differently: a rank-deficient column that picked up rounding noise
/// is still a pivot column under `FirstNonZero`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pivoting<T> {
    FirstNonZero,
    Partial { tolerance: T },
}

impl<T> Default for Pivoting<T> {
    fn default() -> Self {
        Pivoting::FirstNonZero
    }
}

impl<T: Element> Pivoting<T> {
    /// `None` keeps exact pivoting. A NaN or infinite tolerance would reject
    /// every pivot, so it is an error.
    pub fn from_tolerance(tolerance: Option<T>) -> Result<Self> {
        match tolerance {
            Some(tolerance) if !tolerance.is_finite() => Err(Error::InvalidTolerance),
            Some(tolerance) => Ok(Pivoting::Partial {
                tolerance: tolerance.abs(),
            }),
            None => Ok(Pivoting::FirstNonZero),
        }
    }

    /// Row at or below `row` holding the pivot of `column`
    pub fn select(&self, mat: &DenseMatrix<T>, row: usize, column: usize) -> Option<usize> {
        match *self {
            Pivoting::FirstNonZero => (row..mat.rows).find(|&r| !mat.at(r, column).is_zero()),
            Pivoting::Partial { tolerance } => {
                let mut best: Option<(usize, T)> = None;
                for r in row..mat.rows {
                    let magnitude = mat.at(r, column).abs();
                    // strict comparison: the first of equal candidates wins
                    if best.map_or(true, |(_, m)| magnitude > m) {
                        best = Some((r, magnitude));
                    }
                }

                match best {
                    Some((r, magnitude)) if magnitude > tolerance && !magnitude.is_zero() => {
                        Some(r)
                    }
                    _ => None,
                }
            }
        }
    }

    /// Called when `column` has no pivot at or below `row`.
    pub fn flush_column(&self, mat: &mut DenseMatrix<T>, row: usize, column: usize) {
        if let Pivoting::Partial { .. } = self {
            for r in row..mat.rows {
                mat.set(r, column, T::zero());
            }
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
    fn test_select_first_non_zero() {
        let m = DenseMatrix::from_list(&[
            vec![0.0, 1.0],
            vec![0.0, 2.0],
            vec![3.0, 0.0],
            vec![9.0, 0.0],
        ])
        .unwrap();

        let pivoting = Pivoting::FirstNonZero;
        assert_eq!(pivoting.select(&m, 0, 0), Some(2));
        assert_eq!(pivoting.select(&m, 0, 1), Some(0));
        assert_eq!(pivoting.select(&m, 2, 1), None);
    }

    #[test]
    fn test_select_partial() {
        let m = DenseMatrix::from_list(&[
            vec![1.0, 1e-12],
            vec![-7.0, 0.0],
            vec![7.0, -1e-13],
        ])
        .unwrap();

        let pivoting = Pivoting::from_tolerance(Some(1e-10)).unwrap();
        assert_eq!(pivoting.select(&m, 0, 0), Some(1));
        assert_eq!(pivoting.select(&m, 2, 0), Some(2));
        assert_eq!(pivoting.select(&m, 0, 1), None);
        assert_eq!(Pivoting::FirstNonZero.select(&m, 0, 1), Some(0));

        assert_eq!(Pivoting::<f64>::from_tolerance(None), Ok(Pivoting::FirstNonZero));
        assert_eq!(
            Pivoting::from_tolerance(Some(f64::NAN)),
            Err(Error::InvalidTolerance)
        );

        // a negative tolerance never lets a zero through
        let pivoting = Pivoting::Partial { tolerance: -1.0 };
        let zeros = DenseMatrix::from_list(&[vec![0.0], vec![0.0]]).unwrap();
        assert_eq!(pivoting.select(&zeros, 0, 0), None);
    }

    #[test]
    fn test_flush_column() {
        let mut m = DenseMatrix::from_list(&[vec![1.0, 5.0], vec![1e-14, 2.0]]).unwrap();
        Pivoting::FirstNonZero.flush_column(&mut m, 1, 0);
        assert_eq!(m.at(1, 0), 1e-14);

        Pivoting::Partial { tolerance: 1e-10 }.flush_column(&mut m, 1, 0);
        assert_eq!(m.to_list(), vec![vec![1.0, 5.0], vec![0.0, 2.0]]);
    }
}
