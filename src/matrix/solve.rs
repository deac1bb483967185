use log::warn;

use crate::error::{Error, Result};
use crate::matrix::dense::DenseMatrix;
use crate::matrix::matrix::{Element, Matrix};
use crate::matrix::pivoting::Pivoting;
use crate::matrix::reduce::eliminate_below;

/// Solves `mat · x = target` for a square `mat`, leaving `x` in `target`.
///
/// Both arguments are consumed as scratch space: on return `mat` holds the
/// upper triangular factor. Row swaps are mirrored on `target` so the two
/// stay in lock-step. On error `target` is left partially eliminated and must
/// be discarded.
pub fn solve_in_place<T: Element>(
    mat: &mut DenseMatrix<T>,
    target: &mut [T],
    pivoting: Pivoting<T>,
) -> Result<()> {
    let n = mat.rows;

    // Forward elimination
    for i in 0..n {
        let pivot_row = pivoting.select(mat, i, i).ok_or_else(|| {
            warn!(target: "rust_linalg", "singular system: no pivot in column {}", i);
            Error::SingularMatrix { column: i }
        })?;

        if pivot_row != i {
            mat.swap_rows(i, pivot_row);
            target.swap(i, pivot_row);
        }

        let factors = eliminate_below(mat, i, i);
        for (offset, factor) in factors.into_iter().enumerate() {
            if let Some(factor) = factor {
                let j = i + 1 + offset;
                target[j] = target[j] - target[i] * factor;
            }
        }
    }

    // Back substitution
    for i in (0..n).rev() {
        let total: T = (i + 1..n).map(|j| mat.at(i, j) * target[j]).sum();
        target[i] = (target[i] - total) / mat.at(i, i);
    }

    Ok(())
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
