use crate::error::Result;
use crate::matrix::matrix::{Element, Matrix};
use crate::matrix::pivoting::Pivoting;
use crate::matrix::reduce;
use crate::matrix::solve;
use crate::matrix::validate::{validate, Requirement, Shape};

/// Row-major dense matrix owning its cells.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix<T> {
    pub cols: usize,
    pub rows: usize,
    pub cells: Vec<T>,
}

impl<T: Element> Matrix<T> for DenseMatrix<T> {
    /// Validates `lines` and copies every entry into a new buffer; the
    /// returned matrix shares no storage with `lines`.
    fn from_list(lines: &[Vec<T>]) -> Result<Self> {
        let Shape { rows, cols } = validate(lines, Requirement::Rectangular)?;

        Ok(DenseMatrix {
            rows,
            cols,
            cells: lines.iter().flat_map(|l| l.iter().copied()).collect(),
        })
    }

    fn to_list(&self) -> Vec<Vec<T>> {
        self.rows_iter().map(|line| line.to_vec()).collect()
    }

    fn is_row_echelon(&self) -> bool {
        let mut lead = None;
        let mut seen_zero_row = false;

        for i in 0..self.rows {
            match self.leading_column(i) {
                None => seen_zero_row = true,
                Some(pivot_col) => {
                    if seen_zero_row {
                        return false;
                    }
                    if let Some(prev_lead) = lead {
                        if pivot_col <= prev_lead {
                            return false;
                        }
                    }
                    lead = Some(pivot_col);
                }
            }
        }
        true
    }

    fn is_rref(&self) -> bool {
        if !self.is_row_echelon() {
            return false;
        }

        for i in 0..self.rows {
            let Some(pivot_col) = self.leading_column(i) else {
                break;
            };

            if self.at(i, pivot_col) != T::one() {
                return false;
            }

            for r in 0..self.rows {
                if r != i && !self.at(r, pivot_col).is_zero() {
                    return false;
                }
            }
        }
        true
    }

    fn row_echelon(&self, pivoting: Pivoting<T>) -> DenseMatrix<T> {
        let mut mat = self.clone();
        reduce::to_row_echelon(&mut mat, pivoting);
        mat
    }

    fn reduced_row_echelon(&self, pivoting: Pivoting<T>) -> DenseMatrix<T> {
        let mut mat = self.clone();
        reduce::to_reduced_row_echelon(&mut mat, pivoting);
        mat
    }

    fn rank(&self, pivoting: Pivoting<T>) -> usize {
        let mut mat = self.clone();
        reduce::to_row_echelon(&mut mat, pivoting);
        reduce::count_leading_rows(&mat)
    }

    fn solve_right(&self, target: &[T], pivoting: Pivoting<T>) -> Result<Vec<T>> {
        self.shape().check(Requirement::SquareSystem {
            rhs_len: target.len(),
        })?;

        let mut mat = self.clone();
        let mut target = target.to_vec();
        solve::solve_in_place(&mut mat, &mut target, pivoting)?;
        Ok(target)
    }

    fn identity(n: usize) -> DenseMatrix<T> {
        DenseMatrix {
            rows: n,
            cols: n,
            cells: (0..n)
                .flat_map(|i| (0..n).map(move |j| if i == j { T::one() } else { T::zero() }))
                .collect(),
        }
    }

    #[inline(always)]
    fn at(&self, row: usize, col: usize) -> T {
        self.cells[row * self.cols + col]
    }
}

impl<T: Element> DenseMatrix<T> {
    pub fn shape(&self) -> Shape {
        Shape {
            rows: self.rows,
            cols: self.cols,
        }
    }

    #[inline(always)]
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self.cells[row * self.cols + col] = value;
    }

    pub fn row(&self, row: usize) -> &[T] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    pub fn rows_iter(&self) -> std::slice::Chunks<'_, T> {
        self.cells.chunks(self.cols.max(1))
    }

    /// Exchanges two whole rows, every column included.
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        for k in 0..self.cols {
            self.cells.swap(a * self.cols + k, b * self.cols + k);
        }
    }

    /// Column of the first nonzero entry of `row`
    pub fn leading_column(&self, row: usize) -> Option<usize> {
        self.row(row).iter().position(|x| !x.is_zero())
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
impl<T: Element> DenseMatrix<T> {
    pub fn new(rows: usize, cols: usize) -> DenseMatrix<T> {
        DenseMatrix {
            rows,
            cols,
            cells: vec![T::zero(); rows * cols],
        }
    }

    pub fn mul_vector(&self, rhs: &[T]) -> Result<Vec<T>> {
        if rhs.len() != self.cols {
            return Err(crate::error::Error::DimensionMismatch {
                expected: self.cols,
                found: rhs.len(),
            });
        }

        Ok(self
            .rows_iter()
            .map(|line| line.iter().zip(rhs).map(|(a, b)| *a * *b).sum())
            .collect())
    }
}
