use log::debug;
use rayon::prelude::*;

use crate::matrix::dense::DenseMatrix;
use crate::matrix::matrix::Element;
use crate::matrix::pivoting::Pivoting;

/// Below this many rows to update, a pivot step runs on the calling thread
pub const PARALLEL_ROW_THRESHOLD: usize = 64;

/// Reduction cursors. Both only ever move forward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EchelonState {
    pub row: usize,
    pub column: usize,
}

impl EchelonState {
    #[inline(always)]
    fn in_bounds<T>(&self, mat: &DenseMatrix<T>) -> bool {
        self.row < mat.rows && self.column < mat.cols
    }

    #[inline(always)]
    fn advance(&mut self) {
        self.row += 1;
        self.column += 1;
    }
}

/// Removes `column` from `target` using `pivot_row`, returning the factor that
/// was applied, or `None` when the entry was already zero and nothing changed.
#[inline(always)]
pub(crate) fn eliminate_row<T: Element>(target: &mut [T], pivot_row: &[T], column: usize) -> Option<T> {
    let entry = target[column];
    if entry.is_zero() {
        return None;
    }

    let factor = entry / pivot_row[column];
    target[column] = T::zero();
    for (t, p) in target[column + 1..].iter_mut().zip(&pivot_row[column + 1..]) {
        *t = *t - *p * factor;
    }
    Some(factor)
}

// `block` holds whole rows of `cols` entries each; factors come back in row order
fn eliminate_block<T: Element>(
    block: &mut [T],
    cols: usize,
    pivot_row: &[T],
    column: usize,
) -> Vec<Option<T>> {
    if block.len() / cols >= PARALLEL_ROW_THRESHOLD {
        block
            .par_chunks_mut(cols)
            .map(|target| eliminate_row(target, pivot_row, column))
            .collect()
    } else {
        block
            .chunks_mut(cols)
            .map(|target| eliminate_row(target, pivot_row, column))
            .collect()
    }
}

/// Clears `column` in every row below `row`. The returned factors are indexed
/// from `row + 1` so callers can replay the step on an augmented vector.
pub(crate) fn eliminate_below<T: Element>(
    mat: &mut DenseMatrix<T>,
    row: usize,
    column: usize,
) -> Vec<Option<T>> {
    let cols = mat.cols;
    let (head, tail) = mat.cells.split_at_mut((row + 1) * cols);
    eliminate_block(tail, cols, &head[row * cols..], column)
}

fn eliminate_others<T: Element>(mat: &mut DenseMatrix<T>, row: usize, column: usize) {
    let cols = mat.cols;
    let (above, rest) = mat.cells.split_at_mut(row * cols);
    let (pivot_row, below) = rest.split_at_mut(cols);
    eliminate_block(above, cols, pivot_row, column);
    eliminate_block(below, cols, pivot_row, column);
}

fn normalize_row<T: Element>(mat: &mut DenseMatrix<T>, row: usize, column: usize) {
    let cols = mat.cols;
    let line = &mut mat.cells[row * cols..(row + 1) * cols];
    let pivot = line[column];
    line[column] = T::one();
    for value in line[column + 1..].iter_mut() {
        *value = *value / pivot;
    }
}

/// Moves the pivot of the current column to the cursor row. Returns `false`
/// when the column has no pivot, in which case the caller skips it.
fn place_pivot<T: Element>(
    mat: &mut DenseMatrix<T>,
    state: &EchelonState,
    pivoting: &Pivoting<T>,
) -> bool {
    match pivoting.select(mat, state.row, state.column) {
        Some(pivot_row) => {
            if pivot_row != state.row {
                debug!(target: "rust_linalg", "swap rows {} and {}", state.row, pivot_row);
                mat.swap_rows(state.row, pivot_row);
            }
            true
        }
        None => {
            debug!(target: "rust_linalg", "no pivot in column {}", state.column);
            pivoting.flush_column(mat, state.row, state.column);
            false
        }
    }
}

pub fn to_row_echelon<T: Element>(mat: &mut DenseMatrix<T>, pivoting: Pivoting<T>) {
    let mut state = EchelonState::default();

    while state.in_bounds(mat) {
        if !place_pivot(mat, &state, &pivoting) {
            state.column += 1;
            continue;
        }

        eliminate_below(mat, state.row, state.column);
        state.advance();
    }
}

pub fn to_reduced_row_echelon<T: Element>(mat: &mut DenseMatrix<T>, pivoting: Pivoting<T>) {
    let mut state = EchelonState::default();

    while state.in_bounds(mat) {
        if !place_pivot(mat, &state, &pivoting) {
            state.column += 1;
            continue;
        }

        normalize_row(mat, state.row, state.column);
        eliminate_others(mat, state.row, state.column);
        state.advance();
    }
}

/// Number of nonzero rows at the top of an echelon matrix. Zero rows are
/// trailing in echelon form, so counting stops at the first one.
pub fn count_leading_rows<T: Element>(mat: &DenseMatrix<T>) -> usize {
    mat.rows_iter()
        .take_while(|line| line.iter().any(|x| !x.is_zero()))
        .count()
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
