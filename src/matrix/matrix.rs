use num_traits::Float;

use crate::error::Result;
use crate::matrix::pivoting::Pivoting;

pub trait Element:  // Avoid repeating all the traits
    Float
    + Send
    + Sync
    + std::iter::Sum<Self>
    + std::fmt::Debug
{
}

impl<T> Element for T where T: Float + Send + Sync + std::iter::Sum<T> + std::fmt::Debug {}

pub trait Matrix<T>
where
    Self: Sized,
{
    fn from_list(lines: &[Vec<T>]) -> Result<Self>;
    fn to_list(&self) -> Vec<Vec<T>>;

    fn is_row_echelon(&self) -> bool;
    fn is_rref(&self) -> bool;
    fn row_echelon(&self, pivoting: Pivoting<T>) -> Self;
    fn reduced_row_echelon(&self, pivoting: Pivoting<T>) -> Self;
    fn rank(&self, pivoting: Pivoting<T>) -> usize;
    fn solve_right(&self, target: &[T], pivoting: Pivoting<T>) -> Result<Vec<T>>;
    fn identity(n: usize) -> Self;
    fn at(&self, row: usize, col: usize) -> T;
}
