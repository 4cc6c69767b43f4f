use crate::error::{MatrixError, Result};
use crate::matrix::elimination;
use crate::matrix::elimination_config::EliminationConfig;
use crate::matrix::matrix::Matrix;
use num_traits::Float;
use rand::distributions::uniform::SampleUniform;
use rand::Rng;
use rayon::prelude::*;
use std::fmt;
use std::ops;
use tracing::trace;

/// Largest accepted row or column count (32-bit index range).
pub const MAX_DIMENSION: usize = u32::MAX as usize;

pub trait Element:  // Avoid repeating all the traits
    Float
    + Send
    + Sync
    + std::fmt::Display
    + std::fmt::Debug
{
}

impl<T> Element for T where T: Float + Send + Sync + std::fmt::Display + std::fmt::Debug {}

/// Dense matrix stored as one owned buffer per row, so that swapping two rows
/// only exchanges the buffers.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixDense<T> {
    rows: usize,
    cols: usize,
    data: Vec<Vec<T>>,
}

impl<T: Element> MatrixDense<T> {
    pub fn new(rows: usize, cols: usize) -> Result<MatrixDense<T>> {
        if rows > MAX_DIMENSION || cols > MAX_DIMENSION {
            return Err(MatrixError::DimensionTooLarge {
                rows,
                cols,
                max: MAX_DIMENSION,
            });
        }

        Ok(MatrixDense {
            rows,
            cols,
            data: vec![vec![T::zero(); cols]; rows],
        })
    }

    /// Fill a matrix with values drawn uniformly from `low..high`.
    ///
    /// Panics if `low >= high`.
    pub fn random<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        low: T,
        high: T,
        rng: &mut R,
    ) -> Result<MatrixDense<T>>
    where
        T: SampleUniform,
    {
        let mut matrix = MatrixDense::new(rows, cols)?;
        for value in matrix.data.iter_mut().flatten() {
            *value = rng.gen_range(low..high);
        }
        Ok(matrix)
    }

    /// Free the backing storage. The matrix is consumed and cannot be used afterwards.
    pub fn release(self) {
        trace!(rows = self.rows, cols = self.cols, "releasing matrix");
        drop(self)
    }

    pub fn print(&self) {
        print!("{}", self);
    }

    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        self.data.get(row)?.get(col).copied()
    }

    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self.data[row][col] = value;
    }

    pub fn row(&self, row: usize) -> &[T] {
        &self.data[row]
    }

    pub fn get_row(&self, row: usize) -> Option<&[T]> {
        self.data.get(row).map(|r| r.as_slice())
    }

    pub fn column(&self, col: usize) -> Vec<T> {
        self.data.iter().map(|r| r[col]).collect()
    }

    /// Type I: exchange two rows.
    pub fn swap_rows(&mut self, row1: usize, row2: usize) {
        self.data.swap(row1, row2);
    }

    /// Type II: multiply a row by `scalar`.
    pub fn scale_row(&mut self, row: usize, scalar: T) {
        self.data[row].iter_mut().for_each(|x| *x = *x * scalar);
    }

    /// Type III: `row1 = row1 + scalar * row2`.
    pub fn add_multiple(&mut self, row1: usize, row2: usize, scalar: T) {
        if row1 == row2 {
            self.scale_row(row1, T::one() + scalar);
            return;
        }

        let (target, source) = if row1 < row2 {
            let (head, tail) = self.data.split_at_mut(row2);
            (&mut head[row1], &tail[0])
        } else {
            let (head, tail) = self.data.split_at_mut(row1);
            (&mut tail[0], &head[row2])
        };
        axpy(target, source, scalar);
    }

    /// Rows `[0, at)` and `[at, rows)` as two disjoint mutable slices.
    pub(crate) fn split_rows_mut(&mut self, at: usize) -> (&mut [Vec<T>], &mut [Vec<T>]) {
        self.data.split_at_mut(at)
    }

    pub fn forward_eliminate(&mut self) {
        self.forward_eliminate_with(&EliminationConfig::default());
    }

    pub fn forward_eliminate_with(&mut self, config: &EliminationConfig<T>) {
        elimination::forward_eliminate(self, config);
    }

    pub fn reduce(&mut self) {
        self.reduce_with(&EliminationConfig::default());
    }

    pub fn reduce_with(&mut self, config: &EliminationConfig<T>) {
        elimination::reduce(self, config);
    }
}

/// `target += scalar * source`, entry-wise.
#[inline(always)]
pub(crate) fn axpy<T: Float>(target: &mut [T], source: &[T], scalar: T) {
    target
        .iter_mut()
        .zip(source.iter())
        .for_each(|(t, s)| *t = *t + scalar * *s);
}

impl<T: Element> Matrix<T> for MatrixDense<T> {
    fn from_list(lines: Vec<Vec<T>>) -> Result<Self> {
        let rows = lines.len();
        let cols = lines.first().map(|l| l.len()).unwrap_or(0);

        if let Some((row, line)) = lines.iter().enumerate().find(|(_, l)| l.len() != cols) {
            return Err(MatrixError::RaggedRows {
                row,
                expected: cols,
                got: line.len(),
            });
        }
        if rows > MAX_DIMENSION || cols > MAX_DIMENSION {
            return Err(MatrixError::DimensionTooLarge {
                rows,
                cols,
                max: MAX_DIMENSION,
            });
        }

        Ok(MatrixDense {
            rows,
            cols,
            data: lines,
        })
    }

    fn to_list(&self) -> Vec<Vec<T>> {
        self.data.clone()
    }

    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }

    fn is_ref(&self) -> bool {
        elimination::is_ref(self, &EliminationConfig::default())
    }

    fn is_rref(&self) -> bool {
        elimination::is_rref(self, &EliminationConfig::default())
    }

    fn rank(&self) -> usize {
        elimination::rank(self, &EliminationConfig::default())
    }

    fn identity(n: usize) -> Result<MatrixDense<T>> {
        let mut matrix = MatrixDense::new(n, n)?;
        for i in 0..n {
            matrix.data[i][i] = T::one();
        }
        Ok(matrix)
    }

    fn transpose(&self) -> MatrixDense<T> {
        MatrixDense {
            rows: self.cols,
            cols: self.rows,
            data: (0..self.cols).map(|c| self.column(c)).collect(),
        }
    }

    #[inline(always)]
    fn at(&self, row: usize, col: usize) -> T {
        self.data[row][col]
    }
}

impl<T> ops::Index<(usize, usize)> for MatrixDense<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[row][col]
    }
}

impl<T> ops::IndexMut<(usize, usize)> for MatrixDense<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.data[row][col]
    }
}

impl<T: Element> fmt::Display for MatrixDense<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.data {
            write!(f, "[ ")?;
            for value in row {
                write!(f, "{:6.3}\t", value)?;
            }
            writeln!(f, " ]")?;
        }
        writeln!(f)
    }
}

impl<T: Element> ops::Mul<&MatrixDense<T>> for &MatrixDense<T> {
    type Output = Result<MatrixDense<T>>;

    fn mul(self, rhs: &MatrixDense<T>) -> Result<MatrixDense<T>> {
        if self.cols != rhs.rows {
            return Err(MatrixError::DimensionMismatch {
                lhs: (self.rows, self.cols),
                rhs: (rhs.rows, rhs.cols),
            });
        }

        let mut result = MatrixDense::new(self.rows, rhs.cols)?;

        result
            .data
            .par_iter_mut()
            .zip(self.data.par_iter())
            .for_each(|(out, lhs_row)| {
                for (k, &a) in lhs_row.iter().enumerate() {
                    if a.is_zero() {
                        continue;
                    }
                    axpy(out, &rhs.data[k], a);
                }
            });

        Ok(result)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
