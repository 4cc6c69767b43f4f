//! Read-only queries locating leading entries. Every "not found" is `None`.

use crate::matrix::elimination_config::EliminationConfig;
use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_dense::{Element, MatrixDense};

/// Column of the first entry of `row` above tolerance.
pub fn leading_column_of<T: Element>(
    matrix: &MatrixDense<T>,
    row: usize,
    config: &EliminationConfig<T>,
) -> Option<usize> {
    matrix
        .get_row(row)?
        .iter()
        .position(|&value| !config.is_negligible(value))
}

/// First row, from the top, whose leading entry sits in `col`.
pub fn row_with_leading_column<T: Element>(
    matrix: &MatrixDense<T>,
    col: usize,
    config: &EliminationConfig<T>,
) -> Option<usize> {
    if col >= matrix.cols() {
        return None;
    }
    (0..matrix.rows()).find(|&row| leading_column_of(matrix, row, config) == Some(col))
}

/// Row in `[start_row, rows)` with the leftmost leading entry; the first one wins ties.
pub fn row_with_earliest_pivot_from<T: Element>(
    matrix: &MatrixDense<T>,
    start_row: usize,
    config: &EliminationConfig<T>,
) -> Option<usize> {
    (start_row..matrix.rows())
        .filter_map(|row| leading_column_of(matrix, row, config).map(|col| (row, col)))
        .min_by_key(|&(_, col)| col)
        .map(|(row, _)| row)
}

/// Rightmost column in `[0, boundary_col)` that is the leading column of some row.
pub fn column_with_rightmost_pivot_before<T: Element>(
    matrix: &MatrixDense<T>,
    boundary_col: usize,
    config: &EliminationConfig<T>,
) -> Option<usize> {
    (0..matrix.rows())
        .filter_map(|row| leading_column_of(matrix, row, config))
        .filter(|&col| col < boundary_col)
        .max()
}

/// `(row, col)` of every pivot, top to bottom.
pub fn pivot_positions<T: Element>(
    matrix: &MatrixDense<T>,
    config: &EliminationConfig<T>,
) -> Vec<(usize, usize)> {
    (0..matrix.rows())
        .filter_map(|row| leading_column_of(matrix, row, config).map(|col| (row, col)))
        .collect()
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
