use crate::matrix::elimination_config::EliminationConfig;
use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_dense::{axpy, Element, MatrixDense};
use crate::matrix::pivot::{
    column_with_rightmost_pivot_before, leading_column_of, pivot_positions,
    row_with_earliest_pivot_from, row_with_leading_column,
};
use itertools::Itertools;
use rayon::prelude::*;
use tracing::{debug, trace};

/// Bring `matrix` to row echelon form, with every pivot normalized to 1.
pub fn forward_eliminate<T: Element>(matrix: &mut MatrixDense<T>, config: &EliminationConfig<T>) {
    debug!(rows = matrix.rows(), cols = matrix.cols(), "forward elimination");

    for pivot in 0..matrix.rows() {
        let Some(min_row) = row_with_earliest_pivot_from(matrix, pivot, config) else {
            break;
        };
        matrix.swap_rows(min_row, pivot);

        let Some(col) = leading_column_of(matrix, pivot, config) else {
            break;
        };
        let pivot_value = matrix.at(pivot, col);
        matrix.scale_row(pivot, pivot_value.recip());
        matrix[(pivot, col)] = T::one();
        trace!(pivot, from_row = min_row, col, "pivot selected");

        eliminate_below(matrix, pivot, col, config);
    }

    debug!(rank = pivot_positions(matrix, config).len(), "row echelon form reached");
}

// Rows below the pivot are independent of each other.
fn eliminate_below<T: Element>(
    matrix: &mut MatrixDense<T>,
    pivot: usize,
    col: usize,
    config: &EliminationConfig<T>,
) {
    let (upper, lower) = matrix.split_rows_mut(pivot + 1);
    let pivot_row = &upper[pivot];

    lower.par_iter_mut().for_each(|row| {
        let value = row[col];
        if config.is_negligible(value) {
            return;
        }
        axpy(row, pivot_row, -value);
        row[col] = T::zero();
    });
}

/// Bring `matrix` to reduced row echelon form.
///
/// Runs [`forward_eliminate`] first, then clears every pivot column above its
/// pivot, walking the pivot columns from right to left.
pub fn reduce<T: Element>(matrix: &mut MatrixDense<T>, config: &EliminationConfig<T>) {
    forward_eliminate(matrix, config);

    if matrix.rows() == 0 || matrix.cols() == 0 {
        return;
    }

    let mut pivot = Some(matrix.cols() - 1);
    while let Some(col) = pivot {
        if let Some(lead_row) = row_with_leading_column(matrix, col, config) {
            for row in 0..lead_row {
                let value = matrix.at(row, col);
                if config.is_negligible(value) {
                    continue;
                }
                matrix.add_multiple(row, lead_row, -value);
                matrix[(row, col)] = T::zero();
                trace!(row, lead_row, col, "cleared above pivot");
            }
        }
        pivot = column_with_rightmost_pivot_before(matrix, col, config);
    }

    debug!(rows = matrix.rows(), cols = matrix.cols(), "reduced row echelon form reached");
}

/// Number of pivots once the matrix is in row echelon form. `matrix` is left untouched.
pub fn rank<T: Element>(matrix: &MatrixDense<T>, config: &EliminationConfig<T>) -> usize {
    let mut echelon = matrix.clone();
    forward_eliminate(&mut echelon, config);
    pivot_positions(&echelon, config).len()
}

pub fn is_ref<T: Element>(matrix: &MatrixDense<T>, config: &EliminationConfig<T>) -> bool {
    let leads: Vec<Option<usize>> = (0..matrix.rows())
        .map(|row| leading_column_of(matrix, row, config))
        .collect();

    // zero rows only at the bottom
    if leads
        .iter()
        .tuple_windows()
        .any(|(upper, lower)| upper.is_none() && lower.is_some())
    {
        return false;
    }

    leads
        .iter()
        .flatten()
        .tuple_windows()
        .all(|(upper, lower)| upper < lower)
}

pub fn is_rref<T: Element>(matrix: &MatrixDense<T>, config: &EliminationConfig<T>) -> bool {
    if !is_ref(matrix, config) {
        return false;
    }

    pivot_positions(matrix, config).into_iter().all(|(row, col)| {
        config.is_negligible(matrix.at(row, col) - T::one())
            && (0..matrix.rows())
                .filter(|&r| r != row)
                .all(|r| config.is_negligible(matrix.at(r, col)))
    })
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
