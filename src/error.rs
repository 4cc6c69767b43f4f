use thiserror::Error;

pub type Result<T> = std::result::Result<T, MatrixError>;

/// Errors raised while building or combining matrices.
///
/// Elimination itself never fails; these only come from construction and
/// shape-checked arithmetic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    #[error("Dimensions {rows}x{cols} exceed the maximum of {max} per axis")]
    DimensionTooLarge { rows: usize, cols: usize, max: usize },

    #[error("Row {row} has {got} entries, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("Dimensions not compatible: {lhs:?} vs {rhs:?}")]
    DimensionMismatch {
        lhs: (usize, usize),
        rhs: (usize, usize),
    },
}
