//! Row echelon and reduced row echelon form of dense floating-point matrices.

pub mod error;
pub mod matrix {
    pub mod elimination;
    pub mod elimination_config;
    pub mod matrix;
    pub mod matrix_dense;
    pub mod pivot;
}

pub use error::{MatrixError, Result};
pub use matrix::elimination::{forward_eliminate, reduce};
pub use matrix::elimination_config::{EliminationConfig, TOLERANCE};
pub use matrix::matrix::Matrix;
pub use matrix::matrix_dense::{Element, MatrixDense, MAX_DIMENSION};
