use thiserror::Error;

/// Error type returned when a matrix is not a valid input, either
/// when it is assembled or when it is passed to a factorization.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidMatrixError {
    /// Matrix has no rows or no columns
    #[error("Matrix is empty")]
    Empty,
    /// Matrix must be square
    #[error("Matrix is not square ({nrows}x{ncols})")]
    NotSquare { nrows: usize, ncols: usize },
    /// Rows of a nested grid have differing lengths
    #[error("Row {row} has length {len}, expected {expected}")]
    RaggedRows {
        row: usize,
        len: usize,
        expected: usize,
    },
    /// Data length is incompatible with the matrix dimensions
    #[error("Matrix dimension fields and/or array lengths are incompatible")]
    IncompatibleDimension,
    /// Matrix has a NaN or infinite entry
    #[error("Matrix entry ({row}, {col}) is not finite")]
    NonFinite { row: usize, col: usize },
}
