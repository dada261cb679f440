use crate::algebra::InvalidMatrixError;
use thiserror::Error;

/// Error codes returnable from LU factorization operations.
///
/// Errors carry no partial result.  A failed factorization
/// leaves the caller's matrix untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LUError {
    /// Input is empty, not square or has non-finite entries.
    /// Checked before any elimination work is done.
    #[error("Invalid input matrix: {0}")]
    InvalidInput(#[from] InvalidMatrixError),
    /// A pivot that is exactly zero was encountered at
    /// elimination step `step`
    #[error("Matrix is singular (zero pivot at elimination step {step})")]
    SingularMatrix { step: usize },
}

/// Error type returned when assembling a [`Permutation`](crate::lu::Permutation)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PermutationError {
    #[error("Invalid permutation vector")]
    InvalidPermutation,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
/// Error type returned by settings validation
pub enum SettingsError {
    /// An error attributable to one of the fields
    #[error("Bad value for field \"{0}\"")]
    BadFieldValue(&'static str),
}
