// All matrices used by the factorization are dense and
// stored in row-major order, i.e. entry (i, j) of an
// m x n matrix is stored at data[i * n + j].

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Dense matrix in row-major format
///
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Matrix<T = f64> {
    /// number of rows
    pub m: usize,
    /// number of columns
    pub n: usize,
    /// vector of data in row major format.
    ///
    /// This field should have length `m*n`.
    pub data: Vec<T>,
}

/// Matrix shape marker for triangular matrices
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum MatrixTriangle {
    /// Upper triangular matrix
    Triu,
    /// Lower triangular matrix
    Tril,
}
