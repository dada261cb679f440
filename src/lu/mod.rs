//! Dense LU factorization, with and without partial pivoting.
//!
//! The non-pivoted factorization computes `A = L*U`, and the pivoted
//! factorization computes `P*A = L*U`, where `L` is unit lower triangular,
//! `U` is upper triangular and `P` is a row [`Permutation`].
//!
//! The simplest entry points are the functions [`factorize`] and
//! [`factorize_pivoted`].  Use an [`LUFactorizer`] directly to select an
//! elimination kernel, enable a printed report or inspect [`LUInfo`]
//! diagnostics.
//!
//! ```
//! use gauss_lu::algebra::*;
//! use gauss_lu::lu::*;
//!
//! let A = Matrix::from(&[
//!     [ 2., 3., -1.],
//!     [ 4., 1.,  2.],
//!     [-2., 7.,  2.],
//! ]);
//!
//! let F = factorize_pivoted(&A).unwrap();
//! assert_eq!(F.P.as_slice(), &[1, 2, 0]);
//! assert!(F.residual(&A) < 1e-12);
//! ```

#![allow(non_snake_case)]

mod error;
mod factorizer;
mod factors;
mod info;
mod info_print;
mod kernels;
mod permutation;
mod settings;
mod unpack;

#[cfg(test)]
mod test;

pub use error::*;
pub use factorizer::*;
pub use factors::*;
pub use info::*;
pub use permutation::*;
pub use settings::*;
pub use unpack::*;

use crate::algebra::{FloatT, Matrix};

/// Computes `A = L*U` using a default [`LUFactorizer`].
pub fn factorize<T: FloatT>(A: &Matrix<T>) -> Result<LUFactors<T>, LUError> {
    LUFactorizer::default().factor(A)
}

/// Computes `P*A = L*U` using a default [`LUFactorizer`].
pub fn factorize_pivoted<T: FloatT>(A: &Matrix<T>) -> Result<PLUFactors<T>, LUError> {
    LUFactorizer::default().factor_pivoted(A)
}
