#![allow(non_snake_case)]

use crate::algebra::{FloatT, Matrix, ShapedMatrix};

/// Splits combined triangular storage into separate `L` and `U` factors.
///
/// Entries of `LU` strictly below the diagonal are taken as the multipliers
/// of the unit lower triangular factor `L`.  Entries on and above the
/// diagonal form the upper triangular factor `U`.  The unit diagonal of
/// `L` and the zero triangles of both factors are filled in explicitly.
/// `LU` itself is not modified.
///
/// # Panics
/// Panics if `LU` is not square.
pub fn unpack<T: FloatT>(LU: &Matrix<T>) -> (Matrix<T>, Matrix<T>) {
    assert!(LU.is_square());
    let n = LU.nrows();

    let mut L = Matrix::identity(n);
    let mut U = Matrix::zeros((n, n));

    for i in 0..n {
        let row = LU.row_slice(i);
        L.row_slice_mut(i)[..i].copy_from_slice(&row[..i]);
        U.row_slice_mut(i)[i..].copy_from_slice(&row[i..]);
    }
    (L, U)
}
