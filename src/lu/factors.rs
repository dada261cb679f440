#![allow(non_snake_case)]

use super::Permutation;
use crate::algebra::{FloatT, Matrix, MatrixMath, ShapedMatrix};

#[cfg(feature = "serde")]
use crate::algebra::InvalidMatrixError;

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Factors of a non-pivoted factorization `A = L*U`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        bound = "T: FloatT + Serialize + DeserializeOwned",
        try_from = "LUFactorsData<T>"
    )
)]
pub struct LUFactors<T = f64> {
    /// unit lower triangular factor
    pub L: Matrix<T>,
    /// upper triangular factor
    pub U: Matrix<T>,
}

/// Factors of a pivoted factorization `P*A = L*U`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        bound = "T: FloatT + Serialize + DeserializeOwned",
        try_from = "PLUFactorsData<T>"
    )
)]
pub struct PLUFactors<T = f64> {
    /// row permutation, with `(P*A)[i,:] = A[P[i],:]`
    pub P: Permutation,
    /// unit lower triangular factor
    pub L: Matrix<T>,
    /// upper triangular factor
    pub U: Matrix<T>,
}

impl<T> LUFactors<T>
where
    T: FloatT,
{
    /// dimension of the factored matrix
    pub fn dim(&self) -> usize {
        self.L.nrows()
    }

    /// Computes `L*U`
    pub fn reconstruct(&self) -> Matrix<T> {
        self.L.matmul(&self.U)
    }

    /// Frobenius norm of `L*U - A`
    pub fn residual(&self, A: &Matrix<T>) -> T {
        self.reconstruct().norm_fro_diff(A)
    }

    pub fn into_parts(self) -> (Matrix<T>, Matrix<T>) {
        (self.L, self.U)
    }
}

impl<T> PLUFactors<T>
where
    T: FloatT,
{
    /// dimension of the factored matrix
    pub fn dim(&self) -> usize {
        self.L.nrows()
    }

    /// Computes `L*U`, which should equal `P*A`
    pub fn product(&self) -> Matrix<T> {
        self.L.matmul(&self.U)
    }

    /// Computes `P'*L*U`, which should equal `A`
    pub fn reconstruct(&self) -> Matrix<T> {
        self.P.ipermute_rows(&self.product())
    }

    /// Frobenius norm of `P'*L*U - A`
    pub fn residual(&self, A: &Matrix<T>) -> T {
        self.reconstruct().norm_fro_diff(A)
    }

    pub fn into_parts(self) -> (Permutation, Matrix<T>, Matrix<T>) {
        (self.P, self.L, self.U)
    }
}

// L and U must be square factors of one common dimension,
// matching the permutation length when there is one
#[cfg(feature = "serde")]
fn _check_factor_dims<T: FloatT>(
    L: &Matrix<T>,
    U: &Matrix<T>,
    n: Option<usize>,
) -> Result<(), InvalidMatrixError> {
    L.check_format()?;
    U.check_format()?;
    let dim = n.unwrap_or(L.nrows());
    for M in [L, U] {
        if M.size() != (dim, dim) {
            return Err(InvalidMatrixError::IncompatibleDimension);
        }
    }
    Ok(())
}

// unchecked mirrors of the factor structs, validated on deserialization
#[cfg(feature = "serde")]
#[derive(Deserialize)]
#[serde(bound = "T: DeserializeOwned")]
struct LUFactorsData<T> {
    L: Matrix<T>,
    U: Matrix<T>,
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
#[serde(bound = "T: DeserializeOwned")]
struct PLUFactorsData<T> {
    P: Permutation,
    L: Matrix<T>,
    U: Matrix<T>,
}

#[cfg(feature = "serde")]
impl<T: FloatT> TryFrom<LUFactorsData<T>> for LUFactors<T> {
    type Error = InvalidMatrixError;
    fn try_from(data: LUFactorsData<T>) -> Result<Self, Self::Error> {
        let LUFactorsData { L, U } = data;
        _check_factor_dims(&L, &U, None)?;
        Ok(Self { L, U })
    }
}

#[cfg(feature = "serde")]
impl<T: FloatT> TryFrom<PLUFactorsData<T>> for PLUFactors<T> {
    type Error = InvalidMatrixError;
    fn try_from(data: PLUFactorsData<T>) -> Result<Self, Self::Error> {
        let PLUFactorsData { P, L, U } = data;
        _check_factor_dims(&L, &U, Some(P.len()))?;
        Ok(Self { P, L, U })
    }
}

#[cfg(feature = "serde")]
#[test]
fn test_check_factor_dims() {
    let I = Matrix::<f64>::identity(3);
    assert_eq!(_check_factor_dims(&I, &I, None), Ok(()));
    assert_eq!(_check_factor_dims(&I, &I, Some(3)), Ok(()));
    assert_eq!(
        _check_factor_dims(&I, &I, Some(2)),
        Err(InvalidMatrixError::IncompatibleDimension)
    );
    assert_eq!(
        _check_factor_dims(&I, &Matrix::identity(2), None),
        Err(InvalidMatrixError::IncompatibleDimension)
    );
    assert_eq!(
        _check_factor_dims(&I, &Matrix::zeros((3, 2)), None),
        Err(InvalidMatrixError::IncompatibleDimension)
    );
}
