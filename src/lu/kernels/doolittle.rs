#![allow(non_snake_case)]

use super::{select_pivot, FactorLU};
use crate::algebra::{FloatT, Matrix, ShapedMatrix};
use crate::lu::LUError;

/// Doolittle (dot-product) elimination.
///
/// At step `k`, row `k` of `U` and column `k` of `L` are each formed as
/// accumulated dot products of rows and columns completed at earlier
/// steps.  Entries to the right of and below the current step are
/// not touched until their own step.
pub(crate) struct DoolittleKernel<T> {
    // reduced entries of the current column
    work: Vec<T>,
}

impl<T> DoolittleKernel<T>
where
    T: FloatT,
{
    pub fn new() -> Self {
        Self { work: vec![] }
    }
}

// A[i,j] - sum_{p<k} A[i,p]*A[p,j]
#[inline]
fn _reduced_entry<T: FloatT>(A: &Matrix<T>, i: usize, j: usize, k: usize) -> T {
    let row = A.row_slice(i);
    (0..k).fold(row[j], |acc, p| acc - row[p] * A[(p, j)])
}

impl<T> FactorLU<T> for DoolittleKernel<T>
where
    T: FloatT,
{
    fn name(&self) -> &'static str {
        "doolittle"
    }

    fn factor(&mut self, A: &mut Matrix<T>) -> Result<(), LUError> {
        let n = A.nrows();

        for k in 0..n {
            // row k of U
            for j in k..n {
                A[(k, j)] = _reduced_entry(A, k, j, k);
            }

            let pivot = A[(k, k)];
            if pivot == T::zero() {
                return Err(LUError::SingularMatrix { step: k });
            }

            // column k of L
            for i in (k + 1)..n {
                A[(i, k)] = _reduced_entry(A, i, k, k) / pivot;
            }
        }
        Ok(())
    }

    fn factor_pivoted(&mut self, A: &mut Matrix<T>, ipiv: &mut [usize]) -> Result<(), LUError> {
        let n = A.nrows();
        assert_eq!(ipiv.len(), n);
        self.work.resize(n, T::zero());

        for k in 0..n {
            // reduce column k over the candidate rows before choosing
            for i in k..n {
                self.work[i] = _reduced_entry(A, i, k, k);
            }

            let p = select_pivot(&self.work[k..n], k)?;
            if p != k {
                A.swap_rows(k, p);
                self.work.swap(k, p);
            }
            ipiv[k] = p;

            let pivot = self.work[k];
            A[(k, k)] = pivot;

            // rest of row k of U
            for j in (k + 1)..n {
                A[(k, j)] = _reduced_entry(A, k, j, k);
            }

            // column k of L
            for i in (k + 1)..n {
                A[(i, k)] = self.work[i] / pivot;
            }
        }
        Ok(())
    }
}

macro_rules! generate_test_doolittle {
    ($fxx:ty, $test_name:ident) => {
        #[test]
        fn $test_name() {
            let A0 = Matrix::<$fxx>::from(&[
                [ 2., 3., -1.], //
                [ 4., 1.,  2.], //
                [-2., 7.,  2.], //
            ]);

            // exact in binary floating point
            let LU = Matrix::<$fxx>::from(&[
                [ 2.,  3., -1.], //
                [ 2., -5.,  4.], //
                [-1., -2.,  9.], //
            ]);

            let mut kernel = DoolittleKernel::<$fxx>::new();
            let mut A = A0.clone();
            kernel.factor(&mut A).unwrap();
            assert_eq!(A, LU);

            let mut A = A0.clone();
            let mut ipiv = vec![0; 3];
            kernel.factor_pivoted(&mut A, &mut ipiv).unwrap();
            assert_eq!(ipiv, [1, 2, 2]);
            assert_eq!(A.row_slice(0), &[4., 1., 2.]);
            assert_eq!(A.row_slice(1), &[-0.5, 7.5, 3.]);
            assert!((A[(2, 1)] - 1. / 3.).abs() < 1e-6);
            assert!((A[(2, 2)] + 3.).abs() < 1e-5);
        }
    };
}

generate_test_doolittle!(f32, test_doolittle_f32);
generate_test_doolittle!(f64, test_doolittle_f64);

#[test]
fn test_doolittle_singular() {
    let mut kernel = DoolittleKernel::<f64>::new();

    let mut A = Matrix::from(&[[1., 2.], [2., 4.]]);
    assert_eq!(
        kernel.factor(&mut A),
        Err(LUError::SingularMatrix { step: 1 })
    );

    let mut A = Matrix::from(&[[0., 3.], [4., 1.]]);
    assert_eq!(
        kernel.factor(&mut A),
        Err(LUError::SingularMatrix { step: 0 })
    );

    // pivoting recovers from the leading zero
    let mut A = Matrix::from(&[[0., 3.], [4., 1.]]);
    let mut ipiv = vec![0; 2];
    assert!(kernel.factor_pivoted(&mut A, &mut ipiv).is_ok());
    assert_eq!(ipiv, [1, 1]);

    let mut A = Matrix::from(&[[0., 1.], [0., 2.]]);
    assert_eq!(
        kernel.factor_pivoted(&mut A, &mut ipiv),
        Err(LUError::SingularMatrix { step: 0 })
    );
}
