#![allow(non_snake_case)]

use super::{select_pivot, FactorLU};
use crate::algebra::{FloatT, Matrix, ShapedMatrix};
use crate::lu::LUError;
use itertools::izip;

/// Right-looking (outer-product) elimination.
///
/// At step `k` the multipliers of column `k` are formed and the
/// trailing submatrix is updated by a rank-one correction.
pub(crate) struct OuterProductKernel<T> {
    // pivot candidates gathered from the current column
    work: Vec<T>,
}

impl<T> OuterProductKernel<T>
where
    T: FloatT,
{
    pub fn new() -> Self {
        Self { work: vec![] }
    }
}

// eliminate below the diagonal of column k, given a nonzero pivot
fn _eliminate<T: FloatT>(A: &mut Matrix<T>, k: usize, pivot: T) {
    let n = A.nrows();
    for i in (k + 1)..n {
        let (ri, rk) = A.row_pair_mut(i, k);
        let l = ri[k] / pivot;
        ri[k] = l;
        if l == T::zero() {
            continue;
        }
        for (aij, &ukj) in izip!(&mut ri[(k + 1)..], &rk[(k + 1)..]) {
            *aij -= l * ukj;
        }
    }
}

impl<T> FactorLU<T> for OuterProductKernel<T>
where
    T: FloatT,
{
    fn name(&self) -> &'static str {
        "outer_product"
    }

    fn factor(&mut self, A: &mut Matrix<T>) -> Result<(), LUError> {
        let n = A.nrows();

        for k in 0..n {
            let pivot = A[(k, k)];
            if pivot == T::zero() {
                return Err(LUError::SingularMatrix { step: k });
            }
            _eliminate(A, k, pivot);
        }
        Ok(())
    }

    fn factor_pivoted(&mut self, A: &mut Matrix<T>, ipiv: &mut [usize]) -> Result<(), LUError> {
        let n = A.nrows();
        assert_eq!(ipiv.len(), n);
        self.work.resize(n, T::zero());

        for k in 0..n {
            A.col_copy(k, &mut self.work);
            let p = select_pivot(&self.work[k..n], k)?;

            // full row swap, so L multipliers move with their row
            A.swap_rows(k, p);
            ipiv[k] = p;

            let pivot = A[(k, k)];
            _eliminate(A, k, pivot);
        }
        Ok(())
    }
}

macro_rules! generate_test_outer {
    ($fxx:ty, $test_name:ident) => {
        #[test]
        fn $test_name() {
            let A0 = Matrix::<$fxx>::from(&[
                [ 2., 3., -1.], //
                [ 4., 1.,  2.], //
                [-2., 7.,  2.], //
            ]);

            let LU = Matrix::<$fxx>::from(&[
                [ 2.,  3., -1.], //
                [ 2., -5.,  4.], //
                [-1., -2.,  9.], //
            ]);

            let mut kernel = OuterProductKernel::<$fxx>::new();
            let mut A = A0.clone();
            kernel.factor(&mut A).unwrap();
            assert_eq!(A, LU);

            let mut A = A0.clone();
            let mut ipiv = vec![0; 3];
            kernel.factor_pivoted(&mut A, &mut ipiv).unwrap();
            assert_eq!(ipiv, [1, 2, 2]);
            assert_eq!(A.row_slice(0), &[4., 1., 2.]);
            assert_eq!(A.row_slice(1), &[-0.5, 7.5, 3.]);
            assert!((A[(2, 0)] - 0.5).abs() < 1e-6);
            assert!((A[(2, 1)] - 1. / 3.).abs() < 1e-6);
            assert!((A[(2, 2)] + 3.).abs() < 1e-5);
        }
    };
}

generate_test_outer!(f32, test_outer_f32);
generate_test_outer!(f64, test_outer_f64);

#[test]
fn test_outer_singular() {
    let mut kernel = OuterProductKernel::<f64>::new();

    let mut A = Matrix::from(&[[1., 2.], [2., 4.]]);
    assert_eq!(
        kernel.factor(&mut A),
        Err(LUError::SingularMatrix { step: 1 })
    );

    let mut A = Matrix::from(&[[1., 2.], [2., 4.]]);
    let mut ipiv = vec![0; 2];
    assert_eq!(
        kernel.factor_pivoted(&mut A, &mut ipiv),
        Err(LUError::SingularMatrix { step: 1 })
    );
    // first step completed before failing
    assert_eq!(ipiv[0], 1);
    assert_eq!(A.row_slice(0), &[2., 4.]);

    // a zero last pivot is still detected
    let mut A = Matrix::from(&[[0.]]);
    assert_eq!(
        kernel.factor_pivoted(&mut A, &mut ipiv[..1]),
        Err(LUError::SingularMatrix { step: 0 })
    );
}
