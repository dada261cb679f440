#![allow(non_snake_case)]

use crate::algebra::{DenseMatrix, FloatT, Matrix, MultiplyGEMM, ShapedMatrix};

impl<T> MultiplyGEMM for Matrix<T>
where
    T: FloatT,
{
    type T = T;
    // implements self = C = αA*B + βC
    fn mul<MATA, MATB>(&mut self, A: &MATA, B: &MATB, α: T, β: T) -> &Self
    where
        MATA: DenseMatrix<T = T>,
        MATB: DenseMatrix<T = T>,
    {
        assert!(A.ncols() == B.nrows() && self.nrows() == A.nrows() && self.ncols() == B.ncols());

        if self.nrows() == 0 || self.ncols() == 0 {
            return self;
        }

        let (a, b) = (A.data(), B.data());

        // i-k-j loop order so that the inner loop walks
        // along rows of B and C in row-major storage
        for i in 0..self.nrows() {
            for j in 0..self.ncols() {
                let c = &mut self[(i, j)];
                *c = if β == T::zero() { T::zero() } else { β * *c };
            }
            for k in 0..A.ncols() {
                let aik = α * a[A.index_linear((i, k))];
                if aik == T::zero() {
                    continue;
                }
                for j in 0..self.ncols() {
                    let bkj = b[B.index_linear((k, j))];
                    self[(i, j)] += aik * bkj;
                }
            }
        }
        self
    }
}

impl<T> Matrix<T>
where
    T: FloatT,
{
    /// Returns the product `A*B` as a new matrix.
    ///
    /// # Panics
    /// Panics if inner dimensions are incompatible
    pub fn matmul(&self, B: &Matrix<T>) -> Matrix<T> {
        let mut C = Matrix::zeros((self.nrows(), B.ncols()));
        C.mul(self, B, T::one(), T::zero());
        C
    }
}

#[test]
fn test_gemm() {
    let (m, n, k) = (2, 4, 3);
    let a = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    let b = vec![
        1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0,
    ];
    let c = vec![2.0, 6.0, 0.0, 4.0, 7.0, 2.0, 7.0, 2.0];

    let mut A = Matrix::zeros((m, k));
    let mut B = Matrix::zeros((k, n));
    let mut C = Matrix::<f64>::zeros((m, n));
    A.copy_from_slice(&a);
    B.copy_from_slice(&b);
    C.copy_from_slice(&c);
    C.mul(&A, &B, 1.0, 1.0);

    assert!(C.data() == vec![40.0, 50.0, 50.0, 60.0, 90.0, 100.0, 120.0, 130.0]);

    // new from slice and scaled multiply
    let A = Matrix::new_from_slice((m, k), &a);
    let B = Matrix::new_from_slice((k, n), &b);
    let mut C = Matrix::<f64>::zeros((m, n));
    C.mul(&A, &B, 2.0, 0.0);

    assert!(C.data() == vec![76.0, 88.0, 100.0, 112.0, 166.0, 196.0, 226.0, 256.0]);
}

#[test]
fn test_matmul_identity() {
    let A = Matrix::from(&[
        [2., 3., -1.], //
        [4., 1., 2.],  //
        [-2., 7., 2.], //
    ]);
    let I = Matrix::identity(3);
    assert_eq!(A.matmul(&I), A);
    assert_eq!(I.matmul(&A), A);
}
