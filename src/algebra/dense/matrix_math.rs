#![allow(non_snake_case)]
use crate::algebra::{FloatT, Matrix, MatrixMath, ShapedMatrix, VectorMath};

impl<T: FloatT> MatrixMath for Matrix<T> {
    type T = T;

    fn norm_fro_diff(&self, B: &Self) -> T {
        assert_eq!(self.size(), B.size());
        self.data.dist(&B.data)
    }

    fn norm_max(&self) -> T {
        self.data.norm_inf()
    }
}

#[test]
fn test_matrix_norms() {
    let A = Matrix::from(&[
        [1., -2.], //
        [3., 4.],  //
    ]);
    let B = Matrix::from(&[
        [1., 1.], //
        [3., 0.], //
    ]);
    assert_eq!(A.norm_max(), 4.0);
    assert_eq!(A.norm_fro_diff(&B), 5.0);
    assert_eq!(A.norm_fro_diff(&A), 0.0);
}
