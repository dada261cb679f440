#![allow(non_snake_case)]

use super::permutation::_check_perm;
use super::*;
use crate::algebra::{Matrix, MatrixMath};

// tests some of the private functions of the lu module.  Configured
// as submodule from lu/mod.rs to expose internals.

fn test_matrix_3x3() -> Matrix<f64> {
    Matrix::from(&[
        [2., 3., -1.], //
        [4., 1., 2.],  //
        [-2., 7., 2.], //
    ])
}

#[test]
fn test_check_perm() {
    assert!(_check_perm(&[3, 0, 2, 1]).is_ok());
    assert!(_check_perm(&[]).is_ok());
}

//test fail on bad permutation
#[test]
fn test_check_perm_bad_perm1() {
    //repeated index
    assert_eq!(
        _check_perm(&[3, 0, 2, 0]),
        Err(PermutationError::InvalidPermutation)
    );
}

#[test]
fn test_check_perm_bad_perm2() {
    //index too big
    assert_eq!(
        _check_perm(&[4, 0, 2, 1]),
        Err(PermutationError::InvalidPermutation)
    );
}

#[test]
fn test_permutation_ops() {
    let P = Permutation::try_from(vec![2, 0, 1]).unwrap();
    let A = test_matrix_3x3();

    // (P*A)[i,:] = A[P[i],:]
    let PA = P.permute_rows(&A);
    assert_eq!(PA.row_slice(0), A.row_slice(2));
    assert_eq!(PA.row_slice(1), A.row_slice(0));
    assert_eq!(PA.row_slice(2), A.row_slice(1));
    assert_eq!(P.ipermute_rows(&PA), A);

    // explicit matrix gives the same product
    assert_eq!(P.to_matrix::<f64>().matmul(&A), PA);

    let Pinv = P.inverse();
    assert_eq!(Pinv.as_slice(), &[1, 2, 0]);
    assert_eq!(Pinv.permute_rows(&PA), A);
    assert!(!P.is_identity());
    assert_eq!(P.swap_count(), 2);
    assert_eq!(P.to_string(), "[2, 0, 1]");
}

#[test]
fn test_from_transpositions() {
    // swap (0,1) then (1,2)
    let P = Permutation::from_transpositions(&[1, 2, 2]);
    assert_eq!(P.as_slice(), &[1, 2, 0]);

    let P = Permutation::from_transpositions(&[0, 1, 2, 3]);
    assert!(P.is_identity());
    assert_eq!(P.swap_count(), 0);

    let P = Permutation::from_transpositions(&[3, 1, 2, 3]);
    assert_eq!(P.as_slice(), &[3, 1, 2, 0]);
    assert_eq!(P.swap_count(), 1);
}

#[test]
#[should_panic]
fn test_from_transpositions_bad() {
    // row 1 cannot be exchanged with an earlier row
    Permutation::from_transpositions(&[0, 0]);
}

#[test]
fn test_unpack() {
    let LU = Matrix::from(&[
        [4., 1., 2.],      //
        [-0.5, 7.5, 3.],   //
        [0.5, 0.25, -3.],  //
    ]);
    let LU0 = LU.clone();
    let (L, U) = unpack(&LU);

    assert_eq!(
        L,
        Matrix::from(&[
            [1., 0., 0.],     //
            [-0.5, 1., 0.],   //
            [0.5, 0.25, 1.],  //
        ])
    );
    assert_eq!(
        U,
        Matrix::from(&[
            [4., 1., 2.],   //
            [0., 7.5, 3.],  //
            [0., 0., -3.],  //
        ])
    );
    assert!(L.is_unit_tril());
    assert!(U.is_triu());

    // input untouched
    assert_eq!(LU, LU0);
}

#[test]
fn test_unpack_1x1() {
    let (L, U) = unpack(&Matrix::from(&[[5.0]]));
    assert_eq!(L, Matrix::identity(1));
    assert_eq!(U, Matrix::from(&[[5.0]]));
}

#[test]
#[should_panic]
fn test_unpack_not_square() {
    unpack(&Matrix::<f64>::zeros((2, 3)));
}

#[test]
fn test_factors_reconstruct() {
    let A = test_matrix_3x3();

    let F = LUFactors {
        L: Matrix::from(&[[1., 0., 0.], [2., 1., 0.], [-1., -2., 1.]]),
        U: Matrix::from(&[[2., 3., -1.], [0., -5., 4.], [0., 0., 9.]]),
    };
    assert_eq!(F.dim(), 3);
    assert_eq!(F.reconstruct(), A);
    assert_eq!(F.residual(&A), 0.0);

    let F = PLUFactors {
        P: Permutation::from_transpositions(&[1, 2, 2]),
        L: Matrix::from(&[[1., 0., 0.], [-0.5, 1., 0.], [0.5, 1. / 3., 1.]]),
        U: Matrix::from(&[[4., 1., 2.], [0., 7.5, 3.], [0., 0., -3.]]),
    };
    assert!(F.product().norm_fro_diff(&F.P.permute_rows(&A)) < 1e-12);
    assert!(F.residual(&A) < 1e-12);

    let (P, L, U) = F.into_parts();
    assert_eq!(P.into_vec(), vec![1, 2, 0]);
    assert!(L.is_unit_tril() && U.is_triu());
}

#[test]
fn test_info_reset() {
    let mut F = LUFactorizer::<f64>::default();
    F.factor_pivoted(&test_matrix_3x3()).unwrap();
    assert_eq!(F.info().steps(), 3);

    F.info.reset(2, false, "doolittle");
    assert_eq!(F.info().status, LUStatus::Unfactored);
    assert_eq!(F.info().steps(), 0);
    assert!(F.info().pivot_rows.is_empty());
    assert_eq!(F.info().method, "doolittle");
}
