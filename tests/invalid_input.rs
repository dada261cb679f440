#![allow(non_snake_case)]
use gauss_lu::{algebra::*, lu::*};

// a collection of tests to ensure that malformed
// input is rejected before any elimination work

#[test]
fn test_reject_empty() {
    let A = Matrix::<f64>::zeros((0, 0));
    let expected = Err(LUError::InvalidInput(InvalidMatrixError::Empty));
    assert_eq!(factorize(&A), expected);
    assert_eq!(
        factorize_pivoted(&A),
        Err(LUError::InvalidInput(InvalidMatrixError::Empty))
    );
}

#[test]
fn test_reject_not_square() {
    let A = Matrix::<f64>::zeros((2, 3));
    let err = LUError::InvalidInput(InvalidMatrixError::NotSquare { nrows: 2, ncols: 3 });
    assert_eq!(factorize(&A), Err(err.clone()));
    assert_eq!(factorize_pivoted(&A), Err(err));
}

#[test]
fn test_reject_nonfinite() {
    let mut A = Matrix::<f64>::identity(3);
    A[(2, 1)] = f64::INFINITY;

    let mut factorizer = LUFactorizer::<f64>::default();
    assert_eq!(
        factorizer.factor_pivoted(&A),
        Err(LUError::InvalidInput(InvalidMatrixError::NonFinite {
            row: 2,
            col: 1
        }))
    );
    assert_eq!(factorizer.info().status, LUStatus::InvalidInput);
    assert_eq!(factorizer.info().steps(), 0);

    A[(2, 1)] = f64::NAN;
    assert!(matches!(
        factorize(&A),
        Err(LUError::InvalidInput(InvalidMatrixError::NonFinite { .. }))
    ));
}

#[test]
fn test_nonfinite_unchecked() {
    // with checking disabled, values flow through elimination
    let settings = LUSettings {
        check_finite: false,
        ..LUSettings::default()
    };
    let mut factorizer = LUFactorizer::<f64>::new(settings).unwrap();

    let mut A = Matrix::<f64>::identity(2);
    A[(1, 1)] = f64::NAN;
    let F = factorizer.factor(&A).unwrap();
    assert!(F.U[(1, 1)].is_nan());
}

#[test]
fn test_reject_bad_format() {
    // dimension fields whose product overflows
    let A = Matrix::<f64> {
        m: usize::MAX,
        n: 2,
        data: vec![],
    };
    let err = LUError::InvalidInput(InvalidMatrixError::IncompatibleDimension);
    assert_eq!(factorize(&A), Err(err.clone()));
    assert_eq!(factorize_pivoted(&A), Err(err));
}

#[cfg(feature = "serde")]
#[test]
fn test_reject_bad_format_json() {
    let json = format!(r#"{{"m": {}, "n": {}, "data": []}}"#, usize::MAX / 2, 4);
    let A: Matrix<f64> = serde_json::from_str(&json).unwrap();
    let mut factorizer = LUFactorizer::<f64>::default();
    assert_eq!(
        factorizer.factor_pivoted(&A),
        Err(LUError::InvalidInput(
            InvalidMatrixError::IncompatibleDimension
        ))
    );
    assert_eq!(factorizer.info().status, LUStatus::InvalidInput);
}

#[test]
fn test_ragged_rows() {
    let rows = vec![vec![1., 2., 3.], vec![4., 5.]];
    assert_eq!(
        Matrix::<f64>::try_from(rows),
        Err(InvalidMatrixError::RaggedRows {
            row: 1,
            len: 2,
            expected: 3
        })
    );
}

#[test]
fn test_bad_permutation() {
    assert_eq!(
        Permutation::try_from(vec![0, 2, 2]),
        Err(PermutationError::InvalidPermutation)
    );
    assert!(Permutation::try_from(vec![2, 0, 1]).is_ok());
}

#[test]
fn test_error_display() {
    let e = LUError::SingularMatrix { step: 4 };
    assert!(e.to_string().contains("step 4"));

    let e: LUError = InvalidMatrixError::NotSquare { nrows: 2, ncols: 3 }.into();
    assert!(e.to_string().starts_with("Invalid input matrix"));
}
