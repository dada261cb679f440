#![allow(non_snake_case)]

use gauss_lu::{algebra::*, io::ConfigurablePrintTarget, lu::*};

fn test_print_factorizer(print_factors: bool) -> LUFactorizer<f64> {
    let settings = LUSettingsBuilder::default()
        .verbose(true)
        .print_factors(print_factors)
        .build()
        .unwrap();
    LUFactorizer::new(settings).unwrap()
}

fn test_print_data() -> Matrix<f64> {
    Matrix::from(&[
        [2., 3., -1.], //
        [4., 1., 2.],  //
        [-2., 7., 2.], //
    ])
}

#[test]
fn test_print_to_stdout() {
    let mut factorizer = test_print_factorizer(true);
    factorizer.print_to_stdout();
    factorizer.factor_pivoted(&test_print_data()).unwrap();
}

#[test]
fn test_print_to_buffer() {
    let mut factorizer = test_print_factorizer(false);
    factorizer.print_to_buffer();
    factorizer.factor_pivoted(&test_print_data()).unwrap();
    let result = factorizer.get_print_buffer().unwrap();
    assert!(result.contains("gauss-lu"));
    assert!(result.contains("P*A = L*U"));
    assert!(result.contains("Terminated with status = Factored"));
    assert!(result.contains("row swaps = 2"));
    assert!(result.contains("+4.0000e+00"));
    assert!(!result.contains("Permutation:"));
}

#[test]
fn test_print_factors() {
    let mut factorizer = test_print_factorizer(true);
    factorizer.print_to_buffer();
    factorizer.factor_pivoted(&test_print_data()).unwrap();
    let result = factorizer.get_print_buffer().unwrap();
    assert!(result.contains("Permutation:\n[1, 2, 0]"));
    assert!(result.contains("L:\n"));
    assert!(result.contains("U:\n"));

    // unpivoted output has no permutation
    factorizer.print_to_buffer();
    factorizer.factor(&test_print_data()).unwrap();
    let result = factorizer.get_print_buffer().unwrap();
    assert!(result.contains("A = L*U"));
    assert!(!result.contains("Permutation:"));
    assert!(result.contains("L:\n"));
}

#[test]
fn test_print_factors_too_large() {
    let settings = LUSettings {
        verbose: true,
        print_factors: true,
        max_print_dim: 2,
        ..LUSettings::default()
    };
    let mut factorizer = LUFactorizer::<f64>::new(settings).unwrap();
    factorizer.print_to_buffer();
    factorizer.factor(&test_print_data()).unwrap();
    let result = factorizer.get_print_buffer().unwrap();
    assert!(result.contains("factors not shown"));
    assert!(!result.contains("L:\n"));
}

#[test]
fn test_print_failures() {
    let mut factorizer = test_print_factorizer(true);
    factorizer.print_to_buffer();
    let A = Matrix::from(&[[1., 2.], [2., 4.]]);
    assert!(factorizer.factor(&A).is_err());
    let result = factorizer.get_print_buffer().unwrap();
    assert!(result.contains("Terminated with status = Singular at step 1"));
    assert!(!result.contains("L:\n"));

    factorizer.print_to_buffer();
    assert!(factorizer.factor(&Matrix::zeros((2, 3))).is_err());
    let result = factorizer.get_print_buffer().unwrap();
    assert!(result.contains("dimension = 2 x 3"));
    assert!(result.contains("Terminated with status = Invalid input"));
}

#[test]
fn test_print_to_file() {
    use std::io::{Read, Seek};

    let mut factorizer = test_print_factorizer(true);
    let file = tempfile::NamedTempFile::new().unwrap();
    let mut file2 = file.reopen().unwrap();
    factorizer.print_to_file(file.into_file());
    factorizer.factor_pivoted(&test_print_data()).unwrap();

    file2.seek(std::io::SeekFrom::Start(0)).unwrap();
    let mut result = String::new();
    file2.read_to_string(&mut result).unwrap();
    assert!(result.contains("gauss-lu"));
    assert!(result.contains("Permutation:"));
}

#[test]
fn test_print_to_stream() {
    use std::io::{Read, Seek};

    let mut factorizer = test_print_factorizer(false);
    let file = tempfile::NamedTempFile::new().unwrap();
    let mut file2 = file.reopen().unwrap();
    let stream = Box::new(file.into_file());

    factorizer.print_to_stream(stream);
    factorizer.factor(&test_print_data()).unwrap();

    file2.seek(std::io::SeekFrom::Start(0)).unwrap();
    let mut result = String::new();
    file2.read_to_string(&mut result).unwrap();
    assert!(result.contains("gauss-lu"));
}

#[test]
fn test_print_to_sink() {
    let mut factorizer = test_print_factorizer(true);
    factorizer.print_to_sink();
    factorizer.factor_pivoted(&test_print_data()).unwrap();
    // no output
    assert!(factorizer.get_print_buffer().is_err());
}

#[test]
fn test_silent_by_default() {
    let mut factorizer = LUFactorizer::<f64>::default();
    factorizer.print_to_buffer();
    factorizer.factor_pivoted(&test_print_data()).unwrap();
    assert_eq!(factorizer.get_print_buffer().unwrap(), "");
}
