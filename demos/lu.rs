#![allow(non_snake_case)]

use gauss_lu::algebra::*;
use gauss_lu::lu::*;

fn main() {
    let A = Matrix::from(&[
        [2., 3., -1.], //
        [4., 1., 2.],  //
        [-2., 7., 2.], //
    ]);

    let settings = LUSettingsBuilder::default()
        .verbose(true)
        .print_factors(true)
        .build()
        .unwrap();

    let mut factorizer = LUFactorizer::new(settings).unwrap();

    match factorizer.factor(&A) {
        Ok(F) => println!("residual = {:e}", F.residual(&A)),
        Err(e) => println!("factorization failed: {e}"),
    }

    // a leading zero pivot cannot be handled without row exchanges
    let A = Matrix::from(&[
        [0., 3., -1.], //
        [4., 1., 2.],  //
        [-2., 7., 2.], //
    ]);

    if let Err(e) = factorizer.factor(&A) {
        println!("factorization failed: {e}");
    }
}
