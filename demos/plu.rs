#![allow(non_snake_case)]

use gauss_lu::algebra::*;
use gauss_lu::lu::*;

fn main() {
    let A = Matrix::from(&[
        [0., 3., -1.], //
        [4., 1., 2.],  //
        [-2., 7., 2.], //
    ]);

    let settings = LUSettingsBuilder::default()
        .verbose(true)
        .print_factors(true)
        .method("doolittle".to_string())
        .build()
        .unwrap();

    let mut factorizer = LUFactorizer::new(settings).unwrap();
    let F = factorizer.factor_pivoted(&A).unwrap();

    println!("P*A =\n{}", F.P.permute_rows(&A));
    println!("L*U =\n{}", F.product());
    println!("residual = {:e}", F.residual(&A));

    let info = factorizer.info();
    println!("pivots = {:?}, row swaps = {}", info.pivots, info.swaps);
}
