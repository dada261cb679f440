//! __gauss-lu__ is a Rust implementation of dense LU factorization by
//! Gaussian elimination.  For a square matrix $A$ it computes either
//!
//! $$
//! A = LU \quad \text{or} \quad PA = LU,
//! $$
//!
//! where $L$ is unit lower triangular, $U$ is upper triangular and $P$ is a
//! row permutation chosen by partial pivoting.
//!
//! ## Features
//!
//! * __Two modes__: factorization without row exchanges, which fails on the
//!   first zero pivot, and factorization with partial pivoting, which selects
//!   the largest magnitude pivot in each column.
//!
//! * __Interchangeable kernels__: Doolittle (dot-product) and right-looking
//!   (outer-product) elimination, selected through
//!   [`LUSettings`](crate::lu::LUSettings).
//!
//! * __Generic precision__: all routines are generic over
//!   [`FloatT`](crate::algebra::FloatT), implemented for `f32` and `f64`.
//!
//! * __Diagnostics__: pivots, row swaps and timing of the last call are kept in
//!   [`LUInfo`](crate::lu::LUInfo), with an optional printed report.
//!
//! # Example
//!
//! ```
//! use gauss_lu::algebra::*;
//! use gauss_lu::lu::*;
//!
//! let A = Matrix::from(&[
//!     [4., 3., 2.],
//!     [2., 1., 1.],
//!     [3., 2., 1.],
//! ]);
//!
//! let settings = LUSettingsBuilder::default()
//!     .method("doolittle".to_string())
//!     .build()
//!     .unwrap();
//!
//! let mut factorizer = LUFactorizer::new(settings).unwrap();
//! let plu = factorizer.factor_pivoted(&A).unwrap();
//!
//! assert!(plu.L.is_unit_tril());
//! assert!(plu.U.is_triu());
//! assert!(plu.residual(&A) < 1e-12);
//! ```
//!
//! # License
//!
//! Licensed under Apache License, Version 2.0.

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod algebra;
pub mod io;
pub mod lu;
