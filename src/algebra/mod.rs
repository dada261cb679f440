//! Dense linear algebra types used by the LU factorization.
//!
//! The main type is [`Matrix`](crate::algebra::Matrix), a dense matrix
//! stored in row-major order.   All numeric routines are generic over
//! values implementing [`FloatT`](crate::algebra::FloatT), which is
//! provided for the native `f32` and `f64` types.

mod dense;
mod error_types;
mod floats;
mod matrix_traits;
mod matrix_types;
mod traits;
mod vecmath;

pub use error_types::*;
pub use floats::*;
pub use matrix_traits::*;
pub use matrix_types::*;
pub use traits::*;
