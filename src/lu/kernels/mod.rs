#![allow(non_snake_case)]

use super::LUError;
use crate::algebra::{FloatT, Matrix, VectorMath};
use enum_dispatch::*;

mod doolittle;
mod outer;

pub(crate) use doolittle::*;
pub(crate) use outer::*;

// Elimination kernels overwrite a square working matrix with its
// combined triangular storage: multipliers of L strictly below the
// diagonal and U on and above it.
//
// Pivoted kernels also write the row exchanged at each step into
// `ipiv`, so that row k was swapped with row ipiv[k] >= k.  Rows are
// always swapped in full, which carries the multipliers already
// computed for earlier columns along with the row.
//
// On failure at step k, steps 0..k of the working matrix and of
// `ipiv` have been completed and the remainder is unspecified.

#[enum_dispatch]
pub(crate) trait FactorLU<T>
where
    T: FloatT,
{
    fn name(&self) -> &'static str;
    fn factor(&mut self, A: &mut Matrix<T>) -> Result<(), LUError>;
    fn factor_pivoted(&mut self, A: &mut Matrix<T>, ipiv: &mut [usize]) -> Result<(), LUError>;
}

#[enum_dispatch(FactorLU<T>)]
pub(crate) enum LUKernel<T>
where
    T: FloatT,
{
    Doolittle(DoolittleKernel<T>),
    OuterProduct(OuterProductKernel<T>),
}

impl<T> LUKernel<T>
where
    T: FloatT,
{
    // method strings are checked during settings validation, so
    // anything unrecognized here is a bug in the caller
    pub(crate) fn new(method: &str) -> Self {
        match method {
            "auto" | "outer_product" => OuterProductKernel::new().into(),
            "doolittle" => DoolittleKernel::new().into(),
            _ => {
                panic! {"Unrecognized LU method"};
            }
        }
    }
}

// Index of the pivot row among the reduced column entries
// `candidates`, which hold rows k.. of column k.
pub(crate) fn select_pivot<T: FloatT>(candidates: &[T], k: usize) -> Result<usize, LUError> {
    match candidates.iamax() {
        Some(i) if candidates[i] != T::zero() => Ok(k + i),
        _ => Err(LUError::SingularMatrix { step: k }),
    }
}

#[test]
fn test_select_pivot() {
    assert_eq!(select_pivot(&[1.0, -3.0, 2.0], 4), Ok(5));
    // first of tied magnitudes wins
    assert_eq!(select_pivot(&[-2.0, 2.0], 0), Ok(0));
    assert_eq!(
        select_pivot(&[0.0, -0.0], 1),
        Err(LUError::SingularMatrix { step: 1 })
    );
    assert_eq!(
        select_pivot::<f64>(&[], 2),
        Err(LUError::SingularMatrix { step: 2 })
    );
}

#[test]
fn test_kernel_new() {
    assert_eq!(LUKernel::<f64>::new("auto").name(), "outer_product");
    assert_eq!(LUKernel::<f64>::new("outer_product").name(), "outer_product");
    assert_eq!(LUKernel::<f32>::new("doolittle").name(), "doolittle");
}

#[test]
#[should_panic]
fn test_kernel_new_unknown() {
    let _ = LUKernel::<f64>::new("crout");
}
