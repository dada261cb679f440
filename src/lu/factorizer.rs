#![allow(non_snake_case)]

use super::kernels::{FactorLU, LUKernel};
use super::*;
use crate::algebra::{FloatT, InvalidMatrixError, Matrix, ShapedMatrix};
use crate::io::PrintTarget;
use std::time::{Duration, Instant};

/// Dense LU factorization engine.
///
/// The elimination kernel is fixed when the factorizer is constructed,
/// from the `method` field of its [`LUSettings`].  Each call to
/// [`factor`](LUFactorizer::factor) or
/// [`factor_pivoted`](LUFactorizer::factor_pivoted) works on a private
/// copy of its input, so the caller's matrix is never modified.
///
/// Diagnostics for the most recent call are available through
/// [`info`](LUFactorizer::info).  When `settings.verbose` is set, a
/// report is written to the configured print target (stdout unless
/// redirected through [`ConfigurablePrintTarget`](crate::io::ConfigurablePrintTarget)).
pub struct LUFactorizer<T: FloatT = f64> {
    pub(crate) settings: LUSettings,
    pub(crate) kernel: LUKernel<T>,
    pub(crate) info: LUInfo<T>,
    pub(crate) stream: PrintTarget,
}

impl<T> LUFactorizer<T>
where
    T: FloatT,
{
    pub fn new(settings: LUSettings) -> Result<Self, SettingsError> {
        settings.validate()?;
        let kernel = LUKernel::new(&settings.method);
        Ok(Self {
            settings,
            kernel,
            info: LUInfo::default(),
            stream: PrintTarget::default(),
        })
    }

    pub fn settings(&self) -> &LUSettings {
        &self.settings
    }

    /// diagnostics from the most recent factorization call
    pub fn info(&self) -> &LUInfo<T> {
        &self.info
    }

    /// name of the elimination kernel in use
    pub fn method(&self) -> &'static str {
        self.kernel.name()
    }

    /// Computes `A = L*U` without row exchanges.
    ///
    /// Fails with [`LUError::SingularMatrix`] if a zero pivot is met,
    /// even when a row exchange would have avoided it.
    ///
    /// Only exactly zero pivots are rejected.  A tiny nonzero pivot can
    /// produce multipliers that overflow, in which case the factors are
    /// returned with non-finite entries.  The `check_finite` setting
    /// covers the input only.  Use [`factor_pivoted`](LUFactorizer::factor_pivoted),
    /// which bounds every multiplier by one, when that matters.
    pub fn factor(&mut self, A: &Matrix<T>) -> Result<LUFactors<T>, LUError> {
        let mut LU = self.prepare(A, false)?;

        let tic = Instant::now();
        let result = self.kernel.factor(&mut LU);
        self.record(&LU, None, &result, tic.elapsed());
        result?;

        let (L, U) = unpack(&LU);
        let _ = self.print_factors(None, &L, &U);

        Ok(LUFactors { L, U })
    }

    /// Computes `P*A = L*U` with partial pivoting.
    ///
    /// At each step the row with the largest magnitude entry in the pivot
    /// column is chosen, with ties going to the lowest row index.
    pub fn factor_pivoted(&mut self, A: &Matrix<T>) -> Result<PLUFactors<T>, LUError> {
        let mut LU = self.prepare(A, true)?;
        let mut ipiv = vec![0; LU.nrows()];

        let tic = Instant::now();
        let result = self.kernel.factor_pivoted(&mut LU, &mut ipiv);
        self.record(&LU, Some(&ipiv), &result, tic.elapsed());
        result?;

        let P = Permutation::from_transpositions(&ipiv);
        let (L, U) = unpack(&LU);
        let _ = self.print_factors(Some(&P), &L, &U);

        Ok(PLUFactors { P, L, U })
    }

    // validate the input and return a working copy of it
    fn prepare(&mut self, A: &Matrix<T>, pivoted: bool) -> Result<Matrix<T>, LUError> {
        self.info.reset(A.nrows(), pivoted, self.kernel.name());
        let _ = self.print_header(A);

        if let Err(e) = check_input(A, self.settings.check_finite) {
            self.info.status = LUStatus::InvalidInput;
            let _ = self.print_footer();
            return Err(e.into());
        }
        Ok(A.clone())
    }

    // fill in diagnostics for the completed elimination steps
    fn record(
        &mut self,
        LU: &Matrix<T>,
        ipiv: Option<&[usize]>,
        result: &Result<(), LUError>,
        elapsed: Duration,
    ) {
        let steps = match result {
            Ok(()) => LU.nrows(),
            Err(LUError::SingularMatrix { step }) => *step,
            Err(_) => 0,
        };

        let info = &mut self.info;
        info.status = match result {
            Ok(()) => LUStatus::Factored,
            Err(e) => e.into(),
        };
        info.pivot_rows = match ipiv {
            Some(ipiv) => ipiv[..steps].to_vec(),
            None => (0..steps).collect(),
        };
        info.pivots = (0..steps).map(|k| LU[(k, k)]).collect();
        info.swaps = info
            .pivot_rows
            .iter()
            .enumerate()
            .filter(|&(k, &p)| k != p)
            .count();
        info.factor_time = elapsed;

        let _ = self.print_steps();
        let _ = self.print_footer();
    }
}

impl<T> Default for LUFactorizer<T>
where
    T: FloatT,
{
    fn default() -> Self {
        let settings = LUSettings::default();
        let kernel = LUKernel::new(&settings.method);
        Self {
            settings,
            kernel,
            info: LUInfo::default(),
            stream: PrintTarget::default(),
        }
    }
}

// input checks done before any elimination work
fn check_input<T: FloatT>(A: &Matrix<T>, check_finite: bool) -> Result<(), InvalidMatrixError> {
    A.check_format()?;
    if A.nrows() == 0 || A.ncols() == 0 {
        return Err(InvalidMatrixError::Empty);
    }
    if !A.is_square() {
        return Err(InvalidMatrixError::NotSquare {
            nrows: A.nrows(),
            ncols: A.ncols(),
        });
    }
    if check_finite {
        if let Some((row, col)) = A.find_nonfinite() {
            return Err(InvalidMatrixError::NonFinite { row, col });
        }
    }
    Ok(())
}

#[test]
fn test_check_input() {
    let A = Matrix::<f64>::zeros((0, 0));
    assert_eq!(check_input(&A, true), Err(InvalidMatrixError::Empty));

    let A = Matrix::<f64>::zeros((2, 3));
    assert_eq!(
        check_input(&A, true),
        Err(InvalidMatrixError::NotSquare { nrows: 2, ncols: 3 })
    );

    let mut A = Matrix::<f64>::identity(2);
    A[(1, 0)] = f64::NAN;
    assert_eq!(
        check_input(&A, true),
        Err(InvalidMatrixError::NonFinite { row: 1, col: 0 })
    );
    assert_eq!(check_input(&A, false), Ok(()));

    let A = Matrix {
        m: 2,
        n: 2,
        data: vec![1.0; 3],
    };
    assert_eq!(
        check_input(&A, true),
        Err(InvalidMatrixError::IncompatibleDimension)
    );

    let A = Matrix::<f64> {
        m: 1 << 20,
        n: usize::MAX,
        data: vec![],
    };
    assert_eq!(
        check_input(&A, true),
        Err(InvalidMatrixError::IncompatibleDimension)
    );
}

#[test]
fn test_factorizer_is_send() {
    fn assert_send<S: Send>() {}
    assert_send::<LUFactorizer<f64>>();
    assert_send::<LUFactorizer<f32>>();
}
