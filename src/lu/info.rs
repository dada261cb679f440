use super::LUError;
use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Outcome of the most recent factorization call
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LUStatus {
    /// No factorization attempted
    #[default]
    Unfactored,
    /// Factorization completed
    Factored,
    /// Zero pivot encountered at the given elimination step
    Singular { step: usize },
    /// Input rejected before elimination
    InvalidInput,
}

impl std::fmt::Display for LUStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            LUStatus::Unfactored => write!(f, "Unfactored"),
            LUStatus::Factored => write!(f, "Factored"),
            LUStatus::Singular { step } => write!(f, "Singular at step {step}"),
            LUStatus::InvalidInput => write!(f, "Invalid input"),
        }
    }
}

impl From<&LUError> for LUStatus {
    fn from(e: &LUError) -> Self {
        match e {
            LUError::InvalidInput(_) => LUStatus::InvalidInput,
            LUError::SingularMatrix { step } => LUStatus::Singular { step: *step },
        }
    }
}

/// Diagnostics recorded by the most recent factorization call
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: Serialize + DeserializeOwned"))]
pub struct LUInfo<T> {
    pub status: LUStatus,
    /// dimension of the input
    pub dim: usize,
    /// true for `P*A = L*U`, false for `A = L*U`
    pub pivoted: bool,
    /// name of the elimination kernel used
    pub method: String,
    /// number of steps at which two distinct rows were exchanged
    pub swaps: usize,
    /// row selected at each completed step
    pub pivot_rows: Vec<usize>,
    /// pivot value at each completed step, i.e. the diagonal of `U`
    pub pivots: Vec<T>,
    /// wall time spent in elimination
    pub factor_time: Duration,
}

impl<T> LUInfo<T> {
    pub(crate) fn reset(&mut self, dim: usize, pivoted: bool, method: &str) {
        self.status = LUStatus::Unfactored;
        self.dim = dim;
        self.pivoted = pivoted;
        self.method = method.to_string();
        self.swaps = 0;
        self.pivot_rows.clear();
        self.pivots.clear();
        self.factor_time = Duration::ZERO;
    }

    /// number of elimination steps completed
    pub fn steps(&self) -> usize {
        self.pivots.len()
    }
}

#[test]
fn test_status_display() {
    assert_eq!(LUStatus::default(), LUStatus::Unfactored);
    assert_eq!(LUStatus::Singular { step: 2 }.to_string(), "Singular at step 2");

    let e = LUError::SingularMatrix { step: 3 };
    assert_eq!(LUStatus::from(&e), LUStatus::Singular { step: 3 });
}
