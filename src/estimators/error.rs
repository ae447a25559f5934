use thiserror::Error;

/// Simplified `Result` using [`EstimatorError`] as error type
pub type Result<T> = std::result::Result<T, EstimatorError>;

/// Error variants from hyperparameter construction or model estimation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EstimatorError {
    #[error("invalid alpha {0}, it must be strictly positive")]
    InvalidRegularization(f32),
    #[error("invalid tolerance {0}")]
    InvalidTolerance(f32),
    #[error("invalid K {0}, at least 2 residuals are needed for the extrapolation")]
    InvalidK(usize),
    #[error("invalid p0 {0}")]
    InvalidP0(usize),
    #[error("invalid gap_freq {0}")]
    InvalidGapFreq(usize),
    #[error("invalid tol_ratio_inner {0}, it must lie in (0, 1]")]
    InvalidTolRatioInner(f32),
    #[error("design matrix is not consistent with {0} samples")]
    InconsistentDesignMatrix(usize),
    #[error("initial weights have length {actual}, expected {expected}")]
    InvalidInitialWeights { expected: usize, actual: usize },
}
