use super::error::{EstimatorError, Result};
use super::param_guard::ParamGuard;
use crate::solver::Solver;
use crate::Float;

/// A verified hyperparameter set ready for the fitting of a Lasso regression model
#[derive(Debug, Clone, PartialEq)]
pub struct LassoValidParams<F> {
    alpha: F,
    solver: Solver<F>,
}

impl<F: Float> LassoValidParams<F> {
    pub fn alpha(&self) -> F {
        self.alpha
    }

    /// Configuration of the underlying Celer solver
    pub fn solver(&self) -> &Solver<F> {
        &self.solver
    }
}

/// A hyper-parameter set during construction
///
/// Configures and minimizes the following objective function:
/// ```ignore
/// 1 / (2 * n_samples) * ||y - Xw||^2_2
///     + alpha * ||w||_1
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LassoParams<F>(LassoValidParams<F>);

impl<F: Float> Default for LassoParams<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Configure and fit a Lasso model
impl<F: Float> LassoParams<F> {
    /// Create default Lasso hyper parameters
    pub fn new() -> LassoParams<F> {
        Self(LassoValidParams {
            alpha: F::one(),
            solver: Solver::default(),
        })
    }

    /// Set the regularization hyperparameter. A higher value yields sparser
    /// solutions.
    /// Defaults to `1` if not set.
    pub fn alpha(mut self, alpha: F) -> Self {
        self.0.alpha = alpha;
        self
    }

    /// Set the size of the first working set.
    /// Defaults to `10` if not set.
    pub fn p0(mut self, p0: usize) -> Self {
        self.0.solver = self.0.solver.p0(p0);
        self
    }

    /// Set the maximum number of iterations in the outer loop used to build
    /// working sets.
    /// Defaults to `100` if not set.
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.0.solver = self.0.solver.max_iterations(max_iterations);
        self
    }

    /// Set the maximum number of epochs of coordinate descent on each
    /// subproblem.
    /// Defaults to `50000` if not set.
    pub fn max_epochs(mut self, max_epochs: usize) -> Self {
        self.0.solver = self.0.solver.max_epochs(max_epochs);
        self
    }

    /// Set the number of epochs between two duality gap computations.
    /// Defaults to `10` if not set.
    pub fn gap_freq(mut self, gap_freq: usize) -> Self {
        self.0.solver = self.0.solver.gap_freq(gap_freq);
        self
    }

    /// Set the ratio of the duality gap used as tolerance for the
    /// subproblems when pruning the working sets.
    /// Defaults to `0.3` if not set.
    pub fn tol_ratio_inner(mut self, tol_ratio_inner: F) -> Self {
        self.0.solver = self.0.solver.tol_ratio_inner(tol_ratio_inner);
        self
    }

    /// Set the stopping criterion for the optimization routine (duality gap).
    /// Defaults to `1e-6` if not set.
    pub fn tolerance(mut self, tolerance: F) -> Self {
        self.0.solver = self.0.solver.tolerance(tolerance);
        self
    }

    /// Set the number of residuals used for the dual extrapolation.
    /// Defaults to `6` if not set.
    pub fn K(mut self, K: usize) -> Self {
        self.0.solver = self.0.solver.K(K);
        self
    }

    /// Enables the dual extrapolation in the subproblems.
    /// Defaults to `true` if not set.
    pub fn use_acceleration(mut self, use_acceleration: bool) -> Self {
        self.0.solver = self.0.solver.use_acceleration(use_acceleration);
        self
    }

    /// Prunes the working sets instead of growing them geometrically.
    /// Defaults to `false` if not set.
    pub fn prune(mut self, prune: bool) -> Self {
        self.0.solver = self.0.solver.prune(prune);
        self
    }

    /// Enables Gap Safe screening.
    /// Defaults to `false` if not set.
    pub fn screening(mut self, screening: bool) -> Self {
        self.0.solver = self.0.solver.screening(screening);
        self
    }

    /// Logs the progress of the outer loop.
    /// Defaults to `false` if not set.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.0.solver = self.0.solver.verbose(verbose);
        self
    }

    /// Logs the progress of the subproblems.
    /// Defaults to `false` if not set.
    pub fn verbose_inner(mut self, verbose_inner: bool) -> Self {
        self.0.solver = self.0.solver.verbose_inner(verbose_inner);
        self
    }
}

impl<F: Float> ParamGuard for LassoParams<F> {
    type Checked = LassoValidParams<F>;
    type Error = EstimatorError;

    /// Validate the hyper parameters
    fn check_ref(&self) -> Result<&Self::Checked> {
        let alpha = self.0.alpha;
        let solver = &self.0.solver;
        if !(alpha > F::zero()) || !alpha.is_finite() {
            Err(EstimatorError::InvalidRegularization(
                alpha.to_f32().unwrap_or(f32::NAN),
            ))
        } else if !(solver.tolerance >= F::zero()) {
            Err(EstimatorError::InvalidTolerance(
                solver.tolerance.to_f32().unwrap_or(f32::NAN),
            ))
        } else if solver.K < 2 {
            Err(EstimatorError::InvalidK(solver.K))
        } else if solver.p0 == 0 {
            Err(EstimatorError::InvalidP0(solver.p0))
        } else if solver.gap_freq == 0 {
            Err(EstimatorError::InvalidGapFreq(solver.gap_freq))
        } else if !(solver.tol_ratio_inner > F::zero() && solver.tol_ratio_inner <= F::one()) {
            Err(EstimatorError::InvalidTolRatioInner(
                solver.tol_ratio_inner.to_f32().unwrap_or(f32::NAN),
            ))
        } else {
            Ok(&self.0)
        }
    }

    fn check(self) -> Result<Self::Checked> {
        self.check_ref()?;
        Ok(self.0)
    }
}
