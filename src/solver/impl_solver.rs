use ndarray::ArrayView1;

use super::{CelerSolver, Solver};

use crate::celer::{celer, CelerOutput};
use crate::datasets::{AsSingleTargets, DatasetBase, DesignMatrix};
use crate::Float;

impl<F: Float> Default for Solver<F> {
    fn default() -> Self {
        Solver {
            p0: 10,
            max_iterations: 100,
            max_epochs: 50_000,
            gap_freq: 10,
            tol_ratio_inner: F::cast(0.3),
            tolerance: F::cast(1e-6),
            K: 6,
            use_acceleration: true,
            prune: false,
            screening: false,
            verbose: false,
            verbose_inner: false,
            return_ws_sizes: false,
        }
    }
}

impl<F: Float> Solver<F> {
    /// Size of the first working set.
    pub fn p0(mut self, p0: usize) -> Self {
        self.p0 = p0;
        self
    }

    /// Maximum number of outer iterations.
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Maximum number of coordinate descent epochs per subproblem.
    pub fn max_epochs(mut self, max_epochs: usize) -> Self {
        self.max_epochs = max_epochs;
        self
    }

    /// Number of epochs between two duality gap computations in the inner
    /// solver.
    pub fn gap_freq(mut self, gap_freq: usize) -> Self {
        self.gap_freq = gap_freq;
        self
    }

    /// Ratio of the outer duality gap used as tolerance for the subproblems
    /// when pruning.
    pub fn tol_ratio_inner(mut self, tol_ratio_inner: F) -> Self {
        self.tol_ratio_inner = tol_ratio_inner;
        self
    }

    /// Stopping criterion on the duality gap.
    pub fn tolerance(mut self, tolerance: F) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Number of residuals used for the dual extrapolation.
    pub fn K(mut self, K: usize) -> Self {
        self.K = K;
        self
    }

    pub fn use_acceleration(mut self, use_acceleration: bool) -> Self {
        self.use_acceleration = use_acceleration;
        self
    }

    /// Selects the pruning growth policy of the working set instead of the
    /// geometric one.
    pub fn prune(mut self, prune: bool) -> Self {
        self.prune = prune;
        self
    }

    /// Enables Gap Safe screening of the features.
    pub fn screening(mut self, screening: bool) -> Self {
        self.screening = screening;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn verbose_inner(mut self, verbose_inner: bool) -> Self {
        self.verbose_inner = verbose_inner;
        self
    }

    /// Records the size of the working set at every outer iteration.
    pub fn return_ws_sizes(mut self, return_ws_sizes: bool) -> Self {
        self.return_ws_sizes = return_ws_sizes;
        self
    }

    pub fn get_p0(&self) -> usize {
        self.p0
    }

    pub fn get_max_iterations(&self) -> usize {
        self.max_iterations
    }

    pub fn get_max_epochs(&self) -> usize {
        self.max_epochs
    }

    pub fn get_gap_freq(&self) -> usize {
        self.gap_freq
    }

    pub fn get_tol_ratio_inner(&self) -> F {
        self.tol_ratio_inner
    }

    pub fn get_tolerance(&self) -> F {
        self.tolerance
    }

    pub fn get_K(&self) -> usize {
        self.K
    }

    pub fn get_prune(&self) -> bool {
        self.prune
    }

    pub fn get_screening(&self) -> bool {
        self.screening
    }
}

impl<F, DM, T> CelerSolver<F, DM, T> for Solver<F>
where
    F: Float,
    DM: DesignMatrix<Elem = F>,
    T: AsSingleTargets<Elem = F>,
{
    fn solve(
        &self,
        dataset: &DatasetBase<DM, T>,
        alpha: F,
        w_init: ArrayView1<F>,
    ) -> CelerOutput<F> {
        celer(dataset, alpha, w_init, self)
    }
}
