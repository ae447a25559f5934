use crate::celer::CelerOutput;
use crate::datasets::{AsSingleTargets, DatasetBase, DesignMatrix};
use crate::Float;
use ndarray::ArrayView1;

mod impl_solver;


/// Configuration of the Celer solver
///
/// It gathers every knob of the outer working set loop and of the inner
/// coordinate descent solver. Values are set with the chained setters of
/// [`Solver::default`].
#[derive(Debug, Clone, PartialEq)]
pub struct Solver<F> {
    pub(crate) p0: usize,
    pub(crate) max_iterations: usize,
    pub(crate) max_epochs: usize,
    pub(crate) gap_freq: usize,
    pub(crate) tol_ratio_inner: F,
    pub(crate) tolerance: F,
    pub(crate) K: usize,
    pub(crate) use_acceleration: bool,
    pub(crate) prune: bool,
    pub(crate) screening: bool,
    pub(crate) verbose: bool,
    pub(crate) verbose_inner: bool,
    pub(crate) return_ws_sizes: bool,
}

/// This trait is implemented by solvers of the Lasso that start from a given
/// initial point.
pub trait CelerSolver<F, DM, T>
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
    ) -> CelerOutput<F>;
}
