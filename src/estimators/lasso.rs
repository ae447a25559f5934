use ndarray::{Array1, ArrayView1};

use super::error::{EstimatorError, Result};
use super::hyperparams::{LassoParams, LassoValidParams};
use super::traits::Fit;
use crate::celer::celer;
use crate::datasets::{AsSingleTargets, DatasetBase, DesignMatrix};
use crate::Float;

/// The Lasso estimator
///
/// The Lasso estimator solves a regularized least-square regression problem.
/// The L1-regularization used yields sparse solutions. It is fitted with the
/// Celer solver and keeps the dual certificate of its coefficients.
#[derive(Debug, Clone, PartialEq)]
pub struct Lasso<F> {
    coefficients: Array1<F>,
    dual_point: Array1<F>,
    gaps: Vec<F>,
    n_iterations: usize,
    converged: bool,
}

impl<F: Float> Lasso<F> {
    /// This method instantiates a Lasso estimator with default parameters
    /// for the Celer solver.
    pub fn params() -> LassoParams<F> {
        LassoParams::new()
    }

    /// This method is a getter for the coefficients vector.
    pub fn coefficients(&self) -> ArrayView1<F> {
        self.coefficients.view()
    }

    /// This method is a getter for the feasible dual point certifying the
    /// coefficients.
    pub fn dual_point(&self) -> ArrayView1<F> {
        self.dual_point.view()
    }

    /// Duality gaps of the outer iterations
    pub fn gaps(&self) -> &[F] {
        &self.gaps
    }

    /// Last duality gap reached by the solver.
    pub fn duality_gap(&self) -> F {
        self.gaps.last().copied().unwrap_or_else(F::infinity)
    }

    pub fn n_iterations(&self) -> usize {
        self.n_iterations
    }

    pub fn converged(&self) -> bool {
        self.converged
    }
}

impl<F: Float> LassoValidParams<F> {
    /// This method fits a [`Lasso`] instance starting from the weights
    /// `w_init`, typically the coefficients fitted for a close value of the
    /// regularization hyperparameter.
    pub fn fit_warm_start<DM, T>(
        &self,
        dataset: &DatasetBase<DM, T>,
        w_init: ArrayView1<F>,
    ) -> Result<Lasso<F>>
    where
        DM: DesignMatrix<Elem = F>,
        T: AsSingleTargets<Elem = F>,
    {
        let n_samples = dataset.n_samples();
        let n_features = dataset.n_features();
        if !dataset.design_matrix().is_consistent(n_samples) {
            return Err(EstimatorError::InconsistentDesignMatrix(n_samples));
        }
        if w_init.len() != n_features {
            return Err(EstimatorError::InvalidInitialWeights {
                expected: n_features,
                actual: w_init.len(),
            });
        }

        let out = celer(dataset, self.alpha(), w_init, self.solver());
        Ok(Lasso {
            coefficients: out.w,
            dual_point: out.theta,
            gaps: out.gaps,
            n_iterations: out.n_iter,
            converged: out.converged,
        })
    }
}

/// This implements the Celer solver for dense and sparse design matrices.
impl<F, DM, T> Fit<DM, T, EstimatorError> for LassoValidParams<F>
where
    F: Float,
    DM: DesignMatrix<Elem = F>,
    T: AsSingleTargets<Elem = F>,
{
    /// If successful, the output of the solver is an instance of [`Lasso`]
    /// containing the fitted coefficients.
    type Object = Lasso<F>;

    /// This method fits a [`Lasso`] instance to a dataset, starting from null
    /// weights.
    fn fit(&self, dataset: &DatasetBase<DM, T>) -> Result<Self::Object> {
        let w_init = Array1::<F>::zeros(dataset.n_features());
        self.fit_warm_start(dataset, w_init.view())
    }
}
