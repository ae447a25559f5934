use ndarray::{Array1, ArrayView1};

use crate::datasets::{AsSingleTargets, DatasetBase, DesignMatrix};
use crate::Float;

#[cfg(test)]
mod tests;

/// Quadratic datafit
///
/// The squared-norm residuals datafit `||y - Xw||^2 / (2 * n_samples)` of the
/// Lasso. The solver works on the residual `R = y - Xw` rather than on the
/// model fit, so every method takes the residual as input. It stores the
/// quantities pre-computed once per solve: Lipschitz constants of the
/// coordinate-wise gradients, column norms of the (possibly centered) design
/// matrix, column sums and the squared norm of the target.
#[derive(Debug, Clone, PartialEq)]
pub struct Quadratic<F: Float> {
    lipschitz: Array1<F>,
    norms: Array1<F>,
    column_sums: Array1<F>,
    norm_y2: F,
    centered: bool,
}

impl<F: Float> Default for Quadratic<F> {
    fn default() -> Quadratic<F> {
        Quadratic::new()
    }
}

impl<F: Float> Quadratic<F> {
    pub fn new() -> Self {
        Quadratic {
            lipschitz: Array1::<F>::zeros(1),
            norms: Array1::<F>::zeros(1),
            column_sums: Array1::<F>::zeros(1),
            norm_y2: F::zero(),
            centered: false,
        }
    }

    /// This method pre-computes the Lipschitz constants `||X_j||^2 / n_samples`,
    /// the column norms and, for centered design matrices, the column sums
    /// used to track the sum of the residual incrementally.
    ///
    /// The squared norm of a centered column is expanded as
    /// `||X_j||^2 - 2 * offset_j * 1^T X_j + n_samples * offset_j^2` so that
    /// the sparse matrix is never densified.
    pub fn initialize<DM, T>(&mut self, dataset: &DatasetBase<DM, T>)
    where
        DM: DesignMatrix<Elem = F>,
        T: AsSingleTargets<Elem = F>,
    {
        let n_samples = F::cast(dataset.n_samples());
        let n_features = dataset.n_features();
        let X = dataset.design_matrix();
        let y = dataset.targets().as_single_target();

        self.centered = X.is_centered();
        self.norm_y2 = y.dot(&y);
        self.column_sums = match self.centered {
            true => Array1::from_iter((0..n_features).map(|j| X.column_sum(j))),
            false => Array1::<F>::zeros(n_features),
        };

        let sq_norms = Array1::from_iter((0..n_features).map(|j| {
            let nrm2 = X.column_squared_norm(j);
            match self.centered {
                true => {
                    let offset = X.offset(j);
                    let centered_nrm2 = nrm2 - F::cast(2.) * offset * self.column_sums[j]
                        + n_samples * offset * offset;
                    centered_nrm2.max(F::zero())
                }
                false => nrm2,
            }
        }));

        self.norms = sq_norms.mapv(|nrm2| nrm2.sqrt());
        self.lipschitz = sq_norms / n_samples;
    }

    /// This method computes the gradient of the datafit with respect to
    /// coordinate j, `-X_j^T R / n_samples`, given the current residual and
    /// its sum (only read for centered design matrices).
    pub fn gradient_j<DM, T>(
        &self,
        dataset: &DatasetBase<DM, T>,
        R: ArrayView1<F>,
        R_sum: F,
        j: usize,
    ) -> F
    where
        DM: DesignMatrix<Elem = F>,
        T: AsSingleTargets<Elem = F>,
    {
        let n_samples = F::cast(dataset.n_samples());
        let X = dataset.design_matrix();
        let XjTR = match self.centered {
            true => X.centered_column_dot(j, R, R_sum),
            false => X.column_dot(j, R),
        };
        -XjTR / n_samples
    }

    /// This method updates the residual in place after a change `diff` of
    /// the weight of feature j and returns the matching change of the sum
    /// of the residual.
    pub fn update_residual<DM, T>(
        &self,
        dataset: &DatasetBase<DM, T>,
        R: &mut Array1<F>,
        diff: F,
        j: usize,
    ) -> F
    where
        DM: DesignMatrix<Elem = F>,
        T: AsSingleTargets<Elem = F>,
    {
        let X = dataset.design_matrix();
        X.update_residual(R, diff, j);
        match self.centered {
            true => {
                let offset = X.offset(j);
                if offset != F::zero() {
                    R.mapv_inplace(|ri| ri + diff * offset);
                }
                -diff * (self.column_sums[j] - F::cast(dataset.n_samples()) * offset)
            }
            false => F::zero(),
        }
    }

    /// Getter for the Lipschitz constants
    pub fn lipschitz(&self) -> ArrayView1<F> {
        self.lipschitz.view()
    }

    /// Getter for the norms of the (possibly centered) columns
    pub fn norms(&self) -> ArrayView1<F> {
        self.norms.view()
    }

    pub fn norm_y2(&self) -> F {
        self.norm_y2
    }

    pub fn is_centered(&self) -> bool {
        self.centered
    }
}
