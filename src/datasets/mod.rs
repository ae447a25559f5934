use ndarray::{Array1, ArrayView1};
use num_traits::Zero;

use crate::Float;

pub mod csc_array;
mod impl_datasets;
mod impl_design_matrix;
mod impl_targets;

#[cfg(test)]
mod tests;

/// A dataset is the combination of a design matrix and a target vector. The
/// design matrix is either a dense [`ndarray::Array2`] or a sparse
/// [`csc_array::CSCArray`].
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetBase<DM, T>
where
    DM: DesignMatrix,
    T: AsSingleTargets,
{
    pub design_matrix: DM,
    pub targets: T,
}

/// This trait provides the column-wise primitives the Lasso solver needs on
/// a design matrix. Columns can be logically centered by a vector of offsets
/// without breaking the sparsity of the matrix: every method suffixed with
/// `centered` returns the quantity for `X_j - offset_j * 1`.
pub trait DesignMatrix: Sized {
    type Elem: Float;

    /// Number of columns of the design matrix.
    fn n_features(&self) -> usize;

    /// Per-column offsets used to center the matrix, if any.
    fn offsets(&self) -> Option<ArrayView1<Self::Elem>>;

    /// Computes `X_j^T v`.
    fn column_dot(&self, j: usize, v: ArrayView1<Self::Elem>) -> Self::Elem;

    /// Computes `1^T X_j`.
    fn column_sum(&self, j: usize) -> Self::Elem;

    /// Computes `||X_j||^2`.
    fn column_squared_norm(&self, j: usize) -> Self::Elem;

    /// Subtracts `diff * X_j` from the residual vector `R`.
    fn update_residual(&self, R: &mut Array1<Self::Elem>, diff: Self::Elem, j: usize);

    /// Computes the uncentered model fit `Xw`.
    fn compute_fit(&self, w: ArrayView1<Self::Elem>, n_samples: usize) -> Array1<Self::Elem>;

    /// Checks that the matrix is well formed with `n_samples` rows.
    fn is_consistent(&self, n_samples: usize) -> bool;

    /// Whether any column offset is non-zero.
    fn is_centered(&self) -> bool {
        match self.offsets() {
            Some(offsets) => offsets.iter().any(|&o| o != Self::Elem::zero()),
            None => false,
        }
    }

    /// Offset of column `j`, zero when the matrix is not centered.
    fn offset(&self, j: usize) -> Self::Elem {
        match self.offsets() {
            Some(offsets) => offsets[j],
            None => Self::Elem::zero(),
        }
    }

    /// Computes `X_j^T v - offset_j * sum(v)` given the precomputed sum of `v`.
    fn centered_column_dot(
        &self,
        j: usize,
        v: ArrayView1<Self::Elem>,
        v_sum: Self::Elem,
    ) -> Self::Elem {
        self.column_dot(j, v) - self.offset(j) * v_sum
    }

    /// Computes the centered model fit `Xw - (offset^T w) * 1`.
    fn compute_centered_fit(
        &self,
        w: ArrayView1<Self::Elem>,
        n_samples: usize,
    ) -> Array1<Self::Elem> {
        let mut Xw = self.compute_fit(w, n_samples);
        if let Some(offsets) = self.offsets() {
            let shift = offsets.dot(&w);
            if shift != Self::Elem::zero() {
                Xw.mapv_inplace(|xi| xi - shift);
            }
        }
        Xw
    }
}

/// This trait gives access to a single-task target vector.
pub trait AsSingleTargets {
    type Elem: Float;

    fn n_samples(&self) -> usize;

    fn as_single_target(&self) -> ArrayView1<Self::Elem>;
}
