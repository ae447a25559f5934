use super::{AsSingleTargets, DatasetBase, DesignMatrix};
use crate::Float;
use ndarray::{Array1, ArrayView1};

/// This implementation block provides a method for the creation of datasets
/// from any pair of design matrix and targets.
impl<DM: DesignMatrix, T: AsSingleTargets> From<(DM, T)> for DatasetBase<DM, T> {
    fn from(data: (DM, T)) -> Self {
        DatasetBase {
            design_matrix: data.0,
            targets: data.1,
        }
    }
}

/// This implementation block provides methods to get record and target objects
/// from the dataset.
impl<F: Float, DM: DesignMatrix<Elem = F>, T: AsSingleTargets<Elem = F>> DatasetBase<DM, T> {
    /// This method instantiates a new dataset from a design matrix and targets.
    pub fn new(design_matrix: DM, targets: T) -> DatasetBase<DM, T> {
        DatasetBase {
            design_matrix,
            targets,
        }
    }

    /// This method is a getter for the targets.
    pub fn targets(&self) -> &T {
        &self.targets
    }

    /// This method is a getter for the design matrix.
    pub fn design_matrix(&self) -> &DM {
        &self.design_matrix
    }

    pub fn n_samples(&self) -> usize {
        self.targets.n_samples()
    }

    pub fn n_features(&self) -> usize {
        self.design_matrix.n_features()
    }

    /// This method computes the residual `y - Xw` of the (possibly centered)
    /// design matrix from scratch.
    pub fn residual(&self, w: ArrayView1<F>) -> Array1<F> {
        let y = self.targets.as_single_target();
        let Xw = self
            .design_matrix
            .compute_centered_fit(w, self.n_samples());
        &y - &Xw
    }
}
