use ndarray::ArrayView1;

use crate::helpers::prox::soft_thresholding;
use crate::Float;

#[cfg(test)]
mod tests;

/// The L1 penalty
///
/// A widely-used penalty made popular by the LASSO model. It is used in a
/// regression setting and yields sparse solutions. Note that LASSO yields a
/// biased solution compared to the ordinary least square solution.
#[derive(Debug, Clone, PartialEq)]
pub struct L1<F: Float> {
    alpha: F,
}

impl<F: Float> L1<F> {
    /// Instantiates a L1 penalty with a positive regularization hyperparameter.
    pub fn new(alpha: F) -> Self {
        L1 { alpha }
    }

    pub fn alpha(&self) -> F {
        self.alpha
    }

    /// Computes the L1-norm of the weights
    pub fn value(&self, w: ArrayView1<F>) -> F {
        self.alpha * w.iter().map(|&wj| wj.abs()).sum()
    }

    /// Applies the soft-thresholding operator to a weight scalar
    pub fn prox(&self, value: F, stepsize: F) -> F {
        soft_thresholding(value, self.alpha * stepsize)
    }
}
