use ndarray::{Array1, ArrayView1};

use crate::Float;

#[cfg(test)]
mod tests;

/// This function ranks the features to build the next working set. The
/// priority of feature j is its distance to the boundary of the dual
/// feasible set, normalized by the column norm:
///
/// ```ignore
/// priority[j] = |1 - |X_j^T theta|| / ||X_j||
/// ```
///
/// A small priority means that feature j is likely to be active at the
/// optimum (KKT conditions of the Lasso). Features with a null column norm or
/// discarded by [`safe_screening`] get an infinite priority so that they are
/// selected last. Features whose weights are non-null get a priority of -1
/// so that they always remain in the working set.
pub fn compute_priorities<F: Float>(
    Xt_theta: ArrayView1<F>,
    norms: ArrayView1<F>,
    w: ArrayView1<F>,
    screened: &[bool],
) -> Array1<F> {
    Array1::from_iter((0..w.len()).map(|j| {
        if norms[j] == F::zero() || screened[j] {
            F::infinity()
        } else if w[j] != F::zero() {
            -F::one()
        } else {
            (F::one() - Xt_theta[j].abs()).abs() / norms[j]
        }
    }))
}

/// This function discards features using the Gap Safe sphere test. The dual
/// objective being `alpha^2 * n_samples`-strongly concave, the optimal dual
/// point lies in the ball centered at the feasible point theta with radius
/// `sqrt(2 * gap / n_samples) / alpha`. A feature j with
///
/// ```ignore
/// (1 - |X_j^T theta|) / ||X_j|| > radius
/// ```
///
/// satisfies `|X_j^T theta_opt| < 1` and its weight is null at the optimum.
/// Its weight must already be null to be discarded. Screened features stay
/// screened for the remainder of the solve.
///
/// It returns the number of newly screened features.
pub fn safe_screening<F: Float>(
    Xt_theta: ArrayView1<F>,
    norms: ArrayView1<F>,
    w: ArrayView1<F>,
    gap: F,
    alpha: F,
    n_samples: usize,
    screened: &mut [bool],
) -> usize {
    let radius = (F::cast(2.) * gap.max(F::zero()) / F::cast(n_samples)).sqrt() / alpha;
    let mut n_screened = 0;
    for j in 0..w.len() {
        if screened[j] || norms[j] == F::zero() || w[j] != F::zero() {
            continue;
        }
        if (F::one() - Xt_theta[j].abs()) / norms[j] > radius {
            screened[j] = true;
            n_screened += 1;
        }
    }
    n_screened
}
