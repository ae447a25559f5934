use ndarray::{Array1, ArrayView1};

use crate::datasets::DesignMatrix;
use crate::penalties::L1;
use crate::Float;


/// This function builds the dual point associated to a residual vector,
/// `theta = R / (alpha * n_samples)`. The returned point is not necessarily
/// feasible: it must go through [`rescale_dual_point`] first.
pub fn create_dual_point<F: Float>(R: ArrayView1<F>, alpha: F, n_samples: usize) -> Array1<F> {
    let scale = alpha * F::cast(n_samples);
    R.mapv(|ri| ri / scale)
}

/// This function computes `X_j^T theta - offset_j * sum(theta)` for every
/// feature j of the subset `ws` and stores it in `Xt_theta`. Entries outside
/// of `ws` are left untouched.
pub fn compute_Xt_theta<F, DM>(
    X: &DM,
    theta: ArrayView1<F>,
    ws: ArrayView1<usize>,
    Xt_theta: &mut Array1<F>,
) where
    F: Float,
    DM: DesignMatrix<Elem = F>,
{
    let theta_sum = match X.is_centered() {
        true => theta.sum(),
        false => F::zero(),
    };
    for &j in ws {
        Xt_theta[j] = X.centered_column_dot(j, theta, theta_sum);
    }
}

/// This function computes the dual norm `max_{j in ws} |X_j^T theta|` of a
/// dual point restricted to the features in `ws`, and rescales the dual
/// point (and its correlations with the columns) so that it becomes
/// feasible, i.e. `|X_j^T theta| <= 1` for every j in `ws`. The dual point
/// is left unchanged if it is already feasible.
///
/// It returns the computed dual norm.
pub fn rescale_dual_point<F, DM>(
    X: &DM,
    theta: &mut Array1<F>,
    ws: ArrayView1<usize>,
    Xt_theta: &mut Array1<F>,
) -> F
where
    F: Float,
    DM: DesignMatrix<Elem = F>,
{
    compute_Xt_theta(X, theta.view(), ws, Xt_theta);
    let scal = ws
        .iter()
        .fold(F::zero(), |max_val, &j| max_val.max(Xt_theta[j].abs()));

    if scal > F::one() {
        theta.mapv_inplace(|theta_i| theta_i / scal);
        for &j in ws {
            Xt_theta[j] /= scal;
        }
    }
    scal
}

/// This function computes the value of the Lasso dual objective at a
/// feasible dual point:
///
/// ```ignore
/// D(theta) = ||y||^2 / (2 * n_samples)
///     - alpha^2 * n_samples / 2 * ||y / (alpha * n_samples) - theta||^2
/// ```
///
/// which equals `(||y||^2 - ||alpha * n_samples * theta - y||^2) / (2 * n_samples)`.
pub fn dual_objective<F: Float>(y: ArrayView1<F>, theta: ArrayView1<F>, alpha: F, norm_y2: F) -> F {
    let n_samples = F::cast(y.len());
    let alpha_n = alpha * n_samples;
    let dist = y
        .iter()
        .zip(theta)
        .fold(F::zero(), |acc, (&yi, &theta_i)| {
            let diff = yi / alpha_n - theta_i;
            acc + diff * diff
        });
    norm_y2 / (F::cast(2.) * n_samples) - F::cast(0.5) * alpha * alpha * n_samples * dist
}

/// This function computes the value of the Lasso primal objective
/// `alpha * ||w||_1 + ||R||^2 / (2 * n_samples)`.
pub fn primal_objective<F: Float>(penalty: &L1<F>, R: ArrayView1<F>, w: ArrayView1<F>) -> F {
    penalty.value(w) + R.dot(&R) / F::cast(2 * R.len())
}
