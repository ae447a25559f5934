use log::{debug, warn};
use ndarray::{Array1, ArrayView1};

use crate::datafits::Quadratic;
use crate::datasets::{AsSingleTargets, DatasetBase, DesignMatrix};
use crate::dual::{create_dual_point, dual_objective, primal_objective, rescale_dual_point};
use crate::extrapolation::ResidualWindow;
use crate::penalties::L1;
use crate::solver::Solver;
use crate::Float;


/// Report of a call to [`inner_solver`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InnerOutcome<F> {
    /// Number of epochs performed before the gap check stopped the descent
    /// (`max_epochs` if it never did).
    pub n_epochs: usize,
    /// Last duality gap computed on the subproblem.
    pub gap: F,
    pub converged: bool,
}

/// This function performs one cyclic pass of coordinate descent over the
/// features of the working set. Features with a null column norm are skipped.
///
/// The residual `R = y - Xw` is updated in place after every coordinate
/// update and so is its sum `R_sum` when the design matrix is centered.
pub fn cd_epoch<F, DM, T>(
    dataset: &DatasetBase<DM, T>,
    datafit: &Quadratic<F>,
    penalty: &L1<F>,
    w: &mut Array1<F>,
    R: &mut Array1<F>,
    R_sum: &mut F,
    ws: ArrayView1<usize>,
) where
    F: Float,
    DM: DesignMatrix<Elem = F>,
    T: AsSingleTargets<Elem = F>,
{
    let lipschitz = datafit.lipschitz();

    for &j in ws {
        if lipschitz[j] == F::zero() {
            continue;
        }
        let old_w_j = w[j];
        let grad_j = datafit.gradient_j(dataset, R.view(), *R_sum, j);
        w[j] = penalty.prox(old_w_j - grad_j / lipschitz[j], F::one() / lipschitz[j]);

        let diff = w[j] - old_w_j;
        if diff != F::zero() {
            *R_sum += datafit.update_residual(dataset, R, diff, j);
        }
    }
}

/// This function solves the Lasso restricted to the working set `ws` with
/// cyclic coordinate descent, until the duality gap of the subproblem goes
/// below `eps` or `max_epochs` epochs have been performed.
///
/// Every `gap_freq` epochs (but not at the very first one), a dual point is
/// built from the residual and rescaled to be feasible for the subproblem.
/// When acceleration is enabled, the residual is also stored in a sliding
/// window of size `K` and an extrapolated dual point is built from it; the
/// best of the two points is kept. The gap is computed against the running
/// maximum of the dual objective, seeded with `d_obj_lower_bound`: any dual
/// objective of the full problem bounds the subproblem from below, since its
/// dual points are feasible on every feature. The dual point improving on
/// this maximum is written into `theta_inner`, which is left untouched when
/// none does.
///
/// The weights outside of the working set are expected to be null, so that
/// the primal objective computed with the full `w` is the one of the
/// subproblem.
pub fn inner_solver<F, DM, T>(
    dataset: &DatasetBase<DM, T>,
    datafit: &Quadratic<F>,
    penalty: &L1<F>,
    w: &mut Array1<F>,
    R: &mut Array1<F>,
    theta_inner: &mut Array1<F>,
    ws: ArrayView1<usize>,
    eps: F,
    d_obj_lower_bound: F,
    solver: &Solver<F>,
) -> InnerOutcome<F>
where
    F: Float,
    DM: DesignMatrix<Elem = F>,
    T: AsSingleTargets<Elem = F>,
{
    let n_samples = dataset.n_samples();
    let n_features = dataset.n_features();
    let X = dataset.design_matrix();
    let y = dataset.targets().as_single_target();
    let alpha = penalty.alpha();
    let centered = datafit.is_centered();

    let mut window = match solver.use_acceleration {
        true => Some(ResidualWindow::<F>::new(solver.K, n_samples)),
        false => None,
    };
    let mut Xt_theta = Array1::<F>::zeros(n_features);
    let mut R_sum = if centered { R.sum() } else { F::zero() };

    let mut highest_d_obj = d_obj_lower_bound;
    let mut gap = F::infinity();

    for epoch in 0..solver.max_epochs {
        if epoch > 0 && epoch % solver.gap_freq == 0 {
            if centered {
                R_sum = R.sum();
            }

            let mut theta = create_dual_point(R.view(), alpha, n_samples);
            rescale_dual_point(X, &mut theta, ws, &mut Xt_theta);
            let mut d_obj = dual_objective(y, theta.view(), alpha, datafit.norm_y2());

            if let Some(window) = window.as_mut() {
                window.push(R.view());
                if let Some(R_acc) = window.extrapolate() {
                    let mut theta_acc = create_dual_point(R_acc.view(), alpha, n_samples);
                    rescale_dual_point(X, &mut theta_acc, ws, &mut Xt_theta);
                    let d_obj_acc = dual_objective(y, theta_acc.view(), alpha, datafit.norm_y2());
                    if d_obj_acc > d_obj {
                        theta = theta_acc;
                        d_obj = d_obj_acc;
                    }
                }
            }

            if d_obj > highest_d_obj {
                highest_d_obj = d_obj;
                theta_inner.assign(&theta);
            }

            let p_obj = primal_objective(penalty, R.view(), w.view());
            gap = p_obj - highest_d_obj;

            if solver.verbose_inner {
                debug!(
                    "Inner epoch {}, primal {:.8}, dual {:.8}, gap: {:.2e}",
                    epoch, p_obj, highest_d_obj, gap
                );
            }

            if gap < eps {
                if solver.verbose_inner {
                    debug!("Inner: early exit at epoch {}, gap: {:.2e} < {:.2e}", epoch, gap, eps);
                }
                return InnerOutcome {
                    n_epochs: epoch,
                    gap,
                    converged: true,
                };
            }
        }

        cd_epoch(dataset, datafit, penalty, w, R, &mut R_sum, ws);
    }

    if solver.verbose_inner {
        warn!(
            "Inner solver did not converge after {} epochs, gap: {:.2e}, tolerance: {:.2e}",
            solver.max_epochs, gap, eps
        );
    }

    InnerOutcome {
        n_epochs: solver.max_epochs,
        gap,
        converged: false,
    }
}
