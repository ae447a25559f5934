use log::{info, warn};
use ndarray::{Array1, ArrayView1};
use std::time::Instant;

use crate::cd::inner_solver;
use crate::datafits::Quadratic;
use crate::datasets::{AsSingleTargets, DatasetBase, DesignMatrix};
use crate::dual::{create_dual_point, dual_objective, primal_objective, rescale_dual_point};
use crate::penalties::L1;
use crate::screening::{compute_priorities, safe_screening};
use crate::solver::Solver;
use crate::working_set::{select_working_set, Geometric, GrowthPolicy, Prune};
use crate::Float;


/// Result of a Celer solve.
#[derive(Debug, Clone, PartialEq)]
pub struct CelerOutput<F> {
    /// Last primal iterate.
    pub w: Array1<F>,
    /// Feasible dual point achieving the highest dual objective.
    pub theta: Array1<F>,
    /// Duality gap computed at the beginning of every outer iteration.
    pub gaps: Vec<F>,
    /// Elapsed time in seconds when each gap was computed.
    pub times: Vec<f64>,
    /// Size of every working set, when requested.
    pub ws_sizes: Option<Vec<usize>>,
    /// Number of epochs of every subproblem.
    pub inner_epochs: Vec<usize>,
    pub n_iter: usize,
    pub converged: bool,
}

/// This function solves the Lasso with the Celer algorithm, starting from
/// `w_init`. The growth policy of the working set is [`Prune`] or
/// [`Geometric`] depending on the `prune` option of the solver.
pub fn celer<F, DM, T>(
    dataset: &DatasetBase<DM, T>,
    alpha: F,
    w_init: ArrayView1<F>,
    solver: &Solver<F>,
) -> CelerOutput<F>
where
    F: Float,
    DM: DesignMatrix<Elem = F>,
    T: AsSingleTargets<Elem = F>,
{
    match solver.prune {
        true => celer_with_policy(dataset, alpha, w_init, solver, &Prune),
        false => celer_with_policy(dataset, alpha, w_init, solver, &Geometric),
    }
}

/// This is the outer loop of the Celer algorithm.
///
/// At every outer iteration, a dual point is built from the residual and
/// compared with the best dual point found by the last subproblem, both
/// being rescaled to be feasible for the full problem. The duality gap
/// against the highest dual objective seen so far is recorded and the loop
/// stops once it goes below the tolerance.
///
/// Otherwise, the features are ranked by their distance to the boundary of
/// the dual feasible set (see [`compute_priorities`]), optionally after a
/// Gap Safe screening, and the growth policy decides the size of the next
/// working set and the tolerance of the subproblem. The subproblem
/// restricted to the working set is then solved by [`inner_solver`].
///
/// Reaching `max_iterations` is not an error: the last iterate is returned
/// with `converged` set to false.
pub fn celer_with_policy<F, DM, T, GP>(
    dataset: &DatasetBase<DM, T>,
    alpha: F,
    w_init: ArrayView1<F>,
    solver: &Solver<F>,
    policy: &GP,
) -> CelerOutput<F>
where
    F: Float,
    DM: DesignMatrix<Elem = F>,
    T: AsSingleTargets<Elem = F>,
    GP: GrowthPolicy<F>,
{
    let start = Instant::now();

    let n_samples = dataset.n_samples();
    let n_features = dataset.n_features();
    let X = dataset.design_matrix();
    let y = dataset.targets().as_single_target();

    let mut datafit = Quadratic::new();
    datafit.initialize(dataset);
    let penalty = L1::new(alpha);
    let norms = datafit.norms();
    let norm_y2 = datafit.norm_y2();

    // Null columns are discarded once and for all, their weights only
    // contribute to the penalty
    let mut w = w_init.to_owned();
    let mut screened = vec![false; n_features];
    let mut n_screened = 0;
    for j in 0..n_features {
        if norms[j] == F::zero() {
            w[j] = F::zero();
            screened[j] = true;
            n_screened += 1;
        }
    }
    let mut R = dataset.residual(w.view());

    let all_feats = Array1::from_iter(0..n_features);
    let mut theta = Array1::<F>::zeros(n_samples);
    let mut theta_inner = Array1::<F>::zeros(n_samples);
    let mut Xt_theta = Array1::<F>::zeros(n_features);
    let mut Xt_theta_scratch = Array1::<F>::zeros(n_features);

    let mut ws = Array1::<usize>::zeros(0);

    let mut highest_d_obj = F::neg_infinity();
    let mut gaps = Vec::with_capacity(solver.max_iterations);
    let mut times = Vec::with_capacity(solver.max_iterations);
    let mut ws_sizes = match solver.return_ws_sizes {
        true => Some(Vec::with_capacity(solver.max_iterations)),
        false => None,
    };
    let mut inner_epochs = Vec::with_capacity(solver.max_iterations);
    let mut n_iter = 0;
    let mut converged = false;

    for t in 0..solver.max_iterations {
        if t > 0 {
            R = dataset.residual(w.view());
        }

        let mut theta_res = create_dual_point(R.view(), alpha, n_samples);
        rescale_dual_point(X, &mut theta_res, all_feats.view(), &mut Xt_theta_scratch);
        let d_obj = dual_objective(y, theta_res.view(), alpha, norm_y2);
        if d_obj > highest_d_obj {
            highest_d_obj = d_obj;
            theta.assign(&theta_res);
            Xt_theta.assign(&Xt_theta_scratch);
        }

        if t > 0 {
            rescale_dual_point(X, &mut theta_inner, all_feats.view(), &mut Xt_theta_scratch);
            let d_obj_inner = dual_objective(y, theta_inner.view(), alpha, norm_y2);
            if d_obj_inner > highest_d_obj {
                highest_d_obj = d_obj_inner;
                theta.assign(&theta_inner);
                Xt_theta.assign(&Xt_theta_scratch);
            }
        }

        let p_obj = primal_objective(&penalty, R.view(), w.view());
        let gap = p_obj - highest_d_obj;
        gaps.push(gap);
        times.push(start.elapsed().as_secs_f64());
        n_iter = t + 1;

        if solver.verbose {
            info!("Iter {}: primal {:.10}, gap {:.2e}", t, p_obj, gap);
        }

        if gap < solver.tolerance {
            if solver.verbose {
                info!("Early exit, gap: {:.2e} < {:.2e}", gap, solver.tolerance);
            }
            converged = true;
            break;
        }

        if solver.screening {
            n_screened += safe_screening(
                Xt_theta.view(),
                norms,
                w.view(),
                gap,
                alpha,
                n_samples,
                &mut screened,
            );
        }

        let mut prios = compute_priorities(Xt_theta.view(), norms, w.view(), &screened);
        let n_active = w.iter().filter(|&&w_j| w_j != F::zero()).count();

        let ws_size = policy
            .next_ws_size(t, solver.p0, n_active, ws.view(), &mut prios)
            .min(n_features - n_screened);

        if ws_size == 0 {
            // Every weight is provably null at the optimum
            if solver.verbose {
                info!("All {} features screened", n_screened);
            }
            converged = true;
            break;
        }

        ws = select_working_set(prios.view(), ws_size);
        if let Some(sizes) = ws_sizes.as_mut() {
            sizes.push(ws_size);
        }

        let eps = policy.inner_tolerance(gap, solver.tolerance, solver.tol_ratio_inner);
        if solver.verbose {
            info!(
                "{} features in subproblem ({} screened), inner tolerance {:.2e}",
                ws_size, n_screened, eps
            );
        }

        let outcome = inner_solver(
            dataset,
            &datafit,
            &penalty,
            &mut w,
            &mut R,
            &mut theta_inner,
            ws.view(),
            eps,
            highest_d_obj,
            solver,
        );
        inner_epochs.push(outcome.n_epochs);
    }

    if !converged {
        warn!(
            "Objective did not converge after {} iterations, duality gap: {:.2e}, tolerance: {:.2e}",
            n_iter,
            gaps.last().copied().unwrap_or_else(F::infinity),
            solver.tolerance
        );
    }

    CelerOutput {
        w,
        theta,
        gaps,
        times,
        ws_sizes,
        inner_epochs,
        n_iter,
        converged,
    }
}
