use ndarray::{Array1, ArrayView1};
use std::cmp::Ordering;

use crate::helpers::helpers::argpartition_by;
use crate::Float;


/// This trait describes how the working set grows from one outer iteration
/// to the next, and how precisely the subproblem restricted to the working
/// set is solved.
pub trait GrowthPolicy<F: Float> {
    /// This method returns the size of the next working set. It is called
    /// after the priorities have been computed and may lower some of them to
    /// -1 to force features to stay in the working set.
    ///
    /// `t` is the index of the outer iteration, `n_active` the number of
    /// non-null weights and `previous_ws` the working set of the previous
    /// outer iteration.
    fn next_ws_size(
        &self,
        t: usize,
        p0: usize,
        n_active: usize,
        previous_ws: ArrayView1<usize>,
        priorities: &mut Array1<F>,
    ) -> usize;

    /// This method returns the tolerance on the duality gap of the subproblem.
    fn inner_tolerance(&self, gap: F, tolerance: F, tol_ratio_inner: F) -> F;
}

/// Pruning growth policy
///
/// The working set is twice as large as the support of the current
/// iterate, so features that left the support are pruned away. The
/// subproblems are solved up to a fraction of the current duality gap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Prune;

impl<F: Float> GrowthPolicy<F> for Prune {
    fn next_ws_size(
        &self,
        t: usize,
        p0: usize,
        n_active: usize,
        _previous_ws: ArrayView1<usize>,
        _priorities: &mut Array1<F>,
    ) -> usize {
        match t {
            0 => usize::max(p0, n_active),
            _ => usize::max(2 * n_active, 1),
        }
    }

    fn inner_tolerance(&self, gap: F, _tolerance: F, tol_ratio_inner: F) -> F {
        tol_ratio_inner * gap
    }
}

/// Geometric growth policy
///
/// The working set doubles at each outer iteration and always contains the
/// previous one. The subproblems are solved up to the global tolerance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Geometric;

impl<F: Float> GrowthPolicy<F> for Geometric {
    fn next_ws_size(
        &self,
        t: usize,
        p0: usize,
        n_active: usize,
        previous_ws: ArrayView1<usize>,
        priorities: &mut Array1<F>,
    ) -> usize {
        if t == 0 {
            return usize::max(p0, n_active);
        }
        for &j in previous_ws {
            if priorities[j].is_finite() {
                priorities[j] = -F::one();
            }
        }
        usize::max(2 * previous_ws.len(), n_active)
    }

    fn inner_tolerance(&self, _gap: F, tolerance: F, _tol_ratio_inner: F) -> F {
        tolerance
    }
}

/// This function selects the `ws_size` features with the lowest priorities.
/// The selection is a partial sort, ties are broken arbitrarily. The returned
/// working set is sorted by feature index so that the coordinate descent
/// cycles through the columns in storage order. When all features are
/// requested the selection is skipped.
pub fn select_working_set<F: Float>(priorities: ArrayView1<F>, ws_size: usize) -> Array1<usize> {
    let n_features = priorities.len();
    if ws_size >= n_features {
        return Array1::from_iter(0..n_features);
    }
    let mut ws = argpartition_by(&priorities, ws_size, |a, b| {
        a.partial_cmp(b).unwrap_or(Ordering::Equal)
    });
    ws.sort_unstable();
    Array1::from_vec(ws)
}
