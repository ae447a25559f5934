use ndarray::{Array1, Array2, ArrayView1};

use crate::helpers::cholesky::solve_lin_sys_one_by_cholesky;
use crate::Float;

#[cfg(test)]
mod tests;

/// A sliding window over the last `K` residual vectors.
///
/// Snapshots live in a `K x n_samples` arena used as a ring buffer: logical
/// snapshot `k` (0 being the oldest) is stored in physical row
/// `(head + k) % K`. Pushing a new residual once the window is full
/// overwrites the oldest row and moves the head, so no row is ever copied.
#[derive(Debug, Clone, PartialEq)]
pub struct ResidualWindow<F: Float> {
    arena: Array2<F>,
    head: usize,
    len: usize,
}

impl<F: Float> ResidualWindow<F> {
    pub fn new(K: usize, n_samples: usize) -> Self {
        ResidualWindow {
            arena: Array2::<F>::zeros((K, n_samples)),
            head: 0,
            len: 0,
        }
    }

    /// Capacity of the window.
    pub fn K(&self) -> usize {
        self.arena.nrows()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.K()
    }

    /// Forgets every stored snapshot.
    pub fn clear(&mut self) {
        self.head = 0;
        self.len = 0;
    }

    /// Stores a residual as the most recent snapshot, evicting the oldest one
    /// when the window is full.
    pub fn push(&mut self, R: ArrayView1<F>) {
        let K = self.K();
        let row = match self.is_full() {
            true => {
                let row = self.head;
                self.head = (self.head + 1) % K;
                row
            }
            false => {
                self.len += 1;
                (self.head + self.len - 1) % K
            }
        };
        self.arena.row_mut(row).assign(&R);
    }

    /// Logical view of the k-th oldest snapshot.
    pub fn get(&self, k: usize) -> ArrayView1<F> {
        assert!(k < self.len, "snapshot {} out of {} stored", k, self.len);
        self.arena.row((self.head + k) % self.K())
    }

    /// This method computes the Anderson extrapolation of the stored residuals.
    ///
    /// Given the `K` snapshots `r_0, ..., r_{K-1}`, it builds the differences
    /// `U_k = r_{k+1} - r_k` and solves `(U U^T) z = 1`. The extrapolated
    /// residual is the affine combination `sum_k c_k r_{k+1}` with
    /// `c = z / sum(z)`, whose forward difference has minimal norm.
    ///
    /// Some extrapolation matrices are very ill-conditioned, which makes the
    /// solve fail or return non finite values. This is expected: the weights
    /// then fall back to `(0, ..., 0, 1)`, which is the latest snapshot.
    ///
    /// It returns `None` as long as the window is not full.
    ///
    /// Reference: `https://arxiv.org/abs/1907.05830`
    pub fn extrapolate(&self) -> Option<Array1<F>> {
        if !self.is_full() || self.K() < 2 {
            return None;
        }
        let K = self.K();
        let n_samples = self.arena.ncols();

        let mut U = Array2::<F>::zeros((K - 1, n_samples));
        for k in 0..(K - 1) {
            let diff = &self.get(k + 1) - &self.get(k);
            U.row_mut(k).assign(&diff);
        }
        let gram = U.dot(&U.t());

        let c = match solve_lin_sys_one_by_cholesky(&gram) {
            Ok(z) => {
                let z_sum = z.sum();
                if z_sum != F::zero() && z.iter().all(|&zk| zk.is_finite()) && z_sum.is_finite() {
                    Some(z / z_sum)
                } else {
                    None
                }
            }
            Err(_) => None,
        };
        let c = c.unwrap_or_else(|| {
            let mut c = Array1::<F>::zeros(K - 1);
            c[K - 2] = F::one();
            c
        });

        let mut R_acc = Array1::<F>::zeros(n_samples);
        for (k, &c_k) in c.iter().enumerate() {
            R_acc.scaled_add(c_k, &self.get(k + 1));
        }
        Some(R_acc)
    }
}
