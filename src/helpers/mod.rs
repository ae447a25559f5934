
/// This module implements the proximal operator of the L1 penalty.
pub mod prox {
    use crate::Float;

    /// The soft-thresholding operator is the proximal operator used by
    /// [`crate::penalties::L1`].
    pub fn soft_thresholding<F: Float>(x: F, threshold: F) -> F {
        if x > threshold {
            x - threshold
        } else if x < -threshold {
            x + threshold
        } else {
            F::zero()
        }
    }
}

/// This module contains helper functions to compute the maximum regularization
/// hyperparameter for the Lasso, to center sparse matrices and to partially
/// sort arrays.
pub mod helpers {
    use crate::datasets::{AsSingleTargets, DatasetBase, DesignMatrix};
    use crate::Float;
    use ndarray::{Array1, ArrayBase, ArrayView1, Data, Ix1};
    use ndarray_stats::QuantileExt;
    use std::cmp::Ordering;

    /// This function computes the maximum regularization hyperparameter value
    /// `max_j |X_j^T y| / n_samples`. A regularization hyperparameter value
    /// larger than this maximum value yields a null solution. Offsets of a
    /// centered design matrix are taken into account.
    pub fn compute_alpha_max<F, DM, T>(dataset: &DatasetBase<DM, T>) -> F
    where
        F: Float,
        DM: DesignMatrix<Elem = F>,
        T: AsSingleTargets<Elem = F>,
    {
        let n_samples = dataset.n_samples();
        let X = dataset.design_matrix();
        let y = dataset.targets().as_single_target();
        let y_sum = y.sum();
        let Xty = Array1::from_iter(
            (0..X.n_features()).map(|j| X.centered_column_dot(j, y, y_sum).abs()),
        );
        match Xty.max() {
            Ok(&alpha_max) => alpha_max / F::cast(n_samples),
            Err(_) => F::zero(),
        }
    }

    /// This function builds the per-column offsets of a sparse design matrix
    /// that has been centered by `X_offset` and then scaled column-wise by
    /// `X_scale`, without densifying it. Columns with a null scale get a null
    /// offset.
    pub fn sparse_offsets<F: Float>(X_offset: ArrayView1<F>, X_scale: ArrayView1<F>) -> Array1<F> {
        Array1::from_iter(X_offset.iter().zip(X_scale).map(|(&offset, &scale)| {
            if scale == F::zero() {
                F::zero()
            } else {
                offset / scale
            }
        }))
    }

    /// This is a helper method that returns the indices of the `k` smallest
    /// elements of an array according to some `compare` closure, in no
    /// particular order. It relies on a partial selection rather than a full
    /// sort.
    pub fn argpartition_by<S, F>(arr: &ArrayBase<S, Ix1>, k: usize, mut compare: F) -> Vec<usize>
    where
        S: Data,
        F: FnMut(&S::Elem, &S::Elem) -> Ordering,
    {
        let mut indices: Vec<usize> = (0..arr.len()).collect();
        if k == 0 {
            return Vec::new();
        }
        if k < indices.len() {
            indices.select_nth_unstable_by(k - 1, |&i, &j| compare(&arr[i], &arr[j]));
            indices.truncate(k);
        }
        indices
    }
}

/// This module implements the solve of small symmetric positive definite
/// linear systems `A x = 1` through a Cholesky factorization. It is called by
/// the dual extrapolation to invert the Gram matrix of residual differences.
/// We made the choice not to use a LAPACK subroutine since the systems are
/// tiny and it would introduce a significantly larger bundle size.
pub mod cholesky {
    use crate::Float;
    use ndarray::{Array1, Array2, ArrayView2};
    use thiserror::Error;

    /// Error variants of the Cholesky based solver
    #[derive(Debug, Clone, PartialEq, Error)]
    pub enum CholeskyError {
        #[error("matrix is not square: {0}x{1}")]
        NotSquare(usize, usize),
        #[error("matrix is not positive definite (pivot {0})")]
        NotPositiveDefinite(usize),
        #[error("singular triangular system (diagonal entry {0})")]
        Singular(usize),
    }

    pub type Result<T> = std::result::Result<T, CholeskyError>;

    /// This function computes the lower triangular factor `L` of a symmetric
    /// positive definite matrix such that `A = L L^T`.
    pub fn cholesky_factorization<F: Float>(A: &Array2<F>) -> Result<Array2<F>> {
        let (n_rows, n_cols) = A.dim();
        if n_rows != n_cols {
            return Err(CholeskyError::NotSquare(n_rows, n_cols));
        }
        let mut L = Array2::<F>::zeros((n_rows, n_rows));
        for i in 0..n_rows {
            for j in 0..(i + 1) {
                let mut sum = A[[i, j]];
                for k in 0..j {
                    sum -= L[[i, k]] * L[[j, k]];
                }
                if i == j {
                    if !(sum > F::zero()) {
                        return Err(CholeskyError::NotPositiveDefinite(i));
                    }
                    L[[i, i]] = sum.sqrt();
                } else {
                    L[[i, j]] = sum / L[[j, j]];
                }
            }
        }
        Ok(L)
    }

    /// This function solves the lower triangular system `L x = 1` where `1`
    /// is the all-ones vector of size `size`.
    pub fn forward_substitution_one<F: Float>(L: &Array2<F>, size: usize) -> Result<Array1<F>> {
        let mut x = Array1::<F>::zeros(size);
        for i in 0..size {
            if L[[i, i]] == F::zero() {
                return Err(CholeskyError::Singular(i));
            }
            let mut sum = F::one();
            for k in 0..i {
                sum -= L[[i, k]] * x[k];
            }
            x[i] = sum / L[[i, i]];
        }
        Ok(x)
    }

    /// This function solves the upper triangular system `U x = b` in place.
    pub fn backward_substitution<F: Float>(U: ArrayView2<F>, b: &mut Array1<F>) -> Result<()> {
        let size = b.len();
        for i in (0..size).rev() {
            if U[[i, i]] == F::zero() {
                return Err(CholeskyError::Singular(i));
            }
            let mut sum = b[i];
            for k in (i + 1)..size {
                sum -= U[[i, k]] * b[k];
            }
            b[i] = sum / U[[i, i]];
        }
        Ok(())
    }

    /// This function solves `A x = 1` for a symmetric positive definite matrix
    /// `A` by chaining [`cholesky_factorization`], [`forward_substitution_one`]
    /// and [`backward_substitution`].
    pub fn solve_lin_sys_one_by_cholesky<F: Float>(A: &Array2<F>) -> Result<Array1<F>> {
        let L = cholesky_factorization(A)?;
        let mut z = forward_substitution_one(&L, A.nrows())?;
        backward_substitution(L.t(), &mut z)?;
        Ok(z)
    }
}

/// This module contains helpers functions to efficiently write tests.
pub mod test_helpers {
    use crate::Float;
    use approx::AbsDiffEq;
    use ndarray::prelude::*;
    use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use rand_distr::{Distribution, Normal};

    pub fn assert_array_all_close<F>(x: ArrayView1<F>, y: ArrayView1<F>, delta: F)
    where
        F: Float + AbsDiffEq<Epsilon = F>,
    {
        assert_eq!(x.len(), y.len());
        for i in 0..x.len() {
            if x[i].abs_diff_ne(&y[i], delta) {
                panic!("x: {}, y: {} ; with precision level {}", x[i], y[i], delta);
            }
        }
    }

    pub fn fill_random_vector(capacity: usize, seed: u64) -> Vec<f64> {
        let mut r = StdRng::seed_from_u64(seed);
        let normal = Normal::new(0., 1.).unwrap();

        let mut data_x: Vec<f64> = Vec::with_capacity(capacity);
        for _ in 0..data_x.capacity() {
            data_x.push(normal.sample(&mut r));
        }
        data_x
    }

    /// Generates a dense regression problem `y = X w + noise` with a standard
    /// normal design.
    pub fn generate_random_data(n_samples: usize, n_features: usize) -> (Array2<f64>, Array1<f64>) {
        let data_x = fill_random_vector(n_samples * n_features, 42);
        let data_w = fill_random_vector(n_features, 43);
        let data_e = fill_random_vector(n_samples, 44);
        let X = Array2::from_shape_vec((n_samples, n_features).f(), data_x).unwrap();
        let true_w = Array1::from_shape_vec(n_features, data_w).unwrap();
        let noise = Array1::from_shape_vec(n_samples, data_e).unwrap();
        let y = X.dot(&true_w) + noise;

        (X, y)
    }

    /// Generates a regression problem whose design matrix keeps each entry
    /// with probability `density`. The matrix is returned dense so that it
    /// can be compared against its CSC counterpart built by [`dense_to_csc`].
    pub fn generate_random_sparse_data(
        n_samples: usize,
        n_features: usize,
        density: f64,
    ) -> (Array2<f64>, Array1<f64>) {
        let (mut X, _) = generate_random_data(n_samples, n_features);
        let mut r = StdRng::seed_from_u64(45);
        X.mapv_inplace(|x| if r.gen::<f64>() < density { x } else { 0. });
        let data_w = fill_random_vector(n_features, 46);
        let data_e = fill_random_vector(n_samples, 47);
        let true_w = Array1::from_shape_vec(n_features, data_w).unwrap();
        let noise = Array1::from_shape_vec(n_samples, data_e).unwrap();
        let y = X.dot(&true_w) + noise;

        (X, y)
    }

    /// Converts a dense matrix into the `(data, indices, indptr)` triplet of
    /// the CSC format.
    pub fn dense_to_csc<F: Float>(X: ArrayView2<F>) -> (Array1<F>, Array1<i32>, Array1<i32>) {
        let mut data = Vec::new();
        let mut indices = Vec::new();
        let mut indptr = vec![0i32];
        for Xj in X.columns() {
            for (i, &x_ij) in Xj.iter().enumerate() {
                if x_ij != F::zero() {
                    data.push(x_ij);
                    indices.push(i as i32);
                }
            }
            indptr.push(data.len() as i32);
        }
        (
            Array1::from_vec(data),
            Array1::from_vec(indices),
            Array1::from_vec(indptr),
        )
    }
}
