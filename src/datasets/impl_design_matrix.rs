use super::{csc_array::CSCArray, DesignMatrix};
use crate::Float;
use ndarray::{s, Array1, ArrayBase, ArrayView1, Axis, Data, Ix2};

/// This implements the [`DesignMatrix`] trait for dense matrices. Dense
/// matrices are expected to be centered by the caller, hence no offsets.
impl<F: Float, S: Data<Elem = F>> DesignMatrix for ArrayBase<S, Ix2> {
    type Elem = F;

    fn n_features(&self) -> usize {
        self.len_of(Axis(1))
    }

    fn offsets(&self) -> Option<ArrayView1<F>> {
        None
    }

    fn column_dot(&self, j: usize, v: ArrayView1<F>) -> F {
        self.slice(s![.., j]).dot(&v)
    }

    fn column_sum(&self, j: usize) -> F {
        self.slice(s![.., j]).sum()
    }

    fn column_squared_norm(&self, j: usize) -> F {
        let Xj = self.slice(s![.., j]);
        Xj.dot(&Xj)
    }

    fn update_residual(&self, R: &mut Array1<F>, diff: F, j: usize) {
        R.scaled_add(-diff, &self.slice(s![.., j]));
    }

    fn compute_fit(&self, w: ArrayView1<F>, _n_samples: usize) -> Array1<F> {
        self.dot(&w)
    }

    fn is_consistent(&self, n_samples: usize) -> bool {
        self.nrows() == n_samples
    }
}

/// This implements the [`DesignMatrix`] trait for sparse matrices.
impl<F: Float> DesignMatrix for CSCArray<'_, F> {
    type Elem = F;

    fn n_features(&self) -> usize {
        self.indptr.len() - 1
    }

    fn offsets(&self) -> Option<ArrayView1<F>> {
        self.X_offset.as_ref().map(|offsets| offsets.view())
    }

    fn column_dot(&self, j: usize, v: ArrayView1<F>) -> F {
        self.column(j)
            .fold(F::zero(), |acc, (i, &x_ij)| acc + x_ij * v[i])
    }

    fn column_sum(&self, j: usize) -> F {
        self.column(j).map(|(_, &x_ij)| x_ij).sum()
    }

    fn column_squared_norm(&self, j: usize) -> F {
        self.column(j).map(|(_, &x_ij)| x_ij * x_ij).sum()
    }

    fn update_residual(&self, R: &mut Array1<F>, diff: F, j: usize) {
        for (i, &x_ij) in self.column(j) {
            R[i] -= diff * x_ij;
        }
    }

    fn compute_fit(&self, w: ArrayView1<F>, n_samples: usize) -> Array1<F> {
        let mut Xw = Array1::<F>::zeros(n_samples);
        for j in 0..self.n_features() {
            if w[j] == F::zero() {
                continue;
            }
            for (i, &x_ij) in self.column(j) {
                Xw[i] += x_ij * w[j];
            }
        }
        Xw
    }

    fn is_consistent(&self, n_samples: usize) -> bool {
        let nnz = self.data.len();
        if self.indptr.is_empty() || self.indices.len() != nnz {
            return false;
        }
        if self.indptr[0] != 0 || self.indptr[self.indptr.len() - 1] as usize != nnz {
            return false;
        }
        if self.indptr.windows(2).into_iter().any(|pair| pair[0] > pair[1]) {
            return false;
        }
        if self.indices.iter().any(|&i| i < 0 || i as usize >= n_samples) {
            return false;
        }
        match &self.X_offset {
            Some(offsets) => offsets.len() == self.n_features(),
            None => true,
        }
    }
}

/// This implements the [`DesignMatrix`] trait for references.
impl<DM: DesignMatrix> DesignMatrix for &DM {
    type Elem = DM::Elem;

    fn n_features(&self) -> usize {
        (*self).n_features()
    }

    fn offsets(&self) -> Option<ArrayView1<Self::Elem>> {
        (*self).offsets()
    }

    fn column_dot(&self, j: usize, v: ArrayView1<Self::Elem>) -> Self::Elem {
        (*self).column_dot(j, v)
    }

    fn column_sum(&self, j: usize) -> Self::Elem {
        (*self).column_sum(j)
    }

    fn column_squared_norm(&self, j: usize) -> Self::Elem {
        (*self).column_squared_norm(j)
    }

    fn update_residual(&self, R: &mut Array1<Self::Elem>, diff: Self::Elem, j: usize) {
        (*self).update_residual(R, diff, j);
    }

    fn compute_fit(&self, w: ArrayView1<Self::Elem>, n_samples: usize) -> Array1<Self::Elem> {
        (*self).compute_fit(w, n_samples)
    }

    fn is_consistent(&self, n_samples: usize) -> bool {
        (*self).is_consistent(n_samples)
    }
}
