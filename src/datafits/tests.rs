use ndarray::{array, Array1, Axis};

use crate::datafits::Quadratic;
use crate::datasets::{csc_array::CSCArray, DatasetBase};
use crate::helpers::test_helpers::*;

#[test]
fn test_initialization() {
    let X = array![[3.4, 2.1, 2.3], [3.4, -1.2, 0.2]];
    let y = array![-3.4, 2.1];
    let dataset = DatasetBase::from((X, y));

    let mut datafit = Quadratic::new();
    datafit.initialize(&dataset);

    let true_lipschitz = array![11.56, 2.925, 2.665];
    assert_array_all_close(datafit.lipschitz(), true_lipschitz.view(), 1e-8);
    assert_array_all_close(
        datafit.norms(),
        true_lipschitz.mapv(|l: f64| (2. * l).sqrt()).view(),
        1e-8,
    );
    assert!((datafit.norm_y2() - 15.97).abs() < 1e-12);
    assert!(!datafit.is_centered());
}

#[test]
fn test_initialization_sparse() {
    let indptr = array![0, 2, 3, 6];
    let indices = array![0, 2, 2, 0, 1, 2];
    let data = array![1., 2., 3., 4., 5., 6.];
    let X_sparse = CSCArray::new(data.view(), indices.view(), indptr.view());

    let X = array![[1., 0., 4.], [0., 0., 5.], [2., 3., 6.]];
    let y = array![1., 3., 2.];

    let dataset = DatasetBase::from((X, y.view()));
    let dataset_sparse = DatasetBase::from((X_sparse, y.view()));

    let mut datafit = Quadratic::new();
    let mut datafit_sparse = Quadratic::new();
    datafit.initialize(&dataset);
    datafit_sparse.initialize(&dataset_sparse);

    assert_array_all_close(datafit.lipschitz(), datafit_sparse.lipschitz(), 1e-8);
    assert_array_all_close(datafit.norms(), datafit_sparse.norms(), 1e-8);
}

#[test]
fn test_initialization_centered_sparse() {
    let (X, y) = generate_random_sparse_data(15, 8, 0.4);
    let X_mean = X.mean_axis(Axis(0)).unwrap();
    let X_centered = &X - &X_mean;

    let (data, indices, indptr) = dense_to_csc(X.view());
    let X_sparse =
        CSCArray::new(data.view(), indices.view(), indptr.view()).with_offsets(X_mean.view());

    let dataset = DatasetBase::from((X_centered, y.view()));
    let dataset_sparse = DatasetBase::from((X_sparse, y.view()));

    let mut datafit = Quadratic::new();
    let mut datafit_sparse = Quadratic::new();
    datafit.initialize(&dataset);
    datafit_sparse.initialize(&dataset_sparse);

    assert!(datafit_sparse.is_centered());
    assert_array_all_close(datafit.lipschitz(), datafit_sparse.lipschitz(), 1e-10);
}

#[test]
fn test_gradient() {
    let X = array![[3.6, 1.1, 2.2], [3.4, -1.2, 0.2]];
    let y = array![-3.3, 2.7];
    let w = array![-3.2, -0.21, 2.3];
    let dataset = DatasetBase::from((X.view(), y.view()));

    let mut datafit = Quadratic::new();
    datafit.initialize(&dataset);

    let R = dataset.residual(w.view());
    let grad = Array1::from_iter((0..3).map(|j| datafit.gradient_j(&dataset, R.view(), 0., j)));
    let true_grad = -X.t().dot(&R) / 2.;
    assert_array_all_close(grad.view(), true_grad.view(), 1e-12);
}

#[test]
fn test_update_residual_centered_sparse() {
    let (X, y) = generate_random_sparse_data(12, 6, 0.5);
    let X_mean = X.mean_axis(Axis(0)).unwrap();
    let (data, indices, indptr) = dense_to_csc(X.view());
    let X_sparse =
        CSCArray::new(data.view(), indices.view(), indptr.view()).with_offsets(X_mean.view());
    let dataset = DatasetBase::from((X_sparse, y.view()));

    let mut datafit = Quadratic::new();
    datafit.initialize(&dataset);

    let mut w = Array1::<f64>::zeros(6);
    let mut R = dataset.residual(w.view());
    let mut R_sum = R.sum();

    for (j, diff) in [(0, 0.7), (3, -1.2), (5, 0.4), (0, -0.1)] {
        w[j] += diff;
        R_sum += datafit.update_residual(&dataset, &mut R, diff, j);
    }

    let true_R = dataset.residual(w.view());
    assert_array_all_close(R.view(), true_R.view(), 1e-10);
    assert!((R_sum - true_R.sum()).abs() < 1e-10);
}
