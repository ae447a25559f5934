use ndarray::{array, Array1, Axis};

use crate::datasets::{csc_array::CSCArray, AsSingleTargets, DatasetBase, DesignMatrix};
use crate::helpers::test_helpers::*;

#[test]
fn test_column_primitives_sparse_match_dense() {
    let indptr = array![0, 2, 3, 6];
    let indices = array![0, 2, 2, 0, 1, 2];
    let data = array![1., 2., 3., 4., 5., 6.];
    let X_sparse = CSCArray::new(data.view(), indices.view(), indptr.view());
    let X = array![[1., 0., 4.], [0., 0., 5.], [2., 3., 6.]];
    let v = array![0.5, -1., 2.];

    assert_eq!(X_sparse.n_features(), 3);
    assert!(!X_sparse.is_centered());
    for j in 0..3 {
        assert_eq!(X.column_dot(j, v.view()), X_sparse.column_dot(j, v.view()));
        assert_eq!(X.column_sum(j), X_sparse.column_sum(j));
        assert_eq!(
            X.column_squared_norm(j),
            X_sparse.column_squared_norm(j)
        );
    }

    let w = array![1., -2., 0.5];
    assert_array_all_close(
        X.compute_fit(w.view(), 3).view(),
        X_sparse.compute_fit(w.view(), 3).view(),
        1e-12,
    );
}

#[test]
fn test_update_residual() {
    let indptr = array![0, 2, 3, 6];
    let indices = array![0, 2, 2, 0, 1, 2];
    let data = array![1., 2., 3., 4., 5., 6.];
    let X_sparse = CSCArray::new(data.view(), indices.view(), indptr.view());
    let X = array![[1., 0., 4.], [0., 0., 5.], [2., 3., 6.]];

    let mut R = array![1., 1., 1.];
    let mut R_sparse = R.clone();
    X.update_residual(&mut R, 0.5, 2);
    X_sparse.update_residual(&mut R_sparse, 0.5, 2);

    assert_array_all_close(R.view(), array![-1., -1.5, -2.].view(), 1e-12);
    assert_array_all_close(R.view(), R_sparse.view(), 1e-12);
}

#[test]
fn test_centered_fit_and_residual() {
    let (X, y) = generate_random_sparse_data(10, 5, 0.5);
    let X_mean = X.mean_axis(Axis(0)).unwrap();
    let X_centered = &X - &X_mean;
    let w = Array1::from_vec(vec![0.3, 0., -1.1, 2.2, 0.5]);

    let (data, indices, indptr) = dense_to_csc(X.view());
    let X_sparse =
        CSCArray::new(data.view(), indices.view(), indptr.view()).with_offsets(X_mean.view());
    assert!(X_sparse.is_centered());

    let dataset = DatasetBase::from((X_sparse, y.view()));
    let R = dataset.residual(w.view());
    let true_R = &y - &X_centered.dot(&w);
    assert_array_all_close(R.view(), true_R.view(), 1e-10);

    let v_sum = y.sum();
    for j in 0..5 {
        let dense_dot = X_centered.column(j).dot(&y);
        let sparse_dot = dataset
            .design_matrix()
            .centered_column_dot(j, y.view(), v_sum);
        assert!((dense_dot - sparse_dot).abs() < 1e-10);
    }
}

#[test]
fn test_zero_offsets_are_not_centered() {
    let indptr = array![0, 1, 1];
    let indices = array![0];
    let data = array![2.];
    let offsets = array![0., 0.];
    let X_sparse =
        CSCArray::new(data.view(), indices.view(), indptr.view()).with_offsets(offsets.view());
    assert!(!X_sparse.is_centered());
    assert_eq!(X_sparse.column_squared_norm(1), 0.);
}

#[test]
fn test_dataset_getters() {
    let X = array![[1., 0.], [0., 1.], [1., 1.]];
    let y = array![1., 2., 3.];
    let dataset = DatasetBase::new(X.view(), y.view());

    assert_eq!(dataset.n_samples(), 3);
    assert_eq!(dataset.n_features(), 2);
    assert_eq!(dataset.targets().as_single_target(), y.view());
}

#[test]
fn test_is_consistent() {
    let X = array![[1., 0., 4.], [0., 0., 5.], [2., 3., 6.]];
    assert!(X.is_consistent(3));
    assert!(!X.is_consistent(4));

    let indptr = array![0, 2, 3, 6];
    let indices = array![0, 2, 2, 0, 1, 2];
    let data = array![1., 2., 3., 4., 5., 6.];
    let X_sparse = CSCArray::new(data.view(), indices.view(), indptr.view());
    assert!(X_sparse.is_consistent(3));
    // Row index 2 is out of bounds
    assert!(!X_sparse.is_consistent(2));

    let bad_indptr = array![0, 2, 1, 6];
    let X_sparse = CSCArray::new(data.view(), indices.view(), bad_indptr.view());
    assert!(!X_sparse.is_consistent(3));

    let offsets = array![0.1, 0.2];
    let X_sparse =
        CSCArray::new(data.view(), indices.view(), indptr.view()).with_offsets(offsets.view());
    assert!(!X_sparse.is_consistent(3));
}

#[test]
fn test_csc_column_iterator() {
    let indptr = array![0, 2, 2, 5];
    let indices = array![0, 3, 1, 2, 3];
    let data = array![1., 2., 3., 4., 5.];
    let offsets = array![0.5, 0., -1.];
    let X_sparse =
        CSCArray::new(data.view(), indices.view(), indptr.view()).with_offsets(offsets.view());

    let col: Vec<(usize, f64)> = X_sparse.column(0).map(|(i, &x)| (i, x)).collect();
    assert_eq!(col, vec![(0, 1.), (3, 2.)]);
    assert_eq!(X_sparse.column(1).count(), 0);
    let col: Vec<(usize, f64)> = X_sparse.column(2).map(|(i, &x)| (i, x)).collect();
    assert_eq!(col, vec![(1, 3.), (2, 4.), (3, 5.)]);

    assert_eq!(X_sparse.offset(0), 0.5);
    assert_eq!(X_sparse.offset(2), -1.);
    let X = array![[1., 0.], [0., 1.]];
    assert_eq!(X.offset(1), 0.);
}
