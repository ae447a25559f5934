use ndarray::{array, Array1};

use crate::extrapolation::ResidualWindow;
use crate::helpers::test_helpers::assert_array_all_close;

#[test]
fn test_ring_buffer_ordering() {
    let mut window = ResidualWindow::<f64>::new(3, 2);
    assert!(window.is_empty());

    window.push(array![1., 1.].view());
    window.push(array![2., 2.].view());
    assert_eq!(window.len(), 2);
    assert!(!window.is_full());
    assert_eq!(window.get(0), array![1., 1.].view());
    assert_eq!(window.get(1), array![2., 2.].view());

    window.push(array![3., 3.].view());
    window.push(array![4., 4.].view());
    window.push(array![5., 5.].view());
    assert!(window.is_full());
    assert_eq!(window.len(), 3);
    assert_eq!(window.get(0), array![3., 3.].view());
    assert_eq!(window.get(1), array![4., 4.].view());
    assert_eq!(window.get(2), array![5., 5.].view());

    window.clear();
    assert!(window.is_empty());
}

#[test]
fn test_extrapolate_requires_full_window() {
    let mut window = ResidualWindow::<f64>::new(3, 2);
    window.push(array![1., 0.].view());
    window.push(array![0.5, 0.].view());
    assert!(window.extrapolate().is_none());
}

#[test]
fn test_extrapolate_singular_falls_back_to_latest() {
    let mut window = ResidualWindow::<f64>::new(4, 3);
    for _ in 0..4 {
        window.push(array![1., -2., 0.5].view());
    }
    let R_acc = window.extrapolate().unwrap();
    assert_array_all_close(R_acc.view(), array![1., -2., 0.5].view(), 1e-12);
}

#[test]
fn test_extrapolate_improves_linear_iterates() {
    // r_k = r_opt + A^k e_0 with A = diag(0.9, 0.5)
    let r_opt = array![1., -1.];
    let mut window = ResidualWindow::<f64>::new(3, 2);
    let mut e = array![1., 1.];
    for _ in 0..3 {
        window.push((&r_opt + &e).view());
        e = array![0.9 * e[0], 0.5 * e[1]];
    }

    let R_acc = window.extrapolate().unwrap();
    let last = window.get(2).to_owned();

    let dist = |r: &Array1<f64>| (r - &r_opt).mapv(|x| x * x).sum().sqrt();
    assert!(dist(&R_acc) < dist(&last));
    assert!((dist(&R_acc) - 0.71886).abs() < 1e-3);
}

#[test]
fn test_extrapolate_after_wrap_matches_fresh_window() {
    let snapshots = [
        array![3., 1., 0.],
        array![2., 0.7, 0.1],
        array![1.5, 0.4, 0.15],
        array![1.2, 0.3, 0.17],
        array![1.1, 0.25, 0.18],
    ];

    let mut wrapped = ResidualWindow::<f64>::new(3, 3);
    for R in snapshots.iter() {
        wrapped.push(R.view());
    }
    let mut fresh = ResidualWindow::<f64>::new(3, 3);
    for R in snapshots[2..].iter() {
        fresh.push(R.view());
    }

    let R_wrapped = wrapped.extrapolate().unwrap();
    let R_fresh = fresh.extrapolate().unwrap();
    assert_array_all_close(R_wrapped.view(), R_fresh.view(), 1e-12);
}
