use ndarray::array;

use crate::penalties::L1;

#[test]
fn test_value_l1() {
    let w = array![3.4, 2.1, -2.3, -0.3, 4.5];
    let penalty = L1::new(3.2);
    let val: f64 = penalty.value(w.view());
    assert!((val - 40.32).abs() < 1e-12);
}

#[test]
fn test_prox_l1() {
    let penalty = L1::<f64>::new(0.5);
    assert!((penalty.prox(0.3, 0.1) - 0.25).abs() < 1e-12);
    assert!((penalty.prox(-1.2, 2.) - -0.2).abs() < 1e-12);
    assert_eq!(penalty.prox(0.2, 1.), 0.);
}
