use ndarray::array;

use crate::screening::*;

#[test]
fn test_compute_priorities() {
    let Xt_theta = array![0.5, -1., 0.2, 0.9, 0.];
    let norms = array![2., 1., 0., 0.5, 4.];
    let w = array![0., 0., 0., 1.3, 0.];
    let screened = [false, false, false, false, true];

    let prios = compute_priorities(Xt_theta.view(), norms.view(), w.view(), &screened);

    assert_eq!(prios[0], 0.25);
    // A feature on the boundary of the dual feasible set is the most eligible
    assert_eq!(prios[1], 0.);
    // Zero-norm and screened features are never selected before the others
    assert_eq!(prios[2], f64::INFINITY);
    assert_eq!(prios[4], f64::INFINITY);
    // Active features are always retained
    assert_eq!(prios[3], -1.);
}

#[test]
fn test_safe_screening() {
    let Xt_theta = array![0.1, 0.99, 0.1, 0.2, 0.];
    let norms = array![1., 1., 1., 0., 1.];
    let w = array![0., 0., 2., 0., 0.];
    let mut screened = [false, false, false, false, true];

    // radius = sqrt(2 * 0.02 / 4) / 0.5 = 0.2
    let n_screened = safe_screening(
        Xt_theta.view(),
        norms.view(),
        w.view(),
        0.02,
        0.5,
        4,
        &mut screened,
    );

    assert_eq!(n_screened, 1);
    assert_eq!(screened, [true, false, false, false, true]);
}

#[test]
fn test_safe_screening_with_null_gap() {
    let Xt_theta = array![1., 0.999, -0.5];
    let norms = array![1., 1., 1.];
    let w = array![0., 0., 0.];
    let mut screened = [false; 3];

    let n_screened = safe_screening(
        Xt_theta.view(),
        norms.view(),
        w.view(),
        0.,
        1.,
        10,
        &mut screened,
    );

    assert_eq!(n_screened, 2);
    assert_eq!(screened, [false, true, true]);
}
