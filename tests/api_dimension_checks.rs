#![allow(non_snake_case)]
#![allow(clippy::type_complexity)]
use dunlin::{algebra::*, solver::*};

// a collection of tests to ensure that data of
// incompatible dimension or crossed bounds won't be accepted

fn api_dim_check_data() -> (
    Vec<f64>,
    Matrix<f64>,
    Matrix<f64>,
    Vec<f64>,
    Vec<f64>,
    Vec<f64>,
    Vec<f64>,
) {
    let c = vec![0.; 4];
    let H = Matrix::zeros((4, 4));
    let A = Matrix::zeros((6, 4));
    let bl_c = vec![0.; 6];
    let bu_c = vec![1.; 6];
    let bl_x = vec![0.; 4];
    let bu_x = vec![1.; 4];
    (c, H, A, bl_c, bu_c, bl_x, bu_x)
}

fn silent() -> DefaultSettings<f64> {
    DefaultSettingsBuilder::default()
        .verbosity(Verbosity::Silent)
        .build()
        .unwrap()
}

#[test]
fn api_dim_check_working() {
    // This example should work because dimensions are
    // all compatible.  All following checks vary one
    // of these sizes to test dimension checks

    let (c, H, A, bl_c, bu_c, bl_x, bu_x) = api_dim_check_data();

    let solver = DefaultSolver::new(
        &c,
        Some(&H),
        &A,
        &bl_c,
        &bu_c,
        &bl_x,
        &bu_x,
        None,
        silent(),
    );
    assert!(solver.is_ok());
}

#[test]
fn api_dim_check_bad_A_rows() {
    let (c, _H, _A, bl_c, bu_c, bl_x, bu_x) = api_dim_check_data();
    let A = Matrix::zeros((5, 4));

    let err = DefaultSolver::new(&c, None, &A, &bl_c, &bu_c, &bl_x, &bu_x, None, silent())
        .err()
        .unwrap();
    assert!(matches!(
        err,
        InvalidProblemError::MatrixDimensionMismatch { name: "A", .. }
    ));
}

#[test]
fn api_dim_check_bad_A_cols() {
    let (c, _H, _A, bl_c, bu_c, bl_x, bu_x) = api_dim_check_data();
    let A = Matrix::zeros((6, 3));

    let err = DefaultSolver::new(&c, None, &A, &bl_c, &bu_c, &bl_x, &bu_x, None, silent())
        .err()
        .unwrap();
    assert!(matches!(
        err,
        InvalidProblemError::MatrixDimensionMismatch { name: "A", .. }
    ));
}

#[test]
fn api_dim_check_bad_H() {
    let (c, _H, A, bl_c, bu_c, bl_x, bu_x) = api_dim_check_data();
    let H = Matrix::zeros((3, 3));

    let err = DefaultSolver::new(
        &c,
        Some(&H),
        &A,
        &bl_c,
        &bu_c,
        &bl_x,
        &bu_x,
        None,
        silent(),
    )
    .err()
    .unwrap();
    assert!(matches!(
        err,
        InvalidProblemError::MatrixDimensionMismatch { name: "H", .. }
    ));
}

#[test]
fn api_check_H_not_symmetric() {
    let (c, mut H, A, bl_c, bu_c, bl_x, bu_x) = api_dim_check_data();
    H[(0, 1)] = 1.;

    let err = DefaultSolver::new(
        &c,
        Some(&H),
        &A,
        &bl_c,
        &bu_c,
        &bl_x,
        &bu_x,
        None,
        silent(),
    )
    .err()
    .unwrap();
    assert!(matches!(err, InvalidProblemError::AsymmetricHessian));
}

#[test]
fn api_dim_check_bad_bound_lengths() {
    let (c, _H, A, bl_c, bu_c, bl_x, bu_x) = api_dim_check_data();

    let bad_bu_c = vec![1.; 5];
    let err = DefaultSolver::new(&c, None, &A, &bl_c, &bad_bu_c, &bl_x, &bu_x, None, silent())
        .err()
        .unwrap();
    assert!(matches!(
        err,
        InvalidProblemError::VectorDimensionMismatch { name: "bu_c", .. }
    ));

    let bad_bl_x = vec![0.; 3];
    let err = DefaultSolver::new(&c, None, &A, &bl_c, &bu_c, &bad_bl_x, &bu_x, None, silent())
        .err()
        .unwrap();
    assert!(matches!(
        err,
        InvalidProblemError::VectorDimensionMismatch { name: "bl_x", .. }
    ));
}

#[test]
fn api_dim_check_bad_x0() {
    let (c, _H, A, bl_c, bu_c, bl_x, bu_x) = api_dim_check_data();
    let x0 = vec![0.; 5];

    let err = DefaultSolver::new(
        &c,
        None,
        &A,
        &bl_c,
        &bu_c,
        &bl_x,
        &bu_x,
        Some(&x0),
        silent(),
    )
    .err()
    .unwrap();
    assert!(matches!(
        err,
        InvalidProblemError::VectorDimensionMismatch { name: "x0", .. }
    ));
}

#[test]
fn api_check_crossed_variable_bounds() {
    let (c, _H, A, bl_c, bu_c, mut bl_x, bu_x) = api_dim_check_data();
    bl_x[2] = 2.;

    let err = DefaultSolver::new(&c, None, &A, &bl_c, &bu_c, &bl_x, &bu_x, None, silent())
        .err()
        .unwrap();
    assert!(matches!(
        err,
        InvalidProblemError::VariableBoundsCrossed { index: 2 }
    ));
}

#[test]
fn api_check_crossed_constraint_bounds() {
    // crossed bounds are rejected before any iteration runs, rather
    // than surfacing as an infeasible solve
    let (c, _H, A, mut bl_c, bu_c, bl_x, bu_x) = api_dim_check_data();
    bl_c[4] = 10.;

    let err = DefaultSolver::new(&c, None, &A, &bl_c, &bu_c, &bl_x, &bu_x, None, silent())
        .err()
        .unwrap();
    assert!(matches!(
        err,
        InvalidProblemError::ConstraintBoundsCrossed { index: 4 }
    ));
}

#[test]
fn api_check_nan_data() {
    let (mut c, _H, A, bl_c, bu_c, bl_x, bu_x) = api_dim_check_data();
    c[0] = f64::NAN;

    let err = DefaultSolver::new(&c, None, &A, &bl_c, &bu_c, &bl_x, &bu_x, None, silent())
        .err()
        .unwrap();
    assert!(matches!(
        err,
        InvalidProblemError::NonFiniteData { name: "c" }
    ));
}

#[test]
fn api_check_nan_bound() {
    let (c, _H, A, bl_c, mut bu_c, bl_x, bu_x) = api_dim_check_data();
    bu_c[1] = f64::NAN;

    let err = DefaultSolver::new(&c, None, &A, &bl_c, &bu_c, &bl_x, &bu_x, None, silent())
        .err()
        .unwrap();
    assert!(matches!(err, InvalidProblemError::NaNBound { name: "bu_c" }));
}

#[test]
fn api_check_empty_problem() {
    let c: Vec<f64> = vec![];
    let A = Matrix::zeros((0, 0));

    let err = DefaultSolver::new(&c, None, &A, &[], &[], &[], &[], None, silent())
        .err()
        .unwrap();
    assert!(matches!(err, InvalidProblemError::EmptyProblem));
}
