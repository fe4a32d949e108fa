#![allow(non_snake_case)]
use dunlin::{algebra::*, solver::*};

fn silent() -> DefaultSettings<f64> {
    DefaultSettingsBuilder::default()
        .verbosity(Verbosity::Silent)
        .build()
        .unwrap()
}

#[allow(clippy::type_complexity)]
fn basic_qp_data() -> (
    Vec<f64>,
    Matrix<f64>,
    Matrix<f64>,
    Vec<f64>,
    Vec<f64>,
    Vec<f64>,
    Vec<f64>,
) {
    // min 0.5 x'Hx + c'x  subject to  x1 + x2 = 1, 0 <= x <= 0.7
    let c = vec![1., 1.];
    let H = Matrix::from(&[[4., 1.], [1., 2.]]);
    let A = Matrix::from(&[[1., 1.]]);
    let bl_c = vec![1.];
    let bu_c = vec![1.];
    let bl_x = vec![0., 0.];
    let bu_x = vec![0.7, 0.7];
    (c, H, A, bl_c, bu_c, bl_x, bu_x)
}

#[test]
fn test_qp_univariate() {
    // unconstrained minimum of x^2 - 2x inside a wide box
    let c = vec![-2.];
    let H = Matrix::from(&[[2.]]);
    let A = Matrix::zeros((0, 1));
    let (bl_c, bu_c) = (vec![], vec![]);
    let (bl_x, bu_x) = (vec![-10.], vec![10.]);

    let mut solver =
        DefaultSolver::new(&c, Some(&H), &A, &bl_c, &bu_c, &bl_x, &bu_x, None, silent()).unwrap();
    solver.solve();

    assert_eq!(solver.solution.status, SolverStatus::Optimal);
    assert!(f64::abs(solver.solution.x[0] - 1.) <= 1e-8);
    assert!(f64::abs(solver.solution.obj_val + 1.) <= 1e-8);
}

#[test]
fn test_qp_feasible() {
    let (c, H, A, bl_c, bu_c, bl_x, bu_x) = basic_qp_data();

    let mut solver = DefaultSolver::new(
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
    .unwrap();
    solver.solve();

    assert_eq!(solver.solution.status, SolverStatus::Optimal);

    let refsol = vec![0.3, 0.7];
    assert!(solver.solution.x.dist(&refsol) <= 1e-6);

    let refobj = 1.88;
    assert!(f64::abs(solver.solution.obj_val - refobj) <= 1e-6);

    // multipliers: equality row at 2.9, active upper bound on x2 at -0.2
    assert!(f64::abs(solver.solution.lambda[2] - 2.9) <= 1e-6);
    assert!(f64::abs(solver.solution.lambda[1] + 0.2) <= 1e-6);
    assert!(f64::abs(solver.solution.lambda[0]) <= 1e-6);
}

#[test]
fn test_qp_hessian_operator() {
    // the same problem with the quadratic term supplied as a
    // Hessian-vector product callback
    let (c, _H, A, bl_c, bu_c, bl_x, bu_x) = basic_qp_data();

    let hessian: Hessian<f64> = HessianOperator::new(|y: &mut [f64], x: &[f64]| {
        y[0] = 4. * x[0] + x[1];
        y[1] = x[0] + 2. * x[1];
    })
    .into();

    let mut solver = DefaultSolver::new_with_hessian(
        &c, hessian, &A, &bl_c, &bu_c, &bl_x, &bu_x, None, silent(),
    )
    .unwrap();
    solver.solve();

    assert_eq!(solver.solution.status, SolverStatus::Optimal);
    assert!(solver.solution.x.dist(&[0.3, 0.7]) <= 1e-6);
    assert!(f64::abs(solver.solution.obj_val - 1.88) <= 1e-6);
}

#[test]
fn test_qp_semidefinite_unbounded() {
    // zero curvature on a free variable with favorable cost
    let c = vec![0., -1.];
    let H = Matrix::from(&[[2., 0.], [0., 0.]]);
    let A = Matrix::zeros((0, 2));
    let (bl_c, bu_c) = (vec![], vec![]);
    let bl_x = vec![f64::NEG_INFINITY, f64::NEG_INFINITY];
    let bu_x = vec![f64::INFINITY, f64::INFINITY];

    let mut solver =
        DefaultSolver::new(&c, Some(&H), &A, &bl_c, &bu_c, &bl_x, &bu_x, None, silent()).unwrap();
    solver.solve();

    assert_eq!(solver.solution.status, SolverStatus::Unbounded);
}

#[test]
fn test_qp_warm_start_idempotent() {
    let (c, H, A, bl_c, bu_c, bl_x, bu_x) = basic_qp_data();

    let mut solver = DefaultSolver::new(
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
    .unwrap();
    solver.solve();
    let obj = solver.solution.obj_val;

    let x0 = solver.solution.x.clone();
    let mut solver2 = DefaultSolver::new(
        &c,
        Some(&H),
        &A,
        &bl_c,
        &bu_c,
        &bl_x,
        &bu_x,
        Some(&x0),
        silent(),
    )
    .unwrap();
    solver2.solve();

    assert_eq!(solver2.solution.status, SolverStatus::Optimal);
    assert!(solver2.solution.iterations <= 1);
    assert!(f64::abs(solver2.solution.obj_val - obj) <= 1e-8);
}

#[test]
fn test_qp_zero_hessian_matches_lp() {
    // an explicitly zero quadratic term reduces to the LP path
    let c = vec![-1., -1.];
    let H = Matrix::zeros((2, 2));
    let A = Matrix::from(&[[1., 1.]]);
    let (bl_c, bu_c) = (vec![f64::NEG_INFINITY], vec![1.]);
    let (bl_x, bu_x) = (vec![0., 0.], vec![f64::INFINITY, f64::INFINITY]);

    let mut solver = DefaultSolver::new(
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
    .unwrap();
    solver.solve();

    let mut lp = DefaultSolver::new(&c, None, &A, &bl_c, &bu_c, &bl_x, &bu_x, None, silent())
        .unwrap();
    lp.solve();

    assert_eq!(solver.solution.status, SolverStatus::Optimal);
    assert_eq!(lp.solution.status, SolverStatus::Optimal);
    assert!(f64::abs(solver.solution.obj_val - lp.solution.obj_val) <= 1e-8);
}
