#![allow(non_snake_case)]
// A dense 7-variable, 7-constraint portfolio rebalancing problem, solved
// in both LP and QP form.  The data uses a large sentinel value for the
// unbounded directions, exercising the infinite-bound normalization.

use dunlin::{algebra::*, solver::*};

const INFTY: f64 = 1.0e25;

fn silent() -> DefaultSettings<f64> {
    DefaultSettingsBuilder::default()
        .verbosity(Verbosity::Silent)
        .build()
        .unwrap()
}

fn cost() -> Vec<f64> {
    vec![-0.02, -0.20, -0.20, -0.20, -0.20, 0.04, 0.04]
}

fn constraints() -> Matrix<f64> {
    Matrix::from(&[
        [1.00, 1.00, 1.00, 1.00, 1.00, 1.00, 1.00],
        [0.15, 0.04, 0.02, 0.04, 0.02, 0.01, 0.03],
        [0.03, 0.05, 0.08, 0.02, 0.06, 0.01, 0.00],
        [0.02, 0.04, 0.01, 0.02, 0.02, 0.00, 0.00],
        [0.02, 0.03, 0.00, 0.00, 0.01, 0.00, 0.00],
        [0.70, 0.75, 0.80, 0.75, 0.80, 0.97, 0.00],
        [0.02, 0.06, 0.08, 0.12, 0.02, 0.01, 0.97],
    ])
}

fn variable_bounds() -> (Vec<f64>, Vec<f64>) {
    (
        vec![-0.01, -0.10, -0.01, -0.04, -0.10, -0.01, -0.01],
        vec![0.01, 0.15, 0.03, 0.02, 0.05, INFTY, INFTY],
    )
}

fn constraint_bounds() -> (Vec<f64>, Vec<f64>) {
    (
        vec![-0.13, -INFTY, -INFTY, -INFTY, -INFTY, -9.92e-2, -3.0e-3],
        vec![-0.13, -4.9e-3, -6.4e-3, -3.7e-3, -1.2e-3, INFTY, 2.0e-3],
    )
}

fn portfolio_hessian() -> Matrix<f64> {
    Matrix::from(&[
        [2.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        [0.0, 2.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        [0.0, 0.0, 2.0, 2.0, 0.0, 0.0, 0.0],
        [0.0, 0.0, 2.0, 2.0, 0.0, 0.0, 0.0],
        [0.0, 0.0, 0.0, 0.0, 2.0, 0.0, 0.0],
        [0.0, 0.0, 0.0, 0.0, 0.0, -2.0, -2.0],
        [0.0, 0.0, 0.0, 0.0, 0.0, -2.0, -2.0],
    ])
}

fn initial_guess() -> Vec<f64> {
    vec![-0.01, -0.03, 0.00, -0.01, -0.10, 0.02, 0.01]
}

// combined row bounds and row values, variables first
fn combined(sol: &DefaultSolution<f64>) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
    let (bl_x, bu_x) = variable_bounds();
    let (bl_c, bu_c) = constraint_bounds();

    let mut bl = bl_x;
    bl.extend_from_slice(&bl_c);
    let mut bu = bu_x;
    bu.extend_from_slice(&bu_c);

    let mut values = sol.x.clone();
    values.extend_from_slice(&sol.ax);
    (bl, bu, values)
}

// returned point satisfies every bound and constraint
fn assert_feasible(sol: &DefaultSolution<f64>) {
    let (bl, bu, values) = combined(sol);
    let tol = 1e-6;
    for (r, &v) in values.iter().enumerate() {
        if bl[r] > -INFTY {
            assert!(v >= bl[r] - tol, "row {} below its lower bound", r);
        }
        if bu[r] < INFTY {
            assert!(v <= bu[r] + tol, "row {} above its upper bound", r);
        }
    }
}

// complementary slackness: a row with a nonzero multiplier sits on the
// bound matching the multiplier's sign.  The first constraint row is an
// equality and is exempt from the sign test.
fn assert_complementary(sol: &DefaultSolution<f64>) {
    let (bl, bu, values) = combined(sol);
    let tol = 1e-6;
    for (r, &lambda) in sol.lambda.iter().enumerate() {
        if bl[r] == bu[r] {
            continue;
        }
        if lambda > tol {
            assert!(
                (values[r] - bl[r]).abs() <= tol,
                "row {} has a positive multiplier off its lower bound",
                r
            );
        } else if lambda < -tol {
            assert!(
                (values[r] - bu[r]).abs() <= tol,
                "row {} has a negative multiplier off its upper bound",
                r
            );
        }
    }
}

#[test]
fn test_portfolio_lp() {
    let c = cost();
    let A = constraints();
    let (bl_x, bu_x) = variable_bounds();
    let (bl_c, bu_c) = constraint_bounds();
    let x0 = initial_guess();

    let mut solver = DefaultSolver::new(
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
    .unwrap();
    solver.solve();

    assert_eq!(solver.solution.status, SolverStatus::Optimal);
    assert!(solver.solution.iterations > 0);
    assert_feasible(&solver.solution);
    assert_complementary(&solver.solution);
}

#[test]
fn test_portfolio_qp() {
    let c = cost();
    let A = constraints();
    let H = portfolio_hessian();
    let (bl_x, bu_x) = variable_bounds();
    let (bl_c, bu_c) = constraint_bounds();
    let x0 = initial_guess();

    let mut lp = DefaultSolver::new(
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
    .unwrap();
    lp.solve();
    assert_eq!(lp.solution.status, SolverStatus::Optimal);

    let mut qp = DefaultSolver::new(
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
    qp.solve();
    assert_eq!(qp.solution.status, SolverStatus::Optimal);

    assert_feasible(&qp.solution);
    assert_complementary(&qp.solution);

    // the quadratic term only adds cost at the QP solution, so the QP
    // optimum cannot undercut the LP optimum
    assert!(qp.solution.obj_val >= lp.solution.obj_val - 1e-6);
}

#[test]
fn test_portfolio_lp_warm_start() {
    let c = cost();
    let A = constraints();
    let (bl_x, bu_x) = variable_bounds();
    let (bl_c, bu_c) = constraint_bounds();
    let x0 = initial_guess();

    let mut solver = DefaultSolver::new(
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
    .unwrap();
    solver.solve();
    assert_eq!(solver.solution.status, SolverStatus::Optimal);

    let xstar = solver.solution.x.clone();
    let mut solver2 = DefaultSolver::new(
        &c,
        None,
        &A,
        &bl_c,
        &bu_c,
        &bl_x,
        &bu_x,
        Some(&xstar),
        silent(),
    )
    .unwrap();
    solver2.solve();

    assert_eq!(solver2.solution.status, SolverStatus::Optimal);
    assert!(f64::abs(solver2.solution.obj_val - solver.solution.obj_val) <= 1e-8);
}
