#![allow(non_snake_case)]
// Solve a QP with the quadratic term supplied as a Hessian-vector
// product callback instead of an explicit matrix.

use dunlin::algebra::*;
use dunlin::solver::*;

fn main() {
    // min 0.5 x'Hx + c'x with H = diag(2, 2), never formed explicitly
    let c = vec![-2., -4.];

    let hessian: Hessian<f64> = HessianOperator::new(|y: &mut [f64], x: &[f64]| {
        y[0] = 2. * x[0];
        y[1] = 2. * x[1];
    })
    .into();

    let A = Matrix::from(&[[1., 1.]]);
    let (bl_c, bu_c) = ([f64::NEG_INFINITY], [2.]);
    let (bl_x, bu_x) = ([0., 0.], [f64::INFINITY, f64::INFINITY]);

    let settings = DefaultSettings::default();

    let mut solver = DefaultSolver::new_with_hessian(
        &c, hessian, &A, &bl_c, &bu_c, &bl_x, &bu_x, None, settings,
    )
    .unwrap();

    solver.solve();

    println!("Solution = {:?}", solver.solution.x);
    println!("Objective = {:.5}", solver.solution.obj_val);
}
