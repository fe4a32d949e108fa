#![allow(non_snake_case)]
// Solve a small dense LP problem:
//
//        min      c' * x
// subject to      bl_c <= A * x <= bu_c
//                 bl_x <=   x   <= bu_x

use dunlin::algebra::*;
use dunlin::solver::*;

fn main() {
    let infty = 1.0e25;

    let c = vec![-0.02, -0.20, -0.20, -0.20, -0.20, 0.04, 0.04];

    let A = Matrix::from(&[
        [1.00, 1.00, 1.00, 1.00, 1.00, 1.00, 1.00],
        [0.15, 0.04, 0.02, 0.04, 0.02, 0.01, 0.03],
        [0.03, 0.05, 0.08, 0.02, 0.06, 0.01, 0.00],
        [0.02, 0.04, 0.01, 0.02, 0.02, 0.00, 0.00],
        [0.02, 0.03, 0.00, 0.00, 0.01, 0.00, 0.00],
        [0.70, 0.75, 0.80, 0.75, 0.80, 0.97, 0.00],
        [0.02, 0.06, 0.08, 0.12, 0.02, 0.01, 0.97],
    ]);

    let bl_x = [-0.01, -0.10, -0.01, -0.04, -0.10, -0.01, -0.01];
    let bu_x = [0.01, 0.15, 0.03, 0.02, 0.05, infty, infty];

    let bl_c = [-0.13, -infty, -infty, -infty, -infty, -9.92e-2, -3.0e-3];
    let bu_c = [-0.13, -4.9e-3, -6.4e-3, -3.7e-3, -1.2e-3, infty, 2.0e-3];

    let x0 = [-0.01, -0.03, 0.00, -0.01, -0.10, 0.02, 0.01];

    let settings = DefaultSettings::default();

    let mut solver = DefaultSolver::new(
        &c,
        None,
        &A,
        &bl_c,
        &bu_c,
        &bl_x,
        &bu_x,
        Some(&x0),
        settings,
    )
    .unwrap();

    solver.solve();

    let sol = &solver.solution;
    let (n, m) = (c.len(), bl_c.len());

    println!("id  V        Value   Lagr Mult");
    for id in 0..n {
        println!("{:5} {:>10.3e} {:>10.3e}", id + 1, sol.x[id], sol.lambda[id]);
    }

    println!("id LC        Value   Lagr Mult");
    for id in 0..m {
        println!(
            "{:5} {:>10.3e} {:>10.3e}",
            n + id + 1,
            sol.ax[id],
            sol.lambda[n + id]
        );
    }

    println!("Objective value at solution {:.5}", sol.obj_val);
}
