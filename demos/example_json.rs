#![allow(non_snake_case)]
// Write a problem to a JSON file and read it back.

use dunlin::algebra::*;
use dunlin::solver::*;
use std::io::{Seek, SeekFrom};

fn main() {
    let c = vec![1., 1.];
    let A = Matrix::from(&[[1., 1.]]);
    let (bl_c, bu_c) = ([1.], [1.]);
    let (bl_x, bu_x) = ([0., 0.], [f64::INFINITY, f64::INFINITY]);

    let settings = DefaultSettings::default();

    let mut solver =
        DefaultSolver::new(&c, None, &A, &bl_c, &bu_c, &bl_x, &bu_x, None, settings).unwrap();
    solver.solve();

    let mut file = tempfile::tempfile().unwrap();
    solver.write_to_file(&mut file).unwrap();

    file.seek(SeekFrom::Start(0)).unwrap();
    let mut solver2 = DefaultSolver::<f64>::read_from_file(&mut file).unwrap();
    solver2.solve();

    println!("original solution = {:?}", solver.solution.x);
    println!("restored solution = {:?}", solver2.solution.x);
}
