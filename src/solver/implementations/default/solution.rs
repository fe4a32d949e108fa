use super::*;
use crate::algebra::*;
use crate::solver::core::traits::{Info, Solution};
use crate::solver::core::SolverStatus;

// ---------------
// Solution type for default problem format
// ---------------

/// Standard-form solver type implementing the [`Solution`](crate::solver::core::traits::Solution) trait
#[derive(Debug)]
pub struct DefaultSolution<T> {
    /// primal solution
    pub x: Vec<T>,
    /// constraint row values `A*x` at the solution
    pub ax: Vec<T>,
    /// Lagrange multipliers over the combined rows: variable bounds
    /// first, then constraints
    pub lambda: Vec<T>,
    /// final solver status
    pub status: SolverStatus,
    /// primal objective value
    pub obj_val: T,
    /// solve time in seconds
    pub solve_time: f64,
    /// number of iterations
    pub iterations: u32,
}

impl<T> DefaultSolution<T>
where
    T: FloatT,
{
    /// Create a new `DefaultSolution` object
    pub fn new(n: usize, m: usize) -> Self {
        Self {
            x: vec![T::zero(); n],
            ax: vec![T::zero(); m],
            lambda: vec![T::zero(); n + m],
            status: SolverStatus::Unsolved,
            obj_val: T::nan(),
            solve_time: 0f64,
            iterations: 0,
        }
    }
}

impl<T> Solution<T> for DefaultSolution<T>
where
    T: FloatT,
{
    type D = DefaultProblemData<T>;
    type V = DefaultVariables<T>;
    type I = DefaultInfo<T>;

    fn finalize(
        &mut self,
        data: &DefaultProblemData<T>,
        variables: &DefaultVariables<T>,
        info: &DefaultInfo<T>,
    ) {
        self.status = info.status;
        self.iterations = info.iterations;
        self.solve_time = info.solve_time;

        self.x.copy_from(&variables.x);
        self.lambda.copy_from(&variables.λ);

        // one fresh product, so the reported row values reflect exactly
        // the returned x rather than any incrementally updated state
        data.A.gemv(&self.x, &mut self.ax, T::one(), T::zero());

        self.obj_val = {
            if info.status.is_errored() {
                T::nan()
            } else {
                data.objective(&self.x)
            }
        };
    }
}
