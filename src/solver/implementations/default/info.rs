use super::*;
use crate::algebra::*;
use crate::solver::core::traits::{Info, ProblemData, Variables, WorkingSet};
use crate::solver::core::{Phase, SolverStatus};
use std::time::Instant;

// ---------------
// Info type for default problem format
// ---------------

/// Standard-form solver type implementing the [`Info`](crate::solver::core::traits::Info) and [`InfoPrint`](crate::solver::core::traits::InfoPrint) traits

#[derive(Debug, Clone)]
pub struct DefaultInfo<T> {
    /// objective value at the current point
    pub cost_primal: T,
    /// sum of bound and constraint violations at the current point
    pub infeasibility: T,
    /// most recent step length
    pub step_length: T,
    /// phase of the most recent iteration
    pub phase: Phase,
    /// number of active working-set rows
    pub n_active: usize,
    /// iterations taken so far
    pub iterations: u32,
    /// elapsed solve time (seconds)
    pub solve_time: f64,
    /// solver status
    pub status: SolverStatus,

    // effective iteration limit for this problem
    max_iter: u32,
    timer: Option<Instant>,
}

impl<T> DefaultInfo<T>
where
    T: FloatT,
{
    pub fn new() -> Self {
        Self {
            cost_primal: T::nan(),
            infeasibility: T::nan(),
            step_length: T::zero(),
            phase: Phase::Feasibility,
            n_active: 0,
            iterations: 0,
            solve_time: 0f64,
            status: SolverStatus::Unsolved,
            max_iter: 0,
            timer: None,
        }
    }
}

impl<T> Default for DefaultInfo<T>
where
    T: FloatT,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Info<T> for DefaultInfo<T>
where
    T: FloatT,
{
    type V = DefaultVariables<T>;
    type W = DefaultWorkingSet<T>;

    fn reset(&mut self, data: &DefaultProblemData<T>, settings: &DefaultSettings<T>) {
        self.status = SolverStatus::Unsolved;
        self.iterations = 0;
        self.solve_time = 0f64;
        self.timer = Some(Instant::now());

        // a zero setting selects the dimension dependent default
        self.max_iter = {
            if settings.max_iter == 0 {
                50 * (data.nrows() as u32)
            } else {
                settings.max_iter
            }
        };
    }

    fn update(
        &mut self,
        data: &DefaultProblemData<T>,
        variables: &DefaultVariables<T>,
        wset: &DefaultWorkingSet<T>,
        α: T,
        phase: Phase,
        iter: u32,
    ) {
        self.cost_primal = variables.objective(data);
        self.infeasibility = variables.infeasibility(data);
        self.step_length = α;
        self.phase = phase;
        self.n_active = wset.len();
        self.iterations = iter;
        self.solve_time = self.timer.map_or(0f64, |t| t.elapsed().as_secs_f64());
    }

    fn check_termination(&mut self, settings: &DefaultSettings<T>, iter: u32) -> bool {
        self.solve_time = self.timer.map_or(0f64, |t| t.elapsed().as_secs_f64());

        if iter >= self.max_iter {
            self.status = SolverStatus::MaxIterations;
        } else if self.solve_time > settings.time_limit {
            self.status = SolverStatus::MaxTime;
        }

        // return TRUE if we settled on a final status
        self.status != SolverStatus::Unsolved
    }

    fn finalize(&mut self) {
        self.solve_time = self.timer.map_or(0f64, |t| t.elapsed().as_secs_f64());
    }

    fn get_status(&self) -> SolverStatus {
        self.status
    }

    fn set_status(&mut self, status: SolverStatus) {
        self.status = status;
    }
}
