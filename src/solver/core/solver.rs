use self::internal::*;
use super::traits::*;
use crate::algebra::*;

// ---------------------------------
// Solver status type
// ---------------------------------

/// Status of solver at termination

#[repr(u32)]
#[derive(PartialEq, Eq, Clone, Debug, Copy)]
pub enum SolverStatus {
    /// Problem is not solved (solver hasn't run).
    Unsolved,
    /// Solver terminated at an optimal point.
    Optimal,
    /// No point satisfies all bounds and constraints.
    Infeasible,
    /// Objective is unbounded below over the feasible set.
    Unbounded,
    /// Iteration limit reached before a terminal point was found.
    MaxIterations,
    /// Time limit reached before a terminal point was found.
    MaxTime,
    /// Solver terminated with a numerical error.
    NumericalFailure,
}

impl SolverStatus {
    pub(crate) fn is_errored(&self) -> bool {
        matches!(*self, SolverStatus::NumericalFailure)
    }
}

impl std::fmt::Display for SolverStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Default for SolverStatus {
    fn default() -> Self {
        SolverStatus::Unsolved
    }
}

/// Phase of the two-phase active-set method.
#[repr(u32)]
#[derive(PartialEq, Eq, Clone, Debug, Copy)]
pub enum Phase {
    /// restoring feasibility by minimizing the sum of infeasibilities
    Feasibility,
    /// minimizing the objective over the feasible set
    Optimality,
}

/// Tag recording which bound of an active row is held as an equality.
#[derive(PartialEq, Eq, Clone, Debug, Copy)]
pub enum ActiveBound {
    /// the row is held at its lower bound
    Lower,
    /// the row is held at its upper bound
    Upper,
    /// the row is an equality (equal lower and upper bounds)
    Fixed,
}

/// Search direction outcome for the current working set.
pub enum SearchDirection<T> {
    /// the current point is stationary for the working-set subproblem
    Stationary,
    /// a descent step, with the length reaching the subproblem minimizer
    /// (infinite when the reduced curvature is zero)
    Step {
        /// step length to the subproblem minimizer
        α_full: T,
    },
}

/// Outcome of the minimum-ratio test along a search direction.
pub struct StepLimit<T> {
    /// admissible step length
    pub α: T,
    /// first inactive row to reach a bound at `α`, and the bound reached
    pub blocking: Option<(usize, ActiveBound)>,
}

// ---------------------------------
// top level solver container type
// ---------------------------------

// The top-level solver.

// This trait is defined with a collection of mutually interacting associated types.
// See the [`DefaultSolver`](crate::solver::implementations::default) for an example.

pub struct Solver<D, V, W, K, I, SO, SE> {
    pub data: D,
    pub variables: V,
    pub workingset: W,
    pub kktsystem: K,
    pub step: V,
    pub info: I,
    pub solution: SO,
    pub settings: SE,
}

fn _print_banner(is_verbose: bool) {
    if !is_verbose {
        return;
    }

    println!("-------------------------------------------------------------");
    println!(
        "             Dunlin.rs v{}  -  Dense Active Set              \n",
        crate::VERSION
    );
    println!("-------------------------------------------------------------");
}

// ---------------------------------
// ActiveSetSolver trait and its standard implementation.
// ---------------------------------

/// A solver implementing the two-phase primal active-set method

// Only the main solver function lives in ActiveSetSolver, since this is
// the only publicly facing trait we want to give the solver.   Additional
// internal functionality for the top level solver object is implemented
// for the ActiveSetInternals trait below, upon which ActiveSetSolver
// depends

pub trait ActiveSetSolver<T, D, V, W, K, I, SO, SE> {
    /// Run the solver
    fn solve(&mut self);
}

impl<T, D, V, W, K, I, SO, SE> ActiveSetSolver<T, D, V, W, K, I, SO, SE>
    for Solver<D, V, W, K, I, SO, SE>
where
    T: FloatT,
    D: ProblemData<T, SE = SE>,
    V: Variables<T, D = D, W = W, SE = SE>,
    W: WorkingSet<T, D = D, V = V, SE = SE>,
    K: KKTSystem<T, D = D, V = V, W = W, SE = SE>,
    I: Info<T, D = D, V = V, W = W, SE = SE>,
    SO: Solution<T, D = D, V = V, I = I>,
    SE: Settings<T>,
{
    fn solve(&mut self) {
        let mut iter: u32 = 0;
        let mut α;

        // solver release info, problem dimensions, settings
        _print_banner(self.settings.core().verbosity.summary());
        self.info.print_configuration(&self.settings, &self.data);
        self.info.print_status_header(&self.settings);

        self.info.reset(&self.data, &self.settings);

        // starting point, crash working set, initial factorization
        if !self.default_start() {
            self.info.set_status(SolverStatus::NumericalFailure);
        }

        // ----------
        // main loop
        // ----------

        while self.info.get_status() == SolverStatus::Unsolved {
            // phase selection from the current constraint violations
            let phase = {
                if self.variables.is_feasible(&self.data, &self.settings) {
                    Phase::Optimality
                } else {
                    Phase::Feasibility
                }
            };

            // gradient of the phase objective at the current point
            // --------------
            self.variables.update_gradient(&self.data, phase);

            // search direction for the current working set
            // --------------
            let direction = self.kktsystem.search_direction(
                &mut self.step,
                &self.variables,
                &self.data,
                &self.workingset,
                phase,
                &self.settings,
            );

            α = T::zero();

            match direction {
                None => {
                    self.info.set_status(SolverStatus::NumericalFailure);
                }
                Some(SearchDirection::Stationary) => {
                    // a stationary point of the working-set subproblem.
                    // multiplier signs decide optimality or the row to free
                    // --------------
                    self.kktsystem
                        .multipliers(&mut self.variables, &self.workingset);

                    match self
                        .workingset
                        .most_violating(&self.variables, &self.settings)
                    {
                        None => {
                            let status = match phase {
                                Phase::Optimality => SolverStatus::Optimal,
                                Phase::Feasibility => SolverStatus::Infeasible,
                            };
                            self.info.set_status(status);
                        }
                        Some(position) => {
                            self.workingset.remove(position);
                            if !self.kktsystem.update(
                                &self.data,
                                &self.workingset,
                                &self.settings,
                            ) {
                                self.info.set_status(SolverStatus::NumericalFailure);
                            }
                        }
                    }
                }
                Some(SearchDirection::Step { α_full }) => {
                    // ratio test over the inactive rows
                    // --------------
                    let limit = self.variables.max_step(
                        &self.data,
                        &self.workingset,
                        &self.step,
                        α_full,
                        &self.settings,
                    );

                    if limit.blocking.is_none() && !limit.α.is_finite() {
                        // no inactive row limits an infinite descent step
                        let status = match phase {
                            Phase::Optimality => SolverStatus::Unbounded,
                            // phase 1 descent always hits a breakpoint; failing
                            // to find one means the arithmetic has broken down
                            Phase::Feasibility => SolverStatus::NumericalFailure,
                        };
                        self.info.set_status(status);
                    } else {
                        α = limit.α;
                        self.variables.add_step(&self.step, α);
                        if let Some((row, bound)) = limit.blocking {
                            self.try_add_row(row, bound);
                        }
                    }
                }
            }

            iter += 1;
            self.info
                .update(&self.data, &self.variables, &self.workingset, α, phase, iter);
            self.info.print_status(&self.settings);

            if self.info.get_status() != SolverStatus::Unsolved {
                break;
            }

            // iteration and time budgets, checked once per outer iteration
            if self.info.check_termination(&self.settings, iter) {
                break;
            }
        }

        //store final solution, timing etc
        self.info.finalize();
        self.solution
            .finalize(&self.data, &self.variables, &self.info);

        self.info.print_footer(&self.settings);
    }
}

// Encapsulate the internal helpers trait in a private module
// so it doesn't get exported
mod internal {
    use super::super::traits::*;
    use super::*;

    pub(super) trait ActiveSetInternals<T, D, V, W, K, I, SO, SE> {
        /// Initialize the iterate and crash an initial working set.
        fn default_start(&mut self) -> bool;

        /// Add a row to the working set, rejecting rank-degenerate additions.
        fn try_add_row(&mut self, row: usize, bound: ActiveBound) -> bool;
    }

    impl<T, D, V, W, K, I, SO, SE> ActiveSetInternals<T, D, V, W, K, I, SO, SE>
        for Solver<D, V, W, K, I, SO, SE>
    where
        T: FloatT,
        D: ProblemData<T, SE = SE>,
        V: Variables<T, D = D, W = W, SE = SE>,
        W: WorkingSet<T, D = D, V = V, SE = SE>,
        K: KKTSystem<T, D = D, V = V, W = W, SE = SE>,
        I: Info<T, D = D, V = V, W = W, SE = SE>,
        SO: Solution<T, D = D, V = V, I = I>,
        SE: Settings<T>,
    {
        fn default_start(&mut self) -> bool {
            self.variables.initialize(&self.data);
            self.workingset.reset(&self.data);

            if !self
                .kktsystem
                .update(&self.data, &self.workingset, &self.settings)
            {
                return false;
            }

            // cold-start crash: activate rows already sitting on a bound
            let candidates =
                self.workingset
                    .initial_candidates(&self.data, &self.variables, &self.settings);
            for (row, bound) in candidates {
                self.try_add_row(row, bound);
            }
            true
        }

        fn try_add_row(&mut self, row: usize, bound: ActiveBound) -> bool {
            // a working set larger than n cannot have full row rank
            let (n, _) = self.data.dims();
            if self.workingset.len() == n {
                return false;
            }

            self.workingset.add(row, bound);
            if self
                .kktsystem
                .update(&self.data, &self.workingset, &self.settings)
            {
                return true;
            }

            // linearly dependent on the current active normals: leave the
            // row at its bound without activating it
            self.workingset.remove_last();
            let ok = self
                .kktsystem
                .update(&self.data, &self.workingset, &self.settings);
            debug_assert!(ok);
            false
        }
    } // end trait impl
} //end internals module
