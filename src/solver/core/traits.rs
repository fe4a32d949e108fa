//! Required traits for types providing a Dunlin solver implementation.
//!
//! This module defines the core traits that must be implemented by a collection
//! of mutually associated data types to make a solver for a particular problem
//! format.
//!
//! In nearly all cases there is no need for a user to implement these traits.
//! Instead, users should use the collection of types that are provided
//! in the [Default solver implementation](crate::solver::implementations::default),
//! which collectively implement support for the problem format described in the top
//! level crate documentation.

use super::{ActiveBound, Phase, SearchDirection, SolverStatus, StepLimit};
use crate::algebra::*;

/// Data for a dense QP/LP problem.

pub trait ProblemData<T: FloatT> {
    type SE: Settings<T>;

    /// Problem dimensions `(n, m)`: variables and linear constraints.
    fn dims(&self) -> (usize, usize);

    /// Number of rows in the combined bound/constraint row space.
    fn nrows(&self) -> usize {
        let (n, m) = self.dims();
        n + m
    }

    /// Magnitude of the problem data, used to scale tolerances.
    fn scale(&self) -> T;
}

/// Iterate state for a dense QP/LP problem.

pub trait Variables<T: FloatT> {
    type D: ProblemData<T>;
    type W: WorkingSet<T>;
    type SE: Settings<T>;

    /// Initialize from the problem's starting point.
    fn initialize(&mut self, data: &Self::D);

    /// `true` if every row satisfies its bounds within the feasibility tolerance.
    fn is_feasible(&self, data: &Self::D, settings: &Self::SE) -> bool;

    /// Sum of bound violations over all rows.
    fn infeasibility(&self, data: &Self::D) -> T;

    /// Objective value at the current point.
    fn objective(&self, data: &Self::D) -> T;

    /// Recompute the gradient of the phase objective at the current point.
    fn update_gradient(&mut self, data: &Self::D, phase: Phase);

    /// Compute the maximum step length possible in the given step
    /// direction without violating any inactive row, together with the
    /// blocking row if one limits the step.  `α_full` is the step that
    /// reaches the minimizer of the working-set subproblem.

    fn max_step(
        &self,
        data: &Self::D,
        wset: &Self::W,
        step: &Self,
        α_full: T,
        settings: &Self::SE,
    ) -> StepLimit<T>;

    /// Update the variables in the given step direction, scaled by `α`.
    fn add_step(&mut self, step: &Self, α: T);
}

/// Working set of active rows for a dense QP/LP problem.

pub trait WorkingSet<T: FloatT> {
    type D: ProblemData<T>;
    type V: Variables<T>;
    type SE: Settings<T>;

    /// Empty the working set.
    fn reset(&mut self, data: &Self::D);

    /// Number of active rows.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Rows eligible for activation at the initial point, equality rows
    /// first.  Additions are still subject to the rank guard applied by
    /// the solver.
    fn initial_candidates(
        &self,
        data: &Self::D,
        variables: &Self::V,
        settings: &Self::SE,
    ) -> Vec<(usize, ActiveBound)>;

    /// Append a row to the working set.
    fn add(&mut self, row: usize, bound: ActiveBound);

    /// Remove the active row at the given position in the working set.
    fn remove(&mut self, position: usize);

    /// Remove the most recently added row.
    fn remove_last(&mut self);

    /// Position of the active row whose multiplier most violates its
    /// optimality sign condition, or `None` if all signs are consistent.
    fn most_violating(&self, variables: &Self::V, settings: &Self::SE) -> Option<usize>;
}

/// KKT linear solver object for the working-set subproblem.

pub trait KKTSystem<T: FloatT> {
    type D: ProblemData<T>;
    type V: Variables<T>;
    type W: WorkingSet<T>;
    type SE: Settings<T>;

    /// Refactorize for the current working set.   Returns `false` if the
    /// active constraint normals are rank deficient.

    fn update(&mut self, data: &Self::D, wset: &Self::W, settings: &Self::SE) -> bool;

    /// Compute the search direction for the current working set into
    /// `step`, using the gradient held by `variables`.  Returns `None`
    /// on an unrecoverable numerical failure.

    fn search_direction(
        &mut self,
        step: &mut Self::V,
        variables: &Self::V,
        data: &Self::D,
        wset: &Self::W,
        phase: Phase,
        settings: &Self::SE,
    ) -> Option<SearchDirection<T>>;

    /// Compute multipliers for the active rows from the gradient held by
    /// `variables`, scattering them into the variables' multiplier vector.

    fn multipliers(&self, variables: &mut Self::V, wset: &Self::W);
}

/// Printing functions for the solver's Info

pub trait InfoPrint<T>
where
    T: FloatT,
{
    type D: ProblemData<T>;
    type SE: Settings<T>;

    /// Print the solver configuration, e.g. settings etc.
    /// This function is called once at the start of the solve.
    fn print_configuration(&self, settings: &Self::SE, data: &Self::D);

    /// Print a header to appear at the top of progress information.
    fn print_status_header(&self, settings: &Self::SE);

    /// Print solver progress information.   Called once per iteration.
    fn print_status(&self, settings: &Self::SE);

    /// Print solver final status and other exit information.   Called at
    /// solver termination.
    fn print_footer(&self, settings: &Self::SE);
}

/// Internal information for the solver to monitor progress and check for termination.

pub trait Info<T>: InfoPrint<T>
where
    T: FloatT,
{
    type V: Variables<T>;
    type W: WorkingSet<T>;

    /// Reset internal data, particularly the solve timer, and fix the
    /// effective iteration limit for this problem.
    fn reset(&mut self, data: &Self::D, settings: &Self::SE);

    /// Update solver progress information.  Called once per iteration.
    #[allow(clippy::too_many_arguments)]
    fn update(
        &mut self,
        data: &Self::D,
        variables: &Self::V,
        wset: &Self::W,
        α: T,
        phase: Phase,
        iter: u32,
    );

    /// Return `true` if an iteration or time budget has been exhausted,
    /// setting the corresponding terminal status.
    fn check_termination(&mut self, settings: &Self::SE, iter: u32) -> bool;

    /// Compute final values before solver termination.
    fn finalize(&mut self);

    /// Report or update termination status
    fn get_status(&self) -> SolverStatus;
    fn set_status(&mut self, status: SolverStatus);
}

/// Solution for a dense QP/LP problem.

pub trait Solution<T: FloatT> {
    type D: ProblemData<T>;
    type V: Variables<T>;
    type I: Info<T>;

    /// Compute solution from the Variables at solver termination
    fn finalize(&mut self, data: &Self::D, variables: &Self::V, info: &Self::I);
}

/// Settings for a dense QP/LP problem.
///
/// Implementors of this trait can define any internal or problem
/// specific settings they wish.   They must, however, also maintain
/// a settings object of type [`CoreSettings`](crate::solver::core::CoreSettings)
/// and return this to the solver internally.

pub trait Settings<T: FloatT> {
    /// Return the core settings.
    fn core(&self) -> &super::CoreSettings<T>;

    /// Return the core settings (mutably).
    fn core_mut(&mut self) -> &mut super::CoreSettings<T>;
}
