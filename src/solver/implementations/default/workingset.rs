use super::*;
use crate::algebra::*;
use crate::solver::core::traits::{ProblemData, WorkingSet};
use crate::solver::core::ActiveBound;
use std::marker::PhantomData;

// ---------------
// Working set type for default problem format
// ---------------

/// An active row of the working set.
#[derive(PartialEq, Eq, Clone, Debug, Copy)]
pub struct ActiveRow {
    /// row index in the combined bound/constraint row space.  Rows
    /// `0..n` are variable bounds, rows `n..n+m` are constraints.
    pub row: usize,
    /// which bound of the row is held active
    pub bound: ActiveBound,
}

/// Standard-form solver type implementing the [`WorkingSet`](crate::solver::core::traits::WorkingSet) trait

pub struct DefaultWorkingSet<T> {
    /// active rows, in factorization order
    pub active: Vec<ActiveRow>,
    /// per-row activity marker over the combined row space
    is_active: Vec<bool>,
    phantom: PhantomData<T>,
}

impl<T> DefaultWorkingSet<T>
where
    T: FloatT,
{
    pub fn new(nrows: usize) -> Self {
        Self {
            active: Vec::new(),
            is_active: vec![false; nrows],
            phantom: PhantomData,
        }
    }

    /// true if the row is in the working set
    pub fn contains(&self, row: usize) -> bool {
        self.is_active[row]
    }
}

impl<T> WorkingSet<T> for DefaultWorkingSet<T>
where
    T: FloatT,
{
    type D = DefaultProblemData<T>;
    type V = DefaultVariables<T>;
    type SE = DefaultSettings<T>;

    fn reset(&mut self, data: &DefaultProblemData<T>) {
        self.active.clear();
        self.is_active.clear();
        self.is_active.resize(data.nrows(), false);
    }

    fn len(&self) -> usize {
        self.active.len()
    }

    fn initial_candidates(
        &self,
        data: &DefaultProblemData<T>,
        variables: &DefaultVariables<T>,
        settings: &DefaultSettings<T>,
    ) -> Vec<(usize, ActiveBound)> {
        let tol = settings.tol_feas * data.scale();
        let mut out = Vec::new();

        // equality rows first: once active they are never dropped
        for row in 0..data.nrows() {
            if data.bl[row] == data.bu[row] && T::abs(variables.v[row] - data.bl[row]) <= tol {
                out.push((row, ActiveBound::Fixed));
            }
        }
        for row in 0..data.nrows() {
            if data.bl[row] == data.bu[row] {
                continue;
            }
            if data.bl[row].is_finite() && T::abs(variables.v[row] - data.bl[row]) <= tol {
                out.push((row, ActiveBound::Lower));
            } else if data.bu[row].is_finite() && T::abs(variables.v[row] - data.bu[row]) <= tol {
                out.push((row, ActiveBound::Upper));
            }
        }
        out
    }

    fn add(&mut self, row: usize, bound: ActiveBound) {
        debug_assert!(!self.is_active[row]);
        self.active.push(ActiveRow { row, bound });
        self.is_active[row] = true;
    }

    fn remove(&mut self, position: usize) {
        let ar = self.active.remove(position);
        self.is_active[ar.row] = false;
    }

    fn remove_last(&mut self) {
        if let Some(ar) = self.active.pop() {
            self.is_active[ar.row] = false;
        }
    }

    fn most_violating(
        &self,
        variables: &DefaultVariables<T>,
        settings: &DefaultSettings<T>,
    ) -> Option<usize> {
        // optimality requires λ >= 0 on lower-bound activations and
        // λ <= 0 on upper-bound activations.  Equality rows carry no
        // sign restriction.
        let tol = settings.tol_optimality * T::max(T::one(), variables.g.norm_inf());

        let mut out = None;
        let mut worst = tol;
        for (position, ar) in self.active.iter().enumerate() {
            let λ = variables.λ[ar.row];
            let violation = match ar.bound {
                ActiveBound::Lower => -λ,
                ActiveBound::Upper => λ,
                ActiveBound::Fixed => continue,
            };
            if violation > worst {
                worst = violation;
                out = Some(position);
            }
        }
        out
    }
}
