use super::*;
use crate::algebra::*;
use crate::solver::core::traits::{ProblemData, Variables};
use crate::solver::core::{ActiveBound, Phase, StepLimit};
use itertools::izip;

// ---------------
// Variables type for default problem format
// ---------------

/// Standard-form solver type implementing the [`Variables`](crate::solver::core::traits::Variables) trait
///
/// The same type doubles as the solver's step direction, in which case
/// `x` holds the direction `p` and `v` holds the row rates `[p; Ap]`.

pub struct DefaultVariables<T> {
    /// primal variables
    pub x: Vec<T>,
    /// combined row values `[x; Ax]`
    pub v: Vec<T>,
    /// multiplier estimates for the combined rows
    pub λ: Vec<T>,
    /// gradient of the current phase objective
    pub(crate) g: Vec<T>,
    /// scratch for the phase-1 constraint sign vector
    svec: Vec<T>,
}

impl<T> DefaultVariables<T>
where
    T: FloatT,
{
    pub fn new(n: usize, m: usize) -> Self {
        Self {
            x: vec![T::zero(); n],
            v: vec![T::zero(); n + m],
            λ: vec![T::zero(); n + m],
            g: vec![T::zero(); n],
            svec: vec![T::zero(); m],
        }
    }

    /// refresh the combined row values from the current `x`
    fn refresh_rows(&mut self, data: &DefaultProblemData<T>) {
        let n = data.n;
        self.v[0..n].copy_from(&self.x);
        data.A.gemv(&self.x, &mut self.v[n..], T::one(), T::zero());
    }
}

impl<T> Variables<T> for DefaultVariables<T>
where
    T: FloatT,
{
    type D = DefaultProblemData<T>;
    type W = DefaultWorkingSet<T>;
    type SE = DefaultSettings<T>;

    fn initialize(&mut self, data: &DefaultProblemData<T>) {
        self.x.copy_from(&data.x0);
        self.refresh_rows(data);
        self.λ.set(T::zero());
        self.g.set(T::zero());
    }

    fn is_feasible(&self, data: &DefaultProblemData<T>, settings: &DefaultSettings<T>) -> bool {
        let tol = settings.tol_feas * data.scale();
        izip!(&self.v, &data.bl, &data.bu).all(|(&v, &bl, &bu)| v >= bl - tol && v <= bu + tol)
    }

    fn infeasibility(&self, data: &DefaultProblemData<T>) -> T {
        let mut total = T::zero();
        for (&v, &bl, &bu) in izip!(&self.v, &data.bl, &data.bu) {
            if v < bl {
                total += bl - v;
            } else if v > bu {
                total += v - bu;
            }
        }
        total
    }

    fn objective(&self, data: &DefaultProblemData<T>) -> T {
        data.objective(&self.x)
    }

    fn update_gradient(&mut self, data: &DefaultProblemData<T>, phase: Phase) {
        match phase {
            Phase::Optimality => {
                data.objective_gradient(&mut self.g, &self.x);
            }
            Phase::Feasibility => {
                // gradient of the sum of infeasibilities: +a_r for rows
                // above their upper bound, -a_r for rows below their lower
                let n = data.n;
                self.g.set(T::zero());
                for j in 0..n {
                    if self.v[j] < data.bl[j] {
                        self.g[j] = -T::one();
                    } else if self.v[j] > data.bu[j] {
                        self.g[j] = T::one();
                    }
                }
                for (s, &v, &bl, &bu) in izip!(
                    &mut self.svec,
                    &self.v[n..],
                    &data.bl[n..],
                    &data.bu[n..]
                ) {
                    *s = if v < bl {
                        -T::one()
                    } else if v > bu {
                        T::one()
                    } else {
                        T::zero()
                    };
                }
                data.A
                    .t()
                    .gemv(&self.svec, &mut self.g, T::one(), T::one());
            }
        }
    }

    fn max_step(
        &self,
        data: &DefaultProblemData<T>,
        wset: &DefaultWorkingSet<T>,
        step: &Self,
        α_full: T,
        settings: &DefaultSettings<T>,
    ) -> StepLimit<T> {
        let tol = settings.tol_feas * data.scale();
        // rates below this threshold are treated as not moving the row
        let ρtol = T::epsilon() * T::max(T::one(), step.v.norm_inf());

        let mut α = α_full;
        let mut blocking = None;

        // ascending scan with a strict comparison resolves ratio-test
        // ties in favor of the lowest row index
        for row in 0..data.nrows() {
            if wset.contains(row) {
                continue;
            }
            let ρ = step.v[row];
            let v = self.v[row];
            let (bl, bu) = (data.bl[row], data.bu[row]);

            let (α_row, bound) = {
                if ρ > ρtol {
                    if bl.is_finite() && v < bl - tol {
                        // violated below and recovering: the row becomes
                        // active when it reaches its lower bound
                        ((bl - v) / ρ, lower_or_fixed(bl, bu))
                    } else if bu.is_finite() && v <= bu + tol {
                        ((bu - v) / ρ, upper_or_fixed(bl, bu))
                    } else {
                        continue;
                    }
                } else if ρ < -ρtol {
                    if bu.is_finite() && v > bu + tol {
                        // violated above and recovering
                        ((bu - v) / ρ, upper_or_fixed(bl, bu))
                    } else if bl.is_finite() && v >= bl - tol {
                        ((bl - v) / ρ, lower_or_fixed(bl, bu))
                    } else {
                        continue;
                    }
                } else {
                    continue;
                }
            };

            let α_row = T::max(α_row, T::zero());
            if α_row < α {
                α = α_row;
                blocking = Some((row, bound));
            }
        }

        StepLimit { α, blocking }
    }

    fn add_step(&mut self, step: &Self, α: T) {
        self.x.axpby(α, &step.x, T::one());
        self.v.axpby(α, &step.v, T::one());
    }
}

fn lower_or_fixed<T: FloatT>(bl: T, bu: T) -> ActiveBound {
    if bl == bu {
        ActiveBound::Fixed
    } else {
        ActiveBound::Lower
    }
}

fn upper_or_fixed<T: FloatT>(bl: T, bu: T) -> ActiveBound {
    if bl == bu {
        ActiveBound::Fixed
    } else {
        ActiveBound::Upper
    }
}
