#![allow(non_snake_case)]
use super::*;
use crate::algebra::*;
use crate::solver::core::hessian::*;
use crate::solver::core::traits::ProblemData;
use thiserror::Error;

// ---------------
// Error type for problem validation
// ---------------

/// Error type returned for problems rejected by input validation.
///
/// Structural defects in the user data are always reported here, before
/// any iteration runs, so the engine itself only ever sees well-formed
/// problems.
#[derive(Error, Debug)]
pub enum InvalidProblemError {
    /// The problem must have at least one variable
    #[error("problem has no variables")]
    EmptyProblem,
    /// A matrix has dimensions inconsistent with the problem
    #[error("dimension mismatch: {name} is {actual_rows}x{actual_cols}, expected {expected_rows}x{expected_cols}")]
    MatrixDimensionMismatch {
        /// matrix name
        name: &'static str,
        /// actual row count
        actual_rows: usize,
        /// actual column count
        actual_cols: usize,
        /// expected row count
        expected_rows: usize,
        /// expected column count
        expected_cols: usize,
    },
    /// A vector has a length inconsistent with the problem
    #[error("dimension mismatch: {name} has length {actual}, expected {expected}")]
    VectorDimensionMismatch {
        /// vector name
        name: &'static str,
        /// actual length
        actual: usize,
        /// expected length
        expected: usize,
    },
    /// The Hessian matrix is not symmetric
    #[error("Hessian matrix is not symmetric")]
    AsymmetricHessian,
    /// Variable bounds with lower exceeding upper
    #[error("variable bounds cross at index {index}")]
    VariableBoundsCrossed {
        /// 0-based variable index
        index: usize,
    },
    /// Constraint bounds with lower exceeding upper
    #[error("constraint bounds cross at index {index}")]
    ConstraintBoundsCrossed {
        /// 0-based constraint index
        index: usize,
    },
    /// Data that must be finite contains an Inf or NaN entry
    #[error("{name} contains non-finite values")]
    NonFiniteData {
        /// offending array name
        name: &'static str,
    },
    /// A bound array contains a NaN entry
    #[error("{name} contains NaN values")]
    NaNBound {
        /// offending array name
        name: &'static str,
    },
}

// ---------------
// Data type for default problem format
// ---------------

/// Standard-form solver type implementing the [`ProblemData`](crate::solver::core::traits::ProblemData) trait

pub struct DefaultProblemData<T> {
    /// cost vector
    pub c: Vec<T>,
    /// quadratic term of the objective
    pub hessian: Hessian<T>,
    /// dense constraint matrix
    pub A: Matrix<T>,
    /// combined row lower bounds: variables first, then constraints.
    /// Unbounded directions hold `-inf`.
    pub bl: Vec<T>,
    /// combined row upper bounds: variables first, then constraints.
    /// Unbounded directions hold `+inf`.
    pub bu: Vec<T>,
    /// number of variables
    pub n: usize,
    /// number of linear constraints
    pub m: usize,
    /// starting point, projected onto the variable bounds
    pub(crate) x0: Vec<T>,
    /// infinity norm of the problem data, used to scale tolerances
    pub(crate) data_scale: T,
}

impl<T> DefaultProblemData<T>
where
    T: FloatT,
{
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        c: &[T],
        hessian: Hessian<T>,
        A: &Matrix<T>,
        bl_c: &[T],
        bu_c: &[T],
        bl_x: &[T],
        bu_x: &[T],
        x0: Option<&[T]>,
        infinite_bound: T,
    ) -> Result<Self, InvalidProblemError> {
        let n = c.len();
        let m = bl_c.len();

        if n == 0 {
            return Err(InvalidProblemError::EmptyProblem);
        }
        if A.size() != (m, n) {
            return Err(InvalidProblemError::MatrixDimensionMismatch {
                name: "A",
                actual_rows: A.nrows(),
                actual_cols: A.ncols(),
                expected_rows: m,
                expected_cols: n,
            });
        }
        check_vector_dim("bu_c", bu_c, m)?;
        check_vector_dim("bl_x", bl_x, n)?;
        check_vector_dim("bu_x", bu_x, n)?;
        if let Some(x0) = x0 {
            check_vector_dim("x0", x0, n)?;
        }

        if let Hessian::Dense(dh) = &hessian {
            if dh.H.size() != (n, n) {
                return Err(InvalidProblemError::MatrixDimensionMismatch {
                    name: "H",
                    actual_rows: dh.H.nrows(),
                    actual_cols: dh.H.ncols(),
                    expected_rows: n,
                    expected_cols: n,
                });
            }
            if !dh.H.data.is_finite() {
                return Err(InvalidProblemError::NonFiniteData { name: "H" });
            }
            if !dh.H.is_symmetric() {
                return Err(InvalidProblemError::AsymmetricHessian);
            }
        }

        if !c.is_finite() {
            return Err(InvalidProblemError::NonFiniteData { name: "c" });
        }
        if !A.data.is_finite() {
            return Err(InvalidProblemError::NonFiniteData { name: "A" });
        }
        if let Some(x0) = x0 {
            if !x0.is_finite() {
                return Err(InvalidProblemError::NonFiniteData { name: "x0" });
            }
        }
        check_bound_nan("bl_x", bl_x)?;
        check_bound_nan("bu_x", bu_x)?;
        check_bound_nan("bl_c", bl_c)?;
        check_bound_nan("bu_c", bu_c)?;

        // assemble the combined row bounds, variables first, with
        // infinite sentinels normalized so that downstream arithmetic
        // never compares against the threshold value itself
        let mut bl = Vec::with_capacity(n + m);
        let mut bu = Vec::with_capacity(n + m);
        bl.extend_from_slice(bl_x);
        bl.extend_from_slice(bl_c);
        bu.extend_from_slice(bu_x);
        bu.extend_from_slice(bu_c);

        bl.scalarop(|v| normalize_bound(v, infinite_bound));
        bu.scalarop(|v| normalize_bound(v, infinite_bound));

        for r in 0..(n + m) {
            // a +inf lower or -inf upper bound is unsatisfiable and is
            // reported as crossed
            let crossed = bl[r] > bu[r]
                || (bl[r].is_infinite() && bl[r] > T::zero())
                || (bu[r].is_infinite() && bu[r] < T::zero());
            if crossed {
                return Err(if r < n {
                    InvalidProblemError::VariableBoundsCrossed { index: r }
                } else {
                    InvalidProblemError::ConstraintBoundsCrossed { index: r - n }
                });
            }
        }

        // starting point: user guess or the origin, projected onto the
        // variable bounds
        let mut x0 = match x0 {
            Some(x0) => x0.to_vec(),
            None => vec![T::zero(); n],
        };
        for (j, x) in x0.iter_mut().enumerate() {
            *x = x.clip(bl[j], bu[j]);
        }

        let data_scale = {
            let mut scale = T::max(c.norm_inf(), A.norm_inf());
            if let Hessian::Dense(dh) = &hessian {
                scale = T::max(scale, dh.H.norm_inf());
            }
            T::max(T::one(), scale)
        };

        Ok(Self {
            c: c.to_vec(),
            hessian,
            A: A.clone(),
            bl,
            bu,
            n,
            m,
            x0,
            data_scale,
        })
    }

    /// Objective value `0.5 x'Hx + c'x` at `x`.
    pub fn objective(&self, x: &[T]) -> T {
        let mut work = vec![T::zero(); self.n];
        let quad = self.hessian.quad_form(x, &mut work);
        quad / (2.).as_T() + self.c.dot(x)
    }

    /// Objective gradient `Hx + c` at `x`, written into `g`.
    pub(crate) fn objective_gradient(&self, g: &mut [T], x: &[T]) {
        self.hessian.mul(g, x);
        g.axpby(T::one(), &self.c, T::one());
    }
}

impl<T> ProblemData<T> for DefaultProblemData<T>
where
    T: FloatT,
{
    type SE = DefaultSettings<T>;

    fn dims(&self) -> (usize, usize) {
        (self.n, self.m)
    }

    fn scale(&self) -> T {
        self.data_scale
    }
}

// ---------------
// utilities
// ---------------

fn check_vector_dim<T>(
    name: &'static str,
    v: &[T],
    expected: usize,
) -> Result<(), InvalidProblemError> {
    if v.len() == expected {
        Ok(())
    } else {
        Err(InvalidProblemError::VectorDimensionMismatch {
            name,
            actual: v.len(),
            expected,
        })
    }
}

fn check_bound_nan<T: FloatT>(name: &'static str, v: &[T]) -> Result<(), InvalidProblemError> {
    if v.iter().any(|x| x.is_nan()) {
        Err(InvalidProblemError::NaNBound { name })
    } else {
        Ok(())
    }
}

fn normalize_bound<T: FloatT>(v: T, infinite_bound: T) -> T {
    if v >= infinite_bound {
        T::infinity()
    } else if v <= -infinite_bound {
        -T::infinity()
    } else {
        v
    }
}
