#![allow(non_snake_case)]
use super::*;
use crate::algebra::*;
use crate::solver::core::hessian::*;
use crate::solver::core::Solver;

/// Solver for dense QP/LP problems in standard form

pub type DefaultSolver<T = f64> = Solver<
    DefaultProblemData<T>,
    DefaultVariables<T>,
    DefaultWorkingSet<T>,
    DefaultKKTSystem<T>,
    DefaultInfo<T>,
    DefaultSolution<T>,
    DefaultSettings<T>,
>;

impl<T> DefaultSolver<T>
where
    T: FloatT,
{
    /// Create a solver for the problem
    ///
    /// ```text
    /// minimize    0.5 x'Hx + c'x
    /// subject to  bl_c <= A*x <= bu_c
    ///             bl_x <=  x  <= bu_x
    /// ```
    ///
    /// with an optional dense Hessian `H` (`None` solves an LP) and an
    /// optional starting point `x0` (`None` starts from the origin).
    /// Either starting point is projected onto the variable bounds.
    ///
    /// Errors if the problem data fails validation; see
    /// [`InvalidProblemError`](crate::solver::implementations::default::InvalidProblemError).
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        c: &[T],
        H: Option<&Matrix<T>>,
        A: &Matrix<T>,
        bl_c: &[T],
        bu_c: &[T],
        bl_x: &[T],
        bu_x: &[T],
        x0: Option<&[T]>,
        settings: DefaultSettings<T>,
    ) -> Result<Self, InvalidProblemError> {
        let hessian: Hessian<T> = match H {
            Some(H) => DenseHessian::new(H.clone()).into(),
            None => ZeroHessian::default().into(),
        };
        Self::new_with_hessian(c, hessian, A, bl_c, bu_c, bl_x, bu_x, x0, settings)
    }

    /// Create a solver with the quadratic term given as a
    /// [`Hessian`](crate::solver::core::hessian::Hessian) strategy, e.g.
    /// a Hessian-vector product operator.
    #[allow(clippy::too_many_arguments)]
    pub fn new_with_hessian(
        c: &[T],
        hessian: Hessian<T>,
        A: &Matrix<T>,
        bl_c: &[T],
        bu_c: &[T],
        bl_x: &[T],
        bu_x: &[T],
        x0: Option<&[T]>,
        settings: DefaultSettings<T>,
    ) -> Result<Self, InvalidProblemError> {
        let data = DefaultProblemData::new(
            c,
            hessian,
            A,
            bl_c,
            bu_c,
            bl_x,
            bu_x,
            x0,
            settings.infinite_bound,
        )?;
        let (n, m) = (data.n, data.m);

        let variables = DefaultVariables::new(n, m);
        let workingset = DefaultWorkingSet::new(n + m);
        let kktsystem = DefaultKKTSystem::new(n);
        let info = DefaultInfo::new();

        // work variables for the step direction
        let step = DefaultVariables::new(n, m);

        // user facing results go here
        let solution = DefaultSolution::new(n, m);

        Ok(Self {
            data,
            variables,
            workingset,
            kktsystem,
            step,
            info,
            solution,
            settings,
        })
    }
}
