#![allow(non_snake_case)]
use super::*;
use crate::algebra::*;
use crate::solver::core::hessian::QuadraticForm;
use crate::solver::core::traits::{KKTSystem, ProblemData, WorkingSet};
use crate::solver::core::{Phase, SearchDirection};

// ---------------
// KKT system for the default problem format
// ---------------

/// Standard-form solver type implementing the [`KKTSystem`](crate::solver::core::traits::KKTSystem) trait
///
/// The working-set subproblem is solved by the nullspace method: a
/// Householder QR factorization of the active-normal matrix `C'` supplies
/// an orthonormal basis `Z` for directions that keep the active rows
/// fixed, and the reduced Hessian `Z'HZ` is factored by dense Cholesky.
/// A factorization that fails on the reduced Hessian is retried exactly
/// once with a diagonal regularization before the solver reports a
/// numerical failure.

pub struct DefaultKKTSystem<T> {
    /// QR factorization of the active-normal matrix `C'` (n x k)
    qr: QREngine<T>,
    /// nullspace basis of the active normals (n x nz)
    Z: Matrix<T>,
    /// reduced Hessian factorization, when the subproblem has positive
    /// curvature
    hz_chol: Option<CholeskyEngine<T>>,
    /// the reduced Hessian is numerically zero on the nullspace
    zero_curvature: bool,
    /// the reduced Hessian factorization required regularization
    regularized: bool,
    /// the reduced Hessian factorization failed even after the
    /// regularized retry
    failed: bool,
    // scratch
    d: Vec<T>,
    work_n: Vec<T>,
    pz: Vec<T>,
}

impl<T> DefaultKKTSystem<T>
where
    T: FloatT,
{
    pub fn new(n: usize) -> Self {
        Self {
            qr: QREngine::new(),
            Z: Matrix::zeros((n, 0)),
            hz_chol: None,
            zero_curvature: true,
            regularized: false,
            failed: false,
            d: Vec::with_capacity(n),
            work_n: vec![T::zero(); n],
            pz: Vec::with_capacity(n),
        }
    }

    fn factor_reduced_hessian(
        &mut self,
        data: &DefaultProblemData<T>,
        settings: &DefaultSettings<T>,
    ) {
        self.hz_chol = None;
        self.zero_curvature = true;
        self.regularized = false;
        self.failed = false;

        let nz = self.Z.ncols();
        if data.hessian.is_zero() || nz == 0 {
            return;
        }

        // Hz = Z'HZ, built one column at a time
        let mut Hz = Matrix::zeros((nz, nz));
        for i in 0..nz {
            data.hessian.mul(&mut self.work_n, self.Z.col_slice(i));
            for j in 0..nz {
                Hz[(j, i)] = self.Z.col_slice(j).dot(&self.work_n);
            }
        }

        let hznorm = Hz.norm_inf();
        if hznorm <= T::epsilon() * data.scale() {
            // curvature vanishes on the nullspace; the subproblem is
            // treated as linear
            return;
        }
        self.zero_curvature = false;

        let mut chol = CholeskyEngine::new(nz);
        if chol.factor(&Hz, T::zero()).is_ok() {
            self.hz_chol = Some(chol);
            return;
        }

        // single retry with a diagonal shift large enough to make the
        // regularized matrix positive definite (Gershgorin bound)
        let shift = gershgorin_excess(&Hz)
            + settings.static_regularization_constant * T::max(T::one(), hznorm);
        if chol.factor(&Hz, shift).is_ok() {
            self.hz_chol = Some(chol);
            self.regularized = true;
        } else {
            self.failed = true;
        }
    }
}

impl<T> KKTSystem<T> for DefaultKKTSystem<T>
where
    T: FloatT,
{
    type D = DefaultProblemData<T>;
    type V = DefaultVariables<T>;
    type W = DefaultWorkingSet<T>;
    type SE = DefaultSettings<T>;

    fn update(
        &mut self,
        data: &DefaultProblemData<T>,
        wset: &DefaultWorkingSet<T>,
        settings: &DefaultSettings<T>,
    ) -> bool {
        let (n, _) = data.dims();
        let k = wset.len();

        // assemble C', one column per active row normal
        let mut Ct = Matrix::zeros((n, k));
        for (j, ar) in wset.active.iter().enumerate() {
            let col = Ct.col_slice_mut(j);
            if ar.row < n {
                col[ar.row] = T::one();
            } else {
                data.A.row_copy(ar.row - n, col);
            }
        }

        if self.qr.factor(&Ct).is_err() {
            return false;
        }

        // rank test on the R diagonal
        if k > 0 && self.qr.min_diag_r() <= settings.tol_rank * data.scale() {
            return false;
        }

        self.Z = self.qr.null_basis();
        self.factor_reduced_hessian(data, settings);
        true
    }

    fn search_direction(
        &mut self,
        step: &mut DefaultVariables<T>,
        variables: &DefaultVariables<T>,
        data: &DefaultProblemData<T>,
        wset: &DefaultWorkingSet<T>,
        phase: Phase,
        settings: &DefaultSettings<T>,
    ) -> Option<SearchDirection<T>> {
        let (n, _) = data.dims();
        debug_assert!(wset.len() == self.qr.k);
        let nz = self.qr.nullity();

        // reduced gradient d = Z'g from the trailing rows of Q'g
        self.work_n.copy_from(&variables.g);
        self.qr.qt_mul(&mut self.work_n);
        self.d.clear();
        self.d.extend_from_slice(&self.work_n[self.qr.k..n]);

        if nz == 0 || self.d.norm_inf() <= settings.tol_optimality * data.scale() {
            return Some(SearchDirection::Stationary);
        }

        // reduced step: Newton when the reduced Hessian is available,
        // projected steepest descent otherwise
        let use_hessian = phase == Phase::Optimality && !data.hessian.is_zero();
        self.pz.clear();
        self.pz.resize(nz, T::zero());

        let newton = {
            if !use_hessian || self.zero_curvature {
                self.pz.scalarop_from(|d| -d, &self.d);
                false
            } else if self.failed {
                return None;
            } else {
                let chol = self.hz_chol.as_ref().unwrap();
                self.work_n[..nz].scalarop_from(|d| -d, &self.d);
                chol.solve(&mut self.pz, &self.work_n[..nz]);
                true
            }
        };

        // p = Z pz, with row rates [p; Ap]
        self.Z.gemv(&self.pz, &mut step.x, T::one(), T::zero());
        step.v[0..n].copy_from(&step.x);
        data.A
            .gemv(&step.x, &mut step.v[n..], T::one(), T::zero());

        // step length reaching the subproblem minimizer.  An exact
        // factorization lands on it at unit step; a regularized system
        // or descent direction takes an exact line search instead, with
        // zero curvature leaving the step unbounded.
        let α_full = {
            if newton && !self.regularized {
                T::one()
            } else if !use_hessian {
                T::infinity()
            } else {
                data.hessian.mul(&mut self.work_n, &step.x);
                let κ = step.x.dot(&self.work_n);
                let gp = variables.g.dot(&step.x);
                if κ > T::epsilon() * data.scale() {
                    -gp / κ
                } else {
                    T::infinity()
                }
            }
        };

        Some(SearchDirection::Step { α_full })
    }

    fn multipliers(&self, variables: &mut DefaultVariables<T>, wset: &DefaultWorkingSet<T>) {
        // λ_W solves R λ = (Q'g)[0..k], the least squares multipliers
        // for g ≈ C'λ, then scatters into the combined row space
        let mut u = variables.g.clone();
        self.qr.qt_mul(&mut u);
        self.qr.r_solve(&mut u);

        variables.λ.set(T::zero());
        for (j, ar) in wset.active.iter().enumerate() {
            variables.λ[ar.row] = u[j];
        }
    }
}

// smallest diagonal shift that makes every Gershgorin disc of `A`
// sit in the right half plane
fn gershgorin_excess<T: FloatT>(A: &Matrix<T>) -> T {
    let n = A.nrows();
    let mut lo = T::infinity();
    for i in 0..n {
        let mut radius = T::zero();
        for j in 0..n {
            if i != j {
                radius += T::abs(A[(i, j)]);
            }
        }
        lo = T::min(lo, A[(i, i)] - radius);
    }
    T::max(T::zero(), -lo)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_gershgorin_excess() {
        // diagonally dominant PSD matrix needs no shift
        let A = Matrix::from(&[[2.0, 1.0], [1.0, 2.0]]);
        assert_eq!(gershgorin_excess(&A), 0.0);

        // indefinite matrix needs a positive shift
        let A = Matrix::from(&[[0.0, 2.0], [2.0, 0.0]]);
        assert_eq!(gershgorin_excess(&A), 2.0);
    }
}
