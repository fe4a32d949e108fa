#![allow(non_snake_case)]
use crate::algebra::{DenseFactorizationError, FloatT, Matrix, ShapedMatrix};

/// Engine for the Cholesky factorization `A = LL^T` of a symmetric
/// positive definite matrix.
///
/// The factorization is unpivoted, with the lower triangular factor
/// held in `L`.  A non-positive pivot aborts the factorization and
/// reports the 1-based index of the offending leading minor, which is
/// how the engine distinguishes an indefinite or rank-deficient
/// reduced Hessian from an ordinary solve.
pub(crate) struct CholeskyEngine<T> {
    /// lower triangular factor.  Entries above the diagonal are not used.
    pub L: Matrix<T>,
}

impl<T> CholeskyEngine<T>
where
    T: FloatT,
{
    pub fn new(n: usize) -> Self {
        Self {
            L: Matrix::zeros((n, n)),
        }
    }

    /// Factor the symmetric matrix `A`, with `shift` added to the
    /// diagonal.   Only the lower triangle of `A` is referenced.
    pub fn factor(&mut self, A: &Matrix<T>, shift: T) -> Result<(), DenseFactorizationError> {
        if !A.is_square() || A.nrows() != self.L.nrows() {
            return Err(DenseFactorizationError::IncompatibleDimension);
        }
        let n = A.nrows();
        let L = &mut self.L;

        // pivots smaller than this are treated as non-positive
        let mut maxdiag = T::zero();
        for j in 0..n {
            maxdiag = T::max(maxdiag, T::abs(A[(j, j)] + shift));
        }
        let pivtol = T::epsilon() * T::max(T::one(), maxdiag);

        for j in 0..n {
            let mut t = A[(j, j)] + shift;
            for k in 0..j {
                t -= L[(j, k)] * L[(j, k)];
            }
            if t <= pivtol {
                // positive value k means non-positive pivot leading minor k
                return Err(DenseFactorizationError::Cholesky(j + 1));
            }
            L[(j, j)] = t.sqrt();

            for i in (j + 1)..n {
                let mut t = A[(i, j)];
                for k in 0..j {
                    t -= L[(i, k)] * L[(j, k)];
                }
                L[(i, j)] = t / L[(j, j)];
            }
        }
        Ok(())
    }

    /// Solve `LL^T x = b` by forward and backward substitution.
    pub fn solve(&self, x: &mut [T], b: &[T]) {
        let n = self.L.nrows();
        assert!(x.len() == n && b.len() == n);
        let L = &self.L;

        // Forward substitution: solve Lc = b, with c stored in x
        for i in 0..n {
            let mut t = b[i];
            for k in 0..i {
                t -= L[(i, k)] * x[k];
            }
            x[i] = t / L[(i, i)];
        }

        // Backward substitution: solve L^T x = c
        for i in (0..n).rev() {
            let mut t = x[i];
            for k in (i + 1)..n {
                t -= L[(k, i)] * x[k];
            }
            x[i] = t / L[(i, i)];
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::algebra::{MultiplyGEMV, VectorMath};

    #[test]
    fn test_cholesky_factor_solve() {
        let A = Matrix::from(&[
            [4.0, -2.0, 1.0], //
            [-2.0, 6.0, 2.0],
            [1.0, 2.0, 9.0],
        ]);

        let xtrue = vec![1.0, 2.0, 3.0];
        let mut b = vec![0.0; 3];
        A.gemv(&xtrue, &mut b, 1.0, 0.0);

        let mut chol = CholeskyEngine::new(3);
        chol.factor(&A, 0.0).unwrap();

        let mut xsolve = vec![0.0; 3];
        chol.solve(&mut xsolve, &b);

        assert!(xsolve.norm_inf_diff(&xtrue) < 1e-10);
    }

    #[test]
    fn test_cholesky_indefinite() {
        let A = Matrix::from(&[
            [1.0, 2.0], //
            [2.0, 1.0],
        ]);

        let mut chol = CholeskyEngine::new(2);
        let err = chol.factor(&A, 0.0);
        assert!(matches!(err, Err(DenseFactorizationError::Cholesky(2))));

        // a large enough diagonal shift rescues the factorization
        assert!(chol.factor(&A, 2.0).is_ok());
    }
}
