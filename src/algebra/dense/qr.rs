#![allow(non_snake_case)]
use crate::algebra::{AsFloatT, DenseFactorizationError, FloatT, Matrix, ShapedMatrix, VectorMath};

/// Engine for the Householder QR factorization `A = QR` of a dense
/// `m x k` matrix with `m >= k`.
///
/// The engine stores the Householder reflectors and the triangular
/// factor separately, so `Q` is never formed explicitly.  The last
/// `m - k` columns of `Q` span the nullspace of `A^T`, which is how
/// the solver obtains a basis for directions orthogonal to the
/// active constraint normals.
pub(crate) struct QREngine<T> {
    /// row dimension of the factored matrix
    pub m: usize,
    /// column dimension of the factored matrix
    pub k: usize,
    /// upper triangular factor (upper trapezoid of an m x k matrix)
    R: Matrix<T>,
    /// Householder vectors, one per factored column
    reflectors: Vec<Vec<T>>,
    /// squared norms of the Householder vectors.  Zero marks an
    /// identity reflector.
    vtv: Vec<T>,
}

impl<T> QREngine<T>
where
    T: FloatT,
{
    pub fn new() -> Self {
        Self {
            m: 0,
            k: 0,
            R: Matrix::zeros((0, 0)),
            reflectors: Vec::new(),
            vtv: Vec::new(),
        }
    }

    /// dimension of the nullspace of `A^T`
    pub fn nullity(&self) -> usize {
        self.m - self.k
    }

    /// Factor the matrix `A`, replacing any previous factorization.
    pub fn factor(&mut self, A: &Matrix<T>) -> Result<(), DenseFactorizationError> {
        let (m, k) = A.size();
        if m < k {
            return Err(DenseFactorizationError::IncompatibleDimension);
        }
        self.m = m;
        self.k = k;
        self.R = A.clone();
        self.reflectors.clear();
        self.vtv.clear();

        for j in 0..k {
            let mut v = self.R.col_slice(j)[j..m].to_vec();
            let normv = v.norm();
            let subnorm = v[1..].norm();

            if normv == T::zero() || subnorm <= T::epsilon() * normv {
                // column is already upper triangular
                self.reflectors.push(v);
                self.vtv.push(T::zero());
                continue;
            }

            // reflector v = x + sign(x_1)*||x||*e_1 sends the column
            // to -sign(x_1)*||x||*e_1.  The sign choice avoids
            // cancellation in the leading entry.
            let sign = if v[0] < T::zero() { -T::one() } else { T::one() };
            v[0] += sign * normv;
            let vtv = v.sumsq();

            self.R[(j, j)] = -sign * normv;
            for i in (j + 1)..m {
                self.R[(i, j)] = T::zero();
            }

            // apply the reflector to the remaining columns
            for c in (j + 1)..k {
                let col = &mut self.R.col_slice_mut(c)[j..m];
                let s = (2.).as_T() * v.dot(col) / vtv;
                col.axpby(-s, &v, T::one());
            }

            self.reflectors.push(v);
            self.vtv.push(vtv);
        }
        Ok(())
    }

    /// Apply `Q^T` to `v` in place.
    pub fn qt_mul(&self, v: &mut [T]) {
        assert!(v.len() == self.m);
        for j in 0..self.k {
            self.apply_reflector(j, v);
        }
    }

    /// Apply `Q` to `v` in place.
    pub fn q_mul(&self, v: &mut [T]) {
        assert!(v.len() == self.m);
        for j in (0..self.k).rev() {
            self.apply_reflector(j, v);
        }
    }

    fn apply_reflector(&self, j: usize, v: &mut [T]) {
        if self.vtv[j] == T::zero() {
            return;
        }
        let refl = &self.reflectors[j];
        let tail = &mut v[j..self.m];
        let s = (2.).as_T() * refl.dot(tail) / self.vtv[j];
        tail.axpby(-s, refl, T::one());
    }

    /// Solve `R x = b` over the leading `k x k` triangle, where `b` is
    /// the leading `k` entries of `x` on entry.
    pub fn r_solve(&self, x: &mut [T]) {
        assert!(x.len() >= self.k);
        for i in (0..self.k).rev() {
            let mut t = x[i];
            for c in (i + 1)..self.k {
                t -= self.R[(i, c)] * x[c];
            }
            x[i] = t / self.R[(i, i)];
        }
    }

    /// Smallest absolute diagonal of `R`, the rank indicator for the
    /// factored matrix.
    pub fn min_diag_r(&self) -> T {
        let mut out = T::infinity();
        for j in 0..self.k {
            out = T::min(out, T::abs(self.R[(j, j)]));
        }
        out
    }

    /// Materialize an orthonormal basis for the nullspace of `A^T` as
    /// an `m x (m - k)` matrix (the trailing columns of `Q`).
    pub fn null_basis(&self) -> Matrix<T> {
        let nz = self.nullity();
        let mut Z = Matrix::zeros((self.m, nz));
        let mut e = vec![T::zero(); self.m];
        for idx in 0..nz {
            e.set(T::zero());
            e[self.k + idx] = T::one();
            self.q_mul(&mut e);
            Z.col_slice_mut(idx).copy_from(&e);
        }
        Z
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::algebra::MultiplyGEMV;

    #[test]
    fn test_qr_solve() {
        // solve A*y = b for y through Q^T and R
        let A = Matrix::from(&[
            [2.0, 1.0], //
            [0.0, 1.0],
            [1.0, -1.0],
        ]);
        let ytrue = vec![3.0, -2.0];
        let mut b = vec![0.0; 3];
        A.gemv(&ytrue, &mut b, 1.0, 0.0);

        let mut qr = QREngine::new();
        qr.factor(&A).unwrap();
        assert_eq!(qr.nullity(), 1);

        qr.qt_mul(&mut b);
        qr.r_solve(&mut b);
        assert!(b[0..2].norm_inf_diff(&ytrue) < 1e-12);
    }

    #[test]
    fn test_qr_null_basis() {
        let A = Matrix::from(&[
            [2.0, 1.0], //
            [0.0, 1.0],
            [1.0, -1.0],
        ]);
        let mut qr = QREngine::new();
        qr.factor(&A).unwrap();

        let Z = qr.null_basis();
        assert_eq!(Z.size(), (3, 1));

        // basis column is unit norm and orthogonal to the columns of A
        let z = Z.col_slice(0);
        assert!((z.norm() - 1.0).abs() < 1e-12);
        assert!(z.dot(A.col_slice(0)).abs() < 1e-12);
        assert!(z.dot(A.col_slice(1)).abs() < 1e-12);
    }

    #[test]
    fn test_qr_rank_deficient() {
        // second column is a multiple of the first
        let A = Matrix::from(&[
            [1.0, 2.0], //
            [1.0, 2.0],
            [1.0, 2.0],
        ]);
        let mut qr = QREngine::new();
        qr.factor(&A).unwrap();
        assert!(qr.min_diag_r() < 1e-12);
    }
}
