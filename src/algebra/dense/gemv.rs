#![allow(non_snake_case)]
use crate::algebra::{Adjoint, FloatT, Matrix, MultiplyGEMV, ShapedMatrix, VectorMath};

// Native column-major kernels.  Operating down the columns keeps
// the inner loops contiguous in memory for both orientations.

impl<T> MultiplyGEMV for Matrix<T>
where
    T: FloatT,
{
    type T = T;
    // implements y = αA*x + βy
    fn gemv(&self, x: &[T], y: &mut [T], α: T, β: T) {
        let (m, n) = self.size();
        assert!(n == x.len() && m == y.len());

        if β == T::zero() {
            y.set(T::zero());
        } else if β != T::one() {
            y.scale(β);
        }

        for (j, &xj) in x.iter().enumerate() {
            let axj = α * xj;
            if axj == T::zero() {
                continue;
            }
            for (yi, &aij) in y.iter_mut().zip(self.col_slice(j)) {
                *yi += axj * aij;
            }
        }
    }
}

impl<'a, T> MultiplyGEMV for Adjoint<'a, Matrix<T>>
where
    T: FloatT,
{
    type T = T;
    // implements y = αA'*x + βy
    fn gemv(&self, x: &[T], y: &mut [T], α: T, β: T) {
        let (m, n) = self.src.size(); //NB: size of A, not A'
        assert!(m == x.len() && n == y.len());

        for (j, yj) in y.iter_mut().enumerate() {
            let colx = self.src.col_slice(j).dot(x);
            *yj = α * colx + β * (*yj);
        }
    }
}

#[test]
fn test_gemv() {
    let A = Matrix::from(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);

    let x = vec![1., 2., 3.];
    let mut y = vec![-1., -2.];
    A.gemv(&x, &mut y, 2.0, 3.0);
    assert!(y == [25.0, 58.0]);

    let x = vec![1., 2.];
    let mut y = vec![-1., -2., -3.];
    A.t().gemv(&x, &mut y, 2.0, 3.0);
    assert!(y == [15.0, 18.0, 21.0]);
}
