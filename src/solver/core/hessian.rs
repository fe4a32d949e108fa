#![allow(non_snake_case)]
//! Strategies for the quadratic term of the objective.
//!
//! The engine only ever needs the product of the Hessian with a vector,
//! so the quadratic term is represented behind the
//! [`QuadraticForm`](crate::solver::core::hessian::QuadraticForm) trait.
//! A problem may supply the Hessian as an explicit dense matrix, omit it
//! entirely (an LP), or provide a Hessian-vector product callback when
//! forming the matrix explicitly would be wasteful.

use crate::algebra::*;
use enum_dispatch::enum_dispatch;
use std::marker::PhantomData;

/// Operations required of a quadratic objective term.
#[enum_dispatch]
pub trait QuadraticForm<T: FloatT> {
    /// compute `y = H*x`
    fn mul(&self, y: &mut [T], x: &[T]);

    /// true when the quadratic term is identically zero (the LP case)
    fn is_zero(&self) -> bool;
}

/// The quadratic term of an objective, selected at problem construction.
#[enum_dispatch(QuadraticForm<T>)]
pub enum Hessian<T: FloatT> {
    /// no quadratic term (linear program)
    Zero(ZeroHessian<T>),
    /// explicit dense symmetric matrix
    Dense(DenseHessian<T>),
    /// caller-supplied Hessian-vector product
    Operator(HessianOperator<T>),
}

impl<T> Hessian<T>
where
    T: FloatT,
{
    /// the quadratic form `x'Hx`, using `work` as scratch for `Hx`
    pub fn quad_form(&self, x: &[T], work: &mut [T]) -> T {
        if self.is_zero() {
            return T::zero();
        }
        self.mul(work, x);
        x.dot(work)
    }
}

/// Quadratic term of an LP: identically zero.
#[derive(Default)]
pub struct ZeroHessian<T> {
    phantom: PhantomData<T>,
}

impl<T> QuadraticForm<T> for ZeroHessian<T>
where
    T: FloatT,
{
    fn mul(&self, y: &mut [T], _x: &[T]) {
        y.set(T::zero());
    }
    fn is_zero(&self) -> bool {
        true
    }
}

/// Quadratic term held as an explicit dense symmetric matrix.
pub struct DenseHessian<T> {
    pub(crate) H: Matrix<T>,
}

impl<T> DenseHessian<T>
where
    T: FloatT,
{
    pub fn new(H: Matrix<T>) -> Self {
        Self { H }
    }
}

impl<T> QuadraticForm<T> for DenseHessian<T>
where
    T: FloatT,
{
    fn mul(&self, y: &mut [T], x: &[T]) {
        self.H.gemv(x, y, T::one(), T::zero());
    }
    fn is_zero(&self) -> bool {
        false
    }
}

/// Quadratic term supplied as a Hessian-vector product callback.
///
/// The callback must write `H*x` into its first argument and behave as a
/// pure function of its second; the engine may call it any number of
/// times per iteration.
pub struct HessianOperator<T> {
    op: Box<dyn Fn(&mut [T], &[T]) + Send>,
}

impl<T> HessianOperator<T>
where
    T: FloatT,
{
    pub fn new(op: impl Fn(&mut [T], &[T]) + Send + 'static) -> Self {
        Self { op: Box::new(op) }
    }
}

impl<T> QuadraticForm<T> for HessianOperator<T>
where
    T: FloatT,
{
    fn mul(&self, y: &mut [T], x: &[T]) {
        (self.op)(y, x)
    }
    fn is_zero(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_hessian_dispatch() {
        let x = vec![1.0, 2.0];
        let mut y = vec![0.0; 2];

        let H: Hessian<f64> = ZeroHessian::default().into();
        assert!(H.is_zero());
        H.mul(&mut y, &x);
        assert_eq!(y, [0.0, 0.0]);

        let H: Hessian<f64> = DenseHessian::new(Matrix::from(&[[2.0, 0.0], [0.0, 2.0]])).into();
        H.mul(&mut y, &x);
        assert_eq!(y, [2.0, 4.0]);

        let H: Hessian<f64> = HessianOperator::new(|y: &mut [f64], x: &[f64]| {
            y.copy_from_slice(x);
        })
        .into();
        H.mul(&mut y, &x);
        assert_eq!(y, [1.0, 2.0]);

        let mut work = vec![0.0; 2];
        assert_eq!(H.quad_form(&x, &mut work), 5.0);
    }
}
