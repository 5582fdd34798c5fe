//! # Unary Operations
//!
//! AST nodes over a single child: Neg, Abs, Sqr, and scalar Scale.

use crate::numeric::{Element, Promote, Promoted};
use crate::Evaluable;

/// Negation: -E
#[derive(Clone, Copy, Debug)]
pub struct Neg<E>(pub E);

/// Absolute value: |E|
#[derive(Clone, Copy, Debug)]
pub struct Abs<E>(pub E);

/// Square: E * E, evaluating the child once.
#[derive(Clone, Copy, Debug)]
pub struct Sqr<E>(pub E);

/// Scalar scaling: `k * E(x, y)`.
///
/// The factor participates in promotion, so scaling an integer grid by an
/// `f64` yields `f64`.
#[derive(Clone, Copy, Debug)]
pub struct Scale<E, S> {
    /// The scaled expression.
    pub inner: E,
    /// The factor `k`.
    pub factor: S,
}

impl<E> Evaluable for Neg<E>
where
    E: Evaluable,
    E::Output: Element,
{
    type Output = E::Output;
    #[inline(always)]
    fn eval(&self, x: i32, y: i32) -> Self::Output {
        -self.0.eval(x, y)
    }
}

impl<E> Evaluable for Abs<E>
where
    E: Evaluable,
    E::Output: Element,
{
    type Output = E::Output;
    #[inline(always)]
    fn eval(&self, x: i32, y: i32) -> Self::Output {
        Element::abs(self.0.eval(x, y))
    }
}

impl<E> Evaluable for Sqr<E>
where
    E: Evaluable,
    E::Output: Element,
{
    type Output = E::Output;
    #[inline(always)]
    fn eval(&self, x: i32, y: i32) -> Self::Output {
        let v = self.0.eval(x, y);
        v * v
    }
}

impl<E, S> Evaluable for Scale<E, S>
where
    E: Evaluable,
    S: Promote<E::Output> + Copy,
{
    type Output = Promoted<S, E::Output>;
    #[inline(always)]
    fn eval(&self, x: i32, y: i32) -> Self::Output {
        let (k, v) = self.factor.promote(self.inner.eval(x, y));
        k * v
    }
}

/// Builds `k * e`.
#[inline(always)]
pub fn scale<E: Evaluable, S>(e: E, factor: S) -> Scale<E, S> {
    Scale { inner: e, factor }
}

/// Builds `-e`.
#[inline(always)]
pub fn neg<E: Evaluable>(e: E) -> Neg<E> {
    Neg(e)
}

/// Builds `|e|`.
#[inline(always)]
pub fn abs<E: Evaluable>(e: E) -> Abs<E> {
    Abs(e)
}

/// Builds `e^2`.
#[inline(always)]
pub fn sqr<E: Evaluable>(e: E) -> Sqr<E> {
    Sqr(e)
}
