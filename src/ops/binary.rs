//! # Binary Operations
//!
//! AST nodes for arithmetic: Add, Sub, Mul, Div, and the elementwise
//! extrema Max, Min.
//!
//! Each node computes in the promoted type of its two child outputs.

use crate::numeric::{Promote, Promoted};
use crate::Evaluable;

/// Addition: L + R
#[derive(Clone, Copy, Debug)]
pub struct Add<L, R>(pub L, pub R);

/// Subtraction: L - R
#[derive(Clone, Copy, Debug)]
pub struct Sub<L, R>(pub L, pub R);

/// Elementwise multiplication: L * R
#[derive(Clone, Copy, Debug)]
pub struct Mul<L, R>(pub L, pub R);

/// Elementwise division: L / R
#[derive(Clone, Copy, Debug)]
pub struct Div<L, R>(pub L, pub R);

/// Elementwise maximum. With a constant operand this clamps from below.
#[derive(Clone, Copy, Debug)]
pub struct Max<L, R>(pub L, pub R);

/// Elementwise minimum. With a constant operand this clamps from above.
#[derive(Clone, Copy, Debug)]
pub struct Min<L, R>(pub L, pub R);

macro_rules! impl_arith {
    ($name:ident, $op:tt) => {
        impl<L, R> Evaluable for $name<L, R>
        where
            L: Evaluable,
            R: Evaluable,
            L::Output: Promote<R::Output>,
        {
            type Output = Promoted<L::Output, R::Output>;
            #[inline(always)]
            fn eval(&self, x: i32, y: i32) -> Self::Output {
                let (a, b) = self.0.eval(x, y).promote(self.1.eval(x, y));
                a $op b
            }
        }
    };
}

impl_arith!(Add, +);
impl_arith!(Sub, -);
impl_arith!(Mul, *);
impl_arith!(Div, /);

impl<L, R> Evaluable for Max<L, R>
where
    L: Evaluable,
    R: Evaluable,
    L::Output: Promote<R::Output>,
{
    type Output = Promoted<L::Output, R::Output>;
    #[inline(always)]
    fn eval(&self, x: i32, y: i32) -> Self::Output {
        let (a, b) = self.0.eval(x, y).promote(self.1.eval(x, y));
        if b > a {
            b
        } else {
            a
        }
    }
}

impl<L, R> Evaluable for Min<L, R>
where
    L: Evaluable,
    R: Evaluable,
    L::Output: Promote<R::Output>,
{
    type Output = Promoted<L::Output, R::Output>;
    #[inline(always)]
    fn eval(&self, x: i32, y: i32) -> Self::Output {
        let (a, b) = self.0.eval(x, y).promote(self.1.eval(x, y));
        if b < a {
            b
        } else {
            a
        }
    }
}

/// Builds `l + r`.
#[inline(always)]
pub fn add<L: Evaluable, R: Evaluable>(l: L, r: R) -> Add<L, R> {
    Add(l, r)
}

/// Builds `l - r`.
#[inline(always)]
pub fn sub<L: Evaluable, R: Evaluable>(l: L, r: R) -> Sub<L, R> {
    Sub(l, r)
}

/// Builds the elementwise product `l(x, y) * r(x, y)`.
#[inline(always)]
pub fn elementwise_mul<L: Evaluable, R: Evaluable>(l: L, r: R) -> Mul<L, R> {
    Mul(l, r)
}

/// Builds the elementwise quotient `l(x, y) / r(x, y)`.
#[inline(always)]
pub fn elementwise_div<L: Evaluable, R: Evaluable>(l: L, r: R) -> Div<L, R> {
    Div(l, r)
}

