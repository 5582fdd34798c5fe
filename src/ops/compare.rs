//! # Comparison Operations
//!
//! AST nodes for comparisons: Lt, Le, Gt, Ge, EqTo.
//! These produce `bool` evaluables, usable as masks and as the condition
//! of [`Select`](crate::combinators::Select). And, Or, Not combine masks.

use crate::numeric::Promote;
use crate::Evaluable;

/// Less than: L < R
#[derive(Clone, Copy, Debug)]
pub struct Lt<L, R>(pub L, pub R);

/// Less than or equal: L <= R
#[derive(Clone, Copy, Debug)]
pub struct Le<L, R>(pub L, pub R);

/// Greater than: L > R
#[derive(Clone, Copy, Debug)]
pub struct Gt<L, R>(pub L, pub R);

/// Greater than or equal: L >= R
#[derive(Clone, Copy, Debug)]
pub struct Ge<L, R>(pub L, pub R);

/// Equality: L == R
#[derive(Clone, Copy, Debug)]
pub struct EqTo<L, R>(pub L, pub R);

macro_rules! impl_compare {
    ($name:ident, $op:tt) => {
        impl<L, R> Evaluable for $name<L, R>
        where
            L: Evaluable,
            R: Evaluable,
            L::Output: Promote<R::Output>,
        {
            type Output = bool;
            #[inline(always)]
            fn eval(&self, x: i32, y: i32) -> bool {
                let (a, b) = self.0.eval(x, y).promote(self.1.eval(x, y));
                a $op b
            }
        }
    };
}

impl_compare!(Lt, <);
impl_compare!(Le, <=);
impl_compare!(Gt, >);
impl_compare!(Ge, >=);
impl_compare!(EqTo, ==);

/// Mask conjunction.
#[derive(Clone, Copy, Debug)]
pub struct And<L, R>(pub L, pub R);

/// Mask disjunction.
#[derive(Clone, Copy, Debug)]
pub struct Or<L, R>(pub L, pub R);

/// Mask complement.
#[derive(Clone, Copy, Debug)]
pub struct Not<M>(pub M);

impl<L, R> Evaluable for And<L, R>
where
    L: Evaluable<Output = bool>,
    R: Evaluable<Output = bool>,
{
    type Output = bool;
    #[inline(always)]
    fn eval(&self, x: i32, y: i32) -> bool {
        self.0.eval(x, y) && self.1.eval(x, y)
    }
}

impl<L, R> Evaluable for Or<L, R>
where
    L: Evaluable<Output = bool>,
    R: Evaluable<Output = bool>,
{
    type Output = bool;
    #[inline(always)]
    fn eval(&self, x: i32, y: i32) -> bool {
        self.0.eval(x, y) || self.1.eval(x, y)
    }
}

impl<M> Evaluable for Not<M>
where
    M: Evaluable<Output = bool>,
{
    type Output = bool;
    #[inline(always)]
    fn eval(&self, x: i32, y: i32) -> bool {
        !self.0.eval(x, y)
    }
}
