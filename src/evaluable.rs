//! # Evaluable Trait
//!
//! The core abstraction: a function from an integer coordinate pair to a value.
//!
//! Grids, views, and every combinator node implement [`Evaluable`].
//! Grid-shaped evaluables additionally report their size through
//! [`Bounded`], and mutable storage exposes its cells through [`Writable`].

use crate::coord::Extent;

/// Anything answerable at an integer coordinate pair.
///
/// The `Output` associated type is the element type. Combinators derive
/// theirs from their children, so an expression tree's element type is
/// known once the tree is built.
///
/// Evaluation performs no bounds checking. Reading a terminal grid outside
/// its extent is a caller error.
pub trait Evaluable {
    /// The type this evaluable produces.
    type Output;

    /// Evaluate at `(x, y)`.
    fn eval(&self, x: i32, y: i32) -> Self::Output;
}

/// Grid-shaped evaluables report their extent. Combinators do not.
pub trait Bounded {
    /// Columns by rows.
    fn extent(&self) -> Extent;
}

/// Mutable storage: the destination of materialization.
pub trait Writable: Bounded {
    /// The stored element type.
    type Element;

    /// The cell at `(x, y)`.
    fn slot(&mut self, x: i32, y: i32) -> &mut Self::Element;
}

impl<E: Evaluable + ?Sized> Evaluable for &E {
    type Output = E::Output;
    #[inline(always)]
    fn eval(&self, x: i32, y: i32) -> Self::Output {
        (**self).eval(x, y)
    }
}

impl<E: Bounded + ?Sized> Bounded for &E {
    #[inline(always)]
    fn extent(&self) -> Extent {
        (**self).extent()
    }
}

impl<E: Bounded + ?Sized> Bounded for &mut E {
    #[inline(always)]
    fn extent(&self) -> Extent {
        (**self).extent()
    }
}

impl<W: Writable + ?Sized> Writable for &mut W {
    type Element = W::Element;
    #[inline(always)]
    fn slot(&mut self, x: i32, y: i32) -> &mut Self::Element {
        (**self).slot(x, y)
    }
}

// Scalars are constant evaluables, so `a + 1.0` needs no wrapping.
macro_rules! impl_scalar_evaluable {
    ($($t:ty),*) => {
        $(
            impl Evaluable for $t {
                type Output = $t;
                #[inline(always)]
                fn eval(&self, _x: i32, _y: i32) -> $t {
                    *self
                }
            }
        )*
    };
}

impl_scalar_evaluable!(i32, i64, f32, f64, bool);

/// `Const(v)(x, y) = v` everywhere.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Const<T>(pub T);

impl<T: Copy> Evaluable for Const<T> {
    type Output = T;
    #[inline(always)]
    fn eval(&self, _x: i32, _y: i32) -> T {
        self.0
    }
}

/// Wraps a constant value.
#[inline(always)]
pub fn constant<T: Copy>(value: T) -> Const<T> {
    Const(value)
}

/// The column coordinate: `X(x, y) = x`.
#[derive(Clone, Copy, Debug, Default)]
pub struct X;

/// The row coordinate: `Y(x, y) = y`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Y;

impl Evaluable for X {
    type Output = i32;
    #[inline(always)]
    fn eval(&self, x: i32, _y: i32) -> i32 {
        x
    }
}

impl Evaluable for Y {
    type Output = i32;
    #[inline(always)]
    fn eval(&self, _x: i32, y: i32) -> i32 {
        y
    }
}

/// Lifts a closure `Fn(x, y) -> T` into an evaluable.
#[derive(Clone, Copy)]
pub struct FromFn<F>(pub F);

impl<F, T> Evaluable for FromFn<F>
where
    F: Fn(i32, i32) -> T,
{
    type Output = T;
    #[inline(always)]
    fn eval(&self, x: i32, y: i32) -> T {
        (self.0)(x, y)
    }
}

/// Lifts a closure into an evaluable.
#[inline(always)]
pub fn from_fn<F, T>(f: F) -> FromFn<F>
where
    F: Fn(i32, i32) -> T,
{
    FromFn(f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn const_ignores_coordinates() {
        let c = constant(7.5f64);
        assert_eq!(c.eval(0, 0), 7.5);
        assert_eq!(c.eval(-40, 1000), 7.5);
    }

    #[test]
    fn coordinate_leaves_return_their_axis() {
        assert_eq!(X.eval(3, 9), 3);
        assert_eq!(Y.eval(3, 9), 9);
    }

    #[test]
    fn references_evaluate_through() {
        let f = from_fn(|x, y| x * 100 + y);
        let r = &f;
        assert_eq!(r.eval(2, 5), 205);
        assert_eq!((&r).eval(2, 5), 205);
    }
}
