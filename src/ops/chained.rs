//! # Operator Overloads
//!
//! Arithmetic notation for expression nodes, e.g. `(&a + &b) * 0.5 - &c`.
//!
//! Dispatch is by operand shape, not by overload resolution tricks:
//!
//! | Syntax          | Node                        |
//! |-----------------|-----------------------------|
//! | `e + r`, `e - r`| `Add(e, r)`, `Sub(e, r)` for any evaluable `r`, scalars included |
//! | `e * k`, `k * e`| `Scale(e, k)` for a scalar `k` |
//! | `e / k`         | `Div(e, Const(k))` |
//! | `k / e`         | `Div(Const(k), e)` |
//! | `-e`            | `Neg(e)` |
//!
//! There is no `e * r` for two evaluables. Elementwise products
//! and quotients are spelled `elementwise_mul` / `elementwise_div`, so a
//! grid product never hides behind the same symbol as a scalar scale.
//!
//! Mask nodes (comparisons and their combinations) get `&`, `|`, and `!`
//! instead of arithmetic.

use super::{Abs, Add, And, Cos, Div, EqTo, Exp, Ge, Gt, Le, Ln, Lt, Max, Min, Mul, Neg, Not, Or};
use super::{Scale, Sin, Sqr, Sqrt, Sub, Tan};
use crate::combinators::{Cast, Map, Select, Shift, Tap, Transpose};
use crate::evaluable::{Const, FromFn, X, Y};
use crate::grid::Grid;
use crate::numeric::Element;
use crate::view::{View, ViewMut};
use crate::Evaluable;

// ============================================================================
// Scalar on the left: k + e, k - e, k * e, k / e
// ============================================================================

macro_rules! impl_scalar_lhs {
    ([$($gen:tt)*] $ty:ty, $s:ty) => {
        impl<$($gen)*> core::ops::Add<$ty> for $s {
            type Output = Add<Const<$s>, $ty>;
            #[inline(always)]
            fn add(self, rhs: $ty) -> Self::Output { Add(Const(self), rhs) }
        }

        impl<$($gen)*> core::ops::Sub<$ty> for $s {
            type Output = Sub<Const<$s>, $ty>;
            #[inline(always)]
            fn sub(self, rhs: $ty) -> Self::Output { Sub(Const(self), rhs) }
        }

        impl<$($gen)*> core::ops::Mul<$ty> for $s {
            type Output = Scale<$ty, $s>;
            #[inline(always)]
            fn mul(self, rhs: $ty) -> Self::Output { Scale { inner: rhs, factor: self } }
        }

        impl<$($gen)*> core::ops::Div<$ty> for $s {
            type Output = Div<Const<$s>, $ty>;
            #[inline(always)]
            fn div(self, rhs: $ty) -> Self::Output { Div(Const(self), rhs) }
        }
    };
}

// ============================================================================
// Expression on the left
// ============================================================================

macro_rules! impl_expr_ops {
    ([$($gen:tt)*] $ty:ty) => {
        impl<$($gen)* Rhs: Evaluable> core::ops::Add<Rhs> for $ty {
            type Output = Add<Self, Rhs>;
            #[inline(always)]
            fn add(self, rhs: Rhs) -> Self::Output { Add(self, rhs) }
        }

        impl<$($gen)* Rhs: Evaluable> core::ops::Sub<Rhs> for $ty {
            type Output = Sub<Self, Rhs>;
            #[inline(always)]
            fn sub(self, rhs: Rhs) -> Self::Output { Sub(self, rhs) }
        }

        impl<$($gen)* K: Element> core::ops::Mul<K> for $ty {
            type Output = Scale<Self, K>;
            #[inline(always)]
            fn mul(self, factor: K) -> Self::Output { Scale { inner: self, factor } }
        }

        impl<$($gen)* K: Element> core::ops::Div<K> for $ty {
            type Output = Div<Self, Const<K>>;
            #[inline(always)]
            fn div(self, divisor: K) -> Self::Output { Div(self, Const(divisor)) }
        }

        impl<$($gen)*> core::ops::Neg for $ty {
            type Output = Neg<Self>;
            #[inline(always)]
            fn neg(self) -> Self::Output { Neg(self) }
        }

        impl_scalar_lhs!([$($gen)*] $ty, i32);
        impl_scalar_lhs!([$($gen)*] $ty, i64);
        impl_scalar_lhs!([$($gen)*] $ty, f32);
        impl_scalar_lhs!([$($gen)*] $ty, f64);
    };
}

// Leaves and terminals
impl_expr_ops!([T,] Const<T>);
impl_expr_ops!([] X);
impl_expr_ops!([] Y);
impl_expr_ops!([F,] FromFn<F>);
impl_expr_ops!(['a, T,] &'a Grid<T>);
impl_expr_ops!(['a, E,] View<'a, E>);
impl_expr_ops!(['a, 'v, G,] &'v ViewMut<'a, G>);

// Binary nodes
impl_expr_ops!([L, R,] Add<L, R>);
impl_expr_ops!([L, R,] Sub<L, R>);
impl_expr_ops!([L, R,] Mul<L, R>);
impl_expr_ops!([L, R,] Div<L, R>);
impl_expr_ops!([L, R,] Max<L, R>);
impl_expr_ops!([L, R,] Min<L, R>);

// Unary nodes
impl_expr_ops!([E, S,] Scale<E, S>);
impl_expr_ops!([E,] Neg<E>);
impl_expr_ops!([E,] Abs<E>);
impl_expr_ops!([E,] Sqr<E>);
impl_expr_ops!([E,] Sin<E>);
impl_expr_ops!([E,] Cos<E>);
impl_expr_ops!([E,] Tan<E>);
impl_expr_ops!([E,] Sqrt<E>);
impl_expr_ops!([E,] Exp<E>);
impl_expr_ops!([E,] Ln<E>);

// Combinators
impl_expr_ops!([E,] Shift<E>);
impl_expr_ops!([E, const DX: i32, const DY: i32,] Tap<E, DX, DY>);
impl_expr_ops!([E,] Transpose<E>);
impl_expr_ops!([C, T, F,] Select<C, T, F>);
impl_expr_ops!([E, F,] Map<E, F>);
impl_expr_ops!([E, T,] Cast<E, T>);

// ============================================================================
// Mask nodes
// ============================================================================

macro_rules! impl_mask_ops {
    ([$($gen:tt)*] $ty:ty) => {
        impl<$($gen)* Rhs: Evaluable<Output = bool>> core::ops::BitAnd<Rhs> for $ty {
            type Output = And<Self, Rhs>;
            #[inline(always)]
            fn bitand(self, rhs: Rhs) -> Self::Output { And(self, rhs) }
        }

        impl<$($gen)* Rhs: Evaluable<Output = bool>> core::ops::BitOr<Rhs> for $ty {
            type Output = Or<Self, Rhs>;
            #[inline(always)]
            fn bitor(self, rhs: Rhs) -> Self::Output { Or(self, rhs) }
        }

        impl<$($gen)*> core::ops::Not for $ty {
            type Output = Not<Self>;
            #[inline(always)]
            fn not(self) -> Self::Output { Not(self) }
        }
    };
}

impl_mask_ops!([L, R,] Lt<L, R>);
impl_mask_ops!([L, R,] Le<L, R>);
impl_mask_ops!([L, R,] Gt<L, R>);
impl_mask_ops!([L, R,] Ge<L, R>);
impl_mask_ops!([L, R,] EqTo<L, R>);
impl_mask_ops!([L, R,] And<L, R>);
impl_mask_ops!([L, R,] Or<L, R>);
impl_mask_ops!([M,] Not<M>);
