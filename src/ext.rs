//! # Fluent Expression Building
//!
//! [`EvaluableExt`] is the method-chaining face of the algebra:
//!
//! ```ignore
//! use gridflow::{EvaluableExt, Grid, Extent};
//!
//! let a = Grid::from_fn(Extent::new(8, 8), |x, y| (x + y) as f64);
//! let b = Grid::filled(Extent::new(8, 8), 2.0);
//!
//! // Just builds a type tree. Nothing is evaluated here.
//! let expr = (&a).sqr().elementwise_mul(&b).scale(0.5) - (&a).sin();
//!
//! let c = Grid::from_evaluable(a.extent(), &expr);
//! ```
//!
//! Methods take `self` by value. Call them on `&grid` to keep the grid; a
//! grid passed by value moves into the expression and is owned by it.
//!
//! Method names avoid the prelude's `Ord::max`, `Ord::min`, `Ord::clamp`,
//! and `PartialOrd::lt` family, since scalars are evaluables too.

use crate::combinators::{Cast, Map, Select, Shift, Tap, Transpose};
use crate::coord::{Extent, Index2, Region};
use crate::grid::Grid;
use crate::ops::{
    Abs, Cos, Div, EqTo, Exp, Ge, Gt, Le, Ln, Lt, Max, Min, Mul, Scale, Sin, Sqr, Sqrt, Tan,
};
use crate::view::View;
use crate::{Bounded, Evaluable};

/// Extension methods for composing evaluables.
pub trait EvaluableExt: Evaluable + Sized {
    /// Evaluate at a coordinate pair.
    #[inline(always)]
    fn eval_at(&self, at: impl Into<Index2>) -> Self::Output {
        let at = at.into();
        self.eval(at.x, at.y)
    }

    /// `k * self`.
    fn scale<K>(self, factor: K) -> Scale<Self, K> {
        Scale {
            inner: self,
            factor,
        }
    }

    /// Elementwise product `self(x, y) * rhs(x, y)`.
    fn elementwise_mul<R: Evaluable>(self, rhs: R) -> Mul<Self, R> {
        Mul(self, rhs)
    }

    /// Elementwise quotient `self(x, y) / rhs(x, y)`.
    fn elementwise_div<R: Evaluable>(self, rhs: R) -> Div<Self, R> {
        Div(self, rhs)
    }

    /// Elementwise maximum. `e.elementwise_max(0.0)` clamps from below.
    fn elementwise_max<R: Evaluable>(self, rhs: R) -> Max<Self, R> {
        Max(self, rhs)
    }

    /// Elementwise minimum. `e.elementwise_min(1.0)` clamps from above.
    fn elementwise_min<R: Evaluable>(self, rhs: R) -> Min<Self, R> {
        Min(self, rhs)
    }

    /// Read at `(x + dx, y + dy)`.
    fn shift(self, dx: i32, dy: i32) -> Shift<Self> {
        Shift {
            inner: self,
            dx,
            dy,
        }
    }

    /// Read at `(x + DX, y + DY)` with offsets fixed at compile time.
    fn tap<const DX: i32, const DY: i32>(self) -> Tap<Self, DX, DY> {
        Tap(self)
    }

    /// Read at `(y, x)`.
    fn transpose(self) -> Transpose<Self> {
        Transpose(self)
    }

    /// Absolute value.
    fn abs(self) -> Abs<Self> {
        Abs(self)
    }

    /// Square.
    fn sqr(self) -> Sqr<Self> {
        Sqr(self)
    }

    /// Sine.
    fn sin(self) -> Sin<Self> {
        Sin(self)
    }

    /// Cosine.
    fn cos(self) -> Cos<Self> {
        Cos(self)
    }

    /// Tangent.
    fn tan(self) -> Tan<Self> {
        Tan(self)
    }

    /// Square root.
    fn sqrt(self) -> Sqrt<Self> {
        Sqrt(self)
    }

    /// Natural exponential.
    fn exp(self) -> Exp<Self> {
        Exp(self)
    }

    /// Natural logarithm.
    fn ln(self) -> Ln<Self> {
        Ln(self)
    }

    /// Natural logarithm, under its mathematical name. Same node as [`ln`](Self::ln).
    fn log(self) -> Ln<Self> {
        Ln(self)
    }

    /// Less than comparison.
    fn cmp_lt<R: Evaluable>(self, rhs: R) -> Lt<Self, R> {
        Lt(self, rhs)
    }

    /// Less than or equal comparison.
    fn cmp_le<R: Evaluable>(self, rhs: R) -> Le<Self, R> {
        Le(self, rhs)
    }

    /// Greater than comparison.
    fn cmp_gt<R: Evaluable>(self, rhs: R) -> Gt<Self, R> {
        Gt(self, rhs)
    }

    /// Greater than or equal comparison.
    fn cmp_ge<R: Evaluable>(self, rhs: R) -> Ge<Self, R> {
        Ge(self, rhs)
    }

    /// Equality comparison.
    fn cmp_eq<R: Evaluable>(self, rhs: R) -> EqTo<Self, R> {
        EqTo(self, rhs)
    }

    /// Per-cell conditional on a `bool` evaluable.
    fn select<T: Evaluable, F: Evaluable>(self, if_true: T, if_false: F) -> Select<Self, T, F>
    where
        Self: Evaluable<Output = bool>,
    {
        Select {
            cond: self,
            if_true,
            if_false,
        }
    }

    /// Apply a scalar function to every value.
    fn map<F, U>(self, func: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map { inner: self, func }
    }

    /// Convert the element type with `as` semantics.
    fn cast<T>(self) -> Cast<Self, T> {
        Cast::new(self)
    }

    /// A read-only window over `region`.
    fn view(&self, region: Region) -> View<'_, Self>
    where
        Self: Bounded,
    {
        View::new(self, region)
    }

    /// Materialize into a new grid of the given extent.
    fn to_grid(&self, extent: Extent) -> Grid<Self::Output>
    where
        Self::Output: Copy + Default,
    {
        Grid::from_evaluable(extent, self)
    }
}

impl<T: Evaluable + Sized> EvaluableExt for T {}
