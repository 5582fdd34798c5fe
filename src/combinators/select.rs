//! # Select Combinator
//!
//! Per-cell conditional. Unlike a SIMD select only the chosen branch is
//! evaluated, since each cell is computed on its own.

use crate::numeric::{CastInto, Promote, Promoted};
use crate::Evaluable;

/// `if cond(x, y) { if_true(x, y) } else { if_false(x, y) }`.
///
/// The branches are promoted to a common element type.
#[derive(Clone, Copy, Debug)]
pub struct Select<C, T, F> {
    /// The condition (a `bool` evaluable).
    pub cond: C,
    /// Value where the condition holds.
    pub if_true: T,
    /// Value elsewhere.
    pub if_false: F,
}

impl<C, T, F> Evaluable for Select<C, T, F>
where
    C: Evaluable<Output = bool>,
    T: Evaluable,
    F: Evaluable,
    T::Output: Promote<F::Output> + CastInto<Promoted<T::Output, F::Output>>,
    F::Output: CastInto<Promoted<T::Output, F::Output>>,
{
    type Output = Promoted<T::Output, F::Output>;

    #[inline(always)]
    fn eval(&self, x: i32, y: i32) -> Self::Output {
        if self.cond.eval(x, y) {
            self.if_true.eval(x, y).cast_into()
        } else {
            self.if_false.eval(x, y).cast_into()
        }
    }
}

/// Builds `if cond { if_true } else { if_false }`.
#[inline(always)]
pub fn select<C, T, F>(cond: C, if_true: T, if_false: F) -> Select<C, T, F>
where
    C: Evaluable<Output = bool>,
    T: Evaluable,
    F: Evaluable,
{
    Select {
        cond,
        if_true,
        if_false,
    }
}
