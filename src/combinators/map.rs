//! Output-side combinators: apply a scalar function, or convert the
//! element type.

use crate::numeric::CastInto;
use crate::Evaluable;
use core::marker::PhantomData;

/// Applies `f` to every value of the inner evaluable.
///
/// The escape hatch for scalar functions the node set does not name
/// (`powi`, clamping to a range, lookup tables).
#[derive(Clone, Copy)]
pub struct Map<E, F> {
    /// The inner evaluable.
    pub inner: E,
    /// The scalar function.
    pub func: F,
}

impl<E, F, U> Evaluable for Map<E, F>
where
    E: Evaluable,
    F: Fn(E::Output) -> U,
{
    type Output = U;

    #[inline(always)]
    fn eval(&self, x: i32, y: i32) -> U {
        (self.func)(self.inner.eval(x, y))
    }
}

/// Converts the inner element type to `T` with `as` semantics.
pub struct Cast<E, T> {
    /// The inner evaluable.
    pub inner: E,
    _target: PhantomData<fn() -> T>,
}

impl<E, T> Cast<E, T> {
    /// Wraps `inner`.
    #[inline(always)]
    pub fn new(inner: E) -> Self {
        Self {
            inner,
            _target: PhantomData,
        }
    }
}

impl<E: Clone, T> Clone for Cast<E, T> {
    fn clone(&self) -> Self {
        Self::new(self.inner.clone())
    }
}

impl<E: Copy, T> Copy for Cast<E, T> {}

impl<E, T> Evaluable for Cast<E, T>
where
    E: Evaluable,
    E::Output: CastInto<T>,
{
    type Output = T;

    #[inline(always)]
    fn eval(&self, x: i32, y: i32) -> T {
        self.inner.eval(x, y).cast_into()
    }
}
