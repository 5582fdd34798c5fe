//! Translate an evaluable by integer offsets.
//!
//! Two forms with identical semantics, `E(x + dx, y + dy)`:
//!
//! - [`Shift`] carries the offsets as runtime values.
//! - [`Tap`] carries them as const generics. Stencils are built from taps,
//!   so a zero offset on either axis folds away at compile time and a
//!   five-point Laplacian costs exactly the five reads it names.
//!
//! Note the sign: a shift by `(1, 0)` reads the right-hand neighbour. This is
//! the finite-difference convention, the opposite of moving the origin.

use crate::Evaluable;

/// Reads the inner evaluable at `(x + dx, y + dy)`.
#[derive(Clone, Copy, Debug)]
pub struct Shift<E> {
    /// The inner evaluable.
    pub inner: E,
    /// Column offset.
    pub dx: i32,
    /// Row offset.
    pub dy: i32,
}

impl<E: Evaluable> Evaluable for Shift<E> {
    type Output = E::Output;

    #[inline(always)]
    fn eval(&self, x: i32, y: i32) -> Self::Output {
        self.inner.eval(x + self.dx, y + self.dy)
    }
}

/// Builds `e(x + dx, y + dy)` with runtime offsets.
#[inline(always)]
pub fn shift<E: Evaluable>(e: E, dx: i32, dy: i32) -> Shift<E> {
    Shift { inner: e, dx, dy }
}

/// A stencil tap: reads the inner evaluable at `(x + DX, y + DY)`.
#[derive(Clone, Copy, Debug)]
pub struct Tap<E, const DX: i32, const DY: i32>(pub E);

impl<E: Evaluable, const DX: i32, const DY: i32> Evaluable for Tap<E, DX, DY> {
    type Output = E::Output;

    #[inline(always)]
    fn eval(&self, x: i32, y: i32) -> Self::Output {
        self.0.eval(x + DX, y + DY)
    }
}

/// Builds `e(x + DX, y + DY)` with compile-time offsets.
#[inline(always)]
pub fn tap<const DX: i32, const DY: i32, E: Evaluable>(e: E) -> Tap<E, DX, DY> {
    Tap(e)
}
