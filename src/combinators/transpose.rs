//! Swap the axes of an evaluable.

use crate::Evaluable;

/// `Transpose(E)(x, y) = E(y, x)`.
#[derive(Clone, Copy, Debug)]
pub struct Transpose<E>(pub E);

impl<E: Evaluable> Evaluable for Transpose<E> {
    type Output = E::Output;

    #[inline(always)]
    fn eval(&self, x: i32, y: i32) -> Self::Output {
        self.0.eval(y, x)
    }
}

/// Builds the transpose of `e`.
#[inline(always)]
pub fn transpose<E: Evaluable>(e: E) -> Transpose<E> {
    Transpose(e)
}
