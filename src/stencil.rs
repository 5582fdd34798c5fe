//! # Finite-Difference Stencils
//!
//! Builders that turn an evaluable into a derivative approximation. Each
//! returns an unevaluated expression, not a grid, so a stencil composes with
//! the rest of the algebra and costs nothing until it is materialized or
//! reduced.
//!
//! | Builder       | Stencil |
//! |---------------|---------|
//! | [`diff_x`]    | `(E(x+1,y) - E(x-1,y)) / 2h` |
//! | [`diff_x_fw`] | `(E(x+1,y) - E(x,y)) / h` |
//! | [`diff_x_bw`] | `(E(x,y) - E(x-1,y)) / h` |
//! | [`diff_xx`]   | `(E(x-1,y) - 2E(x,y) + E(x+1,y)) / h^2` |
//! | [`laplacian`] | `(E(x-1,y) + E(x+1,y)) / hx^2 + (E(x,y-1) + E(x,y+1)) / hy^2 - 2(1/hx^2 + 1/hy^2) E(x,y)` |
//!
//! plus the `y` analogues. Neighbour reads are [`Tap`]s with const offsets,
//! and the spacing is folded into [`Scale`] factors when the stencil is
//! built, so evaluation is the handful of reads and multiply-adds a
//! hand-written loop would do.
//!
//! Stencils read one cell past the evaluated point on each axis they
//! differentiate. Evaluating them on the outer ring of a terminal grid reads
//! outside its extent; evaluate over [`Region::inset`](crate::Region::inset)
//! or pad the grid with ghost cells.

use crate::combinators::Tap;
use crate::numeric::Real;
use crate::ops::{Add, Scale, Sub};
use crate::Evaluable;

/// Central first derivative along `x`.
pub type DiffX<E, S> = Scale<Sub<Tap<E, 1, 0>, Tap<E, { -1 }, 0>>, S>;
/// Central first derivative along `y`.
pub type DiffY<E, S> = Scale<Sub<Tap<E, 0, 1>, Tap<E, 0, { -1 }>>, S>;
/// Forward first derivative along `x`.
pub type DiffXFw<E, S> = Scale<Sub<Tap<E, 1, 0>, E>, S>;
/// Forward first derivative along `y`.
pub type DiffYFw<E, S> = Scale<Sub<Tap<E, 0, 1>, E>, S>;
/// Backward first derivative along `x`.
pub type DiffXBw<E, S> = Scale<Sub<E, Tap<E, { -1 }, 0>>, S>;
/// Backward first derivative along `y`.
pub type DiffYBw<E, S> = Scale<Sub<E, Tap<E, 0, { -1 }>>, S>;
/// Second derivative along `x`.
pub type DiffXX<E, S> = Scale<Add<Sub<Tap<E, { -1 }, 0>, Scale<E, S>>, Tap<E, 1, 0>>, S>;
/// Second derivative along `y`.
pub type DiffYY<E, S> = Scale<Add<Sub<Tap<E, 0, { -1 }>, Scale<E, S>>, Tap<E, 0, 1>>, S>;
/// Five-point Laplacian.
pub type Laplacian<E, S> = Sub<
    Add<
        Scale<Add<Tap<E, { -1 }, 0>, Tap<E, 1, 0>>, S>,
        Scale<Add<Tap<E, 0, { -1 }>, Tap<E, 0, 1>>, S>,
    >,
    Scale<E, S>,
>;

#[inline(always)]
fn two<S: Real>() -> S {
    S::from_i32(2)
}

#[inline(always)]
fn scaled<E, S>(inner: E, factor: S) -> Scale<E, S> {
    Scale { inner, factor }
}

/// Central first derivative along `x` with spacing `h`.
pub fn diff_x<E: Evaluable + Clone, S: Real>(e: E, h: S) -> DiffX<E, S> {
    scaled(Sub(Tap(e.clone()), Tap(e)), S::ONE / (two::<S>() * h))
}

/// Central first derivative along `y` with spacing `h`.
pub fn diff_y<E: Evaluable + Clone, S: Real>(e: E, h: S) -> DiffY<E, S> {
    scaled(Sub(Tap(e.clone()), Tap(e)), S::ONE / (two::<S>() * h))
}

/// Forward first derivative along `x` with spacing `h`.
pub fn diff_x_fw<E: Evaluable + Clone, S: Real>(e: E, h: S) -> DiffXFw<E, S> {
    scaled(Sub(Tap(e.clone()), e), S::ONE / h)
}

/// Forward first derivative along `y` with spacing `h`.
pub fn diff_y_fw<E: Evaluable + Clone, S: Real>(e: E, h: S) -> DiffYFw<E, S> {
    scaled(Sub(Tap(e.clone()), e), S::ONE / h)
}

/// Backward first derivative along `x` with spacing `h`.
pub fn diff_x_bw<E: Evaluable + Clone, S: Real>(e: E, h: S) -> DiffXBw<E, S> {
    scaled(Sub(e.clone(), Tap(e)), S::ONE / h)
}

/// Backward first derivative along `y` with spacing `h`.
pub fn diff_y_bw<E: Evaluable + Clone, S: Real>(e: E, h: S) -> DiffYBw<E, S> {
    scaled(Sub(e.clone(), Tap(e)), S::ONE / h)
}

/// Second derivative along `x` with spacing `h`.
pub fn diff_xx<E: Evaluable + Clone, S: Real>(e: E, h: S) -> DiffXX<E, S> {
    let center = scaled(e.clone(), two::<S>());
    scaled(Add(Sub(Tap(e.clone()), center), Tap(e)), S::ONE / (h * h))
}

/// Second derivative along `y` with spacing `h`.
pub fn diff_yy<E: Evaluable + Clone, S: Real>(e: E, h: S) -> DiffYY<E, S> {
    let center = scaled(e.clone(), two::<S>());
    scaled(Add(Sub(Tap(e.clone()), center), Tap(e)), S::ONE / (h * h))
}

/// Five-point Laplacian with spacing `(hx, hy)`.
pub fn laplacian<E: Evaluable + Clone, S: Real>(e: E, (hx, hy): (S, S)) -> Laplacian<E, S> {
    let ix = S::ONE / (hx * hx);
    let iy = S::ONE / (hy * hy);
    let across = scaled(Add(Tap(e.clone()), Tap(e.clone())), ix);
    let down = scaled(Add(Tap(e.clone()), Tap(e.clone())), iy);
    let center = scaled(e, two::<S>() * (ix + iy));
    Sub(Add(across, down), center)
}
