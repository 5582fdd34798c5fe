//! # Numeric Traits
//!
//! The element types that flow through grid expressions, and the
//! type-level rules for combining two of them.
//!
//! Element types are never declared on a node. Every node derives its
//! `Output` from its children, and binary nodes route the pair of child
//! outputs through [`Promote`] first. Because the rule is a trait with an
//! associated type, the result type of an arbitrarily deep tree is fixed
//! at compile time and no evaluation ever branches on it.
//!
//! | Lhs \ Rhs | `i32` | `i64` | `f32` | `f64` |
//! |-----------|-------|-------|-------|-------|
//! | `i32`     | `i32` | `i64` | `f32` | `f64` |
//! | `i64`     | `i64` | `i64` | `f32` | `f64` |
//! | `f32`     | `f32` | `f32` | `f32` | `f64` |
//! | `f64`     | `f64` | `f64` | `f64` | `f64` |

use core::fmt::Debug;
use core::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

/// A value a grid cell can hold and the algebra can compute with.
pub trait Element:
    Copy
    + Debug
    + Default
    + PartialOrd
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
{
    /// Additive identity.
    const ZERO: Self;
    /// Multiplicative identity.
    const ONE: Self;

    /// Converts a small integer constant (stencil weights and the like).
    fn from_i32(val: i32) -> Self;

    /// Absolute value.
    fn abs(self) -> Self;
}

/// Floating-point elements: the domain of the elementwise math wrappers.
pub trait Real: Element {
    /// Sine.
    fn sin(self) -> Self;
    /// Cosine.
    fn cos(self) -> Self;
    /// Tangent.
    fn tan(self) -> Self;
    /// Square root.
    fn sqrt(self) -> Self;
    /// Natural exponential.
    fn exp(self) -> Self;
    /// Natural logarithm.
    fn ln(self) -> Self;
}

macro_rules! impl_element {
    ($($t:ty => $zero:expr, $one:expr);* $(;)?) => {
        $(
            impl Element for $t {
                const ZERO: Self = $zero;
                const ONE: Self = $one;

                #[inline(always)]
                fn from_i32(val: i32) -> Self {
                    val as $t
                }

                #[inline(always)]
                fn abs(self) -> Self {
                    <$t>::abs(self)
                }
            }
        )*
    };
}

impl_element! {
    i32 => 0, 1;
    i64 => 0, 1;
    f32 => 0.0, 1.0;
    f64 => 0.0, 1.0;
}

macro_rules! impl_real {
    ($($t:ty),*) => {
        $(
            impl Real for $t {
                #[inline(always)]
                fn sin(self) -> Self { <$t>::sin(self) }
                #[inline(always)]
                fn cos(self) -> Self { <$t>::cos(self) }
                #[inline(always)]
                fn tan(self) -> Self { <$t>::tan(self) }
                #[inline(always)]
                fn sqrt(self) -> Self { <$t>::sqrt(self) }
                #[inline(always)]
                fn exp(self) -> Self { <$t>::exp(self) }
                #[inline(always)]
                fn ln(self) -> Self { <$t>::ln(self) }
            }
        )*
    };
}

impl_real!(f32, f64);

// ============================================================================
// Promotion
// ============================================================================

/// The result type of combining `Self` with `Rhs` in a binary operation.
///
/// `promote` converts both operands into the common type so the operation
/// itself is always homogeneous.
pub trait Promote<Rhs>: Sized {
    /// The common type.
    type Output: Element;

    /// Converts both operands into [`Promote::Output`].
    fn promote(self, rhs: Rhs) -> (Self::Output, Self::Output);
}

/// Shorthand for `<A as Promote<B>>::Output`.
pub type Promoted<A, B> = <A as Promote<B>>::Output;

macro_rules! impl_promote {
    ($($lhs:ty, $rhs:ty => $out:ty);* $(;)?) => {
        $(
            impl Promote<$rhs> for $lhs {
                type Output = $out;

                #[inline(always)]
                fn promote(self, rhs: $rhs) -> ($out, $out) {
                    (self as $out, rhs as $out)
                }
            }
        )*
    };
}

impl_promote! {
    i32, i32 => i32;
    i32, i64 => i64;
    i32, f32 => f32;
    i32, f64 => f64;
    i64, i32 => i64;
    i64, i64 => i64;
    i64, f32 => f32;
    i64, f64 => f64;
    f32, i32 => f32;
    f32, i64 => f32;
    f32, f32 => f32;
    f32, f64 => f64;
    f64, i32 => f64;
    f64, i64 => f64;
    f64, f32 => f64;
    f64, f64 => f64;
}

// ============================================================================
// Explicit conversion
// ============================================================================

/// Explicit `as`-style conversion between element types.
///
/// Promotion only ever widens. Narrowing (writing an `f64` expression into
/// an `f32` grid, truncating to integers) goes through this trait instead.
pub trait CastInto<T> {
    /// Converts `self` into `T` with `as` semantics.
    fn cast_into(self) -> T;
}

macro_rules! impl_cast_into {
    ($src:ty => $($dst:ty),*) => {
        $(
            impl CastInto<$dst> for $src {
                #[inline(always)]
                fn cast_into(self) -> $dst {
                    self as $dst
                }
            }
        )*
    };
}

impl_cast_into!(i32 => i32, i64, f32, f64);
impl_cast_into!(i64 => i32, i64, f32, f64);
impl_cast_into!(f32 => i32, i64, f32, f64);
impl_cast_into!(f64 => i32, i64, f32, f64);

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    fn promoted_of<A: Promote<B>, B>(a: A, b: B) -> Promoted<A, B> {
        let (a, b) = a.promote(b);
        a + b
    }

    #[test]
    fn integer_with_float_promotes_to_float() {
        let sum: f64 = promoted_of(2i32, 0.5f64);
        assert_eq!(sum, 2.5);
        let sum: f32 = promoted_of(0.25f32, 3i64);
        assert_eq!(sum, 3.25);
    }

    #[test]
    fn narrower_integer_promotes_to_wider() {
        let sum: i64 = promoted_of(i32::MAX, 1i64);
        assert_eq!(sum, i32::MAX as i64 + 1);
    }

    #[test]
    fn f32_with_f64_promotes_to_f64() {
        let sum: f64 = promoted_of(0.5f32, 0.25f64);
        assert_eq!(sum, 0.75);
    }

    #[test]
    fn element_abs_dispatches_to_primitive() {
        assert_eq!(Element::abs(-3i32), 3);
        assert_eq!(Element::abs(-2.5f64), 2.5);
    }

    #[test]
    fn cast_into_truncates_like_as() {
        let v: i32 = 2.9f64.cast_into();
        assert_eq!(v, 2);
    }
}
