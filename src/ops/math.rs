//! # Elementwise Math
//!
//! AST nodes applying a scalar function of [`Real`] to every cell:
//! Sin, Cos, Tan, Sqrt, Exp, Ln.
//!
//! The natural logarithm follows Rust's `f64::ln` naming. `log` is kept as
//! an alias for it, both here and on
//! [`EvaluableExt`](crate::EvaluableExt::log).

use crate::numeric::Real;
use crate::Evaluable;

macro_rules! impl_real_fn {
    ($($name:ident, $ctor:ident, $method:ident, $doc:literal;)*) => {
        $(
            #[doc = $doc]
            #[derive(Clone, Copy, Debug)]
            pub struct $name<E>(pub E);

            impl<E> Evaluable for $name<E>
            where
                E: Evaluable,
                E::Output: Real,
            {
                type Output = E::Output;
                #[inline(always)]
                fn eval(&self, x: i32, y: i32) -> Self::Output {
                    Real::$method(self.0.eval(x, y))
                }
            }

            #[doc = $doc]
            #[inline(always)]
            pub fn $ctor<E: Evaluable>(e: E) -> $name<E> {
                $name(e)
            }
        )*
    };
}

impl_real_fn! {
    Sin, sin, sin, "Sine of every cell.";
    Cos, cos, cos, "Cosine of every cell.";
    Tan, tan, tan, "Tangent of every cell.";
    Sqrt, sqrt, sqrt, "Square root of every cell.";
    Exp, exp, exp, "Natural exponential of every cell.";
    Ln, ln, ln, "Natural logarithm of every cell.";
}

/// Natural logarithm of every cell. Alias of [`ln`].
#[inline(always)]
pub fn log<E: Evaluable>(e: E) -> Ln<E> {
    Ln(e)
}
