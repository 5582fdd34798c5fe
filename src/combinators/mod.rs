//! # Combinators Module
//!
//! Coordinate-side adapters (Shift, Tap, Transpose) and structural
//! combinators (Select, Map, Cast).

mod map;
mod select;
mod shift;
mod transpose;

pub use map::{Cast, Map};
pub use select::{select, Select};
pub use shift::{shift, tap, Shift, Tap};
pub use transpose::{transpose, Transpose};
