//! # gridflow
//!
//! Lazy expression algebra over 2-D integer grids, for finite-difference
//! and stencil solvers.
//!
//! ## Design Philosophy
//!
//! **The expression IS the loop body.**
//!
//! Arithmetic on grids builds a tree of small `Copy` nodes. No intermediate
//! grid is ever allocated: the tree is evaluated cell by cell only when it
//! is written into storage ([`set`] and friends) or folded ([`sum`],
//! [`min`], [`max`]). The element type of the tree follows from the types
//! of its leaves, so mixing an `i32` grid with an `f64` grid yields `f64`.
//!
//! ```ignore
//! use gridflow::{diff_xx, laplacian, EvaluableExt, Extent, Grid};
//!
//! let a = Grid::from_fn(Extent::new(64, 64), |x, y| (x * y) as f64);
//! let b = Grid::filled(a.extent(), 2.0);
//!
//! let mut c = Grid::new(a.extent());
//! c.assign(&a + &b * 2.0 - (&a).sin());
//!
//! let interior = a.region().inset(1);
//! gridflow::set_region(&mut c, interior, laplacian(&a, (1.0, 1.0)));
//! ```
//!
//! ## Pieces
//!
//! - [`Evaluable`]: anything answerable at `(x, y)`.
//! - [`ops`] and [`combinators`]: the node types. Build them with the
//!   operators, the free functions, or [`EvaluableExt`].
//! - [`Grid`], [`View`], [`ViewMut`]: storage and windows onto it.
//! - [`materialize`], [`reduce`], [`stencil`]: the engines.
//! - [`random`], [`dump`](mod@dump), [`relax`]: collaborators built on the
//!   algebra.

#![warn(missing_docs)]

pub mod combinators;
pub mod config;
pub mod coord;
pub mod dump;
pub mod error;
pub mod evaluable;
pub mod ext;
pub mod grid;
pub mod materialize;
pub mod numeric;
/// Arithmetic, math, and comparison nodes, and their operator syntax.
pub mod ops;
pub mod random;
pub mod reduce;
pub mod relax;
pub mod stencil;
pub mod view;

pub use coord::{Extent, Index2, Parity, Region, Step};
pub use dump::{dump, Dump};
pub use error::GridError;
pub use evaluable::{constant, from_fn, Bounded, Const, Evaluable, FromFn, Writable, X, Y};
pub use ext::EvaluableExt;
pub use grid::Grid;
pub use materialize::{set, set_checkered, set_masked, set_masked_region, set_region, set_strided};
pub use numeric::{Element, Promote, Promoted, Real};
pub use random::RandomFill;
pub use reduce::{max, max_all, min, min_all, sum, sum_all};
pub use stencil::{
    diff_x, diff_x_bw, diff_x_fw, diff_xx, diff_y, diff_y_bw, diff_y_fw, diff_yy, laplacian,
};
pub use view::{view, view_mut, View, ViewMut};
