//! Error types for grid construction, regions, and reductions.
//!
//! Evaluation itself never fails. These errors come from the few places
//! where a request can be rejected up front.

use crate::coord::{Extent, Index2, Region};
use thiserror::Error;

/// Errors raised before any cell is touched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A region whose end corner lies before its begin corner.
    #[error("region end {end:?} lies before begin {begin:?}")]
    InvertedRegion {
        /// Requested begin corner.
        begin: Index2,
        /// Requested end corner.
        end: Index2,
    },
    /// `min`/`max` over a region with no cells has no seed value.
    #[error("cannot reduce over empty region {0}")]
    EmptyRegion(Region),
    /// Strided assignment with a non-positive stride would never terminate.
    #[error("step must be positive on both axes, got ({x}, {y})")]
    InvalidStep {
        /// Requested column stride.
        x: i32,
        /// Requested row stride.
        y: i32,
    },
    /// A random fill whose lower bound is not below its upper bound.
    #[error("random range is empty: low must be below high")]
    EmptyRange,
    /// An extent with an axis longer than `i32::MAX` cells.
    #[error("extent {0} exceeds the i32 coordinate range")]
    ExtentTooLarge(Extent),
    /// A supplied buffer does not hold exactly `extent.len()` elements.
    #[error("buffer of {len} elements does not match extent {extent}")]
    BufferSize {
        /// Length of the supplied buffer.
        len: usize,
        /// Requested extent.
        extent: Extent,
    },
}
