//! Coordinates, extents, and the rectangular regions loops run over.

use crate::error::GridError;
use core::fmt;
use core::ops::{Add, Sub};

/// An integer coordinate pair `(x, y)`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Index2 {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl Index2 {
    /// The origin.
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Creates a coordinate pair.
    #[inline(always)]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Index2 {
    #[inline(always)]
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<[i32; 2]> for Index2 {
    #[inline(always)]
    fn from([x, y]: [i32; 2]) -> Self {
        Self { x, y }
    }
}

impl Add for Index2 {
    type Output = Self;
    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Index2 {
    type Output = Self;
    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Size of a grid-shaped evaluable: `x` columns by `y` rows.
///
/// Coordinates are `i32`, so only the first `i32::MAX` cells of an axis are
/// addressable. [`Extent::try_new`] rejects longer axes; [`Region::full`]
/// clamps them.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Extent {
    /// Number of columns.
    pub x: usize,
    /// Number of rows.
    pub y: usize,
}

impl Extent {
    /// Creates an extent.
    #[inline(always)]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Creates an extent whose axes are both addressable by `i32`.
    pub fn try_new(x: usize, y: usize) -> Result<Self, GridError> {
        let extent = Self { x, y };
        if i32::try_from(x).is_err() || i32::try_from(y).is_err() {
            return Err(GridError::ExtentTooLarge(extent));
        }
        Ok(extent)
    }

    /// Number of cells.
    #[inline(always)]
    pub const fn len(&self) -> usize {
        self.x * self.y
    }

    /// True if either axis is zero.
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.x == 0 || self.y == 0
    }
}

#[inline(always)]
fn clamp_axis(n: usize) -> i32 {
    i32::try_from(n).unwrap_or(i32::MAX)
}

impl From<(usize, usize)> for Extent {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Extent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.x, self.y)
    }
}

/// A half-open rectangle `[begin.x, end.x) x [begin.y, end.y)`.
///
/// Construction guarantees `end >= begin` on both axes. An empty region is
/// legal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Region {
    begin: Index2,
    end: Index2,
}

impl Region {
    /// Creates a region, rejecting an end corner before the begin corner.
    pub fn new(begin: impl Into<Index2>, end: impl Into<Index2>) -> Result<Self, GridError> {
        let (begin, end) = (begin.into(), end.into());
        if end.x < begin.x || end.y < begin.y {
            return Err(GridError::InvertedRegion { begin, end });
        }
        Ok(Self { begin, end })
    }

    /// The region `[0, extent.x) x [0, extent.y)`, each axis clamped to
    /// `i32::MAX`.
    #[inline]
    pub fn full(extent: Extent) -> Self {
        Self {
            begin: Index2::ZERO,
            end: Index2::new(clamp_axis(extent.x), clamp_axis(extent.y)),
        }
    }

    /// Inclusive lower corner.
    #[inline(always)]
    pub fn begin(&self) -> Index2 {
        self.begin
    }

    /// Exclusive upper corner.
    #[inline(always)]
    pub fn end(&self) -> Index2 {
        self.end
    }

    /// `end - begin`, never negative.
    #[inline]
    pub fn extent(&self) -> Extent {
        let d = self.end - self.begin;
        Extent::new(d.x as usize, d.y as usize)
    }

    /// True if the region holds no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.extent().is_empty()
    }

    /// Shrinks the region by `margin` cells on every side, clamping at empty.
    ///
    /// Stencils of radius one are evaluated over `region.inset(1)`.
    pub fn inset(&self, margin: i32) -> Self {
        let begin = Index2::new(self.begin.x + margin, self.begin.y + margin);
        let end = Index2::new(
            (self.end.x - margin).max(begin.x),
            (self.end.y - margin).max(begin.y),
        );
        Self { begin, end }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}) x [{}, {})",
            self.begin.x, self.end.x, self.begin.y, self.end.y
        )
    }
}

/// Per-axis stride of a strided assignment. Both components are positive.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Step {
    x: i32,
    y: i32,
}

impl Step {
    /// Creates a step, rejecting zero or negative strides.
    pub fn new(x: i32, y: i32) -> Result<Self, GridError> {
        if x <= 0 || y <= 0 {
            return Err(GridError::InvalidStep { x, y });
        }
        Ok(Self { x, y })
    }

    /// Column stride.
    #[inline(always)]
    pub fn x(&self) -> i32 {
        self.x
    }

    /// Row stride.
    #[inline(always)]
    pub fn y(&self) -> i32 {
        self.y
    }
}

/// One color of the two-coloring used by red-black schemes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Parity {
    /// Color 0: row `j` starts at column offset `j mod 2`.
    Even,
    /// Color 1: row `j` starts at column offset `(j + 1) mod 2`.
    Odd,
}

impl Parity {
    /// Both colors, in sweep order.
    pub const BOTH: [Parity; 2] = [Parity::Even, Parity::Odd];

    /// The color as `0` or `1`.
    #[inline(always)]
    pub const fn bit(self) -> i32 {
        match self {
            Parity::Even => 0,
            Parity::Odd => 1,
        }
    }

    /// The other color.
    #[inline(always)]
    pub const fn flip(self) -> Self {
        match self {
            Parity::Even => Parity::Odd,
            Parity::Odd => Parity::Even,
        }
    }

    /// First column visited in row `y` of a region starting at `begin_x`.
    #[inline(always)]
    pub fn row_start(self, begin_x: i32, y: i32) -> i32 {
        begin_x + (y + self.bit()).rem_euclid(2)
    }
}

impl From<bool> for Parity {
    fn from(color: bool) -> Self {
        if color {
            Parity::Odd
        } else {
            Parity::Even
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn region_rejects_inverted_corners() {
        let err = Region::new((3, 0), (2, 4)).unwrap_err();
        assert_eq!(
            err,
            GridError::InvertedRegion {
                begin: Index2::new(3, 0),
                end: Index2::new(2, 4)
            }
        );
    }

    #[test]
    fn zero_extent_region_is_legal_and_empty() {
        let region = Region::new((2, 2), (2, 5)).expect("zero width is legal");
        assert!(region.is_empty());
        assert_eq!(region.extent(), Extent::new(0, 3));
    }

    #[test]
    fn inset_clamps_at_empty() {
        let region = Region::full(Extent::new(3, 3)).inset(2);
        assert!(region.is_empty());
        let interior = Region::full(Extent::new(5, 4)).inset(1);
        assert_eq!(interior.begin(), Index2::new(1, 1));
        assert_eq!(interior.end(), Index2::new(4, 3));
    }

    #[test]
    fn oversized_extent_is_rejected_or_clamped() {
        let wide = usize::MAX;
        assert_eq!(
            Extent::try_new(wide, 1),
            Err(GridError::ExtentTooLarge(Extent::new(wide, 1)))
        );
        assert_eq!(Extent::try_new(4, 3), Ok(Extent::new(4, 3)));
        let region = Region::full(Extent::new(wide, 2));
        assert_eq!(region.end(), Index2::new(i32::MAX, 2));
    }

    #[test]
    fn step_rejects_zero_stride() {
        assert_eq!(Step::new(0, 1), Err(GridError::InvalidStep { x: 0, y: 1 }));
        assert!(Step::new(2, 3).is_ok());
    }

    #[test]
    fn parity_row_start_alternates_and_handles_negative_rows() {
        assert_eq!(Parity::Even.row_start(0, 0), 0);
        assert_eq!(Parity::Even.row_start(0, 1), 1);
        assert_eq!(Parity::Odd.row_start(0, 0), 1);
        assert_eq!(Parity::Odd.row_start(4, -1), 4);
        assert_eq!(Parity::Even.row_start(4, -1), 5);
    }
}
