//! # Grid
//!
//! The concrete terminal of every expression: a 2-D buffer of elements
//! stored row-major, `index = y * extent.x + x`.
//!
//! A grid is evaluable (read) and writable (the target of
//! [`materialize`](crate::materialize)). `Clone` is a deep copy; sharing a
//! buffer is always spelled out through [`Grid::alias`] or
//! [`Grid::alias_mut`], which borrow instead of copying.

use crate::coord::{Extent, Index2, Region};
use crate::error::GridError;
use crate::materialize;
use crate::view::{View, ViewMut};
use crate::{Bounded, Evaluable, Writable};
use core::ops::{Index, IndexMut};

/// An owned 2-D buffer.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<T> {
    data: Vec<T>,
    extent: Extent,
}

impl<T: Copy + Default> Grid<T> {
    /// Allocates a grid with every cell set to `T::default()`.
    pub fn new(extent: Extent) -> Self {
        Self::filled(extent, T::default())
    }

    /// Materializes `source` over the full extent into a new grid.
    pub fn from_evaluable<E>(extent: Extent, source: E) -> Self
    where
        E: Evaluable<Output = T>,
    {
        let mut grid = Self::new(extent);
        materialize::set(&mut grid, source);
        grid
    }
}

impl<T: Copy> Grid<T> {
    /// Allocates a grid with every cell set to `value`.
    pub fn filled(extent: Extent, value: T) -> Self {
        Self {
            data: vec![value; extent.len()],
            extent,
        }
    }

    /// Builds a grid from a closure of the coordinates, in row-major order.
    ///
    /// Both axes of `extent` must fit in `i32` (see [`Extent::try_new`]).
    pub fn from_fn<F>(extent: Extent, mut f: F) -> Self
    where
        F: FnMut(i32, i32) -> T,
    {
        let end = Region::full(extent).end();
        let mut data = Vec::with_capacity(extent.len());
        for y in 0..end.y {
            for x in 0..end.x {
                data.push(f(x, y));
            }
        }
        Self { data, extent }
    }

    /// Takes ownership of an existing row-major buffer.
    pub fn from_vec(extent: Extent, data: Vec<T>) -> Result<Self, GridError> {
        if data.len() != extent.len() {
            return Err(GridError::BufferSize {
                len: data.len(),
                extent,
            });
        }
        Ok(Self { data, extent })
    }

    /// Reads the cell at `(x, y)`.
    #[inline(always)]
    pub fn get(&self, x: i32, y: i32) -> T {
        self.data[self.linear_index(x, y)]
    }

    /// Materializes `source` over the full extent of this grid.
    pub fn assign<E>(&mut self, source: E) -> &mut Self
    where
        E: Evaluable<Output = T>,
    {
        materialize::set(self, source);
        self
    }

    /// Sets every cell to `value`.
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }
}

impl<T> Grid<T> {
    /// Columns by rows.
    #[inline(always)]
    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// The full region `[0, extent.x) x [0, extent.y)`.
    #[inline]
    pub fn region(&self) -> Region {
        Region::full(self.extent)
    }

    /// The backing buffer, row-major.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// The backing buffer, row-major.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consumes the grid, returning the buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// A full-extent read-only alias of this grid's buffer.
    #[inline]
    pub fn alias(&self) -> View<'_, Self> {
        View::new(self, self.region())
    }

    /// A full-extent writable alias of this grid's buffer.
    #[inline]
    pub fn alias_mut(&mut self) -> ViewMut<'_, Self> {
        let region = self.region();
        ViewMut::new(self, region)
    }

    /// Row-major offset of `(x, y)`.
    ///
    /// Out-of-range coordinates are a caller error: debug builds assert,
    /// release builds index whatever cell the offset lands on (or panic past
    /// the end of the buffer).
    #[inline(always)]
    pub fn linear_index(&self, x: i32, y: i32) -> usize {
        debug_assert!(
            x >= 0 && y >= 0 && (x as usize) < self.extent.x && (y as usize) < self.extent.y,
            "({x}, {y}) outside grid of extent {}",
            self.extent
        );
        y as usize * self.extent.x + x as usize
    }
}

impl<T: Copy> Evaluable for Grid<T> {
    type Output = T;
    #[inline(always)]
    fn eval(&self, x: i32, y: i32) -> T {
        self.data[self.linear_index(x, y)]
    }
}

impl<T> Bounded for Grid<T> {
    #[inline(always)]
    fn extent(&self) -> Extent {
        self.extent
    }
}

impl<T> Writable for Grid<T> {
    type Element = T;
    #[inline(always)]
    fn slot(&mut self, x: i32, y: i32) -> &mut T {
        let i = self.linear_index(x, y);
        &mut self.data[i]
    }
}

impl<T> Index<(i32, i32)> for Grid<T> {
    type Output = T;
    #[inline(always)]
    fn index(&self, (x, y): (i32, i32)) -> &T {
        &self.data[self.linear_index(x, y)]
    }
}

impl<T> IndexMut<(i32, i32)> for Grid<T> {
    #[inline(always)]
    fn index_mut(&mut self, (x, y): (i32, i32)) -> &mut T {
        let i = self.linear_index(x, y);
        &mut self.data[i]
    }
}

impl<T> Index<Index2> for Grid<T> {
    type Output = T;
    #[inline(always)]
    fn index(&self, at: Index2) -> &T {
        &self.data[self.linear_index(at.x, at.y)]
    }
}

impl<T> IndexMut<Index2> for Grid<T> {
    #[inline(always)]
    fn index_mut(&mut self, at: Index2) -> &mut T {
        let i = self.linear_index(at.x, at.y);
        &mut self.data[i]
    }
}

/// Flat row-major access.
impl<T> Index<usize> for Grid<T> {
    type Output = T;
    #[inline(always)]
    fn index(&self, i: usize) -> &T {
        &self.data[i]
    }
}

impl<T> IndexMut<usize> for Grid<T> {
    #[inline(always)]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.data[i]
    }
}
