//! # Views
//!
//! Non-owning windows onto an existing evaluable. A view translates
//! coordinates by its region's begin corner and reports the region's extent:
//!
//! ```text
//! view(x, y) = inner(begin.x + x, begin.y + y)      extent = end - begin
//! ```
//!
//! [`View`] borrows shared and is `Copy`, so it drops straight into
//! expressions. [`ViewMut`] borrows exclusively and writes pass through to
//! the underlying storage; it is how a sub-rectangle of a larger grid becomes
//! a materialization target. Views nest.

use crate::coord::{Extent, Region};
use crate::{Bounded, Evaluable, Writable};

/// A read-only window.
#[derive(Debug)]
pub struct View<'a, E: ?Sized> {
    inner: &'a E,
    region: Region,
}

impl<'a, E: ?Sized> Clone for View<'a, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, E: ?Sized> Copy for View<'a, E> {}

impl<'a, E: ?Sized> View<'a, E> {
    /// Windows `inner` onto `region`.
    #[inline]
    pub fn new(inner: &'a E, region: Region) -> Self {
        Self { inner, region }
    }

    /// The window in the wrapped evaluable's coordinates.
    #[inline(always)]
    pub fn region(&self) -> Region {
        self.region
    }

    /// The wrapped evaluable.
    #[inline(always)]
    pub fn inner(&self) -> &'a E {
        self.inner
    }
}

impl<'a, E: Evaluable + ?Sized> Evaluable for View<'a, E> {
    type Output = E::Output;
    #[inline(always)]
    fn eval(&self, x: i32, y: i32) -> Self::Output {
        let b = self.region.begin();
        self.inner.eval(b.x + x, b.y + y)
    }
}

impl<'a, E: ?Sized> Bounded for View<'a, E> {
    #[inline(always)]
    fn extent(&self) -> Extent {
        self.region.extent()
    }
}

/// A writable window.
#[derive(Debug)]
pub struct ViewMut<'a, G: ?Sized> {
    inner: &'a mut G,
    region: Region,
}

impl<'a, G: ?Sized> ViewMut<'a, G> {
    /// Windows `inner` onto `region`.
    #[inline]
    pub fn new(inner: &'a mut G, region: Region) -> Self {
        Self { inner, region }
    }

    /// The window in the wrapped storage's coordinates.
    #[inline(always)]
    pub fn region(&self) -> Region {
        self.region
    }

    /// A nested writable window, `region` given in this view's coordinates.
    pub fn sub_view(&mut self, region: Region) -> ViewMut<'_, Self> {
        ViewMut::new(self, region)
    }

    /// A read-only window onto the same cells.
    pub fn as_view(&self) -> View<'_, G> {
        View::new(&*self.inner, self.region)
    }
}

impl<'a, G: Evaluable + ?Sized> Evaluable for ViewMut<'a, G> {
    type Output = G::Output;
    #[inline(always)]
    fn eval(&self, x: i32, y: i32) -> Self::Output {
        let b = self.region.begin();
        self.inner.eval(b.x + x, b.y + y)
    }
}

impl<'a, G: ?Sized> Bounded for ViewMut<'a, G> {
    #[inline(always)]
    fn extent(&self) -> Extent {
        self.region.extent()
    }
}

impl<'a, G: Writable + ?Sized> Writable for ViewMut<'a, G> {
    type Element = G::Element;
    #[inline(always)]
    fn slot(&mut self, x: i32, y: i32) -> &mut Self::Element {
        let b = self.region.begin();
        self.inner.slot(b.x + x, b.y + y)
    }
}

/// A read-only window of `inner` over `region`.
#[inline]
pub fn view<E: Evaluable + ?Sized>(inner: &E, region: Region) -> View<'_, E> {
    View::new(inner, region)
}

/// A writable window of `inner` over `region`.
#[inline]
pub fn view_mut<G: Writable + ?Sized>(inner: &mut G, region: Region) -> ViewMut<'_, G> {
    ViewMut::new(inner, region)
}
