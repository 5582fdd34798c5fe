//! # Materialization
//!
//! The only place expressions are evaluated cell by cell. Every form walks
//! the target region in row-major order and stores `source(x, y)` into
//! `target(x, y)`, each cell independently:
//!
//! | Function              | Cells visited |
//! |-----------------------|---------------|
//! | [`set`]               | the target's full extent |
//! | [`set_region`]        | an explicit rectangle |
//! | [`set_strided`]       | every `step.x`-th column of every `step.y`-th row |
//! | [`set_checkered`]     | one color of the red-black two-coloring |
//! | [`set_masked`]        | cells of the full extent where `mask(x, y)` holds |
//! | [`set_masked_region`] | cells of a rectangle where `mask(x, y)` holds |
//!
//! The target is taken by `&mut` and the source by value, so a source that
//! reads the target's own buffer does not borrow-check. Red-black schemes
//! that need in-place updates snapshot the target first (see
//! [`relax`](crate::relax)).
//!
//! Disjoint target regions are independent, so a caller can split one
//! assignment into several `set_region` calls over non-overlapping views.

use crate::coord::{Parity, Region, Step};
use crate::{Evaluable, Writable};
use log::trace;

/// Assigns `source` over the target's full extent.
#[inline]
pub fn set<W, E>(target: &mut W, source: E)
where
    W: Writable + ?Sized,
    E: Evaluable<Output = W::Element>,
{
    let region = Region::full(target.extent());
    set_region(target, region, source);
}

/// Assigns `source` over `region`.
pub fn set_region<W, E>(target: &mut W, region: Region, source: E)
where
    W: Writable + ?Sized,
    E: Evaluable<Output = W::Element>,
{
    trace!("set {region}");
    let (b, e) = (region.begin(), region.end());
    for y in b.y..e.y {
        for x in b.x..e.x {
            *target.slot(x, y) = source.eval(x, y);
        }
    }
}

/// Assigns `source` at `(begin.x + i * step.x, begin.y + j * step.y)` inside
/// `region`. Used for coarsened sampling.
pub fn set_strided<W, E>(target: &mut W, region: Region, step: Step, source: E)
where
    W: Writable + ?Sized,
    E: Evaluable<Output = W::Element>,
{
    trace!("set {region} strided by ({}, {})", step.x(), step.y());
    let (b, e) = (region.begin(), region.end());
    let mut y = b.y;
    while y < e.y {
        let mut x = b.x;
        while x < e.x {
            *target.slot(x, y) = source.eval(x, y);
            x += step.x();
        }
        y += step.y();
    }
}

/// Assigns `source` on one color of `region`'s checkerboard.
///
/// Row `y` starts at `begin.x + (y + parity) mod 2` and steps by two, so
/// the two parities partition the region exactly.
pub fn set_checkered<W, E>(target: &mut W, region: Region, parity: Parity, source: E)
where
    W: Writable + ?Sized,
    E: Evaluable<Output = W::Element>,
{
    trace!("set {region} on {parity:?} cells");
    let (b, e) = (region.begin(), region.end());
    for y in b.y..e.y {
        let mut x = parity.row_start(b.x, y);
        while x < e.x {
            *target.slot(x, y) = source.eval(x, y);
            x += 2;
        }
    }
}

/// Assigns `source` over the target's full extent wherever `mask` holds.
#[inline]
pub fn set_masked<W, M, E>(target: &mut W, mask: M, source: E)
where
    W: Writable + ?Sized,
    M: Evaluable<Output = bool>,
    E: Evaluable<Output = W::Element>,
{
    let region = Region::full(target.extent());
    set_masked_region(target, region, mask, source);
}

/// Assigns `source` over `region` wherever `mask` holds.
///
/// The mask is read at the same coordinates as the source. Unselected
/// cells keep their value and the source is not evaluated there.
pub fn set_masked_region<W, M, E>(target: &mut W, region: Region, mask: M, source: E)
where
    W: Writable + ?Sized,
    M: Evaluable<Output = bool>,
    E: Evaluable<Output = W::Element>,
{
    trace!("set {region} masked");
    let (b, e) = (region.begin(), region.end());
    for y in b.y..e.y {
        for x in b.x..e.x {
            if mask.eval(x, y) {
                *target.slot(x, y) = source.eval(x, y);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::Extent;
    use crate::evaluable::{constant, from_fn};
    use crate::grid::Grid;
    use test_log::test;

    #[test]
    fn set_region_touches_only_the_rectangle() {
        let mut g = Grid::filled(Extent::new(4, 3), 0i32);
        set_region(&mut g, Region::new((1, 1), (3, 2)).unwrap(), constant(7));
        assert_eq!(g.as_slice(), &[0, 0, 0, 0, 0, 7, 7, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn strided_visits_every_other_cell() {
        let mut g = Grid::filled(Extent::new(5, 4), 0i32);
        let region = g.region();
        set_strided(&mut g, region, Step::new(2, 3).unwrap(), constant(1));
        let written: Vec<(i32, i32)> = (0..4)
            .flat_map(|y| (0..5).map(move |x| (x, y)))
            .filter(|&(x, y)| g[(x, y)] == 1)
            .collect();
        assert_eq!(written, vec![(0, 0), (2, 0), (4, 0), (0, 3), (2, 3), (4, 3)]);
    }

    #[test]
    fn checkered_even_starts_on_the_diagonal() {
        let mut g = Grid::filled(Extent::new(4, 2), 0i32);
        let region = g.region();
        set_checkered(&mut g, region, Parity::Even, constant(1));
        assert_eq!(g.as_slice(), &[1, 0, 1, 0, 0, 1, 0, 1]);
    }

    #[test]
    fn masked_skips_source_where_mask_is_false() {
        let mut g = Grid::filled(Extent::new(2, 2), -1i32);
        let mask = from_fn(|x, _y| x == 0);
        // Reading column 1 would be out of range for this 1-wide source.
        let narrow = Grid::from_fn(Extent::new(1, 2), |_x, y| y);
        set_masked(&mut g, mask, &narrow);
        assert_eq!(g.as_slice(), &[0, -1, 1, -1]);
    }

    #[test]
    fn set_through_view_mut_writes_sub_rectangle() {
        let mut g = Grid::filled(Extent::new(3, 3), 0i32);
        {
            let mut window = g.alias_mut();
            let mut inner = window.sub_view(Region::new((1, 1), (3, 3)).unwrap());
            set(&mut inner, from_fn(|x, y| 1 + x + 2 * y));
        }
        assert_eq!(g.as_slice(), &[0, 0, 0, 0, 1, 2, 0, 3, 4]);
    }
}
