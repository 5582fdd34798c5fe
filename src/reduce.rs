//! # Reductions
//!
//! Folds an evaluable over a rectangle to a single value. Like
//! [`materialize`](crate::materialize), these are loops that actually
//! evaluate; everything else in the crate only builds expressions.
//!
//! `sum` seeds with zero. `min` and `max` seed with the first cell visited,
//! so they reject an empty region instead of inventing an identity.

use crate::coord::Region;
use crate::error::GridError;
use crate::numeric::Element;
use crate::{Bounded, Evaluable};
use log::trace;

/// Row-major fold of `e` over `region`.
#[inline]
fn fold<E, A>(e: &E, region: Region, init: A, mut f: impl FnMut(A, E::Output) -> A) -> A
where
    E: Evaluable + ?Sized,
{
    let (b, end) = (region.begin(), region.end());
    let mut acc = init;
    for y in b.y..end.y {
        for x in b.x..end.x {
            acc = f(acc, e.eval(x, y));
        }
    }
    acc
}

/// Sum of `e` over `region`. An empty region sums to zero.
pub fn sum<E>(e: E, region: Region) -> E::Output
where
    E: Evaluable,
    E::Output: Element,
{
    trace!("sum over {region}");
    fold(&e, region, <E::Output as Element>::ZERO, |acc, v| acc + v)
}

/// Least value of `e` over `region`.
///
/// Incomparable values (`NaN`) never replace the running minimum.
pub fn min<E>(e: E, region: Region) -> Result<E::Output, GridError>
where
    E: Evaluable,
    E::Output: PartialOrd,
{
    trace!("min over {region}");
    extremum(&e, region, |v, best| v < best)
}

/// Greatest value of `e` over `region`.
///
/// Incomparable values (`NaN`) never replace the running maximum.
pub fn max<E>(e: E, region: Region) -> Result<E::Output, GridError>
where
    E: Evaluable,
    E::Output: PartialOrd,
{
    trace!("max over {region}");
    extremum(&e, region, |v, best| v > best)
}

fn extremum<E>(
    e: &E,
    region: Region,
    better: impl Fn(&E::Output, &E::Output) -> bool,
) -> Result<E::Output, GridError>
where
    E: Evaluable,
{
    if region.is_empty() {
        return Err(GridError::EmptyRegion(region));
    }
    let b = region.begin();
    let seed = e.eval(b.x, b.y);
    Ok(fold(e, region, seed, |best, v| {
        if better(&v, &best) {
            v
        } else {
            best
        }
    }))
}

/// Sum over the full extent.
pub fn sum_all<E>(e: E) -> E::Output
where
    E: Evaluable + Bounded,
    E::Output: Element,
{
    let region = Region::full(e.extent());
    sum(e, region)
}

/// Least value over the full extent.
pub fn min_all<E>(e: E) -> Result<E::Output, GridError>
where
    E: Evaluable + Bounded,
    E::Output: PartialOrd,
{
    let region = Region::full(e.extent());
    min(e, region)
}

/// Greatest value over the full extent.
pub fn max_all<E>(e: E) -> Result<E::Output, GridError>
where
    E: Evaluable + Bounded,
    E::Output: PartialOrd,
{
    let region = Region::full(e.extent());
    max(e, region)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::Extent;
    use crate::grid::Grid;
    use crate::view::view;
    use test_log::test;

    fn numbered() -> Grid<i32> {
        Grid::from_fn(Extent::new(5, 5), |x, y| x + 10 * y)
    }

    #[test]
    fn five_by_five_scenario() {
        let a = numbered();
        let all = Region::new((0, 0), (5, 5)).unwrap();
        assert_eq!(sum(&a, all), 550);
        assert_eq!(max(&a, all), Ok(44));
        assert_eq!(min(&a, all), Ok(0));
    }

    #[test]
    fn full_extent_helpers_agree_with_explicit_region() {
        let a = numbered();
        assert_eq!(sum_all(&a), 550);
        assert_eq!(max_all(&a), Ok(44));
        assert_eq!(min_all(&a), Ok(0));
    }

    #[test]
    fn min_is_not_max_on_a_sub_rectangle() {
        let a = numbered();
        let r = Region::new((1, 2), (3, 4)).unwrap();
        assert_eq!(min(&a, r), Ok(21));
        assert_eq!(max(&a, r), Ok(32));
    }

    #[test]
    fn empty_region_is_rejected_by_extrema() {
        let a = numbered();
        let r = Region::new((2, 2), (2, 5)).unwrap();
        assert_eq!(min(&a, r), Err(GridError::EmptyRegion(r)));
        assert_eq!(max(&a, r), Err(GridError::EmptyRegion(r)));
        assert_eq!(sum(&a, r), 0);
    }

    #[test]
    fn reductions_see_through_views_and_expressions() {
        let a = numbered();
        let v = view(&a, Region::new((1, 1), (3, 3)).unwrap());
        assert_eq!(sum_all(v), 11 + 12 + 21 + 22);
        let shifted = sum(&a - 10, Region::new((0, 1), (5, 2)).unwrap());
        assert_eq!(shifted, 10);
    }

    #[test]
    fn nan_does_not_poison_extrema() {
        let g = Grid::from_vec(Extent::new(3, 1), vec![1.0, f64::NAN, -2.0]).unwrap();
        assert_eq!(min_all(&g), Ok(-2.0));
        assert_eq!(max_all(&g), Ok(1.0));
    }
}
