//! Plain-text dumps of evaluables, one row per line.

use crate::coord::Region;
use crate::{Bounded, Evaluable};
use core::fmt;

/// Formats `e` over a region: each row on its own line, each cell
/// right-aligned in 12 columns with 4 decimals.
///
/// ```ignore
/// println!("{}", gridflow::dump(&grid));
/// log::debug!("residual:\n{}", Dump::new(&r, grid.region().inset(1)));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Dump<E> {
    inner: E,
    region: Region,
}

impl<E> Dump<E> {
    /// Dumps `inner` over `region`.
    pub fn new(inner: E, region: Region) -> Self {
        Self { inner, region }
    }
}

impl<E> fmt::Display for Dump<E>
where
    E: Evaluable,
    E::Output: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (b, e) = (self.region.begin(), self.region.end());
        for y in b.y..e.y {
            for x in b.x..e.x {
                write!(f, "{:>12.4}", self.inner.eval(x, y))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Dumps a grid-shaped evaluable over its full extent.
pub fn dump<E: Evaluable + Bounded>(e: E) -> Dump<E> {
    let region = Region::full(e.extent());
    Dump::new(e, region)
}
