//! Uniform random initial data.
//!
//! [`RandomFill`] owns its generator. There is no process-wide source, so a
//! seeded fill reproduces exactly and two fillers never share state.

use crate::coord::Region;
use crate::error::GridError;
use crate::Writable;
use log::trace;
use rand::distributions::uniform::SampleUniform;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Writes uniformly distributed values into grids.
#[derive(Debug, Clone)]
pub struct RandomFill<R> {
    rng: R,
}

impl RandomFill<StdRng> {
    /// A reproducible filler.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// A filler seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> RandomFill<R> {
    /// Wraps an existing generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// The wrapped generator.
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Fills the target's full extent with values drawn from `[low, high)`.
    pub fn fill<W>(
        &mut self,
        target: &mut W,
        low: W::Element,
        high: W::Element,
    ) -> Result<(), GridError>
    where
        W: Writable + ?Sized,
        W::Element: SampleUniform + PartialOrd,
    {
        let region = Region::full(target.extent());
        self.fill_region(target, region, low, high)
    }

    /// Fills `region` of the target with values drawn from `[low, high)`.
    pub fn fill_region<W>(
        &mut self,
        target: &mut W,
        region: Region,
        low: W::Element,
        high: W::Element,
    ) -> Result<(), GridError>
    where
        W: Writable + ?Sized,
        W::Element: SampleUniform + PartialOrd,
    {
        // Also rejects NaN bounds.
        if !(low < high) {
            return Err(GridError::EmptyRange);
        }
        trace!("random fill {region}");
        let dist = Uniform::new(low, high);
        let (b, e) = (region.begin(), region.end());
        for y in b.y..e.y {
            for x in b.x..e.x {
                *target.slot(x, y) = dist.sample(&mut self.rng);
            }
        }
        Ok(())
    }
}
