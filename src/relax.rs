//! # Red-Black Relaxation
//!
//! A Gauss-Seidel solver for the Poisson problem `laplacian(u) = f` with a
//! Dirichlet boundary, written entirely in terms of the expression algebra.
//!
//! Each half-sweep updates one [`Parity`] of the interior from the other:
//!
//! ```text
//! u(x, y) = ((u(x-1,y) + u(x+1,y)) / hx^2 + (u(x,y-1) + u(x,y+1)) / hy^2 - f(x, y))
//!           / (2 (1/hx^2 + 1/hy^2))
//! ```
//!
//! Red cells only read black neighbours and vice versa, so reading a
//! snapshot of `u` gives the same result as an in-place update. The snapshot
//! is what lets the target be borrowed mutably while the stencil reads it.
//! The outer ring of `u` is never written.

use crate::config::RelaxConfig;
use crate::coord::{Parity, Region};
use crate::error::GridError;
use crate::ext::EvaluableExt;
use crate::grid::Grid;
use crate::materialize::set_checkered;
use crate::ops::Sub;
use crate::reduce;
use crate::stencil::laplacian;
use log::{debug, info};

/// Outcome of [`RedBlack::run`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report {
    /// Full sweeps performed.
    pub sweeps: usize,
    /// Max-norm residual after the last sweep.
    pub residual: f64,
}

/// Red-black Gauss-Seidel sweeps with a reusable snapshot buffer.
#[derive(Debug, Clone)]
pub struct RedBlack {
    spacing: (f64, f64),
    scratch: Grid<f64>,
}

impl RedBlack {
    /// A solver for grids of `u`'s extent with spacing `(hx, hy)`.
    pub fn new(u: &Grid<f64>, spacing: (f64, f64)) -> Self {
        Self {
            spacing,
            scratch: Grid::new(u.extent()),
        }
    }

    /// The grid spacing `(hx, hy)`.
    pub fn spacing(&self) -> (f64, f64) {
        self.spacing
    }

    /// One full sweep: even cells, then odd cells.
    pub fn sweep(&mut self, u: &mut Grid<f64>, f: &Grid<f64>) {
        debug_assert_eq!(u.extent(), f.extent());
        debug_assert_eq!(u.extent(), self.scratch.extent());

        let (hx, hy) = self.spacing;
        let ix = 1.0 / (hx * hx);
        let iy = 1.0 / (hy * hy);
        let diag = 1.0 / (2.0 * (ix + iy));
        let interior = u.region().inset(1);

        for parity in Parity::BOTH {
            self.scratch.as_mut_slice().copy_from_slice(u.as_slice());
            let s = &self.scratch;
            let across = (s.tap::<{ -1 }, 0>() + s.tap::<1, 0>()).scale(ix);
            let down = (s.tap::<0, { -1 }>() + s.tap::<0, 1>()).scale(iy);
            let update = (across + down - f).scale(diag);
            set_checkered(u, interior, parity, update);
        }
    }

    /// Sweeps until the residual drops below `config.tolerance` or
    /// `config.iterations` sweeps have run.
    pub fn run(
        &mut self,
        u: &mut Grid<f64>,
        f: &Grid<f64>,
        config: &RelaxConfig,
    ) -> Result<Report, GridError> {
        let mut report = Report {
            sweeps: 0,
            residual: residual(u, f, self.spacing)?,
        };
        info!("initial residual {:.6e}", report.residual);

        while report.sweeps < config.iterations && report.residual >= config.tolerance {
            self.sweep(u, f);
            report.sweeps += 1;
            report.residual = residual(u, f, self.spacing)?;
            if config.log_every > 0 && report.sweeps % config.log_every == 0 {
                info!("sweep {:>6}: residual {:.6e}", report.sweeps, report.residual);
            } else {
                debug!("sweep {:>6}: residual {:.6e}", report.sweeps, report.residual);
            }
        }
        Ok(report)
    }
}

/// Max-norm of `laplacian(u) - f` over the interior of `u`.
///
/// Fails with [`GridError::EmptyRegion`] when `u` has no interior.
pub fn residual(u: &Grid<f64>, f: &Grid<f64>, spacing: (f64, f64)) -> Result<f64, GridError> {
    let interior: Region = u.region().inset(1);
    reduce::max(Sub(laplacian(u, spacing), f).abs(), interior)
}
