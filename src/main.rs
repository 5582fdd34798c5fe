// In src/main.rs

//! Solves `laplacian(u) = f` on the unit square by red-black relaxation.
//!
//! Usage: `gridflow [config.json]`. Without an argument the defaults in
//! [`RelaxConfig`] apply. Set `RUST_LOG=debug` to see every sweep.

use anyhow::Context;
use gridflow::config::RelaxConfig;
use gridflow::relax::RedBlack;
use gridflow::{dump, reduce, Extent, Grid, RandomFill};
use log::{debug, info, warn};

// Grids at most this wide are dumped at debug level once solved.
const MAX_DUMP_SIZE: usize = 12;

fn main() -> anyhow::Result<()> {
    // Initialize the logger. Default filter is "info" if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => RelaxConfig::load(&path)
            .with_context(|| format!("loading configuration from {path}"))?,
        None => {
            info!("No configuration given, using defaults.");
            RelaxConfig::default()
        }
    };
    info!("{config:?}");

    if config.size < 3 {
        warn!("size {} leaves no interior to relax", config.size);
    }

    let extent = Extent::new(config.size, config.size);
    let h = config.spacing();

    let mut u = Grid::filled(extent, config.boundary);
    let mut fill = match config.seed {
        Some(seed) => RandomFill::seeded(seed),
        None => RandomFill::from_entropy(),
    };
    let interior = u.region().inset(1);
    fill.fill_region(&mut u, interior, 0.0, 1.0)
        .context("drawing the initial guess")?;

    let f = Grid::filled(extent, config.source);

    let mut solver = RedBlack::new(&u, (h, h));
    let report = solver
        .run(&mut u, &f, &config)
        .context("relaxing on a grid without interior")?;

    if report.residual < config.tolerance {
        info!(
            "Converged after {} sweeps, residual {:.6e}",
            report.sweeps, report.residual
        );
    } else {
        warn!(
            "Stopped after {} sweeps, residual {:.6e} above tolerance {:.1e}",
            report.sweeps, report.residual, config.tolerance
        );
    }

    let c = (config.size / 2) as i32;
    info!("u at center: {:.6}", u[(c, c)]);
    info!(
        "u range: [{:.6}, {:.6}]",
        reduce::min_all(&u)?,
        reduce::max_all(&u)?
    );

    if config.size <= MAX_DUMP_SIZE {
        debug!("solution:\n{}", dump(&u));
    }

    Ok(())
}
