// src/config.rs

//! Configuration for the relaxation demo.
//!
//! Every field has a default, so an empty JSON object (or no file at all)
//! is a valid configuration. Only the fields being changed need to appear:
//!
//! ```json
//! { "size": 129, "iterations": 2000, "log_every": 100 }
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading a configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config file {path:?}")]
    Io {
        /// The file that was requested.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The contents are not a valid configuration.
    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Settings for one red-black relaxation run on the unit square.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RelaxConfig {
    /// Grid points per side, boundary included.
    pub size: usize,
    /// Constant right-hand side `f` of `laplacian(u) = f`.
    pub source: f64,
    /// Value held on the boundary ring.
    pub boundary: f64,
    /// Upper bound on full sweeps.
    pub iterations: usize,
    /// Stop once the max-norm residual drops below this.
    pub tolerance: f64,
    /// Log the residual at `info` every this many sweeps. Zero disables it.
    pub log_every: usize,
    /// Seed for the random initial guess. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for RelaxConfig {
    fn default() -> Self {
        Self {
            size: 65,
            source: -1.0,
            boundary: 0.0,
            iterations: 5000,
            tolerance: 1e-6,
            log_every: 250,
            seed: Some(0x5eed),
        }
    }
}

impl RelaxConfig {
    /// Parses a configuration from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads and parses a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Grid spacing on the unit square, the same on both axes.
    pub fn spacing(&self) -> f64 {
        1.0 / self.size.saturating_sub(1).max(1) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn empty_object_is_default() {
        assert_eq!(RelaxConfig::from_json_str("{}").unwrap(), RelaxConfig::default());
    }

    #[test]
    fn partial_object_overrides_named_fields() {
        let cfg = RelaxConfig::from_json_str(r#"{ "size": 9, "seed": null }"#).unwrap();
        assert_eq!(cfg.size, 9);
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.iterations, RelaxConfig::default().iterations);
        assert_eq!(cfg.spacing(), 0.125);
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = RelaxConfig::from_json_str(r#"{ "size": "big" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = RelaxConfig::load("/nonexistent/relax.json").unwrap_err();
        assert!(err.to_string().contains("relax.json"));
    }
}
