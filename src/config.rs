//! Configuration for optimizer defaults.
//!
//! YAML with every field optional; missing fields take the defaults the
//! optimizer dialog starts from (fix accessibility to AA, recommend text
//! settings, no harmonization at 50% strength).

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::optimizer::{OptimizerOptions, PaletteOptimizer};

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Configuration version.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Optimizer settings.
    #[serde(default)]
    pub optimizer: OptimizerOptions,
}

fn default_version() -> u32 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            optimizer: OptimizerOptions::default(),
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads and validates configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .map_err(|_| Error::ConfigNotFound(path.display().to_string()))?;

        let config = Self::parse(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails.
    pub fn parse(yaml: &str) -> Result<Self> {
        serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map_or(0, |l| l.line());
            Error::ConfigParse {
                line,
                message: e.to_string(),
            }
        })
    }

    /// Loads configuration with fallback to defaults.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            debug!(error = %e, "using default configuration");
            Self::default()
        })
    }

    /// Checks values serde cannot express as types.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigInvalid`] naming the offending key.
    pub fn validate(&self) -> Result<()> {
        self.optimizer.validate().map_err(|e| match e {
            Error::ConfigInvalid { key, message } => Error::ConfigInvalid {
                key: format!("optimizer.{key}"),
                message,
            },
            other => other,
        })
    }

    /// The optimizer options.
    #[must_use]
    pub fn optimizer_options(&self) -> OptimizerOptions {
        self.optimizer
    }

    /// An optimizer running with these options.
    #[must_use]
    pub fn optimizer(&self) -> PaletteOptimizer {
        PaletteOptimizer::new(self.optimizer)
    }
}
