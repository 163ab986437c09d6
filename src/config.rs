//! Benchmark configuration
//!
//! Values are layered: built-in defaults, then an optional TOML file, then
//! `SBSA_*` environment variables (`SBSA_NUM_ITEMS=50000`,
//! `SBSA_CATEGORIES=Low,High`).

use crate::error::{Error, Result};
use crate::slots::category::{CategorySet, PRIORITY_CLASSES};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Configuration for benchmark and demo runs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SbsaConfig {
    /// Category labels, in slot order
    pub categories: Vec<String>,
    /// Items per benchmark run
    pub num_items: usize,
    /// Workload RNG seed (unseeded when absent)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Workload sizes for a sweep
    pub sweep_sizes: Vec<usize>,
}

impl Default for SbsaConfig {
    fn default() -> Self {
        Self {
            categories: PRIORITY_CLASSES.iter().map(|s| s.to_string()).collect(),
            num_items: 10_000,
            seed: None,
            sweep_sizes: vec![1_000, 5_000, 10_000],
        }
    }
}

impl SbsaConfig {
    /// Load defaults, then `path` (if any), then the environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let defaults = Config::try_from(&Self::default()).map_err(config_error)?;
        let mut builder = Config::builder().add_source(defaults);

        if let Some(path) = path {
            debug!(path = ?path, "Loading configuration file");
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix("SBSA")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("categories")
                .with_list_parse_key("sweep_sizes"),
        );

        let config: Self = builder
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(config_error)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML document; missing keys take their defaults
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(s).map_err(|e| Error::Config(format!("Invalid TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Check that the configured categories and sizes are usable
    pub fn validate(&self) -> Result<()> {
        self.category_set()?;
        if self.num_items == 0 {
            return Err(Error::InvalidInput("num_items must be positive".to_string()));
        }
        if self.sweep_sizes.contains(&0) {
            return Err(Error::InvalidInput(
                "sweep_sizes must all be positive".to_string(),
            ));
        }
        Ok(())
    }

    pub fn category_set(&self) -> Result<CategorySet> {
        CategorySet::new(self.categories.iter().cloned())
    }
}

fn config_error(e: config::ConfigError) -> Error {
    Error::Config(e.to_string())
}
