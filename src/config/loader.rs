//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading analytics
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{AnalyticsConfig, QuotaTable, ThresholdsConfig, TierCatalog};

/// Loads and provides access to the analytics configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// validates them into an [`AnalyticsConfig`].
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── tiers.yaml       # Hierarchy tier catalog
/// ├── quota.yaml       # Disability quota bands
/// └── thresholds.yaml  # Compliance/performance/pay-equity thresholds
/// ```
///
/// # Example
///
/// ```no_run
/// use diversity_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Tiers: {}", loader.config().catalog().tiers.len());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: AnalyticsConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/default")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML (`ConfigParseError`)
    /// - The parsed configuration fails validation (`InvalidConfig`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let catalog = Self::load_yaml::<TierCatalog>(&path.join("tiers.yaml"))?;
        let quota = Self::load_yaml::<QuotaTable>(&path.join("quota.yaml"))?;
        let thresholds = Self::load_yaml::<ThresholdsConfig>(&path.join("thresholds.yaml"))?;

        let config = AnalyticsConfig::new(catalog, quota, thresholds)?;
        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the validated configuration.
    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    /// Consumes the loader, returning the validated configuration.
    pub fn into_config(self) -> AnalyticsConfig {
        self.config
    }
}
