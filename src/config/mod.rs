//! Configuration loading and management for the Diversity Analytics Engine.
//!
//! This module provides functionality to load the hierarchy-tier catalog, the
//! disability-quota table and the numeric thresholds from YAML files, and to
//! validate them into a single [`AnalyticsConfig`].
//!
//! # Example
//!
//! ```no_run
//! use diversity_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/default").unwrap();
//! println!("Default tier: {}", loader.config().catalog().default_tier().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AnalyticsConfig, ComplianceThresholds, PayEquityThresholds, PerformanceThresholds, QuotaBand,
    QuotaTable, ThresholdsConfig, TierCatalog, TierDefinition,
};
