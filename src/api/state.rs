//! Shared handler state.

use std::sync::Arc;

use crate::config::{AnalyticsConfig, ConfigLoader};

/// State shared by every request handler.
///
/// The loader is consumed at startup; handlers only ever see the validated
/// [`AnalyticsConfig`], so a running server cannot observe a half-loaded or
/// unvalidated configuration.
#[derive(Clone)]
pub struct AppState {
    config: Arc<AnalyticsConfig>,
}

impl AppState {
    /// Builds the state from a loader, keeping only the validated configuration.
    pub fn new(loader: ConfigLoader) -> Self {
        Self {
            config: Arc::new(loader.into_config()),
        }
    }

    /// The validated analytics configuration.
    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }
}
