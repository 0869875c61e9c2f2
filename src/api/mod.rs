//! HTTP API module for the Diversity Analytics Engine.
//!
//! This module provides the REST API endpoint for computing workforce
//! diversity metrics from a caller-supplied roster.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::AnalyticsRequest;
pub use response::ApiError;
pub use state::AppState;
