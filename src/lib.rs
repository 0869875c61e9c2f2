//! Workforce Diversity Analytics Engine
//!
//! This crate computes diversity-by-hierarchy-level analytics for an employee
//! roster: it infers each employee's organizational tier from a free-text job
//! title, aggregates demographic breakdowns per tier and per department, and
//! evaluates diversity indices, pipeline gaps, pay equity, legal quota
//! compliance, reporting-standard compliance, performance classification and
//! period-over-period trends.

#![warn(missing_docs)]

pub mod analytics;
pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
