//! Core data models for the Diversity Analytics Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod analytics_result;
mod employee;
mod period;
mod snapshot;

pub use analytics_result::{
    AnalyticsResult, CategoryShare, DemographicProfile, DepartmentBreakdown, DisabilityBreakdown,
    EthnicityBreakdown, FunnelStage, GenderBreakdown, PayEquityPreview, PerformanceClassification,
    PerformanceRating, PipelineAnalysis, PipelineGap, QuotaCompliance, StandardCompliance,
    TierBreakdown, TrendComparison, WorkforceTotals,
};
pub use employee::{
    Employee, EmploymentStatus, Ethnicity, Gender, Position, UNSPECIFIED_DEPARTMENT,
};
pub use period::ReportingPeriod;
pub use snapshot::DiversitySnapshot;
