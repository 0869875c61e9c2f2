//! Request types for the Diversity Analytics Engine API.
//!
//! This module defines the JSON request structures for the
//! `/analytics/diversity` endpoint.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::engine::InMemoryDataset;
use crate::models::{
    DiversitySnapshot, Employee, EmploymentStatus, Ethnicity, Gender, Position, ReportingPeriod,
};

/// Request body for the `/analytics/diversity` endpoint.
///
/// Carries the full roster for one company together with the reporting period
/// and, optionally, the prior-period snapshot for trend comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsRequest {
    /// The company the computation covers.
    pub company_id: String,
    /// The reporting period.
    pub period: PeriodRequest,
    /// The employee roster.
    pub employees: Vec<EmployeeRequest>,
    /// The position catalog referenced by `position_id`.
    #[serde(default)]
    pub positions: Vec<PositionRequest>,
    /// The prior-period snapshot, when the caller has one.
    #[serde(default)]
    pub previous_snapshot: Option<SnapshotRequest>,
}

/// Reporting period information in an analytics request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodRequest {
    /// The start date of the reporting period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the reporting period (inclusive).
    pub end_date: NaiveDate,
}

/// Employee information in an analytics request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's full name.
    pub full_name: String,
    /// Self-declared gender; defaults to undeclared.
    #[serde(default)]
    pub gender: Gender,
    /// Self-declared ethnicity; defaults to not declared.
    #[serde(default)]
    pub ethnicity: Ethnicity,
    /// Whether the employee has a registered disability.
    #[serde(default)]
    pub has_disability: bool,
    /// The registered disability type, when one exists.
    #[serde(default)]
    pub disability_type: Option<String>,
    /// The department the employee belongs to.
    #[serde(default)]
    pub department: Option<String>,
    /// Monthly compensation, when available.
    #[serde(default)]
    pub compensation: Option<Decimal>,
    /// Employment status.
    pub status: EmploymentStatus,
    /// Reference to the employee's position, when one is assigned.
    #[serde(default)]
    pub position_id: Option<String>,
}

/// Position information in an analytics request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionRequest {
    /// Unique identifier for the position.
    pub id: String,
    /// Free-text job title.
    pub title: String,
    /// Optional explicit level label.
    #[serde(default)]
    pub level: Option<String>,
}

/// Prior-period snapshot information in an analytics request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotRequest {
    /// End date of the period the snapshot covers.
    pub period_end: NaiveDate,
    /// Overall women percentage at that time.
    pub women_percentage: Decimal,
    /// Overall disability percentage at that time.
    pub disability_percentage: Decimal,
}

impl From<PeriodRequest> for ReportingPeriod {
    fn from(req: PeriodRequest) -> Self {
        ReportingPeriod {
            start_date: req.start_date,
            end_date: req.end_date,
        }
    }
}

impl From<EmployeeRequest> for Employee {
    fn from(req: EmployeeRequest) -> Self {
        Employee {
            id: req.id,
            full_name: req.full_name,
            gender: req.gender,
            ethnicity: req.ethnicity,
            has_disability: req.has_disability,
            disability_type: req.disability_type,
            department: req.department,
            compensation: req.compensation,
            status: req.status,
            position_id: req.position_id,
        }
    }
}

impl From<PositionRequest> for Position {
    fn from(req: PositionRequest) -> Self {
        Position {
            id: req.id,
            title: req.title,
            level: req.level,
        }
    }
}

impl SnapshotRequest {
    /// Converts to a domain snapshot for the given company.
    pub fn into_snapshot(self, company_id: &str) -> DiversitySnapshot {
        DiversitySnapshot {
            company_id: company_id.to_string(),
            period_end: self.period_end,
            women_percentage: self.women_percentage,
            disability_percentage: self.disability_percentage,
        }
    }
}

impl AnalyticsRequest {
    /// Converts the request body into an in-memory dataset for the engine.
    pub fn into_dataset(self) -> (String, ReportingPeriod, InMemoryDataset) {
        let company_id = self.company_id;
        let period = self.period.into();
        let dataset = InMemoryDataset {
            employees: self.employees.into_iter().map(Into::into).collect(),
            positions: self.positions.into_iter().map(Into::into).collect(),
            snapshots: self
                .previous_snapshot
                .into_iter()
                .map(|s| s.into_snapshot(&company_id))
                .collect(),
        };
        (company_id, period, dataset)
    }
}
