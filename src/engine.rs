//! Orchestration of a full diversity analytics run.
//!
//! [`DiversityEngine`] pulls the active roster, positions and prior snapshot
//! from its data providers, runs every analytics stage in sequence and
//! assembles a fully-populated [`AnalyticsResult`]. The engine is generic over
//! provider traits so the HTTP layer, tests and future database-backed
//! deployments share one orchestration path.

use std::collections::HashMap;

use chrono::{Months, NaiveDate, Utc};
use uuid::Uuid;

use crate::analytics::{
    analyze_pipeline, check_standard_compliance, classify_performance, classify_title,
    compare_trend, demographic_profile, department_breakdowns, estimate_pay_equity,
    evaluate_quota, tier_breakdowns,
};
use crate::config::AnalyticsConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AnalyticsResult, DepartmentBreakdown, DiversitySnapshot, Employee, Position, ReportingPeriod,
    WorkforceTotals,
};

/// Source of the active employee roster for a company.
pub trait EmployeeProvider {
    /// Returns the active employees of the company.
    fn active_employees(&self, company_id: &str) -> EngineResult<Vec<Employee>>;
}

/// Source of the position catalog for a company.
pub trait PositionProvider {
    /// Returns the positions of the company.
    fn positions(&self, company_id: &str) -> EngineResult<Vec<Position>>;
}

/// Source of historical diversity snapshots.
pub trait SnapshotProvider {
    /// Returns the most recent snapshot with `period_end` on or before the
    /// cutoff date, if any.
    fn latest_before(
        &self,
        company_id: &str,
        cutoff: NaiveDate,
    ) -> EngineResult<Option<DiversitySnapshot>>;
}

/// An in-memory dataset implementing every provider trait.
///
/// This is the backing store for the HTTP API, where the caller ships the
/// roster in the request body, and for tests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDataset {
    /// Employee roster; inactive employees are filtered out on read.
    pub employees: Vec<Employee>,
    /// Position catalog.
    pub positions: Vec<Position>,
    /// Historical snapshots.
    pub snapshots: Vec<DiversitySnapshot>,
}

impl EmployeeProvider for InMemoryDataset {
    fn active_employees(&self, _company_id: &str) -> EngineResult<Vec<Employee>> {
        Ok(self
            .employees
            .iter()
            .filter(|e| e.is_active())
            .cloned()
            .collect())
    }
}

impl PositionProvider for InMemoryDataset {
    fn positions(&self, _company_id: &str) -> EngineResult<Vec<Position>> {
        Ok(self.positions.clone())
    }
}

impl SnapshotProvider for InMemoryDataset {
    fn latest_before(
        &self,
        company_id: &str,
        cutoff: NaiveDate,
    ) -> EngineResult<Option<DiversitySnapshot>> {
        Ok(self
            .snapshots
            .iter()
            .filter(|s| s.company_id == company_id && s.period_end <= cutoff)
            .max_by_key(|s| s.period_end)
            .cloned())
    }
}

/// The diversity analytics engine.
pub struct DiversityEngine<E, P, S> {
    config: AnalyticsConfig,
    employees: E,
    positions: P,
    snapshots: S,
}

impl DiversityEngine<InMemoryDataset, InMemoryDataset, InMemoryDataset> {
    /// Builds an engine over a single in-memory dataset.
    pub fn in_memory(config: AnalyticsConfig, dataset: InMemoryDataset) -> Self {
        Self {
            config,
            employees: dataset.clone(),
            positions: dataset.clone(),
            snapshots: dataset,
        }
    }
}

impl<E, P, S> DiversityEngine<E, P, S>
where
    E: EmployeeProvider,
    P: PositionProvider,
    S: SnapshotProvider,
{
    /// Creates an engine from a validated configuration and data providers.
    pub fn new(config: AnalyticsConfig, employees: E, positions: P, snapshots: S) -> Self {
        Self {
            config,
            employees,
            positions,
            snapshots,
        }
    }

    /// Runs the full analytics computation for one company and period.
    ///
    /// Fails with [`EngineError::InvalidPeriod`] when the period is inverted
    /// and [`EngineError::NoActiveEmployees`] when the roster is empty; every
    /// other degenerate input (missing titles, empty tiers, no compensation
    /// data, no prior snapshot) degrades to zeroed figures instead of failing.
    pub fn compute_diversity_metrics(
        &self,
        company_id: &str,
        period: &ReportingPeriod,
    ) -> EngineResult<AnalyticsResult> {
        period.validate()?;

        let employees = self.employees.active_employees(company_id)?;
        let active: Vec<Employee> = employees.into_iter().filter(|e| e.is_active()).collect();
        if active.is_empty() {
            return Err(EngineError::NoActiveEmployees {
                company_id: company_id.to_string(),
            });
        }
        tracing::info!(
            company_id,
            total_employees = active.len(),
            "Computing diversity metrics"
        );

        let positions = self.positions.positions(company_id)?;
        let titles: HashMap<&str, &str> = positions
            .iter()
            .map(|p| (p.id.as_str(), p.title.as_str()))
            .collect();

        let catalog = self.config.catalog();
        let classified: Vec<_> = active
            .iter()
            .map(|employee| {
                let title = employee
                    .position_id
                    .as_deref()
                    .and_then(|id| titles.get(id).copied());
                (employee, classify_title(title, catalog))
            })
            .collect();

        let tiers = tier_breakdowns(&classified, catalog);
        let pipeline = analyze_pipeline(&tiers, catalog);
        let pay_equity = estimate_pay_equity(&active, self.config.pay_equity());

        let refs: Vec<&Employee> = active.iter().collect();
        let overall = demographic_profile(&refs);
        let totals = WorkforceTotals {
            total_employees: overall.total,
            women_percentage: overall.gender.women.percentage,
            men_percentage: overall.gender.men.percentage,
            disability_percentage: overall.disability.with_disability.percentage,
            minority_percentage: overall.ethnicity.minority.percentage,
        };

        let quota = evaluate_quota(
            overall.total,
            overall.disability.with_disability.count,
            self.config.quota(),
        );

        let populated_tiers = tiers.iter().filter(|t| t.demographics.total > 0).count() as u64;
        let standard_compliance =
            check_standard_compliance(&active, populated_tiers, self.config.compliance());

        let performance = classify_performance(
            pipeline.gender.leadership_average,
            totals.disability_percentage,
            quota.is_compliant,
            self.config.performance(),
        );

        let cutoff = snapshot_cutoff(period)?;
        let previous = self.snapshots.latest_before(company_id, cutoff)?;
        let trend = compare_trend(
            totals.women_percentage,
            totals.disability_percentage,
            previous,
        );

        let (top_departments, bottom_departments) = department_highlights(
            department_breakdowns(&active),
            self.config.department_highlight_count(),
        );

        tracing::debug!(
            company_id,
            rating = ?performance.rating,
            quota_compliant = quota.is_compliant,
            "Diversity metrics computed"
        );

        Ok(AnalyticsResult {
            calculation_id: Uuid::new_v4(),
            calculated_at: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            company_id: company_id.to_string(),
            period: *period,
            totals,
            tiers,
            pipeline,
            pay_equity,
            top_departments,
            bottom_departments,
            quota,
            standard_compliance,
            performance,
            trend,
        })
    }
}

/// Computes the snapshot cutoff: twelve months before the period start.
fn snapshot_cutoff(period: &ReportingPeriod) -> EngineResult<NaiveDate> {
    period
        .start_date
        .checked_sub_months(Months::new(12))
        .ok_or_else(|| EngineError::CalculationError {
            message: format!("snapshot cutoff underflows for {}", period.start_date),
        })
}

/// Splits the department breakdowns into top-N and bottom-N by diversity
/// score. Ties break alphabetically so output is deterministic.
fn department_highlights(
    mut departments: Vec<DepartmentBreakdown>,
    highlight_count: usize,
) -> (Vec<DepartmentBreakdown>, Vec<DepartmentBreakdown>) {
    departments.sort_by(|a, b| {
        b.demographics
            .diversity_score
            .cmp(&a.demographics.diversity_score)
            .then_with(|| a.department.cmp(&b.department))
    });

    let top: Vec<DepartmentBreakdown> =
        departments.iter().take(highlight_count).cloned().collect();
    let mut bottom: Vec<DepartmentBreakdown> = departments
        .iter()
        .rev()
        .take(highlight_count)
        .cloned()
        .collect();
    bottom.sort_by(|a, b| {
        a.demographics
            .diversity_score
            .cmp(&b.demographics.diversity_score)
            .then_with(|| a.department.cmp(&b.department))
    });
    (top, bottom)
}
