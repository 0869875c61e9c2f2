//! Analytics result models.
//!
//! This module contains the [`AnalyticsResult`] type and the derived breakdown
//! structures produced by one engine invocation: per-tier and per-department
//! demographic profiles, pipeline gaps, pay equity, quota and
//! reporting-standard compliance, performance classification and trend
//! comparison.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{DiversitySnapshot, ReportingPeriod};

/// A count together with its percentage of the owning group.
///
/// Percentages are always in `[0, 100]`; zero-member groups report `0`
/// rather than dividing by zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryShare {
    /// Number of group members in this category.
    pub count: u64,
    /// Share of the group total, in percent (2 decimal places).
    pub percentage: Decimal,
}

/// Gender composition of a group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenderBreakdown {
    /// Women.
    pub women: CategoryShare,
    /// Men.
    pub men: CategoryShare,
    /// Other self-declared genders.
    pub other: CategoryShare,
    /// No declaration on record.
    pub undeclared: CategoryShare,
}

/// Disability composition of a group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisabilityBreakdown {
    /// Employees with a registered disability.
    pub with_disability: CategoryShare,
    /// Employees without a registered disability.
    pub without_disability: CategoryShare,
}

/// Ethnicity composition of a group, including the minority rollup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EthnicityBreakdown {
    /// White.
    pub white: CategoryShare,
    /// Black.
    pub black: CategoryShare,
    /// Brown / mixed.
    pub brown: CategoryShare,
    /// Asian.
    pub asian: CategoryShare,
    /// Indigenous.
    pub indigenous: CategoryShare,
    /// No declaration on record.
    pub not_declared: CategoryShare,
    /// Rollup of the minority categories (black, brown, asian, indigenous).
    pub minority: CategoryShare,
}

/// Full demographic profile of one group (a tier or a department).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemographicProfile {
    /// Number of employees in the group.
    pub total: u64,
    /// Gender composition.
    pub gender: GenderBreakdown,
    /// Disability composition.
    pub disability: DisabilityBreakdown,
    /// Ethnicity composition.
    pub ethnicity: EthnicityBreakdown,
    /// Intersectional count: women who are also an ethnic minority.
    pub minority_women: CategoryShare,
    /// Simpson diversity score over joint (gender, ethnicity) categories,
    /// scaled to 0-100.
    pub diversity_score: Decimal,
}

/// Demographic profile of one hierarchy tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierBreakdown {
    /// Tier key from the catalog (e.g., "directorate").
    pub tier: String,
    /// Human-readable tier name.
    pub name: String,
    /// Tier rank; higher means closer to the top of the hierarchy.
    pub rank: u8,
    /// The tier's demographic profile.
    pub demographics: DemographicProfile,
}

/// Demographic profile of one department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentBreakdown {
    /// Department name.
    pub department: String,
    /// The department's demographic profile.
    pub demographics: DemographicProfile,
}

/// Base-versus-leadership comparison for one demographic dimension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineGap {
    /// Representation at the base tier, in percent.
    pub base_percentage: Decimal,
    /// Average representation across populated leadership tiers, in percent.
    pub leadership_average: Decimal,
    /// `base_percentage - leadership_average`. Positive means representation
    /// shrinks going up the hierarchy.
    pub gap: Decimal,
}

/// One row of the per-tier representation funnel, in ascending rank order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunnelStage {
    /// Tier key.
    pub tier: String,
    /// Tier rank.
    pub rank: u8,
    /// Employees in the tier.
    pub total: u64,
    /// Women percentage at this tier.
    pub women_percentage: Decimal,
    /// Disability percentage at this tier.
    pub disability_percentage: Decimal,
    /// Ethnic-minority percentage at this tier.
    pub minority_percentage: Decimal,
}

/// Leadership-pipeline analysis: per-dimension gaps plus the tier funnel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineAnalysis {
    /// Key of the base (entry-level) tier.
    pub base_tier: String,
    /// Keys of the leadership tiers.
    pub leadership_tiers: Vec<String>,
    /// Gender (women) gap.
    pub gender: PipelineGap,
    /// Disability gap.
    pub disability: PipelineGap,
    /// Ethnic-minority gap.
    pub minority: PipelineGap,
    /// Per-tier funnel in ascending rank order.
    pub funnel: Vec<FunnelStage>,
}

/// Binary gender pay comparison.
///
/// This is a preview estimate: it controls for nothing (role, tenure,
/// performance) and compares raw arithmetic means.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayEquityPreview {
    /// Number of women with compensation data.
    pub women_sample_count: u64,
    /// Number of men with compensation data.
    pub men_sample_count: u64,
    /// Mean compensation across women with compensation data.
    pub women_average_compensation: Decimal,
    /// Mean compensation across men with compensation data.
    pub men_average_compensation: Decimal,
    /// `(men_avg - women_avg) / men_avg * 100`; `0` when `men_avg` is zero.
    pub gap_percentage: Decimal,
    /// True when the gap exceeds the configured significance threshold.
    pub has_significant_gap: bool,
}

/// Legal disability-quota evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotaCompliance {
    /// Total active employees.
    pub total_employees: u64,
    /// Employees with a registered disability.
    pub disability_count: u64,
    /// Current disability percentage.
    pub disability_percentage: Decimal,
    /// Minimum percentage required by the quota table for this headcount.
    pub required_percentage: Decimal,
    /// Whether the current percentage meets the requirement.
    pub is_compliant: bool,
    /// Hires needed to reach the requirement; `0` when compliant.
    pub missing_hires: u64,
}

/// Reporting-standard data-completeness evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardCompliance {
    /// Whether the dataset meets every completeness and granularity threshold.
    pub is_compliant: bool,
    /// Share of employees with a declared gender, in percent.
    pub gender_completeness: Decimal,
    /// Share of employees with a declared ethnicity, in percent.
    pub ethnicity_completeness: Decimal,
    /// Number of hierarchy tiers with at least one employee.
    pub populated_tiers: u64,
    /// Conditions that failed, one entry per condition.
    pub missing_data: Vec<String>,
    /// Remediation guidance, parallel to `missing_data`.
    pub recommendations: Vec<String>,
}

/// Ordinal organizational performance rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceRating {
    /// Quota non-compliant or severely underrepresented leadership.
    Critical,
    /// Below-par leadership representation or disability inclusion.
    NeedsAttention,
    /// Solid but not exemplary.
    Good,
    /// Meets every threshold.
    Excellent,
}

/// Performance classification together with the inputs that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceClassification {
    /// The ordinal rating.
    pub rating: PerformanceRating,
    /// Average women percentage across populated leadership tiers.
    pub leadership_women_percentage: Decimal,
    /// Overall disability percentage.
    pub disability_percentage: Decimal,
    /// Whether the disability quota was met.
    pub quota_compliant: bool,
}

/// Period-over-period comparison against the prior snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendComparison {
    /// The prior snapshot, when one exists.
    pub previous: Option<DiversitySnapshot>,
    /// Current overall women percentage.
    pub current_women_percentage: Decimal,
    /// Current overall disability percentage.
    pub current_disability_percentage: Decimal,
    /// Signed change in women percentage (zero baseline without a snapshot).
    pub women_delta: Decimal,
    /// Signed change in disability percentage.
    pub disability_delta: Decimal,
    /// True when the women percentage rose against the prior period.
    pub is_improving: bool,
}

/// Workforce-wide totals and percentages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkforceTotals {
    /// Total active employees.
    pub total_employees: u64,
    /// Overall women percentage.
    pub women_percentage: Decimal,
    /// Overall men percentage.
    pub men_percentage: Decimal,
    /// Overall disability percentage.
    pub disability_percentage: Decimal,
    /// Overall ethnic-minority percentage.
    pub minority_percentage: Decimal,
}

/// The complete result of one analytics computation.
///
/// A returned result is always fully populated; failures happen before any
/// result is produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsResult {
    /// Unique identifier for this computation.
    pub calculation_id: Uuid,
    /// When the computation was performed.
    pub calculated_at: DateTime<Utc>,
    /// The version of the engine that performed the computation.
    pub engine_version: String,
    /// The company the computation covers.
    pub company_id: String,
    /// The reporting period the computation covers.
    pub period: ReportingPeriod,
    /// Workforce-wide totals.
    pub totals: WorkforceTotals,
    /// Per-tier breakdowns in ascending rank order; every catalog tier is
    /// present, zero-member tiers included.
    pub tiers: Vec<TierBreakdown>,
    /// Leadership-pipeline analysis.
    pub pipeline: PipelineAnalysis,
    /// Pay-equity preview.
    pub pay_equity: PayEquityPreview,
    /// Highest-scoring departments by diversity score.
    pub top_departments: Vec<DepartmentBreakdown>,
    /// Lowest-scoring departments by diversity score.
    pub bottom_departments: Vec<DepartmentBreakdown>,
    /// Legal quota evaluation.
    pub quota: QuotaCompliance,
    /// Reporting-standard completeness evaluation.
    pub standard_compliance: StandardCompliance,
    /// Performance classification.
    pub performance: PerformanceClassification,
    /// Period-over-period trend.
    pub trend: TrendComparison,
}
