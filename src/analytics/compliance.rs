//! Reporting-standard compliance checking.
//!
//! Evaluates data completeness per demographic dimension against the
//! configured threshold (GRI 405-1-style, 90% by default) and requires a
//! minimum number of populated hierarchy tiers. The check fails closed: any
//! missing-data condition marks the dataset non-compliant, and each condition
//! carries a remediation recommendation.

use rust_decimal::Decimal;

use crate::config::ComplianceThresholds;
use crate::models::{Employee, Ethnicity, Gender, StandardCompliance};

use super::aggregation::percentage_of;

// Exact-count comparison against the floor. The rounded completeness
// percentage is for output only; an empty roster never meets a floor.
fn meets_floor(declared: u64, total: u64, floor: Decimal) -> bool {
    if total == 0 {
        return false;
    }
    Decimal::from(declared) * Decimal::from(100) >= floor * Decimal::from(total)
}

/// Evaluates reporting-standard compliance over the roster.
///
/// `populated_tiers` is the number of hierarchy tiers with at least one
/// classified employee.
pub fn check_standard_compliance(
    employees: &[Employee],
    populated_tiers: u64,
    thresholds: &ComplianceThresholds,
) -> StandardCompliance {
    let total = employees.len() as u64;
    let gender_declared = employees
        .iter()
        .filter(|e| e.gender != Gender::Undeclared)
        .count() as u64;
    let ethnicity_declared = employees
        .iter()
        .filter(|e| e.ethnicity != Ethnicity::NotDeclared)
        .count() as u64;

    let gender_completeness = percentage_of(gender_declared, total);
    let ethnicity_completeness = percentage_of(ethnicity_declared, total);

    let mut missing_data = Vec::new();
    let mut recommendations = Vec::new();

    if !meets_floor(gender_declared, total, thresholds.completeness_percentage) {
        missing_data.push("gender".to_string());
        recommendations.push(format!(
            "Collect self-declared gender; completeness is {}% against a {}% floor",
            gender_completeness, thresholds.completeness_percentage
        ));
    }
    if !meets_floor(ethnicity_declared, total, thresholds.completeness_percentage) {
        missing_data.push("ethnicity".to_string());
        recommendations.push(format!(
            "Collect self-declared ethnicity; completeness is {}% against a {}% floor",
            ethnicity_completeness, thresholds.completeness_percentage
        ));
    }
    if populated_tiers < thresholds.min_populated_tiers {
        missing_data.push("hierarchy_granularity".to_string());
        recommendations.push(format!(
            "Only {} hierarchy tiers are populated; review position titles so at least {} tiers can be distinguished",
            populated_tiers, thresholds.min_populated_tiers
        ));
    }

    StandardCompliance {
        is_compliant: missing_data.is_empty(),
        gender_completeness,
        ethnicity_completeness,
        populated_tiers,
        missing_data,
        recommendations,
    }
}
