//! Organizational performance classification.
//!
//! A first-match-wins decision table over three inputs: the average women
//! percentage across populated leadership tiers, the overall disability
//! percentage, and the quota-compliance flag. Thresholds are injected
//! configuration constants.

use rust_decimal::Decimal;

use crate::config::PerformanceThresholds;
use crate::models::{PerformanceClassification, PerformanceRating};

/// Classifies organizational performance.
///
/// Rules, evaluated in order:
/// 1. Critical: quota non-compliant, or leadership women below the critical
///    threshold.
/// 2. NeedsAttention: leadership women or disability below the attention
///    thresholds.
/// 3. Good: leadership women or disability below the good thresholds.
/// 4. Excellent: everything else.
pub fn classify_performance(
    leadership_women_percentage: Decimal,
    disability_percentage: Decimal,
    quota_compliant: bool,
    thresholds: &PerformanceThresholds,
) -> PerformanceClassification {
    let rating = if !quota_compliant
        || leadership_women_percentage < thresholds.critical_leadership_women
    {
        PerformanceRating::Critical
    } else if leadership_women_percentage < thresholds.attention_leadership_women
        || disability_percentage < thresholds.attention_disability
    {
        PerformanceRating::NeedsAttention
    } else if leadership_women_percentage < thresholds.good_leadership_women
        || disability_percentage < thresholds.good_disability
    {
        PerformanceRating::Good
    } else {
        PerformanceRating::Excellent
    };

    PerformanceClassification {
        rating,
        leadership_women_percentage,
        disability_percentage,
        quota_compliant,
    }
}
