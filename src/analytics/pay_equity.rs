//! Pay-equity preview.
//!
//! Compares arithmetic mean compensation between women and men. Only
//! employees with compensation data enter the comparison, and only the two
//! binary gender partitions are compared. This is a preview figure, not a
//! regulatory-grade pay-equity calculation: nothing is controlled for.

use rust_decimal::Decimal;

use crate::config::PayEquityThresholds;
use crate::models::{Employee, Gender, PayEquityPreview};

fn mean_compensation(employees: &[&Employee], gender: Gender) -> (u64, Decimal) {
    let sample: Vec<Decimal> = employees
        .iter()
        .filter(|e| e.gender == gender)
        .filter_map(|e| e.compensation)
        .collect();

    if sample.is_empty() {
        return (0, Decimal::ZERO);
    }
    let sum: Decimal = sample.iter().copied().sum();
    let mean = (sum / Decimal::from(sample.len() as u64)).round_dp(2);
    (sample.len() as u64, mean)
}

/// Estimates the binary gender pay gap over the roster.
///
/// `gap_percentage = (mean_male - mean_female) / mean_male * 100`, or 0 when
/// there is no male compensation data. The significance flag compares the gap
/// against the configured threshold.
pub fn estimate_pay_equity(
    employees: &[Employee],
    thresholds: &PayEquityThresholds,
) -> PayEquityPreview {
    let refs: Vec<&Employee> = employees.iter().collect();
    let (women_count, women_mean) = mean_compensation(&refs, Gender::Female);
    let (men_count, men_mean) = mean_compensation(&refs, Gender::Male);

    let gap_percentage = if men_mean.is_zero() {
        Decimal::ZERO
    } else {
        ((men_mean - women_mean) * Decimal::from(100) / men_mean).round_dp(2)
    };

    PayEquityPreview {
        women_sample_count: women_count,
        men_sample_count: men_count,
        women_average_compensation: women_mean,
        men_average_compensation: men_mean,
        gap_percentage,
        has_significant_gap: gap_percentage > thresholds.significant_gap_percentage,
    }
}
