//! Period-over-period trend comparison.
//!
//! Compares the current overall gender and disability percentages against the
//! prior-period snapshot. A missing snapshot is not an error: deltas are then
//! reported against a zero baseline.

use rust_decimal::Decimal;

use crate::models::{DiversitySnapshot, TrendComparison};

/// Compares current percentages against the prior snapshot, when one exists.
///
/// `is_improving` is true when the current women percentage exceeds the prior
/// one (or zero, without a snapshot).
pub fn compare_trend(
    current_women_percentage: Decimal,
    current_disability_percentage: Decimal,
    previous: Option<DiversitySnapshot>,
) -> TrendComparison {
    let (prior_women, prior_disability) = previous
        .as_ref()
        .map(|s| (s.women_percentage, s.disability_percentage))
        .unwrap_or((Decimal::ZERO, Decimal::ZERO));

    TrendComparison {
        previous,
        current_women_percentage,
        current_disability_percentage,
        women_delta: current_women_percentage - prior_women,
        disability_delta: current_disability_percentage - prior_disability,
        is_improving: current_women_percentage > prior_women,
    }
}
