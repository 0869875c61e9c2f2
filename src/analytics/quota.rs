//! Legal disability-quota evaluation.
//!
//! Applies the configured headcount-banded quota table to the current
//! disability percentage. The table ships with Lei 8.213/91-style defaults
//! but is injected configuration, so other regulatory regimes plug in without
//! code changes.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::config::QuotaTable;
use crate::models::QuotaCompliance;

use super::aggregation::percentage_of;

/// Evaluates quota compliance for the given headcount.
///
/// When non-compliant, `missing_hires` is the smallest whole number of
/// additional employees with disabilities that would satisfy the requirement:
/// `ceil(required_percentage × total − disability_count)`.
pub fn evaluate_quota(
    total_employees: u64,
    disability_count: u64,
    table: &QuotaTable,
) -> QuotaCompliance {
    let disability_percentage = percentage_of(disability_count, total_employees);
    let required_percentage = table.required_for(total_employees);
    // Compare exact counts; the rounded percentage is for output only. A
    // share just under the floor must not round its way into compliance.
    let is_compliant = Decimal::from(disability_count) * Decimal::from(100)
        >= required_percentage * Decimal::from(total_employees);

    let missing_hires = if is_compliant {
        0
    } else {
        let required_count = required_percentage * Decimal::from(total_employees)
            / Decimal::from(100)
            - Decimal::from(disability_count);
        if required_count <= Decimal::ZERO {
            0
        } else {
            required_count.ceil().to_u64().unwrap_or(0)
        }
    };

    QuotaCompliance {
        total_employees,
        disability_count,
        disability_percentage,
        required_percentage,
        is_compliant,
        missing_hires,
    }
}
