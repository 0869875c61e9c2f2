//! Simpson diversity index.
//!
//! The index measures how evenly a group spreads across joint
//! (gender, ethnicity) categories: `1 - Σ (count_i / total)²`, scaled to a
//! 0-100 score. A fully homogeneous group scores 0; the score approaches 100
//! as categories become numerous and evenly populated.

use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::models::{Employee, Ethnicity, Gender};

/// Computes the Simpson diversity score of a group, in `[0, 100]`.
///
/// Empty groups and single-category groups score 0. The joint category key is
/// (gender, ethnicity), undeclared members included as their own categories.
///
/// # Example
///
/// ```
/// use diversity_engine::analytics::simpson_score;
///
/// assert_eq!(simpson_score(&[]), rust_decimal::Decimal::ZERO);
/// ```
pub fn simpson_score(employees: &[&Employee]) -> Decimal {
    let total = employees.len();
    if total == 0 {
        return Decimal::ZERO;
    }

    let mut categories: HashMap<(Gender, Ethnicity), u64> = HashMap::new();
    for employee in employees {
        *categories
            .entry((employee.gender, employee.ethnicity))
            .or_insert(0) += 1;
    }

    let total = Decimal::from(total as u64);
    let sum_of_squares: Decimal = categories
        .values()
        .map(|&count| {
            let ratio = Decimal::from(count) / total;
            ratio * ratio
        })
        .sum();

    ((Decimal::ONE - sum_of_squares) * Decimal::from(100)).round_dp(2)
}
