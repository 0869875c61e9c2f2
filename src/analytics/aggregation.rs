//! Demographic aggregation by tier and by department.
//!
//! This module groups classified employees and computes count/percentage
//! breakdowns across the gender, disability and ethnicity dimensions, plus
//! the intersectional minority-women rollup and the Simpson diversity score.
//! Percentages guard the denominator: zero-member groups report 0 everywhere
//! instead of dividing by zero.

use rust_decimal::Decimal;
use std::collections::{BTreeMap, HashMap};

use crate::config::{TierCatalog, TierDefinition};
use crate::models::{
    CategoryShare, DemographicProfile, DepartmentBreakdown, DisabilityBreakdown, Employee,
    Ethnicity, EthnicityBreakdown, Gender, GenderBreakdown, TierBreakdown,
};

use super::diversity_index::simpson_score;

/// Computes `count / total * 100` rounded to 2 decimal places, or 0 when the
/// denominator is 0.
pub fn percentage_of(count: u64, total: u64) -> Decimal {
    if total == 0 {
        return Decimal::ZERO;
    }
    (Decimal::from(count) * Decimal::from(100) / Decimal::from(total)).round_dp(2)
}

fn share(count: u64, total: u64) -> CategoryShare {
    CategoryShare {
        count,
        percentage: percentage_of(count, total),
    }
}

/// Builds the full demographic profile of one group of employees.
pub fn demographic_profile(members: &[&Employee]) -> DemographicProfile {
    let total = members.len() as u64;

    let count = |predicate: &dyn Fn(&Employee) -> bool| -> u64 {
        members.iter().filter(|e| predicate(e)).count() as u64
    };

    let gender = GenderBreakdown {
        women: share(count(&|e| e.gender == Gender::Female), total),
        men: share(count(&|e| e.gender == Gender::Male), total),
        other: share(count(&|e| e.gender == Gender::Other), total),
        undeclared: share(count(&|e| e.gender == Gender::Undeclared), total),
    };

    let with_disability = count(&|e| e.has_disability);
    let disability = DisabilityBreakdown {
        with_disability: share(with_disability, total),
        without_disability: share(total - with_disability, total),
    };

    let ethnicity = EthnicityBreakdown {
        white: share(count(&|e| e.ethnicity == Ethnicity::White), total),
        black: share(count(&|e| e.ethnicity == Ethnicity::Black), total),
        brown: share(count(&|e| e.ethnicity == Ethnicity::Brown), total),
        asian: share(count(&|e| e.ethnicity == Ethnicity::Asian), total),
        indigenous: share(count(&|e| e.ethnicity == Ethnicity::Indigenous), total),
        not_declared: share(count(&|e| e.ethnicity == Ethnicity::NotDeclared), total),
        minority: share(count(&|e| e.ethnicity.is_minority()), total),
    };

    let minority_women = share(
        count(&|e| e.gender == Gender::Female && e.ethnicity.is_minority()),
        total,
    );

    DemographicProfile {
        total,
        gender,
        disability,
        ethnicity,
        minority_women,
        diversity_score: simpson_score(members),
    }
}

/// Builds per-tier breakdowns for every catalog tier, in ascending rank order.
///
/// Tiers with no classified employees are still emitted with an all-zero
/// profile, so the funnel downstream always covers the whole catalog.
pub fn tier_breakdowns(
    classified: &[(&Employee, &TierDefinition)],
    catalog: &TierCatalog,
) -> Vec<TierBreakdown> {
    let mut groups: HashMap<&str, Vec<&Employee>> = HashMap::new();
    for (employee, tier) in classified {
        groups.entry(tier.key.as_str()).or_default().push(employee);
    }

    catalog
        .tiers_by_rank()
        .into_iter()
        .map(|tier| {
            let members = groups.get(tier.key.as_str()).map_or(&[][..], Vec::as_slice);
            TierBreakdown {
                tier: tier.key.clone(),
                name: tier.name.clone(),
                rank: tier.rank,
                demographics: demographic_profile(members),
            }
        })
        .collect()
}

/// Builds per-department breakdowns, sorted by department name.
///
/// Employees without a department land in the "Unspecified" group.
pub fn department_breakdowns(employees: &[Employee]) -> Vec<DepartmentBreakdown> {
    let mut groups: BTreeMap<String, Vec<&Employee>> = BTreeMap::new();
    for employee in employees {
        groups
            .entry(employee.department_or_default().to_string())
            .or_default()
            .push(employee);
    }

    groups
        .into_iter()
        .map(|(department, members)| DepartmentBreakdown {
            department,
            demographics: demographic_profile(&members),
        })
        .collect()
}
