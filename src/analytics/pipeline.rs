//! Leadership-pipeline gap analysis.
//!
//! Compares demographic representation at the base (entry-level) tier against
//! the average across leadership tiers, per dimension. A positive gap means
//! representation shrinks going up the hierarchy.

use rust_decimal::Decimal;

use crate::config::TierCatalog;
use crate::models::{FunnelStage, PipelineAnalysis, PipelineGap, TierBreakdown};

fn average(values: &[Decimal]) -> Decimal {
    if values.is_empty() {
        return Decimal::ZERO;
    }
    let sum: Decimal = values.iter().copied().sum();
    (sum / Decimal::from(values.len() as u64)).round_dp(2)
}

fn gap(base: Decimal, leadership: &[Decimal]) -> PipelineGap {
    let leadership_average = average(leadership);
    PipelineGap {
        base_percentage: base,
        leadership_average,
        gap: base - leadership_average,
    }
}

/// Analyzes the leadership pipeline over the ordered tier breakdowns.
///
/// Leadership averages cover only populated leadership tiers; when none are
/// populated the averages are 0 and each gap equals the base percentage,
/// which is the degenerate but valid single-tier case.
pub fn analyze_pipeline(tiers: &[TierBreakdown], catalog: &TierCatalog) -> PipelineAnalysis {
    let base_key = &catalog.base_tier().key;
    let base = tiers.iter().find(|t| &t.tier == base_key);

    let (base_women, base_disability, base_minority) = match base {
        Some(tier) => (
            tier.demographics.gender.women.percentage,
            tier.demographics.disability.with_disability.percentage,
            tier.demographics.ethnicity.minority.percentage,
        ),
        None => (Decimal::ZERO, Decimal::ZERO, Decimal::ZERO),
    };

    let leadership_keys: Vec<&str> = catalog
        .leadership()
        .iter()
        .map(|t| t.key.as_str())
        .collect();
    let populated_leadership: Vec<&TierBreakdown> = tiers
        .iter()
        .filter(|t| leadership_keys.contains(&t.tier.as_str()) && t.demographics.total > 0)
        .collect();

    let leadership_women: Vec<Decimal> = populated_leadership
        .iter()
        .map(|t| t.demographics.gender.women.percentage)
        .collect();
    let leadership_disability: Vec<Decimal> = populated_leadership
        .iter()
        .map(|t| t.demographics.disability.with_disability.percentage)
        .collect();
    let leadership_minority: Vec<Decimal> = populated_leadership
        .iter()
        .map(|t| t.demographics.ethnicity.minority.percentage)
        .collect();

    let funnel = tiers
        .iter()
        .map(|t| FunnelStage {
            tier: t.tier.clone(),
            rank: t.rank,
            total: t.demographics.total,
            women_percentage: t.demographics.gender.women.percentage,
            disability_percentage: t.demographics.disability.with_disability.percentage,
            minority_percentage: t.demographics.ethnicity.minority.percentage,
        })
        .collect();

    PipelineAnalysis {
        base_tier: base_key.clone(),
        leadership_tiers: leadership_keys.iter().map(|k| k.to_string()).collect(),
        gender: gap(base_women, &leadership_women),
        disability: gap(base_disability, &leadership_disability),
        minority: gap(base_minority, &leadership_minority),
        funnel,
    }
}
