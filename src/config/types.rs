//! Configuration types for the Diversity Analytics Engine.
//!
//! This module contains the strongly-typed configuration structures that are
//! deserialized from YAML configuration files: the hierarchy-tier catalog, the
//! disability-quota table, and the compliance/performance/pay-equity numeric
//! thresholds. All of these vary by jurisdiction and organizational
//! convention, so they are injected rather than hard-coded.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashSet;

use crate::error::{EngineError, EngineResult};

/// One tier in the hierarchy catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct TierDefinition {
    /// Stable key identifying the tier (e.g., "directorate").
    pub key: String,
    /// Human-readable name (e.g., "Diretoria").
    pub name: String,
    /// Rank within the hierarchy; higher means closer to the top.
    pub rank: u8,
    /// Whole-word keywords that classify a job title into this tier.
    pub keywords: Vec<String>,
}

/// Tier catalog file structure (`tiers.yaml`).
///
/// Precedence between tiers whose keywords tie on length follows the order of
/// the `tiers` list; the base, default and leadership roles are explicit keys
/// rather than rank-derived conventions.
#[derive(Debug, Clone, Deserialize)]
pub struct TierCatalog {
    /// Tiers in precedence order.
    pub tiers: Vec<TierDefinition>,
    /// Key of the fallback tier used when no keyword matches.
    pub default_tier: String,
    /// Key of the base (most entry-level) tier used by the pipeline analyzer.
    pub base_tier: String,
    /// Keys of the leadership tiers used by the pipeline analyzer and the
    /// performance classifier.
    pub leadership_tiers: Vec<String>,
}

impl TierCatalog {
    /// Checks internal consistency of the catalog.
    fn validate(&self) -> EngineResult<()> {
        if self.tiers.is_empty() {
            return Err(EngineError::InvalidConfig {
                message: "tier catalog is empty".to_string(),
            });
        }

        let mut keys = HashSet::new();
        let mut ranks = HashSet::new();
        for tier in &self.tiers {
            if !keys.insert(tier.key.as_str()) {
                return Err(EngineError::InvalidConfig {
                    message: format!("duplicate tier key: {}", tier.key),
                });
            }
            if !ranks.insert(tier.rank) {
                return Err(EngineError::InvalidConfig {
                    message: format!("duplicate tier rank: {}", tier.rank),
                });
            }
            if tier.keywords.is_empty() {
                return Err(EngineError::InvalidConfig {
                    message: format!("tier '{}' has no keywords", tier.key),
                });
            }
        }

        for (role, key) in [("default_tier", &self.default_tier), ("base_tier", &self.base_tier)] {
            if !keys.contains(key.as_str()) {
                return Err(EngineError::InvalidConfig {
                    message: format!("{} '{}' is not a catalog tier", role, key),
                });
            }
        }
        for key in &self.leadership_tiers {
            if !keys.contains(key.as_str()) {
                return Err(EngineError::InvalidConfig {
                    message: format!("leadership tier '{}' is not a catalog tier", key),
                });
            }
        }

        Ok(())
    }

    /// Looks up a tier by key.
    pub fn get(&self, key: &str) -> Option<&TierDefinition> {
        self.tiers.iter().find(|t| t.key == key)
    }

    /// Returns the fallback tier.
    ///
    /// Validation guarantees the key resolves, so this never fails on a
    /// catalog owned by an [`AnalyticsConfig`].
    pub fn default_tier(&self) -> &TierDefinition {
        self.get(&self.default_tier)
            .unwrap_or(&self.tiers[0])
    }

    /// Returns the base (entry-level) tier.
    pub fn base_tier(&self) -> &TierDefinition {
        self.get(&self.base_tier).unwrap_or(&self.tiers[0])
    }

    /// Returns the leadership tiers in catalog order.
    pub fn leadership(&self) -> Vec<&TierDefinition> {
        self.leadership_tiers
            .iter()
            .filter_map(|key| self.get(key))
            .collect()
    }

    /// Returns all tiers sorted by ascending rank.
    pub fn tiers_by_rank(&self) -> Vec<&TierDefinition> {
        let mut tiers: Vec<&TierDefinition> = self.tiers.iter().collect();
        tiers.sort_by_key(|t| t.rank);
        tiers
    }
}

/// One band of the disability-quota step function.
#[derive(Debug, Clone, Deserialize)]
pub struct QuotaBand {
    /// Minimum headcount for this band to apply.
    pub min_headcount: u64,
    /// Required minimum disability percentage within this band.
    pub required_percentage: Decimal,
}

/// Disability-quota table file structure (`quota.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct QuotaTable {
    /// Quota bands; stored sorted by ascending `min_headcount`.
    pub bands: Vec<QuotaBand>,
}

impl QuotaTable {
    /// Sorts the bands and checks the table's invariants.
    ///
    /// The required percentage must be non-decreasing as the headcount
    /// threshold increases, and every percentage must lie in `[0, 100]`.
    fn normalize_and_validate(&mut self) -> EngineResult<()> {
        if self.bands.is_empty() {
            return Err(EngineError::InvalidConfig {
                message: "quota table has no bands".to_string(),
            });
        }
        self.bands.sort_by_key(|b| b.min_headcount);

        let hundred = Decimal::from(100);
        let mut previous = Decimal::ZERO;
        for band in &self.bands {
            if band.required_percentage < Decimal::ZERO || band.required_percentage > hundred {
                return Err(EngineError::InvalidConfig {
                    message: format!(
                        "quota percentage {} out of range for headcount {}",
                        band.required_percentage, band.min_headcount
                    ),
                });
            }
            if band.required_percentage < previous {
                return Err(EngineError::InvalidConfig {
                    message: format!(
                        "quota table not monotonic at headcount {}",
                        band.min_headcount
                    ),
                });
            }
            previous = band.required_percentage;
        }
        Ok(())
    }

    /// Returns the required disability percentage for a given headcount.
    ///
    /// Headcounts below the smallest band threshold require `0`.
    pub fn required_for(&self, headcount: u64) -> Decimal {
        self.bands
            .iter()
            .rev()
            .find(|b| b.min_headcount <= headcount)
            .map(|b| b.required_percentage)
            .unwrap_or(Decimal::ZERO)
    }
}

/// Reporting-standard completeness thresholds.
#[derive(Debug, Clone, Deserialize)]
pub struct ComplianceThresholds {
    /// Minimum per-dimension data completeness, in percent.
    pub completeness_percentage: Decimal,
    /// Minimum number of populated hierarchy tiers.
    pub min_populated_tiers: u64,
}

/// Performance-classification decision-table thresholds.
#[derive(Debug, Clone, Deserialize)]
pub struct PerformanceThresholds {
    /// Leadership women percentage below which the rating is Critical.
    pub critical_leadership_women: Decimal,
    /// Leadership women percentage below which the rating is NeedsAttention.
    pub attention_leadership_women: Decimal,
    /// Disability percentage below which the rating is NeedsAttention.
    pub attention_disability: Decimal,
    /// Leadership women percentage below which the rating is Good.
    pub good_leadership_women: Decimal,
    /// Disability percentage below which the rating is Good.
    pub good_disability: Decimal,
}

/// Pay-equity thresholds.
#[derive(Debug, Clone, Deserialize)]
pub struct PayEquityThresholds {
    /// Gap percentage above which the gap is flagged as significant.
    pub significant_gap_percentage: Decimal,
}

/// Thresholds file structure (`thresholds.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct ThresholdsConfig {
    /// Reporting-standard completeness thresholds.
    pub compliance: ComplianceThresholds,
    /// Performance decision-table thresholds.
    pub performance: PerformanceThresholds,
    /// Pay-equity thresholds.
    pub pay_equity: PayEquityThresholds,
    /// How many departments to list in the top/bottom highlights.
    pub department_highlight_count: usize,
}

/// The complete, validated analytics configuration.
///
/// Construction validates every component; an `AnalyticsConfig` that exists is
/// internally consistent.
#[derive(Debug, Clone)]
pub struct AnalyticsConfig {
    catalog: TierCatalog,
    quota: QuotaTable,
    thresholds: ThresholdsConfig,
}

impl AnalyticsConfig {
    /// Creates a new configuration from its component parts.
    ///
    /// The quota table is sorted by headcount threshold; validation failures
    /// return `InvalidConfig`.
    pub fn new(
        catalog: TierCatalog,
        mut quota: QuotaTable,
        thresholds: ThresholdsConfig,
    ) -> EngineResult<Self> {
        catalog.validate()?;
        quota.normalize_and_validate()?;

        let hundred = Decimal::from(100);
        let completeness = thresholds.compliance.completeness_percentage;
        if completeness < Decimal::ZERO || completeness > hundred {
            return Err(EngineError::InvalidConfig {
                message: format!("completeness threshold {} out of range", completeness),
            });
        }
        if thresholds.department_highlight_count == 0 {
            return Err(EngineError::InvalidConfig {
                message: "department_highlight_count must be at least 1".to_string(),
            });
        }

        Ok(Self {
            catalog,
            quota,
            thresholds,
        })
    }

    /// Returns the tier catalog.
    pub fn catalog(&self) -> &TierCatalog {
        &self.catalog
    }

    /// Returns the quota table.
    pub fn quota(&self) -> &QuotaTable {
        &self.quota
    }

    /// Returns the compliance thresholds.
    pub fn compliance(&self) -> &ComplianceThresholds {
        &self.thresholds.compliance
    }

    /// Returns the performance thresholds.
    pub fn performance(&self) -> &PerformanceThresholds {
        &self.thresholds.performance
    }

    /// Returns the pay-equity thresholds.
    pub fn pay_equity(&self) -> &PayEquityThresholds {
        &self.thresholds.pay_equity
    }

    /// Returns the top/bottom department highlight count.
    pub fn department_highlight_count(&self) -> usize {
        self.thresholds.department_highlight_count
    }
}
