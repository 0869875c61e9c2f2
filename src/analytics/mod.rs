//! Workforce diversity calculations.
//!
//! Pure functions over in-memory rosters: hierarchy classification,
//! demographic aggregation, the Simpson diversity index, pipeline gap
//! analysis, pay equity, quota evaluation, reporting-standard compliance,
//! performance classification, and trend comparison. The [`crate::engine`]
//! module orchestrates these into a full analytics run.

mod aggregation;
mod compliance;
mod diversity_index;
mod hierarchy;
mod pay_equity;
mod performance;
mod pipeline;
mod quota;
mod trend;

pub use aggregation::{
    demographic_profile, department_breakdowns, percentage_of, tier_breakdowns,
};
pub use compliance::check_standard_compliance;
pub use diversity_index::simpson_score;
pub use hierarchy::classify_title;
pub use pay_equity::estimate_pay_equity;
pub use performance::classify_performance;
pub use pipeline::analyze_pipeline;
pub use quota::evaluate_quota;
pub use trend::compare_trend;
