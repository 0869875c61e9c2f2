//! Historical snapshot model used for trend comparison.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A persisted prior-period diversity aggregate.
///
/// Snapshots are produced by an earlier run of the engine and stored
/// externally; the trend comparator only reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiversitySnapshot {
    /// The company the snapshot belongs to.
    pub company_id: String,
    /// The end date of the period the snapshot covers.
    pub period_end: NaiveDate,
    /// Overall women percentage at the time of the snapshot.
    pub women_percentage: Decimal,
    /// Overall disability percentage at the time of the snapshot.
    pub disability_percentage: Decimal,
}
