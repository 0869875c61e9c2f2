//! Reporting period model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The date range an analytics computation covers.
///
/// Both bounds are inclusive.
///
/// # Example
///
/// ```
/// use diversity_engine::models::ReportingPeriod;
/// use chrono::NaiveDate;
///
/// let period = ReportingPeriod {
///     start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
/// };
/// assert!(period.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportingPeriod {
    /// The start date of the period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the period (inclusive).
    pub end_date: NaiveDate,
}

impl ReportingPeriod {
    /// Checks that the period is well-formed.
    ///
    /// Returns `InvalidPeriod` when the end date precedes the start date.
    pub fn validate(&self) -> EngineResult<()> {
        if self.end_date < self.start_date {
            return Err(EngineError::InvalidPeriod {
                start: self.start_date,
                end: self.end_date,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_valid_period() {
        let period = ReportingPeriod {
            start_date: date(2025, 1, 1),
            end_date: date(2025, 12, 31),
        };
        assert!(period.validate().is_ok());
    }

    #[test]
    fn test_single_day_period_is_valid() {
        let period = ReportingPeriod {
            start_date: date(2025, 6, 15),
            end_date: date(2025, 6, 15),
        };
        assert!(period.validate().is_ok());
    }

    #[test]
    fn test_inverted_period_is_rejected() {
        let period = ReportingPeriod {
            start_date: date(2025, 12, 31),
            end_date: date(2025, 1, 1),
        };
        match period.validate() {
            Err(EngineError::InvalidPeriod { start, end }) => {
                assert_eq!(start, date(2025, 12, 31));
                assert_eq!(end, date(2025, 1, 1));
            }
            other => panic!("Expected InvalidPeriod, got {:?}", other),
        }
    }

    #[test]
    fn test_period_serde_round_trip() {
        let period = ReportingPeriod {
            start_date: date(2025, 1, 1),
            end_date: date(2025, 12, 31),
        };
        let json = serde_json::to_string(&period).unwrap();
        assert!(json.contains("\"start_date\":\"2025-01-01\""));
        let back: ReportingPeriod = serde_json::from_str(&json).unwrap();
        assert_eq!(period, back);
    }
}
