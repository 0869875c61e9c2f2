//! Error types for the Diversity Analytics Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during analytics computation.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the Diversity Analytics Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use diversity_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration was parsed but failed validation.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// A description of the validation failure.
        message: String,
    },

    /// The reporting period was inconsistent (end before start).
    #[error("Invalid reporting period: {start} to {end}")]
    InvalidPeriod {
        /// The period start date.
        start: NaiveDate,
        /// The period end date.
        end: NaiveDate,
    },

    /// The employee-data provider returned zero active records.
    ///
    /// This is the only hard failure in the engine; every other missing-data
    /// condition degrades gracefully.
    #[error("No active employees found for company '{company_id}'")]
    NoActiveEmployees {
        /// The company the lookup was performed for.
        company_id: String,
    },

    /// A data provider failed to produce its records.
    #[error("Data source error: {message}")]
    DataSource {
        /// A description of the provider failure.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/file.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/file.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_config_displays_message() {
        let error = EngineError::InvalidConfig {
            message: "duplicate tier rank: 3".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid configuration: duplicate tier rank: 3"
        );
    }

    #[test]
    fn test_invalid_period_displays_dates() {
        let error = EngineError::InvalidPeriod {
            start: NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
            end: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid reporting period: 2025-12-31 to 2025-01-01"
        );
    }

    #[test]
    fn test_no_active_employees_displays_company() {
        let error = EngineError::NoActiveEmployees {
            company_id: "acme".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "No active employees found for company 'acme'"
        );
    }

    #[test]
    fn test_data_source_displays_message() {
        let error = EngineError::DataSource {
            message: "snapshot store unreachable".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Data source error: snapshot store unreachable"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_no_active_employees() -> EngineResult<()> {
            Err(EngineError::NoActiveEmployees {
                company_id: "acme".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_no_active_employees()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
