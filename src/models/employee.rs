//! Employee and position models.
//!
//! This module defines the Employee input record together with its demographic
//! enums, and the Position record that carries the free-text job title used
//! for hierarchy classification. Missing demographic fields are modeled as
//! explicit enum members rather than nulls, so the aggregation math stays total.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Self-declared gender of an employee.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Female.
    Female,
    /// Male.
    Male,
    /// Any other self-declared gender.
    Other,
    /// No declaration on record.
    #[default]
    Undeclared,
}

/// Self-declared ethnicity of an employee.
///
/// The category set follows the IBGE race/color convention used by Brazilian
/// workforce reporting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ethnicity {
    /// White ("branca").
    White,
    /// Black ("preta").
    Black,
    /// Brown / mixed ("parda").
    Brown,
    /// Asian ("amarela").
    Asian,
    /// Indigenous.
    Indigenous,
    /// No declaration on record.
    #[default]
    NotDeclared,
}

impl Ethnicity {
    /// Returns true if this category counts toward the ethnic-minority rollup.
    ///
    /// Non-declarations are excluded: an unknown value is neither minority nor
    /// non-minority.
    pub fn is_minority(self) -> bool {
        matches!(
            self,
            Ethnicity::Black | Ethnicity::Brown | Ethnicity::Asian | Ethnicity::Indigenous
        )
    }
}

/// Employment status of an employee record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentStatus {
    /// Currently employed.
    Active,
    /// On the books but not currently working (e.g., extended leave).
    Inactive,
    /// Employment has ended.
    Terminated,
}

/// An employee record as supplied by the employee-data provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's full name.
    pub full_name: String,
    /// Self-declared gender; `Undeclared` when absent.
    #[serde(default)]
    pub gender: Gender,
    /// Self-declared ethnicity; `NotDeclared` when absent.
    #[serde(default)]
    pub ethnicity: Ethnicity,
    /// Whether the employee has a registered disability.
    #[serde(default)]
    pub has_disability: bool,
    /// The registered disability type, when one exists.
    #[serde(default)]
    pub disability_type: Option<String>,
    /// The department the employee belongs to.
    #[serde(default)]
    pub department: Option<String>,
    /// Monthly compensation, when available.
    #[serde(default)]
    pub compensation: Option<Decimal>,
    /// Employment status.
    pub status: EmploymentStatus,
    /// Reference to the employee's position, when one is assigned.
    #[serde(default)]
    pub position_id: Option<String>,
}

/// Department name used when an employee has none on record.
pub const UNSPECIFIED_DEPARTMENT: &str = "Unspecified";

impl Employee {
    /// Returns true if the employee is active.
    pub fn is_active(&self) -> bool {
        self.status == EmploymentStatus::Active
    }

    /// Returns the employee's department, or [`UNSPECIFIED_DEPARTMENT`] when
    /// none is recorded or the recorded value is blank.
    pub fn department_or_default(&self) -> &str {
        match self.department.as_deref() {
            Some(dept) if !dept.trim().is_empty() => dept,
            _ => UNSPECIFIED_DEPARTMENT,
        }
    }
}

/// A position in the organization's position catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// Unique identifier for the position.
    pub id: String,
    /// Free-text job title (e.g., "Gerente de Vendas").
    pub title: String,
    /// Optional explicit level label. Informational only; the hierarchy
    /// classifier works from the title.
    #[serde(default)]
    pub level: Option<String>,
}
