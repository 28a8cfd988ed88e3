//! Employee domain model.
//!
//! # Responsibility
//! - Define the canonical employment record stored by the directory.
//! - Validate every field on construction, mutation, and deserialization.
//!
//! # Invariants
//! - `full_name`, `email`, `company_name` are never blank after construction.
//! - `salary` is a non-negative finite number at every point in the
//!   entity's lifetime.
//! - Identity (equality, hashing) is the lowercased email and nothing else.
//!   The stored email keeps its original casing for display.

use crate::model::position::Position;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

/// Validation failure raised by [`Employee`] construction and setters.
#[derive(Debug, Clone, PartialEq)]
pub enum EmployeeValidationError {
    /// A required text field was empty or all-whitespace.
    MissingField(&'static str),
    /// Salary was negative or not a finite number.
    InvalidSalary(f64),
}

impl Display for EmployeeValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => {
                write!(f, "required field `{field}` is missing or blank")
            }
            Self::InvalidSalary(value) => {
                write!(f, "salary must be a non-negative finite number, got {value}")
            }
        }
    }
}

impl Error for EmployeeValidationError {}

/// One person's employment record.
///
/// Fields are private so every mutation path re-validates its own field.
/// A failed setter leaves the previous value untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "EmployeeRecord", into = "EmployeeRecord")]
pub struct Employee {
    full_name: String,
    email: String,
    company_name: String,
    position: Position,
    salary: f64,
}

/// Plain serialization shape for [`Employee`].
///
/// Deserialization funnels through `Employee::new` so persisted or wire data
/// cannot bypass validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct EmployeeRecord {
    full_name: String,
    email: String,
    company_name: String,
    position: Position,
    salary: f64,
}

impl Employee {
    /// Creates a validated employee record.
    ///
    /// # Errors
    /// - [`EmployeeValidationError::MissingField`] when `full_name`, `email`
    ///   or `company_name` is empty or all-whitespace.
    /// - [`EmployeeValidationError::InvalidSalary`] when `salary` is
    ///   negative, NaN, or infinite.
    pub fn new(
        full_name: impl Into<String>,
        email: impl Into<String>,
        company_name: impl Into<String>,
        position: Position,
        salary: f64,
    ) -> Result<Self, EmployeeValidationError> {
        let full_name = full_name.into();
        let email = email.into();
        let company_name = company_name.into();

        require_text(&full_name, "full_name")?;
        require_text(&email, "email")?;
        require_text(&company_name, "company_name")?;
        require_salary(salary)?;

        Ok(Self {
            full_name,
            email,
            company_name,
            position,
            salary,
        })
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Email in its original casing. Identity comparisons lowercase it.
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn company_name(&self) -> &str {
        &self.company_name
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn salary(&self) -> f64 {
        self.salary
    }

    /// Last whitespace-separated token of the full name.
    ///
    /// A single-token name is its own last name. Construction guarantees at
    /// least one token exists.
    pub fn last_name(&self) -> &str {
        self.full_name
            .split_whitespace()
            .next_back()
            .unwrap_or(&self.full_name)
    }

    /// Replaces the full name.
    ///
    /// # Errors
    /// - [`EmployeeValidationError::MissingField`] for blank input; the
    ///   current name is kept.
    pub fn set_full_name(
        &mut self,
        full_name: impl Into<String>,
    ) -> Result<(), EmployeeValidationError> {
        let full_name = full_name.into();
        require_text(&full_name, "full_name")?;
        self.full_name = full_name;
        Ok(())
    }

    /// Replaces the company name.
    ///
    /// # Errors
    /// - [`EmployeeValidationError::MissingField`] for blank input; the
    ///   current company is kept.
    pub fn set_company_name(
        &mut self,
        company_name: impl Into<String>,
    ) -> Result<(), EmployeeValidationError> {
        let company_name = company_name.into();
        require_text(&company_name, "company_name")?;
        self.company_name = company_name;
        Ok(())
    }

    /// Replaces the position. A `Position` value is always valid.
    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    /// Replaces the salary.
    ///
    /// # Errors
    /// - [`EmployeeValidationError::InvalidSalary`] for negative or
    ///   non-finite input; the current salary is kept.
    pub fn set_salary(&mut self, salary: f64) -> Result<(), EmployeeValidationError> {
        require_salary(salary)?;
        self.salary = salary;
        Ok(())
    }

    /// Lowercased email, the single identity key shared by equality,
    /// hashing, and the directory's uniqueness check.
    pub(crate) fn identity_key(&self) -> String {
        self.email.to_lowercase()
    }
}

impl PartialEq for Employee {
    fn eq(&self, other: &Self) -> bool {
        self.identity_key() == other.identity_key()
    }
}

impl Eq for Employee {}

impl Hash for Employee {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity_key().hash(state);
    }
}

impl Display for Employee {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} <{}> {} salary={}",
            self.full_name, self.email, self.position, self.salary
        )
    }
}

impl TryFrom<EmployeeRecord> for Employee {
    type Error = EmployeeValidationError;

    fn try_from(record: EmployeeRecord) -> Result<Self, Self::Error> {
        Self::new(
            record.full_name,
            record.email,
            record.company_name,
            record.position,
            record.salary,
        )
    }
}

impl From<Employee> for EmployeeRecord {
    fn from(employee: Employee) -> Self {
        Self {
            full_name: employee.full_name,
            email: employee.email,
            company_name: employee.company_name,
            position: employee.position,
            salary: employee.salary,
        }
    }
}

fn require_text(value: &str, field: &'static str) -> Result<(), EmployeeValidationError> {
    if value.trim().is_empty() {
        return Err(EmployeeValidationError::MissingField(field));
    }
    Ok(())
}

fn require_salary(value: f64) -> Result<(), EmployeeValidationError> {
    if !value.is_finite() || value < 0.0 {
        return Err(EmployeeValidationError::InvalidSalary(value));
    }
    Ok(())
}
