//! Employee directory service.
//!
//! # Responsibility
//! - Own the email-keyed employee collection and enforce uniqueness.
//! - Answer analytical queries (filter, sort, group, count, aggregate) as
//!   on-demand views over the stored set.
//!
//! # Invariants
//! - The internal map is the sole source of truth; no query result is
//!   cached and no secondary index exists.
//! - Keys are lowercased emails, matching `Employee` identity exactly.
//! - Queries never mutate state; collection-valued results are fresh
//!   copies that cannot reach internal storage.

use crate::model::employee::Employee;
use crate::model::position::Position;
use indexmap::IndexMap;
use log::{debug, warn};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Failure raised by directory mutations.
#[derive(Debug, Clone, PartialEq)]
pub enum DirectoryError {
    /// An employee with this email (compared case-insensitively) is already
    /// stored. Carries the rejected entry's email as supplied.
    DuplicateEmail(String),
}

impl Display for DirectoryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateEmail(email) => {
                write!(f, "employee with email `{email}` already exists")
            }
        }
    }
}

impl Error for DirectoryError {}

/// In-memory employee collection with analytical queries.
///
/// Insertion order is preserved and defines the "natural order" of every
/// listing. The directory is process-local mutable state: instantiate it
/// explicitly and add external synchronization if multiple actors need it.
#[derive(Debug, Default)]
pub struct EmployeeDirectory {
    /// Lowercased email -> employee, in insertion order.
    employees: IndexMap<String, Employee>,
}

impl EmployeeDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an employee, enforcing email uniqueness.
    ///
    /// On a duplicate the directory is left unchanged: the first-added
    /// entry is retained and the new one is discarded, never merged.
    ///
    /// # Errors
    /// - [`DirectoryError::DuplicateEmail`] when the lowercased email is
    ///   already a key.
    pub fn add(&mut self, employee: Employee) -> DirectoryResult<()> {
        let key = employee.identity_key();
        if self.employees.contains_key(&key) {
            warn!("event=employee_rejected module=directory reason=duplicate_email");
            return Err(DirectoryError::DuplicateEmail(employee.email().to_string()));
        }
        self.employees.insert(key, employee);
        debug!(
            "event=employee_added module=directory status=ok count={}",
            self.employees.len()
        );
        Ok(())
    }

    /// Returns all employees in insertion order.
    ///
    /// The vector is an independent copy: mutating it never affects the
    /// directory.
    pub fn all(&self) -> Vec<Employee> {
        self.employees.values().cloned().collect()
    }

    /// Looks up one employee by email, case-insensitively.
    pub fn find_by_email(&self, email: &str) -> Option<&Employee> {
        self.employees.get(&email.to_lowercase())
    }

    /// Returns employees of the given company, compared case-insensitively,
    /// in insertion order. No match yields an empty vector, never an error.
    pub fn find_by_company(&self, company: &str) -> Vec<Employee> {
        let needle = company.to_lowercase();
        self.employees
            .values()
            .filter(|e| e.company_name().to_lowercase() == needle)
            .cloned()
            .collect()
    }

    /// Returns all employees ordered by last name, then full name, both
    /// case-insensitive ascending. Remaining ties keep insertion order.
    pub fn sorted_by_last_name(&self) -> Vec<Employee> {
        let mut sorted = self.all();
        sorted.sort_by_cached_key(|e| {
            (e.last_name().to_lowercase(), e.full_name().to_lowercase())
        });
        sorted
    }

    /// Groups employees by position, members in insertion order.
    ///
    /// Only occupied positions appear; the map iterates in hierarchy order.
    pub fn group_by_position(&self) -> BTreeMap<Position, Vec<Employee>> {
        let mut groups: BTreeMap<Position, Vec<Employee>> = BTreeMap::new();
        for employee in self.employees.values() {
            groups
                .entry(employee.position())
                .or_default()
                .push(employee.clone());
        }
        groups
    }

    /// Counts employees per position. Only occupied positions appear, so
    /// the counts always sum to [`len`](Self::len).
    pub fn count_by_position(&self) -> BTreeMap<Position, usize> {
        let mut counts: BTreeMap<Position, usize> = BTreeMap::new();
        for employee in self.employees.values() {
            *counts.entry(employee.position()).or_default() += 1;
        }
        counts
    }

    /// Arithmetic mean of all salaries, or `None` for an empty directory.
    pub fn average_salary(&self) -> Option<f64> {
        if self.employees.is_empty() {
            return None;
        }
        let total: f64 = self.employees.values().map(Employee::salary).sum();
        Some(total / self.employees.len() as f64)
    }

    /// Employee with the maximum salary, or `None` for an empty directory.
    ///
    /// Equal maxima resolve to the first-inserted employee.
    pub fn top_earner(&self) -> Option<&Employee> {
        let mut best: Option<&Employee> = None;
        for employee in self.employees.values() {
            match best {
                Some(current) if employee.salary() <= current.salary() => {}
                _ => best = Some(employee),
            }
        }
        best
    }

    /// Number of stored employees.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}
