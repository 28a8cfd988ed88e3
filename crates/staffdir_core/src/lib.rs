//! Core domain logic for the staffdir employee directory.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::employee::{Employee, EmployeeValidationError};
pub use model::position::Position;
pub use service::employee_directory::{DirectoryError, DirectoryResult, EmployeeDirectory};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
