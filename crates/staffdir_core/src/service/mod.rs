//! Core use-case services.
//!
//! # Responsibility
//! - Provide the employee directory's mutation and query API.
//! - Keep callers decoupled from the internal storage shape.

pub mod employee_directory;
