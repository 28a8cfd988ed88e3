//! Domain model for the employee directory.
//!
//! # Responsibility
//! - Define the canonical data structures stored and queried by the
//!   directory service.
//!
//! # Invariants
//! - Every employee is identified by its email, compared case-insensitively.
//! - Model values are validated at every construction and mutation path.

pub mod employee;
pub mod position;
