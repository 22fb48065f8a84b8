//! Domain models for employee records.
//!
//! This module contains the employee record and its validated field types,
//! the per-field validation predicates, the in-memory registry and payslip
//! computation, and configuration.

/// Employee records and their validated field types.
pub mod employee;
pub use employee::{Age, Department, Employee, EmployeeDetails, Name, NationalId, Salary, Seniority};

mod config;
pub use config::Config;

/// Payslip computation.
pub mod payslip;
pub use payslip::Payslip;

pub mod registry;
pub use registry::{Filter, NotFound, Registry, Scope};

/// Per-field validation predicates.
pub mod validation;
pub use validation::ValidationError;
