//! Employee Records
//!
//! Employees are validated records held in an in-memory registry and persisted
//! to a single JSON file.

pub mod domain;
pub use domain::{
    Config, Department, Employee, EmployeeDetails, Filter, NotFound, Payslip, Registry, Scope,
    Seniority, ValidationError,
};

/// JSON file storage for the registry.
pub mod storage;
