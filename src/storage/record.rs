//! Serialized form of an employee.
//!
//! The keys match the data files written by earlier versions of the tool, so
//! those files load unchanged.

use serde::{Deserialize, Serialize};

use crate::domain::{
    Employee, EmployeeDetails, ValidationError,
    employee::{Name, NationalId},
    validation::{validate_age, validate_department, validate_salary, validate_seniority},
};

/// An employee as stored on disk.
///
/// Field order here is the order fields are written in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// Family name.
    #[serde(rename = "Nume")]
    pub last_name: String,
    /// Given name.
    #[serde(rename = "Prenume")]
    pub first_name: String,
    /// National id (CNP).
    #[serde(rename = "CNP")]
    pub national_id: String,
    /// Age, as two digits.
    #[serde(rename = "Varsta")]
    pub age: String,
    /// Gross monthly salary.
    #[serde(rename = "Salar")]
    pub salary: f64,
    /// Department name.
    #[serde(rename = "Departament")]
    pub department: String,
    /// Seniority level.
    #[serde(rename = "Senioritate")]
    pub seniority: String,
}

impl From<&Employee> for EmployeeRecord {
    fn from(employee: &Employee) -> Self {
        Self {
            last_name: employee.last_name().to_string(),
            first_name: employee.first_name().to_string(),
            national_id: employee.national_id().to_string(),
            age: employee.age().to_string(),
            salary: employee.salary().get(),
            department: employee.department().to_string(),
            seniority: employee.seniority().to_string(),
        }
    }
}

impl TryFrom<EmployeeRecord> for Employee {
    type Error = ValidationError;

    fn try_from(record: EmployeeRecord) -> Result<Self, Self::Error> {
        let national_id = NationalId::new(&record.national_id)?;
        let details = EmployeeDetails {
            first_name: Name::new(&record.first_name)?,
            last_name: Name::new(&record.last_name)?,
            age: validate_age(&record.age)?,
            salary: validate_salary(record.salary)?,
            department: validate_department(&record.department)?,
            seniority: validate_seniority(&record.seniority)?,
        };
        Ok(Self::new(national_id, details))
    }
}
