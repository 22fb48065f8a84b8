use std::{fmt, ops::Deref, str::FromStr};

use non_empty_string::NonEmptyString;

use crate::domain::validation::{
    self, ValidationError, parse_salary, validate_age, validate_department, validate_name,
    validate_national_id, validate_seniority,
};

/// A validated first or last name.
///
/// Names are non-empty, contain only alphabetic characters and start with an
/// uppercase letter.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Name(pub(crate) NonEmptyString);

impl Name {
    /// Creates a new `Name`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidName`] if the string is not a valid
    /// name.
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        validate_name(s)
    }

    /// Returns the string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Deref for Name {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.0.as_str()
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Name {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_name(s)
    }
}

impl TryFrom<&str> for Name {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        validate_name(value)
    }
}

/// A national identification number (CNP): exactly 13 ASCII digits.
///
/// This is the key employees are looked up by.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NationalId(pub(crate) String);

impl NationalId {
    /// Creates a new `NationalId`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidNationalId`] unless the string is
    /// exactly 13 ASCII digits.
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        validate_national_id(s)
    }

    /// Returns the string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NationalId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for NationalId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_national_id(s)
    }
}

impl TryFrom<&str> for NationalId {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        validate_national_id(value)
    }
}

/// An employee's age in years, between 18 and 65 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Age(pub(crate) u8);

impl Age {
    /// Returns the age in years.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

impl FromStr for Age {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_age(s)
    }
}

/// A gross monthly salary, at or above the minimum wage.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Salary(pub(crate) f64);

impl Salary {
    /// Returns the gross amount.
    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Salary {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        validation::validate_salary(value)
    }
}

impl fmt::Display for Salary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl FromStr for Salary {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_salary(s)
    }
}

/// The department an employee works in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Department {
    /// Human resources.
    Hr,
    /// Marketing.
    Marketing,
    /// Information technology.
    It,
    /// Finance.
    Finance,
}

impl Department {
    /// Every department, in display order.
    pub const ALL: [Self; 4] = [Self::Hr, Self::Marketing, Self::It, Self::Finance];

    /// Returns the canonical name of the department.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hr => "HR",
            Self::Marketing => "Marketing",
            Self::It => "IT",
            Self::Finance => "Finance",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Department {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_department(s)
    }
}

/// An employee's seniority level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Seniority {
    /// Junior.
    Junior,
    /// Mid-level.
    Mid,
    /// Senior.
    Senior,
}

impl Seniority {
    /// Every seniority level, from least to most senior.
    pub const ALL: [Self; 3] = [Self::Junior, Self::Mid, Self::Senior];

    /// Returns the canonical name of the seniority level.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Junior => "junior",
            Self::Mid => "mid",
            Self::Senior => "senior",
        }
    }
}

impl fmt::Display for Seniority {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Seniority {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_seniority(s)
    }
}

/// Everything recorded about an employee apart from their national id.
///
/// This is what an update replaces; the national id is the lookup key and is
/// never changed once assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeDetails {
    /// Given name.
    pub first_name: Name,
    /// Family name.
    pub last_name: Name,
    /// Age in years.
    pub age: Age,
    /// Gross monthly salary.
    pub salary: Salary,
    /// Department.
    pub department: Department,
    /// Seniority level.
    pub seniority: Seniority,
}

/// A single employee record.
///
/// All fields are validated types, so an `Employee` is well-formed by
/// construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    national_id: NationalId,
    details: EmployeeDetails,
}

impl Employee {
    /// Construct a new [`Employee`] from its national id and details.
    #[must_use]
    pub const fn new(national_id: NationalId, details: EmployeeDetails) -> Self {
        Self {
            national_id,
            details,
        }
    }

    /// The employee's national id.
    #[must_use]
    pub const fn national_id(&self) -> &NationalId {
        &self.national_id
    }

    /// Everything except the national id.
    #[must_use]
    pub const fn details(&self) -> &EmployeeDetails {
        &self.details
    }

    /// Given name.
    #[must_use]
    pub const fn first_name(&self) -> &Name {
        &self.details.first_name
    }

    /// Family name.
    #[must_use]
    pub const fn last_name(&self) -> &Name {
        &self.details.last_name
    }

    /// Age in years.
    #[must_use]
    pub const fn age(&self) -> Age {
        self.details.age
    }

    /// Gross monthly salary.
    #[must_use]
    pub const fn salary(&self) -> Salary {
        self.details.salary
    }

    /// Department.
    #[must_use]
    pub const fn department(&self) -> Department {
        self.details.department
    }

    /// Seniority level.
    #[must_use]
    pub const fn seniority(&self) -> Seniority {
        self.details.seniority
    }

    /// Replaces every field except the national id.
    pub(crate) fn replace_details(&mut self, details: EmployeeDetails) {
        self.details = details;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn age_displays_with_two_digits() {
        let age: Age = "35".parse().unwrap();
        assert_eq!(age.to_string(), "35");
    }

    #[test]
    fn department_round_trips_through_text() {
        for department in Department::ALL {
            assert_eq!(department.as_str().parse::<Department>(), Ok(department));
        }
    }

    #[test]
    fn seniority_round_trips_through_text() {
        for seniority in Seniority::ALL {
            assert_eq!(seniority.as_str().parse::<Seniority>(), Ok(seniority));
        }
    }

    #[test]
    fn salary_try_from_enforces_minimum() {
        assert!(Salary::try_from(4050.0).is_ok());
        assert!(Salary::try_from(100.0).is_err());
    }

    #[test]
    fn replacing_details_keeps_national_id() {
        let id = NationalId::new("1900101123456").unwrap();
        let mut employee = Employee::new(
            id.clone(),
            EmployeeDetails {
                first_name: Name::new("Ion").unwrap(),
                last_name: Name::new("Popescu").unwrap(),
                age: "30".parse().unwrap(),
                salary: "5000".parse().unwrap(),
                department: Department::It,
                seniority: Seniority::Mid,
            },
        );

        let mut details = employee.details().clone();
        details.department = Department::Finance;
        employee.replace_details(details);

        assert_eq!(employee.national_id(), &id);
        assert_eq!(employee.department(), Department::Finance);
    }
}
