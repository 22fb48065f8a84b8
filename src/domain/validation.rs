//! Field validation.
//!
//! One predicate per employee field. Each takes the raw value as supplied by
//! a caller (usually text typed at a prompt) and returns either the validated
//! field type or the reason it was rejected. Predicates never panic and have
//! no side effects, so callers are free to decide their own retry policy.

use non_empty_string::NonEmptyString;

use crate::domain::employee::{Age, Department, Name, NationalId, Salary, Seniority};

/// Number of digits in a national identification number (CNP).
pub const NATIONAL_ID_LEN: usize = 13;

/// Youngest age an employee may have.
pub const MIN_AGE: u8 = 18;

/// Oldest age an employee may have.
pub const MAX_AGE: u8 = 65;

/// Minimum gross monthly salary (the national minimum wage).
pub const MIN_SALARY: f64 = 4050.0;

/// Reasons a raw field value can be rejected.
///
/// Parse failures (`Malformed*`) are kept separate from range failures so
/// callers can report them differently, even though an interactive caller
/// treats both as "ask again".
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// Names must be non-empty, alphabetic and start with an uppercase letter.
    #[error("invalid name '{0}': must contain only letters and start with an uppercase letter")]
    InvalidName(String),

    /// National ids must be exactly 13 ASCII digits.
    #[error("invalid national id '{0}': must contain exactly 13 digits")]
    InvalidNationalId(String),

    /// The age is not a two-digit number.
    #[error("invalid age '{0}': must be a two-digit number")]
    MalformedAge(String),

    /// The age is a number, but outside the permitted range.
    #[error("age {0} is out of range: must be between 18 and 65")]
    AgeOutOfRange(u8),

    /// The salary is not a number.
    #[error("invalid salary '{0}': must be a number")]
    MalformedSalary(String),

    /// The salary is below the minimum wage.
    #[error("salary {0} is below the minimum wage of 4050")]
    SalaryBelowMinimum(f64),

    /// The department is not one of the known departments.
    #[error("unknown department '{0}': expected one of HR, Marketing, IT, Finance")]
    UnknownDepartment(String),

    /// The seniority is not one of the known levels.
    #[error("unknown seniority '{0}': expected one of junior, mid, senior")]
    UnknownSeniority(String),
}

impl ValidationError {
    /// Returns `true` if the value could not be parsed at all, as opposed to
    /// parsing fine but falling outside the permitted range.
    #[must_use]
    pub const fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedAge(_) | Self::MalformedSalary(_))
    }
}

/// Validates a first or last name.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidName`] if the name is empty, contains a
/// non-alphabetic character, or does not start with an uppercase letter.
pub fn validate_name(raw: &str) -> Result<Name, ValidationError> {
    let starts_uppercase = raw.chars().next().is_some_and(char::is_uppercase);
    if !starts_uppercase || !raw.chars().all(char::is_alphabetic) {
        return Err(ValidationError::InvalidName(raw.to_string()));
    }

    NonEmptyString::new(raw.to_string())
        .map(Name)
        .map_err(|_| ValidationError::InvalidName(raw.to_string()))
}

/// Validates a national identification number.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidNationalId`] unless the value is exactly
/// 13 ASCII digits.
pub fn validate_national_id(raw: &str) -> Result<NationalId, ValidationError> {
    if raw.len() == NATIONAL_ID_LEN && raw.bytes().all(|b| b.is_ascii_digit()) {
        Ok(NationalId(raw.to_string()))
    } else {
        Err(ValidationError::InvalidNationalId(raw.to_string()))
    }
}

/// Validates an age given as text.
///
/// # Errors
///
/// Returns [`ValidationError::MalformedAge`] unless the value is exactly two
/// ASCII digits, and [`ValidationError::AgeOutOfRange`] if the number lies
/// outside 18..=65.
pub fn validate_age(raw: &str) -> Result<Age, ValidationError> {
    if raw.len() != 2 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::MalformedAge(raw.to_string()));
    }

    let value: u8 = raw
        .parse()
        .map_err(|_| ValidationError::MalformedAge(raw.to_string()))?;

    if (MIN_AGE..=MAX_AGE).contains(&value) {
        Ok(Age(value))
    } else {
        Err(ValidationError::AgeOutOfRange(value))
    }
}

/// Validates a salary amount.
///
/// # Errors
///
/// Returns [`ValidationError::SalaryBelowMinimum`] if the amount is below the
/// minimum wage, and [`ValidationError::MalformedSalary`] if it is not a
/// finite number.
pub fn validate_salary(amount: f64) -> Result<Salary, ValidationError> {
    if !amount.is_finite() {
        return Err(ValidationError::MalformedSalary(amount.to_string()));
    }
    if amount < MIN_SALARY {
        return Err(ValidationError::SalaryBelowMinimum(amount));
    }
    Ok(Salary(amount))
}

/// Parses and validates a salary given as text.
///
/// Surrounding whitespace is ignored.
///
/// # Errors
///
/// Returns [`ValidationError::MalformedSalary`] if the text is not a finite
/// number, otherwise the result of [`validate_salary`].
pub fn parse_salary(raw: &str) -> Result<Salary, ValidationError> {
    let amount: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ValidationError::MalformedSalary(raw.to_string()))?;

    if !amount.is_finite() {
        return Err(ValidationError::MalformedSalary(raw.to_string()));
    }

    validate_salary(amount)
}

/// Validates a department name. Matching is case-sensitive.
///
/// # Errors
///
/// Returns [`ValidationError::UnknownDepartment`] for anything other than
/// `HR`, `Marketing`, `IT` or `Finance`.
pub fn validate_department(raw: &str) -> Result<Department, ValidationError> {
    Department::ALL
        .into_iter()
        .find(|department| department.as_str() == raw)
        .ok_or_else(|| ValidationError::UnknownDepartment(raw.to_string()))
}

/// Validates a seniority level. Matching is case-sensitive.
///
/// # Errors
///
/// Returns [`ValidationError::UnknownSeniority`] for anything other than
/// `junior`, `mid` or `senior`.
pub fn validate_seniority(raw: &str) -> Result<Seniority, ValidationError> {
    Seniority::ALL
        .into_iter()
        .find(|seniority| seniority.as_str() == raw)
        .ok_or_else(|| ValidationError::UnknownSeniority(raw.to_string()))
}
