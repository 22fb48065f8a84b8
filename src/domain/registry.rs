//! In-memory registry of employees.
//!
//! The [`Registry`] knows nothing about the filesystem. It holds employees in
//! insertion order and answers lookups by national id with a linear scan.
//! National ids are not required to be unique; when duplicates exist, the
//! earliest inserted record wins.

use thiserror::Error;
use tracing::instrument;

use crate::domain::{
    employee::{Department, Employee, EmployeeDetails, NationalId, Seniority},
    payslip::Payslip,
};

/// No employee has the requested national id.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("employee with national id {0} not found")]
pub struct NotFound(pub NationalId);

/// Which employees a listing includes.
///
/// At most one criterion applies per listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Filter {
    /// Every employee.
    #[default]
    All,
    /// Employees in the given department.
    Department(Department),
    /// Employees with the given seniority.
    Seniority(Seniority),
}

impl Filter {
    /// Returns `true` if the employee passes the filter.
    #[must_use]
    pub fn matches(self, employee: &Employee) -> bool {
        match self {
            Self::All => true,
            Self::Department(department) => employee.department() == department,
            Self::Seniority(seniority) => employee.seniority() == seniority,
        }
    }
}

/// Which salaries a payroll total covers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Scope {
    /// The whole company.
    #[default]
    Company,
    /// A single department.
    Department(Department),
}

impl From<Scope> for Filter {
    fn from(scope: Scope) -> Self {
        match scope {
            Scope::Company => Self::All,
            Scope::Department(department) => Self::Department(department),
        }
    }
}

/// An ordered collection of employees.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Registry {
    employees: Vec<Employee>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            employees: Vec::new(),
        }
    }

    /// Number of employees.
    #[must_use]
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns `true` if the registry holds no employees.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Iterates over every employee in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Employee> {
        self.employees.iter()
    }

    /// Appends an employee.
    ///
    /// The national id is not checked for uniqueness; use
    /// [`Registry::contains`] beforehand if that matters to the caller.
    #[instrument(
        level = "debug",
        skip(self, employee),
        fields(national_id = %employee.national_id())
    )]
    pub fn add(&mut self, employee: Employee) {
        self.employees.push(employee);
        tracing::info!(count = self.employees.len(), "employee added");
    }

    /// Returns `true` if any employee has the given national id.
    #[must_use]
    pub fn contains(&self, id: &NationalId) -> bool {
        self.position(id).is_some()
    }

    /// Finds the first employee with the given national id.
    #[must_use]
    pub fn find_by_id(&self, id: &NationalId) -> Option<&Employee> {
        let found = self.employees.iter().find(|e| e.national_id() == id);
        tracing::debug!(%id, found = found.is_some(), "lookup by national id");
        found
    }

    /// Replaces every field of an employee except the national id.
    ///
    /// The employee keeps its position in the registry.
    ///
    /// # Errors
    ///
    /// Returns [`NotFound`] if no employee has the given id, in which case the
    /// registry is unchanged.
    #[instrument(level = "debug", skip(self, details))]
    pub fn update_by_id(
        &mut self,
        id: &NationalId,
        details: EmployeeDetails,
    ) -> Result<&Employee, NotFound> {
        let index = self.position(id).ok_or_else(|| NotFound(id.clone()))?;
        let employee = &mut self.employees[index];
        employee.replace_details(details);
        tracing::info!(index, "employee updated");
        Ok(employee)
    }

    /// Removes the first employee with the given national id.
    ///
    /// The remaining employees keep their relative order.
    ///
    /// # Errors
    ///
    /// Returns [`NotFound`] if no employee has the given id, in which case the
    /// registry is unchanged.
    #[instrument(level = "debug", skip(self))]
    pub fn delete_by_id(&mut self, id: &NationalId) -> Result<Employee, NotFound> {
        let index = self.position(id).ok_or_else(|| NotFound(id.clone()))?;
        let removed = self.employees.remove(index);
        tracing::info!(index, "employee deleted");
        Ok(removed)
    }

    /// Lists the employees that pass the filter, in insertion order.
    ///
    /// The returned iterator is lazy; call `list` again to start over.
    pub fn list(&self, filter: Filter) -> impl Iterator<Item = &Employee> + '_ {
        self.employees.iter().filter(move |e| filter.matches(e))
    }

    /// Sums the gross salaries within the scope.
    ///
    /// Returns positive zero when no employee falls within the scope.
    #[must_use]
    pub fn total_payroll(&self, scope: Scope) -> f64 {
        // `Sum` for floats starts from -0.0
        self.list(scope.into())
            .map(|e| e.salary().get())
            .fold(0.0, |total, salary| total + salary)
    }

    /// Computes the payslip of the first employee with the given national id.
    ///
    /// # Errors
    ///
    /// Returns [`NotFound`] if no employee has the given id.
    pub fn payslip(&self, id: &NationalId) -> Result<Payslip, NotFound> {
        self.find_by_id(id)
            .map(|e| Payslip::from_gross(e.salary()))
            .ok_or_else(|| NotFound(id.clone()))
    }

    fn position(&self, id: &NationalId) -> Option<usize> {
        self.employees.iter().position(|e| e.national_id() == id)
    }
}

impl FromIterator<Employee> for Registry {
    fn from_iter<I: IntoIterator<Item = Employee>>(iter: I) -> Self {
        Self {
            employees: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a Employee;
    type IntoIter = std::slice::Iter<'a, Employee>;

    fn into_iter(self) -> Self::IntoIter {
        self.employees.iter()
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::domain::employee::Name;

    fn id(raw: &str) -> NationalId {
        NationalId::new(raw).unwrap()
    }

    fn details(
        first: &str,
        salary: f64,
        department: Department,
        seniority: Seniority,
    ) -> EmployeeDetails {
        EmployeeDetails {
            first_name: Name::new(first).unwrap(),
            last_name: Name::new("Popescu").unwrap(),
            age: "30".parse().unwrap(),
            salary: salary.try_into().unwrap(),
            department,
            seniority,
        }
    }

    fn employee(
        raw_id: &str,
        first: &str,
        salary: f64,
        department: Department,
        seniority: Seniority,
    ) -> Employee {
        Employee::new(id(raw_id), details(first, salary, department, seniority))
    }

    fn sample() -> Registry {
        [
            employee("1000000000001", "Ana", 5000.0, Department::It, Seniority::Junior),
            employee("1000000000002", "Bogdan", 7000.0, Department::Hr, Seniority::Senior),
            employee("1000000000003", "Carmen", 9000.0, Department::It, Seniority::Senior),
            employee("1000000000004", "Dan", 4500.0, Department::Finance, Seniority::Mid),
        ]
        .into_iter()
        .collect()
    }

    fn first_names<'a>(employees: impl Iterator<Item = &'a Employee>) -> Vec<&'a str> {
        employees.map(|e| e.first_name().as_str()).collect()
    }

    #[test]
    fn add_preserves_insertion_order() {
        let mut registry = Registry::new();
        registry.add(employee("2000000000001", "Zoe", 5000.0, Department::It, Seniority::Mid));
        registry.add(employee("2000000000002", "Adi", 5000.0, Department::It, Seniority::Mid));

        assert_eq!(registry.len(), 2);
        assert_eq!(first_names(registry.iter()), ["Zoe", "Adi"]);
    }

    #[test]
    fn find_by_id_returns_match() {
        let registry = sample();
        let found = registry.find_by_id(&id("1000000000003")).unwrap();
        assert_eq!(found.first_name().as_str(), "Carmen");
    }

    #[test]
    fn find_by_id_missing_returns_none() {
        assert!(sample().find_by_id(&id("9999999999999")).is_none());
    }

    #[test]
    fn duplicate_ids_resolve_to_earliest() {
        let mut registry = sample();
        registry.add(employee("1000000000001", "Later", 6000.0, Department::Hr, Seniority::Mid));

        let found = registry.find_by_id(&id("1000000000001")).unwrap();
        assert_eq!(found.first_name().as_str(), "Ana");
    }

    #[test]
    fn update_replaces_details_in_place() {
        let mut registry = sample();
        let target = id("1000000000002");

        registry
            .update_by_id(&target, details("Bianca", 8000.0, Department::Marketing, Seniority::Mid))
            .unwrap();

        let updated = registry.find_by_id(&target).unwrap();
        assert_eq!(updated.national_id(), &target);
        assert_eq!(updated.first_name().as_str(), "Bianca");
        assert_eq!(updated.department(), Department::Marketing);
        assert_eq!(updated.seniority(), Seniority::Mid);
        assert_eq!(
            first_names(registry.iter()),
            ["Ana", "Bianca", "Carmen", "Dan"]
        );
    }

    #[test]
    fn update_missing_id_leaves_registry_unchanged() {
        let mut registry = sample();
        let before = registry.clone();

        let error = registry
            .update_by_id(
                &id("9999999999999"),
                details("Xena", 5000.0, Department::Hr, Seniority::Mid),
            )
            .unwrap_err();

        assert_eq!(error, NotFound(id("9999999999999")));
        assert_eq!(registry, before);
    }

    #[test]
    fn delete_then_find_is_not_found() {
        let mut registry = sample();
        let target = id("1000000000002");

        let removed = registry.delete_by_id(&target).unwrap();

        assert_eq!(removed.first_name().as_str(), "Bogdan");
        assert!(registry.find_by_id(&target).is_none());
        assert_eq!(first_names(registry.iter()), ["Ana", "Carmen", "Dan"]);
    }

    #[test]
    fn delete_missing_id_is_reported() {
        let mut registry = sample();
        assert!(registry.delete_by_id(&id("9999999999999")).is_err());
        assert_eq!(registry.len(), 4);
    }

    #[test_case(Filter::All, &["Ana", "Bogdan", "Carmen", "Dan"]; "all")]
    #[test_case(Filter::Department(Department::It), &["Ana", "Carmen"]; "department")]
    #[test_case(Filter::Department(Department::Marketing), &[]; "empty department")]
    #[test_case(Filter::Seniority(Seniority::Senior), &["Bogdan", "Carmen"]; "seniority")]
    fn list_applies_filter(filter: Filter, expected: &[&str]) {
        let registry = sample();
        assert_eq!(first_names(registry.list(filter)), expected);
    }

    #[test]
    fn list_is_restartable() {
        let registry = sample();
        let filter = Filter::Seniority(Seniority::Senior);
        assert_eq!(registry.list(filter).count(), 2);
        assert_eq!(registry.list(filter).count(), 2);
    }

    #[test]
    fn total_payroll_of_empty_registry_is_zero() {
        let registry = Registry::new();
        assert!(registry.total_payroll(Scope::Company).abs() < f64::EPSILON);
        assert!(
            registry
                .total_payroll(Scope::Department(Department::It))
                .abs()
                < f64::EPSILON
        );
    }

    #[test_case(Registry::new(), Scope::Company; "empty registry")]
    #[test_case(sample(), Scope::Department(Department::Marketing); "empty department")]
    fn total_payroll_with_no_matches_is_positive_zero(registry: Registry, scope: Scope) {
        let total = registry.total_payroll(scope);
        assert!(!total.is_sign_negative());
        assert_eq!(format!("{total:.2}"), "0.00");
    }

    #[test_case(Scope::Company, 25_500.0; "company")]
    #[test_case(Scope::Department(Department::It), 14_000.0; "it")]
    #[test_case(Scope::Department(Department::Marketing), 0.0; "no match")]
    fn total_payroll_sums_scope(scope: Scope, expected: f64) {
        assert!((sample().total_payroll(scope) - expected).abs() < 1e-9);
    }

    #[test]
    fn department_payroll_only_counts_that_department() {
        let mut registry = Registry::new();
        registry.add(employee("3000000000001", "Alin", 6000.0, Department::It, Seniority::Mid));
        registry.add(employee("3000000000002", "Bianca", 8000.0, Department::Hr, Seniority::Mid));

        let total = registry.total_payroll(Scope::Department(Department::It));
        assert!((total - 6000.0).abs() < 1e-9);
    }

    #[test]
    fn payslip_for_known_employee() {
        let mut registry = Registry::new();
        registry.add(employee("4000000000001", "Ion", 5000.0, Department::It, Seniority::Mid));

        let payslip = registry.payslip(&id("4000000000001")).unwrap();
        assert!((payslip.net - 2925.0).abs() < 1e-6);
        assert!((payslip.income_tax - 325.0).abs() < 1e-6);
    }

    #[test]
    fn payslip_for_missing_employee_is_not_found() {
        let error = Registry::new().payslip(&id("4000000000001")).unwrap_err();
        assert_eq!(
            error.to_string(),
            "employee with national id 4000000000001 not found"
        );
    }
}
