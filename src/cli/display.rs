//! Plain-text rendering of employees, payslips and payroll totals.

use std::fmt::Write;

use clap::ValueEnum;
use employees::{Employee, Payslip, Scope, storage::EmployeeRecord};

const DELIMITER: &str = "----------";

/// Output format for commands that print employees.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Pretty,
    Json,
}

/// Renders one employee as a block of labelled lines.
pub fn employee_card(employee: &Employee, currency: &str) -> String {
    format!(
        "{DELIMITER}\n\
         Last name:   {}\n\
         First name:  {}\n\
         National id: {}\n\
         Age:         {}\n\
         Salary:      {} {currency}\n\
         Department:  {}\n\
         Seniority:   {}",
        employee.last_name(),
        employee.first_name(),
        employee.national_id(),
        employee.age(),
        employee.salary(),
        employee.department(),
        employee.seniority(),
    )
}

/// Renders a payslip for an employee.
pub fn payslip_card(employee: &Employee, payslip: &Payslip, currency: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{DELIMITER}");
    let _ = writeln!(out, "Last name:           {}", employee.last_name());
    let _ = writeln!(out, "First name:          {}", employee.first_name());
    let _ = writeln!(out, "Gross:               {:.2} {currency}", payslip.gross);
    let _ = writeln!(out);
    let _ = writeln!(out, "Social contribution: {:.2} {currency}", payslip.social_contribution);
    let _ = writeln!(out, "Health contribution: {:.2} {currency}", payslip.health_contribution);
    let _ = writeln!(out, "Taxable:             {:.2} {currency}", payslip.taxable);
    let _ = writeln!(out, "Income tax:          {:.2} {currency}", payslip.income_tax);
    let _ = write!(out, "Net:                 {:.2} {currency}", payslip.net);
    out
}

/// Describes a payroll total.
pub fn payroll_line(scope: Scope, total: f64, currency: &str) -> String {
    match scope {
        Scope::Company => format!("Total salary cost: {total:.2} {currency}"),
        Scope::Department(department) => {
            format!("Total salary cost for the {department} department: {total:.2} {currency}")
        }
    }
}

/// Prints employees in the chosen format.
pub fn print_employees<'a>(
    employees: impl Iterator<Item = &'a Employee>,
    format: OutputFormat,
    currency: &str,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Pretty => {
            let mut count = 0_usize;
            for employee in employees {
                println!("{}\n", employee_card(employee, currency));
                count += 1;
            }
            if count == 0 {
                println!("No employees found");
            }
        }
        OutputFormat::Json => {
            let records: Vec<EmployeeRecord> = employees.map(EmployeeRecord::from).collect();
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use employees::{Department, EmployeeDetails, Registry, Seniority, domain::NationalId};

    use super::*;

    fn employee() -> Employee {
        Employee::new(
            NationalId::new("1800101123456").unwrap(),
            EmployeeDetails {
                first_name: "Vlad".parse().unwrap(),
                last_name: "Stan".parse().unwrap(),
                age: "44".parse().unwrap(),
                salary: "5000".parse().unwrap(),
                department: Department::It,
                seniority: Seniority::Senior,
            },
        )
    }

    #[test]
    fn card_lists_every_field() {
        let expected = "----------\n\
                        Last name:   Stan\n\
                        First name:  Vlad\n\
                        National id: 1800101123456\n\
                        Age:         44\n\
                        Salary:      5000.00 lei\n\
                        Department:  IT\n\
                        Seniority:   senior";
        assert_eq!(employee_card(&employee(), "lei"), expected);
    }

    #[test]
    fn payslip_shows_breakdown() {
        let employee = employee();
        let payslip = Payslip::from_gross(employee.salary());

        let card = payslip_card(&employee, &payslip, "lei");

        assert!(card.contains("Gross:               5000.00 lei"));
        assert!(card.contains("Social contribution: 500.00 lei"));
        assert!(card.contains("Health contribution: 1250.00 lei"));
        assert!(card.contains("Taxable:             3250.00 lei"));
        assert!(card.contains("Income tax:          325.00 lei"));
        assert!(card.ends_with("Net:                 2925.00 lei"));
    }

    #[test]
    fn payroll_line_names_department() {
        assert_eq!(
            payroll_line(Scope::Department(Department::Hr), 12_000.0, "EUR"),
            "Total salary cost for the HR department: 12000.00 EUR"
        );
        assert_eq!(
            payroll_line(Scope::Company, 0.0, "lei"),
            "Total salary cost: 0.00 lei"
        );
    }

    #[test]
    fn payroll_line_for_department_without_employees_is_zero() {
        let registry: Registry = [employee()].into_iter().collect();
        let scope = Scope::Department(Department::Hr);

        assert_eq!(
            payroll_line(scope, registry.total_payroll(scope), "lei"),
            "Total salary cost for the HR department: 0.00 lei"
        );
    }
}
