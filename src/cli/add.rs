use clap::Parser;
use employees::{
    Department, Employee, EmployeeDetails, Seniority,
    domain::{Age, Name, NationalId, Salary},
};
use tracing::instrument;

use super::{Workspace, terminal::Colorize};

#[derive(Debug, Parser)]
#[command(about = "Add an employee")]
pub struct Add {
    /// National id (CNP): exactly 13 digits
    national_id: NationalId,

    /// Given name, starting with an uppercase letter
    #[arg(long)]
    first_name: Name,

    /// Family name, starting with an uppercase letter
    #[arg(long)]
    last_name: Name,

    /// Age in years, two digits between 18 and 65
    #[arg(long)]
    age: Age,

    /// Gross monthly salary, at least the minimum wage of 4050
    #[arg(long)]
    salary: Salary,

    /// One of HR, Marketing, IT, Finance
    #[arg(long)]
    department: Department,

    /// One of junior, mid, senior
    #[arg(long)]
    seniority: Seniority,
}

impl Add {
    #[instrument(level = "debug", skip(workspace))]
    pub fn run(self, workspace: &Workspace) -> anyhow::Result<()> {
        let mut registry = workspace.load_registry_for_update()?;

        if registry.contains(&self.national_id) {
            tracing::warn!(
                national_id = %self.national_id,
                "adding an employee with a duplicate national id"
            );
            eprintln!(
                "{}",
                format!(
                    "⚠️  An employee with national id {} already exists",
                    self.national_id
                )
                .warning()
            );
        }

        let national_id = self.national_id.clone();
        registry.add(Employee::new(
            self.national_id,
            EmployeeDetails {
                first_name: self.first_name,
                last_name: self.last_name,
                age: self.age,
                salary: self.salary,
                department: self.department,
                seniority: self.seniority,
            },
        ));
        workspace.save_registry(&registry)?;

        println!("{}", format!("✅ Added employee {national_id}").success());
        Ok(())
    }
}
