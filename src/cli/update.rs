use clap::Parser;
use employees::{
    Department, NotFound, Seniority,
    domain::{Age, Name, NationalId, Salary},
};
use tracing::instrument;

use super::{Workspace, display::employee_card, terminal::Colorize};

/// Command arguments for `emp update`.
///
/// Fields that are not given keep their current values. The national id
/// identifies the employee and is never changed.
#[derive(Debug, Parser)]
#[command(about = "Update an employee's details")]
pub struct Update {
    /// The national id (CNP) of the employee to update
    national_id: NationalId,

    /// New given name
    #[arg(long)]
    first_name: Option<Name>,

    /// New family name
    #[arg(long)]
    last_name: Option<Name>,

    /// New age in years
    #[arg(long)]
    age: Option<Age>,

    /// New gross monthly salary
    #[arg(long)]
    salary: Option<Salary>,

    /// New department
    #[arg(long)]
    department: Option<Department>,

    /// New seniority level
    #[arg(long)]
    seniority: Option<Seniority>,
}

impl Update {
    const fn has_changes(&self) -> bool {
        self.first_name.is_some()
            || self.last_name.is_some()
            || self.age.is_some()
            || self.salary.is_some()
            || self.department.is_some()
            || self.seniority.is_some()
    }

    #[instrument(level = "debug", skip(workspace))]
    pub fn run(self, workspace: &Workspace) -> anyhow::Result<()> {
        if !self.has_changes() {
            anyhow::bail!("Nothing to update: give at least one field to change");
        }

        let mut registry = workspace.load_registry_for_update()?;

        let mut details = registry
            .find_by_id(&self.national_id)
            .ok_or_else(|| NotFound(self.national_id.clone()))?
            .details()
            .clone();

        if let Some(first_name) = self.first_name {
            details.first_name = first_name;
        }
        if let Some(last_name) = self.last_name {
            details.last_name = last_name;
        }
        if let Some(age) = self.age {
            details.age = age;
        }
        if let Some(salary) = self.salary {
            details.salary = salary;
        }
        if let Some(department) = self.department {
            details.department = department;
        }
        if let Some(seniority) = self.seniority {
            details.seniority = seniority;
        }

        let card = employee_card(
            registry.update_by_id(&self.national_id, details)?,
            workspace.currency(),
        );
        workspace.save_registry(&registry)?;

        println!("{}", "✅ Employee updated".success());
        println!("{card}");
        Ok(())
    }
}
