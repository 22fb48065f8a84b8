use clap::Parser;
use employees::{NotFound, domain::NationalId, storage::EmployeeRecord};
use tracing::instrument;

use super::{
    Workspace,
    display::{OutputFormat, employee_card},
};

#[derive(Debug, Parser)]
#[command(about = "Display an employee by national id")]
pub struct Show {
    /// The national id (CNP) of the employee to display
    national_id: NationalId,

    /// Output format
    #[arg(long, value_enum, default_value_t)]
    output: OutputFormat,
}

impl Show {
    #[instrument(level = "debug", skip(workspace))]
    pub fn run(self, workspace: &Workspace) -> anyhow::Result<()> {
        let registry = workspace.load_registry();

        let employee = registry
            .find_by_id(&self.national_id)
            .ok_or_else(|| NotFound(self.national_id.clone()))?;

        match self.output {
            OutputFormat::Pretty => println!("{}", employee_card(employee, workspace.currency())),
            OutputFormat::Json => println!(
                "{}",
                serde_json::to_string_pretty(&EmployeeRecord::from(employee))?
            ),
        }
        Ok(())
    }
}
