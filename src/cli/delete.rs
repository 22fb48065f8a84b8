use clap::Parser;
use employees::{NotFound, domain::NationalId};
use tracing::instrument;

use super::{Workspace, display::employee_card, prompt::Prompter, terminal::Colorize};

#[derive(Debug, Parser)]
#[command(about = "Delete an employee by national id")]
pub struct Delete {
    /// The national id (CNP) of the employee to delete
    national_id: NationalId,

    /// Skip the confirmation prompt
    #[arg(long, short)]
    yes: bool,
}

impl Delete {
    #[instrument(level = "debug", skip(workspace))]
    pub fn run(self, workspace: &Workspace) -> anyhow::Result<()> {
        let mut registry = workspace.load_registry_for_update()?;

        let employee = registry
            .find_by_id(&self.national_id)
            .ok_or_else(|| NotFound(self.national_id.clone()))?;

        if !self.yes {
            println!("Will delete:");
            println!("{}", employee_card(employee, workspace.currency()));
            if !Prompter::stdin().confirm("Proceed?")? {
                println!("{}", "Cancelled".dim());
                return Ok(());
            }
        }

        registry.delete_by_id(&self.national_id)?;
        workspace.save_registry(&registry)?;

        println!(
            "{}",
            format!("✅ Deleted employee {}", self.national_id).success()
        );
        Ok(())
    }
}
