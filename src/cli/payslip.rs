use clap::Parser;
use employees::{NotFound, domain::NationalId};
use tracing::instrument;

use super::{Workspace, display::payslip_card};

#[derive(Debug, Parser)]
#[command(about = "Payslip breakdown for an employee")]
pub struct Payslip {
    /// The national id (CNP) of the employee
    national_id: NationalId,
}

impl Payslip {
    #[instrument(level = "debug", skip(workspace))]
    pub fn run(self, workspace: &Workspace) -> anyhow::Result<()> {
        let registry = workspace.load_registry();

        let employee = registry
            .find_by_id(&self.national_id)
            .ok_or_else(|| NotFound(self.national_id.clone()))?;
        let payslip = registry.payslip(&self.national_id)?;

        println!("{}", payslip_card(employee, &payslip, workspace.currency()));
        Ok(())
    }
}
