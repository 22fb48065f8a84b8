use clap::Parser;
use employees::{Department, Scope};
use tracing::instrument;

use super::{Workspace, display::payroll_line};

#[derive(Debug, Parser)]
#[command(about = "Total gross payroll")]
pub struct Payroll {
    /// Only count employees in this department
    #[arg(long)]
    department: Option<Department>,
}

impl Payroll {
    #[instrument(level = "debug", skip(workspace))]
    pub fn run(self, workspace: &Workspace) -> anyhow::Result<()> {
        let scope = self.department.map_or(Scope::Company, Scope::Department);
        let total = workspace.load_registry().total_payroll(scope);
        println!("{}", payroll_line(scope, total, workspace.currency()));
        Ok(())
    }
}
