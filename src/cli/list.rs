use clap::Parser;
use employees::{Department, Filter, Seniority};
use tracing::instrument;

use super::{
    Workspace,
    display::{OutputFormat, print_employees},
};

/// Command arguments for `emp list`.
#[derive(Debug, Parser)]
#[command(about = "List employees, optionally filtered")]
pub struct List {
    /// Only employees in this department
    #[arg(long, conflicts_with = "seniority")]
    department: Option<Department>,

    /// Only employees with this seniority
    #[arg(long)]
    seniority: Option<Seniority>,

    /// Output format
    #[arg(long, value_enum, default_value_t)]
    output: OutputFormat,
}

impl List {
    const fn filter(&self) -> Filter {
        match (self.department, self.seniority) {
            (Some(department), _) => Filter::Department(department),
            (None, Some(seniority)) => Filter::Seniority(seniority),
            (None, None) => Filter::All,
        }
    }

    #[instrument(level = "debug", skip(workspace))]
    pub fn run(self, workspace: &Workspace) -> anyhow::Result<()> {
        let registry = workspace.load_registry();
        print_employees(
            registry.list(self.filter()),
            self.output,
            workspace.currency(),
        )
    }
}
