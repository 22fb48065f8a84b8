use std::path::PathBuf;

mod add;
mod delete;
mod display;
mod interactive;
mod list;
mod menu;
mod payroll;
mod payslip;
mod prompt;
mod show;
mod terminal;
mod update;

use add::Add;
use anyhow::Context;
use clap::ArgAction;
use delete::Delete;
use employees::{
    Config, Registry,
    storage::{self, LoadError},
};
use interactive::Menu;
use list::List;
use payroll::Payroll;
use payslip::Payslip;
use show::Show;
use tracing::instrument;
use update::Update;

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// The path to the configuration file
    #[arg(short, long, default_value = "employees.toml", global = true)]
    config: PathBuf,

    /// The path to the employee data file (overrides the configuration)
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let workspace = Workspace::open(self.config, self.file)?;

        self.command
            .unwrap_or_else(|| Command::Menu(Menu::default()))
            .run(&workspace)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Run the interactive menu (default)
    Menu(Menu),

    /// Write a default configuration file
    Init,

    /// Add an employee
    Add(Add),

    /// Show an employee by national id
    Show(Show),

    /// Update an employee's details by national id
    ///
    /// The national id itself cannot be changed.
    Update(Update),

    /// Delete an employee by national id
    Delete(Delete),

    /// List employees, optionally filtered by department or seniority
    List(List),

    /// Total gross payroll for the company or a department
    Payroll(Payroll),

    /// Payslip breakdown for an employee
    Payslip(Payslip),
}

impl Command {
    fn run(self, workspace: &Workspace) -> anyhow::Result<()> {
        match self {
            Self::Menu(command) => command.run(workspace)?,
            Self::Init => Init::run(workspace)?,
            Self::Add(command) => command.run(workspace)?,
            Self::Show(command) => command.run(workspace)?,
            Self::Update(command) => command.run(workspace)?,
            Self::Delete(command) => command.run(workspace)?,
            Self::List(command) => command.run(workspace)?,
            Self::Payroll(command) => command.run(workspace)?,
            Self::Payslip(command) => command.run(workspace)?,
        }
        Ok(())
    }
}

#[derive(Debug, clap::Parser)]
pub struct Init {}

impl Init {
    #[instrument(skip(workspace))]
    fn run(workspace: &Workspace) -> anyhow::Result<()> {
        let config_path = workspace.config_path.as_path();
        if config_path.exists() {
            anyhow::bail!(
                "Configuration already exists at {}",
                config_path.display()
            );
        }

        let config = workspace.config();
        config
            .save(config_path)
            .map_err(|e| anyhow::anyhow!("Failed to create {}: {e}", config_path.display()))?;

        println!("Initialized configuration in {}", config_path.display());
        println!("  Data file: {}", config.data_file().display());
        println!("  Currency:  {}", config.currency());
        Ok(())
    }
}

/// The resolved configuration for a single invocation, and access to the
/// registry it points at.
#[derive(Debug)]
pub struct Workspace {
    config_path: PathBuf,
    config: Config,
}

impl Workspace {
    /// Loads the configuration file, if present, and applies the data file
    /// override.
    fn open(config_path: PathBuf, data_file: Option<PathBuf>) -> anyhow::Result<Self> {
        let mut config =
            Config::load_or_default(&config_path).map_err(|e| anyhow::anyhow!("{e}"))?;
        if let Some(file) = data_file {
            config.set_data_file(file);
        }
        tracing::debug!(?config, "configuration loaded");

        Ok(Self {
            config_path,
            config,
        })
    }

    pub const fn config(&self) -> &Config {
        &self.config
    }

    pub fn currency(&self) -> &str {
        self.config.currency()
    }

    /// Loads the registry, starting empty if the data file cannot be loaded.
    pub fn load_registry(&self) -> Registry {
        storage::load_or_default(self.config.data_file())
    }

    /// Loads the registry for a command that will save it again.
    ///
    /// A missing data file yields an empty registry, but an unreadable or
    /// invalid one is an error: saving would overwrite it.
    pub fn load_registry_for_update(&self) -> anyhow::Result<Registry> {
        let path = self.config.data_file();
        match storage::load(path) {
            Ok(registry) => Ok(registry),
            Err(LoadError::NotFound) => {
                tracing::info!("{} not found, starting with no employees", path.display());
                Ok(Registry::new())
            }
            Err(error) => Err(error)
                .with_context(|| format!("Refusing to modify {}", path.display())),
        }
    }

    pub fn save_registry(&self, registry: &Registry) -> anyhow::Result<()> {
        let path = self.config.data_file();
        storage::save(path, registry)
            .with_context(|| format!("Failed to save employees to {}", path.display()))
    }
}
