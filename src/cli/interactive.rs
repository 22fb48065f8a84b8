//! The interactive main menu.
//!
//! The registry is loaded once when the menu starts and saved once when the
//! user chooses to exit. Changes made before an abnormal exit are lost, and
//! so are changes made before piped input runs out.

use clap::Parser;
use employees::{Employee, Filter, Registry, Scope, domain::NationalId};
use tracing::instrument;

use super::{
    Workspace,
    display::{employee_card, payroll_line, payslip_card},
    menu::{MenuError, MenuOption},
    prompt::{InputClosed, Prompter},
    terminal::{self, Colorize},
};

#[derive(Debug, Default, Parser)]
#[command(about = "Run the interactive menu")]
pub struct Menu {}

impl Menu {
    #[instrument(level = "debug", skip_all)]
    pub fn run(self, workspace: &Workspace) -> anyhow::Result<()> {
        run_with(workspace, Prompter::stdin())
    }
}

fn run_with(workspace: &Workspace, prompter: Prompter) -> anyhow::Result<()> {
    let mut session = Session {
        registry: workspace.load_registry(),
        currency: workspace.currency(),
        prompter,
    };
    tracing::info!(count = session.registry.len(), "menu started");

    match session.run(workspace) {
        Err(error) if error.is::<InputClosed>() => {
            tracing::info!("input closed before exit, changes not saved");
            eprintln!("{}", "Input closed, changes were not saved".warning());
            Ok(())
        }
        result => result,
    }
}

fn print_menu() {
    let rule = terminal::banner_rule();
    println!();
    println!("{rule}");
    println!("Main menu");
    println!("{rule}");
    for option in MenuOption::ALL {
        println!("{option}");
    }
    println!("{rule}");
}

fn report_invalid_option(error: &MenuError) {
    tracing::debug!(%error, "invalid menu selection");
    eprintln!("{}", error.to_string().warning());
}

/// State of one interactive session.
struct Session<'a> {
    registry: Registry,
    currency: &'a str,
    prompter: Prompter,
}

impl Session<'_> {
    fn run(&mut self, workspace: &Workspace) -> anyhow::Result<()> {
        loop {
            print_menu();
            let option = match self.prompter.text("Choose an option")?.parse::<MenuOption>() {
                Ok(option) => option,
                Err(error) => {
                    report_invalid_option(&error);
                    continue;
                }
            };

            if option == MenuOption::Exit {
                workspace.save_registry(&self.registry)?;
                println!("Saved {} employee(s). Goodbye.", self.registry.len());
                return Ok(());
            }

            self.handle(option)?;
        }
    }

    fn handle(&mut self, option: MenuOption) -> anyhow::Result<()> {
        match option {
            MenuOption::Add => self.add()?,
            MenuOption::Find => self.find()?,
            MenuOption::Update => self.update()?,
            MenuOption::Delete => self.delete()?,
            MenuOption::ListAll => self.list(Filter::All),
            MenuOption::TotalPayroll => self.payroll(Scope::Company),
            MenuOption::DepartmentPayroll => {
                let department = self.prompter.department()?;
                self.payroll(Scope::Department(department));
            }
            MenuOption::Payslip => self.payslip()?,
            MenuOption::ListBySeniority => {
                let seniority = self.prompter.seniority()?;
                self.list(Filter::Seniority(seniority));
            }
            MenuOption::ListByDepartment => {
                let department = self.prompter.department()?;
                self.list(Filter::Department(department));
            }
            MenuOption::Exit => {}
        }
        Ok(())
    }

    fn add(&mut self) -> anyhow::Result<()> {
        let national_id = self.prompter.national_id()?;
        if self.registry.contains(&national_id) {
            tracing::warn!(%national_id, "adding an employee with a duplicate national id");
            eprintln!(
                "{}",
                format!("An employee with national id {national_id} already exists").warning()
            );
        }

        let details = self.prompter.details()?;
        self.registry.add(Employee::new(national_id, details));
        println!("{}", "Employee added".success());
        Ok(())
    }

    fn find(&mut self) -> anyhow::Result<()> {
        let national_id = self.prompter.national_id()?;
        match self.registry.find_by_id(&national_id) {
            Some(employee) => println!("{}", employee_card(employee, self.currency)),
            None => report_not_found(&national_id),
        }
        Ok(())
    }

    fn update(&mut self) -> anyhow::Result<()> {
        let national_id = self.prompter.national_id()?;
        let Some(current) = self.registry.find_by_id(&national_id) else {
            report_not_found(&national_id);
            return Ok(());
        };

        println!("{}", "Current details:".dim());
        println!("{}", employee_card(current, self.currency));

        let details = self.prompter.details()?;
        let updated = self.registry.update_by_id(&national_id, details)?;

        println!("{}", "Employee updated. New details:".success());
        println!("{}", employee_card(updated, self.currency));
        Ok(())
    }

    fn delete(&mut self) -> anyhow::Result<()> {
        let national_id = self.prompter.national_id()?;
        match self.registry.delete_by_id(&national_id) {
            Ok(_) => println!("{}", "Employee deleted".success()),
            Err(_) => report_not_found(&national_id),
        }
        Ok(())
    }

    fn list(&self, filter: Filter) {
        let mut matches = self.registry.list(filter).peekable();
        if matches.peek().is_none() {
            println!("{}", "No employees found".dim());
            return;
        }
        for employee in matches {
            println!("{}\n", employee_card(employee, self.currency));
        }
    }

    fn payroll(&self, scope: Scope) {
        let total = self.registry.total_payroll(scope);
        println!("{}", payroll_line(scope, total, self.currency));
    }

    fn payslip(&mut self) -> anyhow::Result<()> {
        let national_id = self.prompter.national_id()?;
        match self.registry.find_by_id(&national_id) {
            Some(employee) => {
                let payslip = self.registry.payslip(&national_id)?;
                println!("{}", payslip_card(employee, &payslip, self.currency));
            }
            None => report_not_found(&national_id),
        }
        Ok(())
    }
}

fn report_not_found(national_id: &NationalId) {
    eprintln!(
        "{}",
        format!(
            "Employee with national id {national_id} not found. \
             Check the national id and try again."
        )
        .warning()
    );
}
