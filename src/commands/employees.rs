//! Employee selection command.
//!
//! Without flags the current selection is listed. `--add` picks from
//! the configured roster (already selected entries are hidden),
//! `--add-custom` takes an ad-hoc name that receives a negative id
//! from the draft's counter, `--remove` drops a selected employee.

use crate::{
    libs::{config::Config, draft::Draft, messages::Message, view::View},
    msg_error, msg_info, msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Select};

#[derive(Debug, Args)]
pub struct EmployeesArgs {
    /// Pick an employee from the configured roster
    #[arg(long, short)]
    add: bool,

    /// Add an employee that is not on the roster
    #[arg(long, value_name = "NAME")]
    add_custom: Option<String>,

    /// Remove a selected employee by id
    #[arg(long, short, value_name = "ID")]
    remove: Option<i32>,
}

pub fn cmd(args: EmployeesArgs) -> Result<()> {
    let config = Config::read()?;
    let mut draft = Draft::load(&config)?;

    if args.add {
        let available = draft.employees.available(&config.roster);
        if available.is_empty() {
            msg_warning!(Message::RosterEmpty);
            return Ok(());
        }

        let names: Vec<&str> = available.iter().map(|e| e.name.as_str()).collect();
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectEmployee.to_string())
            .items(&names)
            .default(0)
            .interact()?;

        let employee = available[selection].clone();
        let name = employee.name.clone();
        if draft.employees.add_from_roster(employee) {
            draft.save()?;
            msg_success!(Message::EmployeeAdded(name));
        } else {
            msg_warning!(Message::EmployeeAlreadySelected(name));
        }
        return Ok(());
    }

    if let Some(name) = args.add_custom {
        match draft.employees.add_custom(&name) {
            Some(employee) => {
                draft.save()?;
                msg_success!(Message::EmployeeAdded(employee.name));
            }
            None => msg_error!(Message::EmployeeNameEmpty),
        }
        return Ok(());
    }

    if let Some(id) = args.remove {
        match draft.employees.remove(id) {
            Some(employee) => {
                draft.save()?;
                msg_success!(Message::EmployeeRemoved(employee.name));
            }
            None => msg_error!(Message::EmployeeNotFound(id)),
        }
        return Ok(());
    }

    if draft.employees.has_employees() {
        View::employees(&draft.employees.selected)?;
    } else {
        msg_info!(Message::NoEmployeesSelected);
    }
    Ok(())
}
