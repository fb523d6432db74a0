//! Servicebericht preview command.
//!
//! Recomputes the duration report and the price breakdown from the
//! stored draft and renders the full report to the terminal. A time
//! validation failure prints the violated rule and nothing else; an
//! empty employee selection is flagged but does not suppress the
//! preview.

use crate::{
    libs::{config::Config, draft::Draft, messages::Message, price, report, view::View},
    msg_error, msg_print, msg_warning,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ReportArgs {}

pub fn cmd(_report_args: ReportArgs) -> Result<()> {
    let config = Config::read()?;
    let draft = Draft::load(&config)?;

    let report = match report::calculate(&draft.time_inputs()) {
        Ok(report) => report,
        Err(rule) => {
            msg_error!(Message::TimeValidation(rule.to_string()));
            return Ok(());
        }
    };

    let breakdown = price::calculate(Some(&report), &draft.price, draft.employees.count(), config.tax_rate, draft.extra_brutto());

    msg_print!(Message::ReportHeader(draft.date.clone()), true);
    View::bericht(&draft, &report, &breakdown)?;

    if !draft.employees.has_employees() {
        msg_warning!(Message::NoEmployeesSelected);
    }

    Ok(())
}
