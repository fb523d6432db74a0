//! Servicebericht export command.
//!
//! Writes the finished report to CSV, JSON or Excel. Export only runs
//! on a complete report: a time validation failure or an empty
//! employee selection aborts with the same message the preview shows,
//! so nothing half-valid ever leaves the tool.

use crate::{
    libs::{
        config::Config,
        draft::Draft,
        export::{Exporter, ExportFormat, Servicebericht},
        messages::Message,
        price, report,
    },
    msg_error, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output format for the exported report
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    /// Custom output file path
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let config = Config::read()?;
    let draft = Draft::load(&config)?;

    let report = match report::calculate(&draft.time_inputs()) {
        Ok(report) => report,
        Err(rule) => {
            msg_error!(Message::TimeValidation(rule.to_string()));
            return Ok(());
        }
    };

    if !draft.employees.has_employees() {
        msg_error!(Message::NoEmployeesSelected);
        return Ok(());
    }

    let breakdown = price::calculate(Some(&report), &draft.price, draft.employees.count(), config.tax_rate, draft.extra_brutto());
    let bericht = Servicebericht::assemble(&draft, &report, &breakdown);

    let path = Exporter::new(args.format, args.output).export(&bericht)?;
    msg_success!(Message::ExportCompleted(path.display().to_string()));

    Ok(())
}
