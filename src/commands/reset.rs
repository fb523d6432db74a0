//! Draft reset command.
//!
//! Deletes the draft file so the next command starts from defaults:
//! today's date, a fresh order number, the configured rate, no
//! customer, no employees, no line items. Asks for confirmation unless
//! `--force` is given.

use crate::{
    libs::{draft::Draft, messages::Message},
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct ResetArgs {
    /// Skip confirmation prompt
    #[arg(long, short)]
    force: bool,
}

pub fn cmd(args: ResetArgs) -> Result<()> {
    if !args.force {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmReset.to_string())
            .default(false)
            .interact()?;

        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    Draft::delete()?;
    msg_success!(Message::DraftReset);
    Ok(())
}
