//! Order header command: Arbeitsdatum, Auftragsnummer, Stundensatz and
//! an optional description.
//!
//! With flags the given fields are updated directly; without any flag
//! every field is prompted interactively, pre-filled with the current
//! draft values.

use crate::{
    libs::{config::Config, draft::Draft, messages::Message},
    msg_bail_anyhow, msg_success,
};
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct OrderArgs {
    /// Arbeitsdatum (YYYY-MM-DD)
    #[arg(long, short)]
    date: Option<String>,

    /// Auftragsnummer
    #[arg(long, short)]
    nummer: Option<String>,

    /// Stundensatz in Euro per hour
    #[arg(long, short)]
    rate: Option<String>,

    /// Order description
    #[arg(long)]
    details: Option<String>,
}

pub fn cmd(args: OrderArgs) -> Result<()> {
    let config = Config::read()?;
    let mut draft = Draft::load(&config)?;

    let interactive = args.date.is_none() && args.nummer.is_none() && args.rate.is_none() && args.details.is_none();

    if interactive {
        draft.date = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptArbeitsdatum.to_string())
            .default(draft.date.clone())
            .validate_with(|input: &String| -> Result<(), String> {
                input
                    .parse::<NaiveDate>()
                    .map(|_| ())
                    .map_err(|_| Message::InvalidDate(input.clone()).to_string())
            })
            .interact_text()?;

        draft.auftragsnummer = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptAuftragsnummer.to_string())
            .default(draft.auftragsnummer.clone())
            .interact_text()?;

        draft.price = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptStundensatz.to_string())
            .default(draft.price.clone())
            .interact_text()?;

        draft.order_details = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptOrderDetails.to_string())
            .default(draft.order_details.clone())
            .allow_empty(true)
            .interact_text()?;
    } else {
        if let Some(date) = args.date {
            if date.parse::<NaiveDate>().is_err() {
                msg_bail_anyhow!(Message::InvalidDate(date));
            }
            draft.date = date;
        }
        if let Some(nummer) = args.nummer {
            draft.auftragsnummer = nummer;
        }
        if let Some(rate) = args.rate {
            draft.price = rate;
        }
        if let Some(details) = args.details {
            draft.order_details = details;
        }
    }

    draft.save()?;
    msg_success!(Message::DraftSaved);
    Ok(())
}
