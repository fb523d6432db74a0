//! Customer data wizard.
//!
//! Prompts for the customer block of the report header: kind (private
//! or company), name, optional phone and the address. Existing values
//! are pre-filled so re-running only edits what changed. `--clear`
//! removes the customer from the draft.

use crate::{
    libs::{
        config::Config,
        customer::{Customer, CustomerKind},
        draft::Draft,
        messages::Message,
    },
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input, Select};

#[derive(Debug, Args)]
pub struct CustomerArgs {
    /// Remove the customer data from the draft
    #[arg(long)]
    clear: bool,
}

pub fn cmd(args: CustomerArgs) -> Result<()> {
    let config = Config::read()?;
    let mut draft = Draft::load(&config)?;

    if args.clear {
        if draft.customer.take().is_some() {
            draft.save()?;
            msg_success!(Message::CustomerCleared);
        } else {
            msg_info!(Message::CustomerNotSet);
        }
        return Ok(());
    }

    let current = draft.customer.clone();
    let theme = ColorfulTheme::default();

    let kind_default = match current.as_ref().map(|c| c.kind) {
        Some(CustomerKind::Company) => 1,
        _ => 0,
    };
    let kind = match Select::with_theme(&theme)
        .with_prompt(Message::PromptCustomerKind.to_string())
        .items(&["Privat", "Firma"])
        .default(kind_default)
        .interact()?
    {
        1 => CustomerKind::Company,
        _ => CustomerKind::Private,
    };

    let company_name = match kind {
        CustomerKind::Company => {
            let name: String = Input::with_theme(&theme)
                .with_prompt(Message::PromptCompanyName.to_string())
                .default(current.as_ref().and_then(|c| c.company_name.clone()).unwrap_or_default())
                .interact_text()?;
            Some(name)
        }
        CustomerKind::Private => None,
    };

    let first_name: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptFirstName.to_string())
        .default(current.as_ref().map(|c| c.first_name.clone()).unwrap_or_default())
        .allow_empty(true)
        .interact_text()?;

    let last_name: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptLastName.to_string())
        .default(current.as_ref().map(|c| c.last_name.clone()).unwrap_or_default())
        .allow_empty(true)
        .interact_text()?;

    let phone: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptPhone.to_string())
        .default(current.as_ref().and_then(|c| c.phone.clone()).unwrap_or_default())
        .allow_empty(true)
        .interact_text()?;

    let postal_code: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptPostalCode.to_string())
        .default(current.as_ref().map(|c| c.postal_code.clone()).unwrap_or_default())
        .interact_text()?;

    let city: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptCity.to_string())
        .default(current.as_ref().map(|c| c.city.clone()).unwrap_or_default())
        .interact_text()?;

    let street: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptStreet.to_string())
        .default(current.as_ref().map(|c| c.street.clone()).unwrap_or_default())
        .interact_text()?;

    let house_number: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptHouseNumber.to_string())
        .default(current.as_ref().map(|c| c.house_number.clone()).unwrap_or_default())
        .interact_text()?;

    draft.customer = Some(Customer {
        kind,
        first_name,
        last_name,
        phone: match phone.trim() {
            "" => None,
            phone => Some(phone.to_string()),
        },
        postal_code,
        city,
        street,
        house_number,
        company_name,
    });

    draft.save()?;
    msg_success!(Message::CustomerSaved);
    Ok(())
}
