//! Line item (Zusatzpositionen) command.
//!
//! Without flags the current items are listed with their sum. `--add`
//! prompts for title and Euro amount; entries that do not survive the
//! sanitize rules (empty title, amount of zero) are discarded with a
//! warning instead of being stored.

use crate::{
    libs::{
        config::Config,
        draft::Draft,
        line_item,
        messages::Message,
        view::View,
    },
    msg_error, msg_info, msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct ItemsArgs {
    /// Add a line item interactively
    #[arg(long, short)]
    add: bool,

    /// Remove a line item by id
    #[arg(long, short, value_name = "ID")]
    remove: Option<i64>,

    /// Remove all line items
    #[arg(long)]
    clear: bool,
}

pub fn cmd(args: ItemsArgs) -> Result<()> {
    let config = Config::read()?;
    let mut draft = Draft::load(&config)?;

    if args.add {
        let theme = ColorfulTheme::default();

        let title: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptItemTitle.to_string())
            .allow_empty(true)
            .interact_text()?;

        let amount: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptItemAmount.to_string())
            .allow_empty(true)
            .interact_text()?;

        let title = title.trim().to_string();
        let amount_cents = line_item::parse_euro_to_cents(&amount);

        if title.is_empty() || amount_cents <= 0 {
            msg_warning!(Message::LineItemDiscarded);
            return Ok(());
        }

        draft.add_line_item(&title, amount_cents);
        draft.save()?;
        msg_success!(Message::LineItemAdded(title));
        return Ok(());
    }

    if let Some(id) = args.remove {
        match draft.remove_line_item(id) {
            Some(item) => {
                draft.save()?;
                msg_success!(Message::LineItemRemoved(item.title));
            }
            None => msg_error!(Message::LineItemNotFound(id)),
        }
        return Ok(());
    }

    if args.clear {
        if draft.line_items.is_empty() {
            msg_info!(Message::NoLineItems);
        } else {
            draft.line_items.clear();
            draft.save()?;
            msg_success!(Message::LineItemsCleared);
        }
        return Ok(());
    }

    if draft.line_items.is_empty() {
        msg_info!(Message::NoLineItems);
    } else {
        View::line_items(&draft.line_items)?;
    }
    Ok(())
}
