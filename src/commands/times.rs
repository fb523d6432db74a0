//! Time window command.
//!
//! Sets the arrival, work and optional departure windows, either from
//! `HH:MM-HH:MM` flags or interactively. After saving, the draft is
//! validated immediately and the result is shown — either the total
//! duration or the first violated ordering rule, exactly as the report
//! preview would show it.

use crate::{
    libs::{
        config::Config,
        draft::Draft,
        messages::Message,
        price, report,
        time::TimeOfDay,
        view::View,
    },
    msg_error, msg_error_anyhow, msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};

#[derive(Debug, Args)]
pub struct TimesArgs {
    /// Arrival window as HH:MM-HH:MM
    #[arg(long, value_name = "VON-BIS")]
    ankunft: Option<String>,

    /// Work window as HH:MM-HH:MM
    #[arg(long, value_name = "VON-BIS")]
    arbeit: Option<String>,

    /// Departure window as HH:MM-HH:MM; enables departure tracking
    #[arg(long, value_name = "VON-BIS", conflicts_with = "no_abfahrt")]
    abfahrt: Option<String>,

    /// Disable departure tracking
    #[arg(long)]
    no_abfahrt: bool,
}

/// Parses "HH:MM-HH:MM" into a (Von, Bis) pair.
fn parse_window(input: &str) -> Result<(TimeOfDay, TimeOfDay)> {
    let invalid = || msg_error_anyhow!(Message::InvalidTimeWindow(input.to_string()));

    let (von, bis) = input.split_once('-').ok_or_else(invalid)?;
    let von: TimeOfDay = von.parse().map_err(|_| invalid())?;
    let bis: TimeOfDay = bis.parse().map_err(|_| invalid())?;
    Ok((von, bis))
}

fn prompt_time(prompt: Message, default: TimeOfDay) -> Result<TimeOfDay> {
    let input: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .default(default.to_string())
        .validate_with(|input: &String| -> Result<(), String> {
            input.parse::<TimeOfDay>().map(|_| ()).map_err(|e| e.to_string())
        })
        .interact_text()?;
    // The validator above already accepted the text.
    Ok(input.parse().unwrap_or(default))
}

pub fn cmd(args: TimesArgs) -> Result<()> {
    let config = Config::read()?;
    let mut draft = Draft::load(&config)?;

    let interactive = args.ankunft.is_none() && args.arbeit.is_none() && args.abfahrt.is_none() && !args.no_abfahrt;

    if interactive {
        draft.ankunft_von = prompt_time(Message::PromptAnkunftVon, draft.ankunft_von)?;
        draft.ankunft_bis = prompt_time(Message::PromptAnkunftBis, draft.ankunft_bis)?;
        draft.arbeit_von = prompt_time(Message::PromptArbeitVon, draft.arbeit_von)?;
        draft.arbeit_bis = prompt_time(Message::PromptArbeitBis, draft.arbeit_bis)?;

        draft.include_abfahrt = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptIncludeAbfahrt.to_string())
            .default(draft.include_abfahrt)
            .interact()?;

        if draft.include_abfahrt {
            draft.abfahrt_von = prompt_time(Message::PromptAbfahrtVon, draft.abfahrt_von)?;
            draft.abfahrt_bis = prompt_time(Message::PromptAbfahrtBis, draft.abfahrt_bis)?;
        }
    } else {
        if let Some(window) = args.ankunft.as_deref() {
            (draft.ankunft_von, draft.ankunft_bis) = parse_window(window)?;
        }
        if let Some(window) = args.arbeit.as_deref() {
            (draft.arbeit_von, draft.arbeit_bis) = parse_window(window)?;
        }
        if let Some(window) = args.abfahrt.as_deref() {
            (draft.abfahrt_von, draft.abfahrt_bis) = parse_window(window)?;
            draft.include_abfahrt = true;
        }
        if args.no_abfahrt {
            draft.include_abfahrt = false;
        }
    }

    draft.save()?;
    msg_success!(Message::DraftSaved);

    // Immediate feedback, same as the report preview would give.
    match report::calculate(&draft.time_inputs()) {
        Ok(report) => {
            let breakdown = price::calculate(Some(&report), &draft.price, draft.employees.count(), config.tax_rate, draft.extra_brutto());
            View::summary(&draft, &report, &breakdown)?;
            if !draft.employees.has_employees() {
                msg_info!(Message::NoEmployeesSelected);
            }
        }
        Err(rule) => msg_error!(Message::TimeValidation(rule.to_string())),
    }

    Ok(())
}
