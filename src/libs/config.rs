//! Application configuration: pricing defaults and the employee roster.
//!
//! Configuration is a small JSON file (`config.json`) in the platform
//! application-data directory, created either by hand or through the
//! interactive wizard behind `bericht init`. Reading a missing file
//! yields the defaults, so the tool works without any setup: the rate
//! falls back to 95 €/h and the roster starts empty.
//!
//! The roster provides the employees offered for selection with stable
//! positive ids; ad-hoc employees typed during report assembly are not
//! part of the configuration.

use crate::libs::data_storage::DataStorage;
use crate::libs::employee::Employee;
use crate::libs::messages::Message;
use crate::libs::price::DEFAULT_TAX_RATE;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Default hourly rate, matching the pre-filled form value.
pub const DEFAULT_RATE: &str = "95";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    /// Default Stundensatz as free text; new drafts start with it.
    pub default_rate: String,
    /// Tax rate applied to the time-based service charge.
    pub tax_rate: f64,
    /// Employees offered for selection, ids ascending from 1.
    #[serde(default)]
    pub roster: Vec<Employee>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_rate: DEFAULT_RATE.to_string(),
            tax_rate: DEFAULT_TAX_RATE,
            roster: Vec::new(),
        }
    }
}

impl Config {
    /// Reads the configuration, falling back to defaults when the file
    /// does not exist.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file. Returns false when none existed.
    pub fn delete() -> Result<bool> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(false);
        }
        fs::remove_file(config_file_path)?;
        Ok(true)
    }

    /// Interactive setup wizard.
    ///
    /// Existing values are pre-filled as defaults so re-running the
    /// wizard only changes what the user edits. Roster names are
    /// entered comma separated and receive ids ascending from 1.
    pub fn init() -> Result<Self> {
        let current = Self::read().unwrap_or_default();

        let default_rate: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDefaultRate.to_string())
            .default(current.default_rate.clone())
            .validate_with(|input: &String| -> Result<(), &str> {
                if crate::libs::price::parse_rate(input) > 0.0 {
                    Ok(())
                } else {
                    Err("Rate must be a number above zero")
                }
            })
            .interact_text()?;

        let tax_rate: f64 = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaxRate.to_string())
            .default(current.tax_rate)
            .validate_with(|input: &f64| -> Result<(), &str> {
                if (0.0..1.0).contains(input) {
                    Ok(())
                } else {
                    Err("Tax rate must be within 0.0 and 1.0")
                }
            })
            .interact_text()?;

        let roster_default = current.roster.iter().map(|e| e.name.clone()).collect::<Vec<_>>().join(", ");
        let roster_input: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptRosterNames.to_string())
            .default(roster_default)
            .allow_empty(true)
            .interact_text()?;

        let roster = roster_input
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .enumerate()
            .map(|(index, name)| Employee {
                id: index as i32 + 1,
                name: name.to_string(),
            })
            .collect();

        Ok(Config {
            default_rate,
            tax_rate,
            roster,
        })
    }
}
