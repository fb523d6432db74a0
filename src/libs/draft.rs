//! The single in-progress Servicebericht draft.
//!
//! The draft persists every *raw* input between invocations: order
//! header, customer, employee selection, the six time values with the
//! departure flag, and the line items. Derived values (the duration
//! report and the price breakdown) are never stored; they are
//! recomputed from the draft on every command that needs them.
//!
//! Storage is one pretty-printed JSON file (`draft.json`) next to the
//! configuration. A missing file loads as the default draft; an
//! unreadable one is reported and replaced by defaults so a damaged
//! file never locks the user out.

use crate::libs::config::Config;
use crate::libs::customer::Customer;
use crate::libs::data_storage::DataStorage;
use crate::libs::employee::EmployeeSelection;
use crate::libs::line_item::{cents_to_euros, sanitize, total_cents, LineItem};
use crate::libs::messages::Message;
use crate::libs::report::TimeInputs;
use crate::libs::time::TimeOfDay;
use crate::{msg_debug, msg_warning};
use anyhow::Result;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const DRAFT_FILE_NAME: &str = "draft.json";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Draft {
    // Order header
    pub date: String,
    pub auftragsnummer: String,
    pub price: String,
    pub order_details: String,

    // Arrival and work windows
    pub ankunft_von: TimeOfDay,
    pub ankunft_bis: TimeOfDay,
    pub arbeit_von: TimeOfDay,
    pub arbeit_bis: TimeOfDay,

    // Optional departure window
    pub include_abfahrt: bool,
    pub abfahrt_von: TimeOfDay,
    pub abfahrt_bis: TimeOfDay,

    // People
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,
    pub employees: EmployeeSelection,

    // Manual line items with their id counter
    pub line_items: Vec<LineItem>,
    next_item_id: i64,
}

impl Draft {
    /// A fresh draft: today's date, a date-derived order number, the
    /// configured default rate, work window from now to one hour later.
    pub fn new(config: &Config) -> Self {
        let today = Local::now().date_naive().to_string();
        let now = TimeOfDay::now();

        Self {
            date: today.clone(),
            auftragsnummer: format!("{}-001", today),
            price: config.default_rate.clone(),
            order_details: String::new(),
            ankunft_von: now,
            ankunft_bis: now,
            arbeit_von: now,
            arbeit_bis: now.plus_one_hour(),
            include_abfahrt: false,
            abfahrt_von: TimeOfDay::MIDNIGHT,
            abfahrt_bis: TimeOfDay::MIDNIGHT,
            customer: None,
            employees: EmployeeSelection::default(),
            line_items: Vec::new(),
            next_item_id: 1,
        }
    }

    /// Loads the stored draft, or the default draft when no file
    /// exists. A corrupt file is reported and replaced by defaults.
    ///
    /// Line items are re-sanitized on load; only entries with a title
    /// and a positive amount ever reach the price calculation, even
    /// when the file was edited by hand.
    pub fn load(config: &Config) -> Result<Self> {
        let path = DataStorage::new().get_path(DRAFT_FILE_NAME)?;

        if !path.exists() {
            return Ok(Self::new(config));
        }

        let raw = fs::read_to_string(&path)?;
        match serde_json::from_str::<Draft>(&raw) {
            Ok(mut draft) => {
                draft.line_items = sanitize(draft.line_items);
                Ok(draft)
            }
            Err(err) => {
                msg_warning!(Message::DraftCorrupt(err.to_string()));
                Ok(Self::new(config))
            }
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = DataStorage::new().get_path(DRAFT_FILE_NAME)?;
        let file = File::create(&path)?;
        serde_json::to_writer_pretty(&file, &self)?;
        msg_debug!(format!("Draft written to {}", path.display()));
        Ok(())
    }

    /// Removes the draft file. Returns false when none existed.
    pub fn delete() -> Result<bool> {
        let path = DataStorage::new().get_path(DRAFT_FILE_NAME)?;

        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(path)?;
        Ok(true)
    }

    /// The raw time values in the shape the validator consumes.
    pub fn time_inputs(&self) -> TimeInputs {
        TimeInputs {
            ankunft_von: self.ankunft_von,
            ankunft_bis: self.ankunft_bis,
            arbeit_von: self.arbeit_von,
            arbeit_bis: self.arbeit_bis,
            abfahrt_von: self.abfahrt_von,
            abfahrt_bis: self.abfahrt_bis,
            include_abfahrt: self.include_abfahrt,
        }
    }

    /// Appends a line item under the next id and returns that id.
    pub fn add_line_item(&mut self, title: &str, amount_cents: i64) -> i64 {
        let id = self.next_item_id;
        self.next_item_id += 1;
        self.line_items.push(LineItem {
            id,
            title: title.trim().to_string(),
            amount_cents,
        });
        id
    }

    /// Removes a line item by id.
    pub fn remove_line_item(&mut self, id: i64) -> Option<LineItem> {
        let pos = self.line_items.iter().position(|item| item.id == id)?;
        Some(self.line_items.remove(pos))
    }

    /// Gross sum of the line items in Euros, as fed to the price
    /// calculation.
    pub fn extra_brutto(&self) -> f64 {
        cents_to_euros(total_cents(&self.line_items))
    }
}
