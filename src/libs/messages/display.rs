//! Display implementation turning [`Message`] variants into terminal text.
//!
//! All user-visible wording is defined here in one place. German lines
//! are the product strings shown on the form and the report; everything
//! else is CLI plumbing.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigFileNotFound => "No configuration file found".to_string(),
            Message::PromptDefaultRate => "Default hourly rate (€/h)".to_string(),
            Message::PromptTaxRate => "Tax rate (e.g. 0.19)".to_string(),
            Message::PromptRosterNames => "Employee roster, comma separated (leave empty for none)".to_string(),

            // === DRAFT MESSAGES ===
            Message::DraftSaved => "Draft saved".to_string(),
            Message::DraftReset => "Draft reset, all inputs back to defaults".to_string(),
            Message::DraftCorrupt(err) => format!("Draft file could not be read ({}), starting with a fresh draft", err),
            Message::ConfirmReset => "Discard the current draft?".to_string(),
            Message::OperationCancelled => "Operation cancelled".to_string(),

            // === ORDER HEADER MESSAGES ===
            Message::PromptArbeitsdatum => "Arbeitsdatum (JJJJ-MM-TT)".to_string(),
            Message::PromptAuftragsnummer => "Auftragsnummer".to_string(),
            Message::PromptStundensatz => "Stundensatz (€/Stunde)".to_string(),
            Message::PromptOrderDetails => "Auftragsbeschreibung (optional)".to_string(),
            Message::InvalidDate(input) => format!("Invalid date '{}', expected YYYY-MM-DD", input),

            // === CUSTOMER MESSAGES ===
            Message::CustomerSaved => "Customer data saved".to_string(),
            Message::CustomerCleared => "Customer data removed".to_string(),
            Message::CustomerNotSet => "No customer data on the draft".to_string(),
            Message::PromptCustomerKind => "Kundentyp".to_string(),
            Message::PromptFirstName => "Vorname".to_string(),
            Message::PromptLastName => "Nachname".to_string(),
            Message::PromptPhone => "Telefon (optional)".to_string(),
            Message::PromptPostalCode => "PLZ".to_string(),
            Message::PromptCity => "Ort".to_string(),
            Message::PromptStreet => "Straße".to_string(),
            Message::PromptHouseNumber => "Hausnummer".to_string(),
            Message::PromptCompanyName => "Firmenname".to_string(),

            // === EMPLOYEE MESSAGES ===
            Message::EmployeeAdded(name) => format!("Employee '{}' added", name),
            Message::EmployeeAlreadySelected(name) => format!("Employee '{}' is already selected", name),
            Message::EmployeeRemoved(name) => format!("Employee '{}' removed", name),
            Message::EmployeeNotFound(id) => format!("No selected employee with id {}", id),
            Message::RosterEmpty => "The roster is empty, configure employees with 'bericht init' or add a custom name".to_string(),
            Message::NoEmployeesSelected => "Bitte wählen Sie mindestens einen Mitarbeiter aus.".to_string(),
            Message::PromptSelectEmployee => "Mitarbeiter auswählen".to_string(),
            Message::EmployeeNameEmpty => "Employee name must not be empty".to_string(),

            // === TIME MESSAGES ===
            Message::PromptAnkunftVon => "Ankunft Von (HH:MM)".to_string(),
            Message::PromptAnkunftBis => "Ankunft Bis (HH:MM)".to_string(),
            Message::PromptArbeitVon => "Arbeitszeit Von (HH:MM)".to_string(),
            Message::PromptArbeitBis => "Arbeitszeit Bis (HH:MM)".to_string(),
            Message::PromptAbfahrtVon => "Abfahrt Von (HH:MM)".to_string(),
            Message::PromptAbfahrtBis => "Abfahrt Bis (HH:MM)".to_string(),
            Message::PromptIncludeAbfahrt => "Abfahrt erfassen?".to_string(),
            Message::InvalidTimeWindow(input) => format!("Invalid time window '{}', expected HH:MM-HH:MM", input),

            // === LINE ITEM MESSAGES ===
            Message::LineItemAdded(title) => format!("Position '{}' added", title),
            Message::LineItemRemoved(title) => format!("Position '{}' removed", title),
            Message::LineItemNotFound(id) => format!("No line item with id {}", id),
            Message::LineItemDiscarded => "Entry discarded: a position needs a title and an amount above zero".to_string(),
            Message::LineItemsCleared => "All line items removed".to_string(),
            Message::NoLineItems => "No line items on the draft".to_string(),
            Message::PromptItemTitle => "Titel (z.B. Norton Antivirus)".to_string(),
            Message::PromptItemAmount => "Preis € (z.B. 40,00)".to_string(),

            // === REPORT / EXPORT MESSAGES ===
            Message::ReportHeader(date) => format!("Servicebericht für {}", date),
            Message::TimeValidation(rule) => rule.clone(),
            Message::ExportCompleted(path) => format!("Export completed: {}", path),
        };

        write!(f, "{}", text)
    }
}
