//! Central catalog of user-facing messages.
//!
//! Two registers coexist on purpose: prompts and report-facing strings
//! are German because the product is (the technician fills a German
//! form), while workflow and status messages keep the terse English
//! voice of the rest of the CLI. The exact German wording of the time
//! validation rules lives in
//! [`crate::libs::report::TimeValidationError`], not here.

#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigFileNotFound,
    PromptDefaultRate,
    PromptTaxRate,
    PromptRosterNames,

    // === DRAFT MESSAGES ===
    DraftSaved,
    DraftReset,
    DraftCorrupt(String),
    ConfirmReset,
    OperationCancelled,

    // === ORDER HEADER MESSAGES ===
    PromptArbeitsdatum,
    PromptAuftragsnummer,
    PromptStundensatz,
    PromptOrderDetails,
    InvalidDate(String),

    // === CUSTOMER MESSAGES ===
    CustomerSaved,
    CustomerCleared,
    CustomerNotSet,
    PromptCustomerKind,
    PromptFirstName,
    PromptLastName,
    PromptPhone,
    PromptPostalCode,
    PromptCity,
    PromptStreet,
    PromptHouseNumber,
    PromptCompanyName,

    // === EMPLOYEE MESSAGES ===
    EmployeeAdded(String),
    EmployeeAlreadySelected(String),
    EmployeeRemoved(String),
    EmployeeNotFound(i32),
    RosterEmpty,
    NoEmployeesSelected, // the gate message, German by contract
    PromptSelectEmployee,
    EmployeeNameEmpty,

    // === TIME MESSAGES ===
    PromptAnkunftVon,
    PromptAnkunftBis,
    PromptArbeitVon,
    PromptArbeitBis,
    PromptAbfahrtVon,
    PromptAbfahrtBis,
    PromptIncludeAbfahrt,
    InvalidTimeWindow(String),

    // === LINE ITEM MESSAGES ===
    LineItemAdded(String),
    LineItemRemoved(String),
    LineItemNotFound(i64),
    LineItemDiscarded,
    LineItemsCleared,
    NoLineItems,
    PromptItemTitle,
    PromptItemAmount,

    // === REPORT / EXPORT MESSAGES ===
    ReportHeader(String),       // Arbeitsdatum
    TimeValidation(String),     // rule message from the core, passed through
    ExportCompleted(String),    // output path
}
