//! Servicebericht export to CSV, JSON and Excel.
//!
//! Export is the hand-off to whatever consumes the finished report —
//! spreadsheets, archiving, invoicing. The [`Servicebericht`] value
//! object carries every field pre-formatted (durations, time ranges,
//! Euro amounts with comma decimals), so all three writers emit
//! identical strings and no consumer needs to know the rounding rules.
//!
//! Callers only assemble a `Servicebericht` from a *valid* duration
//! report; the export command refuses to run while time validation
//! fails or no employee is selected.

use crate::libs::customer::Customer;
use crate::libs::draft::Draft;
use crate::libs::formatter::{format_cents, format_duration, format_euro, format_range};
use crate::libs::line_item::LineItem;
use crate::libs::price::PriceBreakdown;
use crate::libs::report::Report;
use anyhow::Result;
use rust_xlsxwriter::{Format, Workbook};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Supported export output formats.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values, two columns (Feld, Wert).
    Csv,
    /// Pretty-printed JSON preserving the report structure.
    Json,
    /// Excel workbook with a formatted sheet.
    Excel,
}

impl ExportFormat {
    fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xlsx",
        }
    }
}

/// Customer block of the exported report.
#[derive(Debug, Serialize, Deserialize)]
pub struct BerichtKunde {
    pub name: String,
    pub adresse: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telefon: Option<String>,
}

/// One exported line item, amount pre-formatted.
#[derive(Debug, Serialize, Deserialize)]
pub struct BerichtPosition {
    pub titel: String,
    pub betrag: String,
}

/// The complete report as handed to renderers and export writers.
///
/// Every amount and duration is already a display string; structured
/// consumers that need raw values recompute them from the draft.
#[derive(Debug, Serialize, Deserialize)]
pub struct Servicebericht {
    pub arbeitsdatum: String,
    pub auftragsnummer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beschreibung: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kunde: Option<BerichtKunde>,
    pub mitarbeiter: Vec<String>,
    pub mitarbeiter_anzahl: usize,
    pub ankunft_range: String,
    pub ankunftzeit: String,
    pub arbeitszeit_range: String,
    pub arbeitszeit: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abfahrt_range: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abfahrt: Option<String>,
    pub gesamtzeit: String,
    pub stundensatz: String,
    pub netto: String,
    pub mwst: String,
    pub zusatzpositionen: Vec<BerichtPosition>,
    pub gesamtbetrag: String,
}

impl Servicebericht {
    /// Assembles the export object from the draft and its derived
    /// report and price breakdown.
    pub fn assemble(draft: &Draft, report: &Report, price: &PriceBreakdown) -> Self {
        let beschreibung = match draft.order_details.trim() {
            "" => None,
            details => Some(details.to_string()),
        };

        Self {
            arbeitsdatum: draft.date.clone(),
            auftragsnummer: draft.auftragsnummer.clone(),
            beschreibung,
            kunde: draft.customer.as_ref().map(Self::kunde),
            mitarbeiter: draft.employees.selected.iter().map(|e| e.name.clone()).collect(),
            mitarbeiter_anzahl: draft.employees.count(),
            ankunft_range: format_range(&draft.ankunft_von, &draft.ankunft_bis),
            ankunftzeit: format_duration(report.ankunftzeit),
            arbeitszeit_range: format_range(&draft.arbeit_von, &draft.arbeit_bis),
            arbeitszeit: format_duration(report.arbeitszeit),
            abfahrt_range: draft
                .include_abfahrt
                .then(|| format_range(&draft.abfahrt_von, &draft.abfahrt_bis)),
            abfahrt: draft.include_abfahrt.then(|| format_duration(report.abfahrt)),
            gesamtzeit: format_duration(report.gesamtzeit),
            stundensatz: price.stundensatz_text.clone(),
            netto: format_euro(price.netto),
            mwst: format_euro(price.mwst),
            zusatzpositionen: draft.line_items.iter().map(Self::position).collect(),
            gesamtbetrag: format_euro(price.brutto),
        }
    }

    fn kunde(customer: &Customer) -> BerichtKunde {
        BerichtKunde {
            name: customer.display_name(),
            adresse: customer.address_line(),
            telefon: customer.phone.clone(),
        }
    }

    fn position(item: &LineItem) -> BerichtPosition {
        BerichtPosition {
            titel: item.title.clone(),
            betrag: format_cents(item.amount_cents),
        }
    }
}

/// Writes a [`Servicebericht`] to disk in the chosen format.
pub struct Exporter {
    format: ExportFormat,
    output: Option<PathBuf>,
}

impl Exporter {
    pub fn new(format: ExportFormat, output: Option<PathBuf>) -> Self {
        Self { format, output }
    }

    /// Exports the report and returns the written path.
    pub fn export(&self, bericht: &Servicebericht) -> Result<PathBuf> {
        let path = match &self.output {
            Some(path) => path.clone(),
            None => PathBuf::from(self.default_file_name(bericht)),
        };

        match self.format {
            ExportFormat::Csv => self.export_csv(&path, bericht)?,
            ExportFormat::Json => self.export_json(&path, bericht)?,
            ExportFormat::Excel => self.export_excel(&path, bericht)?,
        }

        Ok(path)
    }

    /// Default name derived from the Auftragsnummer, anything outside
    /// [A-Za-z0-9-] mapped to '_'.
    fn default_file_name(&self, bericht: &Servicebericht) -> String {
        let slug: String = bericht
            .auftragsnummer
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
            .collect();
        format!("servicebericht_{}.{}", slug, self.format.extension())
    }

    /// Rows shared by the CSV and Excel writers.
    fn field_rows(bericht: &Servicebericht) -> Vec<(String, String)> {
        let mut rows = vec![
            ("Arbeitsdatum".to_string(), bericht.arbeitsdatum.clone()),
            ("Auftragsnummer".to_string(), bericht.auftragsnummer.clone()),
        ];

        if let Some(beschreibung) = &bericht.beschreibung {
            rows.push(("Beschreibung".to_string(), beschreibung.clone()));
        }
        if let Some(kunde) = &bericht.kunde {
            rows.push(("Kunde".to_string(), kunde.name.clone()));
            rows.push(("Adresse".to_string(), kunde.adresse.clone()));
            if let Some(telefon) = &kunde.telefon {
                rows.push(("Telefon".to_string(), telefon.clone()));
            }
        }

        rows.push(("Mitarbeiter".to_string(), bericht.mitarbeiter.join(", ")));
        rows.push(("Mitarbeiteranzahl".to_string(), bericht.mitarbeiter_anzahl.to_string()));

        rows.push(("Ankunft".to_string(), bericht.ankunft_range.clone()));
        rows.push(("Ankunftszeit".to_string(), bericht.ankunftzeit.clone()));
        rows.push(("Arbeitszeit (Von/Bis)".to_string(), bericht.arbeitszeit_range.clone()));
        rows.push(("Arbeitszeit".to_string(), bericht.arbeitszeit.clone()));
        if let (Some(range), Some(dauer)) = (&bericht.abfahrt_range, &bericht.abfahrt) {
            rows.push(("Abfahrt (Von/Bis)".to_string(), range.clone()));
            rows.push(("Abfahrt".to_string(), dauer.clone()));
        }
        rows.push(("Gesamtzeit".to_string(), bericht.gesamtzeit.clone()));

        rows.push(("Stundensatz".to_string(), bericht.stundensatz.clone()));
        rows.push(("Netto".to_string(), bericht.netto.clone()));
        rows.push(("MwSt".to_string(), bericht.mwst.clone()));
        for position in &bericht.zusatzpositionen {
            rows.push((format!("Zusatzposition: {}", position.titel), position.betrag.clone()));
        }
        rows.push(("Gesamtbetrag".to_string(), bericht.gesamtbetrag.clone()));

        rows
    }

    fn export_csv(&self, path: &PathBuf, bericht: &Servicebericht) -> Result<()> {
        let mut writer = csv::Writer::from_path(path)?;

        writer.write_record(["Feld", "Wert"])?;
        for (field, value) in Self::field_rows(bericht) {
            writer.write_record([field, value])?;
        }
        writer.flush()?;

        Ok(())
    }

    fn export_json(&self, path: &PathBuf, bericht: &Servicebericht) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(&file, bericht)?;
        Ok(())
    }

    fn export_excel(&self, path: &PathBuf, bericht: &Servicebericht) -> Result<()> {
        let mut workbook = Workbook::new();
        let bold = Format::new().set_bold();

        let worksheet = workbook.add_worksheet();
        worksheet.set_name("Servicebericht")?;
        worksheet.set_column_width(0, 28)?;
        worksheet.set_column_width(1, 36)?;

        worksheet.write_with_format(0, 0, "Feld", &bold)?;
        worksheet.write_with_format(0, 1, "Wert", &bold)?;

        for (index, (field, value)) in Self::field_rows(bericht).iter().enumerate() {
            let row = index as u32 + 1;
            worksheet.write(row, 0, field)?;
            worksheet.write(row, 1, value)?;
        }

        workbook.save(path)?;
        Ok(())
    }
}
