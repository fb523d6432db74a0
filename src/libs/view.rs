use crate::libs::draft::Draft;
use crate::libs::employee::Employee;
use crate::libs::formatter::{format_cents, format_duration, format_euro, format_range};
use crate::libs::line_item::{total_cents, LineItem};
use crate::libs::price::PriceBreakdown;
use crate::libs::report::Report;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// The compact summary block shown after setting times.
    pub fn summary(draft: &Draft, report: &Report, price: &PriceBreakdown) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["Ankunftszeit", format_duration(report.ankunftzeit)]);
        table.add_row(row!["Arbeitszeit", format_duration(report.arbeitszeit)]);
        if draft.include_abfahrt {
            table.add_row(row!["Abfahrt", format_duration(report.abfahrt)]);
        }
        table.add_row(row!["Gesamtzeit", format_duration(report.gesamtzeit)]);
        table.add_row(row!["Mitarbeiteranzahl", draft.employees.count()]);
        table.add_row(row!["Gesamtbetrag", format_euro(price.brutto)]);
        table.printstd();

        Ok(())
    }

    /// The full Servicebericht preview.
    pub fn bericht(draft: &Draft, report: &Report, price: &PriceBreakdown) -> Result<()> {
        let mut header = Table::new();
        header.add_row(row!["Arbeitsdatum", draft.date]);
        header.add_row(row!["Auftragsnummer", draft.auftragsnummer]);
        header.add_row(row!["Stundensatz", price.stundensatz_text]);
        if !draft.order_details.trim().is_empty() {
            header.add_row(row!["Beschreibung", draft.order_details]);
        }
        if let Some(customer) = &draft.customer {
            header.add_row(row!["Kunde", customer.display_name()]);
            header.add_row(row!["Adresse", customer.address_line()]);
            if let Some(phone) = &customer.phone {
                header.add_row(row!["Telefon", phone]);
            }
        }
        header.printstd();

        println!("\nZeiten:");
        let mut times = Table::new();
        times.add_row(row![
            "Ankunft",
            format_range(&draft.ankunft_von, &draft.ankunft_bis),
            format_duration(report.ankunftzeit)
        ]);
        times.add_row(row![
            "Arbeitszeit",
            format_range(&draft.arbeit_von, &draft.arbeit_bis),
            format_duration(report.arbeitszeit)
        ]);
        if draft.include_abfahrt {
            times.add_row(row![
                "Abfahrt",
                format_range(&draft.abfahrt_von, &draft.abfahrt_bis),
                format_duration(report.abfahrt)
            ]);
        }
        times.add_row(row!["Gesamtzeit", "", format_duration(report.gesamtzeit)]);
        times.printstd();

        if draft.employees.has_employees() {
            println!("\nMitarbeiter:");
            Self::employees(&draft.employees.selected)?;
        }

        if !draft.line_items.is_empty() {
            println!("\nZusatzpositionen:");
            Self::line_items(&draft.line_items)?;
        }

        println!("\nPreis:");
        let mut prices = Table::new();
        prices.add_row(row!["Netto", format_euro(price.netto)]);
        prices.add_row(row!["MwSt", format_euro(price.mwst)]);
        if !draft.line_items.is_empty() {
            prices.add_row(row!["Zusatzpositionen", format_euro(price.extra_brutto)]);
        }
        prices.add_row(row!["Gesamtbetrag", format_euro(price.brutto)]);
        prices.printstd();

        Ok(())
    }

    pub fn employees(employees: &[Employee]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME"]);
        for employee in employees {
            table.add_row(row![employee.id, employee.name]);
        }
        table.printstd();

        Ok(())
    }

    pub fn line_items(items: &[LineItem]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITEL", "BETRAG"]);
        for item in items {
            table.add_row(row![item.id, item.title, format_cents(item.amount_cents)]);
        }
        table.add_row(row!["", "Summe", format_cents(total_cents(items))]);
        table.printstd();

        Ok(())
    }
}
