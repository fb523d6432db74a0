#[cfg(test)]
mod tests {
    use bericht::libs::config::Config;
    use bericht::libs::customer::{Customer, CustomerKind};
    use bericht::libs::draft::Draft;
    use bericht::libs::employee::Employee;
    use bericht::libs::export::{Exporter, ExportFormat, Servicebericht};
    use bericht::libs::price;
    use bericht::libs::report;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ExportTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for ExportTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ExportTestContext { temp_dir }
        }
    }

    /// A complete draft: arrival 07:30-08:00, work 08:00-12:30,
    /// departure 12:30-13:00, two employees, one line item.
    fn complete_draft() -> Draft {
        let config = Config::default();
        let mut draft = Draft::new(&config);

        draft.date = "2026-08-06".to_string();
        draft.auftragsnummer = "2026-08-06-001".to_string();
        draft.price = "90".to_string();
        draft.ankunft_von = "07:30".parse().unwrap();
        draft.ankunft_bis = "08:00".parse().unwrap();
        draft.arbeit_von = "08:00".parse().unwrap();
        draft.arbeit_bis = "12:30".parse().unwrap();
        draft.include_abfahrt = true;
        draft.abfahrt_von = "12:30".parse().unwrap();
        draft.abfahrt_bis = "13:00".parse().unwrap();
        draft.employees.add_from_roster(Employee {
            id: 1,
            name: "Anna Schmidt".to_string(),
        });
        draft.employees.add_custom("Max").unwrap();
        draft.add_line_item("Norton Antivirus", 4000);
        draft.customer = Some(Customer {
            kind: CustomerKind::Private,
            first_name: "Erika".to_string(),
            last_name: "Mustermann".to_string(),
            phone: Some("0151 1234567".to_string()),
            postal_code: "10115".to_string(),
            city: "Berlin".to_string(),
            street: "Invalidenstraße".to_string(),
            house_number: "44".to_string(),
            company_name: None,
        });
        draft
    }

    fn assemble(draft: &Draft) -> Servicebericht {
        let config = Config::default();
        let report = report::calculate(&draft.time_inputs()).unwrap();
        let breakdown = price::calculate(Some(&report), &draft.price, draft.employees.count(), config.tax_rate, draft.extra_brutto());
        Servicebericht::assemble(draft, &report, &breakdown)
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_assemble_formats_all_fields(_ctx: &mut ExportTestContext) {
        let bericht = assemble(&complete_draft());

        assert_eq!(bericht.arbeitsdatum, "2026-08-06");
        assert_eq!(bericht.ankunft_range, "07:30 bis 08:00");
        assert_eq!(bericht.ankunftzeit, "0 Stunden 30 Minuten");
        assert_eq!(bericht.arbeitszeit_range, "08:00 bis 12:30");
        assert_eq!(bericht.arbeitszeit, "4 Stunden 30 Minuten");
        assert_eq!(bericht.abfahrt.as_deref(), Some("0 Stunden 30 Minuten"));
        assert_eq!(bericht.gesamtzeit, "5 Stunden 30 Minuten");
        assert_eq!(bericht.mitarbeiter_anzahl, 2);
        assert_eq!(bericht.stundensatz, "90,00 €");

        // 330 min * 1.5 €/min * 2 employees = 990 gross, plus 40 € item.
        assert_eq!(bericht.gesamtbetrag, "1030,00 €");
        assert_eq!(bericht.netto, "831,93 €");
        assert_eq!(bericht.mwst, "158,07 €");

        let kunde = bericht.kunde.unwrap();
        assert_eq!(kunde.name, "Erika Mustermann");
        assert_eq!(kunde.adresse, "Invalidenstraße 44, 10115 Berlin");

        assert_eq!(bericht.zusatzpositionen.len(), 1);
        assert_eq!(bericht.zusatzpositionen[0].betrag, "40,00 €");
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_assemble_without_departure(_ctx: &mut ExportTestContext) {
        let mut draft = complete_draft();
        draft.include_abfahrt = false;

        let bericht = assemble(&draft);
        assert!(bericht.abfahrt.is_none());
        assert!(bericht.abfahrt_range.is_none());
        assert_eq!(bericht.gesamtzeit, "5 Stunden 0 Minuten");
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_json(ctx: &mut ExportTestContext) {
        let bericht = assemble(&complete_draft());

        let output_path = ctx.temp_dir.path().join("bericht.json");
        let path = Exporter::new(ExportFormat::Json, Some(output_path.clone())).export(&bericht).unwrap();
        assert_eq!(path, output_path);

        let content = std::fs::read_to_string(&output_path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed["auftragsnummer"], "2026-08-06-001");
        assert_eq!(parsed["gesamtbetrag"], "1030,00 €");
        assert_eq!(parsed["mitarbeiter"][1], "Max");
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_csv(ctx: &mut ExportTestContext) {
        let bericht = assemble(&complete_draft());

        let output_path = ctx.temp_dir.path().join("bericht.csv");
        Exporter::new(ExportFormat::Csv, Some(output_path.clone())).export(&bericht).unwrap();

        let content = std::fs::read_to_string(&output_path).unwrap();
        assert!(content.starts_with("Feld,Wert"));
        assert!(content.contains("Gesamtzeit,5 Stunden 30 Minuten"));
        // Values containing a comma are quoted by the writer.
        assert!(content.contains("Zusatzposition: Norton Antivirus"));
        assert!(content.contains("\"40,00 €\""));
        assert!(content.contains("Erika Mustermann"));
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_excel_writes_file(ctx: &mut ExportTestContext) {
        let bericht = assemble(&complete_draft());

        let output_path = ctx.temp_dir.path().join("bericht.xlsx");
        Exporter::new(ExportFormat::Excel, Some(output_path.clone())).export(&bericht).unwrap();

        let metadata = std::fs::metadata(&output_path).unwrap();
        assert!(metadata.len() > 0);
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_default_file_name_slug(ctx: &mut ExportTestContext) {
        let mut draft = complete_draft();
        draft.auftragsnummer = "2026/08 #7".to_string();
        let bericht = assemble(&draft);

        // Run in the temp dir so the default-named file lands there.
        std::env::set_current_dir(ctx.temp_dir.path()).unwrap();
        let path = Exporter::new(ExportFormat::Csv, None).export(&bericht).unwrap();

        assert_eq!(path.to_string_lossy(), "servicebericht_2026_08__7.csv");
        assert!(ctx.temp_dir.path().join("servicebericht_2026_08__7.csv").exists());
    }
}
