#[cfg(test)]
mod tests {
    use bericht::libs::price::{calculate, parse_rate, DEFAULT_TAX_RATE};
    use bericht::libs::report::Report;

    const EPS: f64 = 1e-9;

    fn two_hours() -> Report {
        Report {
            ankunftzeit: 0,
            arbeitszeit: 120,
            abfahrt: 0,
            gesamtzeit: 120,
        }
    }

    #[test]
    fn test_parse_rate_accepts_comma_and_period() {
        assert_eq!(parse_rate("95"), 95.0);
        assert_eq!(parse_rate("90.50"), 90.5);
        assert_eq!(parse_rate("90,50"), 90.5);
        assert_eq!(parse_rate("  85 "), 85.0);
    }

    #[test]
    fn test_parse_rate_coerces_junk_to_zero() {
        assert_eq!(parse_rate(""), 0.0);
        assert_eq!(parse_rate("abc"), 0.0);
        assert_eq!(parse_rate("9O"), 0.0);
    }

    #[test]
    fn test_normal_case() {
        // 120 minutes, 90 €/h, 2 employees: 120 * 1.5 * 2 = 360 gross.
        let report = two_hours();
        let price = calculate(Some(&report), "90", 2, DEFAULT_TAX_RATE, 0.0);

        assert!((price.service_brutto - 360.0).abs() < EPS);
        assert!((price.netto - 360.0 / 1.19).abs() < EPS);
        assert!((price.mwst - (360.0 - 360.0 / 1.19)).abs() < EPS);
        assert!((price.brutto - 360.0).abs() < EPS);
        assert_eq!(price.price_per_hour, 90.0);
    }

    #[test]
    fn test_net_plus_tax_equals_gross() {
        let report = two_hours();
        let price = calculate(Some(&report), "95,50", 3, DEFAULT_TAX_RATE, 0.0);

        assert!((price.netto * (1.0 + DEFAULT_TAX_RATE) - price.service_brutto).abs() < 1e-6);
        assert!((price.netto + price.mwst - price.service_brutto).abs() < 1e-6);
    }

    #[test]
    fn test_extra_items_added_untaxed() {
        let report = two_hours();
        let without = calculate(Some(&report), "90", 2, DEFAULT_TAX_RATE, 0.0);
        let with = calculate(Some(&report), "90", 2, DEFAULT_TAX_RATE, 50.0);

        assert!((with.brutto - 410.0).abs() < EPS);
        assert!((with.extra_brutto - 50.0).abs() < EPS);
        // Tax-relevant amounts must not move.
        assert!((with.netto - without.netto).abs() < EPS);
        assert!((with.mwst - without.mwst).abs() < EPS);
    }

    #[test]
    fn test_degenerate_without_report() {
        let price = calculate(None, "90", 2, DEFAULT_TAX_RATE, 50.0);

        assert_eq!(price.service_brutto, 0.0);
        assert_eq!(price.netto, 0.0);
        assert_eq!(price.mwst, 0.0);
        assert_eq!(price.brutto, 50.0);
        assert_eq!(price.extra_brutto, 50.0);
    }

    #[test]
    fn test_degenerate_without_employees() {
        let report = two_hours();
        let price = calculate(Some(&report), "90", 0, DEFAULT_TAX_RATE, 25.0);

        assert_eq!(price.service_brutto, 0.0);
        assert_eq!(price.brutto, 25.0);
    }

    #[test]
    fn test_degenerate_with_zero_rate() {
        let report = two_hours();
        let price = calculate(Some(&report), "0", 2, DEFAULT_TAX_RATE, 12.5);

        assert_eq!(price.netto, 0.0);
        assert_eq!(price.mwst, 0.0);
        assert_eq!(price.brutto, 12.5);
    }

    #[test]
    fn test_degenerate_with_unparsable_rate() {
        let report = two_hours();
        let price = calculate(Some(&report), "free", 2, DEFAULT_TAX_RATE, 0.0);

        assert_eq!(price.price_per_hour, 0.0);
        assert_eq!(price.brutto, 0.0);
    }

    #[test]
    fn test_stundensatz_text_formatting() {
        let price = calculate(None, "95", 0, DEFAULT_TAX_RATE, 0.0);
        assert_eq!(price.stundensatz_text, "95,00 €");

        let price = calculate(None, "90,50", 0, DEFAULT_TAX_RATE, 0.0);
        assert_eq!(price.stundensatz_text, "90,50 €");
    }
}
