#[cfg(test)]
mod tests {
    use bericht::libs::formatter::{format_cents, format_duration, format_euro, format_range};
    use bericht::libs::time::TimeOfDay;

    #[test]
    fn test_format_duration_zero() {
        assert_eq!(format_duration(0), "0 Stunden 0 Minuten");
    }

    #[test]
    fn test_format_duration_minutes_only() {
        assert_eq!(format_duration(30), "0 Stunden 30 Minuten");
        assert_eq!(format_duration(59), "0 Stunden 59 Minuten");
    }

    #[test]
    fn test_format_duration_hours_and_minutes() {
        assert_eq!(format_duration(90), "1 Stunden 30 Minuten");
        assert_eq!(format_duration(330), "5 Stunden 30 Minuten");
        assert_eq!(format_duration(480), "8 Stunden 0 Minuten");
    }

    #[test]
    fn test_format_duration_negative_clamped_to_zero() {
        assert_eq!(format_duration(-30), "0 Stunden 0 Minuten");
    }

    #[test]
    fn test_format_euro_uses_comma_decimal() {
        assert_eq!(format_euro(0.0), "0,00 €");
        assert_eq!(format_euro(95.0), "95,00 €");
        assert_eq!(format_euro(302.5210084), "302,52 €");
        assert_eq!(format_euro(1234.5), "1234,50 €");
    }

    #[test]
    fn test_format_euro_rounds_at_boundary() {
        assert_eq!(format_euro(57.479), "57,48 €");
        assert_eq!(format_euro(0.005), "0,01 €");
    }

    #[test]
    fn test_format_cents() {
        assert_eq!(format_cents(4000), "40,00 €");
        assert_eq!(format_cents(12345), "123,45 €");
        assert_eq!(format_cents(5), "0,05 €");
    }

    #[test]
    fn test_format_range() {
        let von = TimeOfDay::new(8, 0).unwrap();
        let bis = TimeOfDay::new(12, 30).unwrap();
        assert_eq!(format_range(&von, &bis), "08:00 bis 12:30");
    }
}
