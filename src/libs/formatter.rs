//! Display formatting for durations, clock ranges and Euro amounts.
//!
//! This module is the rounding boundary: the calculation core keeps
//! floating-point values end to end, and only the functions here round
//! to two decimals for presentation. All currency output uses the
//! German comma decimal separator with a trailing " €".

use crate::libs::time::TimeOfDay;

/// Formats whole minutes as "H Stunden M Minuten".
///
/// Negative values are clamped to zero; a valid report never contains
/// them, but export paths should not render "-1 Minuten" for any input.
pub fn format_duration(minutes: i64) -> String {
    let minutes = minutes.max(0);
    format!("{} Stunden {} Minuten", minutes / 60, minutes % 60)
}

/// Formats a time window as "08:00 bis 12:30".
pub fn format_range(von: &TimeOfDay, bis: &TimeOfDay) -> String {
    format!("{} bis {}", von, bis)
}

/// Formats an Euro amount as "1234,56 €".
pub fn format_euro(amount: f64) -> String {
    format!("{:.2} €", amount).replace('.', ",")
}

/// Formats integer cents as an Euro string.
pub fn format_cents(cents: i64) -> String {
    format_euro(cents as f64 / 100.0)
}
