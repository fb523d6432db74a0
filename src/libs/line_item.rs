//! Manual line items (Zusatzpositionen) added to the grand total.
//!
//! Amounts are entered as Euro text and stored as integer cents; only
//! the cent sum ever reaches the price calculation, converted to Euros
//! at that boundary. Tax is never applied to line items.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Draft-local identifier, assigned by an ascending counter.
    pub id: i64,
    pub title: String,
    pub amount_cents: i64,
}

/// Parses Euro text ("40,00" or "40.00") into cents.
///
/// Text that is not a number yields 0; the sanitize step drops such
/// entries before they reach the total.
pub fn parse_euro_to_cents(input: &str) -> i64 {
    let normalized = input.trim().replace(',', ".");
    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() => (value * 100.0).round() as i64,
        _ => 0,
    }
}

/// Cleans a list before it is stored: titles are trimmed, entries with
/// an empty title or a non-positive amount are dropped.
pub fn sanitize(items: Vec<LineItem>) -> Vec<LineItem> {
    items
        .into_iter()
        .map(|item| LineItem {
            title: item.title.trim().to_string(),
            ..item
        })
        .filter(|item| !item.title.is_empty() && item.amount_cents > 0)
        .collect()
}

pub fn total_cents(items: &[LineItem]) -> i64 {
    items.iter().map(|item| item.amount_cents).sum()
}

pub fn cents_to_euros(cents: i64) -> f64 {
    cents as f64 / 100.0
}
