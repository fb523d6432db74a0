//! Price breakdown for the time-based service charge.
//!
//! Takes the total minutes from a validated [`Report`], the hourly rate
//! and the employee count, and derives gross, net and tax amounts.
//! Manual line items enter as a pre-summed gross amount; they are added
//! to the grand total but never taxed.
//!
//! Unlike time validation this calculation cannot fail. Missing or
//! unusable inputs (no report, no employees, rate <= 0) degrade to a
//! zero service charge so that a partially filled report can still be
//! previewed. Amounts stay floating point end to end; rounding happens
//! only when a value is formatted for display or export.

use crate::libs::formatter::format_euro;
use crate::libs::report::Report;
use serde::{Deserialize, Serialize};

/// German value-added tax rate applied to the service charge.
pub const DEFAULT_TAX_RATE: f64 = 0.19;

/// Monetary breakdown of one Servicebericht.
///
/// Invariants: `netto * (1 + tax_rate) == service_brutto` within
/// floating-point tolerance, and `brutto == service_brutto + extra_brutto`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    /// Gross amount of the time-based service charge.
    pub service_brutto: f64,
    /// Net portion of the service charge.
    pub netto: f64,
    /// Tax portion of the service charge.
    pub mwst: f64,
    /// Sum of the manual line items, gross, untaxed.
    pub extra_brutto: f64,
    /// Grand total: service charge plus line items.
    pub brutto: f64,
    /// Hourly rate as parsed from the free-text input.
    pub price_per_hour: f64,
    /// Pre-formatted rate string, e.g. "95,00 €".
    pub stundensatz_text: String,
}

/// Parses a free-text hourly rate.
///
/// Accepts both German comma and period decimals. Text that is not a
/// number coerces to 0, which routes the calculation into the
/// degenerate zero-charge path instead of failing.
pub fn parse_rate(text: &str) -> f64 {
    let normalized = text.trim().replace(',', ".");
    normalized.parse::<f64>().unwrap_or(0.0)
}

/// Computes the price breakdown.
///
/// With no report, no employees or a non-positive rate the service
/// charge is zero and the grand total consists of the line items alone.
/// Otherwise:
///
/// ```text
/// service_brutto = gesamtzeit * (rate / 60) * employee_count
/// netto          = service_brutto / (1 + tax_rate)
/// mwst           = service_brutto - netto
/// brutto         = service_brutto + extra_brutto
/// ```
pub fn calculate(report: Option<&Report>, rate_text: &str, employee_count: usize, tax_rate: f64, extra_brutto: f64) -> PriceBreakdown {
    let price_per_hour = parse_rate(rate_text);
    let stundensatz_text = format_euro(price_per_hour);

    let report = match report {
        Some(report) if employee_count > 0 && price_per_hour > 0.0 => report,
        _ => {
            return PriceBreakdown {
                service_brutto: 0.0,
                netto: 0.0,
                mwst: 0.0,
                extra_brutto,
                brutto: extra_brutto,
                price_per_hour,
                stundensatz_text,
            }
        }
    };

    let minutes_total = report.gesamtzeit as f64;
    let service_brutto = minutes_total * (price_per_hour / 60.0) * employee_count as f64;
    let netto = service_brutto / (1.0 + tax_rate);
    let mwst = service_brutto - netto;

    PriceBreakdown {
        service_brutto,
        netto,
        mwst,
        extra_brutto,
        brutto: service_brutto + extra_brutto,
        price_per_hour,
        stundensatz_text,
    }
}
