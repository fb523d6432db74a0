//! # Bericht - Servicebericht assembly for field technicians
//!
//! A client-local command-line utility for putting together a German
//! Servicebericht: work, arrival and departure times, employees,
//! customer data and manual line items for one job.
//!
//! ## Features
//!
//! - **Time Validation**: Arrival, work and departure windows checked
//!   for chronological order, durations derived in minutes
//! - **Price Breakdown**: Net, tax and gross amounts from the hourly
//!   rate and employee count, untaxed line items on top
//! - **Draft Persistence**: One in-progress report kept as JSON in the
//!   platform data directory, raw inputs only
//! - **Preview**: The full report rendered as terminal tables
//! - **Data Export**: CSV, JSON and Excel output of the finished report
//!
//! ## Usage
//!
//! ```rust,no_run
//! use bericht::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;
