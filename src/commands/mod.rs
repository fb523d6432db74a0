pub mod customer;
pub mod employees;
pub mod export;
pub mod init;
pub mod items;
pub mod order;
pub mod report;
pub mod reset;
pub mod times;

use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Set date, order number, rate and description")]
    Order(order::OrderArgs),
    #[command(about = "Capture or clear customer data")]
    Customer(customer::CustomerArgs),
    #[command(about = "Manage the employee selection")]
    Employees(employees::EmployeesArgs),
    #[command(about = "Set arrival, work and departure times")]
    Times(times::TimesArgs),
    #[command(about = "Manage manual line items")]
    Items(items::ItemsArgs),
    #[command(about = "Validate the draft and preview the Servicebericht")]
    Report(report::ReportArgs),
    #[command(about = "Export the Servicebericht to CSV, JSON or Excel")]
    Export(export::ExportArgs),
    #[command(about = "Discard the draft and start over")]
    Reset(reset::ResetArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> anyhow::Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Order(args) => order::cmd(args),
            Commands::Customer(args) => customer::cmd(args),
            Commands::Employees(args) => employees::cmd(args),
            Commands::Times(args) => times::cmd(args),
            Commands::Items(args) => items::cmd(args),
            Commands::Report(args) => report::cmd(args),
            Commands::Export(args) => export::cmd(args),
            Commands::Reset(args) => reset::cmd(args),
        }
    }
}
