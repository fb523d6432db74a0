use anyhow::Result;
use bericht::commands::Cli;
use bericht::libs::logger;

fn main() -> Result<()> {
    logger::init();
    Cli::menu()
}
