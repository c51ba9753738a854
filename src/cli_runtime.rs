use anyhow::Result;
use clap::Parser;

use crate::Commands;

#[derive(Parser)]
#[command(name = "praxis")]
#[command(about = "Practice-exercise client", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None => praxis::tui::run()?,
        Some(command) => crate::cli_exec::handle_command(command)?,
    }

    Ok(())
}
