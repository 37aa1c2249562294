//! Terminal frontend binary for the viewfit size machine.

use clap::Parser;
use viewfit_tui::{Cli, TerminalError};

#[tokio::main]
async fn main() -> Result<(), TerminalError> {
    let cli = Cli::parse();
    viewfit_tui::run(cli).await
}
