//! Terminal tic-tac-toe binary.

use anyhow::Result;
use clap::Parser;
use termtac::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    termtac::tui::run(cli.options())
}
