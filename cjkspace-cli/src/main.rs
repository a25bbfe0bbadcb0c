//! cjkspace command-line entry point

use clap::Parser;
use cjkspace_cli::commands::Commands;

/// Insert spacing between CJK characters and adjacent Latin text or punctuation
#[derive(Debug, Parser)]
#[command(name = "cjkspace", version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = cli.command.execute() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
