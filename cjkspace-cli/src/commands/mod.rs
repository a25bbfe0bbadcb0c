//! CLI command implementations

use anyhow::Result;
use cjkspace_core::SpacingMode;
use clap::Subcommand;

use crate::output::OutputFormat;

pub mod generate_config;
pub mod process;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Insert spacing around CJK characters
    Process(process::ProcessArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Write a configuration file with default settings
    GenerateConfig(generate_config::GenerateConfigArgs),
}

/// List subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ListCommands {
    /// List available spacing modes
    Modes,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Process(args) => args.execute(),
            Commands::List { subcommand } => {
                print!("{}", subcommand.render());
                Ok(())
            }
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

impl ListCommands {
    /// Render the listing as text
    pub fn render(&self) -> String {
        let mut out = String::new();
        match self {
            ListCommands::Modes => {
                out.push_str("Available spacing modes:\n");
                for mode in SpacingMode::ALL {
                    let marker = if mode == SpacingMode::default() {
                        " (default)"
                    } else {
                        ""
                    };
                    out.push_str(&format!(
                        "  {:<10} {}{}\n",
                        mode.name(),
                        mode.description(),
                        marker
                    ));
                }
            }
            ListCommands::Formats => {
                out.push_str("Available output formats:\n");
                for format in OutputFormat::ALL {
                    out.push_str(&format!("  {:<10} {}\n", format, format.description()));
                }
            }
        }
        out
    }
}
