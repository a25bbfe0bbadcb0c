//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

use crate::config::CliConfig;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        if self.output.exists() && !self.force {
            anyhow::bail!(
                "{} already exists (use --force to overwrite)",
                self.output.display()
            );
        }

        println!("Generating configuration file...");
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template()?;

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration file generated successfully!");
        println!();
        println!("Use it for processing:");
        println!(
            "   cjkspace process -i input.txt --config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate configuration content with explanatory comments
    fn generate_template(&self) -> Result<String> {
        let body = CliConfig::default().to_toml()?;
        Ok(format!(
            r#"# cjkspace configuration
#
# [spacing]
#   mode              "enhanced" keeps Latin words whole and collapses whitespace,
#                     "simple" scans characters and can keep newlines
#   keep_newlines     keep original newlines (simple mode only)
#   progress_interval characters between progress updates
#
# [output]
#   format            "text" or "json"
#   pretty_json       indent JSON output
#
# Command-line flags override these values.

{body}"#
        ))
    }
}
