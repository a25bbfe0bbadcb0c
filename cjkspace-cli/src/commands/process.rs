//! Process command implementation

use anyhow::{Context, Result};
use cjkspace_core::{Config, Spacer, SpacingError, SpacingMode};
use clap::Args;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::InputSource;
use crate::output::{
    JsonFormatter, OutputFormat, OutputFormatter, SpacedDocument, TextFormatter,
};
use crate::progress::ProgressReporter;

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input files or patterns (supports glob); reads stdin when omitted
    #[arg(short, long, value_name = "FILE/PATTERN", conflicts_with = "text")]
    pub input: Vec<String>,

    /// Text to process instead of files
    #[arg(short, long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Spacing mode: simple or enhanced
    #[arg(short, long, value_name = "MODE")]
    pub mode: Option<SpacingMode>,

    /// Keep original newlines (simple mode)
    #[arg(short, long)]
    pub keep_newlines: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Settings after merging the config file with command-line flags
#[derive(Debug, Clone, PartialEq)]
pub struct EffectiveSettings {
    /// Core spacer configuration
    pub spacer: Config,
    /// Output format
    pub format: OutputFormat,
    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> Result<()> {
        // Initialize logging based on verbosity
        self.init_logging();

        log::info!("Starting text processing");
        log::debug!("Arguments: {:?}", self);

        let file_config = CliConfig::load_or_default(self.config.as_deref())?;
        let settings = self.settings(&file_config)?;
        let spacer = Spacer::with_config(settings.spacer.clone())
            .map_err(|e| CliError::ConfigError(e.to_string()))?;

        let source = InputSource::from_args(&self.input, self.text.as_deref());
        let documents = source.read_documents()?;
        log::info!("Read {} document(s)", documents.len());

        let mut reporter = ProgressReporter::new(self.quiet);
        reporter.init_files(documents.len() as u64);

        let mut spaced = Vec::with_capacity(documents.len());
        for document in &documents {
            let mut progress = reporter.text_progress();
            let result = spacer.process_with_progress(&document.text, &mut progress);
            progress.finish();

            match result {
                Ok(output) => spaced.push(SpacedDocument {
                    source: document.source.clone(),
                    output,
                }),
                Err(SpacingError::EmptyInput) => {
                    log::warn!("{}: no text to process, skipped", document.source);
                }
                Err(e) => {
                    reporter.finish();
                    let msg = format!("{}: {e}", document.source);
                    return Err(CliError::ProcessingError(msg).into());
                }
            }
            reporter.file_completed(&document.source);
        }
        reporter.finish();

        if spaced.is_empty() {
            return Err(CliError::ProcessingError("No text to process".to_string()).into());
        }

        let rendered = render(&spaced, settings.format, settings.pretty_json)?;
        self.deliver(&rendered)?;

        log::info!("Processed {} document(s)", spaced.len());
        Ok(())
    }

    /// Merge the config file with command-line flags
    pub fn settings(&self, file_config: &CliConfig) -> Result<EffectiveSettings> {
        let spacer = Config::builder()
            .mode(self.mode.unwrap_or(file_config.spacing.mode))
            .keep_newlines(self.keep_newlines || file_config.spacing.keep_newlines)
            .progress_interval(file_config.spacing.progress_interval)
            .build()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;

        if self.keep_newlines && spacer.mode() == SpacingMode::Enhanced {
            log::warn!("--keep-newlines only affects simple mode");
        }

        Ok(EffectiveSettings {
            spacer,
            format: self.format.unwrap_or(file_config.output.format),
            pretty_json: file_config.output.pretty_json,
        })
    }

    /// Write the rendered result to its destination
    ///
    /// When the output file cannot be written the result goes to stdout so
    /// it is not lost, and the failure is still reported.
    fn deliver(&self, rendered: &[u8]) -> Result<()> {
        match &self.output {
            Some(path) => {
                if let Err(e) = fs::write(path, rendered) {
                    log::error!("Failed to write {}: {e}", path.display());
                    write_stdout(rendered)?;
                    return Err(CliError::OutputUnavailable(format!(
                        "{}: {e}; result written to stdout instead",
                        path.display()
                    ))
                    .into());
                }
                log::info!("Wrote result to {}", path.display());
                Ok(())
            }
            None => write_stdout(rendered),
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}

/// Format all documents into a byte buffer
pub fn render(
    documents: &[SpacedDocument],
    format: OutputFormat,
    pretty_json: bool,
) -> Result<Vec<u8>> {
    match format {
        OutputFormat::Text => {
            let mut formatter = TextFormatter::new(Vec::new());
            write_all(&mut formatter, documents)?;
            Ok(formatter.into_inner())
        }
        OutputFormat::Json => {
            let mut formatter = JsonFormatter::new(Vec::new(), pretty_json);
            write_all(&mut formatter, documents)?;
            Ok(formatter.into_inner())
        }
    }
}

fn write_all(formatter: &mut dyn OutputFormatter, documents: &[SpacedDocument]) -> Result<()> {
    for document in documents {
        formatter.format_document(document)?;
    }
    formatter.finish()
}

fn write_stdout(rendered: &[u8]) -> Result<()> {
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(rendered)
        .context("Failed to write to stdout")?;
    stdout.flush().context("Failed to flush stdout")
}
