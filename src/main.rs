//! Contract redaction CLI application.
//!
//! This binary provides a command-line interface for the redaction library:
//! redacting extracted contract text, restoring placeholders from a mapping
//! report, and listing what would be redacted.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use contract_redactor::redaction::{read_document, read_document_from, same_destination};
use contract_redactor::{Category, RedactionResult, RedactionService, RedactionSummary};

const LIMITATIONS: &str = "Redaction is best-effort: only email addresses, dates, and organization \
names ending in LLC, Inc, Corp, Ltd, LLP, Company or Organization are replaced. Phone numbers, \
addresses, IDs and personal names are NOT redacted.";

/// Contract redaction tool
///
/// Replaces identifying spans in contract text with placeholders before the
/// text is sent for remote analysis. Reads stdin when no input is given.
#[derive(Parser)]
#[command(name = "contract-redactor")]
#[command(version, long_about = None, after_help = LIMITATIONS)]
struct Cli {
    /// Input text file (extracted contract text; defaults to stdin)
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output file for the redacted text (defaults to stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Write the local mapping report (JSON) to this file. Never send it for analysis
    #[arg(short, long, value_name = "FILE")]
    mapping: Option<PathBuf>,

    /// Format of the report printed to stdout
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log filter directive, e.g. "contract_redactor=debug"
    #[arg(long, value_name = "FILTER", env = "CONTRACT_REDACTOR_LOG", global = true)]
    log: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Restore original values in text that contains placeholders
    Restore {
        /// Redacted text or model output (defaults to stdin)
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,

        /// Output file (defaults to stdout)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Mapping report written by a previous redaction
        #[arg(short, long, value_name = "FILE")]
        mapping: PathBuf,
    },

    /// List the values that would be redacted, without writing any output
    Scan {
        /// Input text file (defaults to stdin)
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// JSON printed to stdout: only the outbound text and counts.
#[derive(Serialize)]
struct OutboundReport<'a> {
    text: &'a str,
    summary: RedactionSummary,
}

/// Command handler holding the service and output settings.
struct RedactionHandler {
    service: RedactionService,
    format: OutputFormat,
    verbose: bool,
}

impl RedactionHandler {
    fn new(format: OutputFormat, verbose: bool) -> Self {
        Self {
            service: RedactionService::with_default_engine(),
            format,
            verbose,
        }
    }

    /// Executes a redaction operation.
    fn redact(
        &self,
        input: Option<&Path>,
        output: Option<&Path>,
        mapping: Option<&Path>,
    ) -> Result<()> {
        if let (Some(output), Some(mapping)) = (output, mapping) {
            if same_destination(output, mapping) {
                anyhow::bail!("--mapping must be a different file from --output");
            }
        }

        let text = read_input(input)?;
        let result = self
            .service
            .redact_document(text, output, mapping)
            .with_context(|| "Redaction failed")?;

        self.report(&result, output)
    }

    fn report(&self, result: &RedactionResult, output: Option<&Path>) -> Result<()> {
        let summary = result.summary();
        debug!(total = summary.total(), "redaction complete");

        match self.format {
            OutputFormat::Json => {
                let report = OutboundReport {
                    text: result.outbound().as_str(),
                    summary,
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
            OutputFormat::Text => match output {
                Some(output) => {
                    if self.verbose {
                        println!("Redaction Summary:");
                        println!("  Emails:   {}", summary.emails);
                        println!("  Dates:    {}", summary.dates);
                        println!("  Entities: {}", summary.entities);
                    }
                    if result.has_redactions() {
                        println!(
                            "✓ Successfully redacted {} value(s) → {}",
                            summary.total(),
                            output.display()
                        );
                    } else {
                        println!("⚠ No identifying values found; output is unchanged");
                    }
                }
                None => {
                    if self.verbose {
                        eprintln!("{summary}");
                    }
                    write_stdout(result.redacted_text())?;
                }
            },
        }

        Ok(())
    }

    /// Restores placeholders using a mapping report.
    fn restore(&self, input: Option<&Path>, output: Option<&Path>, mapping: &Path) -> Result<()> {
        let text = read_input(input)?;
        let restored = self
            .service
            .restore_document(&text, output, mapping)
            .with_context(|| "Restore failed")?;

        match output {
            Some(output) => println!("✓ Restored placeholders → {}", output.display()),
            None => write_stdout(&restored)?,
        }

        Ok(())
    }

    /// Lists detected values per category.
    fn scan(&self, input: Option<&Path>) -> Result<()> {
        let result = self.service.redact_text(read_input(input)?);

        match self.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(result.mapping())?);
            }
            OutputFormat::Text => {
                for category in Category::ALL {
                    let entries: Vec<_> = result
                        .mapping()
                        .iter()
                        .filter(|(p, _)| p.category() == category)
                        .collect();
                    println!("{} ({})", category, entries.len());
                    for (placeholder, original) in entries {
                        println!("  {placeholder}  {original}");
                    }
                }
            }
        }

        Ok(())
    }
}

fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) => {
            read_document(path).with_context(|| format!("Failed to read {}", path.display()))
        }
        None => read_document_from(io::stdin().lock(), "<stdin>")
            .with_context(|| "Failed to read stdin"),
    }
}

fn write_stdout(text: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Builds the log filter: `--verbose` wins over `--log`/`CONTRACT_REDACTOR_LOG`.
fn log_filter(verbose: bool, directive: Option<&str>) -> Result<EnvFilter> {
    if verbose {
        return Ok(EnvFilter::new("contract_redactor=debug"));
    }
    match directive {
        Some(directive) => EnvFilter::try_new(directive)
            .with_context(|| format!("Invalid log filter '{directive}'")),
        None => Ok(EnvFilter::new("warn")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(cli.verbose, cli.log.as_deref())?)
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let handler = RedactionHandler::new(cli.format, cli.verbose);

    match &cli.command {
        Some(Commands::Restore {
            input,
            output,
            mapping,
        }) => {
            handler.restore(input.as_deref(), output.as_deref(), mapping)?;
        }
        Some(Commands::Scan { input }) => {
            handler.scan(input.as_deref())?;
        }
        None => {
            handler.redact(
                cli.input.as_deref(),
                cli.output.as_deref(),
                cli.mapping.as_deref(),
            )?;
        }
    }

    Ok(())
}
