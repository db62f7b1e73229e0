//! medparse - Medical report entity extraction CLI
//!
//! Reads a free-text medical report, runs the classification and
//! reconstruction pipeline, and prints the extracted entities grouped by
//! category.
//!
//! # Usage
//!
//! ```bash
//! # Parse the default report file (report.txt)
//! medparse parse
//!
//! # Parse an explicit file or inline text
//! medparse parse --file notes/admission.txt
//! medparse parse --text "A 54-year-old male admitted 2024-01-15."
//!
//! # Skip the noise filter, emit JSON
//! medparse parse --raw --format json
//!
//! # Show available backends and defaults
//! medparse info
//! ```

use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use is_terminal::IsTerminal;

use medparse::{CategorizedReport, Classifier, PatternClassifier, ReportParser, DEFAULT_MODEL};

/// Report file read when no other input is given.
const DEFAULT_REPORT_FILE: &str = "report.txt";

// ============================================================================
// CLI Structure
// ============================================================================

/// Medical report entity extraction - categorized NER over free-text reports
#[derive(Parser)]
#[command(name = "medparse", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Report text (shorthand for `parse --text ...`)
    #[arg(trailing_var_arg = true)]
    text: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a report and print categorized entities
    Parse(ParseArgs),
    /// Show backends, defaults, and filter configuration
    Info,
}

/// Parse a report and print categorized entities
#[derive(Parser, Debug)]
struct ParseArgs {
    /// Input text to process
    #[arg(short, long)]
    text: Option<String>,

    /// Read the report from a file (default: report.txt)
    #[arg(short, long, value_name = "PATH")]
    file: Option<String>,

    /// Output format
    #[arg(long, default_value = "human")]
    format: OutputFormat,

    /// Skip the noise-filtering pass
    #[arg(long)]
    raw: bool,

    /// Minimal output
    #[arg(short, long)]
    quiet: bool,

    /// Positional text argument
    #[arg(trailing_var_arg = true)]
    positional: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum OutputFormat {
    /// Category headers with entity lists
    #[default]
    Human,
    /// Pretty-printed JSON object keyed by category
    Json,
}

// ============================================================================
// Output Helpers
// ============================================================================

/// Colorize text with ANSI escape codes (only if stdout is a terminal)
fn color(code: &str, text: &str) -> String {
    if io::stdout().is_terminal() {
        format!("\x1b[{}m{}\x1b[0m", code, text)
    } else {
        text.to_string()
    }
}

fn print_report(report: &CategorizedReport) {
    println!("--- Extracted Medical Entities ---");
    if report.is_empty() {
        println!("No entities were found.");
    } else {
        for (category, entities) in report.iter() {
            println!();
            println!("[{}]", color("1;36", category));
            for entity in entities {
                println!("  - {}", entity);
            }
        }
    }
    println!();
    println!("----------------------------------");
}

// ============================================================================
// Input Resolution
// ============================================================================

/// Resolve the report text: explicit text, file, positional args, stdin,
/// then the default report file.
fn get_input_text(args: &ParseArgs) -> Result<String, String> {
    if let Some(t) = &args.text {
        return Ok(t.clone());
    }

    if let Some(path) = &args.file {
        return read_report(path);
    }

    if !args.positional.is_empty() {
        return Ok(args.positional.join(" "));
    }

    if !io::stdin().is_terminal() {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| format!("failed to read stdin: {}", e))?;
        if !buf.trim().is_empty() {
            return Ok(buf);
        }
    }

    read_report(DEFAULT_REPORT_FILE)
}

fn read_report(path: &str) -> Result<String, String> {
    fs::read_to_string(path).map_err(|e| format!("cannot read report '{}': {}", path, e))
}

// ============================================================================
// Command Handlers
// ============================================================================

fn run_parse(args: ParseArgs) -> Result<(), String> {
    let text = get_input_text(&args)?;
    let parser = ReportParser::new(Box::new(PatternClassifier::new()));

    let report = parser
        .parse_report(&text)
        .map_err(|e| format!("parse failed: {}", e))?;
    let report = if args.raw {
        report
    } else {
        parser.clean_report(report)
    };

    if !args.quiet {
        eprintln!(
            "{} parsed report ({} entities in {} categories, backend: {})",
            color("32", "ok:"),
            report.entity_count(),
            report.len(),
            parser.backend_name()
        );
    }

    match args.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| format!("failed to serialize report: {}", e))?;
            println!("{}", json);
        }
        OutputFormat::Human => print_report(&report),
    }

    Ok(())
}

fn run_info() -> Result<(), String> {
    let pattern = PatternClassifier::new();
    println!("{}", color("1", "medparse backends"));
    println!(
        "  {} - {} (available: {})",
        color("1;36", pattern.name()),
        pattern.description(),
        pattern.is_available()
    );
    println!();
    println!("default model id: {}", DEFAULT_MODEL);
    println!("default report file: {}", DEFAULT_REPORT_FILE);
    Ok(())
}

// ============================================================================
// Main Entry Point
// ============================================================================

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result: Result<(), String> = match cli.command {
        Some(Commands::Parse(args)) => run_parse(args),
        Some(Commands::Info) => run_info(),
        None => {
            // No subcommand: treat positional args as report text
            run_parse(ParseArgs {
                text: if cli.text.is_empty() {
                    None
                } else {
                    Some(cli.text.join(" "))
                },
                file: None,
                format: OutputFormat::default(),
                raw: false,
                quiet: false,
                positional: vec![],
            })
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", color("31", "error:"), e);
            ExitCode::FAILURE
        }
    }
}
