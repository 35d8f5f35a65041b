//! Sheetgate CLI - compare spreadsheets against references

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use sheetgate::prelude::*;
use sheetgate_csv::{CsvOptions, CsvStore};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "sheetgate")]
#[command(
    author,
    version,
    about = "Compare generated spreadsheets against reference spreadsheets"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare an actual CSV file against an expected one
    Compare(CompareArgs),
}

#[derive(Args)]
struct CompareArgs {
    /// Reference file treated as ground truth
    expected: PathBuf,

    /// Freshly produced file under test
    actual: PathBuf,

    /// Test name; prefixes generated artifacts
    #[arg(short, long, default_value = "compare")]
    test_name: String,

    /// Directory receiving the diff report
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Diff report filename (default: "<test-name>_Errors.csv")
    #[arg(long)]
    report: Option<String>,

    /// Sheet index to compare (0-based)
    #[arg(short, long, default_value = "0")]
    sheet: usize,

    /// Rectangle to examine, e.g. "B2:D10" (repeatable; default: the expected
    /// sheet's used range below the header row)
    #[arg(short, long = "range")]
    ranges: Vec<String>,

    /// "Don't care" marker excluding an expected cell from comparison
    #[arg(long, default_value = "N/A")]
    sentinel: String,

    /// Field delimiter (default: comma)
    #[arg(short, long, default_value = ",")]
    delimiter: char,

    /// Print the outcome as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Compare(args) => compare(args),
    }
}

fn compare(args: CompareArgs) -> Result<ExitCode> {
    let regions = args
        .ranges
        .iter()
        .map(|r| CellRegion::parse(r).with_context(|| format!("Invalid range '{}'", r)))
        .collect::<Result<Vec<_>>>()?;

    let options = CsvOptions {
        delimiter: args.delimiter as u8,
        ..CsvOptions::default()
    };
    let store = CsvStore::with_options(options);
    let comparer = Comparer::with_options(store, CompareOptions::with_sentinel(args.sentinel));

    let mut run = RunConfig::new(args.test_name, args.output_dir).with_sheet(args.sheet);
    if let Some(report) = args.report {
        run = run.with_report_filename(report);
    }

    let expected = comparer
        .store()
        .load(&args.expected)
        .with_context(|| format!("Failed to open '{}'", args.expected.display()))?;
    let actual = comparer
        .store()
        .load(&args.actual)
        .with_context(|| format!("Failed to open '{}'", args.actual.display()))?;

    let outcome = comparer
        .compare_workbooks(&regions, &expected, &actual, &run)
        .context("Comparison failed")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        println!("{}", outcome.message);
    }

    // A mismatch is data, not an error: report it through the exit code
    Ok(if outcome.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
