//! # xlsx2tex-cli
//!
//! Command-line interface turning Excel sheets into booktabs LaTeX tables.

mod convert;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use convert::{ConversionReport, ConvertConfig};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use xlsx2tex_latex::DEFAULT_WRAP_WIDTH;

/// xlsx2tex - Excel sheets to LaTeX tables
#[derive(Parser)]
#[command(name = "xlsx2tex")]
#[command(author, version, about = "Convert Excel sheets into booktabs LaTeX tables", long_about = None)]
struct Cli {
    /// Excel file
    #[arg(short = 'x', long = "xlsx", value_name = "FILE")]
    xlsx: PathBuf,

    /// Output directory
    #[arg(short = 'o', long = "out", value_name = "DIR", default_value = "out")]
    out: PathBuf,

    /// Number of characters at which long lines are wrapped
    #[arg(
        short = 'w',
        long = "word-wrap-at",
        alias = "word.wrap.at",
        value_name = "N",
        default_value_t = DEFAULT_WRAP_WIDTH
    )]
    word_wrap_at: usize,

    /// Table alignment by sheet, e.g. "rll&rrr&lll" for 3 sheets
    #[arg(short = 'a', long = "alignment", value_name = "SPEC")]
    alignment: Option<String>,

    /// Add a midrule after each row
    #[arg(short = 'm', long = "midrule")]
    midrule: bool,

    /// Sheets to convert, 1-based and comma separated, e.g. "1,4,5"
    #[arg(short = 's', long = "sheets", value_name = "LIST", value_delimiter = ',')]
    sheets: Option<Vec<usize>>,

    /// Drop rows whose cells are all empty
    #[arg(long = "skip-empty-rows")]
    skip_empty_rows: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl From<Cli> for ConvertConfig {
    fn from(cli: Cli) -> Self {
        ConvertConfig {
            xlsx: cli.xlsx,
            out_dir: cli.out,
            wrap_width: cli.word_wrap_at,
            alignment: cli.alignment,
            midrule: cli.midrule,
            sheets: cli.sheets,
            skip_empty_rows: cli.skip_empty_rows,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .init();
    }

    let config = ConvertConfig::from(cli);
    let report = convert::run(&config)?;
    print_report(&report);

    if report.is_success() {
        Ok(())
    } else {
        anyhow::bail!(
            "{} of {} sheets failed",
            report.failed.len(),
            report.failed.len() + report.written.len()
        )
    }
}

/// Print written files and failures.
fn print_report(report: &ConversionReport) {
    for (sheet, path) in &report.written {
        println!("{} {} -> {}", "Wrote".green().bold(), sheet, path.display());
    }
    for (sheet, err) in &report.failed {
        eprintln!("{} {sheet}: {err:#}", "Error:".red().bold());
    }
    if report.is_success() {
        println!("Complete.");
    }
}
