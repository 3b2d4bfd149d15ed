//! dataconv - Convert between JSON documents and CSV tables

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Result};
use clap::Parser;

use dataconv::{convert_file, Options, Outcome};

/// Convert between JSON documents and CSV tables
#[derive(Parser, Debug)]
#[command(name = "dataconv")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Source file (.json or .csv)
    input: PathBuf,

    /// Target file (.json or .csv)
    output: PathBuf,

    /// Column names (comma-separated); for a CSV input this means the
    /// first line is data, not headers
    #[arg(long, value_delimiter = ',')]
    headers: Vec<String>,

    /// Field delimiter for CSV output
    #[arg(short, long, default_value = ",")]
    delimiter: char,

    /// Trim cell values that exceed the spreadsheet cell limit
    #[arg(long)]
    trim_long_strings: bool,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if !cli.delimiter.is_ascii() {
        bail!("delimiter must be a single ASCII character");
    }

    let mut options = Options::default()
        .with_delimiter(cli.delimiter as u8)
        .with_trim_long_strings(cli.trim_long_strings);
    if !cli.headers.is_empty() {
        options = options.with_headers(cli.headers);
    }

    match convert_file(&cli.input, &cli.output, &options)? {
        Outcome::Written => {}
        Outcome::Skipped(diagnostic) => eprintln!("{}", diagnostic),
    }

    Ok(())
}
