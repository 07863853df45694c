//! `csv-clean`: strip parenthetical notes (e.g. branch names) from the
//! vendor columns of an exported purchase CSV.

mod clean;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::clean::{CleanError, DEFAULT_COLUMNS, clean_file};

#[derive(Parser, Debug)]
#[command(name = "csv-clean", about = "Strip parenthetical notes from vendor columns of a CSV file")]
struct Cli {
    #[arg(long, env = "CSV_CLEAN_INPUT", default_value = "input.csv")]
    input: PathBuf,

    #[arg(long, env = "CSV_CLEAN_OUTPUT", default_value = "output.csv")]
    output: PathBuf,

    /// Header name of a column to clean; repeat for several.
    #[arg(long = "column", default_values = DEFAULT_COLUMNS)]
    columns: Vec<String>,
}

fn main() -> Result<(), CleanError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let report = clean_file(&cli.input, &cli.output, &cli.columns)?;
    tracing::info!(
        rows = report.rows,
        changed = report.cells_changed,
        output = %cli.output.display(),
        "csv cleaned"
    );
    Ok(())
}

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;
