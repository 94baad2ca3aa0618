#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI entry point for the benefits-statement claim extractor.
//!
//! Reads a print-friendly explanation-of-benefits PDF and writes one CSV
//! row per billed service line, stamped with its claim header. Set
//! `RUST_LOG=debug` to see per-page decisions.

mod output;

use std::path::PathBuf;

use clap::Parser;
use eob_claims_cli_utils::{IndicatifProgress, MultiProgress};
use eob_claims_pdf::{PageSource as _, PdfDocument, PdfError};

#[derive(Parser)]
#[command(
    name = "eob_claims",
    about = "Extract medical claim service lines from a print-friendly EOB PDF into CSV"
)]
struct Cli {
    /// Path to the print-friendly EOB PDF
    pdf: PathBuf,
    /// Path to the output CSV file
    csv: PathBuf,
}

/// Errors that abort a run.
#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Pdf(#[from] PdfError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Extracts every service line from `cli.pdf` into `cli.csv`. Returns the
/// number of rows written.
fn run(cli: &Cli, multi: &MultiProgress) -> Result<usize, CliError> {
    let document = PdfDocument::open(&cli.pdf)?;
    log::info!(
        "Loaded {} page(s) from {}",
        document.page_count(),
        cli.pdf.display()
    );

    let progress = IndicatifProgress::pages_bar(multi, "Extracting service lines");
    progress.set_total(u64::try_from(document.page_count()).unwrap_or(u64::MAX));

    let rows = eob_claims_parser::extract_claims(document.pages(), &progress);
    progress.finish(format!("{} service line(s)", rows.len()));

    output::write_csv(&rows, &cli.csv)?;

    Ok(rows.len())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let multi = eob_claims_cli_utils::init_logger();
    let cli = Cli::parse();

    let count = run(&cli, &multi)?;
    println!(
        "Extracted {count} service line(s) to: {}",
        cli.csv.display()
    );

    Ok(())
}
