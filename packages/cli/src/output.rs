//! CSV output.
//!
//! The header row is always written, even when no rows were extracted.

use std::io::Write;
use std::path::Path;

use eob_claims_models::{OUTPUT_COLUMNS, StampedRow};

/// Writes `rows` as CSV to the file at `path`, replacing it.
///
/// # Errors
///
/// Returns [`csv::Error`] if the file cannot be created or written.
pub fn write_csv(rows: &[StampedRow], path: &Path) -> Result<(), csv::Error> {
    let file = std::fs::File::create(path)?;
    write_rows(rows, file)?;

    log::info!("Wrote {} row(s) to {}", rows.len(), path.display());

    Ok(())
}

/// Writes the header and `rows` as CSV to `out`.
///
/// # Errors
///
/// Returns [`csv::Error`] if writing fails.
pub fn write_rows<W: Write>(rows: &[StampedRow], out: W) -> Result<(), csv::Error> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(out);

    writer.write_record(OUTPUT_COLUMNS)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    Ok(())
}
