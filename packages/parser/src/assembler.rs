//! Service row reconstruction.
//!
//! Extracted text does not mark where a table row ends. A description may
//! wrap over several lines, and occasionally the amounts and codes of the
//! last row on a page are pushed to the top of the next page. Rows are
//! therefore rebuilt from content shape alone:
//!
//! - while idle, lines are noise until one starts with a date, which opens
//!   a buffer;
//! - while accumulating, every line is appended to the buffer with a
//!   single space;
//! - after each append the buffer is tested with [`finalize_row`]; a match
//!   emits the collapsed row and returns to idle.
//!
//! Whatever is still buffered at the end of a page is handed back as the
//! pending row for the next page. That is the only way a row may span a
//! page boundary.

use std::sync::LazyLock;

use regex::Regex;

use crate::row::finalize_row;

/// A line that opens a new row.
static DATE_START_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{2}/\d{2}/\d{4}\b").expect("valid regex"));

/// Rows completed on one page plus the partial row left over.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssembledPage {
    /// Completed rows, each a whitespace-collapsed single line.
    pub rows: Vec<String>,
    /// Partial row text to continue on the next page.
    pub pending: Option<String>,
}

/// Line-by-line row builder.
#[derive(Debug, Clone, Default)]
pub struct RowAssembler {
    buffer: Option<String>,
}

impl RowAssembler {
    /// Creates an assembler, resuming `pending` from a previous page.
    #[must_use]
    pub const fn new(pending: Option<String>) -> Self {
        Self { buffer: pending }
    }

    /// Feeds one cleaned line. Returns a completed row, if this line
    /// completed one.
    pub fn push_line(&mut self, line: &str) -> Option<String> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let buffer = match self.buffer.take() {
            Some(mut buffer) => {
                buffer.push(' ');
                buffer.push_str(line);
                buffer
            }
            None if DATE_START_RE.is_match(line) => line.to_owned(),
            None => return None,
        };

        let done = finalize_row(&buffer);
        if done.is_none() {
            self.buffer = Some(buffer);
        }
        done
    }

    /// Ends the page, returning the partial row (if any).
    #[must_use]
    pub fn into_pending(self) -> Option<String> {
        self.buffer
    }
}

/// Rebuilds the service rows of one page.
///
/// `pending` is the partial row carried from the previous page.
#[must_use]
pub fn assemble_rows<S: AsRef<str>>(lines: &[S], pending: Option<String>) -> AssembledPage {
    let mut assembler = RowAssembler::new(pending);
    let mut rows = Vec::new();

    for line in lines {
        if let Some(row) = assembler.push_line(line.as_ref()) {
            log::trace!("Assembled row: {row}");
            rows.push(row);
        }
    }

    AssembledPage {
        rows,
        pending: assembler.into_pending(),
    }
}
