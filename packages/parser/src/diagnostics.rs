//! Informational page markers.
//!
//! Neither marker drives the pipeline; they are reported in
//! [`crate::PageOutcome`] and logged so a reader of the logs can line up
//! extracted rows with the printed statement.

use regex::Regex;
use std::sync::LazyLock;

use crate::row::CURRENCY;

/// Printed page footer, e.g. `Page 3 of 7`.
static PAGE_FOOTER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bPage\s+(\d+)\b").expect("valid regex"));

/// Claim totals line closing a service table.
static TOTALS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?m)^Totals\s+{CURRENCY}\s+{CURRENCY}\s+{CURRENCY}\b"
    ))
    .expect("valid regex")
});

/// Number of trailing lines searched for the page footer.
const FOOTER_WINDOW: usize = 5;

/// Returns the printed page number from the page footer, if any.
#[must_use]
pub fn page_footer_number<S: AsRef<str>>(lines: &[S]) -> Option<u64> {
    let start = lines.len().saturating_sub(FOOTER_WINDOW);

    lines[start..]
        .iter()
        .map(|line| line.as_ref())
        .filter(|line| !line.is_empty())
        .find_map(|line| {
            PAGE_FOOTER_RE
                .captures(line)
                .and_then(|caps| caps[1].parse::<u64>().ok())
        })
}

/// Whether the page contains a claim totals line.
#[must_use]
pub fn has_totals_line(page_text: &str) -> bool {
    TOTALS_RE.is_match(page_text)
}
