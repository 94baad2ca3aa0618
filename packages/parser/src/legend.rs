//! Legend page detection.
//!
//! Statements end with (or interleave) pages that list message codes and
//! their meanings. Those pages hold no service lines and must not disturb
//! the claim context or a row that is still being reconstructed.

use regex::Regex;
use std::sync::LazyLock;

/// Heading of the code legend table.
static LEGEND_HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bCode\s+Description\b").expect("valid regex"));

/// A legend entry: a short code token followed by its description.
static LEGEND_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[A-Z0-9]{1,4}\b\s+.+").expect("valid regex"));

/// Minimum number of legend entries for a page to count as a legend.
const MIN_LEGEND_LINES: usize = 2;

/// Whether a page contains only a code legend.
///
/// True iff the page produced no service rows, has a legend heading, and
/// has at least two legend-shaped lines.
#[must_use]
pub fn is_legend_only_page(page_text: &str, service_rows: usize) -> bool {
    if service_rows > 0 || !LEGEND_HEADING_RE.is_match(page_text) {
        return false;
    }

    LEGEND_LINE_RE
        .find_iter(page_text)
        .take(MIN_LEGEND_LINES)
        .count()
        >= MIN_LEGEND_LINES
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEGEND_PAGE: &str = "Message Codes\n\
        Code Description\n\
        B6 This charge exceeds the allowed amount\n\
        N3 Benefit maximum reached";

    #[test]
    fn detects_a_legend_page() {
        assert!(is_legend_only_page(LEGEND_PAGE, 0));
    }

    #[test]
    fn heading_is_case_insensitive() {
        let text = LEGEND_PAGE.replace("Code Description", "CODE   DESCRIPTION");
        assert!(is_legend_only_page(&text, 0));
    }

    #[test]
    fn pages_with_rows_are_never_legends() {
        assert!(!is_legend_only_page(LEGEND_PAGE, 1));
    }

    #[test]
    fn requires_the_heading() {
        let text = "B6 This charge exceeds the allowed amount\nN3 Benefit maximum reached";
        assert!(!is_legend_only_page(text, 0));
    }

    #[test]
    fn requires_two_entries() {
        let text = "Code Description\nB6 This charge exceeds the allowed amount";
        assert!(!is_legend_only_page(text, 0));
    }
}
