//! Page text cleanup.
//!
//! Extracted page text carries non-breaking spaces and runs of padding
//! between columns. Lines are kept as lines (row reconstruction depends on
//! them) but each one is trimmed and its inner padding collapsed.

use regex::Regex;
use std::sync::LazyLock;

/// Runs of two or more horizontal whitespace characters.
static PADDING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]{2,}").expect("valid regex"));

/// Line boundaries: CRLF, LF, CR, vertical tab, form feed, the file, group
/// and record separators, NEL, and the Unicode line/paragraph separators.
static LINE_BREAK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\r\n|[\n\r\x0b\x0c\x1c-\x1e\x{85}\x{2028}\x{2029}]").expect("valid regex")
});

/// Splits raw page text into cleaned lines.
///
/// Blank lines are kept as empty strings so line positions stay stable;
/// callers skip them. A trailing line break does not start another line.
#[must_use]
pub fn normalize_page_text(raw: &str) -> Vec<String> {
    let text = raw.replace('\u{a0}', " ");
    let mut pieces: Vec<&str> = LINE_BREAK_RE.split(&text).collect();
    if pieces.last() == Some(&"") {
        pieces.pop();
    }
    pieces.into_iter().map(normalize_line).collect()
}

/// Collapses inner padding in a single line and trims it.
#[must_use]
pub fn normalize_line(line: &str) -> String {
    PADDING_RE.replace_all(line, " ").trim().to_owned()
}

/// Collapses every whitespace run (newlines included) to a single space.
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
