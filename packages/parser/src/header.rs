//! Claim header extraction.
//!
//! Each header field has its own pattern and is searched for
//! independently, so one missing label never hides another. Labels may
//! wrap onto the next line; captured values are whitespace-collapsed.

use std::sync::LazyLock;

use eob_claims_models::{HeaderContext, HeaderField};
use regex::Regex;

use crate::normalize::collapse_whitespace;

/// Pattern for `field`. Group 1 is the value.
const fn header_pattern(field: HeaderField) -> &'static str {
    match field {
        HeaderField::Claim => r"\bClaim\s*:?\s*(T\d{7,})",
        HeaderField::Patient => r"(?s)\bPatient\s+(.+?)\s+Health\s*Plan\b",
        HeaderField::HealthPlan => {
            r"(?s)\bHealth\s*Plan\s+(.+?)\s+(?:Participant|Date\s*Entered)\b"
        }
        HeaderField::Participant => r"(?s)\bParticipant\s+(.+?)\s+Date\s*Entered\b",
        HeaderField::ParticipantId => r"\bParticipant\s*Id\s+([0-9]+)\b",
        HeaderField::DateEntered => r"\bDate\s*Entered\s+(\d{2}/\d{2}/\d{4})\b",
        HeaderField::DatePaid => r"\bDate\s*Paid\s+(\d{2}/\d{2}/\d{4})\b",
        HeaderField::Provider => r"\bProvider\s+(.+?)(?:\n|$)",
    }
}

static HEADER_PATTERNS: LazyLock<Vec<(HeaderField, Regex)>> = LazyLock::new(|| {
    HeaderField::ALL
        .into_iter()
        .map(|field| {
            let re = Regex::new(header_pattern(field)).expect("valid regex");
            (field, re)
        })
        .collect()
});

/// Extracts every header field found in `page_text` (the page's cleaned
/// lines joined with `\n`).
///
/// Only a present [`HeaderField::Claim`] means the page carries its own
/// header; see [`HeaderContext::has_claim`].
#[must_use]
pub fn extract_header_fields(page_text: &str) -> HeaderContext {
    let mut header = HeaderContext::default();

    for (field, re) in HEADER_PATTERNS.iter() {
        let value = re
            .captures(page_text)
            .and_then(|caps| caps.get(1))
            .map(|m| collapse_whitespace(m.as_str()));
        if let Some(value) = &value {
            log::trace!("{field}: {value}");
        }
        header.set(*field, value);
    }

    header
}
