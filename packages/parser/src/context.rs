//! Claim context tracking and row stamping.
//!
//! Continuation pages of a claim repeat the service table but not the
//! header, so the last header seen stays current until a page brings a
//! new claim id. A new header replaces the old one wholesale; fields it
//! lacks are blank, never inherited.

use eob_claims_models::{HeaderContext, StampedRow};

use crate::row::parse_service_row;

/// What a page did to the current claim context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextChange {
    /// The page carried a header that replaced the context.
    Replaced,
    /// The page had no header; the previous context still applies.
    Retained,
    /// No header has been seen yet.
    Unset,
}

/// Computes the context in effect for a page from the previous context
/// and the header fields extracted from the page.
#[must_use]
pub fn next_context(
    current: Option<HeaderContext>,
    page_header: HeaderContext,
) -> (Option<HeaderContext>, ContextChange) {
    if page_header.has_claim() {
        (Some(page_header), ContextChange::Replaced)
    } else if current.is_some() {
        (current, ContextChange::Retained)
    } else {
        (None, ContextChange::Unset)
    }
}

/// Parses finalized rows and stamps each with `context`.
///
/// Without a context nothing is stamped: rows that precede the first
/// header are dropped rather than attributed to an unknown claim.
#[must_use]
pub fn stamp_rows<S: AsRef<str>>(context: Option<&HeaderContext>, rows: &[S]) -> Vec<StampedRow> {
    let Some(context) = context else {
        return Vec::new();
    };

    rows.iter()
        .filter_map(|row| {
            let parsed = parse_service_row(row.as_ref());
            if parsed.is_none() {
                log::warn!("Finalized row no longer matches row shape: {}", row.as_ref());
            }
            parsed
        })
        .map(|row| StampedRow::new(context, row))
        .collect()
}
