//! Page-by-page extraction driver.
//!
//! The only state that survives from one page to the next is the current
//! claim header and the partial row still being reconstructed. Both live
//! in [`PipelineState`], which each page consumes and hands back, so a
//! whole document is a fold over its pages.

use std::sync::Arc;

use eob_claims_models::{HeaderContext, StampedRow};

use crate::assembler::assemble_rows;
use crate::context::{ContextChange, next_context, stamp_rows};
use crate::diagnostics::{has_totals_line, page_footer_number};
use crate::header::extract_header_fields;
use crate::legend::is_legend_only_page;
use crate::normalize::normalize_page_text;
use crate::progress::ProgressCallback;

/// State threaded from one page to the next.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineState {
    context: Option<HeaderContext>,
    pending: Option<String>,
    page_index: usize,
}

/// What happened on one page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageOutcome {
    /// Zero-based position of the page in the document.
    pub page_index: usize,
    /// Page number printed in the footer, if found.
    pub printed_page: Option<u64>,
    /// Whether the page carried its own claim header.
    pub has_header: bool,
    /// Whether the page was skipped as a code legend.
    pub legend_only: bool,
    /// Whether the page contains a claim totals line.
    pub totals_seen: bool,
    /// Rows completed on this page.
    pub rows_assembled: usize,
    /// Rows stamped and emitted.
    pub rows_emitted: usize,
    /// Rows dropped because no claim header had been seen yet.
    pub rows_dropped: usize,
    /// Whether a partial row continues onto the next page.
    pub carries_partial_row: bool,
}

/// Result of processing one page.
#[derive(Debug, Clone)]
pub struct PageStep {
    /// State for the next page.
    pub state: PipelineState,
    /// Rows emitted by this page, in line order.
    pub rows: Vec<StampedRow>,
    /// Per-page report, for logging and progress display.
    pub outcome: PageOutcome,
}

impl PipelineState {
    /// State before the first page: no claim header, no partial row.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The claim header currently stamped onto rows.
    #[must_use]
    pub const fn context(&self) -> Option<&HeaderContext> {
        self.context.as_ref()
    }

    /// Partial row text waiting for the next page.
    #[must_use]
    pub fn pending(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    /// Processes one page's raw text (empty for a page without text).
    #[must_use]
    pub fn process_page(self, raw_text: &str) -> PageStep {
        let Self {
            context,
            pending,
            page_index,
        } = self;
        let page_number = page_index + 1;

        let lines = normalize_page_text(raw_text);
        let page_text = lines.join("\n");

        let header = extract_header_fields(&page_text);
        let assembled = assemble_rows(&lines, pending.clone());

        let mut outcome = PageOutcome {
            page_index,
            printed_page: page_footer_number(&lines),
            has_header: header.has_claim(),
            totals_seen: has_totals_line(&page_text),
            rows_assembled: assembled.rows.len(),
            ..PageOutcome::default()
        };

        if is_legend_only_page(&page_text, assembled.rows.len()) {
            log::debug!("Page {page_number}: code legend, skipping");
            outcome.legend_only = true;
            outcome.carries_partial_row = pending.is_some();
            return PageStep {
                state: Self {
                    context,
                    pending,
                    page_index: page_number,
                },
                rows: Vec::new(),
                outcome,
            };
        }

        let (context, change) = next_context(context, header);
        match change {
            ContextChange::Replaced => log::debug!(
                "Page {page_number}: claim header {}",
                context
                    .as_ref()
                    .and_then(|c| c.claim.as_deref())
                    .unwrap_or_default()
            ),
            ContextChange::Retained => {
                log::debug!("Page {page_number}: no header, keeping current claim");
            }
            ContextChange::Unset => log::debug!("Page {page_number}: no claim header seen yet"),
        }

        let rows = stamp_rows(context.as_ref(), &assembled.rows);
        outcome.rows_emitted = rows.len();
        outcome.rows_dropped = assembled.rows.len().saturating_sub(rows.len());
        outcome.carries_partial_row = assembled.pending.is_some();

        if change == ContextChange::Unset && outcome.rows_dropped > 0 {
            log::debug!(
                "Page {page_number}: dropped {} row(s) found before any claim header",
                outcome.rows_dropped
            );
        }
        if outcome.totals_seen {
            log::debug!("Page {page_number}: claim totals line");
        }
        if outcome.carries_partial_row {
            log::debug!("Page {page_number}: partial row continues on next page");
        }
        log::debug!(
            "Page {page_number} (printed {:?}): {} row(s) emitted",
            outcome.printed_page,
            outcome.rows_emitted
        );

        PageStep {
            state: Self {
                context,
                pending: assembled.pending,
                page_index: page_number,
            },
            rows,
            outcome,
        }
    }

    /// Ends the document. A row still being reconstructed never completed
    /// its shape and is discarded.
    pub fn finish(self) {
        if let Some(pending) = self.pending {
            log::debug!("Discarding unfinished row at end of document: {pending}");
        }
    }
}

/// Running totals over a document's [`PageOutcome`]s.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct ExtractionSummary {
    pages: usize,
    header_pages: usize,
    legend_pages: usize,
    rows_emitted: usize,
    rows_dropped: usize,
}

impl ExtractionSummary {
    const fn record(&mut self, outcome: &PageOutcome) {
        self.pages += 1;
        if outcome.has_header && !outcome.legend_only {
            self.header_pages += 1;
        }
        if outcome.legend_only {
            self.legend_pages += 1;
        }
        self.rows_emitted += outcome.rows_emitted;
        self.rows_dropped += outcome.rows_dropped;
    }
}

/// Extracts every stamped service row from a document's pages, in order.
///
/// `progress` is advanced once per page, and its message names the claim
/// whose rows are being emitted.
pub fn extract_claims<I, S>(pages: I, progress: &Arc<dyn ProgressCallback>) -> Vec<StampedRow>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let (state, rows, summary) = pages.into_iter().fold(
        (PipelineState::new(), Vec::new(), ExtractionSummary::default()),
        |(state, mut rows, mut summary), page| {
            let step = state.process_page(page.as_ref());
            summary.record(&step.outcome);

            let new_claim = (step.outcome.has_header && !step.outcome.legend_only)
                .then(|| step.state.context().and_then(|c| c.claim.as_deref()))
                .flatten();
            if let Some(claim) = new_claim {
                progress.set_message(format!("Claim {claim}"));
            }
            rows.extend(step.rows);
            progress.inc(1);

            (step.state, rows, summary)
        },
    );
    state.finish();

    log::info!(
        "Extracted {} service line(s) from {} page(s): {} claim header page(s), \
         {} legend page(s) skipped, {} row(s) dropped before any claim header",
        summary.rows_emitted,
        summary.pages,
        summary.header_pages,
        summary.legend_pages,
        summary.rows_dropped
    );
    rows
}
