#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Service line reconstruction for printed benefits statements.
//!
//! Input is the text of each page, in order. Output is one
//! [`StampedRow`](eob_claims_models::StampedRow) per billed service line,
//! carrying the claim header that applies to it. Per page:
//!
//! 1. [`normalize`] cleans the raw text into lines.
//! 2. [`header`] looks for claim header fields.
//! 3. [`assembler`] rebuilds rows, resuming any partial row left by the
//!    previous page.
//! 4. [`legend`] pages are skipped without touching any state.
//! 5. [`context`] replaces or keeps the current claim header and stamps
//!    the page's rows with it.
//!
//! [`pipeline`] threads the claim header and partial row through the
//! pages as an explicit [`PipelineState`].

pub mod assembler;
pub mod context;
pub mod diagnostics;
pub mod header;
pub mod legend;
pub mod money;
pub mod normalize;
pub mod pipeline;
pub mod progress;
pub mod row;

pub use pipeline::{PageOutcome, PageStep, PipelineState, extract_claims};
pub use progress::{NullProgress, ProgressCallback, null_progress};
