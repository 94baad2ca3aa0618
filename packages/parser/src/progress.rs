//! Page progress reporting.
//!
//! The extraction driver reports one unit per processed page through
//! [`ProgressCallback`]. Rendering lives upstream (the CLI draws an
//! `indicatif` bar); library callers and tests use [`NullProgress`].

use std::sync::Arc;

/// Receives progress updates while a document is processed.
pub trait ProgressCallback: Send + Sync {
    /// Sets the number of pages to process.
    fn set_total(&self, total: u64);

    /// Advances by `delta` pages.
    fn inc(&self, delta: u64);

    /// Replaces the status message.
    fn set_message(&self, msg: String);

    /// Marks the run as complete.
    fn finish(&self, msg: String);
}

/// Discards every update.
pub struct NullProgress;

impl ProgressCallback for NullProgress {
    fn set_total(&self, _total: u64) {}
    fn inc(&self, _delta: u64) {}
    fn set_message(&self, _msg: String) {}
    fn finish(&self, _msg: String) {}
}

/// Returns a shared [`NullProgress`].
#[must_use]
pub fn null_progress() -> Arc<dyn ProgressCallback> {
    Arc::new(NullProgress)
}
