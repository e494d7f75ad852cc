//! Outcome counting for batch runs.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::sync::atomic::{AtomicU64, Ordering};

/// Final counts of a batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Files transferred successfully.
    pub success_count: u64,
    /// Files that failed.
    pub error_count: u64,
    /// Whether the source directory was removed after the run.
    pub source_removed: bool,
}

impl BatchSummary {
    /// Total number of files attempted.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.success_count + self.error_count
    }
}

/// Thread-safe outcome counter using atomics.
#[derive(Debug, Default)]
pub struct BatchTally {
    succeeded: AtomicU64,
    failed: AtomicU64,
}

impl BatchTally {
    /// Create a new tally with both counters at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one successful file.
    pub fn record_success(&self) {
        self.succeeded.fetch_add(1, Ordering::SeqCst);
    }

    /// Count one failed file.
    pub fn record_failure(&self) {
        self.failed.fetch_add(1, Ordering::SeqCst);
    }

    /// Successful files so far.
    #[must_use]
    pub fn succeeded(&self) -> u64 {
        self.succeeded.load(Ordering::SeqCst)
    }

    /// Failed files so far.
    #[must_use]
    pub fn failed(&self) -> u64 {
        self.failed.load(Ordering::SeqCst)
    }

    /// Get a summary snapshot.
    #[must_use]
    pub fn snapshot(&self) -> BatchSummary {
        BatchSummary {
            success_count: self.succeeded(),
            error_count: self.failed(),
            source_removed: false,
        }
    }
}
