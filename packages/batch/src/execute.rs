//! Parallel execution of a mapped batch.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::fs;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use fileops_config::{Operation, RunConfig};
use fileops_glob::is_full_tree_mask;
use fileops_transfer::{FailureKind, TransferError, copy_file, move_file};
use rayon::prelude::*;

use crate::error::BatchError;
use crate::plan::PathMapping;
use crate::tally::{BatchSummary, BatchTally};

/// Options for executing a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOptions {
    /// Operation applied to every pair.
    pub operation: Operation,
    /// Worker pool size.
    pub threads: NonZeroUsize,
    /// Source base the mapping was built from.
    pub source_root: PathBuf,
    /// Mask the files were selected with.
    pub mask: Option<String>,
}

impl BatchOptions {
    /// Derive batch options from a run configuration.
    ///
    /// The thread count drops to one when the source is a single file.
    #[must_use]
    pub fn from_run_config(config: &RunConfig) -> Self {
        Self {
            operation: config.operation,
            threads: config.effective_threads(config.source.is_file()),
            source_root: config.source.clone(),
            mask: config.mask.clone(),
        }
    }
}

/// Result of transferring one file.
#[derive(Debug)]
pub enum Outcome {
    /// The file was transferred.
    Success,
    /// The file could not be transferred.
    Failure(TransferError),
}

impl Outcome {
    /// Whether the transfer succeeded.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Classification of the failure, if any.
    #[must_use]
    pub const fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            Self::Success => None,
            Self::Failure(e) => Some(e.kind()),
        }
    }
}

/// Whether a finished run should remove its source directory.
///
/// Only a move with no failures over the whole tree qualifies. The mask check
/// is syntactic: it must be absent or exactly `**/*`.
#[must_use]
pub fn should_remove_source(operation: Operation, error_count: u64, mask: Option<&str>) -> bool {
    operation == Operation::Move && error_count == 0 && is_full_tree_mask(mask)
}

/// Run the batch operation over every pair in a mapping.
///
/// Each pair is transferred independently on a pool of `options.threads`
/// workers. Outcomes are logged and passed to `on_outcome` in completion
/// order. After every pair has finished, the source directory is removed if
/// [`should_remove_source`] allows it.
///
/// Destination subdirectories must already exist, see
/// [`crate::create_destination_dirs`].
///
/// # Arguments
///
/// * `mapping` - Source → destination pairs
/// * `options` - Operation, pool size and source selection
/// * `on_outcome` - Called once per pair from the worker that ran it
///
/// # Errors
///
/// * If the worker pool cannot be started
pub fn execute_batch<F>(
    mapping: &PathMapping,
    options: &BatchOptions,
    on_outcome: F,
) -> Result<BatchSummary, BatchError>
where
    F: Fn(&Path, &Outcome) + Sync,
{
    log::debug!(
        "Running {} on {} files with {} threads",
        options.operation,
        mapping.len(),
        options.threads
    );

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(options.threads.get())
        .thread_name(|i| format!("fileops-worker-{i}"))
        .build()?;

    let tally = BatchTally::new();
    let tally_ref = &tally;
    let on_outcome_ref = &on_outcome;

    pool.install(|| {
        mapping.pairs().par_iter().for_each(|(source, target)| {
            let outcome = run_unit(options.operation, source, target);

            match &outcome {
                Outcome::Success => {
                    log::info!("success: {}", source.display());
                    tally_ref.record_success();
                }
                Outcome::Failure(e) => {
                    log::error!("error: {} - {e}", source.display());
                    tally_ref.record_failure();
                }
            }

            on_outcome_ref(source.as_path(), &outcome);
        });
    });

    let mut summary = tally.snapshot();

    if should_remove_source(options.operation, summary.error_count, options.mask.as_deref())
        && options.source_root.is_dir()
    {
        summary.source_removed =
            remove_source_root(&options.source_root, mapping.destination_root());
    }

    log::info!("Success {} files", summary.success_count);
    log::info!("Error {} files", summary.error_count);

    Ok(summary)
}

/// Remove the emptied source directory unless the destination lives below it.
fn remove_source_root(source_root: &Path, destination_root: &Path) -> bool {
    if is_within(destination_root, source_root) {
        log::warn!(
            "Keeping source directory {}: it contains the destination {}",
            source_root.display(),
            destination_root.display()
        );
        return false;
    }

    match fs::remove_dir_all(source_root) {
        Ok(()) => {
            log::debug!("Removed source directory {}", source_root.display());
            true
        }
        Err(e) => {
            log::error!(
                "Failed to remove source directory {}: {e}",
                source_root.display()
            );
            false
        }
    }
}

fn is_within(path: &Path, root: &Path) -> bool {
    match (path.canonicalize(), root.canonicalize()) {
        (Ok(path), Ok(root)) => path.starts_with(root),
        _ => path.starts_with(root),
    }
}

fn run_unit(operation: Operation, source: &Path, target: &Path) -> Outcome {
    let result = match operation {
        Operation::Copy => copy_file(source, target),
        Operation::Move => move_file(source, target),
    };

    match result {
        Ok(()) => Outcome::Success,
        Err(e) => Outcome::Failure(e),
    }
}
