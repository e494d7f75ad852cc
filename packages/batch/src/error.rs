//! Error types for batch runs.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a whole batch run.
///
/// Failures of individual files are not errors at this level; they are
/// reported as [`crate::Outcome::Failure`].
#[derive(Debug, Error)]
pub enum BatchError {
    /// A listed file does not live below the source base.
    #[error("{} is not inside source {}", file.display(), source_root.display())]
    OutsideSource {
        /// The offending file.
        file: PathBuf,
        /// The source base it was expected under.
        source_root: PathBuf,
    },

    /// Failed to create a destination subdirectory.
    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDir {
        /// The directory path.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to start the worker pool.
    #[error("Failed to start worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
