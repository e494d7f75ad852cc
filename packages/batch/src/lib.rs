//! Concurrent batch copy and move engine for fileops.
//!
//! This crate runs one operation over a whole set of files:
//!
//! * Existence validation of the source and destination
//! * Destination mapping that mirrors the source's subfolders
//! * Parallel execution on a bounded `rayon` pool with per-file outcomes
//! * Source cleanup after a complete, fully successful move
//!
//! # Example
//!
//! ```rust,ignore
//! use fileops_batch::{BatchOptions, create_destination_dirs, execute_batch, map_destinations};
//!
//! let mapping = map_destinations(&source, &files, &destination)?;
//! create_destination_dirs(&mapping)?;
//!
//! let summary = execute_batch(&mapping, &options, |source, outcome| {
//!     println!("{}: {}", source.display(), outcome.is_success());
//! })?;
//! println!("{} ok, {} failed", summary.success_count, summary.error_count);
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod execute;
mod plan;
mod tally;
mod validate;

pub use error::BatchError;
pub use execute::{BatchOptions, Outcome, execute_batch, should_remove_source};
pub use plan::{PathMapping, create_destination_dirs, map_destinations};
pub use tally::{BatchSummary, BatchTally};
pub use validate::check_paths_exist;
