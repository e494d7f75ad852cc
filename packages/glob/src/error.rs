//! Error types for file enumeration.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while expanding a mask into files.
#[derive(Debug, Error)]
pub enum GlobError {
    /// The mask is not valid glob syntax.
    #[error("Invalid search pattern {pattern:?} in {}: {source}", path.display())]
    InvalidPattern {
        /// The source directory the mask was applied to.
        path: PathBuf,
        /// The offending mask.
        pattern: String,
        /// The underlying pattern error.
        #[source]
        source: glob::PatternError,
    },

    /// The mask is syntactically valid but cannot select any file.
    #[error("Unacceptable search pattern {pattern:?} in {}: {reason}", path.display())]
    InvalidMask {
        /// The source directory the mask was applied to.
        path: PathBuf,
        /// The offending mask.
        pattern: String,
        /// Why the mask was rejected.
        reason: &'static str,
    },
}
