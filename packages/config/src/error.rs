//! Error types for configuration.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while building a run configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The operation name is not one of the supported operations.
    #[error("Unknown operation {0:?} (expected one of: copy, move)")]
    UnknownOperation(String),

    /// The thread count is not a positive integer.
    #[error("Invalid thread count {0}: the minimum number of threads is 1")]
    InvalidThreadCount(i64),

    /// The log level is not a recognized level name.
    #[error("Invalid log level {0:?} (expected one of: off, error, warn, info, debug, trace)")]
    InvalidLogLevel(String),

    /// Failed to read configuration file.
    #[error("Failed to read config file {}: {source}", path.display())]
    ReadError {
        /// Path to the file that couldn't be read.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML configuration.
    #[error("Failed to parse TOML config {}: {source}", path.display())]
    TomlParseError {
        /// Path to the file that couldn't be parsed.
        path: PathBuf,
        /// The underlying TOML error.
        #[source]
        source: toml::de::Error,
    },
}
