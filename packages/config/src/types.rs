//! Configuration types for fileops.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::fmt;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::str::FromStr;

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// The operation applied to every selected file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Copy files, leaving the source intact.
    Copy,
    /// Move files, removing them from the source.
    Move,
}

impl Operation {
    /// Every supported operation.
    pub const ALL: [Self; 2] = [Self::Copy, Self::Move];

    /// The name the operation is selected by.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Copy => "copy",
            Self::Move => "move",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| ConfigError::UnknownOperation(s.to_string()))
    }
}

/// A validated configuration for one batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Operation to perform.
    pub operation: Operation,
    /// Source base path (file or directory).
    pub source: PathBuf,
    /// Optional glob mask applied below `source`.
    pub mask: Option<String>,
    /// Existing destination directory.
    pub destination: PathBuf,
    /// Number of worker threads.
    pub threads: NonZeroUsize,
}

impl RunConfig {
    /// Build a run configuration from raw values.
    ///
    /// # Errors
    ///
    /// * If `operation` is not `copy` or `move`
    /// * If `threads` is less than 1
    pub fn new(
        operation: &str,
        source: PathBuf,
        mask: Option<String>,
        destination: PathBuf,
        threads: i64,
    ) -> Result<Self, ConfigError> {
        let operation = operation.parse()?;
        let threads = usize::try_from(threads)
            .ok()
            .and_then(NonZeroUsize::new)
            .ok_or(ConfigError::InvalidThreadCount(threads))?;

        Ok(Self {
            operation,
            source,
            mask,
            destination,
            threads,
        })
    }

    /// Thread count to run with. A single-file source always gets one thread.
    #[must_use]
    pub const fn effective_threads(&self, source_is_file: bool) -> NonZeroUsize {
        if source_is_file {
            NonZeroUsize::MIN
        } else {
            self.threads
        }
    }
}

/// Defaults loaded from a configuration file.
///
/// Command-line values take precedence over everything here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Default number of worker threads.
    #[serde(default)]
    pub threads: Option<i64>,

    /// Default log level (`off`, `error`, `warn`, `info`, `debug`, `trace`).
    #[serde(default)]
    pub log_level: Option<String>,
}

impl FileConfig {
    /// Parse the configured log level, if any.
    ///
    /// # Errors
    ///
    /// * If the level is not a recognized level name
    pub fn log_level_filter(&self) -> Result<Option<LevelFilter>, ConfigError> {
        self.log_level
            .as_deref()
            .map(|level| {
                level
                    .parse::<LevelFilter>()
                    .map_err(|_| ConfigError::InvalidLogLevel(level.to_string()))
            })
            .transpose()
    }
}
