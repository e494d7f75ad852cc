//! Progress bar utilities for the CLI.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar factory for batch runs.
pub struct ProgressManager {
    enabled: bool,
}

impl ProgressManager {
    /// Create a new progress manager.
    #[must_use]
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Create a progress bar counting processed files.
    ///
    /// If progress is disabled, returns a hidden progress bar.
    #[must_use]
    pub fn create_file_bar(&self, label: &str, total: u64) -> ProgressBar {
        if !self.enabled {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(total);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("  {prefix:<10} [{bar:25.green/dim}] {pos}/{len} files")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("━━─"),
        );
        pb.set_prefix(label.to_string());
        pb
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_bar_is_hidden() {
        let bar = ProgressManager::new(false).create_file_bar("copy", 10);
        assert!(bar.is_hidden());
    }

    #[test]
    fn test_bar_tracks_length() {
        let bar = ProgressManager::new(true).create_file_bar("move", 3);
        bar.inc(2);
        assert_eq!(bar.length(), Some(3));
        assert_eq!(bar.position(), 2);
    }
}
