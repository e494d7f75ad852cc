//! Source and destination existence checks.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::Path;

/// Check that both the source and the destination exist.
///
/// Logs one error line for the first missing path. The destination is not
/// looked at when the source is already missing.
#[must_use]
pub fn check_paths_exist(source: &Path, destination: &Path) -> bool {
    path_exists(source) && path_exists(destination)
}

fn path_exists(path: &Path) -> bool {
    let exists = path.exists();
    if !exists {
        log::error!("{} does not exist.", path.display());
    }
    exists
}
