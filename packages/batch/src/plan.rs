//! Destination mapping - pair every source file with its mirrored target.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::BatchError;

/// Source → destination pairs for one run, plus the subfolders they need.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathMapping {
    destination_root: PathBuf,
    pairs: BTreeMap<PathBuf, PathBuf>,
    directories: BTreeSet<PathBuf>,
}

impl PathMapping {
    /// The destination directory every target lives under.
    #[must_use]
    pub fn destination_root(&self) -> &Path {
        &self.destination_root
    }

    /// Source → destination pairs.
    #[must_use]
    pub const fn pairs(&self) -> &BTreeMap<PathBuf, PathBuf> {
        &self.pairs
    }

    /// Destination subdirectories the targets need, excluding the root.
    #[must_use]
    pub const fn directories(&self) -> &BTreeSet<PathBuf> {
        &self.directories
    }

    /// Destination for a given source file.
    #[must_use]
    pub fn destination_of(&self, source: &Path) -> Option<&Path> {
        self.pairs.get(source).map(PathBuf::as_path)
    }

    /// Number of mapped files.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether no files are mapped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Map every source file to its place under `destination`.
///
/// The path of each file relative to `source_root` is recreated under
/// `destination`. When `source_root` is the file itself, the file goes
/// straight into `destination` under its own name.
///
/// # Arguments
///
/// * `source_root` - Base the files were listed from
/// * `files` - Files to map
/// * `destination` - Destination directory
///
/// # Errors
///
/// * If a file is not inside `source_root`
///
/// # Example
///
/// ```text
/// /home/user/projects/            - source root
/// /home/user/projects/sub/a.txt   - source file
/// /backup/                        - destination
/// /backup/sub/a.txt               - mapped destination
/// ```
pub fn map_destinations(
    source_root: &Path,
    files: &[PathBuf],
    destination: &Path,
) -> Result<PathMapping, BatchError> {
    let mut pairs = BTreeMap::new();
    let mut directories = BTreeSet::new();

    for file in files {
        let relative = file
            .strip_prefix(source_root)
            .map_err(|_| BatchError::OutsideSource {
                file: file.clone(),
                source_root: source_root.to_path_buf(),
            })?;

        let target = if relative.as_os_str().is_empty() {
            match file.file_name() {
                Some(name) => destination.join(name),
                None => destination.to_path_buf(),
            }
        } else {
            destination.join(relative)
        };

        if let Some(parent) = target.parent().filter(|p| *p != destination) {
            directories.insert(parent.to_path_buf());
        }

        pairs.insert(file.clone(), target);
    }

    log::debug!(
        "Mapped {} files into {} ({} subdirectories)",
        pairs.len(),
        destination.display(),
        directories.len()
    );

    Ok(PathMapping {
        destination_root: destination.to_path_buf(),
        pairs,
        directories,
    })
}

/// Create every destination subdirectory a mapping needs.
///
/// Directories that already exist are left alone.
///
/// # Errors
///
/// * If a directory cannot be created
pub fn create_destination_dirs(mapping: &PathMapping) -> Result<(), BatchError> {
    for dir in mapping.directories() {
        log::trace!("Creating directory {}", dir.display());
        fs::create_dir_all(dir).map_err(|e| BatchError::CreateDir {
            path: dir.clone(),
            source: e,
        })?;
    }

    Ok(())
}
