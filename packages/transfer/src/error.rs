//! Error types for transfer operations.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Coarse classification of a failed transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// The source no longer exists.
    NotFound,
    /// Access to the source or target was denied.
    PermissionDenied,
    /// Source and target are the same file.
    SameFile,
    /// The target's parent directory does not exist.
    DestinationParentMissing,
    /// Any other I/O failure.
    Io,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "not found"),
            Self::PermissionDenied => write!(f, "permission denied"),
            Self::SameFile => write!(f, "same file"),
            Self::DestinationParentMissing => write!(f, "destination parent missing"),
            Self::Io => write!(f, "i/o error"),
        }
    }
}

/// Errors that can occur while transferring a single file.
#[derive(Debug, thiserror::Error)]
pub enum TransferError {
    /// Source file does not exist.
    #[error("No such file: {}", path.display())]
    SourceNotFound {
        /// The missing source path.
        path: PathBuf,
    },

    /// Access was denied.
    #[error("Permission denied: {}: {io_error}", path.display())]
    PermissionDenied {
        /// The path access was denied to.
        path: PathBuf,
        /// The underlying IO error.
        io_error: io::Error,
    },

    /// Source and target refer to the same file.
    #[error("{} and {} are the same file", source_path.display(), target_path.display())]
    SameFile {
        /// Source file path.
        source_path: PathBuf,
        /// Target file path.
        target_path: PathBuf,
    },

    /// Target directory does not exist.
    #[error("No such directory: {}", path.display())]
    DestinationParentMissing {
        /// The missing parent directory.
        path: PathBuf,
    },

    /// Any other failure of the underlying transfer.
    #[error("Failed to transfer {} to {}: {io_error}", source_path.display(), target_path.display())]
    Io {
        /// Source file path.
        source_path: PathBuf,
        /// Target file path.
        target_path: PathBuf,
        /// The underlying IO error.
        io_error: io::Error,
    },
}

impl TransferError {
    /// The failure classification of this error.
    #[must_use]
    pub const fn kind(&self) -> FailureKind {
        match self {
            Self::SourceNotFound { .. } => FailureKind::NotFound,
            Self::PermissionDenied { .. } => FailureKind::PermissionDenied,
            Self::SameFile { .. } => FailureKind::SameFile,
            Self::DestinationParentMissing { .. } => FailureKind::DestinationParentMissing,
            Self::Io { .. } => FailureKind::Io,
        }
    }

    /// Classify an IO error raised while transferring `source` to `target`.
    pub(crate) fn from_io(source: &Path, target: &Path, io_error: io::Error) -> Self {
        match io_error.kind() {
            io::ErrorKind::PermissionDenied => Self::PermissionDenied {
                path: source.to_path_buf(),
                io_error,
            },
            io::ErrorKind::NotFound if !source.exists() => Self::SourceNotFound {
                path: source.to_path_buf(),
            },
            io::ErrorKind::NotFound => Self::DestinationParentMissing {
                path: parent_of(target).to_path_buf(),
            },
            _ => Self::Io {
                source_path: source.to_path_buf(),
                target_path: target.to_path_buf(),
                io_error,
            },
        }
    }
}

/// The directory a target file will be created in.
pub(crate) fn parent_of(target: &Path) -> &Path {
    match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Checks shared by every transfer, run before touching the filesystem.
pub(crate) fn precheck(source: &Path, target: &Path) -> Result<(), TransferError> {
    if source.symlink_metadata().is_err() {
        return Err(TransferError::SourceNotFound {
            path: source.to_path_buf(),
        });
    }

    let parent = parent_of(target);
    if !parent.is_dir() {
        return Err(TransferError::DestinationParentMissing {
            path: parent.to_path_buf(),
        });
    }

    if is_same_file(source, target) {
        return Err(TransferError::SameFile {
            source_path: source.to_path_buf(),
            target_path: target.to_path_buf(),
        });
    }

    Ok(())
}

/// Whether both paths resolve to one file, hard links included.
fn is_same_file(source: &Path, target: &Path) -> bool {
    #[cfg(target_family = "unix")]
    {
        use std::os::unix::fs::MetadataExt;

        match (source.metadata(), target.metadata()) {
            (Ok(a), Ok(b)) => a.dev() == b.dev() && a.ino() == b.ino(),
            _ => false,
        }
    }

    #[cfg(not(target_family = "unix"))]
    {
        match (source.canonicalize(), target.canonicalize()) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }
}
