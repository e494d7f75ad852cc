//! Single-file copy.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::fs;
use std::path::Path;

use crate::error::{TransferError, precheck};

/// Copy a single file to an explicit target path.
///
/// Overwrites the target if it exists. Access and modification times are
/// carried over from the source when the target allows it.
///
/// # Arguments
///
/// * `source` - Source file path
/// * `target` - Target file path (not a directory to copy into)
///
/// # Errors
///
/// * If the source does not exist
/// * If the target's parent directory does not exist
/// * If source and target are the same file
/// * If the copy itself fails
pub fn copy_file(source: &Path, target: &Path) -> Result<(), TransferError> {
    log::debug!("Copying file: {} -> {}", source.display(), target.display());

    precheck(source, target)?;
    copy_file_with_reflink(source, target)?;
    preserve_times(source, target);

    Ok(())
}

/// Copy a single file, trying reflink first then falling back to regular copy.
pub(crate) fn copy_file_with_reflink(source: &Path, target: &Path) -> Result<(), TransferError> {
    // Try reflink first (copy-on-write, instant on APFS/Btrfs/ReFS)
    match reflink_copy::reflink(source, target) {
        Ok(()) => {
            log::trace!("Reflinked {} -> {}", source.display(), target.display());
            Ok(())
        }
        Err(_) => {
            fs::copy(source, target).map_err(|e| TransferError::from_io(source, target, e))?;
            log::trace!("Copied {} -> {}", source.display(), target.display());
            Ok(())
        }
    }
}

/// Carry access and modification times over to the target.
pub(crate) fn preserve_times(source: &Path, target: &Path) {
    let result = source.metadata().and_then(|meta| {
        let times = fs::FileTimes::new()
            .set_accessed(meta.accessed()?)
            .set_modified(meta.modified()?);
        fs::OpenOptions::new()
            .write(true)
            .open(target)?
            .set_times(times)
    });

    if let Err(e) = result {
        log::debug!("Could not preserve times on {}: {e}", target.display());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FailureKind;
    use std::time::{Duration, SystemTime};
    use tempfile::TempDir;

    #[test]
    fn test_copy_file_creates_new() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("source.txt");
        let target = dir.path().join("target.txt");

        fs::write(&source, "hello world").unwrap();

        copy_file(&source, &target).unwrap();

        assert!(source.exists());
        assert_eq!(fs::read_to_string(&target).unwrap(), "hello world");
    }

    #[test]
    fn test_copy_file_overwrites_existing() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("source.txt");
        let target = dir.path().join("target.txt");

        fs::write(&source, "new content").unwrap();
        fs::write(&target, "old content").unwrap();

        copy_file(&source, &target).unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), "new content");
    }

    #[test]
    fn test_copy_file_preserves_modified_time() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("source.txt");
        let target = dir.path().join("target.txt");

        fs::write(&source, "dated").unwrap();
        let past = SystemTime::UNIX_EPOCH + Duration::from_secs(1_000_000_000);
        fs::OpenOptions::new()
            .write(true)
            .open(&source)
            .unwrap()
            .set_modified(past)
            .unwrap();

        copy_file(&source, &target).unwrap();

        assert_eq!(fs::metadata(&target).unwrap().modified().unwrap(), past);
    }

    #[test]
    fn test_copy_file_source_not_found() {
        let dir = TempDir::new().unwrap();

        let err = copy_file(&dir.path().join("missing.txt"), &dir.path().join("t.txt")).unwrap_err();

        assert_eq!(err.kind(), FailureKind::NotFound);
    }

    #[test]
    fn test_copy_file_missing_parent() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("source.txt");
        fs::write(&source, "x").unwrap();

        let err = copy_file(&source, &dir.path().join("no/such/dir/t.txt")).unwrap_err();

        assert_eq!(err.kind(), FailureKind::DestinationParentMissing);
    }

    #[test]
    fn test_copy_file_same_file() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("source.txt");
        fs::write(&source, "x").unwrap();

        let err = copy_file(&source, &source).unwrap_err();

        assert_eq!(err.kind(), FailureKind::SameFile);
        assert_eq!(fs::read_to_string(&source).unwrap(), "x");
    }

    #[cfg(unix)]
    #[test]
    fn test_copy_file_hard_link_keeps_data() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("a.txt");
        let target = dir.path().join("b.txt");
        fs::write(&source, "precious data").unwrap();
        fs::hard_link(&source, &target).unwrap();

        let err = copy_file(&source, &target).unwrap_err();

        assert_eq!(err.kind(), FailureKind::SameFile);
        assert_eq!(fs::read_to_string(&source).unwrap(), "precious data");
    }

    #[test]
    fn test_copy_file_directory_source_fails() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("folder");
        fs::create_dir(&source).unwrap();

        let err = copy_file(&source, &dir.path().join("copied")).unwrap_err();

        assert_eq!(err.kind(), FailureKind::Io);
    }
}
