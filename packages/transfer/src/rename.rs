//! Single-file move.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::fs;
use std::io;
use std::path::Path;

use crate::copy::{copy_file_with_reflink, preserve_times};
use crate::error::{TransferError, precheck};

/// Move a single file to an explicit target path.
///
/// Renames when possible. When the target is on another filesystem the file is
/// copied and the source removed afterwards.
///
/// # Arguments
///
/// * `source` - Source file path
/// * `target` - Target file path (not a directory to move into)
///
/// # Errors
///
/// * If the source does not exist
/// * If the target's parent directory does not exist
/// * If source and target are the same file
/// * If the rename, copy or removal fails
pub fn move_file(source: &Path, target: &Path) -> Result<(), TransferError> {
    log::debug!("Moving file: {} -> {}", source.display(), target.display());

    precheck(source, target)?;

    match fs::rename(source, target) {
        Ok(()) => {
            log::trace!("Renamed {} -> {}", source.display(), target.display());
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
            log::debug!(
                "{} is on another filesystem, copying instead",
                target.display()
            );
            copy_file_with_reflink(source, target)?;
            preserve_times(source, target);
            fs::remove_file(source).map_err(|e| TransferError::from_io(source, target, e))
        }
        Err(e) => Err(TransferError::from_io(source, target, e)),
    }
}
