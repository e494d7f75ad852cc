//! Expanding a source path and mask into a list of files.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::{Path, PathBuf, is_separator};

use glob::{MatchOptions, Pattern};

use crate::error::GlobError;
use crate::mask::FULL_TREE_MASK;

/// Wildcards match dotfiles, the way shell-agnostic path globbing does.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Resolve the files a source specification refers to.
///
/// - If `source` is a file: returns just that file, the mask is ignored
/// - Otherwise: returns [`list_files`] for the mask
///
/// # Arguments
///
/// * `source` - Base path of the source specification
/// * `mask` - Optional glob mask relative to `source`
///
/// # Errors
///
/// * If the mask is not a usable glob pattern
pub fn collect_source_files(source: &Path, mask: Option<&str>) -> Result<Vec<PathBuf>, GlobError> {
    if source.is_file() {
        log::debug!("Source is a single file: {}", source.display());
        return Ok(vec![source.to_path_buf()]);
    }

    list_files(source, mask).inspect_err(|e| {
        log::error!("Invalid search pattern in {} path: {e}", source.display());
    })
}

/// List every regular file below `source` that matches `mask`.
///
/// Without a mask, every file in the tree is listed. Directories matched by
/// the mask are left out. A symlink is listed only when it points at a file.
///
/// # Arguments
///
/// * `source` - Directory the mask is applied to
/// * `mask` - Optional glob mask, `**/*` when absent
///
/// # Errors
///
/// * If the mask has invalid wildcard syntax (e.g. `***`)
/// * If the mask cannot select anything below `source` (e.g. `.`)
pub fn list_files(source: &Path, mask: Option<&str>) -> Result<Vec<PathBuf>, GlobError> {
    let mask = mask.unwrap_or(FULL_TREE_MASK);

    validate_mask(source, mask)?;

    if !source.is_dir() {
        log::debug!("Not a directory, nothing to list: {}", source.display());
        return Ok(Vec::new());
    }

    let files = if mask == FULL_TREE_MASK {
        walk_tree(source)
    } else {
        expand_mask(source, mask)?
    };

    log::debug!(
        "Found {} files in {} matching {mask}",
        files.len(),
        source.display()
    );

    Ok(files)
}

fn validate_mask(source: &Path, mask: &str) -> Result<(), GlobError> {
    let invalid_mask = |reason| GlobError::InvalidMask {
        path: source.to_path_buf(),
        pattern: mask.to_string(),
        reason,
    };

    if Path::new(mask).has_root() {
        return Err(invalid_mask("non-relative patterns are unsupported"));
    }

    if !mask.split(is_separator).any(|c| !c.is_empty() && c != ".") {
        return Err(invalid_mask("pattern does not select any entry"));
    }

    Pattern::new(mask).map_err(|e| GlobError::InvalidPattern {
        path: source.to_path_buf(),
        pattern: mask.to_string(),
        source: e,
    })?;

    Ok(())
}

/// Expand a filtered mask with the `glob` crate.
fn expand_mask(source: &Path, mask: &str) -> Result<Vec<PathBuf>, GlobError> {
    let base = PathBuf::from(Pattern::escape(&source.to_string_lossy()));
    let full_pattern = base.join(mask).to_string_lossy().to_string();

    let paths =
        glob::glob_with(&full_pattern, MATCH_OPTIONS).map_err(|e| GlobError::InvalidPattern {
            path: source.to_path_buf(),
            pattern: mask.to_string(),
            source: e,
        })?;

    let mut files = Vec::new();
    for entry in paths {
        match entry {
            Ok(path) if path.is_file() => files.push(path),
            Ok(path) => log::trace!("Skipping non-file match {}", path.display()),
            Err(e) => log::warn!("Skipping unreadable entry {}: {}", e.path().display(), e.error()),
        }
    }

    Ok(files)
}

/// Walk the whole tree in parallel using jwalk.
fn walk_tree(source: &Path) -> Vec<PathBuf> {
    jwalk::WalkDir::new(source)
        .skip_hidden(false)
        .follow_links(false)
        .sort(false)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                log::warn!("Skipping unreadable entry under {}: {e}", source.display());
                None
            }
        })
        .filter(|entry| {
            let file_type = entry.file_type();
            file_type.is_file() || (file_type.is_symlink() && entry.path().is_file())
        })
        .map(|entry| entry.path())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use std::fs;
    use tempfile::TempDir;

    /// Root-level files only.
    fn flat_tree() -> TempDir {
        let dir = TempDir::new().unwrap();
        for name in ["a.md", "b.md", "c.txt", "d.bin", ".hidden", ".env"] {
            fs::write(dir.path().join(name), name).unwrap();
        }
        dir
    }

    /// Root-level files plus two populated subfolders.
    fn nested_tree() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("root.md"), "root").unwrap();
        fs::write(dir.path().join(".env"), "env").unwrap();

        let sub1 = dir.path().join("subfolder_1");
        fs::create_dir(&sub1).unwrap();
        for name in ["notes.md", "data.json", "tool.exe", ".hidden"] {
            fs::write(sub1.join(name), name).unwrap();
        }

        let sub2 = dir.path().join("subfolder_2");
        fs::create_dir_all(sub2.join("deep")).unwrap();
        for name in ["9.exe", "7.exe", "blob.bin"] {
            fs::write(sub2.join(name), name).unwrap();
        }
        fs::write(sub2.join("deep/inner.txt"), "inner").unwrap();

        dir
    }

    fn count(source: &Path, mask: Option<&str>) -> usize {
        list_files(source, mask).unwrap().len()
    }

    #[test]
    fn test_list_files_empty_directory() {
        let dir = TempDir::new().unwrap();

        for mask in [None, Some("*.md"), Some("**"), Some("*/*"), Some("**/*")] {
            assert_eq!(count(dir.path(), mask), 0, "mask {mask:?}");
        }
    }

    #[test]
    fn test_list_files_flat_directory() {
        let dir = flat_tree();

        assert_eq!(count(dir.path(), None), 6);
        assert_eq!(count(dir.path(), Some("**/*")), 6);
        assert_eq!(count(dir.path(), Some("*.md")), 2);
        assert_eq!(count(dir.path(), Some("*.bin")), 1);
        assert_eq!(count(dir.path(), Some("*/*")), 0);
        assert_eq!(count(dir.path(), Some(".hidden")), 1);
    }

    #[test]
    fn test_list_files_trailing_recursive_wildcard_matches_no_files() {
        let dir = nested_tree();
        assert_eq!(count(dir.path(), Some("**")), 0);
    }

    #[test]
    fn test_list_files_nested_directory() {
        let dir = nested_tree();

        assert_eq!(count(dir.path(), None), 10);
        assert_eq!(count(dir.path(), Some("*")), 2);
        assert_eq!(count(dir.path(), Some("*.md")), 1);
        assert_eq!(count(dir.path(), Some("*/*")), 7);
        assert_eq!(count(dir.path(), Some("subfolder_1/*")), 4);
        assert_eq!(count(dir.path(), Some("subfolder_2/*")), 3);
        assert_eq!(count(dir.path(), Some("*/*.exe")), 3);
        assert_eq!(count(dir.path(), Some("**/*.md")), 2);
    }

    #[test]
    fn test_list_files_excludes_directories() {
        let dir = nested_tree();

        let files = list_files(dir.path(), Some("*")).unwrap();
        assert!(files.iter().all(|f| f.is_file()));
        assert!(!files.contains(&dir.path().join("subfolder_1")));
    }

    #[test]
    fn test_list_files_is_restartable() {
        let dir = nested_tree();

        let first: BTreeSet<_> = list_files(dir.path(), None).unwrap().into_iter().collect();
        let second: BTreeSet<_> = list_files(dir.path(), None).unwrap().into_iter().collect();
        assert_eq!(first, second);

        let first: BTreeSet<_> = list_files(dir.path(), Some("*/*")).unwrap().into_iter().collect();
        let second: BTreeSet<_> = list_files(dir.path(), Some("*/*")).unwrap().into_iter().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_list_files_paths_stay_under_source() {
        let dir = nested_tree();

        for mask in [None, Some("*/*.exe")] {
            for file in list_files(dir.path(), mask).unwrap() {
                assert!(file.starts_with(dir.path()), "{} escaped", file.display());
            }
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_list_files_follows_symlink_to_file_only() {
        let dir = TempDir::new().unwrap();
        let outside = TempDir::new().unwrap();
        fs::write(outside.path().join("target.txt"), "t").unwrap();
        std::os::unix::fs::symlink(outside.path().join("target.txt"), dir.path().join("link.txt"))
            .unwrap();
        std::os::unix::fs::symlink(outside.path(), dir.path().join("linked_dir")).unwrap();

        let files = list_files(dir.path(), None).unwrap();
        assert_eq!(files, vec![dir.path().join("link.txt")]);
    }

    #[test]
    fn test_list_files_invalid_wildcards() {
        let dir = TempDir::new().unwrap();

        let err = list_files(dir.path(), Some("***")).unwrap_err();
        assert!(matches!(err, GlobError::InvalidPattern { ref pattern, .. } if pattern == "***"));

        let err = list_files(dir.path(), Some("a**")).unwrap_err();
        assert!(matches!(err, GlobError::InvalidPattern { .. }));
    }

    #[test]
    fn test_list_files_unacceptable_masks() {
        let dir = TempDir::new().unwrap();

        for mask in [".", "", "./", "/abs/*"] {
            let err = list_files(dir.path(), Some(mask)).unwrap_err();
            assert!(matches!(err, GlobError::InvalidMask { .. }), "mask {mask:?}");
        }
    }

    #[test]
    fn test_list_files_escapes_base_path() {
        let dir = TempDir::new().unwrap();
        let base = dir.path().join("odd[name]");
        fs::create_dir(&base).unwrap();
        fs::write(base.join("x.md"), "x").unwrap();

        assert_eq!(count(&base, Some("*.md")), 1);
    }

    #[test]
    fn test_collect_source_files_single_file_ignores_mask() {
        let dir = flat_tree();
        let file = dir.path().join("d.bin");

        for mask in [None, Some("*.md"), Some("**")] {
            assert_eq!(collect_source_files(&file, mask).unwrap(), vec![file.clone()]);
        }
    }

    #[test]
    fn test_collect_source_files_directory() {
        let dir = flat_tree();

        assert_eq!(collect_source_files(dir.path(), None).unwrap().len(), 6);
        assert_eq!(collect_source_files(dir.path(), Some("*.md")).unwrap().len(), 2);
    }

    #[test]
    fn test_collect_source_files_propagates_pattern_errors() {
        let dir = TempDir::new().unwrap();

        assert!(collect_source_files(dir.path(), Some("***")).is_err());
        assert!(collect_source_files(dir.path(), Some(".")).is_err());
    }
}
