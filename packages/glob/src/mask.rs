//! Splitting a raw source specification into a base path and a mask.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

/// The mask that selects every file below the base, recursively.
pub const FULL_TREE_MASK: &str = "**/*";

/// A source specification split into its base path and optional mask.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSpec {
    /// Everything before the first `*`.
    pub base: PathBuf,
    /// Everything from the first `*` onward, if there was one.
    pub mask: Option<String>,
}

impl PathSpec {
    /// Whether this path spec targets the whole tree below its base.
    #[must_use]
    pub fn is_full_tree(&self) -> bool {
        is_full_tree_mask(self.mask.as_deref())
    }
}

/// Split a raw source string at its first `*`.
///
/// The text before the `*` becomes the base path, unchanged. The text from the
/// `*` onward (inclusive) becomes the mask. Without a `*` the mask is `None`.
///
/// # Examples
///
/// ```rust
/// use std::path::PathBuf;
/// use fileops_glob::split_path_and_mask;
///
/// let path_spec = split_path_and_mask("/home/user/projects/*.md");
/// assert_eq!(path_spec.base, PathBuf::from("/home/user/projects/"));
/// assert_eq!(path_spec.mask.as_deref(), Some("*.md"));
/// ```
#[must_use]
pub fn split_path_and_mask(raw: &str) -> PathSpec {
    match raw.find('*') {
        Some(index) => PathSpec {
            base: PathBuf::from(&raw[..index]),
            mask: Some(raw[index..].to_string()),
        },
        None => PathSpec {
            base: PathBuf::from(raw),
            mask: None,
        },
    }
}

/// Whether a mask selects the whole tree.
///
/// Only an absent mask or the literal [`FULL_TREE_MASK`] qualify. A different
/// spelling that happens to match everything does not.
#[must_use]
pub fn is_full_tree_mask(mask: Option<&str>) -> bool {
    mask.is_none_or(|m| m == FULL_TREE_MASK)
}
