//! Source path resolution and file enumeration for fileops.
//!
//! This crate turns a raw source argument into a concrete list of files:
//!
//! * Splitting a raw path at its first `*` into a base path and a glob mask
//! * Expanding a mask under a base directory using the `glob` crate
//! * Walking whole trees in parallel using `jwalk` when no filter applies
//!
//! # Example
//!
//! ```rust,ignore
//! use fileops_glob::{collect_source_files, split_path_and_mask};
//!
//! let path_spec = split_path_and_mask("/home/user/projects/*.md");
//! let files = collect_source_files(&path_spec.base, path_spec.mask.as_deref())?;
//! println!("{} markdown files", files.len());
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod enumerate;
mod error;
mod mask;

pub use enumerate::{collect_source_files, list_files};
pub use error::GlobError;
pub use mask::{FULL_TREE_MASK, PathSpec, is_full_tree_mask, split_path_and_mask};
