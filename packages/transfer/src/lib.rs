//! Single-file copy and move primitives.
//!
//! Each call transfers exactly one file to an explicit target path and either
//! succeeds or returns a classified [`TransferError`]:
//!
//! * Copy-on-write support via `reflink-copy` (APFS, Btrfs, `ReFS`)
//! * Timestamp preservation on copies
//! * Cross-filesystem moves via copy and remove
//!
//! # Example
//!
//! ```rust,ignore
//! use fileops_transfer::{FailureKind, copy_file, move_file};
//!
//! copy_file(source, target)?;
//!
//! if let Err(e) = move_file(source, target) {
//!     assert_eq!(e.kind(), FailureKind::NotFound);
//! }
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod copy;
mod error;
mod rename;

pub use copy::copy_file;
pub use error::{FailureKind, TransferError};
pub use rename::move_file;
