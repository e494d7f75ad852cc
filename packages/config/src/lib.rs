//! Configuration for fileops runs.
//!
//! This crate provides the validated [`RunConfig`] a batch run is built from,
//! the [`Operation`] it performs, and loading of optional TOML defaults.
//!
//! # Example
//!
//! ```rust,ignore
//! use fileops_config::{RunConfig, load_toml_config};
//!
//! let defaults = load_toml_config(Path::new("fileops.toml"))?;
//! let config = RunConfig::new(
//!     "move",
//!     PathBuf::from("/data/inbox/"),
//!     Some("*.md".to_string()),
//!     PathBuf::from("/data/archive"),
//!     defaults.threads.unwrap_or(1),
//! )?;
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod toml_loader;
mod types;

pub use error::ConfigError;
pub use toml_loader::load_toml_config;
pub use types::{FileConfig, Operation, RunConfig};
