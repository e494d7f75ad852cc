//! CLI argument definitions.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use clap::Parser;
use clap::builder::PossibleValuesParser;
use fileops_config::Operation;

/// CLI arguments for fileops.
#[derive(Debug, Parser)]
#[command(
    name = "fileops",
    about = "A utility for performing file operations using multithreading",
    version
)]
pub struct Args {
    /// Operation to be performed on files.
    #[arg(long, value_parser = PossibleValuesParser::new(Operation::ALL.map(Operation::name)))]
    pub operation: String,

    /// The path to the source folder or file.
    ///
    /// Files matching a mask can be selected by appending it to the path:
    ///
    ///   /home/user/projects/       - select all files
    ///   /home/user/projects/*.md   - select files with the .md extension only
    #[arg(long = "from", value_name = "SOURCE", verbatim_doc_comment)]
    pub source: PathBuf,

    /// The destination folder path.
    #[arg(long = "to", value_name = "DESTINATION")]
    pub destination: PathBuf,

    /// The number of threads used to perform the operation on files.
    ///
    /// Defaults to the config file value, or 1. A single-file source always uses 1 thread.
    #[arg(long, value_parser = clap::value_parser!(i64).range(1..), allow_hyphen_values = true)]
    pub threads: Option<i64>,

    /// TOML file with default settings.
    #[arg(long = "config", short = 'c', value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Show a progress bar while files are processed.
    #[arg(long)]
    pub progress: bool,

    /// Enable verbose output.
    #[arg(long, short = 'v')]
    pub verbose: bool,
}
