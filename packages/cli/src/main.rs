//! fileops CLI entry point.
//!
//! Copies or moves files from a source to a destination folder in parallel,
//! optionally selecting them with a glob mask.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod args;
mod output;
mod progress;

use std::env;
use std::path;

use clap::Parser;
use log::LevelFilter;

use args::Args;
use fileops_batch::{
    BatchOptions, check_paths_exist, create_destination_dirs, execute_batch, map_destinations,
};
use fileops_config::{ConfigError, FileConfig, RunConfig, load_toml_config};
use fileops_glob::{collect_source_files, split_path_and_mask};
use progress::ProgressManager;

fn main() {
    let args = Args::parse();

    let file_config = match args.config.as_deref().map(load_toml_config).transpose() {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            output::print_error(&e.to_string());
            std::process::exit(1);
        }
    };

    if let Err(e) = init_logging(&args, &file_config) {
        output::print_error(&e.to_string());
        std::process::exit(1);
    }

    if let Err(e) = run(&args, &file_config) {
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}

/// Install the logger once, before any worker thread exists.
///
/// `--verbose` wins over the config file level; `RUST_LOG` directives are
/// applied on top of either.
fn init_logging(args: &Args, file_config: &FileConfig) -> Result<(), ConfigError> {
    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        file_config.log_level_filter()?.unwrap_or(LevelFilter::Info)
    };

    let mut builder = pretty_env_logger::formatted_builder();
    builder.filter_level(level);
    if let Ok(filters) = env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.init();

    Ok(())
}

/// Main application logic.
fn run(args: &Args, file_config: &FileConfig) -> Result<(), Box<dyn std::error::Error>> {
    let source = path::absolute(&args.source)?;
    let path_spec = split_path_and_mask(&source.to_string_lossy());
    let threads = args.threads.or(file_config.threads).unwrap_or(1);

    let config = RunConfig::new(
        &args.operation,
        path_spec.base,
        path_spec.mask,
        args.destination.clone(),
        threads,
    )?;

    if !check_paths_exist(&config.source, &config.destination) {
        return Err("source or destination path does not exist".into());
    }

    let options = BatchOptions::from_run_config(&config);
    let files = collect_source_files(&config.source, config.mask.as_deref())?;
    let mapping = map_destinations(&config.source, &files, &config.destination)?;
    create_destination_dirs(&mapping)?;

    log::info!(
        "{} files to {}",
        config.operation,
        config.destination.display()
    );

    let progress_mgr = ProgressManager::new(args.progress);
    let bar = progress_mgr.create_file_bar(config.operation.name(), mapping.len() as u64);

    let summary = execute_batch(&mapping, &options, |_, _| bar.inc(1))?;

    bar.finish_and_clear();

    if summary.error_count > 0 {
        output::print_warning(&format!(
            "{} of {} files failed, see the log above",
            summary.error_count,
            summary.total()
        ));
    }

    Ok(())
}
