//! # rlec Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the top-level commands of the `rlec` CLI and the small
//! helper they share for running a file job.
//!
//! ## Commands
//!
//! - `compress`: Encode a file into the textual run-length format
//! - `decompress`: Expand a run-length encoded file back to its original bytes
//! - `interactive`: Menu-driven session asking for the operation and file names
//!
//! Each command defines its own Clap arguments struct and a `handle_*` function
//! taking those arguments plus the loaded configuration.
//!
use crate::common::archive::compression::{self, Operation};
use crate::common::archive::rle::CodecStats;
use crate::core::config::Config;
use crate::core::error::Result;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Encode a file (`rlec compress`).
pub mod compress;
/// Decode a file (`rlec decompress`).
pub mod decompress;
/// Prompt-driven session (`rlec interactive`, also the default).
pub mod interactive;

/// # Run File Job (`run_file_job`)
///
/// Resolves the output path (deriving it from `input` when `output` is `None`)
/// and runs `operation` through `compression::process_file`.
///
/// ## Returns
///
/// * `Result<(PathBuf, CodecStats)>` - The output path actually written, and the pass statistics.
pub(crate) fn run_file_job(
    operation: Operation,
    input: &Path,
    output: Option<PathBuf>,
    config: &Config,
    force: bool,
) -> Result<(PathBuf, CodecStats)> {
    let output = match output {
        Some(path) => path,
        None => {
            let derived = compression::default_output_path(operation, input, &config.output)?;
            debug!("No output path given, using {}", derived.display());
            derived
        }
    };
    let stats = compression::process_file(operation, input, &output, config, force)?;
    Ok((output, stats))
}
