//! # rlec Compress Command
//!
//! File: cli/src/commands/compress.rs
//!
//! ## Overview
//!
//! Implements `rlec compress <INPUT> [OUTPUT]`. The input is encoded into the
//! textual run-length format (`aaab` becomes `a3b1`). Without `OUTPUT`, the
//! result is written to `<INPUT>.<compressed_extension>` (default `.rle`).
//!
//! ## Examples
//!
//! ```bash
//! rlec compress notes.txt                 # writes notes.txt.rle
//! rlec compress notes.txt packed.rle      # explicit output
//! rlec compress --force notes.txt old.rle # replace even if overwrite = false
//! ```
//!
use super::run_file_job;
use crate::common::archive::compression::Operation;
use crate::core::config::Config;
use crate::core::error::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// Arguments for `rlec compress`.
#[derive(Parser, Debug)]
#[command(about = "Compress a file with run-length encoding")]
pub struct CompressArgs {
    /// File to compress.
    pub input: PathBuf,
    /// Destination file (defaults to <INPUT>.<compressed_extension>).
    pub output: Option<PathBuf>,
    /// Replace OUTPUT even when `output.overwrite` is false in the configuration.
    #[arg(short, long)]
    pub force: bool,
}

/// Handles `rlec compress`, printing the success message on completion.
pub fn handle_compress(args: CompressArgs, config: &Config) -> Result<()> {
    info!("Handling compress command with args: {:?}", args);
    let (output, stats) = run_file_job(
        Operation::Compress,
        &args.input,
        args.output,
        config,
        args.force,
    )?;
    info!(
        "Wrote {} ({} bytes -> {} bytes)",
        output.display(),
        stats.bytes_in,
        stats.bytes_out
    );
    println!("{}", Operation::Compress.success_message());
    Ok(())
}
