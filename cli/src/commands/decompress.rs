//! # rlec Decompress Command
//!
//! File: cli/src/commands/decompress.rs
//!
//! ## Overview
//!
//! Implements `rlec decompress <INPUT> [OUTPUT]`, expanding `<symbol><count>`
//! tokens back into the original bytes. Decoding stops at the first malformed
//! token (a symbol without a count, a zero count, or a count too large to
//! represent) and the command fails; output written before that point is kept.
//!
//! Without `OUTPUT`, `name.rle` decompresses to `name`, and any other input
//! name gets `.<decompressed_extension>` (default `.out`) appended.
//!
use super::run_file_job;
use crate::common::archive::compression::Operation;
use crate::core::config::Config;
use crate::core::error::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// Arguments for `rlec decompress`.
#[derive(Parser, Debug)]
#[command(about = "Expand a run-length encoded file")]
pub struct DecompressArgs {
    /// Encoded file to expand.
    pub input: PathBuf,
    /// Destination file (defaults to INPUT without its compressed extension).
    pub output: Option<PathBuf>,
    /// Replace OUTPUT even when `output.overwrite` is false in the configuration.
    #[arg(short, long)]
    pub force: bool,
}

pub fn handle_decompress(args: DecompressArgs, config: &Config) -> Result<()> {
    info!("Handling decompress command with args: {:?}", args);
    let (output, stats) = run_file_job(
        Operation::Decompress,
        &args.input,
        args.output,
        config,
        args.force,
    )?;
    info!(
        "Wrote {} ({} runs expanded to {} bytes)",
        output.display(),
        stats.runs,
        stats.bytes_out
    );
    println!("{}", Operation::Decompress.success_message());
    Ok(())
}
