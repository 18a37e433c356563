//! # rlec Interactive Session
//!
//! File: cli/src/commands/interactive.rs
//!
//! ## Overview
//!
//! Implements the menu-driven mode that runs when `rlec` is started without a
//! subcommand (or with `rlec interactive`). The session asks three questions and
//! then performs a single job:
//!
//! ```text
//! Choose an option:
//! 1. Compress
//! 2. Decompress
//! 1
//! Enter input file name: notes.txt
//! Enter output file name: notes.rle
//! File compressed successfully.
//! ```
//!
//! Leaving the output name blank uses the same default naming as the
//! `compress` / `decompress` commands.
//!
//! ## Architecture
//!
//! `handle_interactive` binds the session to the process's stdin/stdout;
//! `run_session` takes any `BufRead` / `Write` pair so it can be tested with
//! in-memory buffers.
//!
use super::run_file_job;
use crate::common::archive::compression::Operation;
use crate::common::ui::prompts::Prompter;
use crate::core::config::Config;
use crate::core::error::{RlecError, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::info;

const MENU: &str = "Choose an option:\n1. Compress\n2. Decompress\n";

/// Arguments for `rlec interactive`.
#[derive(Parser, Debug, Default)] // Default used when no subcommand is given
#[command(about = "Choose an operation and file names at prompts")]
pub struct InteractiveArgs {}

pub fn handle_interactive(_args: InteractiveArgs, config: &Config) -> Result<()> {
    info!("Starting interactive session");
    let stdin = io::stdin();
    run_session(stdin.lock(), io::stdout().lock(), config)
}

/// # Run Session (`run_session`)
///
/// Runs one prompt-driven job against explicit console handles.
///
/// ## Errors
///
/// * `RlecError::InvalidChoice` - The menu answer is not a known operation.
/// * `RlecError::Prompt` - Input ended early, or the input file name was blank.
/// * Any error from the underlying compress/decompress job.
pub fn run_session<R: BufRead, W: Write>(input: R, output: W, config: &Config) -> Result<()> {
    let mut prompter = Prompter::new(input, output);
    prompter.say(MENU)?;
    let choice = prompter.ask("")?;
    let operation = parse_choice(&choice)?;

    let input_name = prompter.ask("Enter input file name: ")?;
    if input_name.trim().is_empty() {
        anyhow::bail!(RlecError::Prompt(
            "input file name cannot be empty".to_string()
        ));
    }
    let output_name = prompter.ask("Enter output file name: ")?;
    let output_path = if output_name.trim().is_empty() {
        None
    } else {
        Some(PathBuf::from(output_name))
    };

    let (written, _stats) = run_file_job(
        operation,
        &PathBuf::from(input_name),
        output_path,
        config,
        false,
    )?;
    info!("Interactive {} wrote {}", operation, written.display());
    prompter.say(&format!("{}\n", operation.success_message()))?;
    Ok(())
}

/// Maps a menu answer to an operation. Accepts the number or the name.
fn parse_choice(answer: &str) -> Result<Operation> {
    match answer.trim().to_ascii_lowercase().as_str() {
        "1" | "c" | "compress" => Ok(Operation::Compress),
        "2" | "d" | "decompress" => Ok(Operation::Decompress),
        other => Err(RlecError::InvalidChoice(other.to_string()).into()),
    }
}
