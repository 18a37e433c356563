//! # rlec Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the `rlec` run-length codec CLI.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Loading configuration
//! - Routing execution to appropriate command handlers
//!
//! ## Examples
//!
//! ```bash
//! # Get help
//! rlec --help
//!
//! # Compress and decompress with increased verbosity
//! rlec -v compress notes.txt
//! rlec -vv decompress notes.txt.rle restored.txt
//!
//! # Interactive menu (also the default with no subcommand)
//! rlec interactive
//! ```
//!
//! Command processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level
//! 3. Load configuration (`--config` or project/user files)
//! 4. Route to appropriate command handler
//! 5. Print any error to stderr and exit with status 1
//!
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // Handles specific command logic (compress, decompress, interactive)
mod common; // Contains shared utilities (codec, fs, ui)
mod core; // Core infrastructure (errors, config)

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "rlec",
    about = "Run-length encoding compressor and decompressor for text files",
    long_about = "Compress files into <symbol><count> run-length text and expand them back.\n\
                  Runs an interactive menu when no command is given.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Use this configuration file instead of the project/user files.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Enum defining all available top-level commands.
#[derive(Subcommand, Debug)]
enum Commands {
    #[command(alias = "c")]
    Compress(commands::compress::CompressArgs),
    #[command(alias = "d")]
    Decompress(commands::decompress::DecompressArgs),
    #[command(alias = "i")]
    Interactive(commands::interactive::InteractiveArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command = cli
        .command
        .unwrap_or_else(|| Commands::Interactive(Default::default()));

    let command_result = core::config::load_config(cli.config.as_deref()).and_then(|config| {
        match command {
            Commands::Compress(args) => commands::compress::handle_compress(args, &config),
            Commands::Decompress(args) => commands::decompress::handle_decompress(args, &config),
            Commands::Interactive(args) => {
                commands::interactive::handle_interactive(args, &config)
            }
        }
    });

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
