//! # rlec Archive Utilities Module (`common::archive`)
//!
//! File: cli/src/common/archive/mod.rs
//!
//! ## Overview
//!
//! This module holds everything that turns one file into another:
//!
//! - **`rle`**: The run-length codec itself, working on any `Read` / `Write` pair.
//! - **`compression`**: File-level jobs built on `rle` (path derivation, opening
//!   files, overwrite policy, reporting).
//!
//! ## Usage
//!
//! ```rust,ignore
//! use crate::common::archive::compression::{self, Operation};
//! use std::path::Path;
//!
//! # fn run(config: &crate::core::config::Config) -> anyhow::Result<()> {
//! let input = Path::new("notes.txt");
//! let output = compression::default_output_path(Operation::Compress, input, &config.output)?;
//! let stats = compression::process_file(Operation::Compress, input, &output, config, false)?;
//! println!("{} runs written", stats.runs);
//! # Ok(())
//! # }
//! ```
//!

pub mod compression;
pub mod rle;
