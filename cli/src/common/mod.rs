//! # rlec Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! This module is the organizational entry point for the shared utilities used by
//! the `rlec` commands. It keeps reusable logic separate from command-specific
//! argument handling (`commands::`) and core infrastructure (`core::`).
//!
//! ## Architecture
//!
//! - **`archive`**: The run-length codec (`rle`) and the file-level job runner built on it (`compression`).
//! - **`fs`**: Opening input/output files, directory creation, and same-file checks.
//! - **`ui`**: Console prompts for the interactive mode.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use crate::common::{archive, fs, ui};
//! ```
//!

/// Run-length codec and file compression jobs.
pub mod archive;
/// Utilities for filesystem operations.
pub mod fs;
/// Console prompts for interactive sessions.
pub mod ui;
