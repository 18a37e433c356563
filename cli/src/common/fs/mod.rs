//! # rlec Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! ## Overview
//!
//! This module groups the filesystem helpers used around a codec pass. All
//! functionality currently lives in the `io` submodule; callers import it
//! directly (e.g., `crate::common::fs::io::open_input`).
//!

/// Opening input/output files, directory creation, and same-file checks.
pub mod io;
