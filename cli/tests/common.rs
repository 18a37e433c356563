//! # rlec CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Each test file
//! declares `mod common;` and runs the compiled `rlec` binary through
//! `assert_cmd`.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};

/// # Get rlec Command (`rlec_cmd`)
///
/// Creates an `assert_cmd::Command` pointing at the compiled `rlec` binary.
///
/// ## Panics
/// Panics if the `rlec` binary cannot be found via `Command::cargo_bin`.
pub fn rlec_cmd() -> Command {
    Command::cargo_bin("rlec").expect("Failed to find rlec binary for testing")
}

/// Writes `contents` to `rlec.toml` inside `dir` and returns its path.
///
/// Passing the file with `--config` keeps tests independent of any user or
/// project configuration on the machine running them.
pub fn write_config(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("rlec.toml");
    fs::write(&path, contents).expect("Failed to write test config");
    path
}

/// `rlec_cmd()` with `--config` pointing at an empty (all defaults) config file in `dir`.
pub fn rlec_cmd_in(dir: &Path) -> Command {
    let config = write_config(dir, "");
    let mut cmd = rlec_cmd();
    cmd.current_dir(dir).arg("--config").arg(config);
    cmd
}
