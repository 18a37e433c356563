//! # rlec CLI Main Integration Tests
//!
//! File: cli/tests/main_tests.rs
//!
//! ## Overview
//!
//! Verifies the top-level behavior of the `rlec` binary: standard flags,
//! configuration errors, and the fallback to interactive mode when no
//! subcommand is given.
//!

mod common;
use common::*;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_main_help_flag() {
    rlec_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("compress").and(predicate::str::contains("decompress")));
}

#[test]
fn test_main_version_flag() {
    rlec_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_subcommand_runs_interactive_menu() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("in.txt"), "aaab").unwrap();

    rlec_cmd_in(dir.path())
        .write_stdin("1\nin.txt\n\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Choose an option:\n1. Compress\n2. Decompress\n")
                .and(predicate::str::contains("File compressed successfully.")),
        );

    assert_eq!(
        fs::read_to_string(dir.path().join("in.txt.rle")).unwrap(),
        "a3b1"
    );
}

#[test]
fn test_invalid_config_file_is_reported() {
    let dir = tempdir().unwrap();
    let config = write_config(dir.path(), "[codec]\nbuffer_capacity = 0\n");
    fs::write(dir.path().join("in.txt"), "x").unwrap();

    rlec_cmd()
        .current_dir(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["compress", "in.txt"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("buffer_capacity must be greater than zero"));
}

#[test]
fn test_unknown_config_key_is_reported() {
    let dir = tempdir().unwrap();
    let config = write_config(dir.path(), "[codec]\nlevel = 3\n");

    rlec_cmd()
        .arg("--config")
        .arg(&config)
        .args(["compress", "whatever.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse TOML"));
}
