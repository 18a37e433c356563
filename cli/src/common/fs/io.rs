//! # rlec Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! This module centralizes the filesystem operations that surround a codec pass:
//! opening the input file, creating the output file under the overwrite policy,
//! making sure the output's parent directory exists, and refusing to run when the
//! input and output are the same file.
//!
//! ## Architecture
//!
//! - **`ensure_dir_exists`**: Creates a directory (and parents) if missing; errors if the path is a file.
//! - **`open_input`**: Opens a file for reading, mapping failures to `RlecError::InputOpen`.
//! - **`create_output`**: Creates/truncates a file for writing, honoring the overwrite flag.
//! - **`ensure_distinct`**: Rejects an output path that resolves to the input file.
//!
//! File handles returned here are plain `std::fs::File` values. They are closed
//! when dropped, which happens at the end of the codec call on every path.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use crate::common::fs::io;
//! use std::path::Path;
//!
//! # fn run_example() -> crate::core::error::Result<()> {
//! let input = Path::new("notes.txt");
//! let output = Path::new("out/notes.txt.rle");
//! io::ensure_distinct(input, output)?;
//! let reader = io::open_input(input)?;
//! let writer = io::create_output(output, true)?;
//! # Ok(())
//! # }
//! ```
//!
use crate::core::error::{RlecError, Result};
use anyhow::Context;
use std::fs::{self, File};
use std::path::Path;
use tracing::{debug, info};

/// Ensures that a directory exists at the specified path.
///
/// If the path does not exist, this function creates the directory,
/// including any necessary parent directories (similar to `mkdir -p`).
/// If the path already exists but is not a directory, an error
/// (`RlecError::FileSystem`) is returned.
///
/// # Errors
///
/// Returns an `Err` if:
/// - The path exists but is not a directory.
/// - Creating the directory fails (e.g., due to permissions).
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {:?}", path))?;
        info!("Created directory: {:?}", path);
    } else if !path.is_dir() {
        anyhow::bail!(RlecError::FileSystem(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    } else {
        debug!("Directory already exists: {:?}", path);
    }
    Ok(())
}

/// Opens `path` for reading.
///
/// # Errors
///
/// Returns `RlecError::FileSystem` if `path` is a directory, and
/// `RlecError::InputOpen` if the file cannot be opened.
pub fn open_input(path: &Path) -> Result<File> {
    if path.is_dir() {
        anyhow::bail!(RlecError::FileSystem(format!(
            "Input path is a directory: {}",
            path.display()
        )));
    }
    let file = File::open(path).map_err(|source| RlecError::InputOpen {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Opened input file {:?}", path);
    Ok(file)
}

/// Creates `path` for writing, truncating any existing file.
///
/// The parent directory is created first if needed.
///
/// # Arguments
///
/// * `path` - The output file path.
/// * `overwrite` - When `false`, an existing file at `path` is an error.
///
/// # Errors
///
/// Returns an `Err` if:
/// - `overwrite` is `false` and `path` already exists (`RlecError::OutputExists`).
/// - The parent directory cannot be created.
/// - The file cannot be created (`RlecError::OutputOpen`).
pub fn create_output(path: &Path, overwrite: bool) -> Result<File> {
    if !overwrite && path.exists() {
        anyhow::bail!(RlecError::OutputExists {
            path: path.to_path_buf()
        });
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir_exists(parent)?;
    }
    let file = File::create(path).map_err(|source| RlecError::OutputOpen {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Opened output file {:?}", path);
    Ok(file)
}

/// Fails with `RlecError::SamePath` if `output` names the same file as `input`.
///
/// Must run before `create_output`, which would truncate the input.
pub fn ensure_distinct(input: &Path, output: &Path) -> Result<()> {
    let same = match (fs::canonicalize(input), fs::canonicalize(output)) {
        (Ok(a), Ok(b)) => a == b,
        // Output does not exist yet, so it cannot alias an existing input.
        _ => input == output,
    };
    if same {
        anyhow::bail!(RlecError::SamePath {
            path: output.to_path_buf()
        });
    }
    Ok(())
}
