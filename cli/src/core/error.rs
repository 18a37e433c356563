//! # rlec Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the application-level error types used throughout `rlec`.
//! Codec failures (malformed runs, stream I/O) live next to the codec in
//! `common::archive::rle::CodecError`; everything that happens around the codec
//! (configuration, opening files, interactive prompts) is reported through
//! `RlecError`.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `RlecError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! ## Examples
//!
//! ```rust,ignore
//! // Return a specific error type
//! if output.exists() && !overwrite {
//!     anyhow::bail!(RlecError::OutputExists { path: output.to_path_buf() });
//! }
//!
//! // Add context to errors using anyhow
//! let stats = compressor
//!     .compress(reader, writer)
//!     .with_context(|| format!("Failed to compress {}", input.display()))?;
//! ```
//!
use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for the rlec application.
#[derive(Error, Debug)]
pub enum RlecError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    #[error("Error opening input file: {}", .path.display())]
    InputOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error opening output file: {}", .path.display())]
    OutputOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Output file '{}' already exists. Use --force or set `overwrite = true`.", .path.display())]
    OutputExists { path: PathBuf },

    #[error("Input and output refer to the same file: {}", .path.display())]
    SamePath { path: PathBuf },

    #[error("Invalid choice. Expected 1 (compress) or 2 (decompress), got '{0}'.")]
    InvalidChoice(String),

    #[error("Prompt error: {0}")]
    Prompt(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::io;

    #[test]
    fn test_error_display() {
        let config_err = RlecError::Config("buffer_capacity must be positive".to_string());
        assert_eq!(
            config_err.to_string(),
            "Configuration error: buffer_capacity must be positive"
        );

        let open_err = RlecError::InputOpen {
            path: PathBuf::from("missing.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(open_err.to_string(), "Error opening input file: missing.txt");
        assert!(open_err.source().is_some());

        let choice_err = RlecError::InvalidChoice("7".into());
        assert!(choice_err.to_string().starts_with("Invalid choice."));
    }
}
