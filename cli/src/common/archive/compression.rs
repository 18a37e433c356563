//! # rlec File Compression Pipeline (`common::archive::compression`)
//!
//! File: cli/src/common/archive/compression.rs
//!
//! ## Overview
//!
//! This module runs one compress or decompress job from an input path to an
//! output path. It is the single place where configuration, filesystem helpers,
//! and the stream codec in `rle` meet, and it is shared by the `compress`,
//! `decompress`, and `interactive` commands.
//!
//! ## Architecture
//!
//! - **`Operation`**: Which direction to run, plus its user-facing wording.
//! - **`default_output_path`**: Derives an output path from the input path when the user gave none.
//! - **`process_file`**: Validates the paths, opens both files, runs the codec, and reports statistics.
//!
//! ## Workflow
//!
//! 1. Reject an output path that points at the input file.
//! 2. Open the input, then create the output (honoring `overwrite` / `--force`).
//! 3. Stream the input through `Compressor` or `Decompressor`.
//! 4. On a decode error, leave the partial output in place and report the error.
//!
use crate::common::archive::rle::{CodecStats, Compressor, Decompressor};
use crate::common::fs::io as fsio;
use crate::core::config::{Config, OutputConfig};
use crate::core::error::{RlecError, Result};
use anyhow::Context;
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Direction of a codec job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Compress,
    Decompress,
}

impl Operation {
    /// Message printed to stdout after a successful job.
    pub fn success_message(self) -> &'static str {
        match self {
            Operation::Compress => "File compressed successfully.",
            Operation::Decompress => "File decompressed successfully.",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Compress => write!(f, "compress"),
            Operation::Decompress => write!(f, "decompress"),
        }
    }
}

/// # Default Output Path (`default_output_path`)
///
/// Derives the output path used when none was given.
///
/// * Compress: `<name>` becomes `<name>.<compressed_extension>`.
/// * Decompress: `<stem>.<compressed_extension>` becomes `<stem>`; any other
///   name becomes `<name>.<decompressed_extension>`.
///
/// The result is placed in `output.directory` if configured, otherwise next to
/// the input.
///
/// ## Errors
///
/// Returns `RlecError::FileSystem` if `input` has no file name (e.g. `..`).
pub fn default_output_path(
    operation: Operation,
    input: &Path,
    output: &OutputConfig,
) -> Result<PathBuf> {
    let file_name = input.file_name().ok_or_else(|| {
        RlecError::FileSystem(format!(
            "Cannot derive an output name from input path '{}'",
            input.display()
        ))
    })?;

    let derived: OsString = match operation {
        Operation::Compress => with_extension_appended(file_name, &output.compressed_extension),
        Operation::Decompress => {
            let carries_extension = Path::new(file_name)
                .extension()
                .is_some_and(|ext| ext == output.compressed_extension.as_str());
            match Path::new(file_name).file_stem() {
                Some(stem) if carries_extension => stem.to_os_string(),
                _ => with_extension_appended(file_name, &output.decompressed_extension),
            }
        }
    };

    let dir = match &output.directory {
        Some(dir) => PathBuf::from(dir),
        None => input.parent().map(Path::to_path_buf).unwrap_or_default(),
    };
    Ok(dir.join(derived))
}

fn with_extension_appended(file_name: &std::ffi::OsStr, extension: &str) -> OsString {
    let mut name = file_name.to_os_string();
    name.push(".");
    name.push(extension);
    name
}

/// # Process File (`process_file`)
///
/// Runs `operation` from `input` to `output`.
///
/// ## Arguments
///
/// * `operation` - Compress or decompress.
/// * `input` - Existing file to read.
/// * `output` - File to create. Replaced if it exists and overwriting is allowed.
/// * `config` - Effective configuration (codec options, overwrite policy).
/// * `force` - Overwrite the output even if `output.overwrite` is `false`.
///
/// ## Returns
///
/// * `Result<CodecStats>` - Counters for the completed pass.
///
/// ## Errors
///
/// Returns an `Err` if the paths alias each other, either file cannot be opened,
/// or the codec fails. Codec errors are wrapped with the operation and input path.
pub fn process_file(
    operation: Operation,
    input: &Path,
    output: &Path,
    config: &Config,
    force: bool,
) -> Result<CodecStats> {
    info!(
        "Starting {} of {} into {}",
        operation,
        input.display(),
        output.display()
    );
    fsio::ensure_distinct(input, output)?;
    let reader = fsio::open_input(input)?;
    let writer = fsio::create_output(output, config.output.overwrite || force)?;

    let options = config.codec.options();
    let result = match operation {
        Operation::Compress => Compressor::new(options).compress(reader, writer),
        Operation::Decompress => Decompressor::new(options).decompress(reader, writer),
    };

    let stats = match result {
        Ok(stats) => stats,
        Err(err) => {
            if err.is_decode_error() {
                warn!(
                    "Decoding stopped early; {} holds only the runs decoded before the error.",
                    output.display()
                );
            }
            return Err(err)
                .with_context(|| format!("Failed to {} {}", operation, input.display()));
        }
    };

    info!(
        "Finished {}: {} runs, {} bytes in, {} bytes out",
        operation, stats.runs, stats.bytes_in, stats.bytes_out
    );
    Ok(stats)
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::archive::rle::CodecError;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_default_output_path_compress() -> Result<()> {
        let output = OutputConfig::default();
        let path = default_output_path(Operation::Compress, Path::new("data/notes.txt"), &output)?;
        assert_eq!(path, PathBuf::from("data/notes.txt.rle"));
        Ok(())
    }

    #[test]
    fn test_default_output_path_decompress() -> Result<()> {
        let output = OutputConfig::default();
        let stripped =
            default_output_path(Operation::Decompress, Path::new("data/notes.txt.rle"), &output)?;
        assert_eq!(stripped, PathBuf::from("data/notes.txt"));

        let appended =
            default_output_path(Operation::Decompress, Path::new("data/blob"), &output)?;
        assert_eq!(appended, PathBuf::from("data/blob.out"));
        Ok(())
    }

    #[test]
    fn test_default_output_path_uses_configured_directory() -> Result<()> {
        let output = OutputConfig {
            directory: Some("/srv/rle".into()),
            ..Default::default()
        };
        let path = default_output_path(Operation::Compress, Path::new("a/b/c.txt"), &output)?;
        assert_eq!(path, PathBuf::from("/srv/rle/c.txt.rle"));
        Ok(())
    }

    #[test]
    fn test_default_output_path_bare_file_name() -> Result<()> {
        let output = OutputConfig::default();
        let path = default_output_path(Operation::Compress, Path::new("c.txt"), &output)?;
        assert_eq!(path, PathBuf::from("c.txt.rle"));
        Ok(())
    }

    #[test]
    fn test_default_output_path_rejects_parent_dir() {
        let output = OutputConfig::default();
        assert!(default_output_path(Operation::Compress, Path::new(".."), &output).is_err());
    }

    #[test]
    fn test_process_file_round_trip() -> Result<()> {
        let dir = tempdir()?;
        let input = dir.path().join("plain.txt");
        let packed = dir.path().join("plain.txt.rle");
        let restored = dir.path().join("restored.txt");
        fs::write(&input, "aaab\n\n")?;
        let config = Config::default();

        let stats = process_file(Operation::Compress, &input, &packed, &config, false)?;
        assert_eq!(fs::read_to_string(&packed)?, "a3b1\n2");
        assert_eq!(stats.runs, 3);

        process_file(Operation::Decompress, &packed, &restored, &config, false)?;
        assert_eq!(fs::read_to_string(&restored)?, "aaab\n\n");
        Ok(())
    }

    #[test]
    fn test_process_file_decode_error_keeps_partial_output() -> Result<()> {
        let dir = tempdir()?;
        let input = dir.path().join("bad.rle");
        let output = dir.path().join("bad.txt");
        fs::write(&input, "a2b")?;

        let err = process_file(Operation::Decompress, &input, &output, &Config::default(), false)
            .unwrap_err();
        assert!(err.to_string().starts_with("Failed to decompress"));
        assert!(matches!(
            err.downcast_ref::<CodecError>(),
            Some(CodecError::MissingLength { symbol: b'b', .. })
        ));
        assert_eq!(fs::read_to_string(&output)?, "aa");
        Ok(())
    }

    #[test]
    fn test_process_file_force_overrides_no_overwrite() -> Result<()> {
        let dir = tempdir()?;
        let input = dir.path().join("in.txt");
        let output = dir.path().join("in.txt.rle");
        fs::write(&input, "zz")?;
        fs::write(&output, "stale")?;
        let mut config = Config::default();
        config.output.overwrite = false;

        assert!(process_file(Operation::Compress, &input, &output, &config, false).is_err());
        assert_eq!(fs::read_to_string(&output)?, "stale");

        process_file(Operation::Compress, &input, &output, &config, true)?;
        assert_eq!(fs::read_to_string(&output)?, "z2");
        Ok(())
    }

    #[test]
    fn test_process_file_same_path_leaves_input_untouched() -> Result<()> {
        let dir = tempdir()?;
        let input = dir.path().join("self.txt");
        fs::write(&input, "keep me")?;

        let err = process_file(Operation::Compress, &input, &input, &Config::default(), false)
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<RlecError>(),
            Some(RlecError::SamePath { .. })
        ));
        assert_eq!(fs::read_to_string(&input)?, "keep me");
        Ok(())
    }
}
