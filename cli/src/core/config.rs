//! # rlec Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module implements the configuration system for `rlec`, handling loading,
//! merging, validation, and access to configuration data. Settings cover codec
//! buffering and how default output paths are derived.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. An explicit file passed with `--config <PATH>` (used alone, nothing is merged)
//! 2. Project-specific `.rlec.toml` in the current directory or ancestors
//! 3. User-specific `<config dir>/rlec/config.toml`
//! 4. Default values defined in the code
//!
//! After merging, `~` in `output.directory` is expanded and the result is validated.
//!
//! ## Examples
//!
//! ```toml
//! [codec]
//! buffer_capacity = 8192
//! warn_on_digit_symbols = true
//!
//! [output]
//! compressed_extension = "rle"
//! decompressed_extension = "out"
//! overwrite = true
//! directory = "~/rle-out"
//! ```
//!
//! ```rust,ignore
//! let cfg = config::load_config(None)?;
//! let options = cfg.codec.options();
//! let ext = &cfg.output.compressed_extension;
//! ```
//!
use crate::common::archive::rle::{CodecOptions, DEFAULT_BUFFER_CAPACITY};
use crate::core::error::{RlecError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub codec: CodecConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Settings passed through to the compressor and decompressor.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CodecConfig {
    /// Capacity of the buffered reader/writer around each file.
    #[serde(default = "default_buffer_capacity")]
    pub buffer_capacity: usize,
    /// Log a warning when compressing input that contains ASCII digits.
    #[serde(default = "default_true")]
    pub warn_on_digit_symbols: bool,
}

/// Settings controlling where output files go and whether they may be replaced.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Extension appended when compressing without an explicit output path.
    #[serde(default = "default_compressed_extension")]
    pub compressed_extension: String,
    /// Extension appended when decompressing a file that lacks the compressed extension.
    #[serde(default = "default_decompressed_extension")]
    pub decompressed_extension: String,
    /// Replace existing output files (the `--force` flag overrides `false`).
    #[serde(default = "default_true")]
    pub overwrite: bool,
    /// Directory for default output paths (can use ~). Defaults to the input's directory.
    pub directory: Option<String>,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: default_buffer_capacity(),
            warn_on_digit_symbols: true,
        }
    }
}

impl CodecConfig {
    pub fn options(&self) -> CodecOptions {
        CodecOptions {
            buffer_capacity: self.buffer_capacity,
            warn_on_digit_symbols: self.warn_on_digit_symbols,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            compressed_extension: default_compressed_extension(),
            decompressed_extension: default_decompressed_extension(),
            overwrite: true,
            directory: None,
        }
    }
}

fn default_buffer_capacity() -> usize {
    DEFAULT_BUFFER_CAPACITY
}
fn default_true() -> bool {
    true
}
fn default_compressed_extension() -> String {
    "rle".to_string()
}
fn default_decompressed_extension() -> String {
    "out".to_string()
}

const PROJECT_CONFIG_FILENAME: &str = ".rlec.toml";

/// # Load Configuration (`load_config`)
///
/// Builds the effective configuration for one command execution.
///
/// ## Arguments
///
/// * `explicit` - Path given via `--config`. When present it is the only source,
///   and it must exist.
///
/// ## Errors
///
/// Returns an `Err` if a config file cannot be read or parsed, or if the merged
/// configuration fails validation.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let mut config = match explicit {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            load_config_from_path(path)?
        }
        None => {
            let user_config = load_user_config()?;
            let current_dir = std::env::current_dir().context("Failed to get current directory")?;
            let project_config = match find_project_config_path(&current_dir) {
                Some(path) => {
                    info!("Loading project configuration from: {}", path.display());
                    Some(load_config_from_path(&path)?)
                }
                None => {
                    debug!("No project configuration file (.rlec.toml) found in current directory or ancestors.");
                    None
                }
            };
            merge_configs(user_config.unwrap_or_default(), project_config)
        }
    };
    expand_config_paths(&mut config);
    validate_config(&config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("org", "rlec", "rlec") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

/// Walks from `start` towards the filesystem root looking for `.rlec.toml`.
/// The search stops at the first directory containing `.git`.
fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Project values win wherever they differ from the built-in default.
fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project_cfg = match project {
        Some(p) => p,
        None => return user,
    };
    let mut merged = Config::default();
    merged.codec.buffer_capacity = if project_cfg.codec.buffer_capacity != default_buffer_capacity() {
        project_cfg.codec.buffer_capacity
    } else {
        user.codec.buffer_capacity
    };
    merged.codec.warn_on_digit_symbols =
        project_cfg.codec.warn_on_digit_symbols && user.codec.warn_on_digit_symbols;
    merged.output.compressed_extension =
        if project_cfg.output.compressed_extension != default_compressed_extension() {
            project_cfg.output.compressed_extension
        } else {
            user.output.compressed_extension
        };
    merged.output.decompressed_extension =
        if project_cfg.output.decompressed_extension != default_decompressed_extension() {
            project_cfg.output.decompressed_extension
        } else {
            user.output.decompressed_extension
        };
    merged.output.overwrite = project_cfg.output.overwrite && user.output.overwrite;
    merged.output.directory = project_cfg.output.directory.or(user.output.directory);
    merged
}

fn expand_config_paths(config: &mut Config) {
    if let Some(dir) = config.output.directory.as_mut() {
        *dir = shellexpand::tilde(dir.as_str()).into_owned();
        debug!("Expanded output directory: {}", dir);
    }
}

fn validate_config(config: &Config) -> Result<()> {
    info!("Validating final configuration...");
    if config.codec.buffer_capacity == 0 {
        return Err(anyhow!(RlecError::Config(
            "codec.buffer_capacity must be greater than zero.".to_string()
        )));
    }
    for (key, ext) in [
        ("output.compressed_extension", &config.output.compressed_extension),
        ("output.decompressed_extension", &config.output.decompressed_extension),
    ] {
        if ext.is_empty() || ext.contains(&['.', '/', '\\'][..]) {
            return Err(anyhow!(RlecError::Config(format!(
                "Invalid {key}: '{ext}'. Expected a bare extension such as 'rle'."
            ))));
        }
    }
    if config.output.compressed_extension == config.output.decompressed_extension {
        return Err(anyhow!(RlecError::Config(format!(
            "output.compressed_extension and output.decompressed_extension must differ (both are '{}').",
            config.output.compressed_extension
        ))));
    }
    if let Some(dir) = &config.output.directory {
        let dir = PathBuf::from(dir);
        if !dir.exists() {
            warn!(
                "Configured output directory '{}' does not exist; it will be created on first use.",
                dir.display()
            );
        } else if !dir.is_dir() {
            return Err(anyhow!(RlecError::Config(format!(
                "Configured output path '{}' exists but is not a directory.",
                dir.display()
            ))));
        }
    }
    info!("Configuration validation successful.");
    Ok(())
}
