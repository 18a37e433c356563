//! # rlec Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the core infrastructure components shared by every
//! command: configuration loading and error types.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{RlecError, Result}; // For error handling
//! ```
//!
pub mod config;
pub mod error;
