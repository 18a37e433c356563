//! # rlec UI Utilities Module (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//!
//! ## Overview
//!
//! Terminal interaction helpers. Currently this is the `prompts` submodule, used
//! by `rlec interactive` to ask for the operation and file names.
//!
//! ```rust,ignore
//! use crate::common::ui::prompts::Prompter;
//!
//! # fn run() -> anyhow::Result<()> {
//! let stdin = std::io::stdin();
//! let mut prompter = Prompter::new(stdin.lock(), std::io::stdout());
//! let name = prompter.ask("Enter input file name: ")?;
//! # Ok(())
//! # }
//! ```
//!

pub mod prompts;
