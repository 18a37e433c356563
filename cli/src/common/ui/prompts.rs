//! # rlec Console Prompts (`common::ui::prompts`)
//!
//! File: cli/src/common/ui/prompts.rs
//!
//! ## Overview
//!
//! Line-oriented question/answer helpers for the interactive mode. A `Prompter`
//! owns an explicit reader and writer instead of touching the process-wide
//! stdin/stdout, so sessions can be driven from tests with in-memory buffers.
//!
use crate::core::error::{RlecError, Result};
use anyhow::Context;
use std::io::{BufRead, Write};
use tracing::trace;

/// Reads answers from `input` and writes questions to `output`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes `text` as-is and flushes.
    pub fn say(&mut self, text: &str) -> Result<()> {
        self.output
            .write_all(text.as_bytes())
            .and_then(|_| self.output.flush())
            .context("Failed to write to console")
    }

    /// # Ask (`ask`)
    ///
    /// Writes `question`, then reads one line and returns it without the
    /// trailing newline (`\n` or `\r\n`). Inner whitespace is preserved so file
    /// names containing spaces survive.
    ///
    /// ## Errors
    ///
    /// Returns `RlecError::Prompt` if the input ends before a line is read.
    pub fn ask(&mut self, question: &str) -> Result<String> {
        self.say(question)?;
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from console")?;
        if read == 0 {
            anyhow::bail!(RlecError::Prompt(format!(
                "input ended while waiting for an answer to {:?}",
                question.trim()
            )));
        }
        let answer = line.trim_end_matches(&['\r', '\n'][..]).to_string();
        trace!("Prompt {:?} answered with {:?}", question.trim(), answer);
        Ok(answer)
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_ask_reads_lines_in_order() -> Result<()> {
        let mut printed = Vec::new();
        let mut prompter = Prompter::new(Cursor::new("first\r\nsecond value \n"), &mut printed);
        assert_eq!(prompter.ask("One? ")?, "first");
        assert_eq!(prompter.ask("Two? ")?, "second value ");
        drop(prompter);
        assert_eq!(printed, b"One? Two? ");
        Ok(())
    }

    #[test]
    fn test_ask_last_line_without_newline() -> Result<()> {
        let mut prompter = Prompter::new(Cursor::new("tail"), Vec::new());
        assert_eq!(prompter.ask("? ")?, "tail");
        Ok(())
    }

    #[test]
    fn test_ask_at_eof_is_error() {
        let mut prompter = Prompter::new(Cursor::new(""), Vec::new());
        let err = prompter.ask("Enter input file name: ").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<RlecError>(),
            Some(RlecError::Prompt(_))
        ));
    }
}
