//! # rlec Run-Length Codec (`common::archive::rle`)
//!
//! File: cli/src/common/archive/rle.rs
//!
//! ## Overview
//!
//! This module implements the textual run-length encoding used by `rlec`.
//! A byte stream is split into maximal runs of identical bytes, and each run is
//! written as the raw symbol byte followed by its length in decimal ASCII digits,
//! with no separator between runs:
//!
//! ```text
//! aaab      ->  a3b1
//! x         ->  x1
//! (empty)   ->  (empty)
//! ```
//!
//! Decoding reads one byte as the symbol, then every immediately following ASCII
//! digit as the run length, and repeats until the input is exhausted.
//!
//! ## Architecture
//!
//! - **`Run`**: A single `(symbol, length)` pair. `length` is always at least 1.
//! - **`CodecOptions`**: Buffer sizing and the digit-symbol warning switch, built from the `[codec]` config section.
//! - **`Compressor`** / **`Decompressor`**: Single-pass stream transformers over any `Read` / `Write` pair.
//!   Neither keeps state between calls; each call consumes its whole input or fails.
//! - **`CodecStats`**: Counters returned by both operations (runs, bytes read, bytes written).
//! - **`CodecError`**: I/O failures plus the three ways a run can be malformed during decoding.
//!
//! ## Known Limitation
//!
//! The format cannot distinguish a digit *symbol* from the digits of the preceding
//! run length. Compressing `a1` yields `a111`, which decodes to 111 `a` bytes.
//! Compression still encodes such input faithfully; it only logs a warning the
//! first time a digit symbol is seen.
//!
//! ## Examples
//!
//! ```rust,ignore
//! use crate::common::archive::rle::{Compressor, Decompressor};
//!
//! # fn run() -> Result<(), crate::common::archive::rle::CodecError> {
//! let mut encoded = Vec::new();
//! let stats = Compressor::default().compress(&b"aaab"[..], &mut encoded)?;
//! assert_eq!(encoded, b"a3b1");
//! assert_eq!(stats.runs, 2);
//!
//! let mut decoded = Vec::new();
//! Decompressor::default().decompress(encoded.as_slice(), &mut decoded)?;
//! assert_eq!(decoded, b"aaab");
//! # Ok(())
//! # }
//! ```
//!
use std::fmt;
use std::io::{self, BufReader, BufWriter, Read, Write};
use thiserror::Error;
use tracing::{debug, trace, warn};

/// Default capacity for the buffered reader and writer wrapped around codec streams.
pub const DEFAULT_BUFFER_CAPACITY: usize = 8 * 1024;

/// Upper bound on a single `write_all` while expanding a decoded run.
const EXPANSION_CHUNK: usize = 4 * 1024;

/// Errors produced while encoding or decoding a run-length stream.
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("I/O error during run-length coding: {0}")]
    Io(#[from] io::Error),

    #[error(
        "Error reading count from file: symbol {} at byte {offset} has no run length",
        describe_symbol(.symbol)
    )]
    MissingLength { symbol: u8, offset: u64 },

    #[error(
        "Error reading count from file: symbol {} at byte {offset} has a run length of zero",
        describe_symbol(.symbol)
    )]
    ZeroLength { symbol: u8, offset: u64 },

    #[error(
        "Error reading count from file: run length for symbol {} at byte {offset} does not fit in 64 bits",
        describe_symbol(.symbol)
    )]
    LengthOverflow { symbol: u8, offset: u64 },
}

impl CodecError {
    /// Returns `true` for errors caused by malformed encoded input rather than I/O.
    pub fn is_decode_error(&self) -> bool {
        !matches!(self, CodecError::Io(_))
    }
}

/// Renders a symbol byte for error messages (`'a'`, `'\n'`, `'\xff'`).
fn describe_symbol(symbol: &u8) -> String {
    format!("'{}'", symbol.escape_ascii())
}

/// A maximal run of one repeated byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub symbol: u8,
    pub length: u64,
}

impl Run {
    /// Starts a run containing a single occurrence of `symbol`.
    pub fn single(symbol: u8) -> Self {
        Self { symbol, length: 1 }
    }

    /// Writes the run in encoded form (`<symbol><decimal length>`).
    ///
    /// Returns the number of bytes written.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<u64> {
        let digits = self.length.to_string();
        writer.write_all(&[self.symbol])?;
        writer.write_all(digits.as_bytes())?;
        Ok(1 + digits.len() as u64)
    }
}

impl fmt::Display for Run {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.symbol.escape_ascii(), self.length)
    }
}

/// Counters describing one compress or decompress pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CodecStats {
    /// Number of runs written (compress) or read (decompress).
    pub runs: u64,
    pub bytes_in: u64,
    pub bytes_out: u64,
}

/// Tuning knobs shared by the compressor and decompressor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecOptions {
    pub buffer_capacity: usize,
    pub warn_on_digit_symbols: bool,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
            warn_on_digit_symbols: true,
        }
    }
}

/// # Compressor
///
/// Encodes a byte stream into the textual run-length format.
#[derive(Debug, Clone, Copy, Default)]
pub struct Compressor {
    options: CodecOptions,
}

impl Compressor {
    pub fn new(options: CodecOptions) -> Self {
        Self { options }
    }

    /// # Compress a Stream (`compress`)
    ///
    /// Reads `input` to the end and writes the encoded runs to `output`.
    ///
    /// Each run is extended until the next differing byte or the end of input,
    /// so adjacent runs in the output never share a symbol. The output is flushed
    /// before returning.
    ///
    /// ## Arguments
    ///
    /// * `input` - Any byte source. It is wrapped in a `BufReader`.
    /// * `output` - Any byte sink. It is wrapped in a `BufWriter`.
    ///
    /// ## Returns
    ///
    /// * `Result<CodecStats, CodecError>` - Run and byte counters for the pass.
    ///
    /// ## Errors
    ///
    /// Returns `CodecError::Io` if reading, writing, or the final flush fails.
    pub fn compress<R: Read, W: Write>(
        &self,
        input: R,
        output: W,
    ) -> Result<CodecStats, CodecError> {
        let reader = BufReader::with_capacity(self.options.buffer_capacity, input);
        let mut writer = BufWriter::with_capacity(self.options.buffer_capacity, output);
        let mut stats = CodecStats::default();
        let mut current: Option<Run> = None;
        let mut digit_reported = false;

        for byte in reader.bytes() {
            let byte = byte?;
            let offset = stats.bytes_in;
            stats.bytes_in += 1;

            if byte.is_ascii_digit() && self.options.warn_on_digit_symbols && !digit_reported {
                warn!(
                    "Input contains digit symbol '{}' at byte {}; the encoded output will be ambiguous to decode.",
                    byte as char, offset
                );
                digit_reported = true;
            }

            if let Some(run) = current.as_mut() {
                if run.symbol == byte {
                    run.length += 1;
                    continue;
                }
            }

            // Symbol changed: flush the finished run and start a new one.
            if let Some(finished) = current.replace(Run::single(byte)) {
                emit_run(&mut writer, finished, &mut stats)?;
            }
        }

        if let Some(last) = current {
            emit_run(&mut writer, last, &mut stats)?;
        }
        writer.flush()?;

        debug!(
            "Compressed {} bytes into {} runs ({} bytes).",
            stats.bytes_in, stats.runs, stats.bytes_out
        );
        Ok(stats)
    }
}

fn emit_run<W: Write>(writer: &mut W, run: Run, stats: &mut CodecStats) -> io::Result<()> {
    trace!("Emitting run {}", run);
    stats.bytes_out += run.write_to(writer)?;
    stats.runs += 1;
    Ok(())
}

/// # Decompressor
///
/// Expands the textual run-length format back into the original bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Decompressor {
    options: CodecOptions,
}

impl Decompressor {
    pub fn new(options: CodecOptions) -> Self {
        Self { options }
    }

    /// # Decompress a Stream (`decompress`)
    ///
    /// Reads `(symbol, length)` tokens from `input` and writes each symbol
    /// `length` times to `output`.
    ///
    /// Decoding stops at the first malformed run. Bytes already expanded from
    /// earlier runs have been handed to `output` by then; nothing is rolled back.
    ///
    /// ## Errors
    ///
    /// * `CodecError::MissingLength` - A symbol is not followed by any digit.
    /// * `CodecError::ZeroLength` - A run length parses as `0`.
    /// * `CodecError::LengthOverflow` - A run length exceeds `u64::MAX`.
    /// * `CodecError::Io` - Reading or writing fails.
    pub fn decompress<R: Read, W: Write>(
        &self,
        input: R,
        output: W,
    ) -> Result<CodecStats, CodecError> {
        let reader = BufReader::with_capacity(self.options.buffer_capacity, input);
        let mut writer = BufWriter::with_capacity(self.options.buffer_capacity, output);
        let mut bytes = reader.bytes().peekable();
        let mut stats = CodecStats::default();

        while let Some(symbol) = bytes.next() {
            let symbol = symbol?;
            let offset = stats.bytes_in;
            stats.bytes_in += 1;

            let mut length: u64 = 0;
            let mut digits = 0usize;
            loop {
                match bytes.peek() {
                    Some(&Ok(b)) if b.is_ascii_digit() => {
                        let digit = u64::from(b - b'0');
                        length = length
                            .checked_mul(10)
                            .and_then(|l| l.checked_add(digit))
                            .ok_or(CodecError::LengthOverflow { symbol, offset })?;
                        digits += 1;
                        stats.bytes_in += 1;
                        bytes.next();
                    }
                    Some(Err(_)) => {
                        if let Some(Err(err)) = bytes.next() {
                            return Err(err.into());
                        }
                    }
                    _ => break,
                }
            }

            if digits == 0 {
                return Err(CodecError::MissingLength { symbol, offset });
            }
            if length == 0 {
                return Err(CodecError::ZeroLength { symbol, offset });
            }

            let run = Run { symbol, length };
            trace!("Expanding run {}", run);
            write_repeated(&mut writer, symbol, length)?;
            stats.runs += 1;
            stats.bytes_out += length;
        }
        writer.flush()?;

        debug!(
            "Decompressed {} runs ({} bytes) into {} bytes.",
            stats.runs, stats.bytes_in, stats.bytes_out
        );
        Ok(stats)
    }
}

fn write_repeated<W: Write>(writer: &mut W, symbol: u8, mut length: u64) -> io::Result<()> {
    let chunk = [symbol; EXPANSION_CHUNK];
    while length > 0 {
        let n = length.min(EXPANSION_CHUNK as u64) as usize;
        writer.write_all(&chunk[..n])?;
        length -= n as u64;
    }
    Ok(())
}
