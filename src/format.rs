//! DonkLang Format Reference
//!
//! This module documents the DonkLang text format as implemented by this
//! library. It contains no code.
//!
//! # Overview
//!
//! DonkLang spells plain text with the space character. Every character
//! except the newline becomes a *run*: a maximal sequence of spaces whose
//! length, plus a signed *offset*, is the character's code point.
//!
//! ```text
//! plain:   A        (U+0041)
//! donk:    <65 spaces>|
//! ```
//!
//! # Encoding
//!
//! For each character `c` of the input:
//!
//! | Character | Output |
//! |-----------|--------|
//! | `'\n'` | `'\n'`, no separator |
//! | anything else | `code_point(c) - offset` spaces, then the separator |
//!
//! - The run length must be at least 1. Otherwise encoding fails with
//!   [`Error::Encoding`](crate::Error::Encoding) and produces no output.
//! - The separator (default `|`) follows *every* run, including the last.
//! - With an empty separator adjacent runs touch and decode as one run, so
//!   only text with no two neighbouring non-newline characters survives the
//!   round trip.
//!
//! ```rust
//! use donklang::{encode_with_options, DonkOptions};
//!
//! let options = DonkOptions::new().with_offset(96);
//! assert_eq!(encode_with_options("ab\nc", &options).unwrap(), " |  |\n   |");
//! ```
//!
//! # Decoding
//!
//! The input is scanned left to right:
//!
//! | Input | Action |
//! |-------|--------|
//! | `'\n'` | emit `'\n'` |
//! | run of `L` spaces | emit the character `L + offset` |
//! | anything else | skip |
//!
//! - Decoding never fails. If `L + offset` is negative, above U+10FFFF, or a
//!   surrogate (U+D800..=U+DFFF), U+FFFD is emitted instead.
//! - Separators are never consulted. Any separator that contains neither a
//!   space nor a newline is therefore invisible to the decoder, while one
//!   that does contain them corrupts the neighbouring runs.
//! - Carriage returns in files are translated to newlines when reading
//!   (`"\r\n"` and a lone `"\r"` both become `"\n"`).
//!
//! ```rust
//! use donklang::{decode_with_options, DonkOptions};
//!
//! let options = DonkOptions::new().with_offset(96);
//! assert_eq!(decode_with_options(" ~~  ??\n   ", &options), "ab\nc");
//! assert_eq!(decode_with_options(" ", &DonkOptions::new().with_offset(-2)), "\u{FFFD}");
//! ```
//!
//! # Offsets
//!
//! The offset trades run length for range. With offset 0 every printable
//! ASCII character needs 32 to 126 spaces; with offset 31 the space itself is
//! a single space and `~` needs 95. Characters at or below the offset cannot
//! be encoded.
//!
//! | Offset | `' '` (32) | `'A'` (65) | `'\t'` (9) |
//! |--------|------------|------------|------------|
//! | 0 | 32 | 65 | 9 |
//! | 31 | 1 | 34 | error |
//! | -10 | 42 | 75 | 19 |
//!
//! # Running
//!
//! `donk run FILE -- ARGS...` decodes `FILE` and hands the text to an
//! interpreter (default `python3`) with the argument vector
//! `[FILE, ARGS...]`. See [`crate::run`].
