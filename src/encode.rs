//! DonkLang encoding.
//!
//! This module provides the [`Encoder`] that turns plain text into DonkLang
//! text: every character becomes a run of spaces whose length is its code
//! point minus the offset, followed by the configured separator.
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use donklang::{encode, encode_with_options, DonkOptions};
//!
//! let donk = encode("!").unwrap();
//! assert_eq!(donk, format!("{}|", " ".repeat(33)));
//!
//! let options = DonkOptions::new().with_offset(32).with_separator("");
//! assert_eq!(encode_with_options("!", &options).unwrap(), " ");
//! ```
//!
//! ## Direct Encoder Usage
//!
//! ```rust
//! use donklang::{DonkOptions, Encoder};
//!
//! let options = DonkOptions::new().with_offset(96);
//! let mut encoder = Encoder::new(&options);
//! encoder.encode_str("ab\nc").unwrap();
//! assert_eq!(encoder.into_inner(), " |  |\n   |");
//! ```

use crate::{DonkOptions, Error, Result};

/// The DonkLang encoder.
///
/// Accumulates encoded output in an owned buffer. On error the buffer holds a
/// prefix of the input's encoding and must be discarded.
pub struct Encoder<'a> {
    output: String,
    offset: i64,
    separator: &'a str,
}

impl<'a> Encoder<'a> {
    pub fn new(options: &'a DonkOptions) -> Self {
        Encoder {
            output: String::with_capacity(256),
            offset: options.offset,
            separator: options.separator.as_str(),
        }
    }

    pub fn into_inner(self) -> String {
        self.output
    }

    /// Number of spaces that encode `ch` at `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encoding`] when the length would be less than one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use donklang::Encoder;
    ///
    /// assert_eq!(Encoder::run_length('A', 0).unwrap(), 65);
    /// assert_eq!(Encoder::run_length('A', -5).unwrap(), 70);
    /// assert!(Encoder::run_length(' ', 50).is_err());
    /// ```
    pub fn run_length(ch: char, offset: i64) -> Result<usize> {
        let run = i64::from(ch as u32)
            .checked_sub(offset)
            .filter(|run| *run >= 1)
            .ok_or_else(|| Error::encoding(ch, offset))?;
        usize::try_from(run).map_err(|_| Error::encoding(ch, offset))
    }

    /// Appends the encoding of one character.
    #[inline]
    pub fn encode_char(&mut self, ch: char) -> Result<()> {
        if ch == '\n' {
            self.output.push('\n');
            return Ok(());
        }

        let run = Self::run_length(ch, self.offset)?;
        self.output.reserve(run + self.separator.len());
        self.output.extend(std::iter::repeat(' ').take(run));
        self.output.push_str(self.separator);
        Ok(())
    }

    /// Appends the encoding of every character in `text`, stopping at the first error.
    pub fn encode_str(&mut self, text: &str) -> Result<()> {
        for ch in text.chars() {
            self.encode_char(ch)?;
        }
        Ok(())
    }
}
