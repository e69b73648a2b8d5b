//! DonkLang decoding.
//!
//! This module provides the [`Decoder`] that turns DonkLang text back into
//! plain text.
//!
//! ## Overview
//!
//! - **Single pass**: the input is scanned once, left to right
//! - **Runs**: each maximal run of spaces yields one character, `run + offset`
//! - **Newlines**: copied through unchanged
//! - **Everything else**: separators and stray characters are skipped
//! - **Never fails**: code points that do not exist become U+FFFD
//!
//! ## Usage
//!
//! ```rust
//! use donklang::decode;
//!
//! let text = decode(&format!("{}|{}|", " ".repeat(72), " ".repeat(105)));
//! assert_eq!(text, "Hi");
//! ```

use tracing::trace;

/// The DonkLang decoder.
///
/// Walks the input with a byte cursor and tracks line/column so substitutions
/// can be reported. Created via [`Decoder::new`].
pub struct Decoder<'a> {
    input: &'a str,
    position: usize,
    line: usize,
    column: usize,
    offset: i64,
    output: String,
    replacements: usize,
}

impl<'a> Decoder<'a> {
    pub fn new(input: &'a str, offset: i64) -> Self {
        Decoder {
            input,
            position: 0,
            line: 1,
            column: 1,
            offset,
            output: String::with_capacity(input.len() / 8 + 1),
            replacements: 0,
        }
    }

    /// Character for a run of `run` spaces at `offset`, if that code point exists.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use donklang::Decoder;
    ///
    /// assert_eq!(Decoder::code_point(65, 0), Some('A'));
    /// assert_eq!(Decoder::code_point(1, 0xD7FF), None); // surrogate
    /// assert_eq!(Decoder::code_point(1, -5), None);
    /// ```
    #[must_use]
    pub fn code_point(run: usize, offset: i64) -> Option<char> {
        let code = i64::try_from(run).ok()?.checked_add(offset)?;
        char::from_u32(u32::try_from(code).ok()?)
    }

    /// Number of code points replaced with U+FFFD so far.
    #[must_use]
    pub fn replacements(&self) -> usize {
        self.replacements
    }

    /// Decodes the whole input, returning the plain text.
    pub fn decode(mut self) -> String {
        self.run();
        self.output
    }

    /// Decodes the whole input, returning the plain text and the replacement count.
    pub fn decode_counted(mut self) -> (String, usize) {
        self.run();
        (self.output, self.replacements)
    }

    fn run(&mut self) {
        while let Some(ch) = self.peek_char() {
            match ch {
                ' ' => {
                    let (line, column) = (self.line, self.column);
                    let run = self.consume_run();
                    self.push_run(run, line, column);
                }
                '\n' => {
                    self.next_char();
                    self.output.push('\n');
                }
                _ => {
                    self.next_char();
                }
            }
        }
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn next_char(&mut self) -> Option<char> {
        let ch = self.input[self.position..].chars().next()?;
        self.position += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    /// Consumes the maximal run of spaces at the cursor.
    fn consume_run(&mut self) -> usize {
        let run = self.input.as_bytes()[self.position..]
            .iter()
            .take_while(|&&b| b == b' ')
            .count();
        self.position += run;
        self.column += run;
        run
    }

    fn push_run(&mut self, run: usize, line: usize, column: usize) {
        match Self::code_point(run, self.offset) {
            Some(ch) => self.output.push(ch),
            None => {
                trace!(
                    line,
                    column,
                    run,
                    offset = self.offset,
                    "run does not map to a code point, substituting U+FFFD"
                );
                self.replacements += 1;
                self.output.push(char::REPLACEMENT_CHARACTER);
            }
        }
    }
}
