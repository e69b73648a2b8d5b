//! # donklang
//!
//! A reversible text transform that spells every character as a run of spaces.
//!
//! ## What is DonkLang?
//!
//! DonkLang text consists of runs of the space character. The length of each
//! run, plus a signed `offset`, is the code point of one character of plain
//! text. Newlines pass through untouched, and anything else (by default a `|`
//! written after every run) is ignored on decode.
//!
//! ## Key Features
//!
//! - **Reversible**: `decode(encode(s)) == s` for every encodable `s`
//! - **Resilient Decoding**: never fails; missing code points become U+FFFD
//! - **Strict Encoding**: refuses characters that would need a run shorter than one
//! - **Script Runner**: decode a file and hand it to an interpreter, see [`run`]
//!
//! ## Quick Start
//!
//! ```rust
//! use donklang::{decode, encode};
//!
//! let donk = encode("Hi\n").unwrap();
//! assert!(donk.chars().all(|c| c == ' ' || c == '|' || c == '\n'));
//! assert_eq!(decode(&donk), "Hi\n");
//! ```
//!
//! ### Offsets
//!
//! ```rust
//! use donklang::RunLengthCodec;
//!
//! // With offset 96, 'a' is a single space
//! let codec = RunLengthCodec::new(96);
//! assert_eq!(codec.encode("abc").unwrap(), " |  |   |");
//! ```
//!
//! The format is described in full in [`format`].

pub mod cli;
pub mod codec;
pub mod config;
pub mod decode;
pub mod encode;
pub mod error;
pub mod format;
pub mod options;
pub mod run;

pub use codec::{DecodeReport, RunLengthCodec};
pub use decode::Decoder;
pub use encode::Encoder;
pub use error::{exit_code, Error, Result};
pub use options::{DonkOptions, Separator};
pub use run::{Evaluator, ProcessEvaluator, Script, ScriptExit};

use std::io;
use std::path::Path;
use tracing::debug;

/// Encode plain text to DonkLang with default options (offset 0, `|` separator).
///
/// # Examples
///
/// ```rust
/// use donklang::encode;
///
/// let donk = encode("A").unwrap();
/// assert_eq!(donk, format!("{}|", " ".repeat(65)));
/// ```
///
/// # Errors
///
/// Returns [`Error::Encoding`] for characters whose code point is less than one.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn encode(text: &str) -> Result<String> {
    encode_with_options(text, &DonkOptions::default())
}

/// Encode plain text to DonkLang with custom options.
///
/// # Examples
///
/// ```rust
/// use donklang::{encode_with_options, DonkOptions};
///
/// let options = DonkOptions::new().with_offset(60).with_separator(",");
/// assert_eq!(encode_with_options("AB", &options).unwrap(), "     ,      ,");
/// ```
///
/// # Errors
///
/// Returns [`Error::Encoding`] for the first character whose code point minus
/// the offset is less than one. No partial output is returned.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn encode_with_options(text: &str, options: &DonkOptions) -> Result<String> {
    let mut encoder = Encoder::new(options);
    encoder.encode_str(text)?;
    Ok(encoder.into_inner())
}

/// Decode DonkLang text with offset 0.
///
/// # Examples
///
/// ```rust
/// use donklang::decode;
///
/// assert_eq!(decode(&" ".repeat(65)), "A");
/// ```
#[must_use]
pub fn decode(text: &str) -> String {
    Decoder::new(text, 0).decode()
}

/// Decode DonkLang text using the offset in `options`.
///
/// The separator in `options` is not consulted; decoding skips every
/// character that is neither a space nor a newline.
#[must_use]
pub fn decode_with_options(text: &str, options: &DonkOptions) -> String {
    Decoder::new(text, options.offset).decode()
}

/// Encode plain text and write the DonkLang output to `writer`.
///
/// Nothing is written if encoding fails.
///
/// # Examples
///
/// ```rust
/// use donklang::{encode_to_writer, DonkOptions};
///
/// let mut buffer = Vec::new();
/// let options = DonkOptions::new().with_offset(64);
/// encode_to_writer(&mut buffer, "A", &options).unwrap();
/// assert_eq!(buffer, b" |");
/// ```
///
/// # Errors
///
/// Returns an error if encoding fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn encode_to_writer<W>(mut writer: W, text: &str, options: &DonkOptions) -> Result<()>
where
    W: io::Write,
{
    let donk = encode_with_options(text, options)?;
    writer
        .write_all(donk.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

/// Decode DonkLang read from an I/O stream.
///
/// # Examples
///
/// ```rust
/// use donklang::{decode_from_reader, DonkOptions};
/// use std::io::Cursor;
///
/// let cursor = Cursor::new(b"  |  ");
/// let text = decode_from_reader(cursor, &DonkOptions::new().with_offset(65)).unwrap();
/// assert_eq!(text, "CC");
/// ```
///
/// # Errors
///
/// Returns an error if reading fails or the stream is not valid UTF-8.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn decode_from_reader<R>(mut reader: R, options: &DonkOptions) -> Result<String>
where
    R: io::Read,
{
    let mut string = String::new();
    reader
        .read_to_string(&mut string)
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(decode_with_options(&normalize_newlines(&string), options))
}

/// Read a text file, translating `\r\n` and lone `\r` line endings to `\n`.
///
/// # Errors
///
/// Returns [`Error::NotFound`] if `path` does not exist, otherwise an I/O
/// error if the file cannot be read or is not valid UTF-8.
pub fn read_source(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|e| Error::from_io(&e, path))?;
    debug!(path = %path.display(), bytes = raw.len(), "read source");
    Ok(normalize_newlines(&raw))
}

/// Write `contents` to `path`, or to stdout when `path` is `None`.
///
/// Stdout output gets no trailing newline.
///
/// # Errors
///
/// Returns an I/O error if the destination cannot be written.
pub fn write_output(path: Option<&Path>, contents: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, contents).map_err(|e| Error::from_io(&e, path))?;
            debug!(path = %path.display(), bytes = contents.len(), "wrote output");
        }
        None => {
            let mut stdout = io::stdout().lock();
            io::Write::write_all(&mut stdout, contents.as_bytes())
                .and_then(|()| io::Write::flush(&mut stdout))
                .map_err(|e| Error::io(&e.to_string()))?;
        }
    }
    Ok(())
}

fn normalize_newlines(text: &str) -> String {
    if !text.contains('\r') {
        return text.to_string();
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_decode_roundtrip() {
        let text = "fn main() {\n    println!(\"hi\");\n}\n";
        assert_eq!(decode(&encode(text).unwrap()), text);
    }

    #[test]
    fn test_options_roundtrip() {
        let options = DonkOptions::new().with_offset(9).with_separator("#");
        let text = "x = 1\ny = [x]\n";
        let donk = encode_with_options(text, &options).unwrap();
        assert_eq!(decode_with_options(&donk, &options), text);
    }

    #[test]
    fn test_writer_untouched_on_error() {
        let mut buffer = Vec::new();
        let options = DonkOptions::new().with_offset(100);
        assert!(encode_to_writer(&mut buffer, "zz a", &options).is_err());
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_normalize_newlines() {
        assert_eq!(normalize_newlines("a\r\nb\rc\n"), "a\nb\nc\n");
        assert_eq!(normalize_newlines("plain"), "plain");
    }

    #[test]
    fn test_reader_normalizes_crlf() {
        let input = format!("{}|\r\n{}|", " ".repeat(65), " ".repeat(66));
        let text = decode_from_reader(input.as_bytes(), &DonkOptions::new()).unwrap();
        assert_eq!(text, "A\nB");
    }
}
