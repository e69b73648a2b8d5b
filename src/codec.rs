//! The run-length codec.
//!
//! [`RunLengthCodec`] binds an offset once and exposes both directions of the
//! transform plus file-reading variants. It holds no state besides the offset,
//! so one codec can be shared freely between threads.

use crate::{read_source, DonkOptions, Decoder, Encoder, Result, Separator};
use std::path::Path;
use tracing::debug;

/// Bidirectional transform between plain text and DonkLang text.
///
/// # Examples
///
/// ```rust
/// use donklang::{RunLengthCodec, Separator};
///
/// let codec = RunLengthCodec::new(64);
/// let donk = codec.encode("AB").unwrap();
/// assert_eq!(donk, " |  |");
/// assert_eq!(codec.decode(&donk), "AB");
///
/// let bare = codec.encode_with_separator("AB", &Separator::None).unwrap();
/// assert_eq!(bare, "   "); // one run of 3: separators are what keep runs apart
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RunLengthCodec {
    offset: i64,
}

/// Result of a decode, with the number of substituted code points.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodeReport {
    pub text: String,
    pub replacements: usize,
}

impl RunLengthCodec {
    #[must_use]
    pub const fn new(offset: i64) -> Self {
        RunLengthCodec { offset }
    }

    #[must_use]
    pub const fn offset(&self) -> i64 {
        self.offset
    }

    /// Decodes DonkLang text. Never fails.
    #[must_use]
    pub fn decode(&self, text: &str) -> String {
        Decoder::new(text, self.offset).decode()
    }

    /// Decodes DonkLang text and reports how many runs had no valid code point.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use donklang::RunLengthCodec;
    ///
    /// let report = RunLengthCodec::new(0x10FFFF).decode_report(" ");
    /// assert_eq!(report.text, "\u{FFFD}");
    /// assert_eq!(report.replacements, 1);
    /// ```
    #[must_use]
    pub fn decode_report(&self, text: &str) -> DecodeReport {
        let (text, replacements) = Decoder::new(text, self.offset).decode_counted();
        DecodeReport { text, replacements }
    }

    /// Encodes plain text with the default `|` separator.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Encoding`] for the first character whose code
    /// point minus the offset is less than one.
    pub fn encode(&self, text: &str) -> Result<String> {
        self.encode_with_separator(text, &Separator::Pipe)
    }

    /// Encodes plain text, writing `separator` after every run.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Encoding`] for the first unencodable character.
    pub fn encode_with_separator(&self, text: &str, separator: &Separator) -> Result<String> {
        let options = self.options(separator);
        let mut encoder = Encoder::new(&options);
        encoder.encode_str(text)?;
        Ok(encoder.into_inner())
    }

    /// Reads `path` and decodes its contents.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NotFound`] if the path does not exist, or an
    /// I/O error if it cannot be read.
    pub fn decode_file(&self, path: impl AsRef<Path>) -> Result<String> {
        let path = path.as_ref();
        let source = read_source(path)?;
        let report = self.decode_report(&source);
        debug!(
            path = %path.display(),
            offset = self.offset,
            chars = report.text.chars().count(),
            replacements = report.replacements,
            "decoded file"
        );
        Ok(report.text)
    }

    /// Reads `path` and encodes its contents.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NotFound`] if the path does not exist, an I/O
    /// error if it cannot be read, or [`crate::Error::Encoding`].
    pub fn encode_file(&self, path: impl AsRef<Path>, separator: &Separator) -> Result<String> {
        let path = path.as_ref();
        let source = read_source(path)?;
        let encoded = self.encode_with_separator(&source, separator)?;
        debug!(
            path = %path.display(),
            offset = self.offset,
            bytes = encoded.len(),
            "encoded file"
        );
        Ok(encoded)
    }

    fn options(&self, separator: &Separator) -> DonkOptions {
        DonkOptions::new()
            .with_offset(self.offset)
            .with_separator(separator.clone())
    }
}

impl From<&DonkOptions> for RunLengthCodec {
    fn from(options: &DonkOptions) -> Self {
        RunLengthCodec::new(options.offset)
    }
}
