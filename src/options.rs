//! Configuration options for DonkLang encoding and decoding.
//!
//! This module provides types to customize the transform:
//!
//! - [`DonkOptions`]: Main configuration struct (offset and separator)
//! - [`Separator`]: What to write after each encoded run (pipe, nothing, or custom)
//!
//! ## Examples
//!
//! ```rust
//! use donklang::{encode_with_options, DonkOptions, Separator};
//!
//! // No separators at all: runs are split by nothing but newlines
//! let options = DonkOptions::new().with_separator(Separator::None);
//! let donk = encode_with_options("A", &options).unwrap();
//! assert_eq!(donk, " ".repeat(65));
//!
//! // Shift the mapping so 'A' needs a single space
//! let options = DonkOptions::new().with_offset(64);
//! assert_eq!(encode_with_options("A", &options).unwrap(), " |");
//! ```

use serde::{Deserialize, Serialize};

/// Text written after every encoded run.
///
/// The decoder never looks at separators; they only make the output easier to
/// read. A separator that contains a space or a newline would be mistaken for
/// data on decode, see [`Separator::is_decoder_transparent`].
///
/// # Examples
///
/// ```rust
/// use donklang::Separator;
///
/// assert_eq!(Separator::Pipe.as_str(), "|");
/// assert_eq!(Separator::None.as_str(), "");
/// assert_eq!(Separator::from("::").as_str(), "::");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Separator {
    #[default]
    Pipe,
    None,
    Custom(String),
}

impl Separator {
    /// Returns the string written after each run.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Separator::Pipe => "|",
            Separator::None => "",
            Separator::Custom(s) => s,
        }
    }

    /// Returns true when the decoder will skip this separator entirely.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use donklang::Separator;
    ///
    /// assert!(Separator::Pipe.is_decoder_transparent());
    /// assert!(!Separator::from(" ").is_decoder_transparent());
    /// ```
    #[must_use]
    pub fn is_decoder_transparent(&self) -> bool {
        !self.as_str().contains([' ', '\n'])
    }
}

impl From<&str> for Separator {
    fn from(s: &str) -> Self {
        match s {
            "|" => Separator::Pipe,
            "" => Separator::None,
            other => Separator::Custom(other.to_string()),
        }
    }
}

impl From<String> for Separator {
    fn from(s: String) -> Self {
        match s.as_str() {
            "|" => Separator::Pipe,
            "" => Separator::None,
            _ => Separator::Custom(s),
        }
    }
}

impl From<Separator> for String {
    fn from(sep: Separator) -> Self {
        match sep {
            Separator::Custom(s) => s,
            other => other.as_str().to_string(),
        }
    }
}

/// Configuration options for the DonkLang transform.
///
/// # Examples
///
/// ```rust
/// use donklang::{DonkOptions, Separator};
///
/// // Defaults: offset 0, pipe separator
/// let options = DonkOptions::new();
/// assert_eq!(options.offset, 0);
/// assert_eq!(options.separator, Separator::Pipe);
///
/// let options = DonkOptions::new()
///     .with_offset(31)
///     .with_separator("/");
/// assert_eq!(options.separator.as_str(), "/");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DonkOptions {
    pub offset: i64,
    pub separator: Separator,
}

impl DonkOptions {
    /// Creates default options (offset 0, `|` separator).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the offset added to every run length on decode.
    #[must_use]
    pub fn with_offset(mut self, offset: i64) -> Self {
        self.offset = offset;
        self
    }

    /// Sets the separator written after each run on encode.
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<Separator>) -> Self {
        self.separator = separator.into();
        self
    }
}
