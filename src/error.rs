//! Error types for DonkLang encoding, file handling and script execution.
//!
//! Decoding never produces an error for content reasons: code points that do
//! not exist are replaced with U+FFFD. Encoding is strict and stops at the
//! first character it cannot represent.
//!
//! ## Error Categories
//!
//! - **Not Found**: the input path does not exist
//! - **Encoding**: a character's code point minus the offset is less than 1
//! - **I/O Errors**: reading or writing failed for any other reason
//! - **Config / Evaluator**: bad configuration file, interpreter failed to start
//!
//! Every variant maps to a process exit status through [`Error::exit_code`].
//!
//! ## Examples
//!
//! ```rust
//! use donklang::{encode, exit_code, Error};
//!
//! let err = encode("\0").unwrap_err();
//! assert!(matches!(err, Error::Encoding { .. }));
//! assert_eq!(err.exit_code(), exit_code::INVALID_ENCODING);
//! ```

use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Process exit statuses used by the `donk` binary.
pub mod exit_code {
    /// Command completed.
    pub const SUCCESS: i32 = 0;
    /// The executed script faulted, or an unclassified runtime failure.
    pub const FAILURE: i32 = 1;
    /// The input file does not exist.
    pub const NOT_FOUND: i32 = 2;
    /// The input contains a character that cannot be encoded.
    pub const INVALID_ENCODING: i32 = 3;
}

/// Represents all possible errors raised by this crate.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// The requested input path does not exist
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// A character whose run length would be less than one
    #[error("character {ch:?} (code point {code_point}) cannot be encoded with offset={offset}")]
    Encoding {
        ch: char,
        code_point: u32,
        offset: i64,
    },

    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// Invalid configuration file or value
    #[error("configuration error: {0}")]
    Config(String),

    /// The script evaluator could not be started
    #[error("failed to run `{program}`: {msg}")]
    Evaluator { program: String, msg: String },
}

impl Error {
    /// Creates a not-found error for `path`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use donklang::Error;
    ///
    /// let err = Error::not_found("missing.donk");
    /// assert!(err.to_string().contains("missing.donk"));
    /// ```
    pub fn not_found(path: impl AsRef<Path>) -> Self {
        Error::NotFound {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Creates an encoding error for a character that has no positive run length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use donklang::Error;
    ///
    /// let err = Error::encoding(' ', 50);
    /// assert!(err.to_string().contains("code point 32"));
    /// assert!(err.to_string().contains("offset=50"));
    /// ```
    pub fn encoding(ch: char, offset: i64) -> Self {
        Error::Encoding {
            ch,
            code_point: ch as u32,
            offset,
        }
    }

    /// Converts an [`std::io::Error`] raised while touching `path`.
    ///
    /// `NotFound` kinds become [`Error::NotFound`] so callers see the path.
    pub fn from_io(err: &std::io::Error, path: impl AsRef<Path>) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Error::not_found(path),
            _ => Error::Io(format!("{}: {}", path.as_ref().display(), err)),
        }
    }

    /// Creates an I/O error for reading/writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Creates a configuration error.
    pub fn config<T: fmt::Display>(msg: T) -> Self {
        Error::Config(msg.to_string())
    }

    /// Creates an evaluator error for an interpreter that failed to start.
    pub fn evaluator<T: fmt::Display>(program: &str, msg: T) -> Self {
        Error::Evaluator {
            program: program.to_string(),
            msg: msg.to_string(),
        }
    }

    /// The process exit status the `donk` binary reports for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::NotFound { .. } => exit_code::NOT_FOUND,
            Error::Encoding { .. } => exit_code::INVALID_ENCODING,
            Error::Io(_) | Error::Config(_) | Error::Evaluator { .. } => exit_code::FAILURE,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoding_message_names_character() {
        let err = Error::encoding('\u{7}', 10);
        let msg = err.to_string();
        assert!(msg.contains("'\\u{7}'"), "{}", msg);
        assert!(msg.contains("code point 7"));
        assert!(msg.contains("offset=10"));
    }

    #[test]
    fn test_io_not_found_maps_to_not_found() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = Error::from_io(&io, "a/b.donk");
        assert!(matches!(err, Error::NotFound { .. }));
        assert_eq!(err.exit_code(), exit_code::NOT_FOUND);
    }

    #[test]
    fn test_other_io_errors_keep_path() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = Error::from_io(&io, "locked.txt");
        assert!(err.to_string().contains("locked.txt"));
        assert_eq!(err.exit_code(), exit_code::FAILURE);
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(Error::not_found("x").exit_code(), 2);
        assert_eq!(Error::encoding('a', 200).exit_code(), 3);
        assert_eq!(Error::config("bad").exit_code(), 1);
        assert_eq!(Error::evaluator("python3", "missing").exit_code(), 1);
    }
}
