//! Layered configuration for the `donk` binary.
//!
//! Values are resolved from, lowest to highest priority:
//!
//! 1. built-in defaults (offset 0, `|` separator, `python3`)
//! 2. a JSON config file given with `--config`
//! 3. `DONK_OFFSET`, `DONK_SEPARATOR`, `DONK_INTERPRETER` (read by clap)
//! 4. explicit command-line flags
//!
//! ```rust
//! use donklang::config::{FileConfig, Overrides};
//!
//! let file: FileConfig = serde_json::from_str(r#"{"offset": 32, "separator": "/"}"#).unwrap();
//! let resolved = file.resolve(Overrides { offset: Some(-1), ..Default::default() }).unwrap();
//! assert_eq!(resolved.options.offset, -1);
//! assert_eq!(resolved.options.separator.as_str(), "/");
//! ```

use crate::{DonkOptions, Error, ProcessEvaluator, Result, Separator};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Contents of a config file. Every key is optional.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub offset: Option<i64>,
    pub separator: Option<Separator>,
    /// Interpreter command as program followed by its arguments.
    pub interpreter: Option<Vec<String>>,
}

/// Values supplied on the command line or through the environment.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Overrides {
    pub offset: Option<i64>,
    pub separator: Option<String>,
    pub interpreter: Option<String>,
}

/// Fully resolved settings for one command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolved {
    pub options: DonkOptions,
    pub evaluator: ProcessEvaluator,
}

impl FileConfig {
    /// Loads a JSON config file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the file is missing, unreadable or malformed.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| Error::config(format!("{}: {}", path.display(), e)))?;
        let config: FileConfig = serde_json::from_str(&raw)
            .map_err(|e| Error::config(format!("{}: {}", path.display(), e)))?;
        debug!(path = %path.display(), ?config, "loaded config file");
        Ok(config)
    }

    /// Loads `path` if given, otherwise returns the empty config.
    ///
    /// # Errors
    ///
    /// See [`FileConfig::load`].
    pub fn load_optional(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(|| Ok(FileConfig::default()), FileConfig::load)
    }

    /// Applies `overrides` on top of this config and the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the resulting interpreter command is empty.
    pub fn resolve(&self, overrides: Overrides) -> Result<Resolved> {
        let offset = overrides.offset.or(self.offset).unwrap_or_default();
        let separator = overrides
            .separator
            .map(Separator::from)
            .or_else(|| self.separator.clone())
            .unwrap_or_default();

        let evaluator = match (overrides.interpreter, &self.interpreter) {
            (Some(command), _) => command.parse::<ProcessEvaluator>()?,
            (None, Some(words)) => ProcessEvaluator::from_words(words.iter().cloned())?,
            (None, None) => ProcessEvaluator::default(),
        };

        Ok(Resolved {
            options: DonkOptions::new()
                .with_offset(offset)
                .with_separator(separator),
            evaluator,
        })
    }
}
