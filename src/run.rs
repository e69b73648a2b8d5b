//! Executing decoded DonkLang as a script.
//!
//! The codec does not know how to run programs. A [`Script`] (decoded source
//! plus an explicit argument vector) is handed to an [`Evaluator`], which
//! reports how the program ended as a [`ScriptExit`]. The default evaluator,
//! [`ProcessEvaluator`], runs an external interpreter in a child process.
//!
//! ```rust
//! use donklang::{Evaluator, Result, Script, ScriptExit};
//!
//! struct LineCounter;
//!
//! impl Evaluator for LineCounter {
//!     fn evaluate(&self, script: &Script<'_>) -> Result<ScriptExit> {
//!         Ok(ScriptExit::Code(script.source.lines().count() as i32))
//!     }
//! }
//!
//! let script = Script::new("demo.donk".as_ref(), "a\nb\n", Vec::new());
//! assert_eq!(LineCounter.evaluate(&script).unwrap().exit_code(), 2);
//! ```

use crate::{exit_code, Error, Result, RunLengthCodec};
use std::io::Write;
use std::path::Path;
use std::process::{Command, ExitStatus};
use tracing::{debug, info};

/// Environment variable through which [`ProcessEvaluator`] passes the input path.
pub const SCRIPT_ENV: &str = "DONK_SCRIPT";

/// Interpreter used when none is configured.
pub const DEFAULT_INTERPRETER: &str = "python3";

/// A decoded program ready for evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Script<'a> {
    /// Path of the DonkLang file the source was decoded from.
    pub name: &'a Path,
    pub source: &'a str,
    /// Argument vector seen by the program; `argv[0]` is `name`.
    pub argv: Vec<String>,
}

impl<'a> Script<'a> {
    pub fn new(name: &'a Path, source: &'a str, args: Vec<String>) -> Self {
        let mut argv = Vec::with_capacity(args.len() + 1);
        argv.push(name.display().to_string());
        argv.extend(args);
        Script { name, source, argv }
    }

    /// Arguments after `argv[0]`.
    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.argv[1..]
    }
}

/// How an evaluated program terminated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScriptExit {
    /// Ran to completion.
    Success,
    /// Requested an explicit exit status.
    Code(i32),
    /// Died without an exit status (uncaught fault, killed by a signal).
    Fault,
}

impl ScriptExit {
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            ScriptExit::Success => exit_code::SUCCESS,
            ScriptExit::Code(code) => *code,
            ScriptExit::Fault => exit_code::FAILURE,
        }
    }
}

impl From<ExitStatus> for ScriptExit {
    fn from(status: ExitStatus) -> Self {
        match status.code() {
            Some(0) => ScriptExit::Success,
            Some(code) => ScriptExit::Code(code),
            None => ScriptExit::Fault,
        }
    }
}

/// Something that can execute decoded source.
pub trait Evaluator {
    /// Runs `script` to completion and reports how it ended.
    ///
    /// # Errors
    ///
    /// Returns an error only when the program could not be started at all;
    /// faults inside the program are reported through [`ScriptExit`].
    fn evaluate(&self, script: &Script<'_>) -> Result<ScriptExit>;
}

impl<E: Evaluator + ?Sized> Evaluator for &E {
    fn evaluate(&self, script: &Script<'_>) -> Result<ScriptExit> {
        (**self).evaluate(script)
    }
}

/// Runs scripts with an external interpreter.
///
/// The source is written to a temporary file and the interpreter is invoked
/// as `program [args...] <tempfile> [argv[1..]...]`, inheriting stdio.
///
/// `argv[0]` is not forwarded: the interpreter sees the temporary file as the
/// script path (`sys.argv[0]`, `__file__`, `$0`). The input path from
/// [`Script::name`] is exported as `DONK_SCRIPT` instead.
///
/// # Examples
///
/// ```rust
/// use donklang::ProcessEvaluator;
///
/// let evaluator = ProcessEvaluator::new("python3").with_arg("-u");
/// assert_eq!(evaluator.program(), "python3");
///
/// let evaluator: ProcessEvaluator = "node --no-warnings".parse().unwrap();
/// assert_eq!(evaluator.args(), ["--no-warnings"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProcessEvaluator {
    program: String,
    args: Vec<String>,
}

impl Default for ProcessEvaluator {
    fn default() -> Self {
        ProcessEvaluator::new(DEFAULT_INTERPRETER)
    }
}

impl ProcessEvaluator {
    pub fn new(program: impl Into<String>) -> Self {
        ProcessEvaluator {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Builds an evaluator from a command line split into words.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when `words` is empty.
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut words = words.into_iter().map(Into::into);
        let program = words
            .next()
            .filter(|p| !p.is_empty())
            .ok_or_else(|| Error::config("interpreter command is empty"))?;
        Ok(ProcessEvaluator {
            program,
            args: words.collect(),
        })
    }

    #[must_use]
    pub fn with_arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl std::str::FromStr for ProcessEvaluator {
    type Err = Error;

    /// Splits on whitespace; no shell quoting is interpreted.
    fn from_str(s: &str) -> Result<Self> {
        ProcessEvaluator::from_words(s.split_whitespace())
    }
}

impl Evaluator for ProcessEvaluator {
    fn evaluate(&self, script: &Script<'_>) -> Result<ScriptExit> {
        let mut file = tempfile::Builder::new()
            .prefix("donk-")
            .tempfile()
            .map_err(|e| Error::io(&e.to_string()))?;
        file.write_all(script.source.as_bytes())
            .and_then(|()| file.flush())
            .map_err(|e| Error::io(&e.to_string()))?;

        debug!(
            program = %self.program,
            script = %script.name.display(),
            temp = %file.path().display(),
            args = ?script.args(),
            "spawning interpreter"
        );

        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(file.path())
            .args(script.args())
            .env(SCRIPT_ENV, script.name)
            .status()
            .map_err(|e| Error::evaluator(&self.program, e))?;

        let exit = ScriptExit::from(status);
        info!(program = %self.program, ?exit, "script finished");
        Ok(exit)
    }
}

/// Decodes `path` and evaluates it with `args` appended to the argument vector.
///
/// # Errors
///
/// Returns [`Error::NotFound`] when `path` is absent, or the evaluator's error
/// when the program cannot be started.
pub fn run_file<E>(
    codec: &RunLengthCodec,
    path: &Path,
    args: Vec<String>,
    evaluator: &E,
) -> Result<ScriptExit>
where
    E: Evaluator + ?Sized,
{
    let source = codec.decode_file(path)?;
    let script = Script::new(path, &source, args);
    evaluator.evaluate(&script)
}
