//! CLI argument definitions and command dispatch for `donk`.
//!
//! Kept in the library so that integration tests can use
//! [`Cli::try_parse_from`] and [`execute`] without spawning a subprocess.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{debug, warn};

use crate::config::{FileConfig, Overrides};
use crate::run::{run_file, Evaluator};
use crate::{exit_code, read_source, write_output, Result, RunLengthCodec, Separator};

/// donk: encode, decode and run DonkLang files.
///
/// DonkLang writes every character as a run of spaces whose length is the
/// character's code point minus an offset.
///
/// Quick start:
///   donk encode hello.py -o hello.donk    Encode a file
///   donk decode hello.donk                Print the decoded text
///   donk run hello.donk -- a b            Decode and execute with arguments
#[derive(Parser, Debug)]
#[command(name = "donk")]
#[command(version)]
#[command(about = "donk: encode | decode | run", long_about = None)]
#[command(after_help = "EXIT STATUS:
  0  success
  1  the script faulted, or another runtime failure
  2  input file not found
  3  input contains a character that cannot be encoded")]
pub struct Cli {
    /// Enable debug logging.
    #[arg(short, long, global = true, help_heading = "Global Options")]
    pub debug: bool,

    /// Only log errors.
    #[arg(
        short,
        long,
        global = true,
        conflicts_with = "debug",
        help_heading = "Global Options"
    )]
    pub quiet: bool,

    /// Path to a JSON config file (keys: offset, separator, interpreter).
    #[arg(long, global = true, env = "DONK_CONFIG", help_heading = "Global Options")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Encode a plain text file to DonkLang.
    Encode {
        /// File to encode.
        infile: PathBuf,

        /// Write output here instead of stdout.
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Subtracted from each code point to get the run length [default: 0].
        #[arg(long, env = "DONK_OFFSET", allow_negative_numbers = true)]
        offset: Option<i64>,

        /// Written after every run; pass an empty string for none [default: |].
        #[arg(long, env = "DONK_SEPARATOR")]
        sep: Option<String>,
    },

    /// Decode a DonkLang file to plain text.
    Decode {
        /// File to decode.
        infile: PathBuf,

        /// Write output here instead of stdout.
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Added to each run length to get the code point [default: 0].
        #[arg(long, env = "DONK_OFFSET", allow_negative_numbers = true)]
        offset: Option<i64>,
    },

    /// Decode a DonkLang file and execute the result.
    Run {
        /// File to decode and execute.
        infile: PathBuf,

        /// Added to each run length to get the code point [default: 0].
        #[arg(long, env = "DONK_OFFSET", allow_negative_numbers = true)]
        offset: Option<i64>,

        /// Interpreter command line [default: python3].
        #[arg(long, env = "DONK_INTERPRETER")]
        interpreter: Option<String>,

        /// Arguments passed to the script.
        ///
        /// Everything from the first script argument on goes to the script,
        /// so `--offset` and `--interpreter` must come before it.
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        script_args: Vec<String>,
    },
}

impl Commands {
    fn overrides(&self) -> Overrides {
        match self {
            Commands::Encode { offset, sep, .. } => Overrides {
                offset: *offset,
                separator: sep.clone(),
                interpreter: None,
            },
            Commands::Decode { offset, .. } => Overrides {
                offset: *offset,
                ..Overrides::default()
            },
            Commands::Run {
                offset,
                interpreter,
                ..
            } => Overrides {
                offset: *offset,
                separator: None,
                interpreter: interpreter.clone(),
            },
        }
    }
}

/// Semantic warnings clap cannot express. Printed, never fatal.
#[must_use]
pub fn validate_cli_semantics(cli: &Cli) -> Vec<String> {
    let mut warnings = Vec::new();
    if let Commands::Encode { sep: Some(sep), .. } = &cli.command {
        if !Separator::from(sep.as_str()).is_decoder_transparent() {
            warnings.push(format!(
                "warning: separator {:?} contains a space or newline; the output will not decode back to the input",
                sep
            ));
        }
    }
    warnings
}

/// Runs the parsed command, reporting failures on stderr.
///
/// `evaluator` is used by `run` when given; otherwise the configured
/// interpreter is spawned. Returns the process exit status.
pub fn execute(cli: Cli, evaluator: Option<&dyn Evaluator>) -> i32 {
    match dispatch(cli, evaluator) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {}", err);
            err.exit_code()
        }
    }
}

fn dispatch(cli: Cli, evaluator: Option<&dyn Evaluator>) -> Result<i32> {
    let file_config = FileConfig::load_optional(cli.config.as_deref())?;
    let resolved = file_config.resolve(cli.command.overrides())?;
    let codec = RunLengthCodec::from(&resolved.options);
    debug!(command = ?cli.command, options = ?resolved.options, "dispatching");

    match cli.command {
        Commands::Encode { infile, out, .. } => {
            let encoded = codec.encode_file(&infile, &resolved.options.separator)?;
            write_output(out.as_deref(), &encoded)?;
            Ok(exit_code::SUCCESS)
        }
        Commands::Decode { infile, out, .. } => {
            let report = codec.decode_report(&read_source(&infile)?);
            if report.replacements > 0 {
                warn!(
                    path = %infile.display(),
                    replacements = report.replacements,
                    "some runs had no valid code point and were replaced with U+FFFD"
                );
            }
            write_output(out.as_deref(), &report.text)?;
            Ok(exit_code::SUCCESS)
        }
        Commands::Run {
            infile,
            script_args,
            ..
        } => {
            let exit = match evaluator {
                Some(evaluator) => run_file(&codec, &infile, script_args, evaluator)?,
                None => run_file(&codec, &infile, script_args, &resolved.evaluator)?,
            };
            Ok(exit.exit_code())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_from_encode() {
        let cli = Cli::try_parse_from(["donk", "encode", "a.txt", "--offset", "3", "--sep", ""])
            .unwrap();
        let overrides = cli.command.overrides();
        assert_eq!(overrides.offset, Some(3));
        assert_eq!(overrides.separator.as_deref(), Some(""));
    }

    #[test]
    fn test_decode_has_no_separator_override() {
        let cli = Cli::try_parse_from(["donk", "decode", "a.donk", "--offset=-4"]).unwrap();
        let overrides = cli.command.overrides();
        assert_eq!(overrides.offset, Some(-4));
        assert_eq!(overrides.separator, None);
    }
}
