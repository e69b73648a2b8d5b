//! Integration tests for the `donk` command line.
//!
//! Uses [`clap::Parser::try_parse_from`] for argument handling and
//! [`execute`] with a recording evaluator for command behaviour, without
//! spawning a subprocess.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use clap::Parser;
use donklang::cli::{execute, validate_cli_semantics, Cli, Commands};
use donklang::{exit_code, Evaluator, Result, RunLengthCodec, Script, ScriptExit};

// ============================================================================
// HELPERS
// ============================================================================

fn try_parse(args: &[&str]) -> std::result::Result<Cli, String> {
    Cli::try_parse_from(args).map_err(|e| e.to_string())
}

fn must_parse(args: &[&str]) -> Cli {
    try_parse(args).unwrap_or_else(|e| panic!("expected parse to succeed, got:\n{}", e))
}

fn path_str(path: &Path) -> &str {
    path.to_str().expect("temp paths are UTF-8")
}

/// Evaluator that records what it was asked to run and returns a fixed exit.
struct Recording {
    exit: ScriptExit,
    calls: RefCell<Vec<(String, Vec<String>)>>,
}

impl Recording {
    fn returning(exit: ScriptExit) -> Self {
        Recording {
            exit,
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl Evaluator for Recording {
    fn evaluate(&self, script: &Script<'_>) -> Result<ScriptExit> {
        self.calls
            .borrow_mut()
            .push((script.source.to_string(), script.argv.clone()));
        Ok(self.exit)
    }
}

fn write_donk(dir: &Path, name: &str, text: &str, offset: i64) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, RunLengthCodec::new(offset).encode(text).unwrap()).unwrap();
    path
}

// ============================================================================
// PARSING
// ============================================================================

#[test]
fn encode_defaults() {
    let cli = must_parse(&["donk", "encode", "in.txt"]);
    match cli.command {
        Commands::Encode {
            infile, out, sep, ..
        } => {
            assert_eq!(infile, PathBuf::from("in.txt"));
            assert_eq!(out, None);
            assert_eq!(sep, None);
        }
        other => panic!("expected Encode, got {:?}", other),
    }
}

#[test]
fn encode_all_flags() {
    let cli = must_parse(&[
        "donk", "encode", "in.txt", "-o", "out.donk", "--offset", "-12", "--sep", "",
    ]);
    assert_eq!(
        cli.command,
        Commands::Encode {
            infile: "in.txt".into(),
            out: Some("out.donk".into()),
            offset: Some(-12),
            sep: Some(String::new()),
        }
    );
}

#[test]
fn offset_must_be_integer() {
    assert!(try_parse(&["donk", "decode", "x", "--offset", "ten"]).is_err());
}

#[test]
fn decode_rejects_sep() {
    assert!(try_parse(&["donk", "decode", "x", "--sep", "|"]).is_err());
}

#[test]
fn run_collects_arguments_after_double_dash() {
    let cli = must_parse(&["donk", "run", "s.donk", "--offset", "5", "--", "-v", "file"]);
    match cli.command {
        Commands::Run {
            offset,
            script_args,
            ..
        } => {
            assert_eq!(offset, Some(5));
            assert_eq!(script_args, ["-v", "file"]);
        }
        other => panic!("expected Run, got {:?}", other),
    }
}

#[test]
fn run_options_after_first_script_argument_belong_to_script() {
    let cli = must_parse(&["donk", "run", "s.donk", "a", "--offset", "3"]);
    match cli.command {
        Commands::Run {
            offset,
            script_args,
            ..
        } => {
            assert_eq!(offset, None);
            assert_eq!(script_args, ["a", "--offset", "3"]);
        }
        other => panic!("expected Run, got {:?}", other),
    }
}

#[test]
fn run_help_explains_argument_order() {
    let help = try_parse(&["donk", "run", "--help"]).unwrap_err();
    let help = help.split_whitespace().collect::<Vec<_>>().join(" ");
    assert!(help.contains("must come before it"), "{}", help);
}

#[test]
fn run_without_arguments() {
    let cli = must_parse(&["donk", "run", "s.donk"]);
    match cli.command {
        Commands::Run { script_args, .. } => assert!(script_args.is_empty()),
        other => panic!("expected Run, got {:?}", other),
    }
}

#[test]
fn missing_subcommand_rejected() {
    assert!(try_parse(&["donk"]).is_err());
}

#[test]
fn debug_and_quiet_conflict() {
    assert!(try_parse(&["donk", "--debug", "--quiet", "decode", "x"]).is_err());
}

#[test]
fn separator_with_space_warns() {
    let cli = must_parse(&["donk", "encode", "x", "--sep", "a b"]);
    let warnings = validate_cli_semantics(&cli);
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("space or newline"));

    let cli = must_parse(&["donk", "encode", "x", "--sep", "#"]);
    assert!(validate_cli_semantics(&cli).is_empty());
}

// ============================================================================
// EXECUTION
// ============================================================================

#[test]
fn encode_then_decode_through_files() {
    let dir = tempfile::tempdir().unwrap();
    let plain = dir.path().join("prog.py");
    let donk = dir.path().join("prog.donk");
    let back = dir.path().join("back.py");
    std::fs::write(&plain, "print('hi')\n").unwrap();

    let code = execute(
        must_parse(&[
            "donk", "encode", path_str(&plain), "-o", path_str(&donk), "--offset", "30",
        ]),
        None,
    );
    assert_eq!(code, exit_code::SUCCESS);

    let code = execute(
        must_parse(&[
            "donk", "decode", path_str(&donk), "-o", path_str(&back), "--offset", "30",
        ]),
        None,
    );
    assert_eq!(code, exit_code::SUCCESS);
    assert_eq!(std::fs::read_to_string(&back).unwrap(), "print('hi')\n");
}

#[test]
fn encode_custom_separator_written() {
    let dir = tempfile::tempdir().unwrap();
    let plain = dir.path().join("a.txt");
    let donk = dir.path().join("a.donk");
    std::fs::write(&plain, "ab").unwrap();

    let code = execute(
        must_parse(&[
            "donk", "encode", path_str(&plain), "-o", path_str(&donk), "--offset", "96", "--sep",
            "/",
        ]),
        None,
    );
    assert_eq!(code, exit_code::SUCCESS);
    assert_eq!(std::fs::read_to_string(&donk).unwrap(), " /  /");
}

#[test]
fn missing_input_exits_with_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.donk");
    for command in ["encode", "decode"] {
        let code = execute(must_parse(&["donk", command, path_str(&missing)]), None);
        assert_eq!(code, exit_code::NOT_FOUND, "{}", command);
    }

    let recording = Recording::returning(ScriptExit::Success);
    let code = execute(
        must_parse(&["donk", "run", path_str(&missing)]),
        Some(&recording),
    );
    assert_eq!(code, exit_code::NOT_FOUND);
    assert!(recording.calls.borrow().is_empty());
}

#[test]
fn unencodable_input_exits_with_invalid_encoding() {
    let dir = tempfile::tempdir().unwrap();
    let plain = dir.path().join("in.txt");
    let out = dir.path().join("out.donk");
    std::fs::write(&plain, "a b").unwrap();

    let code = execute(
        must_parse(&[
            "donk", "encode", path_str(&plain), "-o", path_str(&out), "--offset", "50",
        ]),
        None,
    );
    assert_eq!(code, exit_code::INVALID_ENCODING);
    assert!(!out.exists());
}

#[test]
fn run_passes_decoded_source_and_argv() {
    let dir = tempfile::tempdir().unwrap();
    let script = write_donk(dir.path(), "hello.donk", "print('x')\n", 3);

    let recording = Recording::returning(ScriptExit::Success);
    let code = execute(
        must_parse(&[
            "donk", "run", path_str(&script), "--offset", "3", "--", "one", "--two",
        ]),
        Some(&recording),
    );
    assert_eq!(code, exit_code::SUCCESS);

    let calls = recording.calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "print('x')\n");
    assert_eq!(calls[0].1, [path_str(&script), "one", "--two"]);
}

#[test]
fn run_propagates_script_exit_status() {
    let dir = tempfile::tempdir().unwrap();
    let script = write_donk(dir.path(), "s.donk", "x\n", 0);

    let explicit = Recording::returning(ScriptExit::Code(42));
    let code = execute(must_parse(&["donk", "run", path_str(&script)]), Some(&explicit));
    assert_eq!(code, 42);

    let fault = Recording::returning(ScriptExit::Fault);
    let code = execute(must_parse(&["donk", "run", path_str(&script)]), Some(&fault));
    assert_eq!(code, exit_code::FAILURE);
}

#[test]
fn config_file_supplies_offset_and_separator() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("donk.json");
    let plain = dir.path().join("in.txt");
    let out = dir.path().join("out.donk");
    std::fs::write(&config, r#"{"offset": 96, "separator": ""}"#).unwrap();
    std::fs::write(&plain, "a\nb").unwrap();

    let code = execute(
        must_parse(&[
            "donk",
            "--config",
            path_str(&config),
            "encode",
            path_str(&plain),
            "-o",
            path_str(&out),
        ]),
        None,
    );
    assert_eq!(code, exit_code::SUCCESS);
    assert_eq!(std::fs::read_to_string(&out).unwrap(), " \n  ");
}

#[test]
fn malformed_config_is_failure() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("donk.json");
    let plain = dir.path().join("in.txt");
    std::fs::write(&config, "{ not json").unwrap();
    std::fs::write(&plain, "a").unwrap();

    let code = execute(
        must_parse(&["donk", "--config", path_str(&config), "decode", path_str(&plain)]),
        None,
    );
    assert_eq!(code, exit_code::FAILURE);
}
