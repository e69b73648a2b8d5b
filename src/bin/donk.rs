//! donk: encode, decode and run DonkLang files.
//!
//! # Usage
//!
//! ```bash
//! # Encode a script (pipe separators, offset 0)
//! donk encode hello.py -o hello.donk
//!
//! # Decode to stdout with a shifted mapping
//! donk decode hello.donk --offset 32
//!
//! # Decode and execute, passing arguments to the script
//! donk run hello.donk -- --name world
//!
//! # Run with debug logging
//! donk --debug run hello.donk
//! ```

use clap::Parser;
use donklang::cli::{execute, validate_cli_semantics, Cli};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.debug {
        LevelFilter::DEBUG
    } else if cli.quiet {
        LevelFilter::ERROR
    } else {
        LevelFilter::WARN
    };

    // RUST_LOG, when set, takes precedence over the flags.
    let filter = EnvFilter::builder()
        .with_default_directive(log_level.into())
        .from_env_lossy();

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
        std::process::exit(donklang::exit_code::FAILURE);
    }

    for warning in validate_cli_semantics(&cli) {
        eprintln!("{}", warning);
    }

    std::process::exit(execute(cli, None));
}
