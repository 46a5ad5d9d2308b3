//! CLI argument parsing for yamlrun.
//!
//! Uses clap derive macros for declarative argument definitions.
//! The pipeline itself lives in the `pipeline` module.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Yamlrun: run a command described by a YAML document.
///
/// The document names one command and lists its flags and positional
/// arguments. `${NAME}` placeholders are filled in from the environment,
/// the command is run, and the result is printed as JSON:
/// - parsed JSON output, if the command printed JSON
/// - otherwise the raw output together with its stderr
#[derive(Parser, Debug)]
#[command(name = "yamlrun")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the YAML command document.
    pub file: PathBuf,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace).
    ///
    /// RUST_LOG takes precedence when set.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Print the command that would run without running it.
    #[arg(long)]
    pub dry_run: bool,
}

impl Cli {
    /// Parse CLI arguments from the process arguments.
    ///
    /// Returns clap's error untouched so the caller decides how to exit.
    pub fn parse_args() -> Result<Self, clap::Error> {
        Cli::try_parse()
    }
}
