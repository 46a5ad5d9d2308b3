//! Yamlrun: run a command described by a YAML document.
//!
//! This is the main entry point for the `yamlrun` CLI. It parses arguments,
//! sets up logging, runs the pipeline, and handles errors with proper exit
//! codes.

mod cli;
pub mod argv;
pub mod document;
pub mod error;
pub mod exit_codes;
pub mod logging;
pub mod pipeline;
pub mod report;
pub mod runner;
pub mod substitute;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = match Cli::parse_args() {
        Ok(cli) => cli,
        Err(err) => {
            // clap renders usage errors to stderr and --help/--version to stdout
            let _ = err.print();
            let code = if err.use_stderr() {
                exit_codes::USAGE_ERROR
            } else {
                exit_codes::SUCCESS
            };
            return ExitCode::from(code as u8);
        }
    };

    logging::init(cli.verbose);

    match pipeline::execute(&cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            // Return appropriate exit code
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
