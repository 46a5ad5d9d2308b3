//! Error types for the yamlrun CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.
//! Every variant is fatal: `main` prints it to stderr and exits with the code
//! returned by [`RunError::exit_code`].

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for yamlrun operations.
#[derive(Error, Debug)]
pub enum RunError {
    /// The document path does not exist.
    #[error("file '{}' not found", .0.display())]
    FileNotFound(PathBuf),

    /// The document exists but could not be read.
    #[error("failed to read '{}': {source}", .path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid YAML.
    #[error("failed to parse YAML: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),

    /// The document parsed but does not describe exactly one command.
    #[error("{0}")]
    DocumentShape(String),

    /// A `${NAME}` placeholder references an undefined variable.
    #[error("environment variable '{0}' is missing")]
    MissingVariable(String),

    /// A `${` was opened but never closed.
    #[error("unclosed environment variable placeholder in: {0}")]
    MalformedPlaceholder(String),

    /// The executable could not be located.
    #[error("command '{0}' not found")]
    CommandNotFound(String),

    /// The executable was found but could not be started.
    #[error("failed to execute command '{command}': {source}")]
    LaunchFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The report could not be rendered or written.
    #[error("failed to write report: {0}")]
    Output(String),
}

impl RunError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            RunError::FileNotFound(_)
            | RunError::ReadFailed { .. }
            | RunError::InvalidYaml(_)
            | RunError::DocumentShape(_)
            | RunError::Output(_) => exit_codes::USER_ERROR,
            RunError::MissingVariable(_) | RunError::MalformedPlaceholder(_) => {
                exit_codes::SUBSTITUTION_FAILURE
            }
            RunError::CommandNotFound(_) | RunError::LaunchFailed { .. } => {
                exit_codes::LAUNCH_FAILURE
            }
        }
    }
}

/// Result type alias for yamlrun operations.
pub type Result<T> = std::result::Result<T, RunError>;
