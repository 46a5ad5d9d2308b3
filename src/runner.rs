//! Child process execution.
//!
//! Runs an [`ArgumentVector`] to completion and captures its output. The
//! child's exit status is returned as data; only a failure to start the
//! process is an error.

use crate::argv::ArgumentVector;
use crate::error::{Result, RunError};
use std::io::ErrorKind;
use std::process::{Command, Stdio};
use tracing::{debug, info};

/// Result of running the command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Execution {
    /// Exit code of the process (None if it was terminated by a signal).
    pub exit_code: Option<i32>,
    /// Captured standard output, decoded lossily as UTF-8.
    pub stdout: String,
    /// Captured standard error, decoded lossily as UTF-8.
    pub stderr: String,
}

impl Execution {
    pub fn is_success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Run the command and wait for it to finish.
///
/// The child inherits the environment, gets a null stdin, and has both output
/// streams captured in full.
pub fn run(argv: &ArgumentVector) -> Result<Execution> {
    let program = argv.program();
    info!(command = %argv.to_shell_line(), "running command");

    let output = Command::new(program)
        .args(argv.args())
        .stdin(Stdio::null())
        .output()
        .map_err(|e| match e.kind() {
            ErrorKind::NotFound => RunError::CommandNotFound(program.to_string()),
            _ => RunError::LaunchFailed {
                command: program.to_string(),
                source: e,
            },
        })?;

    let execution = Execution {
        exit_code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    };

    debug!(
        exit_code = ?execution.exit_code,
        stdout_bytes = output.stdout.len(),
        stderr_bytes = output.stderr.len(),
        "command finished"
    );

    Ok(execution)
}
