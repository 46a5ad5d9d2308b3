//! JSON report rendering.
//!
//! If the command printed JSON, the report embeds the parsed value:
//!
//! ```json
//! { "command": ["jq", "-n", "{a: 1}"], "output": { "a": 1 } }
//! ```
//!
//! Otherwise the raw text is reported together with whatever the command
//! wrote to stderr:
//!
//! ```json
//! { "command": ["ls", "missing"], "output": "", "error": "ls: missing: No such file or directory" }
//! ```

use crate::argv::ArgumentVector;
use crate::error::{Result, RunError};
use crate::runner::Execution;
use serde::Serialize;
use serde_json::Value;
use std::io::Write;

/// The document printed on stdout.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Report {
    /// The command's stdout parsed as JSON.
    Structured {
        command: ArgumentVector,
        output: Value,
    },
    /// The command's stdout was not JSON.
    Raw {
        command: ArgumentVector,
        output: String,
        error: String,
    },
    /// Produced by `--dry-run`; nothing was executed.
    Planned { command: ArgumentVector },
}

impl Report {
    /// Build a report from a finished execution.
    pub fn from_execution(command: ArgumentVector, execution: &Execution) -> Self {
        let stdout = execution.stdout.trim();

        match serde_json::from_str::<Value>(stdout) {
            Ok(output) => Report::Structured { command, output },
            Err(_) => Report::Raw {
                command,
                output: stdout.to_string(),
                error: execution.stderr.trim().to_string(),
            },
        }
    }

    pub fn planned(command: ArgumentVector) -> Self {
        Report::Planned { command }
    }

    /// Pretty-print with two-space indentation.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| RunError::Output(e.to_string()))
    }

    /// Write the pretty-printed report followed by a newline.
    pub fn write_to(&self, mut out: impl Write) -> Result<()> {
        let json = self.to_json_pretty()?;
        writeln!(out, "{}", json).map_err(|e| RunError::Output(e.to_string()))
    }
}
