//! The end-to-end run: load, substitute, build, execute, report.

use crate::argv::{self, ArgumentVector};
use crate::cli::Cli;
use crate::document::CommandDocument;
use crate::error::Result;
use crate::report::Report;
use crate::runner;
use crate::substitute::{ProcessEnv, VarSource};
use std::path::Path;
use tracing::{debug, info};

/// Run the pipeline for parsed CLI arguments, writing the report to stdout.
pub fn execute(cli: &Cli) -> Result<()> {
    let report = produce_report(&cli.file, &ProcessEnv, cli.dry_run)?;
    report.write_to(std::io::stdout().lock())
}

/// Load the document and build its argument vector.
///
/// The document is dropped once the vector exists.
pub fn prepare(path: &Path, vars: &impl VarSource) -> Result<ArgumentVector> {
    let doc = CommandDocument::load(path)?;
    debug!(
        command = %doc.name,
        flags = doc.spec.flags().len(),
        args = doc.spec.args().len(),
        "loaded command document"
    );
    argv::build(&doc, vars)
}

/// Produce the report without printing it.
///
/// With `dry_run` the command is not executed.
pub fn produce_report(path: &Path, vars: &impl VarSource, dry_run: bool) -> Result<Report> {
    let argv = prepare(path, vars)?;

    if dry_run {
        info!(command = %argv.to_shell_line(), "dry run, not executing");
        return Ok(Report::planned(argv));
    }

    let execution = runner::run(&argv)?;
    if !execution.is_success() {
        info!(exit_code = ?execution.exit_code, "command exited unsuccessfully");
    }

    Ok(Report::from_execution(argv, &execution))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RunError;
    use serde_json::json;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn write_doc(temp_dir: &TempDir, yaml: &str) -> std::path::PathBuf {
        let path = temp_dir.path().join("cmd.yaml");
        std::fs::write(&path, yaml).unwrap();
        path
    }

    fn report_json(report: &Report) -> serde_json::Value {
        serde_json::from_str(&report.to_json_pretty().unwrap()).unwrap()
    }

    #[test]
    fn test_dry_run_does_not_execute() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_doc(&temp_dir, "nonexistent_command_xyz_123:\n  args: ['${WHO}']\n");
        let mut vars = HashMap::new();
        vars.insert("WHO".to_string(), "world".to_string());

        let report = produce_report(&path, &vars, true).unwrap();

        assert_eq!(
            report_json(&report),
            json!({"command": ["nonexistent_command_xyz_123", "world"]})
        );
    }

    #[test]
    fn test_missing_variable_stops_before_execution() {
        let temp_dir = TempDir::new().unwrap();
        let marker = temp_dir.path().join("ran");
        let yaml = format!(
            "touch:\n  args: ['{}', '${{MISSING_VAR}}']\n",
            marker.display()
        );
        let path = write_doc(&temp_dir, &yaml);

        let err = produce_report(&path, &HashMap::new(), false).unwrap_err();

        assert!(matches!(err, RunError::MissingVariable(_)));
        assert!(!marker.exists());
    }

    #[test]
    fn test_two_commands_rejected_before_substitution() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_doc(&temp_dir, "a:\n  args: ['${MISSING_VAR}']\nb: {}\n");

        let err = produce_report(&path, &HashMap::new(), false).unwrap_err();
        assert!(matches!(err, RunError::DocumentShape(_)));
    }

    #[test]
    fn test_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("absent.yaml");

        let err = produce_report(&path, &HashMap::new(), false).unwrap_err();
        assert!(matches!(err, RunError::FileNotFound(_)));
    }

    #[cfg(unix)]
    #[test]
    fn test_echo_report() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_doc(&temp_dir, "echo:\n  args: [hello]\n");

        let report = produce_report(&path, &HashMap::new(), false).unwrap();

        assert_eq!(
            report_json(&report),
            json!({"command": ["echo", "hello"], "output": "hello", "error": ""})
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_json_output_is_embedded() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_doc(&temp_dir, "echo:\n  args: ['{\"a\":1}']\n");

        let report = produce_report(&path, &HashMap::new(), false).unwrap();

        assert_eq!(
            report_json(&report),
            json!({"command": ["echo", "{\"a\":1}"], "output": {"a": 1}})
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_command_is_reported_in_band() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_doc(&temp_dir, "sh:\n  flags:\n    c: 'echo bad >&2; exit 7'\n");

        let report = produce_report(&path, &HashMap::new(), false).unwrap();

        assert_eq!(
            report_json(&report),
            json!({"command": ["sh", "-c", "echo bad >&2; exit 7"], "output": "", "error": "bad"})
        );
    }
}
