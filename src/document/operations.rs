//! Document loading and shape validation.

use super::model::{CommandDocument, CommandSpec};
use super::types::Scalar;
use crate::error::{Result, RunError};
use serde_yaml::Value;
use std::path::Path;
use tracing::debug;

impl CommandDocument {
    /// Load a command document from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(CommandDocument)` - Parsed document with exactly one command
    /// * `Err(RunError::FileNotFound)` - The path is not an existing file
    /// * `Err(RunError::InvalidYaml | RunError::DocumentShape)` - Parse or shape failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.is_file() {
            return Err(RunError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path).map_err(|source| RunError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %path.display(), bytes = content.len(), "read command document");
        Self::from_yaml(&content)
    }

    /// Parse a command document from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Self::from_value(Value::Null);
        }
        let root: Value = serde_yaml::from_str(yaml)?;
        Self::from_value(root)
    }

    /// Validate the document shape and split it into name and spec.
    ///
    /// The document must be a mapping with exactly one string key.
    pub fn from_value(root: Value) -> Result<Self> {
        let mapping = match root {
            Value::Mapping(mapping) => mapping,
            Value::Null => {
                return Err(RunError::DocumentShape(
                    "YAML must contain exactly one top-level command, found an empty document"
                        .to_string(),
                ));
            }
            _ => {
                return Err(RunError::DocumentShape(
                    "YAML must contain exactly one top-level command, found a non-mapping document"
                        .to_string(),
                ));
            }
        };

        let count = mapping.len();
        let mut entries = mapping.into_iter();
        let (key, value) = match (entries.next(), entries.next()) {
            (Some(entry), None) => entry,
            _ => {
                return Err(RunError::DocumentShape(format!(
                    "YAML must contain exactly one top-level command, found {}",
                    count
                )));
            }
        };

        // Scalar keys are stringified the same way flag names are, so an
        // unquoted `true:` still names the `true` executable.
        let name = match key {
            Value::Null | Value::Sequence(_) | Value::Mapping(_) | Value::Tagged(_) => {
                return Err(RunError::DocumentShape(format!(
                    "command name must be a non-empty scalar, found {}",
                    describe(&key)
                )));
            }
            scalar => serde_yaml::from_value::<Scalar>(scalar)
                .map_err(|e| RunError::DocumentShape(format!("invalid command name: {}", e)))?
                .to_arg_string(),
        };
        if name.is_empty() {
            return Err(RunError::DocumentShape(
                "command name must be a non-empty scalar, found an empty string".to_string(),
            ));
        }

        let spec = match value {
            Value::Null => CommandSpec::default(),
            value => serde_yaml::from_value::<CommandSpec>(value).map_err(|e| {
                RunError::DocumentShape(format!("invalid spec for command '{}': {}", name, e))
            })?,
        };

        for key in spec.extra.keys() {
            debug!(command = %name, field = %key, "ignoring unknown field in command spec");
        }

        Ok(CommandDocument { name, spec })
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) | Value::Number(_) | Value::String(_) => "a scalar",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
