//! Command document and command spec definitions.

use super::types::{FlagValue, Flags, Scalar};
use serde::Deserialize;
use std::collections::BTreeMap;

/// A parsed command document: one command name and its spec.
///
/// This is the single top-level entry of the YAML file:
///
/// ```yaml
/// curl:
///   flags:
///     s: null
///     header: ["Authorization: Bearer ${TOKEN}"]
///   args:
///     - https://example.com/api
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CommandDocument {
    /// The executable to run, taken verbatim from the top-level key.
    pub name: String,
    pub spec: CommandSpec,
}

/// Flags and positional arguments for a command.
///
/// `flags: null`, `args: null` and a missing key are all treated as empty.
/// Unknown fields are ignored for forward compatibility.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CommandSpec {
    flags: Option<Flags>,
    args: Option<Vec<Scalar>>,

    /// Unknown fields, kept so they can be reported at debug level.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl CommandSpec {
    /// Flags in document order.
    pub fn flags(&self) -> &[(String, FlagValue)] {
        self.flags.as_ref().map(Flags::as_slice).unwrap_or_default()
    }

    /// Positional arguments in document order.
    pub fn args(&self) -> &[Scalar] {
        self.args.as_deref().unwrap_or(&[])
    }
}
