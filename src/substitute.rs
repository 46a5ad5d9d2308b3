//! Environment variable substitution for `${NAME}` placeholders.
//!
//! # Syntax
//!
//! - `${NAME}` - Replaced by the value of variable `NAME`
//! - Everything else, including a lone `$` or `{`, is copied unchanged
//!
//! The scan is a single left-to-right pass. The name runs from `${` to the
//! first `}`, so `${A${B}` looks up the variable `A${B`. Substituted values
//! are never rescanned.
//!
//! # Error Handling
//!
//! Undefined variables are an error rather than an empty substitution, and so
//! is a `${` with no closing `}`.

use crate::error::{Result, RunError};
use std::collections::HashMap;

/// A source of variable values.
pub trait VarSource {
    /// Look up a variable, returning `None` when it is not defined.
    fn get(&self, name: &str) -> Option<String>;
}

/// Reads variables from the process environment.
///
/// A variable whose value is not valid UTF-8 counts as undefined.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl VarSource for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl VarSource for HashMap<String, String> {
    fn get(&self, name: &str) -> Option<String> {
        HashMap::get(self, name).cloned()
    }
}

/// Expand every `${NAME}` placeholder in `input`.
///
/// # Examples
///
/// ```ignore
/// let mut vars = HashMap::new();
/// vars.insert("USER".to_string(), "alice".to_string());
///
/// assert_eq!(expand("home/${USER}/bin", &vars)?, "home/alice/bin");
/// ```
pub fn expand(input: &str, vars: &impl VarSource) -> Result<String> {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after_open = &rest[start + 2..];

        let Some(end) = after_open.find('}') else {
            return Err(RunError::MalformedPlaceholder(input.to_string()));
        };

        let name = &after_open[..end];
        match vars.get(name) {
            Some(value) => out.push_str(&value),
            None => return Err(RunError::MissingVariable(name.to_string())),
        }

        rest = &after_open[end + 1..];
    }

    out.push_str(rest);
    Ok(out)
}
