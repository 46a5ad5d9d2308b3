//! Argument vector construction.
//!
//! Turns a [`CommandDocument`] into the ordered list of strings handed to the
//! child process: the command name, then flag tokens in document order, then
//! positional arguments in document order.

use crate::document::{CommandDocument, FlagValue};
use crate::error::Result;
use crate::substitute::{VarSource, expand};
use serde::Serialize;
use tracing::trace;

/// The ordered argument vector, `argv[0]` being the program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ArgumentVector(Vec<String>);

impl ArgumentVector {
    pub fn program(&self) -> &str {
        &self.0[0]
    }

    /// Everything after the program name.
    pub fn args(&self) -> &[String] {
        &self.0[1..]
    }

    /// Render as a shell-quoted line for logs.
    pub fn to_shell_line(&self) -> String {
        shell_words::join(&self.0)
    }
}

impl AsRef<[String]> for ArgumentVector {
    fn as_ref(&self) -> &[String] {
        &self.0
    }
}

/// Spell a flag name as a command-line token.
///
/// One-character names use a single dash (`-v`), longer names two (`--verbose`).
pub fn flag_token(name: &str) -> String {
    if name.chars().count() == 1 {
        format!("-{}", name)
    } else {
        format!("--{}", name)
    }
}

/// Build the argument vector for a document, expanding `${NAME}` placeholders
/// in every flag value and positional argument.
///
/// The command name is used verbatim. Fails on the first placeholder error,
/// in which case nothing should be executed.
pub fn build(doc: &CommandDocument, vars: &impl VarSource) -> Result<ArgumentVector> {
    let mut argv = vec![doc.name.clone()];

    for (name, value) in doc.spec.flags() {
        let token = flag_token(name);
        match value {
            FlagValue::Many(items) => {
                for item in items {
                    argv.push(token.clone());
                    argv.push(expand(&item.to_arg_string(), vars)?);
                }
            }
            FlagValue::One(scalar) => {
                let value = expand(&scalar.to_arg_string(), vars)?;
                argv.push(token);
                if !value.is_empty() {
                    argv.push(value);
                }
            }
        }
        trace!(flag = %name, "added flag");
    }

    for arg in doc.spec.args() {
        argv.push(expand(&arg.to_arg_string(), vars)?);
    }

    Ok(ArgumentVector(argv))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RunError;
    use std::collections::HashMap;

    fn doc(yaml: &str) -> CommandDocument {
        CommandDocument::from_yaml(yaml).unwrap()
    }

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn build_strs(yaml: &str, v: &HashMap<String, String>) -> Vec<String> {
        build(&doc(yaml), v).unwrap().as_ref().to_vec()
    }

    #[test]
    fn test_flag_token_spelling() {
        assert_eq!(flag_token("v"), "-v");
        assert_eq!(flag_token("verbose"), "--verbose");
        assert_eq!(flag_token("ab"), "--ab");
        assert_eq!(flag_token("é"), "-é");
    }

    #[test]
    fn test_first_element_is_command_name() {
        let v = vars(&[]);
        assert_eq!(build_strs("echo:\n  args: [hello]\n", &v), vec!["echo", "hello"]);
        assert_eq!(build_strs("ls:\n", &v), vec!["ls"]);
    }

    #[test]
    fn test_command_name_is_not_substituted() {
        let v = vars(&[]);
        let argv = build(&doc("'${TOOL}':\n"), &v).unwrap();
        assert_eq!(argv.program(), "${TOOL}");
    }

    #[test]
    fn test_scalar_flags_and_presence_flags() {
        let yaml = r#"
curl:
  flags:
    s: null
    output: out.json
    retry: 3
    silent: ""
"#;
        let v = vars(&[]);
        assert_eq!(
            build_strs(yaml, &v),
            vec!["curl", "-s", "--output", "out.json", "--retry", "3", "--silent"]
        );
    }

    #[test]
    fn test_flag_empty_after_substitution_is_presence_flag() {
        let yaml = "tool:\n  flags:\n    debug: '${EMPTY}'\n";
        let v = vars(&[("EMPTY", "")]);
        assert_eq!(build_strs(yaml, &v), vec!["tool", "--debug"]);
    }

    #[test]
    fn test_sequence_flag_repeats_token() {
        let yaml = r#"
curl:
  flags:
    H: ["Accept: application/json", "Authorization: Bearer ${TOKEN}"]
"#;
        let v = vars(&[("TOKEN", "abc")]);
        assert_eq!(
            build_strs(yaml, &v),
            vec![
                "curl",
                "-H",
                "Accept: application/json",
                "-H",
                "Authorization: Bearer abc",
            ]
        );
    }

    #[test]
    fn test_null_sequence_entry_keeps_empty_value() {
        let yaml = "tool:\n  flags:\n    tag: [a, null]\n";
        let v = vars(&[]);
        assert_eq!(build_strs(yaml, &v), vec!["tool", "--tag", "a", "--tag", ""]);
    }

    #[test]
    fn test_empty_sequence_emits_nothing() {
        let yaml = "tool:\n  flags:\n    tag: []\n  args: [x]\n";
        let v = vars(&[]);
        assert_eq!(build_strs(yaml, &v), vec!["tool", "x"]);
    }

    #[test]
    fn test_flags_precede_args_in_document_order() {
        let yaml = r#"
tool:
  args: [first, "${SECOND}"]
  flags:
    zz: 1
    a: null
"#;
        let v = vars(&[("SECOND", "2nd")]);
        assert_eq!(
            build_strs(yaml, &v),
            vec!["tool", "--zz", "1", "-a", "first", "2nd"]
        );
    }

    #[test]
    fn test_null_positional_is_empty_string() {
        let v = vars(&[]);
        assert_eq!(build_strs("tool:\n  args: [null, x]\n", &v), vec!["tool", "", "x"]);
    }

    #[test]
    fn test_missing_variable_aborts_build() {
        let yaml = "tool:\n  args: ['${MISSING_VAR}']\n";
        let err = build(&doc(yaml), &vars(&[])).unwrap_err();
        assert!(matches!(err, RunError::MissingVariable(ref n) if n == "MISSING_VAR"));
    }

    #[test]
    fn test_malformed_placeholder_in_flag_aborts_build() {
        let yaml = "tool:\n  flags:\n    x: '${OOPS'\n";
        let err = build(&doc(yaml), &vars(&[])).unwrap_err();
        assert!(matches!(err, RunError::MalformedPlaceholder(_)));
    }

    #[test]
    fn test_shell_line_quotes_arguments() {
        let v = vars(&[]);
        let argv = build(&doc("echo:\n  args: ['hello world', plain]\n"), &v).unwrap();
        assert_eq!(argv.to_shell_line(), "echo 'hello world' plain");
        assert_eq!(argv.args(), &["hello world".to_string(), "plain".to_string()]);
    }

    #[test]
    fn test_serializes_as_plain_list() {
        let v = vars(&[]);
        let argv = build(&doc("echo:\n  args: [hi]\n"), &v).unwrap();
        assert_eq!(
            serde_json::to_value(&argv).unwrap(),
            serde_json::json!(["echo", "hi"])
        );
    }
}
