//! Exit code constants for the yamlrun CLI.
//!
//! - 0: Success (the child process may still have failed; that is reported in-band)
//! - 1: User error (missing file, bad YAML, wrong document shape)
//! - 2: Usage error (emitted by clap itself)
//! - 3: Substitution failure (undefined variable, malformed placeholder)
//! - 4: Launch failure (executable not found or not launchable)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: missing or unreadable file, invalid YAML, invalid document shape.
pub const USER_ERROR: i32 = 1;

/// Usage error. clap exits with this code on its own when argument parsing fails.
pub const USAGE_ERROR: i32 = 2;

/// Environment substitution failure: undefined variable or unclosed `${`.
pub const SUBSTITUTION_FAILURE: i32 = 3;

/// The command could not be started.
pub const LAUNCH_FAILURE: i32 = 4;
