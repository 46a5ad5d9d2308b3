//! Command document model for yamlrun.
//!
//! A document is a YAML mapping with exactly one top-level key, the command
//! name, whose value describes the flags and positional arguments:
//!
//! ```yaml
//! grep:
//!   flags:
//!     i: null
//!     regexp: ["${PATTERN}", "TODO"]
//!   args: [src]
//! ```

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::{CommandDocument, CommandSpec};
pub use types::{FlagValue, Scalar};
