//! Shared infrastructure for the confmat CLI.
//!
//! - CLI flags and line styling
//! - Error handling with actionable diagnostics
//! - Table rendering for terminal output

pub mod cli;
pub mod error;
pub mod output;

pub use cli::{Cli, CommonArgs, OutputFormat};
pub use error::{ConfmatError, ErrorKind, Result};
pub use output::{Table, TableBuilder};
