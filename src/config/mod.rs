//! Run configuration
//!
//! Command-line flags (`args`), an optional YAML file (`file`), and the
//! merged [`Settings`] a run executes with.

mod args;
mod file;
mod settings;


pub use args::{parse_args, Cli};
pub use file::FileConfig;
pub use settings::{parse_delimiter, Settings};
