//! Shared command-line arguments and terminal styling.

use clap::{Args, ValueEnum};

/// Output format for the terminal report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Aligned text tables
    #[default]
    Text,
    /// A single JSON document
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "table" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}. Valid formats: text, json")),
        }
    }
}

/// Verbosity and report-format flags shared by every confmat binary.
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct CommonArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Report format: text or json
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl CommonArgs {
    /// Resolve the flags into runtime settings.
    pub fn to_cli(&self) -> Cli {
        Cli { verbose: self.verbose, quiet: self.quiet, format: self.format }
    }
}

/// Resolved terminal settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cli {
    pub verbose: bool,
    pub quiet: bool,
    pub format: OutputFormat,
}

impl Cli {
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose && !self.quiet
    }
}

/// Line styles for terminal messages.
pub mod styles {
    pub fn header(text: &str) -> String {
        format!("== {text} ==")
    }

    pub fn success(text: &str) -> String {
        format!("✓ {text}")
    }

    pub fn info(text: &str) -> String {
        format!("  {text}")
    }

    pub fn warning(text: &str) -> String {
        format!("⚠ {text}")
    }

    pub fn error(text: &str) -> String {
        format!("✗ {text}")
    }
}
