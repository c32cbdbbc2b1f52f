//! Logging utilities for CLI output
//!
//! User-facing lines go to stdout through [`log`]; diagnostic events go to
//! stderr through `tracing`, filtered by the same level.

use tracing::level_filters::LevelFilter;

/// Log level for CLI output
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    /// Suppress all output
    Quiet,
    /// Normal output level
    Normal,
    /// Verbose output with additional details
    Verbose,
}

impl LogLevel {
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        if quiet {
            LogLevel::Quiet
        } else if verbose {
            LogLevel::Verbose
        } else {
            LogLevel::Normal
        }
    }

    /// Most detailed `tracing` level shown at this output level
    pub fn trace_filter(self) -> LevelFilter {
        match self {
            LogLevel::Quiet => LevelFilter::OFF,
            LogLevel::Normal => LevelFilter::WARN,
            LogLevel::Verbose => LevelFilter::DEBUG,
        }
    }
}

/// Log a message if the current level permits it
pub fn log(level: LogLevel, required: LogLevel, msg: &str) {
    if level != LogLevel::Quiet && (level == required || required == LogLevel::Normal) {
        println!("{msg}");
    }
}

/// Install the stderr `tracing` subscriber; later calls are no-ops
pub fn init_tracing(level: LogLevel) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(level.trace_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
