//! Error types with actionable diagnostics.
//!
//! Every message states the problem and ends with a `→` hint telling the user
//! what to change, so a failed run can be fixed without reading the source.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for confmat operations.
pub type Result<T> = std::result::Result<T, ConfmatError>;

/// Coarse error classes reported to the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Wrong or missing columns, malformed records, rejected rows.
    InputFormat,
    /// No usable rows remained after filtering.
    EmptyInput,
    /// File not found, unreadable or unwritable.
    Io,
    /// Invalid configuration file or option value.
    Config,
    /// Unexpected internal condition.
    Internal,
}

/// Errors that can occur while building a confusion matrix.
#[derive(Error, Debug)]
pub enum ConfmatError {
    /// Input spreadsheet does not exist.
    #[error("Input file not found: {path}\n  → Check the path passed as <INPUT>")]
    InputNotFound { path: PathBuf },

    /// Input could not be parsed as delimited text.
    #[error("Malformed input in {path}: {message}\n  → Check that the file is delimited text with a header row")]
    InputFormat { path: PathBuf, message: String },

    /// A designated label column is absent from the header row.
    #[error("Column '{column}' not found in input (available: {available})\n  → Use --{flag} to name the column holding these labels")]
    MissingColumn { column: String, flag: String, available: String },

    /// Both designations resolved to the same header.
    #[error("Actual and predicted labels both resolve to column '{column}'\n  → Use --actual-column and --predicted-column to name two distinct columns")]
    AmbiguousColumns { column: String },

    /// A row lacked a label while the reject policy was active.
    #[error("Missing {column} label on data line {line}\n  → Fill in the value or use --missing drop to skip such rows")]
    MissingLabel { line: u64, column: String },

    /// No rows survived filtering.
    #[error("No usable rows in {path} ({dropped} dropped for missing labels)\n  → The input needs at least one row with both labels present")]
    EmptyInput { path: PathBuf, dropped: usize },

    /// Configuration file not found at expected path.
    #[error("Configuration file not found: {path}\n  → Create the file or drop --config")]
    ConfigNotFound { path: PathBuf },

    /// Configuration file has invalid syntax.
    #[error("Invalid configuration syntax in {path}:\n  {message}\n  → Check YAML syntax at the indicated line")]
    ConfigParsing { path: PathBuf, message: String },

    /// Configuration value is invalid.
    #[error("Invalid configuration value for '{field}': {message}\n  → {suggestion}")]
    ConfigValue { field: String, message: String, suggestion: String },

    /// IO error with context.
    #[error("IO error: {context}\n  Cause: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// Serialization error.
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Generic error for unexpected conditions.
    #[error("Internal error: {message}\n  → Please report this as a bug")]
    Internal { message: String },
}

impl ConfmatError {
    /// Create an IO error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io { context: context.into(), source }
    }

    /// Class of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InputFormat { .. }
            | Self::MissingColumn { .. }
            | Self::AmbiguousColumns { .. }
            | Self::MissingLabel { .. } => ErrorKind::InputFormat,
            Self::EmptyInput { .. } => ErrorKind::EmptyInput,
            Self::InputNotFound { .. } | Self::Io { .. } => ErrorKind::Io,
            Self::ConfigNotFound { .. } | Self::ConfigParsing { .. } | Self::ConfigValue { .. } => {
                ErrorKind::Config
            }
            Self::Serialization { .. } | Self::Internal { .. } => ErrorKind::Internal,
        }
    }

    /// Get the error code for structured output.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InputNotFound { .. } => "E001",
            Self::InputFormat { .. } => "E010",
            Self::MissingColumn { .. } => "E011",
            Self::AmbiguousColumns { .. } => "E012",
            Self::MissingLabel { .. } => "E013",
            Self::EmptyInput { .. } => "E020",
            Self::ConfigNotFound { .. } => "E030",
            Self::ConfigParsing { .. } => "E031",
            Self::ConfigValue { .. } => "E032",
            Self::Io { .. } => "E050",
            Self::Serialization { .. } => "E051",
            Self::Internal { .. } => "E999",
        }
    }
}
