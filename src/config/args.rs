//! Command-line arguments

use crate::table::MissingPolicy;
use clap::Parser;
use confmat_common::CommonArgs;
use std::path::PathBuf;

/// confmat: build a confusion matrix from a spreadsheet of actual vs. predicted labels
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "confmat")]
#[command(version)]
#[command(
    about = "Build a confusion matrix spreadsheet from actual and predicted label columns"
)]
pub struct Cli {
    /// Input spreadsheet (delimited text with a header row)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Column holding the ground-truth labels [default: actual]
    #[arg(long, value_name = "NAME")]
    pub actual_column: Option<String>,

    /// Column holding the predicted labels [default: predicted]
    #[arg(long, value_name = "NAME")]
    pub predicted_column: Option<String>,

    /// Field delimiter: a single character or "tab" [default: from file extension]
    #[arg(short, long)]
    pub delimiter: Option<String>,

    /// Rows with an empty label: drop them or fail [default: drop]
    #[arg(long, value_enum)]
    pub missing: Option<MissingPolicy>,

    /// Lowercase labels before counting
    #[arg(long, overrides_with = "no_lowercase_labels")]
    pub lowercase_labels: bool,

    /// Keep label case even if the config file enables lowercasing
    #[arg(long, overrides_with = "lowercase_labels")]
    pub no_lowercase_labels: bool,

    /// Also write per-condition metrics next to the matrix
    #[arg(short, long, overrides_with = "no_metrics")]
    pub metrics: bool,

    /// Write only the matrix even if the config file enables metrics
    #[arg(long, overrides_with = "metrics")]
    pub no_metrics: bool,

    /// Output path [default: output_confusion_matrix.csv beside the input]
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// YAML file with default values for the options above
    #[arg(short, long, value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Parse CLI arguments from a string slice (for testing)
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}
