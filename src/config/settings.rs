//! Effective settings for one run: defaults, then file, then flags

use super::args::Cli;
use super::file::FileConfig;
use crate::table::{default_output_path, delimiter_for_path, metrics_output_path, ReadOptions};
use confmat_common::{ConfmatError, Result};
use std::path::{Path, PathBuf};

/// Everything a run needs, fully resolved
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Set when per-condition metrics are requested
    pub metrics_output: Option<PathBuf>,
    pub read: ReadOptions,
}

impl Settings {
    /// Resolve the command line, loading `--config` if given
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => FileConfig::from_file(path)?,
            None => FileConfig::default(),
        };
        Self::resolve(cli, &file)
    }

    /// Merge `file` under the flags of `cli`
    pub fn resolve(cli: &Cli, file: &FileConfig) -> Result<Self> {
        let defaults = ReadOptions::default();

        let actual_column = pick(&cli.actual_column, &file.actual_column)
            .unwrap_or(defaults.actual_column);
        let predicted_column = pick(&cli.predicted_column, &file.predicted_column)
            .unwrap_or(defaults.predicted_column);
        validate_column_name("actual_column", &actual_column)?;
        validate_column_name("predicted_column", &predicted_column)?;

        let delimiter = match pick(&cli.delimiter, &file.delimiter) {
            Some(raw) => parse_delimiter(&raw)?,
            None => delimiter_for_path(&cli.input),
        };

        let read = ReadOptions {
            actual_column,
            predicted_column,
            delimiter,
            missing: cli.missing.or(file.missing).unwrap_or(defaults.missing),
            lowercase_labels: switch(
                cli.lowercase_labels,
                cli.no_lowercase_labels,
                file.lowercase_labels,
            ),
        };

        let output = cli
            .output
            .clone()
            .or_else(|| file.output.clone())
            .unwrap_or_else(|| default_output_path(&cli.input, delimiter));
        ensure_not_input(&output, &cli.input)?;

        let metrics = switch(cli.metrics, cli.no_metrics, file.metrics);
        let metrics_output = metrics.then(|| metrics_output_path(&output));
        if let Some(path) = &metrics_output {
            ensure_not_input(path, &cli.input)?;
        }

        Ok(Self { input: cli.input.clone(), output, metrics_output, read })
    }
}

fn pick(flag: &Option<String>, file: &Option<String>) -> Option<String> {
    flag.clone().or_else(|| file.clone())
}

/// `--x` forces on, `--no-x` forces off, otherwise the file decides
fn switch(on: bool, off: bool, file: Option<bool>) -> bool {
    if on {
        true
    } else if off {
        false
    } else {
        file.unwrap_or(false)
    }
}

fn ensure_not_input(path: &Path, input: &Path) -> Result<()> {
    if path == input {
        return Err(ConfmatError::ConfigValue {
            field: "output".into(),
            message: format!("{} is the input file", path.display()),
            suggestion: "Choose an output path different from the input".into(),
        });
    }
    Ok(())
}

fn validate_column_name(field: &str, name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(ConfmatError::ConfigValue {
            field: field.to_string(),
            message: "column name is empty".into(),
            suggestion: "Give the header text of the label column, e.g. 'actual'".into(),
        });
    }
    Ok(())
}

/// Parse a delimiter option: one ASCII character, or `tab` / `\t`
pub fn parse_delimiter(raw: &str) -> Result<u8> {
    match raw {
        "tab" | "\\t" | "\t" => return Ok(b'\t'),
        "comma" => return Ok(b','),
        "semicolon" => return Ok(b';'),
        _ => {}
    }

    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii() && c != '"' && c != '\n' && c != '\r' => Ok(c as u8),
        _ => Err(ConfmatError::ConfigValue {
            field: "delimiter".into(),
            message: format!("'{raw}' is not a single ASCII character"),
            suggestion: "Use e.g. ',', ';', '|' or 'tab'".into(),
        }),
    }
}
