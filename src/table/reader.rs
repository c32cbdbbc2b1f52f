//! Reading labeled rows from a delimited spreadsheet

use super::header::{normalize_header, normalize_label, resolve_column};
use crate::eval::LabeledRow;
use clap::ValueEnum;
use confmat_common::{ConfmatError, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// What to do with a row whose actual or predicted label is empty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MissingPolicy {
    /// Skip the row and count it as dropped
    #[default]
    Drop,
    /// Fail the run on the first such row
    Reject,
}

/// How to locate and clean the label columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadOptions {
    pub actual_column: String,
    pub predicted_column: String,
    pub delimiter: u8,
    pub missing: MissingPolicy,
    pub lowercase_labels: bool,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            actual_column: "actual".to_string(),
            predicted_column: "predicted".to_string(),
            delimiter: b',',
            missing: MissingPolicy::Drop,
            lowercase_labels: false,
        }
    }
}

/// Rows kept from one input plus bookkeeping about what was skipped
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabeledData {
    pub rows: Vec<LabeledRow>,
    /// Data records seen, kept or not
    pub records: usize,
    /// Records skipped for a missing label
    pub dropped: usize,
    /// Headers as written in the file
    pub actual_header: String,
    pub predicted_header: String,
}

/// Delimiter implied by a file extension: tab for `.tsv`/`.tab`, else comma
pub fn delimiter_for_path(path: &Path) -> u8 {
    match path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase).as_deref() {
        Some("tsv" | "tab") => b'\t',
        _ => b',',
    }
}

/// Read the label columns of the spreadsheet at `path`
pub fn read_labeled_rows(path: &Path, options: &ReadOptions) -> Result<LabeledData> {
    if !path.exists() {
        return Err(ConfmatError::InputNotFound { path: path.to_path_buf() });
    }
    let file = File::open(path)
        .map_err(|e| ConfmatError::io(format!("opening input {}", path.display()), e))?;
    read_labeled_rows_from(file, path, options)
}

/// Read from any byte source; `source` is only used in error messages
pub fn read_labeled_rows_from<R: Read>(
    reader: R,
    source: &Path,
    options: &ReadOptions,
) -> Result<LabeledData> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let raw_headers = csv_reader.headers().map_err(|e| csv_error(source, &e))?.clone();
    let headers: Vec<String> = raw_headers.iter().map(normalize_header).collect();

    let actual_idx = locate(&headers, &options.actual_column, "actual-column")?;
    let predicted_idx = locate(&headers, &options.predicted_column, "predicted-column")?;
    if actual_idx == predicted_idx {
        return Err(ConfmatError::AmbiguousColumns { column: headers[actual_idx].clone() });
    }
    debug!(
        actual = %raw_headers.get(actual_idx).unwrap_or_default(),
        predicted = %raw_headers.get(predicted_idx).unwrap_or_default(),
        "resolved label columns"
    );

    let mut data = LabeledData {
        actual_header: raw_headers.get(actual_idx).unwrap_or_default().to_string(),
        predicted_header: raw_headers.get(predicted_idx).unwrap_or_default().to_string(),
        ..LabeledData::default()
    };

    for record in csv_reader.records() {
        let record = record.map_err(|e| csv_error(source, &e))?;
        data.records += 1;

        let actual = normalize_label(record.get(actual_idx).unwrap_or(""), options.lowercase_labels);
        let predicted =
            normalize_label(record.get(predicted_idx).unwrap_or(""), options.lowercase_labels);

        let missing = if actual.is_empty() {
            Some(&options.actual_column)
        } else if predicted.is_empty() {
            Some(&options.predicted_column)
        } else {
            None
        };

        if let Some(column) = missing {
            let line = record.position().map_or(0, csv::Position::line);
            match options.missing {
                MissingPolicy::Drop => {
                    debug!(line, column = %column, "dropping row with missing label");
                    data.dropped += 1;
                    continue;
                }
                MissingPolicy::Reject => {
                    return Err(ConfmatError::MissingLabel { line, column: column.clone() });
                }
            }
        }

        data.rows.push(LabeledRow { actual, predicted });
    }

    if data.dropped > 0 {
        info!(dropped = data.dropped, records = data.records, "rows with missing labels were skipped");
    }

    Ok(data)
}

fn locate(headers: &[String], wanted: &str, flag: &str) -> Result<usize> {
    resolve_column(headers, wanted).ok_or_else(|| ConfmatError::MissingColumn {
        column: wanted.to_string(),
        flag: flag.to_string(),
        available: if headers.iter().all(String::is_empty) {
            "none".to_string()
        } else {
            headers.join(", ")
        },
    })
}

fn csv_error(source: &Path, error: &csv::Error) -> ConfmatError {
    if let csv::ErrorKind::Io(io) = error.kind() {
        return ConfmatError::io(
            format!("reading input {}", source.display()),
            std::io::Error::new(io.kind(), io.to_string()),
        );
    }
    let message = match error.position() {
        Some(pos) => format!("line {}: {error}", pos.line()),
        None => error.to_string(),
    };
    ConfmatError::InputFormat { path: PathBuf::from(source), message }
}
