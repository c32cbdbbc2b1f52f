//! Rendering and writing the output spreadsheets

use crate::eval::{ConditionMetrics, ConfusionMatrix, CONDITION_COLUMNS};
use confmat_common::{ConfmatError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Top-left header cell of the matrix sheet
pub const CORNER_HEADER: &str = "actual\\predicted";

/// File name of the matrix sheet when no output path is given
pub const DEFAULT_OUTPUT_STEM: &str = "output_confusion_matrix";

/// `output_confusion_matrix.<csv|tsv>` in the input's directory
pub fn default_output_path(input: &Path, delimiter: u8) -> PathBuf {
    let dir = input.parent().unwrap_or_else(|| Path::new(""));
    dir.join(format!("{DEFAULT_OUTPUT_STEM}.{}", extension_for(delimiter)))
}

/// `<stem>_metrics.<ext>` next to the matrix sheet
pub fn metrics_output_path(output: &Path) -> PathBuf {
    let stem = output.file_stem().and_then(|s| s.to_str()).unwrap_or(DEFAULT_OUTPUT_STEM);
    let name = match output.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{stem}_metrics.{ext}"),
        None => format!("{stem}_metrics"),
    };
    output.with_file_name(name)
}

fn extension_for(delimiter: u8) -> &'static str {
    if delimiter == b'\t' {
        "tsv"
    } else {
        "csv"
    }
}

/// Matrix sheet: header row of labels, then one row of counts per actual label
pub fn render_matrix(cm: &ConfusionMatrix, delimiter: u8) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new().delimiter(delimiter).from_writer(Vec::new());

    let header = std::iter::once(CORNER_HEADER).chain(cm.labels().iter());
    writer.write_record(header).map_err(serialization_error)?;

    for (i, label) in cm.labels().iter().enumerate() {
        let counts = cm.matrix()[i].iter().map(usize::to_string);
        let record: Vec<String> = std::iter::once(label.to_string()).chain(counts).collect();
        writer.write_record(&record).map_err(serialization_error)?;
    }

    finish(writer)
}

/// Per-condition sheet, one row per label
pub fn render_conditions(conditions: &[ConditionMetrics], delimiter: u8) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new().delimiter(delimiter).from_writer(Vec::new());

    writer.write_record(CONDITION_COLUMNS).map_err(serialization_error)?;
    for condition in conditions {
        writer.write_record(condition.to_record()).map_err(serialization_error)?;
    }

    finish(writer)
}

/// Write every rendered sheet, or none of them
///
/// Each sheet is staged in a hidden sibling file, then renamed over its
/// target. On any failure the staged files and the sheets already moved into
/// place are removed.
pub fn write_sheets(sheets: &[(&Path, &[u8])]) -> Result<()> {
    let mut staged: Vec<PathBuf> = Vec::with_capacity(sheets.len());
    for (path, bytes) in sheets {
        let staging = staging_path(path);
        if let Err(e) = fs::write(&staging, bytes) {
            discard(staged.iter().map(PathBuf::as_path).chain(std::iter::once(staging.as_path())));
            return Err(write_error(path, e));
        }
        staged.push(staging);
    }

    for (i, (path, _)) in sheets.iter().enumerate() {
        if let Err(e) = fs::rename(&staged[i], path) {
            let committed = sheets[..i].iter().map(|(p, _)| *p);
            discard(committed.chain(staged[i..].iter().map(PathBuf::as_path)));
            return Err(write_error(path, e));
        }
        debug!(output = %path.display(), "sheet committed");
    }
    Ok(())
}

/// `.<name>.partial` in the target's directory, so the rename stays on one filesystem
fn staging_path(path: &Path) -> PathBuf {
    let name = path.file_name().map_or_else(
        || DEFAULT_OUTPUT_STEM.into(),
        |n| n.to_string_lossy().into_owned(),
    );
    path.with_file_name(format!(".{name}.partial"))
}

fn discard<'a>(paths: impl IntoIterator<Item = &'a Path>) {
    for path in paths {
        if let Err(e) = fs::remove_file(path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                warn!(path = %path.display(), error = %e, "could not remove partial output");
            }
        }
    }
}

fn write_error(path: &Path, error: std::io::Error) -> ConfmatError {
    ConfmatError::io(format!("writing output {}", path.display()), error)
}

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<Vec<u8>> {
    writer
        .into_inner()
        .map_err(|e| ConfmatError::Serialization { message: e.error().to_string() })
}

fn serialization_error(error: csv::Error) -> ConfmatError {
    ConfmatError::Serialization { message: error.to_string() }
}
