//! One batch run: read the labels, build the matrix, write the sheets

use crate::config::Settings;
use crate::eval::{ConditionMetrics, ConfusionMatrix, LabeledRow, MultiClassMetrics};
use crate::table::{read_labeled_rows, render_conditions, render_matrix, write_sheets};
use confmat_common::{ConfmatError, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Outcome of a successful run
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub metrics_output: Option<PathBuf>,
    /// Data records in the input
    pub records: usize,
    /// Records skipped for a missing label
    pub dropped: usize,
    pub matrix: ConfusionMatrix,
    pub metrics: MultiClassMetrics,
    pub conditions: Vec<ConditionMetrics>,
}

/// Build the matrix from rows already read
///
/// Fails with `EmptyInput` when `rows` is empty; `dropped` is only reported.
pub fn build_matrix(rows: &[LabeledRow], source: &Path, dropped: usize) -> Result<ConfusionMatrix> {
    if rows.is_empty() {
        return Err(ConfmatError::EmptyInput { path: source.to_path_buf(), dropped });
    }

    let cm = ConfusionMatrix::from_rows(rows);
    if cm.total() != rows.len() {
        return Err(ConfmatError::Internal {
            message: format!("matrix holds {} rows, {} were read", cm.total(), rows.len()),
        });
    }
    Ok(cm)
}

/// Execute a run end to end
///
/// Both sheets are rendered before anything is written and committed
/// together, so a failing run leaves no output behind.
pub fn run(settings: &Settings) -> Result<RunSummary> {
    info!(input = %settings.input.display(), "reading labels");
    let data = read_labeled_rows(&settings.input, &settings.read)?;
    debug!(records = data.records, kept = data.rows.len(), dropped = data.dropped, "input read");

    let matrix = build_matrix(&data.rows, &settings.input, data.dropped)?;
    debug!(labels = matrix.n_classes(), total = matrix.total(), "matrix built");

    let metrics = MultiClassMetrics::from_confusion_matrix(&matrix);
    let conditions = ConditionMetrics::for_each_label(&matrix);

    let matrix_sheet = render_matrix(&matrix, settings.read.delimiter)?;
    let metrics_sheet = match &settings.metrics_output {
        Some(path) => Some((path, render_conditions(&conditions, settings.read.delimiter)?)),
        None => None,
    };

    let mut sheets = vec![(settings.output.as_path(), matrix_sheet.as_slice())];
    if let Some((path, bytes)) = &metrics_sheet {
        sheets.push((path.as_path(), bytes.as_slice()));
    }
    write_sheets(&sheets)?;
    info!(output = %settings.output.display(), sheets = sheets.len(), "output written");

    Ok(RunSummary {
        input: settings.input.clone(),
        output: settings.output.clone(),
        metrics_output: settings.metrics_output.clone(),
        records: data.records,
        dropped: data.dropped,
        matrix,
        metrics,
        conditions,
    })
}
