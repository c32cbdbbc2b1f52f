//! Terminal report of a finished run

use crate::eval::{Average, ConditionMetrics};
use crate::pipeline::RunSummary;
use confmat_common::cli::styles;
use confmat_common::{ConfmatError, Result, Table, TableBuilder};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Serialize)]
struct AverageScores {
    average: Average,
    precision: f64,
    recall: f64,
    f1: f64,
}

#[derive(Debug, Serialize)]
struct ConditionScores<'a> {
    #[serde(flatten)]
    counts: &'a ConditionMetrics,
    sensitivity: f64,
    specificity: f64,
    precision: f64,
    f1_score: f64,
}

/// JSON form of [`RunSummary`]
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    input: &'a PathBuf,
    output: &'a PathBuf,
    metrics_output: Option<&'a PathBuf>,
    records: usize,
    dropped: usize,
    labels: &'a [String],
    matrix: &'a [Vec<usize>],
    accuracy: f64,
    averages: Vec<AverageScores>,
    conditions: Vec<ConditionScores<'a>>,
}

fn averages(summary: &RunSummary) -> Vec<AverageScores> {
    Average::ALL
        .iter()
        .map(|&average| AverageScores {
            average,
            precision: summary.metrics.precision_avg(average),
            recall: summary.metrics.recall_avg(average),
            f1: summary.metrics.f1_avg(average),
        })
        .collect()
}

/// Render the run as a pretty-printed JSON document
pub fn render_json(summary: &RunSummary) -> Result<String> {
    let report = JsonReport {
        input: &summary.input,
        output: &summary.output,
        metrics_output: summary.metrics_output.as_ref(),
        records: summary.records,
        dropped: summary.dropped,
        labels: summary.matrix.labels().as_slice(),
        matrix: summary.matrix.matrix(),
        accuracy: summary.matrix.accuracy(),
        averages: averages(summary),
        conditions: summary
            .conditions
            .iter()
            .map(|c| ConditionScores {
                counts: c,
                sensitivity: c.sensitivity(),
                specificity: c.specificity(),
                precision: c.precision(),
                f1_score: c.f1_score(),
            })
            .collect(),
    };

    serde_json::to_string_pretty(&report)
        .map_err(|e| ConfmatError::Serialization { message: format!("JSON report: {e}") })
}

/// Matrix as an aligned table, actual labels down the side
pub fn matrix_table(summary: &RunSummary) -> Table {
    let cm = &summary.matrix;
    let headers: Vec<&str> =
        std::iter::once("actual \\ predicted").chain(cm.labels().iter()).collect();

    let mut builder = TableBuilder::new().headers(headers);
    for (i, label) in cm.labels().iter().enumerate() {
        let row: Vec<String> = std::iter::once(label.to_string())
            .chain(cm.matrix()[i].iter().map(usize::to_string))
            .collect();
        builder = builder.row(row);
    }
    builder.build()
}

/// Multi-line text report
pub fn render_text(summary: &RunSummary, verbose: bool) -> String {
    let mut out = String::new();

    out.push_str(&styles::header("Confusion Matrix"));
    out.push('\n');
    out.push_str(&matrix_table(summary).render());
    out.push('\n');

    let mut scores = TableBuilder::new().headers(vec!["", "precision", "recall", "f1-score"]);
    for a in averages(summary) {
        scores = scores.row(vec![
            a.average.name().to_string(),
            format!("{:.4}", a.precision),
            format!("{:.4}", a.recall),
            format!("{:.4}", a.f1),
        ]);
    }
    out.push_str(&scores.build().render());
    out.push_str(&format!("\nAccuracy: {:.4}\n", summary.matrix.accuracy()));

    if verbose {
        out.push('\n');
        out.push_str(&styles::header("Per-condition"));
        out.push('\n');
        let mut conditions = TableBuilder::new().headers(vec![
            "condition",
            "TP",
            "FP",
            "TN",
            "FN",
            "sensitivity",
            "specificity",
        ]);
        for c in &summary.conditions {
            conditions = conditions.row(vec![
                c.condition.clone(),
                c.true_positive.to_string(),
                c.false_positive.to_string(),
                c.true_negative.to_string(),
                c.false_negative.to_string(),
                format!("{:.4}", c.sensitivity()),
                format!("{:.4}", c.specificity()),
            ]);
        }
        out.push_str(&conditions.build().render());
    }

    out.push('\n');
    let kept = summary.records - summary.dropped;
    let rows = format!(
        "Rows: {} read, {kept} counted, {} dropped for missing labels",
        summary.records, summary.dropped
    );
    out.push_str(&if summary.dropped > 0 { styles::warning(&rows) } else { styles::info(&rows) });
    out.push('\n');
    out.push_str(&styles::success(&format!("Wrote {}", summary.output.display())));
    out.push('\n');
    if let Some(path) = &summary.metrics_output {
        out.push_str(&styles::success(&format!("Wrote {}", path.display())));
        out.push('\n');
    }

    out
}
