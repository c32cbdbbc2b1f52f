//! One-vs-rest counts and ratios per condition (label)

use super::confusion::ConfusionMatrix;
use super::metrics::{harmonic_mean, safe_ratio};
use serde::Serialize;

/// Column headers of the per-condition metrics sheet, in write order
pub const CONDITION_COLUMNS: [&str; 13] = [
    "condition",
    "true_positive",
    "false_positive",
    "true_negative",
    "false_negative",
    "sensitivity",
    "specificity",
    "precision",
    "f1_score",
    "check",
    "positive_ground_truth",
    "negative_ground_truth",
    "ground_truth_check",
];

/// Binary counts for one condition against all others
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ConditionMetrics {
    pub condition: String,
    pub true_positive: usize,
    pub false_positive: usize,
    pub true_negative: usize,
    pub false_negative: usize,
}

impl ConditionMetrics {
    /// One entry per label, in matrix order
    pub fn for_each_label(cm: &ConfusionMatrix) -> Vec<Self> {
        cm.labels()
            .iter()
            .enumerate()
            .map(|(class, label)| Self {
                condition: label.to_string(),
                true_positive: cm.true_positives(class),
                false_positive: cm.false_positives(class),
                true_negative: cm.true_negatives(class),
                false_negative: cm.false_negatives(class),
            })
            .collect()
    }

    /// TP / (TP + FN), zero when the condition never occurs
    pub fn sensitivity(&self) -> f64 {
        safe_ratio(self.true_positive, self.true_positive + self.false_negative)
    }

    /// TN / (TN + FP)
    pub fn specificity(&self) -> f64 {
        safe_ratio(self.true_negative, self.true_negative + self.false_positive)
    }

    /// TP / (TP + FP)
    pub fn precision(&self) -> f64 {
        safe_ratio(self.true_positive, self.true_positive + self.false_positive)
    }

    pub fn f1_score(&self) -> f64 {
        harmonic_mean(self.precision(), self.sensitivity())
    }

    /// Rows predicted as this condition (TP + FP)
    pub fn check(&self) -> usize {
        self.true_positive + self.false_positive
    }

    /// Rows whose actual label is this condition (TP + FN)
    pub fn positive_ground_truth(&self) -> usize {
        self.true_positive + self.false_negative
    }

    /// Rows whose actual label is anything else (TN + FP)
    pub fn negative_ground_truth(&self) -> usize {
        self.true_negative + self.false_positive
    }

    /// Always equals the matrix total
    pub fn ground_truth_check(&self) -> usize {
        self.positive_ground_truth() + self.negative_ground_truth()
    }

    /// Cells in [`CONDITION_COLUMNS`] order; ratios to four decimals
    pub fn to_record(&self) -> Vec<String> {
        vec![
            self.condition.clone(),
            self.true_positive.to_string(),
            self.false_positive.to_string(),
            self.true_negative.to_string(),
            self.false_negative.to_string(),
            format!("{:.4}", self.sensitivity()),
            format!("{:.4}", self.specificity()),
            format!("{:.4}", self.precision()),
            format!("{:.4}", self.f1_score()),
            self.check().to_string(),
            self.positive_ground_truth().to_string(),
            self.negative_ground_truth().to_string(),
            self.ground_truth_check().to_string(),
        ]
    }
}
