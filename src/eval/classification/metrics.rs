//! Multi-class classification metrics

use super::average::Average;
use super::confusion::ConfusionMatrix;
use serde::Serialize;

/// Ratio that is zero when the denominator is zero
pub(crate) fn safe_ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

pub(crate) fn harmonic_mean(p: f64, r: f64) -> f64 {
    if p + r > 0.0 {
        2.0 * p * r / (p + r)
    } else {
        0.0
    }
}

/// Multi-class classification metrics
#[derive(Clone, Debug, Serialize)]
pub struct MultiClassMetrics {
    /// Class labels, in matrix order
    pub labels: Vec<String>,
    /// Per-class precision
    pub precision: Vec<f64>,
    /// Per-class recall
    pub recall: Vec<f64>,
    /// Per-class F1 score
    pub f1: Vec<f64>,
    /// Per-class support (count)
    pub support: Vec<usize>,
    /// Number of classes
    pub n_classes: usize,
    /// Summed true positives over all classes
    #[serde(skip)]
    tp_total: usize,
    /// Summed false positives over all classes
    #[serde(skip)]
    fp_total: usize,
    /// Summed false negatives over all classes
    #[serde(skip)]
    fn_total: usize,
}

impl MultiClassMetrics {
    /// Compute metrics from confusion matrix
    pub fn from_confusion_matrix(cm: &ConfusionMatrix) -> Self {
        let n_classes = cm.n_classes();
        let mut precision = Vec::with_capacity(n_classes);
        let mut recall = Vec::with_capacity(n_classes);
        let mut f1 = Vec::with_capacity(n_classes);
        let mut support = Vec::with_capacity(n_classes);
        let (mut tp_total, mut fp_total, mut fn_total) = (0, 0, 0);

        for class in 0..n_classes {
            let tp = cm.true_positives(class);
            let fp = cm.false_positives(class);
            let fn_ = cm.false_negatives(class);

            let p = safe_ratio(tp, tp + fp);
            let r = safe_ratio(tp, tp + fn_);

            precision.push(p);
            recall.push(r);
            f1.push(harmonic_mean(p, r));
            support.push(cm.support(class));

            tp_total += tp;
            fp_total += fp;
            fn_total += fn_;
        }

        Self {
            labels: cm.labels().as_slice().to_vec(),
            precision,
            recall,
            f1,
            support,
            n_classes,
            tp_total,
            fp_total,
            fn_total,
        }
    }

    /// Get averaged precision
    pub fn precision_avg(&self, average: Average) -> f64 {
        match average {
            Average::Micro => safe_ratio(self.tp_total, self.tp_total + self.fp_total),
            _ => self.average_metric(&self.precision, average),
        }
    }

    /// Get averaged recall
    pub fn recall_avg(&self, average: Average) -> f64 {
        match average {
            Average::Micro => safe_ratio(self.tp_total, self.tp_total + self.fn_total),
            _ => self.average_metric(&self.recall, average),
        }
    }

    /// Get averaged F1
    pub fn f1_avg(&self, average: Average) -> f64 {
        match average {
            Average::Micro => harmonic_mean(
                self.precision_avg(Average::Micro),
                self.recall_avg(Average::Micro),
            ),
            _ => self.average_metric(&self.f1, average),
        }
    }

    /// Total support over all classes
    pub fn total_support(&self) -> usize {
        self.support.iter().sum()
    }

    fn average_metric(&self, values: &[f64], average: Average) -> f64 {
        match average {
            Average::Macro | Average::Micro => {
                if values.is_empty() {
                    0.0
                } else {
                    values.iter().sum::<f64>() / values.len() as f64
                }
            }
            Average::Weighted => {
                let total_support = self.total_support();
                if total_support == 0 {
                    return 0.0;
                }
                values
                    .iter()
                    .zip(self.support.iter())
                    .map(|(&v, &s)| v * s as f64)
                    .sum::<f64>()
                    / total_support as f64
            }
        }
    }
}
