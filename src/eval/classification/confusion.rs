//! Confusion matrix over string labels

use super::labels::{LabelSet, LabeledRow};
use serde::Serialize;

/// Confusion matrix for multi-class classification
///
/// Element [i][j] counts rows whose actual label is `labels[i]` and whose
/// predicted label is `labels[j]`. The same [`LabelSet`] indexes both axes,
/// so the matrix is always square.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ConfusionMatrix {
    /// Row and column labels
    labels: LabelSet,
    /// The matrix data: matrix[actual][predicted] = count
    matrix: Vec<Vec<usize>>,
}

impl ConfusionMatrix {
    /// Zero-filled matrix over `labels`
    pub fn new(labels: LabelSet) -> Self {
        let n = labels.len();
        Self { labels, matrix: vec![vec![0; n]; n] }
    }

    /// Tabulate (actual, predicted) pairs
    pub fn from_rows(rows: &[LabeledRow]) -> Self {
        let mut cm = Self::new(LabelSet::from_rows(rows));

        for row in rows {
            // Both labels are in the set by construction
            if let (Some(i), Some(j)) =
                (cm.labels.index_of(&row.actual), cm.labels.index_of(&row.predicted))
            {
                cm.matrix[i][j] += 1;
            }
        }

        cm
    }

    /// Tabulate from `(actual, predicted)` tuples
    pub fn from_pairs<A, P>(pairs: impl IntoIterator<Item = (A, P)>) -> Self
    where
        A: Into<String>,
        P: Into<String>,
    {
        let rows: Vec<LabeledRow> =
            pairs.into_iter().map(|(a, p)| LabeledRow::new(a, p)).collect();
        Self::from_rows(&rows)
    }

    /// Get the raw matrix
    pub fn matrix(&self) -> &[Vec<usize>] {
        &self.matrix
    }

    /// Get the class labels
    pub fn labels(&self) -> &LabelSet {
        &self.labels
    }

    /// Get number of classes
    pub fn n_classes(&self) -> usize {
        self.labels.len()
    }

    /// Get element by label; `None` if either label is unknown
    pub fn count(&self, actual: &str, predicted: &str) -> Option<usize> {
        let i = self.labels.index_of(actual)?;
        let j = self.labels.index_of(predicted)?;
        Some(self.matrix[i][j])
    }

    /// Row of counts for an actual label
    pub fn row(&self, actual: &str) -> Option<&[usize]> {
        self.labels.index_of(actual).map(|i| self.matrix[i].as_slice())
    }

    /// Calculate true positives for a class
    pub fn true_positives(&self, class: usize) -> usize {
        self.matrix[class][class]
    }

    /// Calculate false positives for a class (predicted as class but wasn't)
    pub fn false_positives(&self, class: usize) -> usize {
        (0..self.n_classes()).filter(|&i| i != class).map(|i| self.matrix[i][class]).sum()
    }

    /// Calculate false negatives for a class (was class but predicted differently)
    pub fn false_negatives(&self, class: usize) -> usize {
        (0..self.n_classes()).filter(|&j| j != class).map(|j| self.matrix[class][j]).sum()
    }

    /// Calculate true negatives for a class
    pub fn true_negatives(&self, class: usize) -> usize {
        self.total()
            - self.true_positives(class)
            - self.false_positives(class)
            - self.false_negatives(class)
    }

    /// Calculate support (total actual instances) for a class
    pub fn support(&self, class: usize) -> usize {
        self.matrix[class].iter().sum()
    }

    /// Number of times a class was predicted
    pub fn predicted_count(&self, class: usize) -> usize {
        self.matrix.iter().map(|row| row[class]).sum()
    }

    /// Total number of samples
    pub fn total(&self) -> usize {
        self.matrix.iter().flatten().sum()
    }

    /// Sum of the diagonal
    pub fn correct(&self) -> usize {
        (0..self.n_classes()).map(|i| self.matrix[i][i]).sum()
    }

    /// Calculate accuracy
    pub fn accuracy(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.correct() as f64 / total as f64
    }
}
