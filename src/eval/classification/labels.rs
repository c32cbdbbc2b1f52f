//! Labeled rows and the sorted label set derived from them

use serde::Serialize;

/// One input record: the ground-truth label and the predicted label
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct LabeledRow {
    pub actual: String,
    pub predicted: String,
}

impl LabeledRow {
    pub fn new(actual: impl Into<String>, predicted: impl Into<String>) -> Self {
        Self { actual: actual.into(), predicted: predicted.into() }
    }
}

/// Distinct labels from both columns, sorted for deterministic ordering
///
/// Ordering is byte-wise lexicographic, so `"B"` sorts before `"a"`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LabelSet {
    labels: Vec<String>,
}

impl LabelSet {
    /// Sorted union of the actual and predicted labels of `rows`
    pub fn from_rows(rows: &[LabeledRow]) -> Self {
        Self::from_labels(rows.iter().flat_map(|r| [r.actual.as_str(), r.predicted.as_str()]))
    }

    /// Build from any label sequence; duplicates are collapsed
    pub fn from_labels<'a>(labels: impl IntoIterator<Item = &'a str>) -> Self {
        let mut labels: Vec<String> = labels.into_iter().map(str::to_string).collect();
        labels.sort_unstable();
        labels.dedup();
        Self { labels }
    }

    /// Position of `label` in the ordering
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.labels.binary_search_by(|l| l.as_str().cmp(label)).ok()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.labels
    }
}
