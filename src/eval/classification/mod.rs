//! Classification metrics over string labels
//!
//! Provides:
//! - Labeled rows and the sorted label set
//! - Confusion matrix computation
//! - Per-class precision, recall, F1 with macro, micro and weighted averaging
//! - One-vs-rest counts, sensitivity and specificity per condition

mod average;
mod condition;
mod confusion;
mod labels;
mod metrics;


pub use average::Average;
pub use condition::{ConditionMetrics, CONDITION_COLUMNS};
pub use confusion::ConfusionMatrix;
pub use labels::{LabelSet, LabeledRow};
pub use metrics::MultiClassMetrics;
