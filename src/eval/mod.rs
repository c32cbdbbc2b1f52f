//! Evaluation of predicted labels against ground truth
//!
//! - `classification`: confusion matrix, per-class and per-condition metrics
//!
//! ## Example
//!
//! ```
//! use confmat::eval::{ConfusionMatrix, MultiClassMetrics, Average};
//!
//! let cm = ConfusionMatrix::from_pairs([("A", "A"), ("A", "B"), ("B", "B"), ("B", "B")]);
//! assert_eq!(cm.row("A"), Some(&[1, 1][..]));
//! assert_eq!(cm.row("B"), Some(&[0, 2][..]));
//!
//! let metrics = MultiClassMetrics::from_confusion_matrix(&cm);
//! println!("macro F1: {:.2}", metrics.f1_avg(Average::Macro));
//! ```

pub mod classification;

pub use classification::{
    Average, ConditionMetrics, ConfusionMatrix, LabelSet, LabeledRow, MultiClassMetrics,
    CONDITION_COLUMNS,
};
