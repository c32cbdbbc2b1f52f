//! Averaging strategies for multi-class metrics

use serde::Serialize;

/// Averaging strategy for multi-class metrics
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Average {
    /// Calculate metrics for each label, return unweighted mean
    Macro,
    /// Calculate metrics globally by counting total TP, FP, FN
    Micro,
    /// Weighted mean by support (number of actual instances per label)
    Weighted,
}

impl Average {
    pub const ALL: [Average; 3] = [Average::Macro, Average::Micro, Average::Weighted];

    pub fn name(self) -> &'static str {
        match self {
            Average::Macro => "macro avg",
            Average::Micro => "micro avg",
            Average::Weighted => "weighted avg",
        }
    }
}
