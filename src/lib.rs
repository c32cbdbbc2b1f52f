//! confmat: confusion matrices from labeled prediction spreadsheets
//!
//! Reads the actual and predicted label columns of a delimited spreadsheet,
//! cross-tabulates them over the sorted set of labels, and writes the square
//! matrix as a new spreadsheet beside the input.
//!
//! # Example
//!
//! ```
//! use confmat::eval::ConfusionMatrix;
//! use confmat::table::render_matrix;
//!
//! let cm = ConfusionMatrix::from_pairs([("A", "A"), ("A", "B"), ("B", "B"), ("B", "B")]);
//! let sheet = render_matrix(&cm, b',').unwrap();
//! assert_eq!(sheet, b"actual\\predicted,A,B\nA,1,1\nB,0,2\n");
//! ```

pub mod cli;
pub mod config;
pub mod eval;
pub mod pipeline;
pub mod table;

pub use confmat_common::{ConfmatError, ErrorKind, Result};
pub use eval::{ConfusionMatrix, LabelSet, LabeledRow};
pub use pipeline::{run, RunSummary};
