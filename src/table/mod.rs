//! Spreadsheet I/O
//!
//! Input and output sheets are delimited text (comma, or tab for `.tsv`),
//! read and written with the `csv` crate.

pub mod header;
pub mod reader;
pub mod writer;

pub use header::{normalize_header, normalize_label, resolve_column};
pub use reader::{
    delimiter_for_path, read_labeled_rows, read_labeled_rows_from, LabeledData, MissingPolicy,
    ReadOptions,
};
pub use writer::{
    default_output_path, metrics_output_path, render_conditions, render_matrix, write_sheets,
    CORNER_HEADER,
};
