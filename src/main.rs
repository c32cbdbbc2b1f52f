//! confmat CLI
//!
//! # Usage
//!
//! ```bash
//! # Matrix from the `actual` and `predicted` columns
//! confmat labels.csv
//!
//! # Custom columns, per-condition metrics, JSON report
//! confmat labels.tsv --actual-column diagnosis --predicted-column model --metrics --format json
//! ```

use clap::Parser;
use confmat::cli::run_command;
use confmat::config::Cli;
use confmat_common::cli::styles;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", styles::error(&format!("[{}] {e}", e.code())));
            ExitCode::FAILURE
        }
    }
}
